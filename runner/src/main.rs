// © 2023-2024 ETH Zurich
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// any later version.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{arg, ArgMatches, Command};
use model::base_types::Verbosity;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

fn cli() -> Command {
    Command::new("single_run")
        .about("Plans the delivery schedule of a truck and its drones")
        .arg(
            arg!(<INSTANCE> "Path to the instance json file")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(-o --output [OUTPUT] "Output json file (default: output/output_<instance>)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(arg!(-v --verbose ... "Log every segment and rejected swap"))
        .arg(arg!(-q --quiet "Only log warnings and errors").conflicts_with("verbose"))
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    let verbosity = verbosity_of(&matches);
    init_logging(verbosity);

    let path = matches
        .get_one::<PathBuf>("INSTANCE")
        .ok_or_else(|| anyhow!("missing instance path"))?;
    let input_data = fs::read_to_string(path)
        .with_context(|| format!("could not read instance {}", path.display()))?;
    let input_data: serde_json::Value = serde_json::from_str(&input_data)
        .with_context(|| format!("{} is not valid json", path.display()))?;
    if verbosity.summary() {
        info!(instance = %path.display(), "run");
    }

    let output = runner::solve_instance(input_data, verbosity)?;

    let output_path = match matches.get_one::<PathBuf>("output") {
        Some(output_path) => output_path.clone(),
        None => ensure_output_path(path, "output")?,
    };
    let file = File::create(&output_path)
        .with_context(|| format!("could not create {}", output_path.display()))?;
    serde_json::to_writer_pretty(file, &output)?;
    if verbosity.summary() {
        info!(output = %output_path.display(), "schedule written");
    }
    Ok(())
}

fn verbosity_of(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_count("verbose") > 0 {
        Verbosity::Detailed
    } else {
        Verbosity::Normal
    }
}

fn init_logging(verbosity: Verbosity) {
    let default_level = match verbosity {
        Verbosity::Quiet => "warn",
        Verbosity::Normal => "info",
        Verbosity::Detailed => "debug",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

/// output_dir/output_<file name of the instance>, creating the directory if needed.
fn ensure_output_path(input_path: &Path, output_dir_name: &str) -> Result<PathBuf> {
    let file_name = input_path
        .file_name()
        .ok_or_else(|| anyhow!("{} has no file name", input_path.display()))?
        .to_string_lossy();
    let output_path = Path::new(output_dir_name).join(format!("output_{}", file_name));
    if let Some(parent_dir) = output_path.parent() {
        fs::create_dir_all(parent_dir)?;
    }
    Ok(output_path)
}
