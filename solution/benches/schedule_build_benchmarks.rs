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

use criterion::{criterion_group, criterion_main, Criterion};
use model::base_types::Verbosity;
use model::config::LaunchPolicy;
use solution::test_utilities::{default_assignment, default_schedule, init_test_data};
use solution::Schedule;
use std::sync::Arc;

pub fn schedule_build_benchmarks(c: &mut Criterion) {
    let d = init_test_data();
    c.bench_function("build_segment_start", |b| {
        b.iter(|| {
            Schedule::build(
                d.tour.clone(),
                default_assignment(&d),
                d.network.clone(),
                d.config.clone(),
                Verbosity::Quiet,
            )
            .unwrap();
        })
    });

    let best_launch_node = Arc::new(
        (*d.config)
            .clone()
            .set_launch_policy(LaunchPolicy::BestLaunchNode),
    );
    c.bench_function("build_best_launch_node", |b| {
        b.iter(|| {
            Schedule::build(
                d.tour.clone(),
                default_assignment(&d),
                d.network.clone(),
                best_launch_node.clone(),
                Verbosity::Quiet,
            )
            .unwrap();
        })
    });

    let schedule = default_schedule(&d);
    c.bench_function("rebuild_with_swap", |b| {
        b.iter(|| {
            schedule
                .with_assignment(schedule.assignment().swap(d.n4, d.n5), Verbosity::Quiet)
                .unwrap();
        })
    });

    c.bench_function("check_feasibility", |b| {
        b.iter(|| schedule.check_feasibility())
    });
}

criterion_group!(benches, schedule_build_benchmarks);
criterion_main!(benches);
