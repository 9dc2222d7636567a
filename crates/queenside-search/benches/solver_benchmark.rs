// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use queenside_model::board::Board;
use queenside_search::backtrack::BacktrackSolver;
use queenside_search::monitor::no_op::NoOperationMonitor;
use std::hint::black_box;

/// Expected solution counts for the benchmarked sizes, used to keep the
/// benchmark honest about what it measures.
fn expected_count(size: usize) -> u64 {
    match size {
        6 => 4,
        8 => 92,
        10 => 724,
        _ => panic!("no reference count for size {}", size),
    }
}

fn bench_full_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("backtrack");

    for size in [6usize, 8, 10] {
        let board = Board::new(size);
        let mut solver = BacktrackSolver::<u8>::preallocated(size);

        group.bench_with_input(BenchmarkId::new("enumerate", size), &board, |b, board| {
            b.iter(|| {
                let outcome = solver
                    .solve(black_box(board), NoOperationMonitor::new())
                    .expect("board fits the column type");
                assert_eq!(outcome.solutions_found(), expected_count(size));
                black_box(outcome.solutions_found())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_full_enumeration);
criterion_main!(benches);
