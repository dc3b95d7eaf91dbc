use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tile_merge::{collapse_line, Direction, Session};

fn bench_collapse_line(c: &mut Criterion) {
    let lines: [[u32; 4]; 4] = [[2, 2, 2, 2], [0, 4, 0, 4], [2, 4, 8, 16], [8, 0, 0, 8]];
    c.bench_function("collapse_line", |b| {
        b.iter(|| {
            for line in &lines {
                black_box(collapse_line(black_box(line)));
            }
        })
    });
}

fn bench_apply_move(c: &mut Criterion) {
    c.bench_function("apply_move_cycle", |b| {
        b.iter_batched(
            || Session::with_seed(42),
            |mut session| {
                for dir in Direction::ALL.iter().cycle().take(64) {
                    black_box(session.apply_move(*dir));
                }
                session
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_collapse_line, bench_apply_move);
criterion_main!(benches);
