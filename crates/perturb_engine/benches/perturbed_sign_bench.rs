//! Perturbed-sign benchmarks: the level-1 integer fast path (the case
//! that decides almost every real degeneracy) versus a predicate built
//! to force escalation into the rational solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num_bigint::BigInt;

use perturb_engine::{perturbation, perturbed_sign, Point};

/// Signed doubled triangle area, degenerate on collinear inputs.
fn area2(z: &[[i64; 2]]) -> BigInt {
    let ux = BigInt::from(z[1][0] - z[0][0]);
    let uy = BigInt::from(z[1][1] - z[0][1]);
    let vx = BigInt::from(z[2][0] - z[0][0]);
    let vy = BigInt::from(z[2][1] - z[0][1]);
    ux * vy - uy * vx
}

fn bench_round1_fast_path(c: &mut Criterion) {
    let points = [
        Point::new(0, [0i64, 0]),
        Point::new(1, [1 << 12, 1 << 12]),
        Point::new(2, [1 << 13, 1 << 13]),
    ];
    c.bench_function("perturbed_sign/collinear_area_round1", |b| {
        b.iter(|| perturbed_sign(area2, 2, black_box(&points)).unwrap())
    });
}

fn bench_escalation(c: &mut Criterion) {
    // det(X[0], Y_{1,idx})^2 vanishes along the whole level-1
    // perturbation, so every call pays for a level-2 interpolation.
    let idx = 5u64;
    let y1 = perturbation::<2>(1, idx);
    let pred = move |z: &[[i64; 2]]| {
        let d = BigInt::from(z[0][0]) * y1[1] - BigInt::from(z[0][1]) * y1[0];
        &d * &d
    };
    let points = [Point::new(idx, [0i64, 0])];
    c.bench_function("perturbed_sign/nasty_square_escalation", |b| {
        b.iter(|| perturbed_sign(pred, 2, black_box(&points)).unwrap())
    });
}

criterion_group!(benches, bench_round1_fast_path, bench_escalation);
criterion_main!(benches);
