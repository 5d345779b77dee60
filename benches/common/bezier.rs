use criterion::{black_box, Criterion};
use piecewise_bezier::{sample_curve, sample_piecewise, Point};

use crate::common::samples::CURVES;

const SAMPLES: usize = 100;

pub fn eval(c: &mut Criterion) {
    let cubic = CURVES.cubic.curve();
    let segment = CURVES.chain.segment(0).unwrap();
    let single = CURVES.single.curve();

    c.bench_function("eval dynamic cubic", |b| {
        b.iter(|| black_box(cubic.castlejau_eval(black_box(0.5))))
    });
    c.bench_function("eval static cubic", |b| {
        b.iter(|| black_box(segment.castlejau_eval(black_box(0.5))))
    });
    c.bench_function("eval degree 18", |b| {
        b.iter(|| black_box(single.castlejau_eval(black_box(0.5))))
    });
}

pub fn sample(c: &mut Criterion) {
    c.bench_function("sample single curve", |b| {
        b.iter(|| {
            let points: Vec<Point> = sample_curve(&CURVES.single, SAMPLES).unwrap().collect();
            black_box(points)
        })
    });
    c.bench_function("sample piecewise", |b| {
        b.iter(|| {
            let points: Vec<Point> = sample_piecewise(&CURVES.chain, SAMPLES).unwrap().collect();
            black_box(points)
        })
    });
}
