use criterion::{black_box, criterion_group, criterion_main, Criterion};
use minimatrix::{identity, Matrix};

pub fn prod(c: &mut Criterion) {
    let a = black_box(Matrix::from_data(2, 2, vec![4., 7., 2., 6.]));
    let b = black_box(Matrix::from_data(2, 2, vec![1., 2., 3., 4.]));

    c.bench_function("prod_2x2", |bch| bch.iter(|| a.prod(&b)));
}

pub fn inverse(c: &mut Criterion) {
    let a = black_box(Matrix::from_data(2, 2, vec![4., 7., 2., 6.]));

    c.bench_function("inverse_2x2", |bch| bch.iter(|| a.inverse()));
}

pub fn transpose(c: &mut Criterion) {
    let a = black_box(Matrix::from_data(2, 2, vec![4., 7., 2., 6.]));

    c.bench_function("transpose_2x2", |bch| bch.iter(|| a.transpose()));
}

pub fn add(c: &mut Criterion) {
    let a = black_box(Matrix::from_data(2, 2, vec![4., 7., 2., 6.]));
    let b = black_box(identity(2));

    c.bench_function("add_2x2", |bch| bch.iter(|| a.add(&b)));
}

criterion_group!(benches, prod, inverse, transpose, add);
criterion_main!(benches);
