use criterion::{black_box, criterion_group, criterion_main, Criterion};
use minitensor::Tensor;
use rand::Rng;

fn random_matrix(rows: usize, cols: usize) -> Tensor {
    let mut rng = rand::rng();
    let data = (0..rows)
        .map(|_| (0..cols).map(|_| rng.random::<f32>()).collect())
        .collect();
    Tensor::from_rows(data).unwrap()
}

fn benchmark_from_rows(c: &mut Criterion) {
    let rows = vec![vec![1.0f32; 100]; 100];

    c.bench_function("from_rows", |b| {
        b.iter(|| {
            let _t = Tensor::from_rows(black_box(rows.clone())).unwrap();
        })
    });
}

fn benchmark_add(c: &mut Criterion) {
    let tensor1 = random_matrix(100, 100);
    let tensor2 = random_matrix(100, 100);

    c.bench_function("add", |b| {
        b.iter(|| {
            let _result = minitensor::add(black_box(&tensor1), black_box(&tensor2)).unwrap();
        })
    });
}

fn benchmark_add_scalar(c: &mut Criterion) {
    let tensor = random_matrix(100, 100);
    let scalar = Tensor::scalar(2.0);

    c.bench_function("add_scalar", |b| {
        b.iter(|| {
            let _result = minitensor::add(black_box(&scalar), black_box(&tensor)).unwrap();
        })
    });
}

fn benchmark_render(c: &mut Criterion) {
    let tensor = random_matrix(100, 100);

    c.bench_function("render", |b| {
        b.iter(|| {
            let _text = black_box(&tensor).render().unwrap();
        })
    });
}

criterion_group!(
    benches,
    benchmark_from_rows,
    benchmark_add,
    benchmark_add_scalar,
    benchmark_render
);
criterion_main!(benches);
