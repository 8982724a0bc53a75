use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dimension_core::ffi::{data_type_name, DimensionHandle};
use dimension_core::{DataType, Dimension, DimensionId};

fn benchmark_native_name_lookup(c: &mut Criterion) {
    c.bench_function("native_name_lookup", |b| {
        b.iter(|| black_box(DataType::Double).name())
    });
}

fn benchmark_binding_name_lookup(c: &mut Criterion) {
    c.bench_function("binding_name_lookup", |b| {
        b.iter(|| data_type_name(black_box(DataType::Double)))
    });
}

fn benchmark_dimension_construction(c: &mut Criterion) {
    c.bench_function("dimension_new", |b| {
        b.iter(|| Dimension::new(black_box(DimensionId::BlueU16)))
    });
    c.bench_function("dimension_handle_new", |b| {
        b.iter(|| DimensionHandle::new(black_box(DimensionId::BlueU16)))
    });
}

criterion_group!(
    benches,
    benchmark_native_name_lookup,
    benchmark_binding_name_lookup,
    benchmark_dimension_construction
);
criterion_main!(benches);
