use barovort::{Barotropic2D, Integrate, Params};
use criterion::Criterion;
use criterion::{criterion_group, criterion_main};

const SIZES: [usize; 3] = [64, 128, 256];

pub fn bench_barotropic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Barotropic2D");
    group.significance_level(0.1).sample_size(10);
    for n in SIZES.iter() {
        let params = Params::with_resolution(*n);
        let mut model = Barotropic2D::new(&params).unwrap();
        let name = format!("Size: {}", *n);
        group.bench_function(&name, |b| b.iter(|| model.update()));
    }
    group.finish();
}

criterion_group!(benches, bench_barotropic);
criterion_main!(benches);
