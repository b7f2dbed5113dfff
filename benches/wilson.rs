use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wmaze::{
    algorithms::{DepthFirstSearch, Generator, MazeGenerator, Params, Wilson},
    dims::Dims3D,
    grid::make_grid,
    progress::ProgressHandle,
};

const DIMS: Dims3D = Dims3D(30, 30, 10);

fn bench_generator(
    c: &mut Criterion,
    name: &str,
    generator: Arc<dyn MazeGenerator<usize>>,
    params: Params,
) {
    let grid = make_grid(DIMS);
    let generator = Generator::new(generator, params).with_seed(Some(0));

    c.bench_function(name, |b| {
        b.iter(|| {
            generator
                .generate(black_box(&grid), ProgressHandle::new())
                .unwrap()
        })
    });
}

pub fn wilson_tracked(c: &mut Criterion) {
    bench_generator(c, "wilson_tracked", Arc::new(Wilson), Params::default());
}

pub fn wilson_rejection_sampling(c: &mut Criterion) {
    let params = Params::new().with("rejection_sampling", true);
    bench_generator(c, "wilson_rejection_sampling", Arc::new(Wilson), params);
}

pub fn depth_first_search(c: &mut Criterion) {
    bench_generator(c, "depth_first_search", Arc::new(DepthFirstSearch), Params::default());
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = wilson_tracked, wilson_rejection_sampling, depth_first_search}
criterion_main!(benches);
