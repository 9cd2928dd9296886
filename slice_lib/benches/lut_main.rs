use std::sync::Arc;

use common::*;

mod common;

fn build_table(c: &mut Criterion) {
    let mut builder = LookupTableBuilder::new();
    builder.set_color_function(Some(Arc::new(ct_color())));
    builder.set_opacity_function(Some(Arc::new(ct_opacity())));
    builder.set_table_size(4096).unwrap();

    c.bench_function("build 4096 entries", |b| b.iter(|| builder.build()));
}

fn map_image(c: &mut Criterion) {
    let image = get_image();
    let mut mapper = ImageMapToRgba::new();
    mapper.set_color_function(Some(Arc::new(ct_color())));
    mapper.set_opacity_function(Some(Arc::new(ct_opacity())));

    c.bench_function("map 512x512", |b| b.iter(|| mapper.map(black_box(&image))));
}

fn reslice(c: &mut Criterion) {
    let volume = get_volume();
    let reslice = Reslice::axial(&volume, 64.5);

    c.bench_function("axial reslice 128", |b| {
        b.iter(|| reslice.apply(black_box(&volume)))
    });
}

criterion_group! {
    name = lut;
    config = Criterion::default().significance_level(0.1).sample_size(10);
    targets = build_table, map_image
}

criterion_group! {
    name = slicing;
    config = Criterion::default().significance_level(0.1).sample_size(10);
    targets = reslice
}

criterion_main!(lut, slicing);
