use criterion::{criterion_group, criterion_main, Criterion};
use nalgebra::Vector3;
use std::hint::black_box;

use lattice_templates::templates::template_data;
use lattice_templates::{canonical_form_coloured, graph_degree, initialize_global, orient_facets};

/// Benchmark the canonical-form search on the largest and the most
/// symmetric facet graphs, plus the full one-shot initialization path.
fn bench_canonical_forms(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonical_forms");

    // Diamond cubic: 16 vertices, 28 facets, two colour classes
    let dcub_points: Vec<Vector3<f64>> = template_data::POINTS_DCUB
        .iter()
        .map(|p| Vector3::new(p[0], p[1], p[2]))
        .collect();
    let mut dcub_facets = template_data::FACETS_DCUB.to_vec();
    orient_facets(&dcub_points[1..], &mut dcub_facets, &Vector3::zeros()).unwrap();
    let (dcub_degrees, _) = graph_degree(&dcub_facets, 16, 7).unwrap();
    let dcub_colours: [u8; 16] = [1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];

    group.bench_function("dcub_canonical_form", |b| {
        b.iter(|| {
            canonical_form_coloured(
                black_box(&dcub_facets),
                16,
                &dcub_degrees,
                &dcub_colours,
            )
            .unwrap()
        })
    });

    // Icosahedron: vertex-transitive, worst case for tie-breaking
    let ico_points: Vec<Vector3<f64>> = template_data::POINTS_ICO
        .iter()
        .map(|p| Vector3::new(p[0], p[1], p[2]))
        .collect();
    let mut ico_facets = template_data::FACETS_ICO.to_vec();
    orient_facets(&ico_points[1..], &mut ico_facets, &Vector3::zeros()).unwrap();
    let (ico_degrees, _) = graph_degree(&ico_facets, 12, 5).unwrap();
    let ico_colours = [0u8; 12];

    group.bench_function("ico_canonical_form", |b| {
        b.iter(|| {
            canonical_form_coloured(black_box(&ico_facets), 12, &ico_degrees, &ico_colours)
                .unwrap()
        })
    });

    // Steady-state cost of the idempotent entry point
    initialize_global().unwrap();
    group.bench_function("initialize_global_ready", |b| {
        b.iter(|| initialize_global().unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_canonical_forms);
criterion_main!(benches);
