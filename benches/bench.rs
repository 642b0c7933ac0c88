// Criterion benchmarks for the Tot Trot catalog engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tottrot_catalog::core::{engine::filter_catalog, haversine_distance, CatalogEngine};
use tottrot_catalog::models::{Catalog, Coordinates, FilterOptions, FilterSpec, Location};

const REGIONS: [&str; 5] = ["East Bay", "Peninsula", "South Bay", "San Francisco", "North Bay"];
const DURATIONS: [&str; 3] = ["quick", "halfDay", "fullDay"];
const INTERESTS: [&str; 4] = ["animals", "art", "science", "play"];

fn create_location(id: usize) -> Location {
    Location {
        id: id as u32,
        name: format!("Location {}", id),
        address: format!("{} Main St", id),
        city: "Oakland".to_string(),
        region: REGIONS[id % REGIONS.len()].to_string(),
        coordinates: if id % 7 == 0 {
            None
        } else {
            Some(Coordinates {
                latitude: 37.3 + (id as f64 * 0.001) % 0.6,
                longitude: -122.5 + (id as f64 * 0.001) % 0.4,
            })
        },
        cost: "Free".to_string(),
        duration: DURATIONS[id % DURATIONS.len()].to_string(),
        age_ranges: vec!["toddler".to_string(), "preschool".to_string()],
        interests: vec![INTERESTS[id % INTERESTS.len()].to_string()],
        parent_quotes: vec![],
        insider_tips: None,
        description: None,
        long_description: None,
    }
}

fn create_catalog(size: usize) -> Catalog {
    Catalog {
        locations: (0..size).map(create_location).collect(),
        filter_options: FilterOptions::default(),
    }
}

fn create_spec() -> FilterSpec {
    FilterSpec {
        region: Some("East Bay".to_string()),
        interests: vec!["animals".to_string(), "art".to_string()],
        ..Default::default()
    }
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(37.8081),
                black_box(-122.2603),
                black_box(37.4289),
                black_box(-122.1076),
            )
        });
    });
}

fn bench_filter(c: &mut Criterion) {
    let spec = create_spec();
    let mut group = c.benchmark_group("filter");

    for size in [10, 50, 100, 500].iter() {
        let catalog = create_catalog(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| filter_catalog(black_box(&catalog.locations), black_box(&spec)));
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let spec = create_spec();
    let observer = Coordinates {
        latitude: 37.8081,
        longitude: -122.2603,
    };
    let mut group = c.benchmark_group("search");

    for size in [10, 50, 100, 500].iter() {
        let engine = CatalogEngine::new(create_catalog(*size));

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| engine.search(black_box(&spec), black_box(Some(observer))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_haversine_distance, bench_filter, bench_search);
criterion_main!(benches);
