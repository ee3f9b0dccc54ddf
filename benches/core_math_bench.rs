use chart_compose::api::ChartDescriptor;
use chart_compose::core::{
    BandScale, ChartSpec, DataEntry, Dataset, Margins, MeasureValues, Orientation, ValueScale,
    Viewport,
};
use chart_compose::{CombinationChart, CompositionConfig, CompositionStore};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn generated_dataset(len: usize) -> Dataset {
    Dataset::from_entries((0..len).map(|i| {
        let t = i as f64;
        DataEntry::new(
            format!("c{i}"),
            MeasureValues::new()
                .with("x", (t * 0.37).sin() * 100.0)
                .with("y", t % 17.0)
                .with("z", t % 5.0),
        )
    }))
    .expect("valid generated dataset")
}

fn bench_value_scale_round_trip(c: &mut Criterion) {
    let scale = ValueScale::niced((-137.0, 9_871.0), (1080.0, 0.0)).expect("valid scale");

    c.bench_function("value_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.value_to_pixel(black_box(4_321.123)).expect("to pixel");
            let _ = scale.pixel_to_value(px).expect("from pixel");
        })
    });
}

fn bench_band_scale_1k(c: &mut Criterion) {
    let keys: Vec<String> = (0..1_000).map(|i| format!("c{i}")).collect();

    c.bench_function("band_scale_build_1k", |b| {
        b.iter(|| {
            let _ = BandScale::new(black_box(&keys).iter().cloned(), (0.0, 1920.0), 0.2)
                .expect("band scale");
        })
    });
}

fn bench_lane_allocation_64(c: &mut Criterion) {
    let mut store = CompositionStore::new(Orientation::Vertical, 0.2).expect("store");
    store.set_data(generated_dataset(50));
    store
        .set_viewport(Viewport::new(1920, 1080))
        .expect("viewport");
    for i in 0..64 {
        let descriptor = if i % 3 == 0 {
            ChartDescriptor::overlay()
        } else {
            ChartDescriptor::exclusive()
        };
        let id = store.register_chart(descriptor);
        store
            .report_extent(id, -(i as f64), i as f64 * 10.0)
            .expect("report");
    }

    c.bench_function("lane_allocation_64_charts", |b| {
        b.iter(|| {
            let _ = black_box(&store).lanes().expect("lanes");
        })
    });
}

fn bench_chart_frames_1k(c: &mut Criterion) {
    let config = CompositionConfig::builder()
        .set_margins(Margins::uniform(40.0))
        .add_chart(ChartSpec::bar("x", "#1f77b4"))
        .add_chart(ChartSpec::stacked_bar([("y", "#ff7f0e"), ("z", "#2ca02c")]))
        .add_chart(ChartSpec::area("x", "#d62728"))
        .build()
        .expect("config");
    let mut chart = CombinationChart::new(config).expect("chart");
    chart.set_data(generated_dataset(1_000)).expect("data");
    chart
        .set_container_size(Viewport::new(1920, 1080))
        .expect("container size");

    c.bench_function("chart_frames_1k_categories", |b| {
        b.iter(|| {
            let _ = black_box(&chart)
                .chart_frames()
                .expect("projection should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_value_scale_round_trip,
    bench_band_scale_1k,
    bench_lane_allocation_64,
    bench_chart_frames_1k
);
criterion_main!(benches);
