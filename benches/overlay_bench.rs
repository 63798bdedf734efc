use airmap_overlay::app::use_cases::layer_sync::sync_weather_layer;
use airmap_overlay::map::MarkerSpatialIndex;
use airmap_overlay::render::WeatherIconFactory;
use airmap_overlay::{compute_aqi, GeoPoint, InMemoryMap, MarkerRegistry, WeatherStationMarker};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

const CONDITIONS: [&str; 6] = ["light rain", "mưa to", "clear sky", "overcast", "thunderstorm", "fog"];

fn bench_aqi(c: &mut Criterion) {
    let concentrations: Vec<f64> = (0..1000).map(|i| i as f64 * 0.5).collect();

    c.bench_function("aqi_compute_1000", |b| {
        b.iter(|| {
            concentrations
                .iter()
                .filter_map(|c| compute_aqi(black_box(*c)))
                .map(|reading| reading.index)
                .sum::<i32>()
        })
    });
}

fn bench_weather_icons(c: &mut Criterion) {
    c.bench_function("weather_icon_cold", |b| {
        b.iter(|| {
            let mut factory = WeatherIconFactory::new(56);
            black_box(factory.icon_for(black_box("heavy rain"), Some(24.0)))
        })
    });

    let mut warm = WeatherIconFactory::new(56);
    warm.icon_for("heavy rain", Some(24.0));
    c.bench_function("weather_icon_cached", |b| {
        b.iter(|| black_box(warm.icon_for(black_box("heavy rain"), Some(24.0))))
    });
}

fn build_stations(count: usize) -> Vec<WeatherStationMarker> {
    (0..count)
        .map(|i| {
            let lat = 20.9 + (i % 100) as f64 * 0.002;
            let lon = 105.7 + (i / 100) as f64 * 0.002;
            WeatherStationMarker::new(
                GeoPoint::new(lat, lon),
                format!("Station {i}"),
                CONDITIONS[i % CONDITIONS.len()],
                Some(20.0 + (i % 15) as f64),
            )
        })
        .collect()
}

fn bench_layer_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("weather_layer_rebuild");

    for &count in &[100usize, 1_000usize] {
        let stations = build_stations(count);
        let mut map = InMemoryMap::new(1080, 1920);
        let mut registry = MarkerRegistry::new();
        let mut icons = WeatherIconFactory::new(56);

        group.bench_with_input(BenchmarkId::from_parameter(count), &stations, |b, stations| {
            b.iter(|| {
                let outcome = sync_weather_layer(&mut registry, &mut map, &mut icons, stations, true);
                black_box(outcome.added)
            })
        });
    }

    group.finish();
}

fn bench_tap_lookup(c: &mut Criterion) {
    let stations = build_stations(5_000);
    let mut map = InMemoryMap::new(1080, 1920);
    let mut registry = MarkerRegistry::new();
    let mut icons = WeatherIconFactory::new(56);
    sync_weather_layer(&mut registry, &mut map, &mut icons, &stations, true);
    let index = MarkerSpatialIndex::from_infos(registry.infos());
    let queries: Vec<GeoPoint> = (0..1000)
        .map(|i| GeoPoint::new(20.9 + (i % 97) as f64 * 0.002, 105.7 + (i % 53) as f64 * 0.002))
        .collect();

    c.bench_function("tap_lookup_within_50m", |b| {
        b.iter(|| {
            queries
                .iter()
                .map(|q| index.within_radius(black_box(*q), 50.0).len())
                .sum::<usize>()
        })
    });
}

criterion_group!(
    overlay_benches,
    bench_aqi,
    bench_weather_icons,
    bench_layer_rebuild,
    bench_tap_lookup
);
criterion_main!(overlay_benches);
