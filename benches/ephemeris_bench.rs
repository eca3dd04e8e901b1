use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jyotish::almanac::find_crossing;
use jyotish::matching::{ashta_koota, guna_milan};
use jyotish::precessionlib::ayanamsa;
use jyotish::{Body, Ephemeris, GeoLocation, Instant, Nakshatra, SegmentKind, Sign};

fn ephemeris_bench(c: &mut Criterion) {
    let ephemeris = Ephemeris::new();
    let t = Instant::from_jd(2_460_000.5);
    let ayan = ayanamsa(t);

    let mut group = c.benchmark_group("ephemeris");
    for body in [Body::Sun, Body::Moon, Body::Jupiter, Body::Rahu] {
        group.bench_function(body.name(), |b| {
            b.iter(|| ephemeris.position(black_box(t), body, ayan))
        });
    }
    group.bench_function("all_positions", |b| {
        b.iter(|| ephemeris.all_positions(black_box(t), ayan))
    });
    group.finish();
}

fn solver_bench(c: &mut Criterion) {
    let t = Instant::from_jd(2_460_000.5);

    let mut group = c.benchmark_group("find_crossing");
    for kind in [SegmentKind::Tithi, SegmentKind::Nakshatra, SegmentKind::Yoga] {
        group.bench_function(format!("{kind:?}"), |b| {
            b.iter(|| find_crossing(black_box(t), 5.75, kind))
        });
    }
    group.finish();
}

fn chart_bench(c: &mut Criterion) {
    let t = Instant::from_jd(2_448_057.77);
    let location = GeoLocation::new(27.7172, 85.324, 5.75);

    c.bench_function("birth_chart", |b| {
        b.iter(|| jyotish::BirthChart::compute(black_box(t), location))
    });

    let chart = jyotish::BirthChart::compute(t, location);
    c.bench_function("vimshottari", |b| b.iter(|| black_box(&chart).vimshottari()));

    let a = ashta_koota(Sign::Taurus, Nakshatra::Rohini, Sign::Leo);
    let bride = ashta_koota(Sign::Scorpio, Nakshatra::Anuradha, Sign::Cancer);
    c.bench_function("guna_milan", |b| {
        b.iter(|| guna_milan(black_box(&a), black_box(&bride)))
    });
}

criterion_group!(benches, ephemeris_bench, solver_bench, chart_bench);
criterion_main!(benches);
