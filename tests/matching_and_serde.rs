//! Chart matching and the JSON shape of output records

use jyotish::almanac::{find_crossing, SegmentKind};
use jyotish::dasha::CharaPeriod;
use jyotish::matching::{ashta_koota, guna_milan, MatchConclusion, MAX_GUNA};
use jyotish::zodiac::{ALL_NAKSHATRAS, ALL_SIGNS};
use jyotish::{BirthChart, GeoLocation, Instant};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use serde_json::Value;

fn chart(year: i32, month: u32, day: u32, hour: u32) -> BirthChart {
    let t = Instant::utc((year, month, day, hour, 0, 0.0)).unwrap();
    BirthChart::compute(t, GeoLocation::new(27.7172, 85.324, 5.75))
}

#[test]
fn guna_milan_bounded_for_random_pairs() {
    let mut rng = StdRng::seed_from_u64(36);
    for _ in 0..500 {
        let a = ashta_koota(
            *ALL_SIGNS.choose(&mut rng).unwrap(),
            *ALL_NAKSHATRAS.choose(&mut rng).unwrap(),
            *ALL_SIGNS.choose(&mut rng).unwrap(),
        );
        let b = ashta_koota(
            *ALL_SIGNS.choose(&mut rng).unwrap(),
            *ALL_NAKSHATRAS.choose(&mut rng).unwrap(),
            *ALL_SIGNS.choose(&mut rng).unwrap(),
        );
        let (score, conclusion) = guna_milan(&a, &b);
        assert!(score.total >= 0.0 && score.total <= MAX_GUNA);
        assert_eq!(conclusion, MatchConclusion::from_total(score.total));
        if a.nadi == b.nadi {
            assert_eq!(score.nadi, 0.0);
        } else {
            assert_eq!(score.nadi, 8.0);
        }
    }
}

#[test]
fn charts_can_be_matched() {
    let groom = chart(1988, 3, 21, 2);
    let bride = chart(1991, 9, 9, 11);
    let (score, conclusion) = guna_milan(&groom.ashta_koota(), &bride.ashta_koota());
    assert!(score.total <= MAX_GUNA);
    assert!(!conclusion.label().is_empty());
}

#[test]
fn birth_chart_json_shape() {
    let c = chart(1990, 6, 15, 6);
    let json = serde_json::to_value(&c).unwrap();
    for key in ["instant", "location", "ayanamsa", "planets", "ascendant", "houses"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    let planets = json["planets"].as_array().unwrap();
    assert_eq!(planets.len(), 9);
    assert_eq!(planets[0]["body"], Value::from("Sun"));
    for key in ["longitude", "latitude", "speed", "sign", "degrees_in_sign", "retrograde", "nakshatra", "pada"] {
        assert!(planets[1].get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["houses"].as_array().unwrap().len(), 12);

    let back: BirthChart = serde_json::from_value(json).unwrap();
    assert_eq!(back.planets.len(), 9);
    assert_eq!(back.houses[3].number, 4);
}

#[test]
fn dasha_and_span_json_shape() {
    let c = chart(1990, 6, 15, 6);
    let json = serde_json::to_value(c.vimshottari()).unwrap();
    let first = &json[0];
    assert!(first["lord"].get("Graha").is_some());
    assert_eq!(first["sub_periods"].as_array().unwrap().len(), 9);

    let chara = c.jaimini_chara();
    let json = serde_json::to_value(&chara).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 12);
    if let CharaPeriod::Resolved { .. } = &chara[0] {
        assert!(json[0].get("Resolved").is_some());
    }

    let span = find_crossing(c.instant, 5.75, SegmentKind::Tithi);
    let json = serde_json::to_value(&span).unwrap();
    assert_eq!(json["kind"], Value::from("Tithi"));
    assert!(json["start"]["local"].get("hour").is_some());

    let (score, conclusion) = guna_milan(&c.ashta_koota(), &c.ashta_koota());
    let json = serde_json::to_value(score).unwrap();
    assert!(json["total"].is_number());
    assert_eq!(serde_json::to_value(conclusion).unwrap(), Value::from("Excellent"));
}
