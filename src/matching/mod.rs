//! Ashta-Koota compatibility matching
//!
//! Each chart is reduced to a handful of categories read off its Moon sign,
//! Moon nakshatra and ascendant ([`AshtaKootaValues`]). Two such records are
//! then scored on eight factors worth 1 to 8 points, 36 in all.
//!
//! The scores are directional in two places (Varna and Vasya): chart A is
//! the groom's, chart B the bride's.

mod tables;

use crate::planetlib::Body;
use crate::zodiac::{Nakshatra, Sign};
use serde::{Deserialize, Serialize};

/// Highest possible Guna Milan total
pub const MAX_GUNA: f64 = 36.0;

/// Caste category of a Moon sign, ordered lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Varna {
    Shudra,
    Vaishya,
    Kshatriya,
    Brahmin,
}

/// Creature class of a Moon sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vasya {
    Chatushpada,
    Manava,
    Jalachara,
    Vanachara,
    Keeta,
}

/// Animal symbol of a nakshatra
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Yoni {
    Horse,
    Elephant,
    Sheep,
    Serpent,
    Dog,
    Cat,
    Rat,
    Cow,
    Buffalo,
    Tiger,
    Deer,
    Monkey,
    Mongoose,
    Lion,
}

/// Temperament of a nakshatra
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

/// Constitution of a nakshatra
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nadi {
    Adi,
    Madhya,
    Antya,
}

/// Element of a sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tatva {
    Agni,
    Prithvi,
    Vayu,
    Jala,
}

/// Metal of a sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paya {
    Swarna,
    Rajat,
    Tamra,
    Loha,
}

/// Matching categories of one chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AshtaKootaValues {
    pub moon_sign: Sign,
    pub moon_nakshatra: Nakshatra,
    pub varna: Varna,
    pub vasya: Vasya,
    pub yoni: Yoni,
    pub gana: Gana,
    pub nadi: Nadi,
    pub tatva: Tatva,
    pub paya: Paya,
    pub sign_lord: Body,
    pub ascendant_lord: Body,
}

/// Classify a chart from its Moon sign, Moon nakshatra and ascendant sign
pub fn ashta_koota(moon_sign: Sign, moon_nakshatra: Nakshatra, ascendant_sign: Sign) -> AshtaKootaValues {
    AshtaKootaValues {
        moon_sign,
        moon_nakshatra,
        varna: tables::varna(moon_sign),
        vasya: tables::vasya(moon_sign),
        yoni: tables::yoni(moon_nakshatra),
        gana: tables::gana(moon_nakshatra),
        nadi: tables::nadi(moon_nakshatra),
        tatva: tables::tatva(moon_sign),
        paya: tables::paya(moon_sign),
        sign_lord: moon_sign.lord(),
        ascendant_lord: ascendant_sign.lord(),
    }
}

/// The eight factor scores and their total
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GunaMilanScore {
    pub varna: f64,
    pub vasya: f64,
    pub tara: f64,
    pub yoni: f64,
    pub graha_maitri: f64,
    pub gana: f64,
    pub bhakoot: f64,
    pub nadi: f64,
    /// Sum of the factors, rounded to the nearest half point
    pub total: f64,
}

/// Verdict band for a Guna Milan total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchConclusion {
    Excellent,
    Good,
    Average,
    Poor,
}

impl MatchConclusion {
    pub fn from_total(total: f64) -> Self {
        if total >= 28.0 {
            MatchConclusion::Excellent
        } else if total >= 24.0 {
            MatchConclusion::Good
        } else if total >= 18.0 {
            MatchConclusion::Average
        } else {
            MatchConclusion::Poor
        }
    }

    /// Conventional label
    pub fn label(self) -> &'static str {
        match self {
            MatchConclusion::Excellent => "अति उत्तम",
            MatchConclusion::Good => "उत्तम",
            MatchConclusion::Average => "मध्यम",
            MatchConclusion::Poor => "अधम",
        }
    }
}

impl std::fmt::Display for MatchConclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

fn varna_score(a: Varna, b: Varna) -> f64 {
    if a >= b {
        1.0
    } else {
        0.0
    }
}

fn vasya_score(a: Vasya, b: Vasya) -> f64 {
    tables::VASYA_POINTS[a as usize][b as usize]
}

/// Tara: count from B's nakshatra to A's, reduced mod 9
fn tara_score(a: Nakshatra, b: Nakshatra) -> f64 {
    let count = (a.index0() + 27 - b.index0()) % 27 + 1;
    match count % 9 {
        3 | 5 | 7 => 1.5,
        _ => 3.0,
    }
}

fn yoni_score(a: Yoni, b: Yoni) -> f64 {
    tables::YONI_POINTS[a as usize][b as usize] as f64
}

fn maitri_score(a: Body, b: Body) -> f64 {
    tables::maitri_points(tables::natural_relation(a, b), tables::natural_relation(b, a))
}

fn gana_score(a: Gana, b: Gana) -> f64 {
    use Gana::*;
    match (a, b) {
        _ if a == b => 6.0,
        (Deva, Manushya) | (Manushya, Deva) => 6.0,
        (Deva, Rakshasa) | (Rakshasa, Deva) => 1.0,
        _ => 0.0,
    }
}

fn bhakoot_score(a: Sign, b: Sign) -> f64 {
    tables::bhakoot_points(b.forward_distance(a) + 1)
}

fn nadi_score(a: Nadi, b: Nadi) -> f64 {
    if a == b {
        0.0
    } else {
        8.0
    }
}

/// Score chart `a` (groom) against chart `b` (bride)
pub fn guna_milan(a: &AshtaKootaValues, b: &AshtaKootaValues) -> (GunaMilanScore, MatchConclusion) {
    let mut score = GunaMilanScore {
        varna: varna_score(a.varna, b.varna),
        vasya: vasya_score(a.vasya, b.vasya),
        tara: tara_score(a.moon_nakshatra, b.moon_nakshatra),
        yoni: yoni_score(a.yoni, b.yoni),
        graha_maitri: maitri_score(a.sign_lord, b.sign_lord),
        gana: gana_score(a.gana, b.gana),
        bhakoot: bhakoot_score(a.moon_sign, b.moon_sign),
        nadi: nadi_score(a.nadi, b.nadi),
        total: 0.0,
    };
    let sum = score.varna
        + score.vasya
        + score.tara
        + score.yoni
        + score.graha_maitri
        + score.gana
        + score.bhakoot
        + score.nadi;
    score.total = ((sum * 2.0).round() / 2.0).clamp(0.0, MAX_GUNA);
    log::trace!("Guna Milan {:?} vs {:?}: {}", a.moon_nakshatra, b.moon_nakshatra, score.total);
    (score, MatchConclusion::from_total(score.total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zodiac::{ALL_NAKSHATRAS, ALL_SIGNS};
    use rstest::rstest;

    fn values(sign: Sign, nak: Nakshatra) -> AshtaKootaValues {
        ashta_koota(sign, nak, sign)
    }

    #[test]
    fn test_classification() {
        let v = ashta_koota(Sign::Aries, Nakshatra::Ashwini, Sign::Cancer);
        assert_eq!(v.varna, Varna::Kshatriya);
        assert_eq!(v.vasya, Vasya::Chatushpada);
        assert_eq!(v.yoni, Yoni::Horse);
        assert_eq!(v.gana, Gana::Deva);
        assert_eq!(v.nadi, Nadi::Adi);
        assert_eq!(v.tatva, Tatva::Agni);
        assert_eq!(v.paya, Paya::Swarna);
        assert_eq!(v.sign_lord, Body::Mars);
        assert_eq!(v.ascendant_lord, Body::Moon);
    }

    #[test]
    fn test_identical_charts() {
        // Same nadi costs 8; everything else is at its best
        let v = values(Sign::Taurus, Nakshatra::Rohini);
        let (score, conclusion) = guna_milan(&v, &v);
        assert_eq!(score.nadi, 0.0);
        assert_eq!(score.varna, 1.0);
        assert_eq!(score.vasya, 2.0);
        assert_eq!(score.tara, 3.0);
        assert_eq!(score.yoni, 4.0);
        assert_eq!(score.graha_maitri, 5.0);
        assert_eq!(score.gana, 6.0);
        assert_eq!(score.bhakoot, 7.0);
        assert_eq!(score.total, 28.0);
        assert_eq!(conclusion, MatchConclusion::Excellent);
    }

    #[test]
    fn test_bounds_over_all_pairs() {
        let samples: Vec<AshtaKootaValues> = ALL_SIGNS
            .iter()
            .flat_map(|&s| ALL_NAKSHATRAS.iter().step_by(4).map(move |&n| values(s, n)))
            .collect();
        for a in &samples {
            for b in &samples {
                let (score, conclusion) = guna_milan(a, b);
                assert!((0.0..=MAX_GUNA).contains(&score.total));
                assert_eq!((score.total * 2.0).fract(), 0.0);
                assert_eq!(conclusion, MatchConclusion::from_total(score.total));
            }
        }
    }

    #[test]
    fn test_nadi_worth_exactly_eight() {
        // Rohini (Antya) and Mrigashira (Madhya) share Taurus
        let a = values(Sign::Taurus, Nakshatra::Rohini);
        let b_same = values(Sign::Taurus, Nakshatra::Krittika);
        let b_diff = values(Sign::Taurus, Nakshatra::Mrigashira);
        assert_eq!(b_same.nadi, a.nadi);
        assert_ne!(b_diff.nadi, a.nadi);
        assert_eq!(guna_milan(&a, &b_diff).0.nadi - guna_milan(&a, &b_same).0.nadi, 8.0);
    }

    #[rstest]
    #[case(30.0, MatchConclusion::Excellent, "अति उत्तम")]
    #[case(24.0, MatchConclusion::Good, "उत्तम")]
    #[case(20.0, MatchConclusion::Average, "मध्यम")]
    #[case(10.0, MatchConclusion::Poor, "अधम")]
    fn test_conclusion_tiers(#[case] total: f64, #[case] expected: MatchConclusion, #[case] label: &str) {
        let c = MatchConclusion::from_total(total);
        assert_eq!(c, expected);
        assert_eq!(c.to_string(), label);
    }

    #[rstest]
    #[case(Nakshatra::Ashwini, Nakshatra::Ashwini, 3.0)]
    #[case(Nakshatra::Krittika, Nakshatra::Ashwini, 1.5)]
    #[case(Nakshatra::Rohini, Nakshatra::Ashwini, 3.0)]
    #[case(Nakshatra::Ashwini, Nakshatra::Pushya, 1.5)]
    fn test_tara(#[case] a: Nakshatra, #[case] b: Nakshatra, #[case] expected: f64) {
        assert_eq!(tara_score(a, b), expected);
    }

    #[rstest]
    #[case(Gana::Manushya, Gana::Deva, 6.0)]
    #[case(Gana::Rakshasa, Gana::Deva, 1.0)]
    #[case(Gana::Manushya, Gana::Rakshasa, 0.0)]
    fn test_gana(#[case] a: Gana, #[case] b: Gana, #[case] expected: f64) {
        assert_eq!(gana_score(a, b), expected);
    }

    #[rstest]
    #[case(Sign::Aries, Sign::Libra, 7.0)]
    #[case(Sign::Aries, Sign::Taurus, 0.0)]
    #[case(Sign::Leo, Sign::Sagittarius, 0.0)]
    #[case(Sign::Cancer, Sign::Aquarius, 0.0)]
    #[case(Sign::Gemini, Sign::Virgo, 7.0)]
    fn test_bhakoot_is_symmetric(#[case] a: Sign, #[case] b: Sign, #[case] expected: f64) {
        assert_eq!(bhakoot_score(a, b), expected);
        assert_eq!(bhakoot_score(b, a), expected);
    }

    #[test]
    fn test_directional_factors() {
        assert_eq!(varna_score(Varna::Brahmin, Varna::Shudra), 1.0);
        assert_eq!(varna_score(Varna::Shudra, Varna::Brahmin), 0.0);
        assert_eq!(vasya_score(Vasya::Chatushpada, Vasya::Vanachara), 0.5);
        assert_eq!(vasya_score(Vasya::Vanachara, Vasya::Chatushpada), 0.0);
    }
}
