//! Classification and scoring tables for Ashta-Koota matching

use super::{Gana, Nadi, Paya, Tatva, Varna, Vasya, Yoni};
use crate::planetlib::Body;
use crate::zodiac::{Nakshatra, Sign};

pub(crate) fn varna(sign: Sign) -> Varna {
    match sign {
        Sign::Cancer | Sign::Scorpio | Sign::Pisces => Varna::Brahmin,
        Sign::Aries | Sign::Leo | Sign::Sagittarius => Varna::Kshatriya,
        Sign::Taurus | Sign::Virgo | Sign::Capricorn => Varna::Vaishya,
        Sign::Gemini | Sign::Libra | Sign::Aquarius => Varna::Shudra,
    }
}

pub(crate) fn vasya(sign: Sign) -> Vasya {
    match sign {
        Sign::Aries | Sign::Taurus => Vasya::Chatushpada,
        Sign::Gemini | Sign::Virgo | Sign::Libra | Sign::Sagittarius | Sign::Aquarius => Vasya::Manava,
        Sign::Cancer | Sign::Capricorn | Sign::Pisces => Vasya::Jalachara,
        Sign::Leo => Vasya::Vanachara,
        Sign::Scorpio => Vasya::Keeta,
    }
}

pub(crate) fn tatva(sign: Sign) -> Tatva {
    [Tatva::Agni, Tatva::Prithvi, Tatva::Vayu, Tatva::Jala][sign.index0() % 4]
}

pub(crate) fn paya(sign: Sign) -> Paya {
    [Paya::Swarna, Paya::Rajat, Paya::Tamra, Paya::Loha][sign.index0() % 4]
}

/// Yoni animal of each nakshatra, Ashwini first
const YONI: [Yoni; 27] = [
    Yoni::Horse,
    Yoni::Elephant,
    Yoni::Sheep,
    Yoni::Serpent,
    Yoni::Serpent,
    Yoni::Dog,
    Yoni::Cat,
    Yoni::Sheep,
    Yoni::Cat,
    Yoni::Rat,
    Yoni::Rat,
    Yoni::Cow,
    Yoni::Buffalo,
    Yoni::Tiger,
    Yoni::Buffalo,
    Yoni::Tiger,
    Yoni::Deer,
    Yoni::Deer,
    Yoni::Dog,
    Yoni::Monkey,
    Yoni::Mongoose,
    Yoni::Monkey,
    Yoni::Lion,
    Yoni::Horse,
    Yoni::Lion,
    Yoni::Cow,
    Yoni::Elephant,
];

const GANA: [Gana; 27] = {
    use Gana::{Deva as D, Manushya as M, Rakshasa as R};
    [
        D, M, R, M, D, M, D, D, R, // Ashwini..Ashlesha
        R, M, M, D, R, D, R, D, R, // Magha..Jyeshtha
        R, M, M, D, R, R, M, M, D, // Mula..Revati
    ]
};

const NADI: [Nadi; 27] = {
    use Nadi::{Adi as A, Antya as N, Madhya as M};
    [
        A, M, N, N, M, A, A, M, N, // Ashwini..Ashlesha
        N, M, A, A, M, N, N, M, A, // Magha..Jyeshtha
        A, M, N, N, M, A, A, M, N, // Mula..Revati
    ]
};

pub(crate) fn yoni(nakshatra: Nakshatra) -> Yoni {
    YONI[nakshatra.index0()]
}

pub(crate) fn gana(nakshatra: Nakshatra) -> Gana {
    GANA[nakshatra.index0()]
}

pub(crate) fn nadi(nakshatra: Nakshatra) -> Nadi {
    NADI[nakshatra.index0()]
}

/// Yoni points, indexed by [`Yoni`] discriminant on both axes; symmetric
#[rustfmt::skip]
pub(crate) const YONI_POINTS: [[u8; 14]; 14] = [
    // Hor Ele She Ser Dog Cat Rat Cow Buf Tig Dee Mon Mgo Lio
    [4, 2, 2, 3, 2, 2, 2, 1, 0, 1, 3, 3, 2, 1], // Horse
    [2, 4, 3, 3, 2, 2, 2, 2, 3, 1, 2, 3, 2, 0], // Elephant
    [2, 3, 4, 2, 1, 2, 1, 3, 3, 1, 2, 0, 3, 1], // Sheep
    [3, 3, 2, 4, 2, 1, 1, 1, 1, 2, 2, 2, 0, 2], // Serpent
    [2, 2, 1, 2, 4, 2, 1, 2, 2, 1, 0, 2, 1, 1], // Dog
    [2, 2, 2, 1, 2, 4, 0, 2, 2, 1, 3, 3, 2, 1], // Cat
    [2, 2, 1, 1, 1, 0, 4, 2, 2, 2, 2, 2, 1, 2], // Rat
    [1, 2, 3, 1, 2, 2, 2, 4, 3, 0, 3, 2, 2, 1], // Cow
    [0, 3, 3, 1, 2, 2, 2, 3, 4, 1, 2, 2, 2, 1], // Buffalo
    [1, 1, 1, 2, 1, 1, 2, 0, 1, 4, 1, 1, 2, 1], // Tiger
    [3, 2, 2, 2, 0, 3, 2, 3, 2, 1, 4, 2, 2, 1], // Deer
    [3, 3, 0, 2, 2, 3, 2, 2, 2, 1, 2, 4, 3, 2], // Monkey
    [2, 2, 3, 0, 1, 2, 1, 2, 2, 2, 2, 3, 4, 2], // Mongoose
    [1, 0, 1, 2, 1, 1, 2, 1, 1, 1, 1, 2, 2, 4], // Lion
];

/// Vasya points, first chart's group by row, second's by column
#[rustfmt::skip]
pub(crate) const VASYA_POINTS: [[f64; 5]; 5] = [
    // Chatushpada Manava Jalachara Vanachara Keeta
    [2.0, 1.0, 1.0, 0.5, 1.0], // Chatushpada
    [1.0, 2.0, 0.5, 0.0, 1.0], // Manava
    [1.0, 0.5, 2.0, 1.0, 1.0], // Jalachara
    [0.0, 0.0, 0.0, 2.0, 0.0], // Vanachara
    [1.0, 1.0, 1.0, 0.0, 2.0], // Keeta
];

/// Natural disposition of one planet towards another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Relation {
    Friend,
    Neutral,
    Enemy,
}

/// How `from` regards `to`; the nodes are neutral to everyone
pub(crate) fn natural_relation(from: Body, to: Body) -> Relation {
    use Body::*;
    use Relation::*;
    if from == to {
        return Friend;
    }
    let (friends, enemies): (&[Body], &[Body]) = match from {
        Sun => (&[Moon, Mars, Jupiter], &[Venus, Saturn]),
        Moon => (&[Sun, Mercury], &[]),
        Mars => (&[Sun, Moon, Jupiter], &[Mercury]),
        Mercury => (&[Sun, Venus], &[Moon]),
        Jupiter => (&[Sun, Moon, Mars], &[Mercury, Venus]),
        Venus => (&[Mercury, Saturn], &[Sun, Moon]),
        Saturn => (&[Mercury, Venus], &[Sun, Moon, Mars]),
        Rahu | Ketu => (&[], &[]),
    };
    if friends.contains(&to) {
        Friend
    } else if enemies.contains(&to) {
        Enemy
    } else {
        Neutral
    }
}

/// Graha Maitri points keyed by (A→B, B→A); the reverse pair covers the rest
const MAITRI_POINTS: [((Relation, Relation), f64); 6] = [
    ((Relation::Friend, Relation::Friend), 5.0),
    ((Relation::Friend, Relation::Neutral), 4.0),
    ((Relation::Neutral, Relation::Neutral), 3.0),
    ((Relation::Friend, Relation::Enemy), 1.0),
    ((Relation::Neutral, Relation::Enemy), 0.5),
    ((Relation::Enemy, Relation::Enemy), 0.0),
];

pub(crate) fn maitri_points(a_to_b: Relation, b_to_a: Relation) -> f64 {
    let lookup = |key: (Relation, Relation)| {
        MAITRI_POINTS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|&(_, points)| points)
    };
    lookup((a_to_b, b_to_a))
        .or_else(|| lookup((b_to_a, a_to_b)))
        .unwrap_or(0.0)
}

/// Bhakoot points for the count (1–12) from one moon sign to the other
pub(crate) fn bhakoot_points(count: u8) -> f64 {
    match count {
        1 | 7 | 3 | 11 | 4 | 10 => 7.0,
        // 2/12, 5/9 and 6/8
        _ => 0.0,
    }
}
