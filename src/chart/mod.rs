//! Birth chart: everything computed for one moment and place
//!
//! A [`BirthChart`] is a plain record of sidereal positions, ascendant and
//! houses. The dasha, matching and varga modules only need values already
//! in the record, so the helpers here just forward the right fields.

use crate::almanac::Paksha;
use crate::dasha::{self, CharaPeriod, DashaPeriod};
use crate::houses::{self, GeoLocation, HouseInfo};
use crate::matching::{self, AshtaKootaValues};
use crate::planetlib::{Body, Ephemeris, PlanetPosition};
use crate::precessionlib::ayanamsa;
use crate::time::Instant;
use crate::varga::{self, DivisionalChart};
use crate::zodiac::Sign;
use crate::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthChart {
    pub instant: Instant,
    pub location: GeoLocation,
    /// Ayanamsa used for every sidereal value below
    pub ayanamsa: f64,
    /// All nine bodies, Sun first
    pub planets: Vec<PlanetPosition>,
    /// Sidereal ascendant longitude
    pub ascendant: f64,
    pub houses: [HouseInfo; 12],
}

impl BirthChart {
    /// Compute a chart with the default ephemeris
    pub fn compute(instant: Instant, location: GeoLocation) -> Self {
        Self::compute_with(&Ephemeris::new(), instant, location)
    }

    pub fn compute_with(ephemeris: &Ephemeris, instant: Instant, location: GeoLocation) -> Self {
        let ayanamsa = ayanamsa(instant);
        let ascendant = houses::ascendant(instant, location.latitude, location.longitude);
        log::debug!(
            "Birth chart at JD {:.5}: ayanamsa {:.4}, ascendant {:.4}",
            instant.jd(),
            ayanamsa,
            ascendant
        );
        BirthChart {
            instant,
            location,
            ayanamsa,
            planets: ephemeris.all_positions(instant, ayanamsa),
            ascendant,
            houses: houses::houses(ascendant),
        }
    }

    pub fn planet(&self, body: Body) -> Option<&PlanetPosition> {
        self.planets.iter().find(|p| p.body == body)
    }

    /// The Moon's position, recomputed if the record was built without it
    pub fn moon(&self) -> PlanetPosition {
        match self.planet(Body::Moon) {
            Some(moon) => *moon,
            None => Ephemeris::new().position(self.instant, Body::Moon, self.ayanamsa),
        }
    }

    fn sun_longitude(&self) -> f64 {
        match self.planet(Body::Sun) {
            Some(sun) => sun.longitude,
            None => Ephemeris::new().position(self.instant, Body::Sun, self.ayanamsa).longitude,
        }
    }

    pub fn ascendant_sign(&self) -> Sign {
        Sign::from_longitude(self.ascendant)
    }

    /// Fortnight of birth
    pub fn paksha(&self) -> Paksha {
        Paksha::from_elongation(self.moon().longitude - self.sun_longitude())
    }

    pub fn ashta_koota(&self) -> AshtaKootaValues {
        let moon = self.moon();
        matching::ashta_koota(moon.rashi(), moon.nakshatra_kind(), self.ascendant_sign())
    }

    pub fn vimshottari(&self) -> Vec<DashaPeriod> {
        dasha::vimshottari(self.instant, self.moon().longitude)
    }

    pub fn tribhagi(&self) -> Vec<DashaPeriod> {
        dasha::tribhagi(self.instant, self.moon().longitude)
    }

    pub fn ashtottari(&self) -> Vec<DashaPeriod> {
        dasha::ashtottari(self.instant, self.moon().longitude, self.paksha())
    }

    pub fn yogini(&self) -> Vec<DashaPeriod> {
        dasha::yogini(self.instant, self.moon().longitude)
    }

    pub fn jaimini_chara(&self) -> Vec<CharaPeriod> {
        dasha::jaimini_chara(self.instant, self.ascendant, &self.planets)
    }

    pub fn divisional_chart(&self, harmonic: u32) -> Result<DivisionalChart> {
        varga::divisional_chart_for(self, harmonic)
    }
}
