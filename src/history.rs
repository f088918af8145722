//! Append-only time series of every recorded quantity.
//!
//! All series grow together, one sample per step, and are indexed by the
//! same step counter. Nothing is ever removed or rewritten, so a reader that
//! remembers how far it got can pick up new samples with [`History::since`].

use crate::state::StateSnapshot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Series {
    AreaBlack,
    AreaWhite,
    AreaBare,
    GrowthBlack,
    GrowthWhite,
    TempPlanet,
    TempAtmosphere,
    TempOcean,
    TempLand,
    TempBlackDaisy,
    TempWhiteDaisy,
    Co2,
    O2,
    Ch4,
    H2o,
    GreenhouseEffect,
    Emissivity,
    PlanetaryAlbedo,
    SolarLuminosity,
    SolarIntensity,
    Eccentricity,
    Obliquity,
    PrecessionAngle,
}

impl Series {
    pub const COUNT: usize = 23;

    pub const ALL: [Series; Series::COUNT] = [
        Series::AreaBlack,
        Series::AreaWhite,
        Series::AreaBare,
        Series::GrowthBlack,
        Series::GrowthWhite,
        Series::TempPlanet,
        Series::TempAtmosphere,
        Series::TempOcean,
        Series::TempLand,
        Series::TempBlackDaisy,
        Series::TempWhiteDaisy,
        Series::Co2,
        Series::O2,
        Series::Ch4,
        Series::H2o,
        Series::GreenhouseEffect,
        Series::Emissivity,
        Series::PlanetaryAlbedo,
        Series::SolarLuminosity,
        Series::SolarIntensity,
        Series::Eccentricity,
        Series::Obliquity,
        Series::PrecessionAngle,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Axis label for plots.
    pub fn label(self) -> &'static str {
        match self {
            Series::AreaBlack => "Black daisy area",
            Series::AreaWhite => "White daisy area",
            Series::AreaBare => "Bare ground area",
            Series::GrowthBlack => "Black daisy growth",
            Series::GrowthWhite => "White daisy growth",
            Series::TempPlanet => "Planet temperature (K)",
            Series::TempAtmosphere => "Atmosphere temperature (K)",
            Series::TempOcean => "Ocean temperature (K)",
            Series::TempLand => "Land temperature (K)",
            Series::TempBlackDaisy => "Black daisy temperature (K)",
            Series::TempWhiteDaisy => "White daisy temperature (K)",
            Series::Co2 => "CO2 (ppm)",
            Series::O2 => "O2 (ppm)",
            Series::Ch4 => "CH4 (ppm)",
            Series::H2o => "H2O (ppm)",
            Series::GreenhouseEffect => "Greenhouse effect",
            Series::Emissivity => "Emissivity",
            Series::PlanetaryAlbedo => "Planetary albedo",
            Series::SolarLuminosity => "Solar luminosity",
            Series::SolarIntensity => "Solar intensity",
            Series::Eccentricity => "Eccentricity",
            Series::Obliquity => "Obliquity (deg)",
            Series::PrecessionAngle => "Precession angle (deg)",
        }
    }

    pub fn value(self, s: &StateSnapshot) -> f64 {
        match self {
            Series::AreaBlack => s.population.area_black,
            Series::AreaWhite => s.population.area_white,
            Series::AreaBare => s.population.area_bare,
            Series::GrowthBlack => s.population.growth_black,
            Series::GrowthWhite => s.population.growth_white,
            Series::TempPlanet => s.temperatures.planet,
            Series::TempAtmosphere => s.temperatures.atmosphere,
            Series::TempOcean => s.temperatures.ocean,
            Series::TempLand => s.temperatures.land,
            Series::TempBlackDaisy => s.temperatures.black_daisy,
            Series::TempWhiteDaisy => s.temperatures.white_daisy,
            Series::Co2 => s.atmosphere.co2_ppm,
            Series::O2 => s.atmosphere.o2_ppm,
            Series::Ch4 => s.atmosphere.ch4_ppm,
            Series::H2o => s.atmosphere.h2o_ppm,
            Series::GreenhouseEffect => s.atmosphere.greenhouse_effect,
            Series::Emissivity => s.atmosphere.emissivity,
            Series::PlanetaryAlbedo => s.planetary_albedo,
            Series::SolarLuminosity => s.solar_luminosity,
            Series::SolarIntensity => s.day_night.solar_intensity,
            Series::Eccentricity => s.orbit.eccentricity,
            Series::Obliquity => s.orbit.obliquity_deg,
            Series::PrecessionAngle => s.orbit.precession_angle_deg,
        }
    }

    /// One value per series, in [`Series::ALL`] order.
    pub fn sample(snapshot: &StateSnapshot) -> [f64; Series::COUNT] {
        Series::ALL.map(|series| series.value(snapshot))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct History {
    time: Vec<u64>,
    values: Vec<Vec<f64>>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self {
            time: Vec::new(),
            values: vec![Vec::new(); Series::COUNT],
        }
    }

    /// Append one row. Rows are only ever added at the end.
    pub fn push(&mut self, time: u64, sample: [f64; Series::COUNT]) {
        self.time.push(time);
        for (column, value) in self.values.iter_mut().zip(sample) {
            column.push(value);
        }
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn time(&self) -> &[u64] {
        &self.time
    }

    pub fn series(&self, series: Series) -> &[f64] {
        &self.values[series.index()]
    }

    /// Samples recorded at or after row `from`; empty once `from` reaches the end.
    pub fn since(&self, series: Series, from: usize) -> &[f64] {
        let column = self.series(series);
        &column[from.min(column.len())..]
    }

    pub fn latest(&self, series: Series) -> Option<f64> {
        self.series(series).last().copied()
    }
}
