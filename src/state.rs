//! The mutable state one Daisyworld run carries from step to step.

use crate::config::{DaisyworldConfig, Gases, PopulationParams, TerrainParams};
use crate::history::History;
use serde::Serialize;

/// Fractions of the planetary surface. `area_black + area_white + area_bare == 1`
/// holds after every step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Population {
    pub area_black: f64,
    pub area_white: f64,
    pub area_bare: f64,
    pub growth_black: f64,
    pub growth_white: f64,
}

impl Population {
    pub fn total_daisy_area(&self) -> f64 {
        self.area_black + self.area_white
    }

    /// Floor both daisy areas at `min_area`, squeeze them back to a total of
    /// 1 if they overflow, and re-derive bare ground as the remainder.
    pub fn settle(&mut self, min_area: f64) {
        self.area_black = self.area_black.max(min_area);
        self.area_white = self.area_white.max(min_area);

        let occupied = self.area_black + self.area_white;
        if occupied > 1.0 {
            // a full planet still leaves each species at least `min_area`
            self.area_black = (self.area_black / occupied).clamp(min_area, 1.0 - min_area);
            self.area_white = 1.0 - self.area_black;
        }
        self.area_bare = (1.0 - self.area_black - self.area_white).max(0.0);
    }

    /// Area-weighted albedo of the whole planet.
    ///
    /// Ocean contributes its fixed albedo; land contributes the blend of bare
    /// ground and both daisy species.
    pub fn planetary_albedo(&self, terrain: &TerrainParams, params: &PopulationParams) -> f64 {
        let land_albedo = self.area_bare * params.albedo_bare
            + self.area_black * params.albedo_black
            + self.area_white * params.albedo_white;
        terrain.albedo_ocean * terrain.ocean_ratio + land_albedo * terrain.land_ratio
    }
}

/// Temperatures in Kelvin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Temperatures {
    pub planet: f64,
    pub atmosphere: f64,
    pub ocean: f64,
    pub land: f64,
    pub black_daisy: f64,
    pub white_daisy: f64,
}

impl Temperatures {
    pub fn uniform(temp_k: f64) -> Self {
        Self {
            planet: temp_k,
            atmosphere: temp_k,
            ocean: temp_k,
            land: temp_k,
            black_daisy: temp_k,
            white_daisy: temp_k,
        }
    }
}

/// Atmospheric composition (ppm) and its radiative consequences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Atmosphere {
    pub co2_ppm: f64,
    pub o2_ppm: f64,
    pub ch4_ppm: f64,
    pub h2o_ppm: f64,
    /// Normalized to [0, 1]
    pub greenhouse_effect: f64,
    pub emissivity: f64,
}

impl Atmosphere {
    pub fn gases(&self) -> Gases {
        Gases {
            co2: self.co2_ppm,
            o2: self.o2_ppm,
            ch4: self.ch4_ppm,
            h2o: self.h2o_ppm,
        }
    }

    pub fn set_gases(&mut self, gases: Gases) {
        self.co2_ppm = gases.co2;
        self.o2_ppm = gases.o2;
        self.ch4_ppm = gases.ch4;
        self.h2o_ppm = gases.h2o;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Orbit {
    pub eccentricity: f64,
    pub obliquity_deg: f64,
    /// Grows without bound; take it mod 360 for display
    pub precession_angle_deg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayNight {
    pub is_daytime: bool,
    pub day_night_timer: u32,
    pub solar_intensity: f64,
}

/// Every scalar of the model at one instant, detached from the history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StateSnapshot {
    pub current_time: u64,
    pub population: Population,
    pub temperatures: Temperatures,
    pub atmosphere: Atmosphere,
    pub orbit: Orbit,
    pub day_night: DayNight,
    pub solar_luminosity: f64,
    pub planetary_albedo: f64,
}

/// State container advanced by the step pipeline.
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub population: Population,
    pub temperatures: Temperatures,
    pub atmosphere: Atmosphere,
    pub orbit: Orbit,
    pub day_night: DayNight,
    pub solar_luminosity: f64,
    pub planetary_albedo: f64,
    /// Step counter; the only clock the model has
    pub current_time: u64,
    pub history: History,
}

impl SimulationState {
    pub fn new(config: &DaisyworldConfig) -> Self {
        let initial = &config.initial;
        let mut population = Population {
            area_black: initial.area_black,
            area_white: initial.area_white,
            area_bare: 0.0,
            growth_black: 0.0,
            growth_white: 0.0,
        };
        population.settle(config.population.min_area);

        let gases = config.atmosphere.initial;
        let atmosphere = Atmosphere {
            co2_ppm: gases.co2,
            o2_ppm: gases.o2,
            ch4_ppm: gases.ch4,
            h2o_ppm: gases.h2o,
            greenhouse_effect: 0.0,
            emissivity: config.atmosphere.base_emissivity,
        };

        let albedo = population.planetary_albedo(&config.terrain, &config.population);

        Self {
            population,
            temperatures: Temperatures::uniform(initial.temperature_k),
            atmosphere,
            orbit: Orbit {
                eccentricity: config.orbital.initial_eccentricity,
                obliquity_deg: config.orbital.initial_obliquity_deg,
                precession_angle_deg: 0.0,
            },
            day_night: DayNight {
                is_daytime: initial.is_daytime,
                day_night_timer: 0,
                solar_intensity: initial.solar_intensity,
            },
            solar_luminosity: config.thermal.solar_luminosity,
            planetary_albedo: albedo,
            current_time: 0,
            history: History::new(),
        }
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            current_time: self.current_time,
            population: self.population,
            temperatures: self.temperatures,
            atmosphere: self.atmosphere,
            orbit: self.orbit,
            day_night: self.day_night,
            solar_luminosity: self.solar_luminosity,
            planetary_albedo: self.planetary_albedo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn new_state_uses_documented_defaults() {
        let state = SimulationState::new(&DaisyworldConfig::default());
        assert_eq!(state.current_time, 0);
        assert_eq!(state.population.area_black, 0.01);
        assert_eq!(state.population.area_white, 0.01);
        assert_abs_diff_eq!(state.population.area_bare, 0.98, epsilon = 1e-12);
        assert_eq!(state.temperatures, Temperatures::uniform(250.0));
        assert_eq!(state.atmosphere.co2_ppm, 400.0);
        assert_eq!(state.atmosphere.emissivity, 1.0);
        assert!(state.day_night.is_daytime);
        assert!(state.history.is_empty());
    }

    #[test]
    fn settle_floors_tiny_populations() {
        let mut population = Population {
            area_black: 0.0,
            area_white: -0.2,
            area_bare: 0.0,
            growth_black: 0.0,
            growth_white: 0.0,
        };
        population.settle(0.0001);
        assert_eq!(population.area_black, 0.0001);
        assert_eq!(population.area_white, 0.0001);
        assert_abs_diff_eq!(population.area_bare, 0.9998, epsilon = 1e-12);
    }

    #[test]
    fn settle_rescales_overflow() {
        let mut population = Population {
            area_black: 0.9,
            area_white: 0.6,
            area_bare: 0.0,
            growth_black: 0.0,
            growth_white: 0.0,
        };
        population.settle(0.0001);
        assert_abs_diff_eq!(population.area_black, 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(population.area_white, 0.4, epsilon = 1e-12);
        assert_abs_diff_eq!(population.area_bare, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn settle_keeps_floor_on_a_full_planet() {
        let mut population = Population {
            area_black: 1.0,
            area_white: 0.0,
            area_bare: 0.0,
            growth_black: 0.0,
            growth_white: 0.0,
        };
        population.settle(0.0001);
        assert_abs_diff_eq!(population.area_black, 0.9999, epsilon = 1e-12);
        assert_abs_diff_eq!(population.area_white, 0.0001, epsilon = 1e-12);
        assert_abs_diff_eq!(population.area_black + population.area_white, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(population.area_bare, 0.0, epsilon = 1e-12);

        let config = DaisyworldConfig::from_json_str(
            r#"{ "initial": { "area_black": 1.0, "area_white": 0.0 } }"#,
        )
        .unwrap();
        let state = SimulationState::new(&config);
        assert!(state.population.area_white >= config.population.min_area);
    }

    #[test]
    fn bare_ground_albedo_is_its_own_setting() {
        let config = DaisyworldConfig::default();
        let state = SimulationState::new(&config);
        let default_albedo = state.planetary_albedo;

        let mut brighter = config.clone();
        brighter.population.albedo_bare = 0.5;
        let brighter_albedo = SimulationState::new(&brighter).planetary_albedo;

        let shift = (0.5 - 0.3) * state.population.area_bare * config.terrain.land_ratio;
        assert_abs_diff_eq!(brighter_albedo - default_albedo, shift, epsilon = 1e-12);
        assert_eq!(brighter.terrain.albedo_land, config.terrain.albedo_land);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let state = SimulationState::new(&DaisyworldConfig::default());
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["current_time"], 0);
        assert_eq!(json["atmosphere"]["co2_ppm"], 400.0);
        assert_eq!(json["day_night"]["is_daytime"], true);
    }
}
