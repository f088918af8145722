//! Immutable model configuration.
//!
//! Every physical and ecological constant the step pipeline reads lives
//! here, grouped by the stage that owns it. A config is validated once and
//! then shared read-only by the operators, so independent simulations with
//! different parameters never see each other's values.

use crate::constants::*;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub const fn from_tuple(band: (f64, f64)) -> Self {
        Self::new(band.0, band.1)
    }

    /// Clamp into the band. Does not panic on an inverted band (unlike
    /// `f64::clamp`); the lower bound wins.
    pub fn clamp(&self, value: f64) -> f64 {
        value.min(self.max).max(self.min)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Value at `fraction` of the way from `min` to `max`.
    pub fn lerp(&self, fraction: f64) -> f64 {
        self.min + (self.max - self.min) * fraction
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        if self.min > self.max || self.min.is_nan() || self.max.is_nan() {
            return Err(ConfigError::InvalidBand {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// One value per tracked atmospheric gas, in ppm.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Gases {
    pub co2: f64,
    pub o2: f64,
    pub ch4: f64,
    pub h2o: f64,
}

/// Hard concentration limits per gas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GasBands {
    pub co2: Band,
    pub o2: Band,
    pub ch4: Band,
    pub h2o: Band,
}

impl Default for GasBands {
    fn default() -> Self {
        Self {
            co2: Band::from_tuple(CO2_BAND_PPM),
            o2: Band::from_tuple(O2_BAND_PPM),
            ch4: Band::from_tuple(CH4_BAND_PPM),
            h2o: Band::from_tuple(H2O_BAND_PPM),
        }
    }
}

/// Relative greenhouse strength of each contributing gas (CO2 = 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GreenhouseFactors {
    pub co2: f64,
    pub ch4: f64,
    pub h2o: f64,
}

impl Default for GreenhouseFactors {
    fn default() -> Self {
        Self {
            co2: CO2_GREENHOUSE_FACTOR,
            ch4: CH4_GREENHOUSE_FACTOR,
            h2o: H2O_GREENHOUSE_FACTOR,
        }
    }
}

/// Fixed ocean/land split of the planet surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    pub ocean_ratio: f64,
    pub land_ratio: f64,
    pub albedo_ocean: f64,
    /// Albedo of land not covered by daisies
    pub albedo_land: f64,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            ocean_ratio: OCEAN_RATIO,
            land_ratio: LAND_RATIO,
            albedo_ocean: ALBEDO_OCEAN,
            albedo_land: ALBEDO_LAND,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitalParams {
    /// When false the orbital elements stay at their initial values and
    /// neither distance nor seasonal factor touches the luminosity.
    pub enabled: bool,
    pub eccentricity_period_steps: f64,
    pub obliquity_period_steps: f64,
    pub precession_period_steps: f64,
    pub eccentricity: Band,
    pub obliquity_deg: Band,
    pub initial_eccentricity: f64,
    pub initial_obliquity_deg: f64,
    pub seasonal_amplitude: f64,
}

impl Default for OrbitalParams {
    fn default() -> Self {
        Self {
            enabled: true,
            eccentricity_period_steps: ECCENTRICITY_PERIOD_STEPS,
            obliquity_period_steps: OBLIQUITY_PERIOD_STEPS,
            precession_period_steps: PRECESSION_PERIOD_STEPS,
            eccentricity: Band::from_tuple(ECCENTRICITY_BAND),
            obliquity_deg: Band::from_tuple(OBLIQUITY_BAND_DEG),
            initial_eccentricity: INITIAL_ECCENTRICITY,
            initial_obliquity_deg: INITIAL_OBLIQUITY_DEG,
            seasonal_amplitude: SEASONAL_AMPLITUDE,
        }
    }
}

/// How the day/night phase evolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DiurnalMode {
    /// Flip between day and night every `cycle_steps`.
    #[default]
    Cycle,
    AlwaysDay,
    AlwaysNight,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiurnalParams {
    pub mode: DiurnalMode,
    pub cycle_steps: u32,
    /// Target solar intensity at night, in (0, 1]
    pub night_floor: f64,
    /// Fraction of the remaining gap to the target closed each step
    pub smoothing: f64,
}

impl Default for DiurnalParams {
    fn default() -> Self {
        Self {
            mode: DiurnalMode::Cycle,
            cycle_steps: DAY_NIGHT_CYCLE_STEPS,
            night_floor: NIGHT_SOLAR_FLOOR,
            smoothing: TRANSITION_SMOOTHNESS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AtmosphereParams {
    /// When false the composition is frozen at `initial`, the greenhouse
    /// effect is zero and emissivity stays at `base_emissivity`.
    pub enabled: bool,
    pub initial: Gases,
    pub bands: GasBands,
    pub respiration_rate: f64,
    pub base_photosynthesis_rate: f64,
    pub photosynthesis_temp_coefficient: f64,
    pub photosynthesis_boost: Band,
    pub ch4_production_rate: f64,
    pub ch4_decay_rate: f64,
    pub evaporation_rate: f64,
    pub evaporation_reference_k: f64,
    pub condensation_rate: f64,
    pub greenhouse_factors: GreenhouseFactors,
    pub greenhouse_cap: f64,
    pub greenhouse_divisor: f64,
    pub base_emissivity: f64,
    pub greenhouse_coefficient: f64,
    pub min_emissivity: f64,
}

impl Default for AtmosphereParams {
    fn default() -> Self {
        Self {
            enabled: true,
            initial: Gases {
                co2: INITIAL_CO2_PPM,
                o2: INITIAL_O2_PPM,
                ch4: INITIAL_CH4_PPM,
                h2o: INITIAL_H2O_PPM,
            },
            bands: GasBands::default(),
            respiration_rate: RESPIRATION_RATE,
            base_photosynthesis_rate: BASE_PHOTOSYNTHESIS_RATE,
            photosynthesis_temp_coefficient: PHOTOSYNTHESIS_TEMP_COEFFICIENT,
            photosynthesis_boost: Band::from_tuple(PHOTOSYNTHESIS_BOOST_BAND),
            ch4_production_rate: CH4_PRODUCTION_RATE,
            ch4_decay_rate: CH4_DECAY_RATE,
            evaporation_rate: EVAPORATION_RATE,
            evaporation_reference_k: EVAPORATION_REFERENCE_K,
            condensation_rate: CONDENSATION_RATE,
            greenhouse_factors: GreenhouseFactors::default(),
            greenhouse_cap: GREENHOUSE_CAP,
            greenhouse_divisor: GREENHOUSE_DIVISOR,
            base_emissivity: BASE_EMISSIVITY,
            greenhouse_coefficient: GREENHOUSE_EFFECT_COEFFICIENT,
            min_emissivity: MIN_EMISSIVITY,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThermalParams {
    pub solar_luminosity: f64,
    /// Added to the luminosity every step
    pub luminosity_increase_rate: f64,
    pub heat_capacity_atmosphere: f64,
    pub heat_capacity_ocean: f64,
    pub heat_capacity_land: f64,
    pub planet_atmosphere_weight: f64,
    pub planet_surface_weight: f64,
    pub stefan_boltzmann: f64,
}

impl Default for ThermalParams {
    fn default() -> Self {
        Self {
            solar_luminosity: INITIAL_SOLAR_LUMINOSITY,
            luminosity_increase_rate: SOLAR_LUMINOSITY_INCREASE_RATE,
            heat_capacity_atmosphere: ATMOSPHERE_HEAT_CAPACITY,
            heat_capacity_ocean: OCEAN_HEAT_CAPACITY,
            heat_capacity_land: LAND_HEAT_CAPACITY,
            planet_atmosphere_weight: PLANET_ATMOSPHERE_WEIGHT,
            planet_surface_weight: PLANET_SURFACE_WEIGHT,
            stefan_boltzmann: STEFAN_BOLTZMANN_CONSTANT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationParams {
    /// Land the daisies have not covered
    pub albedo_bare: f64,
    pub albedo_black: f64,
    pub albedo_white: f64,
    pub feedback_factor: f64,
    pub death_rate: f64,
    pub optimal_temperature_k: f64,
    pub growth_coefficient: f64,
    /// Floor for each daisy area; keeps the feedback term alive
    pub min_area: f64,
}

impl Default for PopulationParams {
    fn default() -> Self {
        Self {
            albedo_bare: ALBEDO_BARE_GROUND,
            albedo_black: ALBEDO_BLACK_DAISY,
            albedo_white: ALBEDO_WHITE_DAISY,
            feedback_factor: TEMPERATURE_FEEDBACK_FACTOR,
            death_rate: DEATH_RATE,
            optimal_temperature_k: OPTIMAL_TEMPERATURE_K,
            growth_coefficient: GROWTH_RATE_COEFFICIENT,
            min_area: MIN_AREA_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialConditions {
    pub area_black: f64,
    pub area_white: f64,
    pub temperature_k: f64,
    pub is_daytime: bool,
    pub solar_intensity: f64,
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self {
            area_black: INITIAL_DAISY_AREA,
            area_white: INITIAL_DAISY_AREA,
            temperature_k: INITIAL_TEMPERATURE_K,
            is_daytime: true,
            solar_intensity: 1.0,
        }
    }
}

/// Full configuration of one Daisyworld run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DaisyworldConfig {
    pub terrain: TerrainParams,
    pub orbital: OrbitalParams,
    pub diurnal: DiurnalParams,
    pub atmosphere: AtmosphereParams,
    pub thermal: ThermalParams,
    pub population: PopulationParams,
    pub initial: InitialConditions,
}

const UNIT: Band = Band::new(0.0, 1.0);

fn check_range(field: &'static str, value: f64, band: Band) -> Result<(), ConfigError> {
    if !band.contains(value) {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            min: band.min,
            max: band.max,
        });
    }
    Ok(())
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(value > 0.0) {
        return Err(ConfigError::NonPositive { field, value });
    }
    Ok(())
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    check_range(field, value, Band::new(0.0, f64::INFINITY))
}

/// Heat capacity of exactly 1 would freeze a temperature forever.
fn check_heat_capacity(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..1.0).contains(&value) {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            min: 0.0,
            max: 1.0,
        });
    }
    Ok(())
}

impl DaisyworldConfig {
    /// Parse a (possibly partial) JSON document over the defaults and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: DaisyworldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every constraint the step pipeline relies on for numeric safety.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let terrain = &self.terrain;
        check_range("terrain.ocean_ratio", terrain.ocean_ratio, UNIT)?;
        check_range("terrain.land_ratio", terrain.land_ratio, UNIT)?;
        if (terrain.ocean_ratio + terrain.land_ratio - 1.0).abs() > 1e-9 {
            return Err(ConfigError::RatioMismatch {
                ocean: terrain.ocean_ratio,
                land: terrain.land_ratio,
            });
        }
        check_range("terrain.albedo_ocean", terrain.albedo_ocean, UNIT)?;
        check_range("terrain.albedo_land", terrain.albedo_land, UNIT)?;

        let orbital = &self.orbital;
        check_positive("orbital.eccentricity_period_steps", orbital.eccentricity_period_steps)?;
        check_positive("orbital.obliquity_period_steps", orbital.obliquity_period_steps)?;
        check_positive("orbital.precession_period_steps", orbital.precession_period_steps)?;
        orbital.eccentricity.validate("orbital.eccentricity")?;
        orbital.obliquity_deg.validate("orbital.obliquity_deg")?;
        // e >= 1 is no longer an ellipse and the distance factor blows up
        let elliptic = Band::new(0.0, 0.99);
        check_range("orbital.eccentricity.min", orbital.eccentricity.min, elliptic)?;
        check_range("orbital.eccentricity.max", orbital.eccentricity.max, elliptic)?;
        check_range("orbital.initial_eccentricity", orbital.initial_eccentricity, elliptic)?;
        check_range("orbital.seasonal_amplitude", orbital.seasonal_amplitude, elliptic)?;

        let diurnal = &self.diurnal;
        check_positive("diurnal.cycle_steps", diurnal.cycle_steps as f64)?;
        check_positive("diurnal.night_floor", diurnal.night_floor)?;
        check_range("diurnal.night_floor", diurnal.night_floor, UNIT)?;
        check_range("diurnal.smoothing", diurnal.smoothing, UNIT)?;

        let atmo = &self.atmosphere;
        let bands = &atmo.bands;
        bands.co2.validate("atmosphere.bands.co2")?;
        bands.o2.validate("atmosphere.bands.o2")?;
        bands.ch4.validate("atmosphere.bands.ch4")?;
        bands.h2o.validate("atmosphere.bands.h2o")?;
        check_range("atmosphere.initial.co2", atmo.initial.co2, bands.co2)?;
        check_range("atmosphere.initial.o2", atmo.initial.o2, bands.o2)?;
        check_range("atmosphere.initial.ch4", atmo.initial.ch4, bands.ch4)?;
        check_range("atmosphere.initial.h2o", atmo.initial.h2o, bands.h2o)?;
        // initial values divide the greenhouse ratios
        check_positive("atmosphere.initial.co2", atmo.initial.co2)?;
        check_positive("atmosphere.initial.ch4", atmo.initial.ch4)?;
        check_positive("atmosphere.initial.h2o", atmo.initial.h2o)?;
        atmo.photosynthesis_boost.validate("atmosphere.photosynthesis_boost")?;
        check_positive("atmosphere.greenhouse_cap", atmo.greenhouse_cap)?;
        check_positive("atmosphere.greenhouse_divisor", atmo.greenhouse_divisor)?;
        check_positive("atmosphere.min_emissivity", atmo.min_emissivity)?;
        check_positive("atmosphere.base_emissivity", atmo.base_emissivity)?;
        check_range("atmosphere.min_emissivity", atmo.min_emissivity, UNIT)?;
        check_range("atmosphere.base_emissivity", atmo.base_emissivity, UNIT)?;

        let thermal = &self.thermal;
        check_positive("thermal.solar_luminosity", thermal.solar_luminosity)?;
        check_non_negative(
            "thermal.luminosity_increase_rate",
            thermal.luminosity_increase_rate,
        )?;
        check_positive("thermal.stefan_boltzmann", thermal.stefan_boltzmann)?;
        check_heat_capacity("thermal.heat_capacity_atmosphere", thermal.heat_capacity_atmosphere)?;
        check_heat_capacity("thermal.heat_capacity_ocean", thermal.heat_capacity_ocean)?;
        check_heat_capacity("thermal.heat_capacity_land", thermal.heat_capacity_land)?;

        let population = &self.population;
        check_range("population.albedo_bare", population.albedo_bare, UNIT)?;
        check_range("population.albedo_black", population.albedo_black, UNIT)?;
        check_range("population.albedo_white", population.albedo_white, UNIT)?;
        check_range("population.death_rate", population.death_rate, UNIT)?;
        check_non_negative("population.growth_coefficient", population.growth_coefficient)?;
        check_positive("population.min_area", population.min_area)?;
        check_range("population.min_area", population.min_area, Band::new(0.0, 0.5))?;

        let initial = &self.initial;
        check_range("initial.area_black", initial.area_black, UNIT)?;
        check_range("initial.area_white", initial.area_white, UNIT)?;
        check_range(
            "initial.area_black + initial.area_white",
            initial.area_black + initial.area_white,
            UNIT,
        )?;
        check_positive("initial.temperature_k", initial.temperature_k)?;
        check_range(
            "initial.solar_intensity",
            initial.solar_intensity,
            Band::new(diurnal.night_floor.min(1.0), 1.0),
        )?;

        Ok(())
    }
}
