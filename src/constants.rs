// Physical constants
pub const STEFAN_BOLTZMANN_CONSTANT: f64 = 5.6696e-8; // W m^-2 K^-4
pub const TO_KELVIN: f64 = 273.15;

// Surface albedo (fraction reflected)
pub const ALBEDO_BLACK_DAISY: f64 = 0.25; // absorbs more heat
pub const ALBEDO_WHITE_DAISY: f64 = 0.75; // reflects more heat
pub const ALBEDO_OCEAN: f64 = 0.06;
pub const ALBEDO_LAND: f64 = 0.3;
pub const ALBEDO_BARE_GROUND: f64 = ALBEDO_LAND;

// Population dynamics
pub const TEMPERATURE_FEEDBACK_FACTOR: f64 = 20.0;
pub const DEATH_RATE: f64 = 0.3;
pub const OPTIMAL_TEMPERATURE_K: f64 = 295.5;
pub const GROWTH_RATE_COEFFICIENT: f64 = 0.003265;
pub const MIN_AREA_THRESHOLD: f64 = 0.0001;

// Solar forcing
pub const INITIAL_SOLAR_LUMINOSITY: f64 = 450.0;
pub const SOLAR_LUMINOSITY_INCREASE_RATE: f64 = 0.0; // per step; 0 = fixed sun

// Terrain split (Earth is roughly 71% ocean)
pub const OCEAN_RATIO: f64 = 0.7;
pub const LAND_RATIO: f64 = 0.3;

// Heat capacity as a smoothing weight on the previous temperature
pub const ATMOSPHERE_HEAT_CAPACITY: f64 = 0.88;
pub const OCEAN_HEAT_CAPACITY: f64 = 0.96;
pub const LAND_HEAT_CAPACITY: f64 = 0.90;

// Planet temperature blend
pub const PLANET_ATMOSPHERE_WEIGHT: f64 = 0.3;
pub const PLANET_SURFACE_WEIGHT: f64 = 0.7;

// Emissivity / greenhouse
pub const BASE_EMISSIVITY: f64 = 1.0;
pub const GREENHOUSE_EFFECT_COEFFICIENT: f64 = 0.38;
pub const MIN_EMISSIVITY: f64 = 0.3;
pub const GREENHOUSE_CAP: f64 = 3.0;
pub const GREENHOUSE_DIVISOR: f64 = 3.0;

// Initial greenhouse gas concentrations (ppm)
pub const INITIAL_CO2_PPM: f64 = 400.0;
pub const INITIAL_O2_PPM: f64 = 210_000.0; // ~21%
pub const INITIAL_CH4_PPM: f64 = 1.8;
pub const INITIAL_H2O_PPM: f64 = 10_000.0; // ~1%

// Hard concentration bands (ppm)
pub const CO2_BAND_PPM: (f64, f64) = (50.0, 800.0);
pub const O2_BAND_PPM: (f64, f64) = (100_000.0, 300_000.0);
pub const CH4_BAND_PPM: (f64, f64) = (0.5, 5.0);
pub const H2O_BAND_PPM: (f64, f64) = (1_000.0, 25_000.0);

// Biology
pub const RESPIRATION_RATE: f64 = 0.5;
pub const BASE_PHOTOSYNTHESIS_RATE: f64 = 1.2; // larger than respiration
pub const PHOTOSYNTHESIS_TEMP_COEFFICIENT: f64 = 0.005;
pub const PHOTOSYNTHESIS_BOOST_BAND: (f64, f64) = (0.5, 2.0);
pub const CH4_PRODUCTION_RATE: f64 = 0.001;
pub const CH4_DECAY_RATE: f64 = 0.001;

// Water cycle
pub const EVAPORATION_RATE: f64 = 30.0;
pub const EVAPORATION_REFERENCE_K: f64 = TO_KELVIN;
pub const CONDENSATION_RATE: f64 = 0.002;

// Relative greenhouse strength per gas (CO2 = 1)
pub const CO2_GREENHOUSE_FACTOR: f64 = 1.0;
pub const CH4_GREENHOUSE_FACTOR: f64 = 25.0;
pub const H2O_GREENHOUSE_FACTOR: f64 = 0.1;

// Day / night
pub const DAY_NIGHT_CYCLE_STEPS: u32 = 100;
pub const NIGHT_SOLAR_FLOOR: f64 = 0.42;
pub const TRANSITION_SMOOTHNESS: f64 = 0.08;

// Milankovitch cycles, scaled down so they show up in a practical run
pub const ECCENTRICITY_PERIOD_STEPS: f64 = 10_000.0; // real: ~100,000 years
pub const PRECESSION_PERIOD_STEPS: f64 = 2_600.0; // real: ~26,000 years
pub const OBLIQUITY_PERIOD_STEPS: f64 = 4_100.0; // real: ~41,000 years
pub const ECCENTRICITY_BAND: (f64, f64) = (0.0, 0.06);
pub const OBLIQUITY_BAND_DEG: (f64, f64) = (22.1, 24.5);
pub const INITIAL_ECCENTRICITY: f64 = 0.0167;
pub const INITIAL_OBLIQUITY_DEG: f64 = 23.5;
pub const SEASONAL_AMPLITUDE: f64 = 0.2;

// Initial conditions
pub const INITIAL_DAISY_AREA: f64 = 0.01;
pub const INITIAL_TEMPERATURE_K: f64 = 250.0;

// Display
pub const DEFAULT_DISPLAY_UNITS: usize = 300;
