// Atmosphere Operator
// Moves greenhouse gas concentrations with photosynthesis, respiration,
// methane turnover and the water cycle, then derives greenhouse effect and
// emissivity from the new composition.

use crate::config::{AtmosphereParams, DaisyworldConfig, Gases};
use crate::sim::simulation::Simulation;
use crate::sim_op::{SimOp, SimOpHandle};
use crate::state::{Atmosphere, SimulationState};
use crate::temp_utils::kelvin_to_celsius;
use tracing::trace;

/// What the gas balance reads from the rest of the state.
#[derive(Debug, Clone, Copy)]
pub struct AtmosphereInputs {
    pub is_daytime: bool,
    pub solar_intensity: f64,
    pub total_daisy_area: f64,
    pub planet_temp_k: f64,
    pub ocean_temp_k: f64,
}

impl AtmosphereInputs {
    pub fn from_state(state: &SimulationState) -> Self {
        Self {
            is_daytime: state.day_night.is_daytime,
            solar_intensity: state.day_night.solar_intensity,
            total_daisy_area: state.population.total_daisy_area(),
            planet_temp_k: state.temperatures.planet,
            ocean_temp_k: state.temperatures.ocean,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AtmosphereOp {
    pub params: AtmosphereParams,
}

impl AtmosphereOp {
    pub fn new() -> Self {
        Self::new_with_params(AtmosphereParams::default())
    }

    pub fn new_with_params(params: AtmosphereParams) -> Self {
        Self { params }
    }

    pub fn handle(config: &DaisyworldConfig) -> SimOpHandle {
        SimOpHandle::new(Box::new(Self::new_with_params(config.atmosphere.clone())))
    }

    /// Photosynthesis rate per unit daisy area; zero at night.
    ///
    /// Warmer planets photosynthesize harder, but the boost is held to the
    /// configured band so a hot or frozen planet cannot run away.
    pub fn photosynthesis_rate(&self, inputs: &AtmosphereInputs) -> f64 {
        if !inputs.is_daytime {
            return 0.0;
        }
        let p = &self.params;
        let temp_c = kelvin_to_celsius(inputs.planet_temp_k);
        let boost = p.photosynthesis_boost.clamp(1.0 + temp_c * p.photosynthesis_temp_coefficient);
        p.base_photosynthesis_rate * boost * inputs.solar_intensity
    }

    /// Raw per-step change of each concentration, before clamping.
    pub fn gas_deltas(&self, inputs: &AtmosphereInputs, current: &Gases) -> Gases {
        let p = &self.params;
        let area = inputs.total_daisy_area;

        // respiration always runs: CO2 out, O2 in
        let respiration = area * p.respiration_rate;
        let photosynthesis = area * self.photosynthesis_rate(inputs);

        let ch4_production = area * p.ch4_production_rate;
        let ch4_decay = current.ch4 * p.ch4_decay_rate;

        let warmth = (inputs.ocean_temp_k - p.evaporation_reference_k) / 100.0;
        let evaporation = (warmth * p.evaporation_rate).max(0.0);
        let condensation = current.h2o * p.condensation_rate;

        Gases {
            co2: respiration - photosynthesis,
            o2: photosynthesis - respiration,
            ch4: ch4_production - ch4_decay,
            h2o: evaporation - condensation,
        }
    }

    /// Add `deltas` and hard-clamp every gas into its band.
    pub fn apply_deltas(&self, atmosphere: &mut Atmosphere, deltas: &Gases) {
        let bands = &self.params.bands;
        let raw = atmosphere.gases();
        let raw = Gases {
            co2: raw.co2 + deltas.co2,
            o2: raw.o2 + deltas.o2,
            ch4: raw.ch4 + deltas.ch4,
            h2o: raw.h2o + deltas.h2o,
        };
        let clamped = Gases {
            co2: bands.co2.clamp(raw.co2),
            o2: bands.o2.clamp(raw.o2),
            ch4: bands.ch4.clamp(raw.ch4),
            h2o: bands.h2o.clamp(raw.h2o),
        };
        if clamped != raw {
            trace!(?raw, ?clamped, "gas concentration held at band limit");
        }
        atmosphere.set_gases(clamped);
    }

    /// Normalized greenhouse effect in [0, 1].
    ///
    /// Mean of the three forcing-weighted ratios to the initial composition,
    /// capped and divided by the configured constants.
    pub fn greenhouse_effect(&self, atmosphere: &Atmosphere) -> f64 {
        let p = &self.params;
        let f = &p.greenhouse_factors;
        let co2 = atmosphere.co2_ppm / p.initial.co2 * f.co2;
        let ch4 = atmosphere.ch4_ppm / p.initial.ch4 * f.ch4;
        let h2o = atmosphere.h2o_ppm / p.initial.h2o * f.h2o;
        let total = (co2 + ch4 + h2o) / 3.0;
        (total.min(p.greenhouse_cap) / p.greenhouse_divisor).clamp(0.0, 1.0)
    }

    pub fn emissivity(&self, greenhouse_effect: f64) -> f64 {
        let p = &self.params;
        let trapped = greenhouse_effect * p.greenhouse_coefficient;
        (p.base_emissivity * (1.0 - trapped)).max(p.min_emissivity)
    }

    pub fn apply(&self, state: &mut SimulationState) {
        let atmosphere = &mut state.atmosphere;
        if !self.params.enabled {
            atmosphere.greenhouse_effect = 0.0;
            atmosphere.emissivity = self.params.base_emissivity;
            return;
        }

        let inputs = AtmosphereInputs::from_state(state);
        let deltas = self.gas_deltas(&inputs, &state.atmosphere.gases());
        self.apply_deltas(&mut state.atmosphere, &deltas);

        let greenhouse = self.greenhouse_effect(&state.atmosphere);
        state.atmosphere.greenhouse_effect = greenhouse;
        state.atmosphere.emissivity = self.emissivity(greenhouse);
    }
}

impl Default for AtmosphereOp {
    fn default() -> Self {
        Self::new()
    }
}

impl SimOp for AtmosphereOp {
    fn name(&self) -> &str {
        "Atmosphere"
    }

    fn update_sim(&mut self, sim: &mut Simulation) {
        self.apply(&mut sim.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use more_asserts::{assert_gt, assert_lt};

    fn atmosphere(params: &AtmosphereParams) -> Atmosphere {
        Atmosphere {
            co2_ppm: params.initial.co2,
            o2_ppm: params.initial.o2,
            ch4_ppm: params.initial.ch4,
            h2o_ppm: params.initial.h2o,
            greenhouse_effect: 0.0,
            emissivity: params.base_emissivity,
        }
    }

    fn inputs(is_daytime: bool) -> AtmosphereInputs {
        AtmosphereInputs {
            is_daytime,
            solar_intensity: 1.0,
            total_daisy_area: 0.5,
            planet_temp_k: 293.15,
            ocean_temp_k: 293.15,
        }
    }

    #[test]
    fn night_respiration_releases_co2() {
        let op = AtmosphereOp::new();
        let current = atmosphere(&op.params).gases();
        let deltas = op.gas_deltas(&inputs(false), &current);
        assert_abs_diff_eq!(deltas.co2, 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(deltas.o2, -0.25, epsilon = 1e-12);
    }

    #[test]
    fn daylight_photosynthesis_outpaces_respiration() {
        let op = AtmosphereOp::new();
        let current = atmosphere(&op.params).gases();
        let deltas = op.gas_deltas(&inputs(true), &current);
        // 20 C boosts the base rate by 10%
        let photosynthesis = 0.5 * 1.2 * 1.1;
        assert_abs_diff_eq!(deltas.co2, 0.25 - photosynthesis, epsilon = 1e-9);
        assert_lt!(deltas.co2, 0.0);
        assert_gt!(deltas.o2, 0.0);
    }

    #[test]
    fn photosynthesis_boost_is_clamped() {
        let op = AtmosphereOp::new();
        let scorching = AtmosphereInputs { planet_temp_k: 1_000.0, ..inputs(true) };
        let frozen = AtmosphereInputs { planet_temp_k: 10.0, ..inputs(true) };
        assert_abs_diff_eq!(op.photosynthesis_rate(&scorching), 1.2 * 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(op.photosynthesis_rate(&frozen), 1.2 * 0.5, epsilon = 1e-12);
    }

    #[test]
    fn cold_ocean_does_not_evaporate() {
        let op = AtmosphereOp::new();
        let cold = AtmosphereInputs { ocean_temp_k: 200.0, ..inputs(false) };
        let current = atmosphere(&op.params).gases();
        let deltas = op.gas_deltas(&cold, &current);
        // condensation only
        assert_abs_diff_eq!(deltas.h2o, -10_000.0 * 0.002, epsilon = 1e-9);
    }

    #[test]
    fn extreme_deltas_land_on_band_limits() {
        let op = AtmosphereOp::new();
        let mut atmo = atmosphere(&op.params);
        op.apply_deltas(&mut atmo, &Gases { co2: 1.0e9, o2: 1.0e9, ch4: 1.0e9, h2o: 1.0e9 });
        assert_eq!(atmo.co2_ppm, 800.0);
        assert_eq!(atmo.o2_ppm, 300_000.0);
        assert_eq!(atmo.ch4_ppm, 5.0);
        assert_eq!(atmo.h2o_ppm, 25_000.0);

        op.apply_deltas(&mut atmo, &Gases { co2: -1.0e9, o2: -1.0e9, ch4: -1.0e9, h2o: -1.0e9 });
        assert_eq!(atmo.co2_ppm, 50.0);
        assert_eq!(atmo.o2_ppm, 100_000.0);
        assert_eq!(atmo.ch4_ppm, 0.5);
        assert_eq!(atmo.h2o_ppm, 1_000.0);
    }

    #[test]
    fn greenhouse_saturates_at_initial_composition() {
        // CH4 alone contributes 25/3 > cap, so the effect is pinned at 1
        let op = AtmosphereOp::new();
        let atmo = atmosphere(&op.params);
        assert_abs_diff_eq!(op.greenhouse_effect(&atmo), 1.0);
        assert_abs_diff_eq!(op.emissivity(1.0), 0.62, epsilon = 1e-12);
    }

    #[test]
    fn greenhouse_below_cap_is_proportional() {
        let op = AtmosphereOp::new();
        let mut atmo = atmosphere(&op.params);
        atmo.ch4_ppm = 0.5;
        atmo.co2_ppm = 50.0;
        atmo.h2o_ppm = 1_000.0;
        let ratios = (50.0 / 400.0) + (0.5 / 1.8) * 25.0 + (1_000.0 / 10_000.0) * 0.1;
        let expected = ratios / 3.0 / 3.0;
        assert_abs_diff_eq!(op.greenhouse_effect(&atmo), expected, epsilon = 1e-12);
    }

    #[test]
    fn emissivity_is_floored() {
        let op = AtmosphereOp::new_with_params(AtmosphereParams {
            greenhouse_coefficient: 0.95,
            ..AtmosphereParams::default()
        });
        assert_eq!(op.emissivity(1.0), 0.3);
    }

    #[test]
    fn disabled_atmosphere_keeps_base_emissivity() {
        let mut config = DaisyworldConfig::default();
        config.atmosphere.enabled = false;
        let mut state = SimulationState::new(&config);
        let op = AtmosphereOp::new_with_params(config.atmosphere.clone());
        op.apply(&mut state);
        assert_eq!(state.atmosphere.co2_ppm, 400.0);
        assert_eq!(state.atmosphere.greenhouse_effect, 0.0);
        assert_eq!(state.atmosphere.emissivity, 1.0);
    }
}
