/// Population dynamics operation
/// Albedo feedback on each daisy patch, a parabolic growth response around
/// the optimum temperature, and logistic growth into bare ground.

use crate::config::{DaisyworldConfig, PopulationParams, TerrainParams};
use crate::sim::simulation::Simulation;
use crate::sim_op::{SimOp, SimOpHandle};
use crate::state::SimulationState;

/// Temperature of a daisy patch: darker-than-average patches run warm.
pub fn local_temperature(
    planet_temp_k: f64,
    planetary_albedo: f64,
    species_albedo: f64,
    feedback_factor: f64,
) -> f64 {
    planet_temp_k + feedback_factor * (planetary_albedo - species_albedo)
}

/// `1 - coefficient * (optimum - local)^2`, floored at 0.
pub fn growth_factor(local_temp_k: f64, optimum_k: f64, coefficient: f64) -> f64 {
    let offset = optimum_k - local_temp_k;
    (1.0 - coefficient * offset * offset).max(0.0)
}

/// Per-step change of one species' area.
pub fn area_delta(area: f64, bare_area: f64, growth: f64, death_rate: f64) -> f64 {
    area * (bare_area * growth - death_rate)
}

#[derive(Debug, Clone)]
pub struct PopulationOp {
    pub params: PopulationParams,
    pub terrain: TerrainParams,
}

impl PopulationOp {
    pub fn from_config(config: &DaisyworldConfig) -> Self {
        Self {
            params: config.population.clone(),
            terrain: config.terrain.clone(),
        }
    }

    pub fn handle(config: &DaisyworldConfig) -> SimOpHandle {
        SimOpHandle::new(Box::new(Self::from_config(config)))
    }

    pub fn apply(&self, state: &mut SimulationState) {
        let p = &self.params;
        state.population.settle(p.min_area);

        let albedo = state.population.planetary_albedo(&self.terrain, p);
        state.planetary_albedo = albedo;

        let planet = state.temperatures.planet;
        let temp_black = local_temperature(planet, albedo, p.albedo_black, p.feedback_factor);
        let temp_white = local_temperature(planet, albedo, p.albedo_white, p.feedback_factor);
        state.temperatures.black_daisy = temp_black;
        state.temperatures.white_daisy = temp_white;

        let population = &mut state.population;
        let (optimum, coefficient) = (p.optimal_temperature_k, p.growth_coefficient);
        population.growth_black = growth_factor(temp_black, optimum, coefficient);
        population.growth_white = growth_factor(temp_white, optimum, coefficient);

        let bare = population.area_bare;
        let delta_black =
            area_delta(population.area_black, bare, population.growth_black, p.death_rate);
        let delta_white =
            area_delta(population.area_white, bare, population.growth_white, p.death_rate);
        population.area_black += delta_black;
        population.area_white += delta_white;
        population.settle(p.min_area);
    }
}

impl SimOp for PopulationOp {
    fn name(&self) -> &str {
        "PopulationDynamics"
    }

    fn update_sim(&mut self, sim: &mut Simulation) {
        self.apply(&mut sim.state);
    }
}
