/// Radiative-thermal operation
/// Drives ocean, land and atmosphere toward their Stefan–Boltzmann
/// equilibrium under heat-capacity smoothing and blends them into a single
/// planet temperature.

use crate::config::{DaisyworldConfig, TerrainParams, ThermalParams};
use crate::sim::simulation::Simulation;
use crate::sim_op::diurnal_cycle_op::DiurnalCycleOp;
use crate::sim_op::orbital_forcing_op::orbital_luminosity_factor;
use crate::sim_op::{SimOp, SimOpHandle};
use crate::state::{SimulationState, Temperatures};
use crate::temp_utils::{equilibrium_kelvin, smooth_toward};

/// Equilibrium (no heat capacity) temperatures for one luminosity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equilibrium {
    pub ocean: f64,
    pub land: f64,
    pub atmosphere: f64,
}

#[derive(Debug, Clone)]
pub struct RadiativeThermalOp {
    pub thermal: ThermalParams,
    pub terrain: TerrainParams,
    /// Apply distance and seasonal factors
    pub orbital_forcing: bool,
    pub seasonal_amplitude: f64,
    pub cycle_steps: u32,
}

impl RadiativeThermalOp {
    pub fn from_config(config: &DaisyworldConfig) -> Self {
        Self {
            thermal: config.thermal.clone(),
            terrain: config.terrain.clone(),
            orbital_forcing: config.orbital.enabled,
            seasonal_amplitude: config.orbital.seasonal_amplitude,
            cycle_steps: config.diurnal.cycle_steps,
        }
    }

    pub fn handle(config: &DaisyworldConfig) -> SimOpHandle {
        SimOpHandle::new(Box::new(Self::from_config(config)))
    }

    /// `solar_luminosity × solar_intensity × distance_factor × seasonal_factor`.
    pub fn effective_luminosity(&self, state: &SimulationState) -> f64 {
        let base = state.solar_luminosity * state.day_night.solar_intensity;
        if !self.orbital_forcing {
            return base;
        }
        let cycle_fraction = DiurnalCycleOp::cycle_fraction(&state.day_night, self.cycle_steps);
        base * orbital_luminosity_factor(&state.orbit, cycle_fraction, self.seasonal_amplitude)
    }

    pub fn equilibrium(&self, luminosity: f64, emissivity: f64) -> Equilibrium {
        let sigma = self.thermal.stefan_boltzmann;
        let ocean = equilibrium_kelvin(luminosity, self.terrain.albedo_ocean, emissivity, sigma);
        let land = equilibrium_kelvin(luminosity, self.terrain.albedo_land, emissivity, sigma);
        Equilibrium {
            ocean,
            land,
            atmosphere: ocean * self.terrain.ocean_ratio + land * self.terrain.land_ratio,
        }
    }

    /// Smooth the tracked temperatures toward `target` and re-blend the planet.
    pub fn relax(&self, temps: &mut Temperatures, target: &Equilibrium) {
        let t = &self.thermal;
        temps.atmosphere =
            smooth_toward(temps.atmosphere, target.atmosphere, t.heat_capacity_atmosphere);
        temps.ocean = smooth_toward(temps.ocean, target.ocean, t.heat_capacity_ocean);
        temps.land = smooth_toward(temps.land, target.land, t.heat_capacity_land);

        temps.planet = temps.atmosphere * t.planet_atmosphere_weight
            + temps.ocean * self.terrain.ocean_ratio * t.planet_surface_weight
            + temps.land * self.terrain.land_ratio * t.planet_surface_weight;
    }

    pub fn apply(&self, state: &mut SimulationState) {
        state.solar_luminosity += self.thermal.luminosity_increase_rate;

        let luminosity = self.effective_luminosity(state);
        let target = self.equilibrium(luminosity, state.atmosphere.emissivity);
        self.relax(&mut state.temperatures, &target);
    }
}

impl SimOp for RadiativeThermalOp {
    fn name(&self) -> &str {
        "RadiativeThermal"
    }

    fn update_sim(&mut self, sim: &mut Simulation) {
        self.apply(&mut sim.state);
    }
}
