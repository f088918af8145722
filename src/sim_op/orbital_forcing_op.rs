/// Orbital forcing operation
/// Milankovitch-style eccentricity, obliquity and precession as pure
/// functions of the step counter, plus the geometry that turns them into
/// a luminosity multiplier.

use crate::config::{DaisyworldConfig, OrbitalParams};
use crate::sim::simulation::Simulation;
use crate::sim_op::{SimOp, SimOpHandle};
use crate::state::Orbit;
use std::f64::consts::TAU;

/// Orbital elements at step `time`.
///
/// Eccentricity and obliquity ride independent sinusoids between their band
/// limits; precession advances linearly and is never wrapped.
pub fn orbit_at(params: &OrbitalParams, time: u64) -> Orbit {
    let t = time as f64;
    let eccentricity_phase = TAU * t / params.eccentricity_period_steps;
    let obliquity_phase = TAU * t / params.obliquity_period_steps;
    let precession_phase = TAU * t / params.precession_period_steps;

    Orbit {
        eccentricity: params.eccentricity.lerp(0.5 + 0.5 * eccentricity_phase.sin()),
        obliquity_deg: params.obliquity_deg.lerp(0.5 + 0.5 * obliquity_phase.sin()),
        precession_angle_deg: precession_phase.to_degrees(),
    }
}

/// Inverse-square flux multiplier for the current point on the ellipse.
///
/// `orbital_angle_deg` combines precession with the position inside the
/// day/night cycle. With `e = 0` this is exactly 1 for any angle.
pub fn distance_factor(eccentricity: f64, orbital_angle_deg: f64) -> f64 {
    let e = eccentricity;
    let relative_distance = (1.0 - e * e) / (1.0 + e * orbital_angle_deg.to_radians().cos());
    1.0 / (relative_distance * relative_distance)
}

/// Seasonal multiplier from axial tilt, `1 + amplitude * sin(tilt) * cos(phase)`.
pub fn seasonal_factor(obliquity_deg: f64, cycle_fraction: f64, amplitude: f64) -> f64 {
    let seasonal_phase = cycle_fraction * TAU;
    1.0 + amplitude * obliquity_deg.to_radians().sin() * seasonal_phase.cos()
}

/// Combined orbital multiplier on the solar luminosity.
///
/// `cycle_fraction` is the position inside the day/night cycle in [0, 1).
pub fn orbital_luminosity_factor(orbit: &Orbit, cycle_fraction: f64, amplitude: f64) -> f64 {
    let orbital_angle = orbit.precession_angle_deg + cycle_fraction * 360.0;
    distance_factor(orbit.eccentricity, orbital_angle)
        * seasonal_factor(orbit.obliquity_deg, cycle_fraction, amplitude)
}

pub struct OrbitalForcingOp {
    pub params: OrbitalParams,
}

impl OrbitalForcingOp {
    pub fn new() -> Self {
        Self::new_with_params(OrbitalParams::default())
    }

    pub fn new_with_params(params: OrbitalParams) -> Self {
        Self { params }
    }

    pub fn handle(config: &DaisyworldConfig) -> SimOpHandle {
        SimOpHandle::new(Box::new(Self::new_with_params(config.orbital.clone())))
    }
}

impl Default for OrbitalForcingOp {
    fn default() -> Self {
        Self::new()
    }
}

impl SimOp for OrbitalForcingOp {
    fn name(&self) -> &str {
        "OrbitalForcing"
    }

    fn update_sim(&mut self, sim: &mut Simulation) {
        if !self.params.enabled {
            return;
        }
        sim.state.orbit = orbit_at(&self.params, sim.state.current_time);
    }
}
