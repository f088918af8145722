/// Day/night cycle operation
/// Flips between day and night on a fixed step count and eases the solar
/// intensity toward the current target so dawn and dusk are gradual.

use crate::config::{DaisyworldConfig, DiurnalMode, DiurnalParams};
use crate::sim::simulation::Simulation;
use crate::sim_op::{SimOp, SimOpHandle};
use crate::state::DayNight;

pub struct DiurnalCycleOp {
    pub params: DiurnalParams,
}

impl DiurnalCycleOp {
    pub fn new() -> Self {
        Self::new_with_params(DiurnalParams::default())
    }

    pub fn new_with_params(params: DiurnalParams) -> Self {
        Self { params }
    }

    pub fn handle(config: &DaisyworldConfig) -> SimOpHandle {
        SimOpHandle::new(Box::new(Self::new_with_params(config.diurnal.clone())))
    }

    pub fn target_intensity(&self, is_daytime: bool) -> f64 {
        if is_daytime { 1.0 } else { self.params.night_floor }
    }

    /// Advance the timer one step and ease the intensity toward its target.
    pub fn advance(&self, day_night: &mut DayNight) {
        day_night.day_night_timer += 1;
        if day_night.day_night_timer >= self.params.cycle_steps {
            day_night.day_night_timer = 0;
            day_night.is_daytime = !day_night.is_daytime;
        }

        match self.params.mode {
            DiurnalMode::Cycle => {}
            DiurnalMode::AlwaysDay => day_night.is_daytime = true,
            DiurnalMode::AlwaysNight => day_night.is_daytime = false,
        }

        let target = self.target_intensity(day_night.is_daytime);
        day_night.solar_intensity += (target - day_night.solar_intensity) * self.params.smoothing;
    }

    /// Position inside the current cycle, in [0, 1).
    pub fn cycle_fraction(day_night: &DayNight, cycle_steps: u32) -> f64 {
        day_night.day_night_timer as f64 / cycle_steps as f64
    }
}

impl Default for DiurnalCycleOp {
    fn default() -> Self {
        Self::new()
    }
}

impl SimOp for DiurnalCycleOp {
    fn name(&self) -> &str {
        "DiurnalCycle"
    }

    fn update_sim(&mut self, sim: &mut Simulation) {
        self.advance(&mut sim.state.day_night);
    }
}
