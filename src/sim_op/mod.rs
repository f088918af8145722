// Step pipeline stages, run in this order by the default simulation
pub mod orbital_forcing_op;
pub mod diurnal_cycle_op;
pub mod atmosphere_op;
pub mod radiative_thermal_op;
pub mod population_op;
pub mod history_recorder_op;
pub mod progress_reporting_op;

pub use atmosphere_op::{AtmosphereInputs, AtmosphereOp};
pub use diurnal_cycle_op::DiurnalCycleOp;
pub use history_recorder_op::HistoryRecorderOp;
pub use orbital_forcing_op::OrbitalForcingOp;
pub use population_op::PopulationOp;
pub use progress_reporting_op::ProgressReportingOp;
pub use radiative_thermal_op::RadiativeThermalOp;

use crate::sim::simulation::Simulation;

pub trait SimOp: Send + Sync {
    /// The name of this operator (for identification and lookup)
    fn name(&self) -> &str;

    /// Called once before the first step
    fn init_sim(&mut self, _sim: &mut Simulation) {
        // Default implementation does nothing
    }

    /// Called every simulation step
    fn update_sim(&mut self, _sim: &mut Simulation) {
        // Default implementation does nothing
    }

    /// Called once when the driver finishes the run
    fn after_sim(&mut self, _sim: &mut Simulation) {
        // Default implementation does nothing
    }
}

pub struct SimOpHandle {
    pub op: Box<dyn SimOp>,
}

impl SimOpHandle {
    /// Create a new SimOpHandle with the given operation
    pub fn new(op: Box<dyn SimOp>) -> Self {
        SimOpHandle { op }
    }
}
