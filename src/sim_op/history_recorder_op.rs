/// History recording operation
/// Appends one row of every recorded quantity after the other stages settle.

use crate::history::Series;
use crate::sim::simulation::Simulation;
use crate::sim_op::{SimOp, SimOpHandle};
use crate::state::SimulationState;

#[derive(Debug, Default)]
pub struct HistoryRecorderOp;

impl HistoryRecorderOp {
    pub fn new() -> Self {
        Self
    }

    pub fn handle() -> SimOpHandle {
        SimOpHandle::new(Box::new(Self::new()))
    }

    pub fn record(state: &mut SimulationState) {
        let sample = Series::sample(&state.snapshot());
        state.history.push(state.current_time, sample);
    }
}

impl SimOp for HistoryRecorderOp {
    fn name(&self) -> &str {
        "HistoryRecorder"
    }

    fn update_sim(&mut self, sim: &mut Simulation) {
        Self::record(&mut sim.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DaisyworldConfig;

    #[test]
    fn records_current_values_at_current_time() {
        let mut state = SimulationState::new(&DaisyworldConfig::default());
        state.current_time = 7;
        state.atmosphere.co2_ppm = 512.0;
        HistoryRecorderOp::record(&mut state);

        assert_eq!(state.history.time(), &[7]);
        assert_eq!(state.history.latest(Series::Co2), Some(512.0));
        assert_eq!(state.history.latest(Series::TempPlanet), Some(250.0));
    }

    #[test]
    fn earlier_rows_are_untouched() {
        let mut state = SimulationState::new(&DaisyworldConfig::default());
        HistoryRecorderOp::record(&mut state);
        state.atmosphere.co2_ppm = 600.0;
        state.current_time = 1;
        HistoryRecorderOp::record(&mut state);

        assert_eq!(state.history.series(Series::Co2), &[400.0, 600.0]);
    }
}
