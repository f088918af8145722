use crate::config::DaisyworldConfig;
use crate::error::ConfigError;
use crate::history::History;
use crate::sim_op::{
    AtmosphereOp, DiurnalCycleOp, HistoryRecorderOp, OrbitalForcingOp, PopulationOp,
    RadiativeThermalOp, SimOp, SimOpHandle,
};
use crate::state::{SimulationState, StateSnapshot};
use tracing::{debug, info};

pub struct Simulation {
    pub(crate) state: SimulationState,
    config: DaisyworldConfig,
    ops: Vec<Box<dyn SimOp>>,
    name: String,
    initialized: bool,
    finished: bool,
}

pub struct SimProps {
    pub name: &'static str,
    pub config: DaisyworldConfig,
    pub ops: Vec<SimOpHandle>,
}

impl SimProps {
    /// The full pipeline: orbit, day/night, atmosphere, thermal, population, history.
    pub fn standard(name: &'static str, config: DaisyworldConfig) -> Self {
        let ops = Simulation::standard_ops(&config);
        Self { name, config, ops }
    }
}

impl Simulation {
    pub fn new(props: SimProps) -> Result<Simulation, ConfigError> {
        props.config.validate()?;
        let ops = props.ops.into_iter().map(|handle| handle.op).collect::<Vec<_>>();

        info!(
            name = props.name,
            ops = ops.len(),
            luminosity = props.config.thermal.solar_luminosity,
            atmosphere = props.config.atmosphere.enabled,
            orbital = props.config.orbital.enabled,
            diurnal = ?props.config.diurnal.mode,
            "daisyworld simulation created"
        );

        Ok(Simulation {
            state: SimulationState::new(&props.config),
            config: props.config,
            ops,
            name: props.name.to_string(),
            initialized: false,
            finished: false,
        })
    }

    /// Standard pipeline over `config`.
    pub fn with_config(config: DaisyworldConfig) -> Result<Simulation, ConfigError> {
        Self::new(SimProps::standard("daisyworld", config))
    }

    pub fn standard_ops(config: &DaisyworldConfig) -> Vec<SimOpHandle> {
        vec![
            OrbitalForcingOp::handle(config),
            DiurnalCycleOp::handle(config),
            AtmosphereOp::handle(config),
            RadiativeThermalOp::handle(config),
            PopulationOp::handle(config),
            HistoryRecorderOp::handle(),
        ]
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &DaisyworldConfig {
        &self.config
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.state.history
    }

    pub fn snapshot(&self) -> StateSnapshot {
        self.state.snapshot()
    }

    /// Get the current simulation step number
    pub fn current_time(&self) -> u64 {
        self.state.current_time
    }

    /// Advance the model one step. Always succeeds.
    pub fn step(&mut self) {
        if !self.initialized {
            self.simulate_init();
        }
        self.simulate_step();
        self.advance();
    }

    /// Run `steps` steps then the end-of-run hooks.
    pub fn run(&mut self, steps: u64) {
        for _ in 0..steps {
            self.step();
        }
        self.finish();
    }

    /// Run a single step with custom operators (for testing)
    pub fn step_with_ops(&mut self, ops: &mut [&mut dyn SimOp]) {
        for op in ops {
            op.update_sim(self);
        }
        self.advance();
    }

    /// Call every operator's `after_sim` once. Later calls do nothing.
    pub fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;

        let mut ops = std::mem::take(&mut self.ops);
        for op in &mut ops {
            op.after_sim(self);
        }
        self.ops = ops;
    }

    fn advance(&mut self) {
        self.state.current_time += 1;
        debug!(
            time = self.state.current_time,
            planet_k = self.state.temperatures.planet,
            black = self.state.population.area_black,
            white = self.state.population.area_white,
            "step complete"
        );
    }

    fn simulate_init(&mut self) {
        self.initialized = true;
        let mut ops = std::mem::take(&mut self.ops);
        for op in &mut ops {
            op.init_sim(self);
        }
        self.ops = ops;
    }

    fn simulate_step(&mut self) {
        let mut ops = std::mem::take(&mut self.ops);
        for op in &mut ops {
            op.update_sim(self);
        }
        self.ops = ops;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::Series;
    use approx::assert_abs_diff_eq;

    #[test]
    fn creation() {
        let sim = Simulation::with_config(DaisyworldConfig::default()).unwrap();
        assert_eq!(sim.current_time(), 0);
        assert_eq!(sim.name(), "daisyworld");
        assert_eq!(sim.ops.len(), 6);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = DaisyworldConfig::default();
        config.population.death_rate = 1.5;
        assert!(Simulation::with_config(config).is_err());
    }

    #[test]
    fn simple_sim() {
        pub struct CoolingOp {
            pub intensity: f64,
        }

        impl SimOp for CoolingOp {
            fn name(&self) -> &str {
                "Cooling"
            }

            fn update_sim(&mut self, sim: &mut Simulation) {
                sim.state.temperatures.planet *= self.intensity;
            }
        }

        let mut sim = Simulation::new(SimProps {
            name: "cooling",
            config: DaisyworldConfig::default(),
            ops: vec![SimOpHandle::new(Box::new(CoolingOp { intensity: 0.99 }))],
        })
        .unwrap();

        sim.run(10);

        assert_eq!(sim.current_time(), 10);
        let expected = 250.0 * 0.99_f64.powi(10);
        assert_abs_diff_eq!(sim.state().temperatures.planet, expected, epsilon = 1e-9);
        // no recorder in this pipeline
        assert!(sim.history().is_empty());
    }

    #[test]
    fn hooks_fire_once() {
        #[derive(Default)]
        struct Counter {
            init: u32,
            update: u32,
            after: u32,
        }
        struct CountingOp(std::sync::Arc<std::sync::Mutex<Counter>>);

        impl SimOp for CountingOp {
            fn name(&self) -> &str {
                "Counting"
            }
            fn init_sim(&mut self, _sim: &mut Simulation) {
                self.0.lock().unwrap().init += 1;
            }
            fn update_sim(&mut self, _sim: &mut Simulation) {
                self.0.lock().unwrap().update += 1;
            }
            fn after_sim(&mut self, _sim: &mut Simulation) {
                self.0.lock().unwrap().after += 1;
            }
        }

        let counter = std::sync::Arc::new(std::sync::Mutex::new(Counter::default()));
        let mut sim = Simulation::new(SimProps {
            name: "hooks",
            config: DaisyworldConfig::default(),
            ops: vec![SimOpHandle::new(Box::new(CountingOp(counter.clone())))],
        })
        .unwrap();

        sim.run(4);
        sim.finish();

        let counter = counter.lock().unwrap();
        assert_eq!(counter.init, 1);
        assert_eq!(counter.update, 4);
        assert_eq!(counter.after, 1);
    }

    #[test]
    fn history_tracks_clock() {
        let mut sim = Simulation::with_config(DaisyworldConfig::default()).unwrap();
        for _ in 0..25 {
            sim.step();
        }
        assert_eq!(sim.history().len(), 25);
        assert_eq!(sim.history().time().last(), Some(&24));
        assert_eq!(sim.history().series(Series::AreaBare).len(), 25);
    }
}
