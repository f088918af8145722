//! A simulation handle that a stepping loop and plotting readers can share.
//!
//! A step holds the write lock from the first stage to the history append,
//! so readers only ever observe whole steps and equal-length series.

use crate::history::Series;
use crate::sim::simulation::Simulation;
use crate::state::StateSnapshot;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Clone)]
pub struct SharedSimulation {
    inner: Arc<RwLock<Simulation>>,
}

impl SharedSimulation {
    pub fn new(sim: Simulation) -> Self {
        Self {
            inner: Arc::new(RwLock::new(sim)),
        }
    }

    // State is consistent between steps, so a panicked holder leaves nothing half-written.
    fn read(&self) -> RwLockReadGuard<'_, Simulation> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Simulation> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn step(&self) {
        self.write().step();
    }

    pub fn run(&self, steps: u64) {
        for _ in 0..steps {
            self.step();
        }
    }

    pub fn finish(&self) {
        self.write().finish();
    }

    pub fn current_time(&self) -> u64 {
        self.read().current_time()
    }

    pub fn snapshot(&self) -> StateSnapshot {
        self.read().snapshot()
    }

    pub fn history_len(&self) -> usize {
        self.read().history().len()
    }

    /// Copy of the samples recorded at or after row `from`.
    pub fn history_since(&self, series: Series, from: usize) -> Vec<f64> {
        self.read().history().since(series, from).to_vec()
    }

    /// Run `f` against the simulation under the read lock.
    pub fn with<R>(&self, f: impl FnOnce(&Simulation) -> R) -> R {
        f(&self.read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DaisyworldConfig;
    use std::thread;

    #[test]
    fn readers_see_whole_steps() {
        let sim = Simulation::with_config(DaisyworldConfig::default()).unwrap();
        let shared = SharedSimulation::new(sim);

        let stepper = {
            let shared = shared.clone();
            thread::spawn(move || shared.run(500))
        };

        let mut seen = 0;
        while seen < 500 {
            let (time, lens) = shared.with(|sim| {
                let history = sim.history();
                let lens: Vec<usize> =
                    Series::ALL.iter().map(|s| history.series(*s).len()).collect();
                (sim.current_time(), lens)
            });
            for len in lens {
                assert_eq!(len as u64, time);
            }
            seen = time;
        }

        stepper.join().unwrap();
        assert_eq!(shared.current_time(), 500);
        assert_eq!(shared.history_since(Series::TempPlanet, 495).len(), 5);
    }
}
