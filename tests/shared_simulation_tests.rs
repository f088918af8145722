// Concurrent stepping and reading through SharedSimulation

use daisyworld::config::DaisyworldConfig;
use daisyworld::history::Series;
use daisyworld::sim::{SharedSimulation, Simulation};
use std::thread;

#[test]
fn test_incremental_reader_sees_every_sample_once() {
    let sim = Simulation::with_config(DaisyworldConfig::default()).unwrap();
    let shared = SharedSimulation::new(sim);

    let stepper = {
        let shared = shared.clone();
        thread::spawn(move || {
            shared.run(1_000);
            shared.finish();
        })
    };

    // a plotting loop that only pulls what it has not seen yet
    let mut plotted: Vec<f64> = Vec::new();
    while plotted.len() < 1_000 {
        let fresh = shared.history_since(Series::TempPlanet, plotted.len());
        plotted.extend(fresh);
        thread::yield_now();
    }
    stepper.join().unwrap();

    let full = shared.with(|sim| sim.history().series(Series::TempPlanet).to_vec());
    assert_eq!(plotted, full);
    assert_eq!(shared.history_len(), 1_000);
    assert_eq!(shared.snapshot().current_time, 1_000);
}
