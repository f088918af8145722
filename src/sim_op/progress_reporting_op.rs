/// Progress reporting operation
/// Prints a one-line console summary every `report_every` steps and a final
/// summary when the run finishes.

use crate::sim::simulation::Simulation;
use crate::sim_op::{SimOp, SimOpHandle};
use crate::state::StateSnapshot;
use colored::Colorize;

pub struct ProgressReportingOp {
    pub report_every: u64,
    reports: usize,
}

impl ProgressReportingOp {
    pub fn new() -> Self {
        Self::with_frequency(500) // five day/night cycles
    }

    pub fn with_frequency(report_every: u64) -> Self {
        Self {
            report_every: report_every.max(1),
            reports: 0,
        }
    }

    pub fn handle(report_every: u64) -> SimOpHandle {
        SimOpHandle::new(Box::new(Self::with_frequency(report_every)))
    }

    pub fn reports(&self) -> usize {
        self.reports
    }

    fn should_report(&self, time: u64) -> bool {
        time % self.report_every == 0
    }

    pub fn format_line(s: &StateSnapshot) -> String {
        format!(
            "t={:<8} {:<5} T={:>6.1}K black={:.3} white={:.3} CO2={:>6.1}ppm GH={:.3} e={:.3}",
            s.current_time,
            if s.day_night.is_daytime { "DAY" } else { "NIGHT" },
            s.temperatures.planet,
            s.population.area_black,
            s.population.area_white,
            s.atmosphere.co2_ppm,
            s.atmosphere.greenhouse_effect,
            s.atmosphere.emissivity,
        )
    }
}

impl Default for ProgressReportingOp {
    fn default() -> Self {
        Self::new()
    }
}

impl SimOp for ProgressReportingOp {
    fn name(&self) -> &str {
        "ProgressReporting"
    }

    fn init_sim(&mut self, sim: &mut Simulation) {
        println!(
            "{} {} (report every {} steps)",
            "🌼".normal(),
            sim.name().bold(),
            self.report_every
        );
        println!("   {}", Self::format_line(&sim.snapshot()).dimmed());
    }

    fn update_sim(&mut self, sim: &mut Simulation) {
        let snapshot = sim.snapshot();
        if !self.should_report(snapshot.current_time) {
            return;
        }
        let line = Self::format_line(&snapshot);
        if snapshot.day_night.is_daytime {
            println!("   {}", line.yellow());
        } else {
            println!("   {}", line.blue());
        }
        self.reports += 1;
    }

    fn after_sim(&mut self, sim: &mut Simulation) {
        let s = sim.snapshot();
        println!("{} {}", "🏁".normal(), "Final state:".bold());
        println!("   - Steps run: {}", s.current_time);
        println!("   - Planet temperature: {:.2} K", s.temperatures.planet);
        println!("   - Black daisy area: {:.4}", s.population.area_black);
        println!("   - White daisy area: {:.4}", s.population.area_white);
        println!("   - CO2: {:.2} ppm, CH4: {:.3} ppm, H2O: {:.1} ppm",
                 s.atmosphere.co2_ppm, s.atmosphere.ch4_ppm, s.atmosphere.h2o_ppm);
    }
}
