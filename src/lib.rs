//! Zero-dimensional Daisyworld: two daisy populations whose albedo steers
//! the planet temperature that in turn sets their growth, coupled with a
//! greenhouse-gas atmosphere and orbital/diurnal forcing.
//!
//! A [`sim::Simulation`] owns one [`state::SimulationState`] and advances it
//! with an ordered pipeline of [`sim_op::SimOp`] stages.

pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod history;
pub mod sim;
pub mod sim_op;
pub mod state;
pub mod temp_utils;

pub use config::DaisyworldConfig;
pub use error::ConfigError;
pub use history::{History, Series};
pub use sim::{SharedSimulation, SimProps, Simulation};
pub use state::{SimulationState, StateSnapshot};
