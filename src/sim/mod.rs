pub mod shared;
pub mod simulation;

pub use shared::SharedSimulation;
pub use simulation::{SimProps, Simulation};
