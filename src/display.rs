//! Presentation helpers for a renderer drawing the planet as a disc of
//! daisy markers.
//!
//! The layout owns its own seeded RNG for marker placement and shuffling.
//! Nothing here reads from or writes to the simulation numerics.

use crate::constants::DEFAULT_DISPLAY_UNITS;
use crate::state::Population;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::f32::consts::TAU;

/// What a display unit shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SurfaceKind {
    BlackDaisy,
    WhiteDaisy,
    BareGround,
}

/// Screen-space disc the planet is drawn in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetDisc {
    pub center: Vec2,
    pub radius_px: f32,
}

impl Default for PlanetDisc {
    fn default() -> Self {
        Self {
            center: Vec2::new(400.0, 400.0),
            radius_px: 350.0,
        }
    }
}

/// Per-kind unit counts for `units` markers: floor of each daisy share, bare
/// ground takes the remainder.
pub fn unit_counts(units: usize, population: &Population) -> (usize, usize, usize) {
    let share = |area: f64| ((units as f64 * area.max(0.0)).floor() as usize).min(units);
    let black = share(population.area_black);
    let white = share(population.area_white).min(units - black);
    (black, white, units - black - white)
}

pub struct DisplayLayout {
    disc: PlanetDisc,
    positions: Vec<Vec2>,
    rng: StdRng,
}

impl DisplayLayout {
    pub fn new(disc: PlanetDisc, units: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let positions = Self::scatter(&disc, units, &mut rng);
        Self { disc, positions, rng }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(PlanetDisc::default(), DEFAULT_DISPLAY_UNITS, seed)
    }

    /// Polar sampling inside 95% of the radius, snapped to whole pixels.
    fn scatter(disc: &PlanetDisc, units: usize, rng: &mut StdRng) -> Vec<Vec2> {
        let max_r = disc.radius_px * 0.95;
        (0..units)
            .map(|_| {
                let theta = rng.random_range(0.0..TAU);
                let r = if max_r > 0.0 { rng.random_range(0.0..max_r) } else { 0.0 };
                (disc.center + Vec2::from_angle(theta) * r).round()
            })
            .collect()
    }

    pub fn disc(&self) -> &PlanetDisc {
        &self.disc
    }

    pub fn units(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    /// One kind per unit, in shuffled display order.
    pub fn assign_colors(&mut self, population: &Population) -> Vec<SurfaceKind> {
        let (black, white, bare) = unit_counts(self.units(), population);
        let mut kinds = Vec::with_capacity(self.units());
        kinds.extend(std::iter::repeat_n(SurfaceKind::BlackDaisy, black));
        kinds.extend(std::iter::repeat_n(SurfaceKind::WhiteDaisy, white));
        kinds.extend(std::iter::repeat_n(SurfaceKind::BareGround, bare));
        kinds.shuffle(&mut self.rng);
        kinds
    }
}
