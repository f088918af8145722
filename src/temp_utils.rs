//! Utilities for converting between temperature scales and for the
//! radiative-equilibrium relations used by the thermal stage.

use crate::constants::TO_KELVIN;

/// Converts Celsius to Kelvin.
pub fn celsius_to_kelvin(temp_c: f64) -> f64 {
    temp_c + TO_KELVIN
}

/// Converts Kelvin to Celsius.
pub fn kelvin_to_celsius(temp_k: f64) -> f64 {
    temp_k - TO_KELVIN
}

/// Radiative equilibrium temperature of a surface with no heat capacity.
///
/// Solves `L (1 - albedo) = emissivity * sigma * T^4` for `T`.
///
/// # Arguments
/// - `luminosity`: Incoming flux reaching the surface (W/m²)
/// - `albedo`: Fraction of the flux reflected by the surface
/// - `emissivity`: Radiative efficiency of the planet
/// - `sigma`: Stefan–Boltzmann constant
///
/// # Returns
/// Temperature in Kelvin. A negative radicand (only reachable with
/// out-of-range constants) yields 0 K rather than NaN.
pub fn equilibrium_kelvin(luminosity: f64, albedo: f64, emissivity: f64, sigma: f64) -> f64 {
    let radicand = luminosity * (1.0 - albedo) / (emissivity * sigma);
    radicand.max(0.0).powf(0.25)
}

/// Move `current` toward `target`, keeping `heat_capacity` of the old value.
pub fn smooth_toward(current: f64, target: f64, heat_capacity: f64) -> f64 {
    current * heat_capacity + target * (1.0 - heat_capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::STEFAN_BOLTZMANN_CONSTANT;
    use approx::assert_abs_diff_eq;

    #[test]
    fn celsius_round_trip() {
        assert_abs_diff_eq!(celsius_to_kelvin(0.0), 273.15);
        assert_abs_diff_eq!(kelvin_to_celsius(celsius_to_kelvin(22.35)), 22.35, epsilon = 1e-12);
    }

    #[test]
    fn equilibrium_matches_stefan_boltzmann() {
        let t = equilibrium_kelvin(450.0, 0.06, 1.0, STEFAN_BOLTZMANN_CONSTANT);
        // back-substitute into L(1-a) = e sigma T^4
        assert_abs_diff_eq!(STEFAN_BOLTZMANN_CONSTANT * t.powi(4), 450.0 * 0.94, epsilon = 1e-6);
    }

    #[test]
    fn lower_emissivity_warms_the_surface() {
        let clear = equilibrium_kelvin(450.0, 0.3, 1.0, STEFAN_BOLTZMANN_CONSTANT);
        let trapped = equilibrium_kelvin(450.0, 0.3, 0.62, STEFAN_BOLTZMANN_CONSTANT);
        assert!(trapped > clear);
    }

    #[test]
    fn negative_radicand_is_zero_not_nan() {
        let t = equilibrium_kelvin(450.0, 1.5, 1.0, STEFAN_BOLTZMANN_CONSTANT);
        assert_eq!(t, 0.0);
    }

    #[test]
    fn smoothing_keeps_capacity_share() {
        assert_abs_diff_eq!(smooth_toward(250.0, 350.0, 0.9), 260.0, epsilon = 1e-12);
        assert_abs_diff_eq!(smooth_toward(250.0, 350.0, 0.0), 350.0);
    }
}
