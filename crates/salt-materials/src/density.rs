// ─────────────────────────────────────────────────────────────────────
// SCPN Salt Neutronics — ClLiF Density Correlation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Experimental density of molten LiCl–LiF.
//!
//! Seven-term fit in molar percent LiCl `C` and temperature `T` [K]:
//! `ρ = a + b·C + c·T + d·C² + e·C³ + f·T·C² + g·C·T²` [g/cm³].
//!
//! Source: G. J. Janz, R. P. T. Tomkins, C. B. Allen, *Molten Salts:
//! Volume 4, Part 4. Mixed Halide Melts*, J. Phys. Chem. Ref. Data 8 (1979)
//! 125–302, <https://doi.org/10.1063/1.555590>. Valid for 660–1000 °C.

use ndarray::Array1;
use salt_types::constants::{
    CELSIUS_TO_KELVIN, CORRELATION_T_MAX_C, CORRELATION_T_MIN_C, DEFAULT_LICL_FRACTION,
};
use salt_types::error::{SaltError, SaltResult};

const A: f64 = 2.25621;
const B: f64 = -8.20475e-3;
const C: f64 = -4.09235e-4;
const D: f64 = 6.37250e-5;
const E: f64 = -2.52846e-7;
const F: f64 = 8.73570e-9;
const G: f64 = -5.11184e-10;

fn in_correlation_range(temp_c: f64) -> bool {
    (CORRELATION_T_MIN_C..=CORRELATION_T_MAX_C).contains(&temp_c)
}

fn correlation(temp_c: f64, licl_frac: f64) -> f64 {
    let t = temp_c + CELSIUS_TO_KELVIN;
    let c = licl_frac * 100.0;
    A + B * c + C * t + D * c * c + E * c * c * c + F * t * c * c + G * c * t * t
}

/// ClLiF density [g/cm³] at `temp_c` [°C] for the reference 0.695 LiCl mixture.
pub fn exp_cllif_density(temp_c: f64) -> f64 {
    exp_cllif_density_with_fraction(temp_c, DEFAULT_LICL_FRACTION)
}

/// ClLiF density [g/cm³] at `temp_c` [°C] and LiCl molar fraction `licl_frac`.
///
/// Outside 660–1000 °C the fit is extrapolated with a warning.
pub fn exp_cllif_density_with_fraction(temp_c: f64, licl_frac: f64) -> f64 {
    if !in_correlation_range(temp_c) {
        log::warn!(
            "ClLiF density extrapolated outside {CORRELATION_T_MIN_C}-{CORRELATION_T_MAX_C} °C: T={temp_c} °C"
        );
    }
    correlation(temp_c, licl_frac)
}

/// Checked density API returning structured errors on invalid inputs.
pub fn try_exp_cllif_density(temp_c: f64, licl_frac: f64) -> SaltResult<f64> {
    if !temp_c.is_finite() || !licl_frac.is_finite() {
        return Err(SaltError::ConfigError(
            "ClLiF density received non-finite temperature or fraction".to_string(),
        ));
    }
    if !in_correlation_range(temp_c) {
        return Err(SaltError::PhysicsViolation(format!(
            "temperature {temp_c} °C outside correlation range \
             [{CORRELATION_T_MIN_C}, {CORRELATION_T_MAX_C}] °C"
        )));
    }
    if !(0.0..=1.0).contains(&licl_frac) {
        return Err(SaltError::PhysicsViolation(format!(
            "LiCl molar fraction {licl_frac} outside [0, 1]"
        )));
    }
    Ok(correlation(temp_c, licl_frac))
}

/// Density along a temperature profile [°C], e.g. an axial loop profile.
pub fn exp_cllif_density_profile(temps_c: &Array1<f64>, licl_frac: f64) -> Array1<f64> {
    let outside = temps_c.iter().filter(|&&t| !in_correlation_range(t)).count();
    if outside > 0 {
        log::warn!(
            "ClLiF density profile extrapolated at {outside}/{} points",
            temps_c.len()
        );
    }
    temps_c.mapv(|t| correlation(t, licl_frac))
}
