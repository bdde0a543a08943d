// ─────────────────────────────────────────────────────────────────────
// SCPN Salt Neutronics — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Offset between the Celsius and Kelvin scales (K).
pub const CELSIUS_TO_KELVIN: f64 = 273.15;

/// Default LiCl molar fraction of the ClLiF mixture.
/// Reference composition of the Janz density correlation.
pub const DEFAULT_LICL_FRACTION: f64 = 0.695;

/// Lower bound of the ClLiF density correlation (°C).
pub const CORRELATION_T_MIN_C: f64 = 660.0;

/// Upper bound of the ClLiF density correlation (°C).
pub const CORRELATION_T_MAX_C: f64 = 1000.0;

/// Grams per kilogram.
pub const GRAMS_PER_KG: f64 = 1000.0;
