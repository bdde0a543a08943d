// ─────────────────────────────────────────────────────────────────────
// SCPN Salt Neutronics — Vessel Volume
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::f64::consts::PI;

/// Right circular cylinder volume `π·r²·h` in the cube of the input length unit.
///
/// Inputs are expected to be non-negative; negative values are not rejected.
pub fn cylinder_volume(radius: f64, height: f64) -> f64 {
    PI * radius * radius * height
}
