// ─────────────────────────────────────────────────────────────────────
// SCPN Salt Neutronics — Salt Inventory
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Salt mass held by a cylindrical vessel.

use crate::density::try_exp_cllif_density;
use crate::volume::cylinder_volume;
use salt_types::config::{SaltConfig, VesselConfig};
use salt_types::constants::GRAMS_PER_KG;
use salt_types::error::{SaltError, SaltResult};

/// Salt fill of a vessel.
#[derive(Debug, Clone, Copy)]
pub struct SaltInventory {
    /// Salt density [g/cm³].
    pub density_g_cm3: f64,
    /// Vessel volume [cm³].
    pub volume_cm3: f64,
    /// Salt mass [g].
    pub mass_g: f64,
    /// Salt mass [kg].
    pub mass_kg: f64,
}

/// Fill `vessel` with salt at the state given by `salt`.
pub fn salt_inventory(salt: &SaltConfig, vessel: &VesselConfig) -> SaltResult<SaltInventory> {
    if !(vessel.radius_cm >= 0.0 && vessel.height_cm >= 0.0) {
        return Err(SaltError::ConfigError(format!(
            "vessel dimensions must be non-negative: radius={} cm, height={} cm",
            vessel.radius_cm, vessel.height_cm
        )));
    }

    let density_g_cm3 = try_exp_cllif_density(salt.temperature_c, salt.licl_fraction)?;
    let volume_cm3 = cylinder_volume(vessel.radius_cm, vessel.height_cm);
    let mass_g = density_g_cm3 * volume_cm3;

    log::debug!(
        "salt inventory: ρ={density_g_cm3:.5} g/cm³, V={volume_cm3:.1} cm³, m={mass_g:.1} g"
    );

    Ok(SaltInventory {
        density_g_cm3,
        volume_cm3,
        mass_g,
        mass_kg: mass_g / GRAMS_PER_KG,
    })
}
