// ─────────────────────────────────────────────────────────────────────
// SCPN Salt Neutronics — Salt Materials
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Molten-salt material properties and vessel inventory.

pub mod density;
pub mod inventory;
pub mod volume;
