// ─────────────────────────────────────────────────────────────────────
// SCPN Salt Neutronics — Surface Store
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Surfaces owned by a geometry, addressed by stable [`SurfaceId`].
//!
//! Cells refer to surfaces by id, so a surface shared between regions is
//! moved once through the store rather than through aliased references.

use crate::translate::{is_translatable, translate_surface};
use salt_types::config::GeometryConfig;
use salt_types::error::{SaltError, SaltResult};
use salt_types::surface::{BoundaryType, Surface};
use std::collections::HashMap;
use std::fmt;

/// Stable handle of a stored surface. Never reused within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(usize);

impl SurfaceId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Named surface with its boundary condition.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceRecord {
    pub name: String,
    pub boundary: BoundaryType,
    pub surface: Surface,
}

#[derive(Debug, Clone, Default)]
pub struct SurfaceStore {
    records: Vec<SurfaceRecord>,
    by_name: HashMap<String, SurfaceId>,
}

impl SurfaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from configuration. Surface names must be unique.
    pub fn from_config(config: &GeometryConfig) -> SaltResult<Self> {
        let mut store = Self::new();
        for entry in &config.surfaces {
            if store.find(&entry.name).is_some() {
                return Err(SaltError::ConfigError(format!(
                    "duplicate surface name '{}'",
                    entry.name
                )));
            }
            store.insert_with_boundary(&entry.name, entry.surface, entry.boundary);
        }
        log::debug!("surface store built with {} surfaces", store.len());
        Ok(store)
    }

    /// Build a store from configuration and move every surface by the
    /// configured offset. Fails as a whole if any surface cannot be moved.
    pub fn place(config: &GeometryConfig) -> SaltResult<Self> {
        let mut store = Self::from_config(config)?;
        let [dx, dy, dz] = config.offset;
        store.translate_all(dx, dy, dz)?;
        Ok(store)
    }

    /// Insert with the default (transmission) boundary.
    pub fn insert(&mut self, name: &str, surface: Surface) -> SurfaceId {
        self.insert_with_boundary(name, surface, BoundaryType::default())
    }

    /// Insert a surface. A repeated name points lookups at the newest surface;
    /// the older id stays valid.
    pub fn insert_with_boundary(
        &mut self,
        name: &str,
        surface: Surface,
        boundary: BoundaryType,
    ) -> SurfaceId {
        let id = SurfaceId(self.records.len());
        self.records.push(SurfaceRecord {
            name: name.to_string(),
            boundary,
            surface,
        });
        self.by_name.insert(name.to_string(), id);
        id
    }

    pub fn get(&self, id: SurfaceId) -> SaltResult<&SurfaceRecord> {
        self.records
            .get(id.0)
            .ok_or(SaltError::UnknownSurface { id: id.0 })
    }

    pub fn get_mut(&mut self, id: SurfaceId) -> SaltResult<&mut SurfaceRecord> {
        self.records
            .get_mut(id.0)
            .ok_or(SaltError::UnknownSurface { id: id.0 })
    }

    pub fn find(&self, name: &str) -> Option<SurfaceId> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SurfaceId, &SurfaceRecord)> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| (SurfaceId(i), r))
    }

    /// Translate one surface by id.
    pub fn translate(&mut self, id: SurfaceId, dx: f64, dy: f64, dz: f64) -> SaltResult<&Surface> {
        let record = self.get_mut(id)?;
        log::debug!("translating surface {id} '{}'", record.name);
        let surface = translate_surface(&mut record.surface, dx, dy, dz)?;
        Ok(&*surface)
    }

    /// Translate every stored surface. All-or-nothing: if any surface is
    /// unsupported, nothing is moved.
    pub fn translate_all(&mut self, dx: f64, dy: f64, dz: f64) -> SaltResult<()> {
        if let Some(bad) = self.records.iter().find(|r| !is_translatable(&r.surface)) {
            return Err(SaltError::UnsupportedSurface {
                kind: bad.surface.kind().to_string(),
            });
        }
        for record in &mut self.records {
            translate_surface(&mut record.surface, dx, dy, dz)?;
        }
        log::debug!(
            "translated {} surfaces by ({dx}, {dy}, {dz})",
            self.records.len()
        );
        Ok(())
    }
}
