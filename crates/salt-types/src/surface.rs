// ─────────────────────────────────────────────────────────────────────
// SCPN Salt Neutronics — Surface Model
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Quadric surfaces bounding Monte Carlo geometry cells.
//!
//! Each surface is described by an implicit function `f(x, y, z)`;
//! the negative half-space (`f < 0`) is the inside / lower side.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of surface primitives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Surface {
    /// Plane `x = x0`.
    XPlane { x0: f64 },
    /// Plane `y = y0`.
    YPlane { y0: f64 },
    /// Plane `z = z0`.
    ZPlane { z0: f64 },
    /// General plane `a·x + b·y + c·z = d`.
    Plane { a: f64, b: f64, c: f64, d: f64 },
    /// Sphere centred at `(x0, y0, z0)` with radius `r`.
    Sphere { x0: f64, y0: f64, z0: f64, r: f64 },
    /// Infinite cylinder parallel to the x axis.
    XCylinder { y0: f64, z0: f64, r: f64 },
    /// Infinite cylinder parallel to the y axis.
    YCylinder { x0: f64, z0: f64, r: f64 },
    /// Infinite cylinder parallel to the z axis.
    ZCylinder { x0: f64, y0: f64, r: f64 },
    /// Double cone along z with apex `(x0, y0, z0)`; `r2` is tan² of the half-angle.
    ZCone { x0: f64, y0: f64, z0: f64, r2: f64 },
    /// Elliptic torus about a z-parallel axis: major radius `a`,
    /// vertical semi-axis `b`, horizontal semi-axis `c`.
    ZTorus {
        x0: f64,
        y0: f64,
        z0: f64,
        a: f64,
        b: f64,
        c: f64,
    },
}

/// Fieldless tag of a [`Surface`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    XPlane,
    YPlane,
    ZPlane,
    Plane,
    Sphere,
    XCylinder,
    YCylinder,
    ZCylinder,
    ZCone,
    ZTorus,
}

impl SurfaceKind {
    pub fn name(self) -> &'static str {
        match self {
            SurfaceKind::XPlane => "x-plane",
            SurfaceKind::YPlane => "y-plane",
            SurfaceKind::ZPlane => "z-plane",
            SurfaceKind::Plane => "plane",
            SurfaceKind::Sphere => "sphere",
            SurfaceKind::XCylinder => "x-cylinder",
            SurfaceKind::YCylinder => "y-cylinder",
            SurfaceKind::ZCylinder => "z-cylinder",
            SurfaceKind::ZCone => "z-cone",
            SurfaceKind::ZTorus => "z-torus",
        }
    }
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Surface {
    pub fn kind(&self) -> SurfaceKind {
        match self {
            Surface::XPlane { .. } => SurfaceKind::XPlane,
            Surface::YPlane { .. } => SurfaceKind::YPlane,
            Surface::ZPlane { .. } => SurfaceKind::ZPlane,
            Surface::Plane { .. } => SurfaceKind::Plane,
            Surface::Sphere { .. } => SurfaceKind::Sphere,
            Surface::XCylinder { .. } => SurfaceKind::XCylinder,
            Surface::YCylinder { .. } => SurfaceKind::YCylinder,
            Surface::ZCylinder { .. } => SurfaceKind::ZCylinder,
            Surface::ZCone { .. } => SurfaceKind::ZCone,
            Surface::ZTorus { .. } => SurfaceKind::ZTorus,
        }
    }

    /// Implicit surface function at point `p = [x, y, z]`.
    ///
    /// Zero on the surface, negative on the inside (or below a plane).
    pub fn evaluate(&self, p: [f64; 3]) -> f64 {
        let [x, y, z] = p;
        match *self {
            Surface::XPlane { x0 } => x - x0,
            Surface::YPlane { y0 } => y - y0,
            Surface::ZPlane { z0 } => z - z0,
            Surface::Plane { a, b, c, d } => a * x + b * y + c * z - d,
            Surface::Sphere { x0, y0, z0, r } => {
                let (dx, dy, dz) = (x - x0, y - y0, z - z0);
                dx * dx + dy * dy + dz * dz - r * r
            }
            Surface::XCylinder { y0, z0, r } => {
                let (dy, dz) = (y - y0, z - z0);
                dy * dy + dz * dz - r * r
            }
            Surface::YCylinder { x0, z0, r } => {
                let (dx, dz) = (x - x0, z - z0);
                dx * dx + dz * dz - r * r
            }
            Surface::ZCylinder { x0, y0, r } => {
                let (dx, dy) = (x - x0, y - y0);
                dx * dx + dy * dy - r * r
            }
            Surface::ZCone { x0, y0, z0, r2 } => {
                let (dx, dy, dz) = (x - x0, y - y0, z - z0);
                dx * dx + dy * dy - r2 * dz * dz
            }
            Surface::ZTorus {
                x0,
                y0,
                z0,
                a,
                b,
                c,
            } => {
                let (dx, dy, dz) = (x - x0, y - y0, z - z0);
                let rho = (dx * dx + dy * dy).sqrt();
                dz * dz / (b * b) + (rho - a) * (rho - a) / (c * c) - 1.0
            }
        }
    }
}

/// Particle boundary condition applied at a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryType {
    #[default]
    Transmission,
    Vacuum,
    Reflective,
    White,
}
