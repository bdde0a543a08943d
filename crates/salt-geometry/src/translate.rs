// ─────────────────────────────────────────────────────────────────────
// SCPN Salt Neutronics — Surface Translation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Rigid translation of bounding surfaces.
//!
//! A surface `f(p) = 0` translated by `δ` becomes `f(p - δ) = 0`.
//! For the general plane `a·x + b·y + c·z = d` this gives
//! `d' = d + a·dx + b·dy + c·dz` with the normal unchanged.

use salt_types::error::{SaltError, SaltResult};
use salt_types::surface::Surface;

/// Whether [`translate_surface`] accepts this surface.
pub fn is_translatable(surface: &Surface) -> bool {
    match surface {
        Surface::XPlane { .. }
        | Surface::YPlane { .. }
        | Surface::ZPlane { .. }
        | Surface::Plane { .. }
        | Surface::Sphere { .. } => true,
        Surface::XCylinder { .. }
        | Surface::YCylinder { .. }
        | Surface::ZCylinder { .. }
        | Surface::ZCone { .. }
        | Surface::ZTorus { .. } => false,
    }
}

/// Translate `surface` in place by `(dx, dy, dz)` and hand it back for chaining.
///
/// Unsupported kinds are rejected before any field is written.
pub fn translate_surface(
    surface: &mut Surface,
    dx: f64,
    dy: f64,
    dz: f64,
) -> SaltResult<&mut Surface> {
    match surface {
        Surface::XPlane { x0 } => *x0 += dx,
        Surface::YPlane { y0 } => *y0 += dy,
        Surface::ZPlane { z0 } => *z0 += dz,
        Surface::Plane { a, b, c, d } => *d += *a * dx + *b * dy + *c * dz,
        Surface::Sphere { x0, y0, z0, .. } => {
            *x0 += dx;
            *y0 += dy;
            *z0 += dz;
        }
        Surface::XCylinder { .. }
        | Surface::YCylinder { .. }
        | Surface::ZCylinder { .. }
        | Surface::ZCone { .. }
        | Surface::ZTorus { .. } => {
            return Err(SaltError::UnsupportedSurface {
                kind: surface.kind().to_string(),
            });
        }
    }
    log::debug!("translated {} by ({dx}, {dy}, {dz})", surface.kind());
    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_plane_only_offset_changes() {
        let mut s = Surface::XPlane { x0: 1.0 };
        translate_surface(&mut s, 2.5, 7.0, -3.0).unwrap();
        assert_eq!(s, Surface::XPlane { x0: 3.5 });
    }

    #[test]
    fn test_y_and_z_planes_use_own_axis() {
        let mut y = Surface::YPlane { y0: -1.0 };
        let mut z = Surface::ZPlane { z0: 10.0 };
        translate_surface(&mut y, 100.0, 2.0, 100.0).unwrap();
        translate_surface(&mut z, 100.0, 100.0, -4.0).unwrap();
        assert_eq!(y, Surface::YPlane { y0: 1.0 });
        assert_eq!(z, Surface::ZPlane { z0: 6.0 });
    }

    #[test]
    fn test_plane_keeps_normal_shifts_d() {
        let mut s = Surface::Plane {
            a: 1.0,
            b: 2.0,
            c: -1.0,
            d: 5.0,
        };
        translate_surface(&mut s, 1.0, 1.0, 1.0).unwrap();
        assert_eq!(
            s,
            Surface::Plane {
                a: 1.0,
                b: 2.0,
                c: -1.0,
                d: 7.0
            }
        );
    }

    #[test]
    fn test_plane_point_follows_translation() {
        let original = Surface::Plane {
            a: 0.6,
            b: 0.0,
            c: 0.8,
            d: 3.0,
        };
        let mut moved = original;
        translate_surface(&mut moved, 2.0, -1.0, 4.0).unwrap();
        let p = [1.0, 5.0, 3.0];
        let q = [3.0, 4.0, 7.0];
        assert!((moved.evaluate(q) - original.evaluate(p)).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_centre_moves_radius_kept() {
        let mut s = Surface::Sphere {
            x0: 0.0,
            y0: 1.0,
            z0: 2.0,
            r: 4.0,
        };
        translate_surface(&mut s, 1.0, 2.0, 3.0).unwrap();
        assert_eq!(
            s,
            Surface::Sphere {
                x0: 1.0,
                y0: 3.0,
                z0: 5.0,
                r: 4.0
            }
        );
    }

    #[test]
    fn test_chaining_returns_same_surface() {
        let mut s = Surface::ZPlane { z0: 0.0 };
        translate_surface(&mut s, 0.0, 0.0, 1.0)
            .and_then(|s| translate_surface(s, 0.0, 0.0, 2.0))
            .unwrap();
        assert_eq!(s, Surface::ZPlane { z0: 3.0 });
    }

    #[test_log::test]
    fn test_unsupported_kinds_rejected_untouched() {
        let unsupported = [
            Surface::XCylinder {
                y0: 0.0,
                z0: 0.0,
                r: 1.0,
            },
            Surface::YCylinder {
                x0: 0.0,
                z0: 0.0,
                r: 1.0,
            },
            Surface::ZCylinder {
                x0: 0.0,
                y0: 0.0,
                r: 1.0,
            },
            Surface::ZCone {
                x0: 0.0,
                y0: 0.0,
                z0: 0.0,
                r2: 0.5,
            },
            Surface::ZTorus {
                x0: 0.0,
                y0: 0.0,
                z0: 0.0,
                a: 5.0,
                b: 1.0,
                c: 1.0,
            },
        ];
        for original in unsupported {
            let mut s = original;
            assert!(!is_translatable(&s));
            let err = translate_surface(&mut s, 1.0, 1.0, 1.0).unwrap_err();
            match err {
                SaltError::UnsupportedSurface { ref kind } => {
                    assert_eq!(kind, original.kind().name());
                    assert!(err.to_string().contains(kind.as_str()));
                }
                other => panic!("Expected UnsupportedSurface, got {other:?}"),
            }
            assert_eq!(s, original, "unsupported surface must not be modified");
        }
    }
}
