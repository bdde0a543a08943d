// ─────────────────────────────────────────────────────────────────────
// SCPN Salt Neutronics — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::DEFAULT_LICL_FRACTION;
use crate::surface::{BoundaryType, Surface};
use serde::{Deserialize, Serialize};

/// Top-level salt loop model configuration.
/// Maps 1:1 to configs/salt_loop_config.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaltModelConfig {
    pub model_name: String,
    pub salt: SaltConfig,
    pub vessel: VesselConfig,
    #[serde(default)]
    pub geometry: GeometryConfig,
}

/// Salt state and composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaltConfig {
    /// Bulk salt temperature [°C].
    pub temperature_c: f64,
    /// LiCl molar fraction [-] (default: 0.695)
    #[serde(default = "default_licl_fraction")]
    pub licl_fraction: f64,
}

fn default_licl_fraction() -> f64 {
    DEFAULT_LICL_FRACTION
}

/// Cylindrical salt vessel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VesselConfig {
    pub radius_cm: f64,
    pub height_cm: f64,
}

/// Bounding surfaces and the global placement offset [cm].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeometryConfig {
    #[serde(default)]
    pub offset: [f64; 3],
    #[serde(default)]
    pub surfaces: Vec<SurfaceConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceConfig {
    pub name: String,
    #[serde(default)]
    pub boundary: BoundaryType,
    pub surface: Surface,
}

impl SaltModelConfig {
    /// Load from JSON file.
    pub fn from_file(path: &str) -> crate::error::SaltResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SaltError;
    use std::path::PathBuf;

    /// CARGO_MANIFEST_DIR points to crates/salt-types/ at compile time,
    /// so we go up 2 levels to reach the workspace root.
    fn config_path(relative: &str) -> String {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join(relative)
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn test_load_salt_loop_config() {
        let cfg = SaltModelConfig::from_file(&config_path("configs/salt_loop_config.json")).unwrap();
        assert_eq!(cfg.model_name, "ClLiF-Salt-Loop");
        assert!((cfg.salt.temperature_c - 700.0).abs() < 1e-12);
        assert!((cfg.salt.licl_fraction - 0.695).abs() < 1e-12);
        assert!((cfg.vessel.radius_cm - 20.0).abs() < 1e-12);
        assert_eq!(cfg.geometry.surfaces.len(), 6);
        assert_eq!(cfg.geometry.surfaces[0].name, "vessel-floor");
        assert_eq!(cfg.geometry.surfaces[0].boundary, BoundaryType::Vacuum);
        assert!(matches!(
            cfg.geometry.surfaces[0].surface,
            Surface::ZPlane { z0 } if z0 == 0.0
        ));
    }

    #[test]
    fn test_defaults_applied() {
        let json = r#"{
            "model_name": "minimal",
            "salt": { "temperature_c": 800.0 },
            "vessel": { "radius_cm": 1.0, "height_cm": 2.0 }
        }"#;
        let cfg: SaltModelConfig = serde_json::from_str(json).unwrap();
        assert!((cfg.salt.licl_fraction - DEFAULT_LICL_FRACTION).abs() < 1e-15);
        assert_eq!(cfg.geometry.offset, [0.0, 0.0, 0.0]);
        assert!(cfg.geometry.surfaces.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SaltModelConfig::from_file(&config_path("configs/does_not_exist.json"))
            .unwrap_err();
        assert!(matches!(err, SaltError::Io(_)));
    }

    #[test]
    fn test_roundtrip_serialization() {
        let cfg = SaltModelConfig::from_file(&config_path("configs/salt_loop_config.json")).unwrap();
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        let cfg2: SaltModelConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.model_name, cfg2.model_name);
        assert_eq!(cfg.geometry.offset, cfg2.geometry.offset);
        assert_eq!(cfg.geometry.surfaces.len(), cfg2.geometry.surfaces.len());
        for (a, b) in cfg.geometry.surfaces.iter().zip(&cfg2.geometry.surfaces) {
            assert_eq!(a.surface, b.surface);
        }
    }
}
