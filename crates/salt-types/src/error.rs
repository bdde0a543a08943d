// ─────────────────────────────────────────────────────────────────────
// SCPN Salt Neutronics — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaltError {
    #[error("Unsupported surface type: {kind}")]
    UnsupportedSurface { kind: String },

    #[error("Unknown surface id: {id}")]
    UnknownSurface { id: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Physics constraint violated: {0}")]
    PhysicsViolation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SaltResult<T> = Result<T, SaltError>;
