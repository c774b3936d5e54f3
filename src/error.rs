// Mon Oct 12 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Class role must be defined. Class name {0}.")]
    MissingRole(String),
    #[error("Class {0} cannot be both PROXY and HANDLER.")]
    ConflictingRoles(String),
    #[error("Generation for base class \"{base}\" is not supported (class {class})")]
    UnsupportedBase { class: String, base: String },
    #[error("Inheritance cycle detected at class {0}")]
    InheritanceCycle(String),
    #[error("Could not find {0} constant")]
    MissingConstant(String),
    #[error("{0} not found in the version header")]
    MissingVersionMarker(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, GenError>;
