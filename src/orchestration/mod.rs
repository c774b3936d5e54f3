// Wed Oct 14 2026 - Alex

pub mod driver;

pub use driver::{
    regenerate, Driver, GeneratedArtifact, ValidationReport, VersionHeaders, API_VERSIONS_HEADER,
    VERSION_HEADER,
};
