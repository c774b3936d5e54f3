// Fri Oct 16 2026 - Alex

pub mod config;
pub mod emit;
pub mod error;
pub mod lifetime;
pub mod model;
pub mod orchestration;
pub mod output;
pub mod schema;
pub mod structure;
pub mod types;
pub mod ui;
pub mod utils;
pub mod version;

pub use config::GeneratorConfig;
pub use error::{GenError, Result};
pub use model::{ClassDecl, FunctionDecl, ObjectModel};
pub use orchestration::{regenerate, Driver};
pub use output::OutputManager;
pub use schema::{ClassificationSchema, ClassRole};
pub use structure::{VTableBuilder, VTableLayout};
pub use types::TypeMapper;
