// Mon Oct 12 2026 - Alex

pub mod dictionary;
pub mod mapper;

pub use dictionary::TypeTables;
pub use mapper::{quote_name, TypeMapper};
