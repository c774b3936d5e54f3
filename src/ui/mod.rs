// Fri Oct 16 2026 - Alex

pub mod cli;

pub use cli::{Args, Command, CommandHandler};
