// Fri Oct 16 2026 - Alex

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cefglue-interop-gen")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Interop binding generator for the CEF C API", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Regenerate every interop file under the output root.
    Generate(GenerateArgs),
    /// Check roles, inheritance, and type coverage without writing.
    Validate(ValidateArgs),
    /// Print the vtable layout of one class.
    Layout(LayoutArgs),
}

/// Inputs shared by every subcommand.
#[derive(Parser, Debug, Clone)]
pub struct ModelArgs {
    /// Parsed object model (JSON).
    #[arg(short, long)]
    pub model: PathBuf,

    /// Generator configuration (JSON).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Extra class classification entries (JSON), merged over the built-in table.
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// Extra type dictionary entries (JSON), merged over the built-in tables.
    #[arg(long)]
    pub type_tables: Option<PathBuf>,
}

impl ModelArgs {
    pub fn validate(&self) -> Result<(), String> {
        let inputs = [Some(&self.model), self.config.as_ref(), self.schema.as_ref(), self.type_tables.as_ref()];
        for path in inputs.into_iter().flatten() {
            if !path.exists() {
                return Err(format!("Input file does not exist: {:?}", path));
            }
        }
        Ok(())
    }
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub inputs: ModelArgs,

    /// Root of the generated tree.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Directory holding cef_version.h and cef_api_versions.h.
    #[arg(short, long)]
    pub include_dir: Option<PathBuf>,

    /// Keep a timestamped copy of every file that is replaced.
    #[arg(long)]
    pub backup: bool,

    /// Plan every file and report, without writing.
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    pub fn validate(&self) -> Result<(), String> {
        self.inputs.validate()?;
        if let Some(dir) = &self.include_dir {
            if !dir.is_dir() {
                return Err(format!("Include directory does not exist: {:?}", dir));
            }
        }
        if self.output.exists() && !self.output.is_dir() {
            return Err(format!("Output root is not a directory: {:?}", self.output));
        }
        Ok(())
    }
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub inputs: ModelArgs,

    /// List every unmapped native type.
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub inputs: ModelArgs,

    /// Logical or ABI class name.
    #[arg(long)]
    pub class: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let args = Args::try_parse_from([
            "cefglue-interop-gen",
            "--log-level",
            "debug",
            "generate",
            "--model",
            "model.json",
            "--output",
            "out",
            "--backup",
        ])
        .unwrap();

        assert_eq!(args.log_level, "debug");
        match args.command {
            Command::Generate(generate) => {
                assert_eq!(generate.inputs.model, PathBuf::from("model.json"));
                assert_eq!(generate.output, PathBuf::from("out"));
                assert!(generate.backup);
                assert!(!generate.dry_run);
                assert!(generate.include_dir.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_layout() {
        let args = Args::try_parse_from([
            "cefglue-interop-gen",
            "layout",
            "-m",
            "model.json",
            "--class",
            "CefBrowser",
            "--quiet",
        ])
        .unwrap();

        assert!(args.quiet);
        assert!(matches!(args.command, Command::Layout(ref l) if l.class == "CefBrowser"));
    }

    #[test]
    fn test_missing_model_is_reported() {
        let inputs = ModelArgs {
            model: PathBuf::from("/nonexistent/model.json"),
            config: None,
            schema: None,
            type_tables: None,
        };
        assert!(inputs.validate().unwrap_err().contains("does not exist"));
    }
}
