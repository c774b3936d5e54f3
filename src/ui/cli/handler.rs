// Fri Oct 16 2026 - Alex

use super::args::{Args, Command, GenerateArgs, LayoutArgs, ModelArgs, ValidateArgs};
use crate::config::GeneratorConfig;
use crate::model::ObjectModel;
use crate::orchestration::{Driver, VersionHeaders};
use crate::output::{DryRunStore, OutputManager};
use crate::utils::{format_duration, LoggingUtils};
use anyhow::Context;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct CommandHandler {
    quiet: bool,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    pub fn execute(&mut self, args: Args) -> anyhow::Result<()> {
        self.quiet = args.quiet;
        if args.no_color {
            colored::control::set_override(false);
        }
        LoggingUtils::init_logger(LoggingUtils::level_from_str(&args.log_level), !args.no_color);

        match args.command {
            Command::Generate(gen_args) => self.handle_generate(gen_args),
            Command::Validate(validate_args) => self.handle_validate(validate_args),
            Command::Layout(layout_args) => self.handle_layout(layout_args),
        }
    }

    fn load(&self, inputs: &ModelArgs) -> anyhow::Result<(GeneratorConfig, ObjectModel)> {
        inputs.validate().map_err(|e| anyhow::anyhow!(e))?;

        let mut config = match &inputs.config {
            Some(path) => GeneratorConfig::load(path)
                .with_context(|| format!("Failed to load config {:?}", path))?,
            None => GeneratorConfig::default(),
        };
        if let Some(path) = &inputs.schema {
            config = config.with_schema_file(path.clone());
        }
        if let Some(path) = &inputs.type_tables {
            config = config.with_type_tables_file(path.clone());
        }

        let model = ObjectModel::load(&inputs.model)
            .with_context(|| format!("Failed to load model {:?}", inputs.model))?;
        log::debug!(
            "model: {} classes, {} functions",
            model.classes().len(),
            model.functions().len()
        );
        Ok((config, model))
    }

    fn handle_generate(&self, args: GenerateArgs) -> anyhow::Result<()> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;
        let start = Instant::now();

        let (config, model) = self.load(&args.inputs)?;
        let make_backup = config.make_backup || args.backup;
        let config = config.with_backup(make_backup);

        let spinner = self.spinner();
        let progress = spinner.clone();
        let mut driver = Driver::from_config(config)?
            .with_progress(move |file| progress.set_message(file.to_string()));
        if let Some(dir) = &args.include_dir {
            let headers = VersionHeaders::load(dir)
                .with_context(|| format!("Failed to read version headers from {:?}", dir))?;
            driver = driver.with_version_headers(headers);
        }

        if !self.quiet {
            println!("{}", "Generating interop files...".cyan());
        }

        let result = if args.dry_run {
            let store = Arc::new(DryRunStore::new());
            let mut output = OutputManager::new(Box::new(store.clone()), args.output.clone())
                .with_backup(make_backup);
            let written = driver.run(&model, &mut output);
            if let Ok(count) = &written {
                self.print_pending(&store, *count);
            }
            written.map(|_| output.summary())
        } else {
            let mut output = OutputManager::on_disk(args.output.clone()).with_backup(make_backup);
            driver.run(&model, &mut output).map(|_| output.summary())
        };
        spinner.finish_and_clear();

        let summary = result?;
        if !self.quiet {
            println!("{} {}", "[+]".green(), summary.display());
            println!(
                "{} Finished in {}",
                "[+]".green(),
                format_duration(start.elapsed())
            );
        }
        Ok(())
    }

    fn handle_validate(&self, args: ValidateArgs) -> anyhow::Result<()> {
        let (config, model) = self.load(&args.inputs)?;
        let driver = Driver::from_config(config)?;
        let report = driver.validate(&model)?;

        if !self.quiet {
            println!("{} {}", "[+]".green(), report.display());
            if args.verbose {
                for ty in &report.unmapped_types {
                    println!("  {} {}", "unmapped:".yellow(), ty);
                }
            }
        }
        Ok(())
    }

    fn handle_layout(&self, args: LayoutArgs) -> anyhow::Result<()> {
        let (config, model) = self.load(&args.inputs)?;
        let driver = Driver::from_config(config)?;
        let model = driver.complete_model(&model);
        let mapper = driver.mapper_for(&model);

        let layouts = driver.layouts(&model, &mapper)?;
        let (_, layout) = layouts
            .into_iter()
            .find(|(cls, _)| cls.name == args.class || cls.abi_name == args.class)
            .ok_or_else(|| anyhow::anyhow!("Class not found: {}", args.class))?;

        print!("{}", layout);
        Ok(())
    }

    fn spinner(&self) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    }

    fn print_pending(&self, store: &DryRunStore, count: usize) {
        if self.quiet {
            return;
        }
        println!("{} Dry run: {} file(s) would change", "[*]".blue(), count);
        for path in store.pending() {
            println!("  {}", path.display());
        }
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
