// Fri Oct 16 2026 - Alex

use cefglue_interop_gen::ui::cli;
use colored::Colorize;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{} {:#}", "[!]".red(), e);
        std::process::exit(1);
    }
}
