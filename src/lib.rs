//! punchcard library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! internal modules (domain model, business core, state machine, ui).

pub mod app;
pub mod cli;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::Cli;
use errors::AppResult;
use std::time::Duration;

/// Entry point used by main.rs.
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    ui::run(Duration::from_millis(cli.tick_rate))
}
