//! Command-line surface. The application itself is interactive; the CLI
//! only carries metadata and tuning flags.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "punchcard",
    version,
    about = "Terminal time-clock for hourly employees"
)]
pub struct Cli {
    /// Key-poll interval in milliseconds.
    #[arg(long, default_value_t = 250)]
    pub tick_rate: u64,
}
