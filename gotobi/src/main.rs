//! Gotobi fixing notifier.
//!
//! One scheduled invocation: resolve "now" in JST, load the holiday
//! calendars, decide whether an effective settlement day needs a
//! notification, dispatch it, and persist the dedup state.

mod cli;
mod logging;
mod run;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = cli::Cli::parse();
    run::run(&cli)
}
