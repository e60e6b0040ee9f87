//! extreg - Entry Point
//!
//! Inspects the provider classes linked into this binary and the discovery
//! resources visible through the configured search paths. Applications that
//! link their own providers can expose the same commands through
//! [`extreg::cli::run`].

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use extreg::cli::{Cli, run};
use extreg::infrastructure::init_logging;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    init_logging(&config.logging)?;

    let mut stdout = io::stdout().lock();
    let code = run(&cli.command, &config, &mut stdout)?;
    stdout.flush()?;
    Ok(code)
}
