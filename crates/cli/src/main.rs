//! `tierforge` executable.

use anyhow::Result;
use clap::Parser;
use tierforge_planner::cli::{run_cli, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    run_cli(cli)
}
