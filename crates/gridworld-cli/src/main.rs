use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gridworld_cli::{execute, resolve_config, Cli};
use gridworld_core::errors::GridworldErrorCode;
use gridworld_core::tracing::init_tracing;

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let result = resolve_config(&cli, &root).and_then(|config| execute(&cli, &config));
    match result {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e.coded_string());
            ExitCode::FAILURE
        }
    }
}
