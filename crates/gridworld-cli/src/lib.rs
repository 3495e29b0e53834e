//! # gridworld-cli
//!
//! Argument parsing, config resolution, and rendering for the `gridworld`
//! binary. Kept as a library so the command flow is testable.

pub mod args;
pub mod error;
pub mod output;

use std::path::Path;

use gridworld_core::config::{CliOverrides, GridworldConfig};
use gridworld_mdp::run_scenarios;

pub use args::{Cli, Commands, OutputFormat};
pub use error::CliError;

/// Resolve configuration for `cli`, rooted at `root` when no `--config` is given.
pub fn resolve_config(cli: &Cli, root: &Path) -> Result<GridworldConfig, CliError> {
    let overrides = CliOverrides {
        discount: cli.discount,
        epsilon: cli.epsilon,
        max_sweeps: cli.max_sweeps,
        method: cli.method,
        rewards: match &cli.command {
            Commands::Sweep { rewards } => rewards.clone(),
            Commands::Solve { .. } => None,
        },
    };
    let config = match &cli.config {
        Some(path) => GridworldConfig::load_file(path, Some(&overrides))?,
        None => GridworldConfig::load(root, Some(&overrides))?,
    };
    Ok(config)
}

/// Run the parsed command and return what should be printed on stdout.
pub fn execute(cli: &Cli, config: &GridworldConfig) -> Result<String, CliError> {
    let rewards = match &cli.command {
        Commands::Solve { reward } => vec![*reward],
        Commands::Sweep { .. } => config.scenarios.effective_rewards(),
    };
    tracing::debug!(scenarios = rewards.len(), "solving reward scenarios");

    let reports = run_scenarios(config, &rewards)?;
    match cli.format {
        OutputFormat::Table => Ok(output::render_tables(&reports, cli.policy)),
        OutputFormat::Json => Ok(output::render_json(&reports)?),
    }
}
