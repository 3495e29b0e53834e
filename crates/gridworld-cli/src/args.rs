use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use gridworld_core::config::SolveMethod;

#[derive(Debug, Parser)]
#[command(name = "gridworld", version, about = "Solve stochastic grid-world MDPs")]
pub struct Cli {
    /// Explicit config file (replaces ~/.gridworld/config.toml and ./gridworld.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Discount factor γ in [0, 1).
    #[arg(long, global = true)]
    pub discount: Option<f64>,

    /// Per-cell convergence threshold ε.
    #[arg(long, global = true)]
    pub epsilon: Option<f64>,

    /// Fail if a solve needs more sweeps than this.
    #[arg(long, global = true)]
    pub max_sweeps: Option<u64>,

    /// `value` or `policy` iteration.
    #[arg(long, global = true)]
    pub method: Option<SolveMethod>,

    /// Also print the greedy policy.
    #[arg(long, global = true)]
    pub policy: bool,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Solve a single base-reward scenario.
    Solve {
        #[arg(long, allow_hyphen_values = true)]
        reward: f64,
    },
    /// Solve each configured (or given) base reward in turn.
    Sweep {
        /// Comma-separated base rewards, e.g. `-2,0.1,0.02,1`.
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        rewards: Option<Vec<f64>>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
