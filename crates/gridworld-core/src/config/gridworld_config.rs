//! Top-level configuration with 4-layer resolution.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::solver_config::{validate_discount, validate_epsilon};
use super::{
    validate_transition, GridConfig, ScenarioConfig, SolveMethod, SolverConfig, TransitionConfig,
};
use crate::errors::ConfigError;

/// Project config file name, looked up in the working root.
pub const PROJECT_CONFIG_FILE: &str = "gridworld.toml";

/// Environment variables read during resolution.
pub const ENV_DISCOUNT: &str = "GRIDWORLD_DISCOUNT";
pub const ENV_EPSILON: &str = "GRIDWORLD_EPSILON";
pub const ENV_MAX_SWEEPS: &str = "GRIDWORLD_MAX_SWEEPS";
pub const ENV_METHOD: &str = "GRIDWORLD_METHOD";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`GRIDWORLD_*`)
/// 3. Project config (`gridworld.toml` in the working root)
/// 4. User config (`~/.gridworld/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GridworldConfig {
    pub solver: SolverConfig,
    pub transition: TransitionConfig,
    pub grid: GridConfig,
    pub scenarios: ScenarioConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub discount: Option<f64>,
    pub epsilon: Option<f64>,
    pub max_sweeps: Option<u64>,
    pub method: Option<SolveMethod>,
    pub rewards: Option<Vec<f64>>,
}

impl GridworldConfig {
    /// Load configuration with 4-layer resolution, reading the user config
    /// from `~/.gridworld/config.toml`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        Self::load_from(root, Self::user_config_path().as_deref(), cli_overrides)
    }

    /// Load configuration with an explicit user config path.
    pub fn load_from(
        root: &Path,
        user_config: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = user_config {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        // Unreadable user config is not fatal.
                        ::tracing::warn!(error = %e, "ignoring user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load an explicit config file in place of the user and project layers.
    /// Environment and CLI overrides still apply on top.
    pub fn load_file(path: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        Self::merge_toml_file(&mut config, path)?;
        Self::apply_env_overrides(&mut config)?;
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &GridworldConfig) -> Result<(), ConfigError> {
        validate_discount(config.solver.effective_discount())?;
        validate_epsilon(config.solver.effective_epsilon())?;
        if config.solver.max_sweeps == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "solver.max_sweeps".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        let (intended, slip_right, slip_left) = config.transition.effective_triple();
        validate_transition(intended, slip_right, slip_left)?;

        config.grid.layout().validate()?;

        if let Some(bad) = config
            .scenarios
            .effective_rewards()
            .into_iter()
            .find(|r| !r.is_finite())
        {
            return Err(ConfigError::ValidationFailed {
                field: "scenarios.rewards".to_string(),
                message: format!("rewards must be finite, got {bad}"),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.gridworld/config.toml`.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut GridworldConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: GridworldConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut GridworldConfig, other: &GridworldConfig) {
        // Solver
        if other.solver.discount.is_some() {
            base.solver.discount = other.solver.discount;
        }
        if other.solver.epsilon.is_some() {
            base.solver.epsilon = other.solver.epsilon;
        }
        if other.solver.max_sweeps.is_some() {
            base.solver.max_sweeps = other.solver.max_sweeps;
        }
        if other.solver.method.is_some() {
            base.solver.method = other.solver.method;
        }

        // Transition
        if other.transition.intended.is_some() {
            base.transition.intended = other.transition.intended;
        }
        if other.transition.slip_right.is_some() {
            base.transition.slip_right = other.transition.slip_right;
        }
        if other.transition.slip_left.is_some() {
            base.transition.slip_left = other.transition.slip_left;
        }

        // Grid
        if other.grid.height.is_some() {
            base.grid.height = other.grid.height;
        }
        if other.grid.width.is_some() {
            base.grid.width = other.grid.width;
        }
        if other.grid.obstacles.is_some() {
            base.grid.obstacles = other.grid.obstacles.clone();
        }
        if other.grid.terminals.is_some() {
            base.grid.terminals = other.grid.terminals.clone();
        }

        // Scenarios
        if other.scenarios.rewards.is_some() {
            base.scenarios.rewards = other.scenarios.rewards.clone();
        }
    }

    /// Apply environment variable overrides.
    /// A set but unparseable value is a validation error.
    fn apply_env_overrides(config: &mut GridworldConfig) -> Result<(), ConfigError> {
        if let Some(v) = Self::parse_env::<f64>(ENV_DISCOUNT)? {
            config.solver.discount = Some(v);
        }
        if let Some(v) = Self::parse_env::<f64>(ENV_EPSILON)? {
            config.solver.epsilon = Some(v);
        }
        if let Some(v) = Self::parse_env::<u64>(ENV_MAX_SWEEPS)? {
            config.solver.max_sweeps = Some(v);
        }
        if let Some(v) = Self::parse_env::<SolveMethod>(ENV_METHOD)? {
            config.solver.method = Some(v);
        }
        Ok(())
    }

    fn parse_env<T: FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
        let Ok(raw) = std::env::var(key) else {
            return Ok(None);
        };
        raw.trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::ValidationFailed {
                field: key.to_string(),
                message: format!("cannot parse {raw:?}"),
            })
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut GridworldConfig, cli: &CliOverrides) {
        if let Some(v) = cli.discount {
            config.solver.discount = Some(v);
        }
        if let Some(v) = cli.epsilon {
            config.solver.epsilon = Some(v);
        }
        if let Some(v) = cli.max_sweeps {
            config.solver.max_sweeps = Some(v);
        }
        if let Some(v) = cli.method {
            config.solver.method = Some(v);
        }
        if let Some(ref v) = cli.rewards {
            config.scenarios.rewards = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level config directory: `~/.gridworld/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".gridworld"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
