//! Command-line arguments and config resolution.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use fundlab_core::DashboardConfig;

#[derive(Debug, Parser)]
#[command(
    name = "fundlab",
    about = "FundLab — synthetic mutual fund performance dashboard"
)]
pub struct Cli {
    /// TOML config file. Defaults to `<config dir>/fundlab/config.toml`
    /// when that file exists, built-in defaults otherwise.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed the generator for a reproducible session.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where log output goes; the terminal belongs to the dashboard.
    #[arg(long, default_value = "fundlab.log")]
    pub log_file: PathBuf,
}

/// `<config dir>/fundlab/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fundlab").join("config.toml"))
}

impl Cli {
    pub fn resolve_config(&self) -> Result<DashboardConfig> {
        self.resolve_config_with(default_config_path().as_deref())
    }

    /// Explicit `--config` wins; otherwise `fallback` is read if it exists.
    /// `--seed` overrides any seed from the file.
    pub fn resolve_config_with(&self, fallback: Option<&Path>) -> Result<DashboardConfig> {
        let mut config = match (&self.config, fallback) {
            (Some(path), _) => DashboardConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            (None, Some(path)) if path.exists() => DashboardConfig::from_file(path)
                .with_context(|| format!("loading default config {}", path.display()))?,
            _ => DashboardConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        config.validate().context("invalid dashboard config")?;
        Ok(config)
    }
}
