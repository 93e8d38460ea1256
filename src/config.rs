use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::Result;
use crate::models::Plant;
use crate::seed::{load_seed, sample_plants};

pub const DEFAULT_LOG_FILTER: &str = "mis_plantas=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON seed to start from instead of the built-in sample plants.
    pub seed_file: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            seed_file: cli.seed_file.clone(),
            log_filter: cli.log.clone(),
        }
    }

    pub fn seed(&self) -> Result<Vec<Plant>> {
        match &self.seed_file {
            Some(path) => load_seed(path),
            None => Ok(sample_plants()),
        }
    }
}
