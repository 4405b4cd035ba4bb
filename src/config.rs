use anyhow::Result;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::path::PathBuf;
use validator::Validate;

use crate::estimate::EstimatorParams;
use crate::feasibility::CarbonPolicy;

#[derive(Debug, Clone, Deserialize, Validate, Default)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    #[validate(nested)]
    pub estimator: EstimatorParams,
    #[validate(nested)]
    pub carbon: CarbonPolicy,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Site record CSV consumed when no path is given on the command line
    pub sites_csv: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            sites_csv: PathBuf::from("data/sites.csv"),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("FLOWVAC__").split("__"));
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }
}
