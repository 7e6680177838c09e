// src/simulation/load_parameters.rs

use std::fs::File;
use std::path::Path;

use log::debug;
use serde_yaml::from_reader;

use crate::config::RunConfig;
use crate::math::ConfigError;

/// 実行設定の読み込み
pub fn load_run_config<P: AsRef<Path>>(path: P) -> Result<RunConfig, ConfigError> {
    let file = File::open(path.as_ref())?;
    let config: RunConfig = from_reader(file)?;
    // 値の検証だけ先に済ませておく
    config.resolve()?;
    debug!("loaded run config from {}", path.as_ref().display());
    Ok(config)
}
