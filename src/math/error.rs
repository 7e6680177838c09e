// src/math/error.rs

use thiserror::Error;

/// シミュレーションの構築・実行時のエラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("初期個体数 {name} は正の有限値である必要があります: {value}")]
    NonPositivePopulation { name: &'static str, value: f64 },
    #[error("係数 {name} は正の有限値である必要があります: {value}")]
    NonPositiveRate { name: &'static str, value: f64 },
    #[error("時間刻み Δt は正の有限値である必要があります: {0}")]
    NonPositiveTimeStep(f64),
    #[error("平衡点のスケール {axis} が不正です: {value}")]
    DegenerateScale { axis: &'static str, value: f64 },
    #[error("シミュレーション時間は0以上の有限値である必要があります: {0}")]
    InvalidDuration(f64),
    #[error("{steps} ステップ分の記録領域を確保できません")]
    HistoryCapacity { steps: usize },
}

/// 設定ファイル読み込み時のエラー
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("設定ファイルを開けません: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAMLの解析に失敗しました: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("設定値が不正です: {0}")]
    Invalid(#[from] SimulationError),
}
