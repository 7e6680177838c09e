// src/config/scenario.rs

use serde::Deserialize;

use crate::config::parameters::{is_positive_finite, Parameters};
use crate::math::error::SimulationError;

pub const DEFAULT_X0: f64 = 1200.0;
pub const DEFAULT_Y0: f64 = 1000.0;

/// 初期個体数（絶対値）
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct InitialPopulations {
    pub x0: f64, // 被食者の初期個体数
    pub y0: f64, // 捕食者の初期個体数
}

impl Default for InitialPopulations {
    fn default() -> Self {
        InitialPopulations {
            x0: DEFAULT_X0,
            y0: DEFAULT_Y0,
        }
    }
}

impl InitialPopulations {
    pub fn validate(&self) -> Result<(), SimulationError> {
        for (name, value) in [("x0", self.x0), ("y0", self.y0)] {
            if !is_positive_finite(value) {
                return Err(SimulationError::NonPositivePopulation { name, value });
            }
        }
        Ok(())
    }
}

/// 手動で上書きする値。指定のない項目はデフォルト値を使う
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq)]
#[serde(default)]
pub struct ManualOverride {
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
    pub d: Option<f64>,
    pub x0: Option<f64>,
    pub y0: Option<f64>,
    pub delta_t: Option<f64>,
}

/// 1回のシミュレーション実行の設定
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    pub use_defaults: bool,
    pub manual_override: Option<ManualOverride>,
    pub total_time: Option<f64>,
}

impl RunConfig {
    /// デフォルト値のみを使う設定
    pub fn defaults() -> Self {
        RunConfig {
            use_defaults: true,
            ..RunConfig::default()
        }
    }

    /// 設定から初期個体数と係数を確定し、検証する
    ///
    /// # 戻り値
    /// - 検証済みの初期個体数と係数
    pub fn resolve(&self) -> Result<(InitialPopulations, Parameters), SimulationError> {
        let mut initial = InitialPopulations::default();
        let mut params = Parameters::default();

        if let (false, Some(manual)) = (self.use_defaults, self.manual_override) {
            params.a = manual.a.unwrap_or(params.a);
            params.b = manual.b.unwrap_or(params.b);
            params.c = manual.c.unwrap_or(params.c);
            params.d = manual.d.unwrap_or(params.d);
            params.delta_t = manual.delta_t.unwrap_or(params.delta_t);
            initial.x0 = manual.x0.unwrap_or(initial.x0);
            initial.y0 = manual.y0.unwrap_or(initial.y0);
        }

        initial.validate()?;
        params.validate()?;
        Ok((initial, params))
    }
}
