// src/config/parameters.rs

use serde::Deserialize;

use crate::math::error::SimulationError;

pub const DEFAULT_A: f64 = 2.0;
pub const DEFAULT_B: f64 = 0.02;
pub const DEFAULT_C: f64 = 0.01;
pub const DEFAULT_D: f64 = 1.0;
pub const DEFAULT_DELTA_T: f64 = 0.001;

/// Lotka-Volterra 方程式の係数と時間刻み
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub a: f64,       // 被食者の増加率
    pub b: f64,       // 捕食者との遭遇による被食者の減少率
    pub c: f64,       // 被食者との遭遇による捕食者の増加率
    pub d: f64,       // 捕食者の自然死亡率
    pub delta_t: f64, // 時間刻み Δt
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            a: DEFAULT_A,
            b: DEFAULT_B,
            c: DEFAULT_C,
            d: DEFAULT_D,
            delta_t: DEFAULT_DELTA_T,
        }
    }
}

impl Parameters {
    /// 係数と時間刻みがすべて正の有限値であることを確認する
    pub fn validate(&self) -> Result<(), SimulationError> {
        for (name, value) in [("A", self.a), ("B", self.b), ("C", self.c), ("D", self.d)] {
            if !is_positive_finite(value) {
                return Err(SimulationError::NonPositiveRate { name, value });
            }
        }
        if !is_positive_finite(self.delta_t) {
            return Err(SimulationError::NonPositiveTimeStep(self.delta_t));
        }
        Ok(())
    }
}

pub(crate) fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
