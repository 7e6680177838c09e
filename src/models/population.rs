// src/models/population.rs

use crate::config::{InitialPopulations, Parameters};
use crate::math::{clamp_to_floor, forward_euler, SimulationError};

/// 平衡点から求めるスケール
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquilibriumScale {
    pub x: f64, // D / C（被食者の平衡個体数）
    pub y: f64, // A / B（捕食者の平衡個体数）
}

impl EquilibriumScale {
    /// 係数から平衡点スケールを計算する
    ///
    /// B または C がゼロの場合や、結果が正の有限値にならない場合はエラー
    pub fn from_parameters(params: &Parameters) -> Result<Self, SimulationError> {
        if params.c == 0.0 {
            return Err(SimulationError::NonPositiveRate { name: "C", value: params.c });
        }
        if params.b == 0.0 {
            return Err(SimulationError::NonPositiveRate { name: "B", value: params.b });
        }
        let x = params.d / params.c;
        let y = params.a / params.b;
        if !(x.is_finite() && x > 0.0) {
            return Err(SimulationError::DegenerateScale { axis: "x", value: x });
        }
        if !(y.is_finite() && y > 0.0) {
            return Err(SimulationError::DegenerateScale { axis: "y", value: y });
        }
        Ok(EquilibriumScale { x, y })
    }
}

/// 平衡点で規格化した個体数（平衡点は (1, 1)）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationState {
    pub x_rel: f64,
    pub y_rel: f64,
}

impl PopulationState {
    pub fn from_absolute(initial: &InitialPopulations, scale: &EquilibriumScale) -> Self {
        PopulationState {
            x_rel: initial.x0 / scale.x,
            y_rel: initial.y0 / scale.y,
        }
    }

    /// 絶対個体数 (x, y)
    pub fn to_absolute(&self, scale: &EquilibriumScale) -> (f64, f64) {
        (self.x_rel * scale.x, self.y_rel * scale.y)
    }

    /// 規格化座標での前進Euler法による1ステップ
    ///
    /// # 引数
    /// - `params`: 係数と時間刻み
    /// - `scale`: 平衡点スケール
    ///
    /// # 戻り値
    /// - 更新後の状態
    /// - 下限値に置き換えた成分の数
    pub fn step(&self, params: &Parameters, scale: &EquilibriumScale) -> (PopulationState, usize) {
        let dx = (params.a - params.b * self.y_rel * scale.y) * self.x_rel;
        let dy = (params.c * self.x_rel * scale.x - params.d) * self.y_rel;

        let (x_rel, x_clamped) = clamp_to_floor(forward_euler(self.x_rel, dx, params.delta_t));
        let (y_rel, y_clamped) = clamp_to_floor(forward_euler(self.y_rel, dy, params.delta_t));

        let clamped = x_clamped as usize + y_clamped as usize;
        (PopulationState { x_rel, y_rel }, clamped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::POPULATION_FLOOR;

    #[test]
    fn test_scale_from_default_parameters() {
        let scale = EquilibriumScale::from_parameters(&Parameters::default()).unwrap();
        assert!((scale.x - 100.0).abs() < 1e-9);
        assert!((scale.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_scale_rejects_zero_c() {
        let params = Parameters { c: 0.0, ..Parameters::default() };
        assert!(matches!(
            EquilibriumScale::from_parameters(&params),
            Err(SimulationError::NonPositiveRate { name: "C", .. })
        ));
    }

    #[test]
    fn test_scale_rejects_overflow() {
        let params = Parameters { d: 1e300, c: 1e-300, ..Parameters::default() };
        assert!(matches!(
            EquilibriumScale::from_parameters(&params),
            Err(SimulationError::DegenerateScale { axis: "x", .. })
        ));
    }

    /// x_rel = 12, y_rel = 10 から1ステップ:
    /// x_rel' = 12 + (2 - 0.02 * 10 * 100) * 12 * 0.001 = 11.784
    /// y_rel' = 10 + (0.01 * 12 * 100 - 1) * 10 * 0.001 = 10.11
    #[test]
    fn test_step_matches_hand_computation() {
        let params = Parameters::default();
        let scale = EquilibriumScale::from_parameters(&params).unwrap();
        let state = PopulationState::from_absolute(&InitialPopulations::default(), &scale);

        let (next, clamped) = state.step(&params, &scale);
        assert_eq!(clamped, 0);
        assert!((next.x_rel - 11.784).abs() < 1e-9);
        assert!((next.y_rel - 10.11).abs() < 1e-9);

        let (x, y) = next.to_absolute(&scale);
        assert!((x - 1178.4).abs() < 1e-6);
        assert!((y - 1011.0).abs() < 1e-6);
    }

    #[test]
    fn test_equilibrium_is_fixed_point() {
        let params = Parameters::default();
        let scale = EquilibriumScale::from_parameters(&params).unwrap();
        let state = PopulationState { x_rel: 1.0, y_rel: 1.0 };
        let (next, _) = state.step(&params, &scale);
        assert!((next.x_rel - 1.0).abs() < 1e-12);
        assert!((next.y_rel - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_step_clamps_collapsed_prey() {
        // Δt を大きく取り、被食者が一度に負になるようにする
        let params = Parameters { delta_t: 1.0, ..Parameters::default() };
        let scale = EquilibriumScale::from_parameters(&params).unwrap();
        let state = PopulationState { x_rel: 1.0, y_rel: 10.0 };

        let (next, clamped) = state.step(&params, &scale);
        assert_eq!(clamped, 1);
        assert_eq!(next.x_rel, POPULATION_FLOOR);
        assert!(next.y_rel > 0.0);
    }
}
