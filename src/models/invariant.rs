// src/models/invariant.rs

use crate::config::Parameters;

/// Lotka-Volterra 系の保存量 H を計算する純粋関数
///
/// H(x, y) = -D ln(x) + C x + B y - A ln(y)
///
/// # 引数
/// - `params`: 係数
/// - `x`: 被食者の個体数（正）
/// - `y`: 捕食者の個体数（正）
///
/// # 戻り値
/// - 保存量 H
pub fn conserved_quantity(params: &Parameters, x: f64, y: f64) -> f64 {
    -params.d * x.ln() + params.c * x + params.b * y - params.a * y.ln()
}
