// src/math/integrator.rs

/// 非正の値を置き換える下限値（相対座標の単位）
pub const POPULATION_FLOOR: f64 = 1e-6;

/// 前進Euler法による1ステップの積分
///
/// # 引数
/// - `current_y`: 現在のyの値
/// - `current_f`: 現在のf(t, y)の値
/// - `dt`: 時間刻み
///
/// # 戻り値
/// - 次のyの値
pub fn forward_euler(current_y: f64, current_f: f64, dt: f64) -> f64 {
    current_y + current_f * dt
}

/// 正でない値（NaNを含む）を下限値に置き換える
///
/// # 戻り値
/// - 置き換え後の値
/// - 置き換えが発生したかどうか
pub fn clamp_to_floor(value: f64) -> (f64, bool) {
    if value > 0.0 {
        (value, false)
    } else {
        (POPULATION_FLOOR, true)
    }
}

/// 積分時間から追加するステップ数を求める（単純な切り捨て）
///
/// 負の値や NaN、`usize` に収まらない値は `None`。
pub fn step_count(duration: f64, dt: f64) -> Option<usize> {
    let ratio = (duration / dt).floor();
    if !ratio.is_finite() || ratio < 0.0 || ratio >= usize::MAX as f64 {
        return None;
    }
    Some(ratio as usize)
}

/// 問い合わせ時刻を時間刻みで割った値を整数インデックスに変換する
///
/// 切り捨てを基本とするが、`i * dt / dt` が丸め誤差で `i` をわずかに
/// 下回る場合は `i` に寄せる。負の値や NaN は `None`。
pub fn step_index(time: f64, dt: f64) -> Option<usize> {
    let ratio = time / dt;
    if !ratio.is_finite() || ratio < 0.0 {
        return None;
    }
    let nearest = ratio.round();
    let index = if (ratio - nearest).abs() <= 1e-9 * nearest.max(1.0) {
        nearest
    } else {
        ratio.floor()
    };
    if index >= usize::MAX as f64 {
        return None;
    }
    Some(index as usize)
}
