// src/simulation/framework.rs

use log::{debug, info, trace, warn};

use crate::config::{InitialPopulations, Parameters};
use crate::math::{step_count, step_index, SimulationError};
use crate::models::{conserved_quantity, EquilibriumScale, PopulationState};
use crate::simulation::history::{History, Sample};

/// 捕食者-被食者モデルのシミュレーション
///
/// 状態は平衡点で規格化した座標で保持し、記録は絶対個体数で行う。
/// 記録はステップ数に比例してメモリを消費し、削除は行わない。
#[derive(Debug, Clone)]
pub struct Simulation {
    params: Parameters,
    scale: EquilibriumScale,
    state: PopulationState,
    history: History,
}

impl Simulation {
    /// シミュレーションの初期化
    ///
    /// # 引数
    /// - `initial`: 初期個体数
    /// - `params`: 係数と時間刻み
    ///
    /// # 戻り値
    /// - 時刻0の記録を1件持つシミュレーション
    pub fn new(initial: InitialPopulations, params: Parameters) -> Result<Self, SimulationError> {
        initial.validate()?;
        params.validate()?;
        let scale = EquilibriumScale::from_parameters(&params)?;
        let state = PopulationState::from_absolute(&initial, &scale);

        let mut history = History::new();
        history.push(
            initial.x0,
            initial.y0,
            conserved_quantity(&params, initial.x0, initial.y0),
            params.delta_t,
        );

        debug!(
            "simulation initialized: x0={}, y0={}, scale=({}, {}), dt={}",
            initial.x0, initial.y0, scale.x, scale.y, params.delta_t
        );

        Ok(Simulation {
            params,
            scale,
            state,
            history,
        })
    }

    /// `total_time / Δt` を切り捨てたステップ数だけ積分し、記録に追記する
    ///
    /// 複数回呼ぶと前回の状態から続けて積分する。
    ///
    /// # 戻り値
    /// - 追記したステップ数
    pub fn run_simulation(&mut self, total_time: f64) -> Result<usize, SimulationError> {
        if !total_time.is_finite() || total_time < 0.0 {
            return Err(SimulationError::InvalidDuration(total_time));
        }
        let steps = step_count(total_time, self.params.delta_t)
            .ok_or(SimulationError::InvalidDuration(total_time))?;

        self.history
            .try_reserve(steps)
            .map_err(|_| SimulationError::HistoryCapacity { steps })?;
        let mut clamp_events = 0usize;
        for _ in 0..steps {
            let (next, clamped) = self.state.step(&self.params, &self.scale);
            if clamped > 0 {
                trace!("population clamped to floor at step {}", self.history.len());
                clamp_events += clamped;
            }
            self.state = next;

            let (x, y) = self.state.to_absolute(&self.scale);
            let h = conserved_quantity(&self.params, x, y);
            self.history.push(x, y, h, self.params.delta_t);
        }

        if clamp_events > 0 {
            warn!("{} population values were clamped to the floor", clamp_events);
        }
        info!(
            "ran {} steps (t={}): x={}, y={}, H={}",
            steps,
            self.elapsed_time(),
            self.current_x(),
            self.current_y(),
            self.current_h()
        );
        Ok(steps)
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub fn scale(&self) -> &EquilibriumScale {
        &self.scale
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// 最後の記録の時刻
    pub fn elapsed_time(&self) -> f64 {
        self.history.len().saturating_sub(1) as f64 * self.params.delta_t
    }

    pub fn calculate_h(&self, x: f64, y: f64) -> f64 {
        conserved_quantity(&self.params, x, y)
    }

    pub fn current_x(&self) -> f64 {
        self.state.to_absolute(&self.scale).0
    }

    pub fn current_y(&self) -> f64 {
        self.state.to_absolute(&self.scale).1
    }

    pub fn current_h(&self) -> f64 {
        self.calculate_h(self.current_x(), self.current_y())
    }

    /// 指定時刻の記録。範囲外なら `None`
    ///
    /// 時刻は `floor(time / Δt)` でインデックスに変換するが、格子点 `i * Δt` から
    /// 相対 1e-9 以内の時刻は（わずかに下回る場合も）`i` 番目を返す。
    pub fn sample_at(&self, time: f64) -> Option<Sample> {
        step_index(time, self.params.delta_t).and_then(|index| self.history.get(index))
    }

    /// `sample_at` と同じ規則で時刻を引く
    pub fn x_at(&self, time: f64) -> Option<f64> {
        self.sample_at(time).map(|s| s.x)
    }

    pub fn y_at(&self, time: f64) -> Option<f64> {
        self.sample_at(time).map(|s| s.y)
    }

    pub fn h_at(&self, time: f64) -> Option<f64> {
        self.sample_at(time).map(|s| s.h)
    }

    /// 描画用の (t, x) と (t, y) の系列
    pub fn population_series(&self) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
        self.history.samples().map(|s| ((s.time, s.x), (s.time, s.y))).unzip()
    }

    /// 描画用の (t, H) の系列
    pub fn h_series(&self) -> Vec<(f64, f64)> {
        self.history.samples().map(|s| (s.time, s.h)).collect()
    }

    /// 初期値からの H のずれの最大値（数値誤差の目安）
    pub fn h_drift(&self) -> f64 {
        let values = self.history.h_values();
        match values.first() {
            Some(&h0) => values.iter().map(|h| (h - h0).abs()).fold(0.0, f64::max),
            None => 0.0,
        }
    }
}
