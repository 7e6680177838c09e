// src/simulation/history.rs

use std::collections::TryReserveError;

/// 1時刻分の記録
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub x: f64,
    pub y: f64,
    pub h: f64,
}

/// 時系列の記録。4つの列は常に同じ長さで、追記のみ行う
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    x_values: Vec<f64>,
    y_values: Vec<f64>,
    h_values: Vec<f64>,
    time_values: Vec<f64>,
}

impl History {
    pub fn new() -> Self {
        History::default()
    }

    /// 1件追記する。時刻はインデックス × Δt から計算する
    pub(crate) fn push(&mut self, x: f64, y: f64, h: f64, dt: f64) {
        let index = self.len();
        self.x_values.push(x);
        self.y_values.push(y);
        self.h_values.push(h);
        self.time_values.push(index as f64 * dt);
    }

    pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.x_values.try_reserve(additional)?;
        self.y_values.try_reserve(additional)?;
        self.h_values.try_reserve(additional)?;
        self.time_values.try_reserve(additional)
    }

    pub fn len(&self) -> usize {
        self.time_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_values.is_empty()
    }

    pub fn x_values(&self) -> &[f64] {
        &self.x_values
    }

    pub fn y_values(&self) -> &[f64] {
        &self.y_values
    }

    pub fn h_values(&self) -> &[f64] {
        &self.h_values
    }

    pub fn time_values(&self) -> &[f64] {
        &self.time_values
    }

    pub fn get(&self, index: usize) -> Option<Sample> {
        Some(Sample {
            time: *self.time_values.get(index)?,
            x: *self.x_values.get(index)?,
            y: *self.y_values.get(index)?,
            h: *self.h_values.get(index)?,
        })
    }

    pub fn last(&self) -> Option<Sample> {
        self.len().checked_sub(1).and_then(|index| self.get(index))
    }

    /// 時刻順に全件を返す
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.time_values
            .iter()
            .zip(self.x_values.iter())
            .zip(self.y_values.iter())
            .zip(self.h_values.iter())
            .map(|(((&time, &x), &y), &h)| Sample { time, x, y, h })
    }
}
