// src/simulation/query.rs

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::config::{ManualOverride, RunConfig};
use crate::simulation::framework::Simulation;

/// 終了を表す入力
pub const QUIT_TOKEN: &str = "q";

/// 対話入力。入力と出力を差し替えられるようにしてある
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

/// パラメータ入力方法の選択
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    Defaults,
    Manual,
}

impl EntryMode {
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim().to_ascii_lowercase().as_str() {
            "default" | "no" | "n" => Some(EntryMode::Defaults),
            "si" | "yes" | "y" => Some(EntryMode::Manual),
            _ => None,
        }
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// 1行読み込む。入力が終わっていれば `None`
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        self.read_line()?
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"))
    }

    /// 数値が入力されるまで聞き直す
    fn ask_number<T: FromStr>(&mut self, message: &str) -> io::Result<T> {
        loop {
            let answer = self.ask(message)?;
            match answer.parse() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Error: please enter a valid number.")?,
            }
        }
    }

    /// デフォルト値を使うか、係数と初期個体数を手入力するかを聞く
    pub fn prompt_run_config(&mut self) -> io::Result<RunConfig> {
        let mode = loop {
            let answer = self.ask("Enter A, B, C, D, x0, y0 manually? (default/no/yes): ")?;
            match EntryMode::parse(&answer) {
                Some(mode) => break mode,
                None => writeln!(self.output, "Error: enter 'default', 'no' or 'yes'.")?,
            }
        };

        match mode {
            EntryMode::Defaults => {
                writeln!(self.output, "Using default values.")?;
                Ok(RunConfig::defaults())
            }
            EntryMode::Manual => {
                let manual = ManualOverride {
                    a: Some(self.ask_number("Value of A: ")?),
                    b: Some(self.ask_number("Value of B: ")?),
                    c: Some(self.ask_number("Value of C: ")?),
                    d: Some(self.ask_number("Value of D: ")?),
                    x0: Some(self.ask_number("Value of x0: ")?),
                    y0: Some(self.ask_number("Value of y0: ")?),
                    delta_t: None,
                };
                Ok(RunConfig {
                    use_defaults: false,
                    manual_override: Some(manual),
                    total_time: None,
                })
            }
        }
    }

    pub fn prompt_total_time(&mut self) -> io::Result<f64> {
        self.ask_number("Total simulation time: ")
    }

    /// 時刻を受け取り、その時点の x, y, H を表示する。`q` か入力終了で抜ける
    pub fn query_loop(&mut self, sim: &Simulation) -> io::Result<()> {
        loop {
            write!(
                self.output,
                "Time at which to report x, y and H ('{}' to quit): ",
                QUIT_TOKEN
            )?;
            self.output.flush()?;
            let answer = match self.read_line()? {
                Some(answer) => answer,
                None => break,
            };
            if answer == QUIT_TOKEN {
                break;
            }
            let time: f64 = match answer.parse() {
                Ok(time) => time,
                Err(_) => {
                    writeln!(
                        self.output,
                        "Error: enter a valid number or '{}' to quit.",
                        QUIT_TOKEN
                    )?;
                    continue;
                }
            };
            match sim.sample_at(time) {
                Some(sample) => {
                    writeln!(self.output, "x at time {}: {}", time, sample.x)?;
                    writeln!(self.output, "y at time {}: {}", time, sample.y)?;
                    writeln!(self.output, "H at time {}: {}", time, sample.h)?;
                }
                None => writeln!(
                    self.output,
                    "Error: time {} is outside the simulated range [0, {}].",
                    time,
                    sim.elapsed_time()
                )?,
            }
        }
        Ok(())
    }
}
