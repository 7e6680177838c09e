// src/simulation/csv.rs

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::simulation::framework::Simulation;
use crate::simulation::history::Sample;

pub const CSV_HEADER: &str = "time,x,y,H";

/// 結果をCSVファイルに保存する
pub fn save_results<P: AsRef<Path>>(path: P, sim: &Simulation) -> Result<(), std::io::Error> {
    let output_file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(output_file);
    write_csv(&mut writer, sim)?;
    writer.flush()?;
    info!(
        "saved {} samples to {}",
        sim.history().len(),
        path.as_ref().display()
    );
    Ok(())
}

/// ヘッダーと全記録を時刻順に書き込む
pub fn write_csv<W: Write>(writer: &mut W, sim: &Simulation) -> Result<(), std::io::Error> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for sample in sim.history().samples() {
        writer.write_all(create_csv_row(&sample).as_bytes())?;
    }
    Ok(())
}

/// CSV行の作成
pub fn create_csv_row(sample: &Sample) -> String {
    format!("{},{},{},{}\n", sample.time, sample.x, sample.y, sample.h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InitialPopulations, Parameters};
    use std::fs;
    use tempfile::tempdir;

    fn short_run() -> Simulation {
        let mut sim = Simulation::new(InitialPopulations::default(), Parameters::default()).unwrap();
        sim.run_simulation(0.005).unwrap();
        sim
    }

    #[test]
    fn test_create_csv_row() {
        let row = create_csv_row(&Sample { time: 0.5, x: 1.0, y: 2.5, h: -3.0 });
        assert_eq!(row, "0.5,1,2.5,-3\n");
    }

    #[test]
    fn test_write_csv_layout() {
        let sim = short_run();
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &sim).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "time,x,y,H");
        assert_eq!(lines.len(), sim.history().len() + 1);
        assert!(lines[1].starts_with("0,1200,1000,"));
        assert!(lines.iter().skip(1).all(|l| l.split(',').count() == 4));
    }

    #[test]
    fn test_save_results_to_file() {
        let sim = short_run();
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.csv");

        save_results(&path, &sim).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("time,x,y,H\n"));
        assert_eq!(content.lines().count(), 7);
    }
}
