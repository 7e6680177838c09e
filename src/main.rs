// src/main.rs

use std::error::Error;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use lvsim::simulation::csv::save_results;
use lvsim::simulation::load_parameters::load_run_config;
use lvsim::simulation::query::Prompter;
use lvsim::{RunConfig, Simulation};

#[derive(Parser)]
#[command(name = "lvsim")]
#[command(version)]
#[command(about = "Lotka-Volterra predator-prey simulation (forward Euler)")]
struct Cli {
    /// Run configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use default parameters without asking
    #[arg(long)]
    defaults: bool,

    /// Total simulation time
    #[arg(short, long)]
    total_time: Option<f64>,

    /// CSV output path
    #[arg(short, long, default_value = "results.csv")]
    output: PathBuf,

    /// Skip the interactive time query loop
    #[arg(long)]
    no_query: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    // 設定の決定: ファイル > --defaults > 対話入力
    let config = match (&cli.config, cli.defaults) {
        (Some(path), _) => load_run_config(path)?,
        (None, true) => RunConfig::defaults(),
        (None, false) => prompter.prompt_run_config()?,
    };
    let total_time = match cli.total_time.or(config.total_time) {
        Some(total_time) => total_time,
        None => prompter.prompt_total_time()?,
    };

    // シミュレーションの実行
    let (initial, params) = config.resolve()?;
    let mut sim = Simulation::new(initial, params)?;
    sim.run_simulation(total_time)?;
    info!("max |H - H0| = {}", sim.h_drift());

    save_results(&cli.output, &sim)?;

    println!(
        "Simulation complete. Results saved to {}",
        cli.output.display()
    );
    println!("Final x: {}", sim.current_x());
    println!("Final y: {}", sim.current_y());
    println!("Final H: {}", sim.current_h());

    if !cli.no_query {
        prompter.query_loop(&sim)?;
    }

    println!("Done.");
    Ok(())
}
