use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Solve a vertiport layout problem and report the result
    Solve(SolveArgs),
}

/// Layout problem configuration. Defaults reproduce the reference facility
/// scenario.
#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Grid rows
    #[arg(long, default_value_t = 5)]
    pub rows: usize,

    /// Grid columns
    #[arg(long, default_value_t = 8)]
    pub cols: usize,

    /// Cost of placing one pad
    #[arg(long, default_value_t = 40_000.0)]
    pub pad_cost: f64,

    /// Cost of placing one stand
    #[arg(long, default_value_t = 46_000.0)]
    pub stand_cost: f64,

    /// Cost of placing one taxiway segment
    #[arg(long, default_value_t = 40_000.0)]
    pub taxiway_cost: f64,

    /// Cost of placing the terminal
    #[arg(long, default_value_t = 300_000.0)]
    pub terminal_cost: f64,

    /// Nominal pad capacity (operations; contributes at half rate)
    #[arg(long, default_value_t = 30.0)]
    pub pad_capacity: f64,

    /// Stand capacity (operations)
    #[arg(long, default_value_t = 6.0)]
    pub stand_capacity: f64,

    /// Total placement budget
    #[arg(long, default_value_t = 2_000_000.0)]
    pub budget: f64,

    /// Big-M constant for disjunctive constraints
    #[arg(long, default_value_t = 1_000.0)]
    pub big_m: f64,

    /// Wall-clock solver limit in seconds
    #[arg(long)]
    pub time_limit: Option<f64>,

    /// Directory for layout.csv, summary.csv and solution.json
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}
