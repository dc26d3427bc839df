use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;
use vpl_algo::layout::{solve_layout, LayoutProblemBuilder, LayoutSolverConfig, SolveOutcome};
use vpl_cli::cli::{Cli, Commands, SolveArgs};
use vpl_io::report;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    match &cli.command {
        Commands::Solve(args) => match run_solve(args) {
            Ok(code) => code,
            Err(e) => {
                error!("Solve failed: {:?}", e);
                ExitCode::FAILURE
            }
        },
    }
}

fn run_solve(args: &SolveArgs) -> anyhow::Result<ExitCode> {
    let problem = LayoutProblemBuilder::new(args.rows, args.cols)
        .pad(args.pad_cost, args.pad_capacity)
        .stand(args.stand_cost, args.stand_capacity)
        .taxiway_cost(args.taxiway_cost)
        .terminal_cost(args.terminal_cost)
        .budget(args.budget)
        .big_m(args.big_m)
        .build()?;

    info!(
        "Layout problem: {}x{} grid, budget {}",
        args.rows, args.cols, args.budget
    );

    let config = LayoutSolverConfig {
        time_limit: args.time_limit,
    };
    let outcome = solve_layout(&problem, &config)?;

    match outcome {
        SolveOutcome::Optimal(layout) => {
            println!("{}", layout.summary());
            if let Some(dir) = &args.out_dir {
                let paths = report::write_reports(&layout, "optimal", dir)?;
                println!("Reports written to {}", dir.display());
                info!(
                    "Artifacts: {}, {}, {}",
                    paths.grid.display(),
                    paths.summary.display(),
                    paths.json.display()
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        other => {
            println!("No layout produced: {}", other.status());
            Ok(ExitCode::from(1))
        }
    }
}
