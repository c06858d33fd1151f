use clap::{Parser, ValueEnum};
use lanedot::{
    error::{Error, Result},
    fs::load_f32_npy,
    harness::{DataSource, Pattern, Report, SweepConfig, run_size},
    numerics::describe_selected_lane_widths,
};
use std::{path::PathBuf, process::ExitCode};
use tqdm::tqdm;
use tracing_subscriber::EnvFilter;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PatternArg {
    Alternating,
    Gaussian,
}

impl From<PatternArg> for Pattern {
    fn from(value: PatternArg) -> Self {
        match value {
            PatternArg::Alternating => Pattern::Alternating,
            PatternArg::Gaussian => Pattern::Gaussian,
        }
    }
}

/// Dot product kernels at different SIMD lane widths, timed and checked against each other
#[derive(Parser, Debug)]
#[command(name = "lanedot")]
#[command(about = "Benchmarks SIMD dot product kernels across lane widths", long_about = None)]
struct Args {
    /// Smallest input size (inclusive)
    #[arg(long, default_value_t = 25_000)]
    min_size: usize,

    /// Largest input size (exclusive)
    #[arg(long, default_value_t = 200_000)]
    max_size: usize,

    /// Increment between input sizes
    #[arg(long, default_value_t = 25_000)]
    step: usize,

    /// Synthetic input pattern, ignored when --input is given
    #[arg(long, value_enum, default_value_t = PatternArg::Alternating)]
    pattern: PatternArg,

    /// Seed for the gaussian pattern
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Path to a float32 numpy array to use instead of synthetic data
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Maximum accepted deviation of a kernel result
    #[arg(long, default_value_t = 1e-3)]
    tolerance: f32,

    /// Write the full report as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<bool> {
    if args.step == 0 {
        return Err(Error::Config("--step must be positive".to_string()));
    }

    let source = match &args.input {
        Some(path) => DataSource::Loaded(load_f32_npy(path)?),
        None => DataSource::Synthetic {
            pattern: args.pattern.into(),
            seed: args.seed,
        },
    };
    let config = SweepConfig {
        sizes: SweepConfig::size_range(args.min_size, args.max_size, args.step),
        tolerance: args.tolerance,
        source,
    };

    let mut report = Report::new(&config);
    for size in tqdm(config.sizes.clone().into_iter()) {
        run_size(size, &config, &mut report);
    }

    for (kernel, stats) in &report.kernels {
        stats.dump(kernel);
    }
    if report.results.is_empty() {
        tracing::error!("No input size could be checked");
    }

    if let Some(path) = &args.json {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json)?;
        tracing::info!(path = %path.display(), "report written");
    }

    Ok(report.passed())
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    tracing::info!("Architecture: {}", describe_selected_lane_widths());

    match run(args) {
        Ok(true) => {
            tracing::info!("All kernels agree");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            tracing::error!("Dot product check failed");
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
