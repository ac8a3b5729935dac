//! tetramap: place questionnaire profiles on a 2D similarity map.
//!
//! This is the CLI binary entry point.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tetramap::analysis::{compare_profiles, rank_neighbours, Agreement};
use tetramap::config::{DIMENSIONS_FILE, MAX_DECIMALS, OUTPUT_FILE, PROFILES_FILE};
use tetramap::embedding::StressConfig;
use tetramap::runtime::io::{load_dataset, to_pretty_json, write_map};
use tetramap::runtime::pipeline::{MapPipeline, PipelineConfig};

/// tetramap CLI.
#[derive(Parser, Debug)]
#[command(
    name = "tetramap",
    about = "tetramap: tetralemma profile encoding and 2D stress layout",
    version
)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode, lay out and normalise every profile; write the map document.
    Map(MapArgs),

    /// Compare two profiles dimension by dimension.
    Compare {
        #[command(flatten)]
        data: DataArgs,

        /// First profile name.
        left: String,

        /// Second profile name.
        right: String,

        /// Print the comparison as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List the profiles closest to one profile.
    Neighbours {
        #[command(flatten)]
        data: DataArgs,

        /// Reference profile name.
        name: String,

        /// Maximum number of neighbours to print.
        #[arg(short = 'k', long, default_value_t = 5)]
        limit: usize,
    },
}

#[derive(Args, Debug)]
struct DataArgs {
    /// Dimensions document.
    #[arg(long, default_value = DIMENSIONS_FILE)]
    dimensions: PathBuf,

    /// Profiles document.
    #[arg(long, default_value = PROFILES_FILE)]
    profiles: PathBuf,
}

#[derive(Args, Debug)]
struct MapArgs {
    #[command(flatten)]
    data: DataArgs,

    /// Output map document.
    #[arg(short, long, default_value = OUTPUT_FILE)]
    output: PathBuf,

    /// Gradient-descent iterations.
    #[arg(short = 'n', long, default_value_t = tetramap::config::DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Seed for the initial layout.
    #[arg(long, default_value_t = tetramap::config::DEFAULT_SEED)]
    seed: u64,

    /// Initial learning rate (finite, positive).
    #[arg(long, default_value_t = tetramap::config::INITIAL_LEARNING_RATE)]
    learning_rate: f64,

    /// Per-iteration learning-rate decay, in (0, 1].
    #[arg(long, default_value_t = tetramap::config::LEARNING_RATE_DECAY)]
    decay: f64,

    /// Accumulate gradients on all cores (same output as sequential).
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Round output coordinates to this many decimals (0 to 15).
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_DECIMALS as i64))]
    decimals: Option<u32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    tracing::info!("tetramap v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Map(args) => run_map(args),
        Command::Compare {
            data,
            left,
            right,
            json,
        } => run_compare(data, &left, &right, json),
        Command::Neighbours { data, name, limit } => run_neighbours(data, &name, limit),
    }
}

fn run_map(args: MapArgs) -> Result<()> {
    let config = PipelineConfig {
        stress: StressConfig {
            seed: args.seed,
            iterations: args.iterations,
            initial_learning_rate: args.learning_rate,
            decay: args.decay,
            parallel: args.parallel,
            ..Default::default()
        },
        decimals: args.decimals,
    };
    config.stress.validate()?;

    let dataset = load_dataset(&args.data.dimensions, &args.data.profiles)?;
    tracing::info!(
        "Loaded {} dimensions from {}, {} profiles from {}",
        dataset.dimensions.len(),
        args.data.dimensions.display(),
        dataset.profiles.len(),
        args.data.profiles.display(),
    );

    let result = MapPipeline::new(config).run(&dataset)?;

    tracing::info!(
        "Layout finished in {:.1} ms",
        result.timings.total_us as f64 / 1000.0
    );
    for (stage, pct) in result.timings.breakdown() {
        tracing::debug!("  {stage}: {pct:.1}%");
    }

    write_map(&args.output, &result.entries)?;
    tracing::info!(
        "Wrote {} entries to {}",
        result.entries.len(),
        args.output.display()
    );
    Ok(())
}

fn run_compare(data: DataArgs, left: &str, right: &str, json: bool) -> Result<()> {
    let dataset = load_dataset(&data.dimensions, &data.profiles)?;
    let a = &dataset.profiles[dataset.profile_index(left)?];
    let b = &dataset.profiles[dataset.profile_index(right)?];
    let cmp = compare_profiles(&dataset.dimensions, a, b);

    if json {
        println!("{}", to_pretty_json(&cmp)?);
        return Ok(());
    }

    println!("{} vs {}", cmp.left, cmp.right);
    for line in &cmp.breakdown {
        let mark = match line.agreement {
            Agreement::Same => "=",
            Agreement::Related => "~",
            Agreement::Opposite => "x",
        };
        println!(
            "  {mark} {:<24} {:<16} {:<16}",
            line.dimension,
            line.left.as_deref().unwrap_or("-"),
            line.right.as_deref().unwrap_or("-"),
        );
    }
    println!(
        "Distance {}/{}, {}% similar",
        cmp.total_distance, cmp.max_distance, cmp.similarity_percent
    );
    Ok(())
}

fn run_neighbours(data: DataArgs, name: &str, limit: usize) -> Result<()> {
    let dataset = load_dataset(&data.dimensions, &data.profiles)?;
    let index = dataset.profile_index(name)?;
    let ranked = rank_neighbours(&dataset.dimensions, &dataset.profiles, index);

    println!("Closest to {name}:");
    for (rank, n) in ranked.iter().take(limit).enumerate() {
        println!(
            "  {:>2}. {:<32} distance {:>2}  {:>3}%",
            rank + 1,
            n.name,
            n.total_distance,
            n.similarity_percent
        );
    }
    Ok(())
}
