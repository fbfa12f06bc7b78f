//! Command-line interface for recursive-gen
//!
//! # Usage Examples
//!
//! ```bash
//! recursive-gen sample --seed 7 --count 3 --max-leaves 20
//! RECURSIVE_GEN_CONFIG=sample.yaml recursive-gen sample --show-events
//! recursive-gen tiers --max-leaves 100
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use recursive_gen::{document_strategy, run_sample, SampleConfig, Shape};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recursive-gen")]
#[command(about = "Generate bounded recursive JSON documents")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw documents and print them as JSON lines
    Sample {
        /// YAML sample configuration
        #[arg(long, env = "RECURSIVE_GEN_CONFIG", value_name = "PATH")]
        config: Option<PathBuf>,

        /// Base seed
        #[arg(long)]
        seed: Option<u64>,

        /// Number of documents
        #[arg(long)]
        count: Option<u64>,

        /// Maximum leaves per document
        #[arg(long)]
        max_leaves: Option<usize>,

        /// Bias towards shallower tiers, in (0, 1]
        #[arg(long)]
        tier_bias: Option<f64>,

        /// Shape of each recursive layer
        #[arg(long, value_enum)]
        shape: Option<Shape>,

        /// Print retry events to stderr
        #[arg(long)]
        show_events: bool,
    },

    /// Print the number of depth tiers built for a leaf budget
    Tiers {
        #[arg(long)]
        max_leaves: usize,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sample {
            config,
            seed,
            count,
            max_leaves,
            tier_bias,
            shape,
            show_events,
        } => {
            let mut sample_config = match config {
                Some(path) => SampleConfig::from_file(&path)
                    .with_context(|| format!("Failed to load sample config from {path:?}"))?,
                None => SampleConfig::default(),
            };
            if let Some(seed) = seed {
                sample_config.seed = seed;
            }
            if let Some(count) = count {
                sample_config.count = count;
            }
            if let Some(max_leaves) = max_leaves {
                sample_config.max_leaves = max_leaves;
            }
            if let Some(tier_bias) = tier_bias {
                sample_config.tier_bias = tier_bias;
            }
            if let Some(shape) = shape {
                sample_config.shape = shape;
            }

            let stdout = std::io::stdout();
            let report = run_sample(&sample_config, &mut stdout.lock())?;
            if show_events {
                for event in &report.events {
                    eprintln!("{event}");
                }
            }
        }
        Commands::Tiers { max_leaves } => {
            let sample_config = SampleConfig {
                max_leaves,
                ..SampleConfig::default()
            };
            let strategy = document_strategy(&sample_config);
            println!("{}", strategy.tier_count());
        }
    }

    Ok(())
}
