//! Command line front end: train, test, init and prepare.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use twolayer_nn::data::{load_dataset, save_dataset};
use twolayer_nn::eval::{evaluate, save_report, save_report_json, EvaluateConfig, MetricPolicy};
use twolayer_nn::network::{load_network, random_network, save_network};
use twolayer_nn::prep::{parse_csv, train_test_split};
use twolayer_nn::train::{train_loop, TrainConfig};

#[derive(Parser)]
#[command(name = "twolayer-nn")]
#[command(about = "Train and test a one-hidden-layer sigmoid network", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train an initialized network and write the trained weights
    Train {
        /// Untrained network weight file
        #[arg(short, long)]
        network: PathBuf,

        /// Training data file
        #[arg(short, long)]
        data: PathBuf,

        /// Output file for the trained network
        #[arg(short, long)]
        out: PathBuf,

        /// Number of epochs to train for
        #[arg(short, long)]
        epochs: usize,

        /// Learning rate
        #[arg(short, long)]
        learning_rate: f64,

        /// Also write per-epoch statistics as JSON
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// Evaluate a trained network and write the metrics file
    Test {
        /// Trained network weight file
        #[arg(short, long)]
        network: PathBuf,

        /// Testing data file
        #[arg(short, long)]
        data: PathBuf,

        /// Output file for testing results
        #[arg(short, long)]
        out: PathBuf,

        /// Fail instead of writing `nan` when a metric is undefined
        #[arg(long)]
        strict_metrics: bool,

        /// Also write the full report as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Write a network file with random weights in [0, 1)
    Init {
        #[arg(long)]
        inputs: usize,

        #[arg(long)]
        hidden: usize,

        #[arg(long, default_value = "1")]
        outputs: usize,

        #[arg(short, long)]
        out: PathBuf,

        /// Seed for reproducible weights
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Split and standardize a CSV file into train and test data files
    Prepare {
        /// Source CSV with a header row
        #[arg(long)]
        csv: PathBuf,

        /// Name of the 0/1 target column
        #[arg(long)]
        target: String,

        /// Feature columns (default: every other column)
        #[arg(long, value_delimiter = ',')]
        features: Option<Vec<String>>,

        #[arg(long)]
        train_out: PathBuf,

        #[arg(long)]
        test_out: PathBuf,

        /// Fraction of rows held out for testing
        #[arg(long, default_value = "0.25")]
        test_fraction: f64,

        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "twolayer_nn=debug" } else { "twolayer_nn=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(filter)
        .init();

    match cli.command {
        Commands::Train { network, data, out, epochs, learning_rate, history } => {
            run_train(network, data, out, TrainConfig::new(epochs, learning_rate), history)
        }
        Commands::Test { network, data, out, strict_metrics, json } => {
            let policy = if strict_metrics { MetricPolicy::Abort } else { MetricPolicy::ReportUndefined };
            run_test(network, data, out, EvaluateConfig::with_policy(policy), json)
        }
        Commands::Init { inputs, hidden, outputs, out, seed } => run_init(inputs, hidden, outputs, out, seed),
        Commands::Prepare { csv, target, features, train_out, test_out, test_fraction, seed } => {
            run_prepare(csv, &target, features, train_out, test_out, test_fraction, seed)
        }
    }
}

fn run_train(
    network_path: PathBuf,
    data_path: PathBuf,
    out: PathBuf,
    config: TrainConfig,
    history_path: Option<PathBuf>,
) -> Result<()> {
    let mut network = load_network(&network_path)
        .with_context(|| format!("loading network from {}", network_path.display()))?;
    let dataset = load_dataset(&data_path)
        .with_context(|| format!("loading training data from {}", data_path.display()))?;

    let history = train_loop(&mut network, &dataset, &config)?;

    save_network(&network, &out).with_context(|| format!("writing {}", out.display()))?;
    info!(path = %out.display(), "trained network written");

    if let Some(path) = history_path {
        let file = std::fs::File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), &history)?;
    }
    Ok(())
}

fn run_test(
    network_path: PathBuf,
    data_path: PathBuf,
    out: PathBuf,
    config: EvaluateConfig,
    json_path: Option<PathBuf>,
) -> Result<()> {
    let network = load_network(&network_path)
        .with_context(|| format!("loading network from {}", network_path.display()))?;
    let dataset = load_dataset(&data_path)
        .with_context(|| format!("loading testing data from {}", data_path.display()))?;

    let report = evaluate(&network, &dataset, &config)?;

    save_report(&report, &out).with_context(|| format!("writing {}", out.display()))?;
    if let Some(path) = json_path {
        save_report_json(&report, &path).with_context(|| format!("writing {}", path.display()))?;
    }
    info!(path = %out.display(), "metrics written");
    Ok(())
}

fn run_init(inputs: usize, hidden: usize, outputs: usize, out: PathBuf, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let network = random_network(inputs, hidden, outputs, &mut rng)?;
    save_network(&network, &out).with_context(|| format!("writing {}", out.display()))?;
    info!(inputs, hidden, outputs, path = %out.display(), "initial network written");
    Ok(())
}

fn run_prepare(
    csv_path: PathBuf,
    target: &str,
    features: Option<Vec<String>>,
    train_out: PathBuf,
    test_out: PathBuf,
    test_fraction: f64,
    seed: Option<u64>,
) -> Result<()> {
    let text = std::fs::read_to_string(&csv_path)
        .with_context(|| format!("reading {}", csv_path.display()))?;
    let table = parse_csv(&text, target, features.as_deref())?;

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let data = train_test_split(table, test_fraction, &mut rng)?;

    save_dataset(&data.train, &train_out).with_context(|| format!("writing {}", train_out.display()))?;
    save_dataset(&data.test, &test_out).with_context(|| format!("writing {}", test_out.display()))?;
    Ok(())
}
