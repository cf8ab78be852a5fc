use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shoplog::core::config::{Config, FormatConfig};
use shoplog::core::driver::{Driver, Limits, ThreadSleeper};
use shoplog::core::metrics::Metrics;
use shoplog::core::pacing::Pacer;
use shoplog::core::traits::EventWriter;
use shoplog::formats::json::JsonlWriter;
use shoplog::formats::text::TextWriter;
use shoplog::sources::ecommerce::EcommerceGenerator;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "shoplog")]
#[command(about = "Synthetic e-commerce log generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Gen {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        stdout: bool,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        dry_run: bool,
        #[arg(long)]
        max_events: Option<u64>,
        #[arg(long)]
        max_seconds: Option<u64>,
        #[arg(long, default_value_t = 60_000)]
        metrics_interval_ms: u64,
    },
}

fn main() {
    let filter = std::env::var("SHOPLOG_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Gen {
            config,
            output,
            stdout,
            seed,
            dry_run,
            max_events,
            max_seconds,
            metrics_interval_ms,
        } => {
            let mut loaded = match config {
                Some(path) => Config::from_path(&path)?,
                None => Config::default(),
            };

            if let Some(path) = output {
                loaded.output.path = path.to_string_lossy().to_string();
            }
            if stdout {
                loaded.output.console = true;
            }
            if seed.is_some() {
                loaded.seed = seed;
            }
            loaded.validate()?;

            if dry_run {
                println!("config loaded: {loaded:#?}");
                return Ok(());
            }

            let mut writer = open_writer(&loaded)?;
            let mut generator = EcommerceGenerator::from_seed(loaded.seed);
            let mut pacing_rng = match loaded.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
                None => StdRng::from_entropy(),
            };

            let limits = Limits {
                max_events,
                max_duration: max_seconds.map(Duration::from_secs),
            };
            let pacer = Pacer::from_config(&loaded.traffic);
            let mut driver = Driver::new(
                pacer,
                limits,
                ThreadSleeper::new(),
                Metrics::new(Duration::from_millis(metrics_interval_ms)),
            );

            let sink = if loaded.output.console {
                "stdout"
            } else {
                loaded.output.path.as_str()
            };
            tracing::info!(
                sink,
                format = ?loaded.output.format,
                seed = ?loaded.seed,
                mean_delay = ?pacer.mean(),
                "starting log generation"
            );
            driver.run(&mut generator, writer.as_mut(), &mut pacing_rng)?;
        }
    }

    Ok(())
}

fn open_writer(config: &Config) -> std::io::Result<Box<dyn EventWriter>> {
    let output = &config.output;
    let origin = output.origin.clone();
    let writer: Box<dyn EventWriter> = match (output.format, output.console) {
        (FormatConfig::Text, true) => Box::new(TextWriter::stdout(origin)),
        (FormatConfig::Text, false) => Box::new(TextWriter::append_to(&output.path, origin)?),
        (FormatConfig::Jsonl, true) => Box::new(JsonlWriter::stdout(origin)),
        (FormatConfig::Jsonl, false) => Box::new(JsonlWriter::append_to(&output.path, origin)?),
    };
    Ok(writer)
}
