use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use rs_chain_core::io::{read_text, read_words};
use rs_chain_core::model::settings::DEFAULT_WINDOW_SIZE;
use rs_chain_core::{generate_text_variation, NameSettings, NameSynthesizer, StdRandom};

#[derive(Parser)]
#[command(about = "Generate names or text from a sample corpus")]
struct Args {
    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Seed for reproducible output (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate names from a word list (one word per line)
    Names {
        corpus: PathBuf,
        #[arg(long, default_value_t = 3)]
        order: usize,
        #[arg(long, default_value_t = 4)]
        min_length: usize,
        /// Allow the same name to be returned twice
        #[arg(long)]
        allow_duplicates: bool,
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
    /// Generate a passage from a free text sample
    Text {
        sample: PathBuf,
        #[arg(long, default_value_t = 100)]
        size: usize,
        #[arg(long, default_value_t = DEFAULT_WINDOW_SIZE)]
        window: usize,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .parse_default_env()
        .init();

    let mut rng = match args.seed {
        Some(seed) => StdRandom::from_seed(seed),
        None => StdRandom::from_os_rng(),
    };

    match args.command {
        Command::Names { corpus, order, min_length, allow_duplicates, count } => {
            let words = read_words(&corpus)?;
            info!("loaded {} words from {}", words.len(), corpus.display());

            // Settings below 1 are clamped, they never fail
            let settings = NameSettings::new(order, min_length, !allow_duplicates);
            let mut synthesizer = NameSynthesizer::with_rng(words, settings, rng);

            for i in 0..count {
                println!("Generated name {}: {}", i + 1, synthesizer.next_name()?);
            }
        }
        Command::Text { sample, size, window } => {
            let text = read_text(&sample)?;
            info!("loaded {} bytes from {}", text.len(), sample.display());
            println!("{}", generate_text_variation(&text, size, window, &mut rng));
        }
    }

    Ok(())
}
