//! wotd CLI
//!
//! Fetch a word of the day once, or keep a daily display running.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use wotd::{
    error::Result,
    models::{Config, Feed, SourceConfig, SourceKind, WordResult},
    pipeline::{self, ConsoleSink},
    services::{self, DailyGate, WordOfTheDayFetcher},
};

/// wotd - Word of the Day scraper
#[derive(Parser, Debug)]
#[command(
    name = "wotd",
    version,
    about = "Scrapes a word of the day from dictionary sites"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "wotd.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch one word of the day
    Fetch {
        /// Site to fetch from (default: feeds.source from config)
        #[arg(long)]
        source: Option<SourceKind>,

        /// Scrape this page instead of a built-in site
        #[arg(long, conflicts_with = "source")]
        url: Option<String>,

        /// CSS selector for the word on a custom page
        #[arg(long)]
        selector: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch every enabled feed concurrently
    All,

    /// Show each enabled feed once per day
    Daily {
        /// Keep running, re-checking every N seconds
        #[arg(long, value_name = "SECS")]
        watch: Option<u64>,
    },

    /// Scrape a saved HTML page without touching the network
    Scrape {
        /// HTML file to read
        file: PathBuf,

        /// Site whose layout the page follows
        #[arg(long, default_value = "merriam-webster")]
        source: SourceKind,

        /// CSS selector for the word (custom layout)
        #[arg(long)]
        selector: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag and configured level.
fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn print_word(result: &WordResult, label: &str, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("{}", result.format(label));
    }
    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging is configured from the file, so load it first and report later
    let (config, load_error) = match Config::load(&cli.config) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    init_logging(cli.verbose, &config.logging.level);

    match load_error {
        Some(e) => log::warn!(
            "Config load failed from {}: {}. Using defaults.",
            cli.config.display(),
            e
        ),
        None => log::debug!("Loaded configuration from {}", cli.config.display()),
    }

    match cli.command {
        Command::Fetch {
            source,
            url,
            selector,
            json,
        } => {
            let source = match (url, source) {
                (Some(url), _) => SourceConfig::custom(url, selector),
                (None, Some(SourceKind::Custom)) => {
                    let mut custom = config.custom_source();
                    if selector.is_some() {
                        custom.selector = selector;
                    }
                    custom
                }
                (None, Some(kind)) => SourceConfig::builtin(kind),
                (None, None) => config.source_for(Feed::Primary),
            };

            let fetcher = WordOfTheDayFetcher::from_config(&config.http)?;
            let result = fetcher.fetch(&source).await?;
            print_word(&result, Feed::Primary.label(), json)?;
        }

        Command::All => {
            let feeds = config.enabled_feeds();
            if feeds.is_empty() {
                log::warn!("No feeds enabled in {}", cli.config.display());
                return Ok(());
            }

            let sources: Vec<_> = feeds
                .iter()
                .map(|feed| (feed.label(), config.source_for(*feed)))
                .collect();
            let fetcher = WordOfTheDayFetcher::from_config(&config.http)?;
            for line in fetcher.fetch_all(&sources).await {
                println!("{line}");
            }
        }

        Command::Daily { watch } => {
            config.validate()?;
            let fetcher = WordOfTheDayFetcher::from_config(&config.http)?;
            let gate = DailyGate::new();
            let sink = ConsoleSink::default();

            match watch {
                None => {
                    let outcome = pipeline::run_daily(&config, &fetcher, &gate, &sink).await;
                    if outcome.is_idle() {
                        log::info!("Nothing enabled to show");
                    }
                }
                Some(secs) => {
                    let mut ticker = tokio::time::interval(Duration::from_secs(secs.max(1)));
                    log::info!("Watching feeds every {}s, Ctrl-C to stop", secs.max(1));
                    loop {
                        tokio::select! {
                            _ = ticker.tick() => {
                                pipeline::run_daily(&config, &fetcher, &gate, &sink).await;
                            }
                            signal = tokio::signal::ctrl_c() => {
                                if let Err(e) = signal {
                                    log::error!("Failed to listen for Ctrl-C: {}", e);
                                }
                                break;
                            }
                        }
                    }
                    gate.reset();
                    log::info!("Stopped watching");
                }
            }
        }

        Command::Scrape {
            file,
            source,
            selector,
            json,
        } => {
            let body = std::fs::read_to_string(&file)?;
            let source = match source {
                SourceKind::Custom => SourceConfig::custom(
                    "",
                    selector.or_else(|| Some(config.custom.selector.clone())),
                ),
                kind => SourceConfig::builtin(kind),
            };
            let result = services::scrape_page(&source, &body)?;
            print_word(&result, Feed::Primary.label(), json)?;
        }

        Command::Validate => {
            log::info!("Validating {}...", cli.config.display());

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!(
                "✓ Config OK (feeds: {})",
                config
                    .enabled_feeds()
                    .iter()
                    .map(Feed::label)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
    }

    Ok(())
}
