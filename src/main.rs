//! daily-sentence — print one placeholder sentence and exit.
//!
//! The sentence goes to stdout; logs go to stderr.  Exit status is 0 when a
//! sentence was printed and 1 when the fetch failed, whatever the reason.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use daily_sentence::{spawn_fetch, FetchResult, SentenceFetcher, Source};

#[derive(Parser)]
#[command(name = "daily-sentence")]
#[command(about = "Fetch a short placeholder sentence from metaphorpsum.com or itsthisforthat.com")]
#[command(version)]
struct Cli {
    /// Provider to query: "metaphorpsum" or "itsthisforthat" (default: metaphorpsum)
    #[arg(short, long)]
    source: Option<String>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "warn", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long)]
    utc: bool,

    /// Run the request on a worker thread and wait for its outcome
    #[arg(long)]
    background: bool,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// `EnvFilter` directive for this level.  reqwest and hyper are chatty at
    /// debug/trace, so they stay quieter than the crate itself.
    fn filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug,hyper_util=warn,reqwest=info",
            LogLevel::Trace => "trace,hyper_util=warn,reqwest=info",
        }
    }
}

fn init_tracing(cli: &Cli) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_level.filter()));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z".to_string();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr);

    let init_result = if cli.utc {
        builder
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format))
            .try_init()
    } else {
        builder
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format))
            .try_init()
    };
    init_result.map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}

fn run(cli: &Cli) -> FetchResult {
    let fetcher = SentenceFetcher::new();

    if !cli.background {
        return match cli.source.as_deref() {
            None => fetcher.fetch(),
            Some(name) => fetcher.fetch_from_name(name),
        };
    }

    let source = match cli.source.as_deref().map(str::parse::<Source>).transpose() {
        Ok(source) => source.unwrap_or_default(),
        Err(e) => {
            tracing::debug!(error = %e, "rejected before any request");
            return FetchResult::Failed;
        }
    };
    spawn_fetch(fetcher, source)
        .recv()
        .unwrap_or(FetchResult::Failed)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    tracing::info!(
        source = cli.source.as_deref().unwrap_or(Source::default().key()),
        background = cli.background,
        "Fetching sentence"
    );

    match run(&cli) {
        FetchResult::Text(text) => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{text}")?;
            Ok(ExitCode::SUCCESS)
        }
        FetchResult::Failed => {
            eprintln!("daily-sentence: no sentence available");
            Ok(ExitCode::FAILURE)
        }
    }
}
