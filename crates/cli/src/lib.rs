mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use cursorkit_core::platform::input_sinks;
use cursorkit_runtime::{Clock, ManualClock, Mouse, PointerSettings, SystemClock, TickRate};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "mock-platform")]
use cursorkit_platform_mock as _;

use crate::commands::pointer::{self, PointerCommand};

#[derive(Parser)]
#[command(name = "cursorkit", version, about = "Paced pointer, scroll and gesture automation")]
pub struct Cli {
    /// JSON file with pointer settings.
    #[arg(long = "settings", global = true)]
    settings: Option<PathBuf>,
    /// Overrides the tick rate from the settings file.
    #[arg(long = "tick-rate", global = true, value_parser = parse_tick_rate)]
    tick_rate: Option<TickRate>,
    /// Runs against a virtual clock, so no operation actually waits.
    #[arg(long = "instant", global = true)]
    instant: bool,
    /// Print the result as JSON.
    #[arg(long = "json", global = true)]
    json: bool,
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` wins when set.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: PointerCommand,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let output = execute(&cli)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("cursorkit_runtime={level},cursorkit_platform_mock={level},warn"))
    });
    // A second initialisation (tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

fn execute(cli: &Cli) -> Result<String> {
    let settings = load_settings(cli)?;
    let sink = input_sinks().next().ok_or_else(|| anyhow!("no input sink is linked into this build"))?;
    debug!(sink = sink.name(), instant = cli.instant, "starting");

    let manual = ManualClock::new();
    let clock: &dyn Clock = if cli.instant { &manual } else { &SystemClock };
    let mouse = Mouse::new(sink, clock, settings)?;
    pointer::run(&mouse, &cli.command, cli.json)
}

fn load_settings(cli: &Cli) -> Result<PointerSettings> {
    let mut settings = match &cli.settings {
        Some(path) => PointerSettings::from_json_file(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => PointerSettings::default(),
    };
    if let Some(tick_rate) = cli.tick_rate {
        settings = settings.with_tick_rate(tick_rate);
    }
    Ok(settings)
}

fn parse_tick_rate(value: &str) -> Result<TickRate, String> {
    let rate: u32 = value.parse().map_err(|err| format!("invalid tick rate '{value}': {err}"))?;
    TickRate::new(rate).ok_or_else(|| "--tick-rate must be at least 1".to_owned())
}
