//! pinglight daemon entry point.
//!
//! Startup order matters: configuration is loaded and validated before any
//! GPIO line is claimed, so a bad config can never leave an LED lit.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pinglight::config::{load_config, MonitorConfig};
use pinglight::gpio::LedBank;
use pinglight::lifecycle::{signals, Shutdown};
use pinglight::probe::PingProber;
use pinglight::ReachabilityMonitor;

#[derive(Parser)]
#[command(name = "pinglight")]
#[command(about = "LED-signalled network reachability monitor", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file (defaults are used when absent).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Validate the configuration and exit.
    #[arg(long)]
    check_config: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pinglight=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "invalid configuration");
                std::process::exit(1);
            }
        },
        None => MonitorConfig::default(),
    };

    if cli.check_config {
        tracing::info!("configuration ok");
        return;
    }

    tracing::info!(
        local_addresses = ?config.probes.local_addresses,
        wan_addresses = ?config.probes.wan_addresses,
        echo_count = config.probes.echo_count,
        idle_interval_secs = config.signal.idle_interval_secs,
        "configuration loaded"
    );

    let bank = match build_bank(&config) {
        Ok(bank) => bank,
        Err(e) => {
            tracing::error!(error = %e, "failed to initialize led lines");
            std::process::exit(1);
        }
    };

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        tracing::info!("shutdown signal received, exiting");
        shutdown.trigger();
    });

    let prober = PingProber::new(config.probes.echo_count);
    let monitor = ReachabilityMonitor::new(config, Box::new(prober), bank);
    monitor.run(receiver).await;

    tracing::info!("shutdown complete");
}

#[cfg(feature = "rpi")]
fn build_bank(config: &MonitorConfig) -> Result<Box<dyn LedBank>, pinglight::gpio::GpioError> {
    let bank = pinglight::gpio::RpiLedBank::new(&config.gpio)?;
    Ok(Box::new(bank))
}

#[cfg(not(feature = "rpi"))]
fn build_bank(_config: &MonitorConfig) -> Result<Box<dyn LedBank>, std::convert::Infallible> {
    tracing::info!("built without the rpi feature; led transitions are logged only");
    Ok(Box::new(pinglight::gpio::LogLedBank::new()))
}
