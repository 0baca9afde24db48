//! The reachability monitor loop.
//!
//! # Data Flow
//! ```text
//! run(shutdown):
//!     loop {
//!         cycle: reset lines → score LOCAL → (score WAN) → drive signal
//!         idle for the configured interval
//!     }
//!     on shutdown (either phase): deactivate all lines, return
//! ```
//!
//! # Design Decisions
//! - One task, strictly sequential: probing, pulsing, and idling never overlap
//! - Shutdown is raced against both the cycle body and the idle sleep, so
//!   cancellation is observed at every await point; an in-flight ping runs
//!   to its own timeout at worst
//! - Lines are forced inactive on every exit path; pin release happens when
//!   the bank is dropped

use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time;

use crate::config::schema::MonitorConfig;
use crate::gpio::bank::LedBank;
use crate::probe::prober::{score_set, Prober};
use crate::signal::driver::{drive, SignalState};

/// Long-lived monitor owning its configuration, prober, and LED bank.
pub struct ReachabilityMonitor {
    config: MonitorConfig,
    prober: Box<dyn Prober>,
    bank: Box<dyn LedBank>,
}

impl ReachabilityMonitor {
    pub fn new(config: MonitorConfig, prober: Box<dyn Prober>, bank: Box<dyn LedBank>) -> Self {
        Self {
            config,
            prober,
            bank,
        }
    }

    /// Run check cycles until the shutdown signal fires.
    ///
    /// All three lines are deactivated before returning, whichever phase
    /// the signal arrived in.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            local_targets = self.config.probes.local_addresses.len(),
            wan_targets = self.config.probes.wan_addresses.len(),
            idle_interval_secs = self.config.signal.idle_interval_secs,
            "reachability monitor starting"
        );

        let idle = Duration::from_secs(self.config.signal.idle_interval_secs);

        loop {
            tokio::select! {
                _ = self.cycle() => {}
                _ = shutdown.recv() => break,
            }

            tokio::select! {
                _ = time::sleep(idle) => {}
                _ = shutdown.recv() => break,
            }
        }

        tracing::info!("reachability monitor stopping, deactivating led lines");
        self.bank.all_off();
    }

    /// One check cycle: reset, probe, drive.
    async fn cycle(&mut self) {
        self.bank.all_off();

        let local_score = score_set(self.prober.as_ref(), &self.config.probes.local_addresses).await;
        if local_score != 0 {
            tracing::info!(score = local_score, "local segment reachable");
            drive(self.bank.as_mut(), SignalState::LocalOk { score: local_score }).await;
            return;
        }

        let wan_score = score_set(self.prober.as_ref(), &self.config.probes.wan_addresses).await;
        if wan_score != 0 {
            tracing::info!(score = wan_score, "wan segment reachable only");
            drive(self.bank.as_mut(), SignalState::WanOk { score: wan_score }).await;
        } else {
            tracing::warn!("no probe target reachable");
            drive(self.bank.as_mut(), SignalState::NoneOk).await;
        }
    }
}
