//! Shared helpers for the integration tests.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use pinglight::config::MonitorConfig;
use pinglight::gpio::MemoryLedBank;
use pinglight::probe::Prober;

/// Build a config with explicit probe sets and idle interval.
pub fn config(local: &[&str], wan: &[&str], idle_interval_secs: u64) -> MonitorConfig {
    let mut config = MonitorConfig::default();
    config.probes.local_addresses = local.iter().map(|s| s.to_string()).collect();
    config.probes.wan_addresses = wan.iter().map(|s| s.to_string()).collect();
    config.signal.idle_interval_secs = idle_interval_secs;
    config
}

/// Prober scripted with the set of hosts that answer.
///
/// Clones share the check log and LED snapshots, so a test keeps one
/// clone while the monitor owns the other. When observing a bank, the
/// line states at the moment of each check are recorded too.
#[derive(Clone)]
pub struct ScriptedProber {
    reachable: HashSet<String>,
    checked: Arc<Mutex<Vec<String>>>,
    observed_bank: Option<MemoryLedBank>,
    snapshots: Arc<Mutex<Vec<[bool; 3]>>>,
}

impl ScriptedProber {
    pub fn new(reachable: &[&str]) -> Self {
        Self {
            reachable: reachable.iter().map(|s| s.to_string()).collect(),
            checked: Arc::new(Mutex::new(Vec::new())),
            observed_bank: None,
            snapshots: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Record the LED states visible at each check.
    pub fn observing(mut self, bank: MemoryLedBank) -> Self {
        self.observed_bank = Some(bank);
        self
    }

    /// Hosts checked so far, in order.
    pub fn checked(&self) -> Vec<String> {
        self.checked.lock().unwrap().clone()
    }

    /// LED state snapshots taken at each check.
    pub fn snapshots(&self) -> Vec<[bool; 3]> {
        self.snapshots.lock().unwrap().clone()
    }
}

#[async_trait]
impl Prober for ScriptedProber {
    async fn check(&self, address: &str) -> bool {
        self.checked.lock().unwrap().push(address.to_string());
        if let Some(ref bank) = self.observed_bank {
            self.snapshots.lock().unwrap().push(bank.states());
        }
        self.reachable.contains(address)
    }
}
