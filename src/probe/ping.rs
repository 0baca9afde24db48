//! Prober backed by the system `ping` binary.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::probe::prober::Prober;

/// Checks hosts by spawning `ping -c <echo_count> <host>`.
///
/// Exit status 0 means at least one echo reply arrived, which is the
/// success criterion; partial loss within the echo burst does not matter.
/// Per-echo timeout is whatever the platform ping defaults to.
pub struct PingProber {
    echo_count: u32,
}

impl PingProber {
    pub fn new(echo_count: u32) -> Self {
        Self { echo_count }
    }
}

#[async_trait]
impl Prober for PingProber {
    async fn check(&self, address: &str) -> bool {
        let status = Command::new("ping")
            .arg("-c")
            .arg(self.echo_count.to_string())
            .arg(address)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match status {
            Ok(status) => status.success(),
            Err(e) => {
                // Treated like any other failed check, but worth a warning
                // since it usually means the ping binary is missing.
                tracing::warn!(%address, error = %e, "failed to spawn ping");
                false
            }
        }
    }
}
