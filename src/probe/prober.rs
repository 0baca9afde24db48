//! The probe capability and set scoring.

use async_trait::async_trait;

/// A reachability check for a single host.
///
/// Implementations decide how a host is probed; the monitor only sees
/// the boolean outcome.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Check one host. `true` means at least minimal connectivity.
    async fn check(&self, address: &str) -> bool;
}

/// Score a probe set: cardinality minus the number of failed hosts.
///
/// Hosts are checked exactly once each, sequentially, in list order.
/// An empty set scores zero.
pub async fn score_set(prober: &dyn Prober, addresses: &[String]) -> usize {
    let mut score = addresses.len();
    for address in addresses {
        if !prober.check(address).await {
            score -= 1;
            tracing::debug!(%address, "probe failed");
        }
    }
    score
}
