//! Reachability probing subsystem.
//!
//! # Data Flow
//! ```text
//! monitor cycle
//!     → score_set(prober, addresses)
//!     → Prober::check per host, in list order
//!     → PingProber: ping -c N <host>, exit status 0 == reachable
//!     → score = |set| − failed hosts
//! ```
//!
//! # Design Decisions
//! - One check per host per cycle; no retries, no backoff
//! - Unresolvable, unreachable, and timed-out hosts are indistinguishable:
//!   each is one failed check worth exactly −1
//! - Individual failures are folded into the score, never surfaced as errors

pub mod ping;
pub mod prober;

pub use ping::PingProber;
pub use prober::{score_set, Prober};
