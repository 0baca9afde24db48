//! pinglight — LED-signalled network reachability monitor.
//!
//! Periodically probes two ordered sets of hosts (a local network segment
//! and a wider-internet segment) and reports the result on three GPIO
//! output lines:
//!
//! ```text
//!     ┌──────────────────────────────────────────────────┐
//!     │                ReachabilityMonitor               │
//!     │                                                  │
//!     │   probe LOCAL set ──score──▶ signal driver       │
//!     │        │ (score 0)              │                │
//!     │        ▼                        ▼                │
//!     │   probe WAN set ──score──▶  LED bank (gpio)      │
//!     │        │ (score 0)              │                │
//!     │        ▼                        ▼                │
//!     │   UNREACHABLE line          LOCAL / WAN line     │
//!     │                                                  │
//!     │   idle for the configured interval, repeat       │
//!     └──────────────────────────────────────────────────┘
//! ```
//!
//! The LOCAL line wins whenever its score is nonzero; the WAN set is not
//! probed at all in that case. A nonzero score pulses the winning line once
//! per reachable host before leaving it lit until the next cycle.

// Core subsystems
pub mod config;
pub mod monitor;
pub mod probe;
pub mod signal;

// Hardware boundary
pub mod gpio;

// Cross-cutting concerns
pub mod lifecycle;

pub use config::schema::MonitorConfig;
pub use lifecycle::Shutdown;
pub use monitor::ReachabilityMonitor;
