//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → trigger graceful shutdown
//!
//! Shutdown (shutdown.rs):
//!     broadcast channel → monitor loop observes → lines off → exit
//! ```
//!
//! # Design Decisions
//! - Interrupt is a normal, successful shutdown path, not a fault
//! - Cleanup (lines off, pins released) runs regardless of exit path

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
