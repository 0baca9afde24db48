//! Signal driving subsystem.
//!
//! Translates per-cycle probe scores into LED activity: the winning line
//! pulses once per score point, then stays lit until the next cycle
//! resets it. Precedence is LOCAL over WAN over UNREACHABLE.

pub mod driver;

pub use driver::{drive, SignalState, PULSE_ACTIVE, PULSE_INACTIVE};
