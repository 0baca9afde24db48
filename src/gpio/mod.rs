//! GPIO output boundary.
//!
//! # Data Flow
//! ```text
//! signal driver / monitor
//!     → LedBank trait (set line, all off)
//!     → RpiLedBank  (rppal, feature "rpi", real pins)
//!     → LogLedBank  (default build, transitions traced only)
//!     → MemoryLedBank (tests and dry runs, transitions recorded)
//! ```
//!
//! # Design Decisions
//! - All hardware access goes through the `LedBank` trait so the core
//!   stays testable without real peripherals
//! - Line state changes are infallible; only claiming pins can fail
//! - Pins are released when the bank is dropped

pub mod bank;

#[cfg(feature = "rpi")]
pub mod rpi;

pub use bank::{LedBank, LedLine, LogLedBank, MemoryLedBank};

#[cfg(feature = "rpi")]
pub use rpi::{GpioError, RpiLedBank};
