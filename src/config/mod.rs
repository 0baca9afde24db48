//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MonitorConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - All fields have defaults matching the classic three-LED Pi wiring,
//!   so running without a config file is valid
//! - Validation separates syntactic (serde) from semantic checks and
//!   reports every problem, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{GpioConfig, MonitorConfig, ProbeConfig, SignalConfig};
pub use validation::{validate_config, ValidationError};
