//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Ensure both probe sets are usable (non-empty)
//! - Validate value ranges and pin assignments
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: MonitorConfig → Result<(), Vec<ValidationError>>
//! - Runs before any GPIO line is claimed

use thiserror::Error;

use crate::config::schema::MonitorConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("local address list is empty; define at least one host")]
    EmptyLocalSet,

    #[error("wan address list is empty; define at least one host")]
    EmptyWanSet,

    #[error("echo_count must be at least 1")]
    ZeroEchoCount,

    #[error("idle_interval_secs must be at least 1")]
    ZeroIdleInterval,

    #[error("gpio pins must be pairwise distinct (local={local}, wan={wan}, unreachable={unreachable})")]
    DuplicatePins {
        local: u8,
        wan: u8,
        unreachable: u8,
    },
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &MonitorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.probes.local_addresses.is_empty() {
        errors.push(ValidationError::EmptyLocalSet);
    }
    if config.probes.wan_addresses.is_empty() {
        errors.push(ValidationError::EmptyWanSet);
    }
    if config.probes.echo_count == 0 {
        errors.push(ValidationError::ZeroEchoCount);
    }
    if config.signal.idle_interval_secs == 0 {
        errors.push(ValidationError::ZeroIdleInterval);
    }

    let pins = &config.gpio;
    if pins.local_pin == pins.wan_pin
        || pins.local_pin == pins.unreachable_pin
        || pins.wan_pin == pins.unreachable_pin
    {
        errors.push(ValidationError::DuplicatePins {
            local: pins.local_pin,
            wan: pins.wan_pin,
            unreachable: pins.unreachable_pin,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
