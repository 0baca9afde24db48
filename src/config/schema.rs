//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the monitor.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the reachability monitor.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MonitorConfig {
    /// Probe target sets and echo policy.
    pub probes: ProbeConfig,

    /// Signal timing (idle interval between cycles).
    pub signal: SignalConfig,

    /// GPIO pin assignments for the three LED lines.
    pub gpio: GpioConfig,
}

/// Probe target configuration.
///
/// Both address lists are ordered and must be non-empty; hosts are checked
/// in list order, one at a time.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Hosts that define the local/primary network segment.
    pub local_addresses: Vec<String>,

    /// Hosts that define the wider-internet/secondary segment, only
    /// consulted when nothing in the local set answers.
    pub wan_addresses: Vec<String>,

    /// Echo requests sent per host (`ping -c <echo_count>`).
    pub echo_count: u32,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            // Google DNS, OpenDNS, www.seznam.cz
            local_addresses: vec![
                "8.8.8.8".to_string(),
                "208.67.222.222".to_string(),
                "77.75.72.3".to_string(),
            ],
            // hkfree.org DNS and gateways
            wan_addresses: vec![
                "10.107.4.1".to_string(),
                "10.107.0.5".to_string(),
                "89.248.240.28".to_string(),
            ],
            echo_count: 3,
        }
    }
}

/// Signal timing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SignalConfig {
    /// Seconds to idle between check cycles.
    pub idle_interval_secs: u64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            idle_interval_secs: 300,
        }
    }
}

/// GPIO pin assignments (BCM numbering).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GpioConfig {
    /// Pin driving the LOCAL (green) LED.
    pub local_pin: u8,

    /// Pin driving the WAN (yellow) LED.
    pub wan_pin: u8,

    /// Pin driving the UNREACHABLE (red) LED.
    pub unreachable_pin: u8,
}

impl Default for GpioConfig {
    fn default() -> Self {
        // BCM 17/27/22 are board pins 11/13/15 on a rev. 2 header.
        Self {
            local_pin: 17,
            wan_pin: 27,
            unreachable_pin: 22,
        }
    }
}
