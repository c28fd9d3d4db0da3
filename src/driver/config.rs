//! Configuration types for the RGMII PHY model

use core::str::FromStr;

use super::calibration;
use super::error::{ConfigError, ConfigResult};
use crate::hal::fabric::DelayTaps;
use crate::internal::constants::{DEFAULT_RX_DELAY_S, DEFAULT_TX_DELAY_S, HW_RESET_CYCLES};
use crate::internal::iodly::{corner_index, mode_index};

/// I/O cell performance mode
///
/// Selects the drive/speed trade-off of the I/O banks, which in turn sets
/// the propagation delay of one delay tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PerfMode {
    /// Fastest I/O, shortest taps
    #[default]
    Speed = 0,
    /// Balanced
    Economy = 1,
    /// Lowest power, longest taps
    LowPower = 2,
}

impl PerfMode {
    /// All modes, in table order
    pub const ALL: [PerfMode; 3] = [PerfMode::Speed, PerfMode::Economy, PerfMode::LowPower];

    /// Canonical (lowercase) name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PerfMode::Speed => "speed",
            PerfMode::Economy => "economy",
            PerfMode::LowPower => "lowpower",
        }
    }

    /// Propagation delay of one tap at the given corner, in seconds
    #[must_use]
    pub fn tap_delay(self, corner: Corner) -> f64 {
        calibration::tap_delay(self, corner)
    }
}

impl FromStr for PerfMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match mode_index(s) {
            Some(0) => Ok(PerfMode::Speed),
            Some(1) => Ok(PerfMode::Economy),
            Some(2) => Ok(PerfMode::LowPower),
            _ => Err(ConfigError::UnknownPerfMode),
        }
    }
}

/// Process corner used to pick the per-tap delay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Corner {
    /// Fast silicon
    Best = 0,
    /// Nominal silicon
    Typical = 1,
    /// Slow silicon (default, gives the fewest taps for a given delay)
    #[default]
    Worst = 2,
}

impl Corner {
    /// Canonical (lowercase) name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Corner::Best => "best",
            Corner::Typical => "typ",
            Corner::Worst => "worst",
        }
    }
}

impl FromStr for Corner {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match corner_index(s) {
            Some(0) => Ok(Corner::Best),
            Some(1) => Ok(Corner::Typical),
            Some(2) => Ok(Corner::Worst),
            _ => Err(ConfigError::UnknownCorner),
        }
    }
}

/// Delay tap counts resolved from a [`PhyConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResolvedDelays {
    /// Output delay applied to the forwarded TX clock
    pub tx_taps: DelayTaps,
    /// Input delay applied to every RX line
    pub rx_taps: DelayTaps,
}

/// Complete PHY configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyConfig {
    /// Delay added to the forwarded TX clock, in seconds
    pub tx_delay: f64,
    /// Delay added to all RX lines before sampling, in seconds
    pub rx_delay: f64,
    /// I/O performance mode
    pub perf_mode: PerfMode,
    /// Process corner for tap delay calibration
    pub corner: Corner,
    /// Generate a power-on reset pulse at construction
    pub with_hw_init_reset: bool,
    /// Length of the power-on reset pulse in line clock ticks
    pub hw_reset_cycles: u32,
    /// The port set carries an active-low board reset output
    pub reset_pad: bool,
}

impl Default for PhyConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PhyConfig {
    /// Create a new configuration with defaults
    ///
    /// No added delays, `speed` mode at the worst corner, power-on reset enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tx_delay: DEFAULT_TX_DELAY_S,
            rx_delay: DEFAULT_RX_DELAY_S,
            perf_mode: PerfMode::Speed,
            corner: Corner::Worst,
            with_hw_init_reset: true,
            hw_reset_cycles: HW_RESET_CYCLES,
            reset_pad: false,
        }
    }

    /// Create a configuration from performance mode and corner names
    ///
    /// Names are matched case-insensitively. An unknown name is an error,
    /// never a fallback to a default.
    pub fn from_names(perf_mode: &str, corner: &str) -> ConfigResult<Self> {
        Ok(Self::new()
            .with_perf_mode(perf_mode.parse()?)
            .with_corner(corner.parse()?))
    }

    /// Set the TX clock delay in seconds
    #[must_use]
    pub const fn with_tx_delay(mut self, seconds: f64) -> Self {
        self.tx_delay = seconds;
        self
    }

    /// Set the RX input delay in seconds
    #[must_use]
    pub const fn with_rx_delay(mut self, seconds: f64) -> Self {
        self.rx_delay = seconds;
        self
    }

    /// Set the I/O performance mode
    #[must_use]
    pub const fn with_perf_mode(mut self, mode: PerfMode) -> Self {
        self.perf_mode = mode;
        self
    }

    /// Set the process corner
    #[must_use]
    pub const fn with_corner(mut self, corner: Corner) -> Self {
        self.corner = corner;
        self
    }

    /// Enable or disable the power-on reset pulse
    #[must_use]
    pub const fn with_hw_init_reset(mut self, enabled: bool) -> Self {
        self.with_hw_init_reset = enabled;
        self
    }

    /// Set the length of the power-on reset pulse
    #[must_use]
    pub const fn with_hw_reset_cycles(mut self, cycles: u32) -> Self {
        self.hw_reset_cycles = cycles;
        self
    }

    /// Declare whether the board exposes an active-low reset output
    #[must_use]
    pub const fn with_reset_pad(mut self, present: bool) -> Self {
        self.reset_pad = present;
        self
    }

    /// Per-tap delay for the configured mode and corner, in seconds
    #[must_use]
    pub fn tap_delay(&self) -> f64 {
        self.perf_mode.tap_delay(self.corner)
    }

    /// Resolve both delays to tap counts
    ///
    /// Fails if either delay is negative or needs 16 taps or more.
    pub fn validate(&self) -> ConfigResult<ResolvedDelays> {
        let tap = self.tap_delay();
        Ok(ResolvedDelays {
            tx_taps: calibration::delay_taps(self.tx_delay, tap)?,
            rx_taps: calibration::delay_taps(self.rx_delay, tap)?,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
