//! I/O Fabric Capability Interface
//!
//! The RGMII state machines never touch vendor primitives directly. Line
//! drivers, input buffers, programmable delay lines and DDR cells are reached
//! through [`IoFabric`], so the same TX/RX/CRG logic runs on any target that
//! can provide these five capabilities.
//!
//! # GateMate mapping
//!
//! | Capability     | GateMate primitive             |
//! |----------------|--------------------------------|
//! | `drive_output` | `CC_OBUF` (`DELAY_OBF`)        |
//! | `sample_input` | `CC_IBUF`                      |
//! | `apply_delay`  | `CC_IBUF` (`DELAY_IBF`)        |
//! | `ddr_encode`   | `CC_ODDR`                      |
//! | `ddr_decode`   | `CC_IDDR`                      |

use super::pads::{DdrPair, Pad};
use crate::driver::error::{ConfigError, ConfigResult};
use crate::internal::constants::DELAY_TAPS;

// =============================================================================
// Delay Taps
// =============================================================================

/// Setting of a programmable delay line, always in `0..16`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DelayTaps(u8);

impl DelayTaps {
    /// No added delay
    pub const ZERO: Self = Self(0);

    /// Largest valid setting
    pub const MAX: Self = Self(DELAY_TAPS - 1);

    /// Create a tap setting, rejecting values of 16 or more
    pub const fn new(taps: u8) -> ConfigResult<Self> {
        if taps < DELAY_TAPS {
            Ok(Self(taps))
        } else {
            Err(ConfigError::DelayOutOfRange)
        }
    }

    /// Resolve a delay in seconds against a per-tap delay
    ///
    /// See [`crate::calibration::delay_taps`].
    pub fn from_delay(delay: f64, tap_delay: f64) -> ConfigResult<Self> {
        crate::driver::calibration::delay_taps(delay, tap_delay)
    }

    /// Raw tap count
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Total delay in seconds for a given per-tap delay
    pub fn seconds(self, tap_delay: f64) -> f64 {
        f64::from(self.0) * tap_delay
    }
}

// =============================================================================
// Fabric Trait
// =============================================================================

/// Capabilities the RGMII data path needs from the underlying I/O fabric
///
/// All methods are evaluated once per pad per domain tick. Implementations
/// may keep interior state (e.g. for tracing), but the data path assumes
/// each call is a pure function of its arguments.
pub trait IoFabric {
    /// Drive a DDR-encoded line through an output buffer with `delay` taps
    fn drive_output(&self, pad: Pad, line: DdrPair, delay: DelayTaps) -> DdrPair;

    /// Read a line through an input buffer
    fn sample_input(&self, pad: Pad, line: DdrPair) -> DdrPair;

    /// Pass an input line through a programmable delay of `delay` taps
    fn apply_delay(&self, pad: Pad, line: DdrPair, delay: DelayTaps) -> DdrPair;

    /// Output DDR cell: `rise` is driven after the rising edge, `fall` after the falling edge
    fn ddr_encode(&self, pad: Pad, rise: bool, fall: bool) -> DdrPair;

    /// Input DDR cell: split a line into its rising-edge and falling-edge samples
    fn ddr_decode(&self, pad: Pad, line: DdrPair) -> (bool, bool);
}

impl<T: IoFabric + ?Sized> IoFabric for &T {
    fn drive_output(&self, pad: Pad, line: DdrPair, delay: DelayTaps) -> DdrPair {
        (**self).drive_output(pad, line, delay)
    }

    fn sample_input(&self, pad: Pad, line: DdrPair) -> DdrPair {
        (**self).sample_input(pad, line)
    }

    fn apply_delay(&self, pad: Pad, line: DdrPair, delay: DelayTaps) -> DdrPair {
        (**self).apply_delay(pad, line, delay)
    }

    fn ddr_encode(&self, pad: Pad, rise: bool, fall: bool) -> DdrPair {
        (**self).ddr_encode(pad, rise, fall)
    }

    fn ddr_decode(&self, pad: Pad, line: DdrPair) -> (bool, bool) {
        (**self).ddr_decode(pad, line)
    }
}

// =============================================================================
// GateMate Fabric
// =============================================================================

/// Cologne Chip GateMate I/O fabric
///
/// The delay lines move the sampling point inside the clock period by at
/// most `15 * 85 ps`, well under half of the 8 ns RGMII period, so at tick
/// resolution they shift phase without changing which levels are captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GateMateFabric;

impl IoFabric for GateMateFabric {
    #[inline]
    fn drive_output(&self, _pad: Pad, line: DdrPair, _delay: DelayTaps) -> DdrPair {
        line
    }

    #[inline]
    fn sample_input(&self, _pad: Pad, line: DdrPair) -> DdrPair {
        line
    }

    #[inline]
    fn apply_delay(&self, _pad: Pad, line: DdrPair, _delay: DelayTaps) -> DdrPair {
        line
    }

    #[inline]
    fn ddr_encode(&self, _pad: Pad, rise: bool, fall: bool) -> DdrPair {
        DdrPair::new(rise, fall)
    }

    #[inline]
    fn ddr_decode(&self, _pad: Pad, line: DdrPair) -> (bool, bool) {
        (line.rise, line.fall)
    }
}
