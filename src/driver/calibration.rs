//! Delay calibration table
//!
//! Maps a performance mode (and process corner) to the propagation delay of
//! one delay-line tap, and converts requested delays in seconds into tap
//! counts. Everything here is pure.
//!
//! ```ignore
//! use ph_rgmii::calibration;
//!
//! let tap = calibration::lookup("Speed")?; // 50 ps, worst corner
//! let taps = calibration::delay_taps(2.6e-10, tap)?;
//! assert_eq!(taps.get(), 5);
//! ```

use super::config::{Corner, PerfMode};
use super::error::{ConfigError, ConfigResult};
use crate::hal::fabric::DelayTaps;
use crate::internal::constants::DELAY_TAPS;
use crate::internal::iodly::{IODLY_TIMING, corner_index, mode_index};

/// Worst-case per-tap delay for a performance mode name, in seconds
///
/// The name is matched case-insensitively against `speed`, `economy`
/// and `lowpower`.
pub fn lookup(profile: &str) -> ConfigResult<f64> {
    lookup_corner(profile, Corner::Worst.as_str())
}

/// Per-tap delay for a performance mode and corner name, in seconds
pub fn lookup_corner(profile: &str, corner: &str) -> ConfigResult<f64> {
    let row = mode_index(profile).ok_or(ConfigError::UnknownPerfMode)?;
    let col = corner_index(corner).ok_or(ConfigError::UnknownCorner)?;
    Ok(IODLY_TIMING[row][col])
}

/// Per-tap delay for a typed mode and corner, in seconds
#[must_use]
pub fn tap_delay(mode: PerfMode, corner: Corner) -> f64 {
    IODLY_TIMING[mode as usize][corner as usize]
}

/// Convert a delay in seconds into a tap count
///
/// `taps = floor(delay / tap_delay)`. A negative (or NaN) delay, a tap
/// delay that is not a positive finite number, and any result of 16 taps or
/// more are rejected.
pub fn delay_taps(delay: f64, tap_delay: f64) -> ConfigResult<DelayTaps> {
    if !(tap_delay.is_finite() && tap_delay > 0.0) {
        return Err(ConfigError::InvalidTapDelay);
    }
    if delay.is_nan() || delay < 0.0 {
        return Err(ConfigError::NegativeDelay);
    }

    // Non-negative, so truncation is floor. Saturates for infinities.
    let taps = (delay / tap_delay) as u64;
    if taps >= u64::from(DELAY_TAPS) {
        return Err(ConfigError::DelayOutOfRange);
    }
    DelayTaps::new(taps as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_worst_case() {
        assert_eq!(lookup("speed"), Ok(50e-12));
        assert_eq!(lookup("economy"), Ok(65e-12));
        assert_eq!(lookup("lowpower"), Ok(85e-12));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("SPEED"), Ok(50e-12));
        assert_eq!(lookup("LowPower"), Ok(85e-12));
    }

    #[test]
    fn lookup_rejects_unknown_profile() {
        assert_eq!(lookup("turbo"), Err(ConfigError::UnknownPerfMode));
        assert_eq!(lookup("speed "), Err(ConfigError::UnknownPerfMode));
    }

    #[test]
    fn lookup_corner_covers_table() {
        assert_eq!(lookup_corner("speed", "best"), Ok(30e-12));
        assert_eq!(lookup_corner("economy", "typ"), Ok(50e-12));
        assert_eq!(lookup_corner("lowpower", "typical"), Ok(65e-12));
        assert_eq!(lookup_corner("speed", "median"), Err(ConfigError::UnknownCorner));
    }

    #[test]
    fn typed_and_named_lookup_agree() {
        for mode in PerfMode::ALL {
            for corner in [Corner::Best, Corner::Typical, Corner::Worst] {
                assert_eq!(
                    lookup_corner(mode.as_str(), corner.as_str()),
                    Ok(tap_delay(mode, corner))
                );
            }
        }
    }

    #[test]
    fn delay_taps_floors() {
        assert_eq!(delay_taps(0.0, 50e-12).unwrap().get(), 0);
        assert_eq!(delay_taps(49e-12, 50e-12).unwrap().get(), 0);
        assert_eq!(delay_taps(1.3e-10, 50e-12).unwrap().get(), 2);
        assert_eq!(delay_taps(7.6e-10, 50e-12).unwrap().get(), 15);
    }

    #[test]
    fn delay_taps_rejects_sixteen_or_more() {
        assert_eq!(delay_taps(8.1e-10, 50e-12), Err(ConfigError::DelayOutOfRange));
        assert_eq!(delay_taps(1e-6, 85e-12), Err(ConfigError::DelayOutOfRange));
        assert_eq!(
            delay_taps(f64::INFINITY, 50e-12),
            Err(ConfigError::DelayOutOfRange)
        );
    }

    #[test]
    fn delay_taps_rejects_negative() {
        assert_eq!(delay_taps(-1e-12, 50e-12), Err(ConfigError::NegativeDelay));
        assert_eq!(delay_taps(f64::NAN, 50e-12), Err(ConfigError::NegativeDelay));
    }

    #[test]
    fn delay_taps_rejects_bad_tap_delay() {
        assert_eq!(delay_taps(1e-10, -50e-12), Err(ConfigError::InvalidTapDelay));
        assert_eq!(delay_taps(0.0, 0.0), Err(ConfigError::InvalidTapDelay));
        assert_eq!(delay_taps(1e-10, f64::NAN), Err(ConfigError::InvalidTapDelay));
        assert_eq!(
            delay_taps(1e-10, f64::INFINITY),
            Err(ConfigError::InvalidTapDelay)
        );
        assert_eq!(
            DelayTaps::from_delay(1e-10, 0.0),
            Err(ConfigError::InvalidTapDelay)
        );
    }

    #[test]
    fn same_delay_gives_fewer_taps_in_slower_modes() {
        let d = 7.2e-10;
        let speed = delay_taps(d, lookup("speed").unwrap()).unwrap().get();
        let economy = delay_taps(d, lookup("economy").unwrap()).unwrap().get();
        let lowpower = delay_taps(d, lookup("lowpower").unwrap()).unwrap().get();
        assert_eq!((speed, economy, lowpower), (14, 11, 8));
    }
}
