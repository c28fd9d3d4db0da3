//! Centralized Constants
//!
//! Single source of truth for the fixed numbers of the RGMII model.
//!
//! # Organization
//!
//! - **Line format**: data width and line counts
//! - **Clock frequencies**: RGMII line rate
//! - **Delay line**: tap range of the programmable input/output delays
//! - **Reset**: power-on pulse length and synchronizer depth
//!
//! The per-tap delay table lives in `iodly.rs`.

// =============================================================================
// Line Format
// =============================================================================

/// Width of the internal stream data bus in bits
pub const DATA_WIDTH: usize = 8;

/// Number of physical data lines per direction
pub const DATA_LINES: usize = 4;

// =============================================================================
// Clock Frequencies
// =============================================================================

/// RX line clock frequency in Hz (1000BASE-T RGMII)
pub const RX_CLK_HZ: u32 = 125_000_000;

/// TX line clock frequency in Hz
pub const TX_CLK_HZ: u32 = 125_000_000;

// =============================================================================
// Delay Line
// =============================================================================

/// Number of taps on the programmable delay line (valid settings are `0..16`)
pub const DELAY_TAPS: u8 = 16;

/// Default TX clock delay in seconds
pub const DEFAULT_TX_DELAY_S: f64 = 0.0;

/// Default RX input delay in seconds
pub const DEFAULT_RX_DELAY_S: f64 = 0.0;

// =============================================================================
// Reset
// =============================================================================

/// Length of the power-on reset pulse in line clock ticks
pub const HW_RESET_CYCLES: u32 = 256;

/// Default number of registers in each reset synchronizer
pub const DEFAULT_SYNC_STAGES: usize = 2;

// =============================================================================
// Receive Pipeline
// =============================================================================

/// Ticks from a control-line transition on the wire to the stream output
pub const RX_LATENCY: usize = 3;
