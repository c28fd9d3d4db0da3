//! RGMII PHY Data-Path Model
//!
//! A `no_std`, `no_alloc`, cycle-accurate model of the physical-layer adapter
//! between an RGMII link partner and a byte-wide MAC stream, as built on
//! Cologne Chip GateMate I/O cells.
//!
//! One call to [`RgmiiPhy::tick`] evaluates one period of the 125 MHz line
//! clock in both directions.
//!
//! # Architecture
//!
//! The crate is organized into three layers:
//!
//! 1. **Driver Layer** ([`driver`]): Configuration, calibration, clock and
//!    reset generation, the assembled [`RgmiiPhy`]
//! 2. **Data Path Layer** ([`datapath`]): Stream elements, transmit encoder,
//!    receive pipeline
//! 3. **HAL Layer** ([`hal`]): Pads, I/O fabric primitives, clock domains,
//!    reset synchronizers, board GPIO adapters
//!
//! ## Line Format
//!
//! | Direction | Lines                          | Per tick                       |
//! |-----------|--------------------------------|--------------------------------|
//! | TX        | `TX_CLK`, `TX_CTL`, `TXD[3:0]` | one byte, low nibble first     |
//! | RX        | `RX_CLK`, `RX_CTL`, `RXD[3:0]` | one byte, three ticks latency  |
//!
//! Both directions run on the receive clock: the transmit domain is an
//! alias of the receive domain (see [`hal::clock::ClockTree`]).
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting and lifecycle logging
//! - `critical-section`: Enable ISR-safe `SharedPhy` wrapper
//!
//! # Example
//!
//! ```ignore
//! use ph_rgmii::{DomainId, PerfMode, PhyConfig, RgmiiPhy, StreamElement, frame};
//!
//! let config = PhyConfig::new()
//!     .with_perf_mode(PerfMode::Economy)
//!     .with_rx_delay(8.0e-10)
//!     .with_reset_pad(true);
//!
//! let mut phy = RgmiiPhy::gatemate(config)?;
//!
//! // Let the power-on reset run out
//! while phy.in_reset(DomainId::EthTx) {
//!     phy.tick_loopback(StreamElement::IDLE);
//! }
//!
//! for beat in frame(&[0x55, 0x55, 0xD5]) {
//!     let out = phy.tick_loopback(beat);
//!     // out.tx: pad levels, out.rx: received element, out.rst_n: board reset
//! }
//! ```

#![no_std]
#![deny(missing_docs)]
#![deny(unsafe_code)]
// Clippy lint levels live here; thresholds and config are in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

// =============================================================================
// Modules
// =============================================================================

pub mod datapath;
pub mod driver;
pub mod hal;

// Internal implementation details (pub(crate) only)
mod internal;

#[cfg(feature = "critical-section")]
#[cfg_attr(docsrs, doc(cfg(feature = "critical-section")))]
pub mod sync;

// Test utilities (only available during testing)
#[cfg(test)]
pub(crate) mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use datapath::rx::{RgmiiRx, RxPadSource, RxStream, detect_last, idle_after};
pub use datapath::stream::{StreamElement, StreamSink, StreamSource, frame};
pub use datapath::tx::RgmiiTx;
pub use driver::calibration;
pub use driver::config::{Corner, PerfMode, PhyConfig, ResolvedDelays};
pub use driver::crg::{Crg, CrgTick};
pub use driver::error::{ConfigError, ConfigResult};
pub use driver::phy::{PhyTick, RgmiiPhy};
pub use hal::clock::DomainId;
pub use hal::fabric::{DelayTaps, GateMateFabric, IoFabric};
pub use hal::mdio::{ManagementSidecar, NoManagement};
pub use hal::pads::{DdrPair, Pad, RgmiiLines, TxPads};

// Re-export sync types when critical-section is enabled
#[cfg(feature = "critical-section")]
pub use sync::SharedPhy;

/// Fixed numbers of the model.
///
/// Grouped into a dedicated module to keep the top-level facade focused on
/// the PHY types.
pub mod constants {
    pub use crate::internal::constants::{
        // Line format
        DATA_LINES,
        DATA_WIDTH,
        // Delay line
        DEFAULT_RX_DELAY_S,
        DEFAULT_TX_DELAY_S,
        DELAY_TAPS,
        // Reset
        DEFAULT_SYNC_STAGES,
        HW_RESET_CYCLES,
        // Clocks
        RX_CLK_HZ,
        TX_CLK_HZ,
        // Receive pipeline
        RX_LATENCY,
    };
    pub use crate::internal::iodly::IODLY_TIMING;
}
