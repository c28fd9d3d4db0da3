//! Core components of the RGMII PHY model.
//!
//! - [`calibration`] - Delay tap calibration table
//! - [`config`] - Configuration types and builder
//! - [`error`] - Error types and result aliases
//! - [`crg`] - Clock and reset generator
//! - [`phy`] - Top-level PHY assembly
//!
//! # Example
//!
//! ```ignore
//! use ph_rgmii::driver::{PhyConfig, PerfMode, RgmiiPhy};
//!
//! let config = PhyConfig::new()
//!     .with_perf_mode(PerfMode::Economy)
//!     .with_rx_delay(6.5e-10);
//! let phy = RgmiiPhy::gatemate(config)?;
//! ```

// Submodules
pub mod calibration;
pub mod config;
pub mod crg;
pub mod error;
pub mod phy;

// Re-exports for convenience
pub use config::{Corner, PerfMode, PhyConfig, ResolvedDelays};
pub use crg::{Crg, CrgTick};
pub use error::{ConfigError, ConfigResult};
pub use phy::{PhyTick, RgmiiPhy};
