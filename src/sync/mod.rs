//! Synchronization and Concurrency Support
//!
//! This module provides a concurrency-safe wrapper for the PHY model:
//!
//! - [`SharedPhy`] - Critical-section protected PHY slot
//!
//! # Feature Flags
//!
//! - `critical-section`: Enables this module
//!
//! # Example
//!
//! ```ignore
//! use ph_rgmii::sync::SharedPhy;
//!
//! static PHY: SharedPhy = SharedPhy::new();
//!
//! fn main() {
//!     PHY.install_gatemate(PhyConfig::new()).unwrap();
//!     loop {
//!         PHY.with(|phy| phy.tick(next_beat(), sample_pads()));
//!     }
//! }
//!
//! #[interrupt]
//! fn LINK_FAULT() {
//!     PHY.set_reset_request(true);
//! }
//! ```

mod shared;

pub use shared::SharedPhy;
