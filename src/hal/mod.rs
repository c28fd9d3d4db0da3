//! Hardware Abstraction Layer
//!
//! Everything between the RGMII state machines and the silicon: pads, the
//! I/O fabric primitives, clock domains, reset synchronization and the
//! board-level GPIO adapters.
//!
//! # Modules
//!
//! - [`pads`]: Line levels and pad identities
//! - [`fabric`]: I/O fabric capability trait and the GateMate fabric
//! - [`clock`]: Clock domains and the RX/TX clock tree
//! - [`reset`]: Reset synchronizers and the power-on pulse
//! - [`gpio`]: Board reset pad on an `embedded_hal` pin
//! - [`mdio`]: Management sidecar on `embedded_hal` pins

pub mod clock;
pub mod fabric;
pub mod gpio;
pub mod mdio;
pub mod pads;
pub mod reset;

// Re-export commonly used types
pub use clock::{ClockDomain, ClockSource, ClockTree, Domain, DomainId, EthRx, EthTx};
pub use fabric::{DelayTaps, GateMateFabric, IoFabric};
pub use gpio::ResetPad;
pub use mdio::{ManagementSidecar, MdioBitBang, MdioControl, NoManagement};
pub use pads::{DdrPair, Pad, RgmiiLines, TxPads};
pub use reset::{PowerOnReset, ResetState, ResetSynchronizer};
