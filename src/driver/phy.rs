//! RGMII PHY top level
//!
//! [`RgmiiPhy`] assembles the clock and reset generator, the transmit path
//! and the receive path over one [`IoFabric`], with an optional management
//! sidecar. A call to [`RgmiiPhy::tick`] evaluates one line-clock period:
//!
//! 1. the generator computes both domain resets and the forwarded clock,
//! 2. the transmit path encodes the offered element (or idles in reset),
//! 3. the receive path presents its output and clocks in the wire levels.
//!
//! # Example
//!
//! ```ignore
//! use ph_rgmii::{PhyConfig, RgmiiPhy, StreamElement};
//! use ph_rgmii::hal::pads::RgmiiLines;
//!
//! let config = PhyConfig::from_names("economy", "worst")?
//!     .with_rx_delay(8.0e-10)
//!     .with_reset_pad(true);
//! let mut phy = RgmiiPhy::gatemate(config)?;
//!
//! let out = phy.tick(StreamElement::byte(0x55), RgmiiLines::IDLE);
//! ```

use super::config::{PhyConfig, ResolvedDelays};
use super::crg::{Crg, CrgTick};
use super::error::ConfigResult;
use crate::datapath::rx::RgmiiRx;
use crate::datapath::stream::{StreamElement, StreamSink, StreamSource};
use crate::datapath::tx::RgmiiTx;
use crate::hal::clock::{ClockTree, DomainId};
use crate::hal::fabric::{GateMateFabric, IoFabric};
use crate::hal::mdio::{ManagementSidecar, NoManagement};
use crate::hal::pads::{RgmiiLines, TxPads};
use crate::hal::reset::ResetState;
use crate::internal::constants::DEFAULT_SYNC_STAGES;

/// Everything the PHY presents during one line-clock tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyTick {
    /// Transmit clock and lines
    pub tx: TxPads,
    /// Receive stream output
    pub rx: StreamElement,
    /// Active-low board reset, `None` if the board has no reset pad
    pub rst_n: Option<bool>,
}

/// RGMII PHY data-path adapter
///
/// - `F`: I/O fabric
/// - `M`: management sidecar ([`NoManagement`] if the board has none)
/// - `N`: reset synchronizer depth
#[derive(Debug)]
pub struct RgmiiPhy<F = GateMateFabric, M = NoManagement, const N: usize = DEFAULT_SYNC_STAGES> {
    config: PhyConfig,
    delays: ResolvedDelays,
    fabric: F,
    crg: Crg<N>,
    tx: RgmiiTx,
    rx: RgmiiRx,
    management: M,
}

impl RgmiiPhy {
    /// PHY on the GateMate fabric
    pub fn gatemate(config: PhyConfig) -> ConfigResult<Self> {
        Self::new(config, GateMateFabric)
    }
}

impl<F: IoFabric> RgmiiPhy<F> {
    /// Validate `config` and build the PHY over `fabric`
    ///
    /// Fails if either delay resolves to 16 taps or more, or is negative.
    pub fn new(config: PhyConfig, fabric: F) -> ConfigResult<Self> {
        Self::build(config, fabric, NoManagement)
    }
}

impl<F: IoFabric, M: ManagementSidecar, const N: usize> RgmiiPhy<F, M, N> {
    /// Build with an explicit management sidecar and synchronizer depth
    pub fn build(config: PhyConfig, fabric: F, management: M) -> ConfigResult<Self> {
        let delays = config.validate()?;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "RGMII PHY: {} mode, {} corner, tx {} taps, rx {} taps",
            config.perf_mode.as_str(),
            config.corner.as_str(),
            delays.tx_taps.get(),
            delays.rx_taps.get()
        );

        Ok(Self {
            config,
            delays,
            fabric,
            crg: Crg::new(&config, delays.tx_taps),
            tx: RgmiiTx::new(),
            rx: RgmiiRx::new(delays.rx_taps),
            management,
        })
    }

    /// Attach a management sidecar
    pub fn with_management<M2: ManagementSidecar>(self, management: M2) -> RgmiiPhy<F, M2, N> {
        RgmiiPhy {
            config: self.config,
            delays: self.delays,
            fabric: self.fabric,
            crg: self.crg,
            tx: self.tx,
            rx: self.rx,
            management,
        }
    }

    /// Evaluate one line-clock tick
    ///
    /// `tx_in` is the element offered on the transmit sink and `rx_lines`
    /// the levels on the receive pads during this tick.
    pub fn tick(&mut self, tx_in: StreamElement, rx_lines: RgmiiLines) -> PhyTick {
        let crg = self.crg.tick(&self.fabric);
        let lines = self.tx.tick(&self.fabric, tx_in, crg.reset_of::<RgmiiTx>());
        let rx = self.rx.tick(&self.fabric, rx_lines, crg.reset_of::<RgmiiRx>());
        Self::assemble(crg, lines, rx)
    }

    /// Evaluate one tick with the transmit lines wired back to the receive lines
    pub fn tick_loopback(&mut self, tx_in: StreamElement) -> PhyTick {
        let crg = self.crg.tick(&self.fabric);
        let lines = self.tx.tick(&self.fabric, tx_in, crg.reset_of::<RgmiiTx>());
        let rx = self.rx.tick(&self.fabric, lines, crg.reset_of::<RgmiiRx>());
        Self::assemble(crg, lines, rx)
    }

    fn assemble(crg: CrgTick, lines: RgmiiLines, rx: StreamElement) -> PhyTick {
        PhyTick {
            tx: TxPads {
                clk: crg.tx_clk,
                lines,
            },
            rx,
            rst_n: crg.rst_n,
        }
    }

    /// Transmit stream endpoint
    pub fn sink(&self) -> &impl StreamSink {
        &self.tx
    }

    /// Receive stream endpoint
    pub fn source(&self) -> &impl StreamSource {
        &self.rx
    }

    /// Set or clear the software reset request
    pub fn set_reset_request(&mut self, asserted: bool) {
        self.crg.set_reset_request(asserted);
    }

    /// Software reset request bit
    pub fn reset_request(&self) -> bool {
        self.crg.reset_request()
    }

    /// True while the domain's registers are held in reset
    pub fn in_reset(&self, domain: DomainId) -> bool {
        self.crg.reset_state(domain) != ResetState::Normal
    }

    /// Clock and reset generator
    pub fn crg(&self) -> &Crg<N> {
        &self.crg
    }

    /// Clock domain handles
    pub fn clock_tree(&self) -> &ClockTree {
        self.crg.clock_tree()
    }

    /// Configuration the PHY was built from
    pub fn config(&self) -> &PhyConfig {
        &self.config
    }

    /// Tap counts resolved from the configuration
    pub fn delays(&self) -> ResolvedDelays {
        self.delays
    }

    /// I/O fabric
    pub fn fabric(&self) -> &F {
        &self.fabric
    }

    /// Management sidecar
    pub fn management(&self) -> &M {
        &self.management
    }

    /// Management sidecar, mutable
    pub fn management_mut(&mut self) -> &mut M {
        &mut self.management
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
