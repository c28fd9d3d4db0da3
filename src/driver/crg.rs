//! Clock and reset generator
//!
//! Owns the `eth_rx`/`eth_tx` clock tree, forwards the transmit clock to its
//! pad and produces the reset seen by both domains.
//!
//! # Reset sources
//!
//! The raw reset is the OR of
//!
//! - the software reset request bit ([`Crg::set_reset_request`]),
//! - the power-on pulse, if enabled in [`PhyConfig`].
//!
//! The raw reset drives the optional active-low pad (`rst_n = !reset`)
//! directly and enters each domain through its own [`ResetSynchronizer`].
//!
//! # Transmit clock
//!
//! The forwarded clock comes out of a DDR output cell with constant
//! `rise = 1, fall = 0`, so the pad toggles once per tick, and passes
//! through an output buffer delayed by `tx_taps`. The cell has no reset:
//! the clock keeps running while the domains are held in reset.

use super::config::PhyConfig;
use crate::hal::clock::{ClockTree, Clocked, Domain, DomainId, EthRx, EthTx, LineClock};
use crate::hal::fabric::{DelayTaps, IoFabric};
use crate::hal::pads::{DdrPair, Pad};
use crate::hal::reset::{PowerOnReset, ResetState, ResetSynchronizer};
use crate::internal::constants::DEFAULT_SYNC_STAGES;

/// Outputs of the clock and reset generator for one line-clock tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CrgTick {
    /// Reset level of `eth_rx` registers during this tick
    pub rx_reset: bool,
    /// Reset level of `eth_tx` registers during this tick
    pub tx_reset: bool,
    /// Forwarded transmit clock
    pub tx_clk: DdrPair,
    /// Active-low reset pad, `None` if the board has none
    pub rst_n: Option<bool>,
}

impl CrgTick {
    /// Reset level of `domain` during this tick
    pub const fn reset(&self, domain: DomainId) -> bool {
        match domain {
            DomainId::EthRx => self.rx_reset,
            DomainId::EthTx => self.tx_reset,
        }
    }

    /// Reset level of the domain that clocks `C`
    pub const fn reset_of<C: Clocked>(&self) -> bool {
        self.reset(<C::Domain as Domain>::ID)
    }
}

/// Clock and reset generator with `N`-stage reset synchronizers
#[derive(Debug, Clone)]
pub struct Crg<const N: usize = DEFAULT_SYNC_STAGES> {
    clocks: ClockTree,
    line_clock: LineClock,
    reset_request: bool,
    power_on: Option<PowerOnReset>,
    tx_taps: DelayTaps,
    rx_sync: ResetSynchronizer<EthRx, N>,
    tx_sync: ResetSynchronizer<EthTx, N>,
    reset_pad: bool,
}

impl<const N: usize> Crg<N> {
    /// Create the generator for a validated configuration
    ///
    /// Both domains start in reset.
    pub fn new(config: &PhyConfig, tx_taps: DelayTaps) -> Self {
        let power_on = config
            .with_hw_init_reset
            .then(|| PowerOnReset::with_cycles(config.hw_reset_cycles));

        Self {
            clocks: ClockTree::rgmii(),
            line_clock: LineClock::new(),
            reset_request: false,
            power_on,
            tx_taps,
            rx_sync: ResetSynchronizer::new(),
            tx_sync: ResetSynchronizer::new(),
            reset_pad: config.reset_pad,
        }
    }

    /// Clock domain handles
    pub const fn clock_tree(&self) -> &ClockTree {
        &self.clocks
    }

    /// Line-clock ticks evaluated so far
    pub const fn ticks(&self) -> u64 {
        self.line_clock.ticks()
    }

    /// Delay applied to the forwarded transmit clock
    pub const fn tx_taps(&self) -> DelayTaps {
        self.tx_taps
    }

    /// Power-on pulse generator, if enabled
    pub const fn power_on(&self) -> Option<&PowerOnReset> {
        self.power_on.as_ref()
    }

    /// Software reset request bit
    pub const fn reset_request(&self) -> bool {
        self.reset_request
    }

    /// Set or clear the software reset request
    ///
    /// Takes effect on the next tick.
    pub fn set_reset_request(&mut self, asserted: bool) {
        if asserted != self.reset_request {
            #[cfg(feature = "defmt")]
            defmt::info!("PHY reset request {}", if asserted { "set" } else { "cleared" });
        }
        self.reset_request = asserted;
    }

    /// Raw reset before synchronization
    pub fn effective_reset(&self) -> bool {
        self.reset_request || self.power_on.is_some_and(|p| p.is_active())
    }

    /// Reset synchronizer state of a domain
    pub fn reset_state(&self, domain: DomainId) -> ResetState {
        match domain {
            DomainId::EthRx => self.rx_sync.state(),
            DomainId::EthTx => self.tx_sync.state(),
        }
    }

    /// Evaluate one line-clock tick
    pub fn tick<F: IoFabric>(&mut self, fabric: &F) -> CrgTick {
        self.line_clock.advance();

        let reset = self.effective_reset();
        let rx_reset = self.rx_sync.tick(reset);
        let tx_reset = self.tx_sync.tick(reset);

        #[cfg(feature = "defmt")]
        {
            if rx_reset && !self.rx_sync.is_asserted() {
                defmt::debug!("eth_rx leaves reset after tick {}", self.line_clock.ticks());
            }
            if tx_reset && !self.tx_sync.is_asserted() {
                defmt::debug!("eth_tx leaves reset after tick {}", self.line_clock.ticks());
            }
        }

        if let Some(por) = self.power_on.as_mut() {
            let _done = por.tick();
            #[cfg(feature = "defmt")]
            if _done {
                defmt::info!("power-on reset pulse done ({} ticks)", por.cycles());
            }
        }

        let clk = fabric.ddr_encode(Pad::TxClk, true, false);
        let tx_clk = fabric.drive_output(Pad::TxClk, clk, self.tx_taps);

        CrgTick {
            rx_reset,
            tx_reset,
            tx_clk,
            rst_n: self.reset_pad.then_some(!reset),
        }
    }
}
