//! Reset Synchronization HAL
//!
//! Reset reaches the PHY asynchronously (a control bit written from another
//! clock, or the power-on pulse). Registers in `eth_rx`/`eth_tx` must only
//! leave reset on one of their own clock edges, otherwise the first
//! register stage can go metastable. [`ResetSynchronizer`] implements the
//! usual scheme: assert immediately, deassert through a chain of `N`
//! registers clocked by the destination domain.
//!
//! [`PowerOnReset`] produces the fixed-length reset pulse applied right
//! after configuration.

use core::marker::PhantomData;

use super::clock::{Domain, DomainId};
use crate::internal::constants::{DEFAULT_SYNC_STAGES, HW_RESET_CYCLES};

// =============================================================================
// Reset State
// =============================================================================

/// Reset state of a clock domain as seen by its registers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetState {
    /// Domain running normally
    Normal,
    /// Reset asserted (asynchronously) at the input of the synchronizer
    #[default]
    Resetting,
    /// Input released, waiting for the release to cross the synchronizer
    Releasing,
}

// =============================================================================
// Reset Synchronizer
// =============================================================================

/// Asynchronous-assert, synchronous-deassert reset for domain `D`
///
/// `N` is the number of registers in the chain (at least one, two by
/// default). After the asynchronous input is released the domain reset
/// stays asserted for `N` more domain ticks.
///
/// # Example
///
/// ```ignore
/// let mut sync: ResetSynchronizer<EthRx> = ResetSynchronizer::new();
/// assert!(sync.tick(true));  // asserted at once
/// assert!(sync.tick(false)); // still held
/// assert!(sync.tick(false));
/// assert!(!sync.tick(false)); // released after N = 2 ticks
/// ```
#[derive(Debug, Clone)]
pub struct ResetSynchronizer<D: Domain, const N: usize = DEFAULT_SYNC_STAGES> {
    /// `chain[0]` is nearest to the asynchronous input
    chain: [bool; N],
    _domain: PhantomData<D>,
}

impl<D: Domain, const N: usize> ResetSynchronizer<D, N> {
    const NON_EMPTY: () = assert!(N > 0, "reset synchronizer needs at least one register");

    /// Create a synchronizer with the domain held in reset
    pub const fn new() -> Self {
        let () = Self::NON_EMPTY;
        Self {
            chain: [true; N],
            _domain: PhantomData,
        }
    }

    /// Domain this synchronizer feeds
    pub const fn domain(&self) -> DomainId {
        D::ID
    }

    /// Number of registers in the chain
    pub const fn stages(&self) -> usize {
        N
    }

    /// Reset level presented to the domain's registers right now
    pub fn is_asserted(&self) -> bool {
        self.chain[N - 1]
    }

    /// Current state of the synchronizer
    pub fn state(&self) -> ResetState {
        if self.chain[0] {
            ResetState::Resetting
        } else if self.chain.iter().any(|&r| r) {
            ResetState::Releasing
        } else {
            ResetState::Normal
        }
    }

    /// Evaluate one domain tick
    ///
    /// Returns the domain reset level for this tick. An asserted input
    /// presets the whole chain without waiting for an edge; a released
    /// input shifts a zero into the chain on the edge.
    pub fn tick(&mut self, async_reset: bool) -> bool {
        if async_reset {
            self.chain = [true; N];
            return true;
        }

        let level = self.is_asserted();
        self.chain.copy_within(0..N - 1, 1);
        self.chain[0] = false;
        level
    }
}

impl<D: Domain, const N: usize> Default for ResetSynchronizer<D, N> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Power-On Reset
// =============================================================================

/// Fixed-length reset pulse generated at start-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerOnReset {
    cycles: u32,
    counter: u32,
}

impl PowerOnReset {
    /// Pulse of the default length
    pub const fn new() -> Self {
        Self::with_cycles(HW_RESET_CYCLES)
    }

    /// Pulse lasting `cycles` ticks
    pub const fn with_cycles(cycles: u32) -> Self {
        Self { cycles, counter: 0 }
    }

    /// True while the pulse is being generated
    pub const fn is_active(&self) -> bool {
        self.counter < self.cycles
    }

    /// Pulse length in ticks
    pub const fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Ticks still to go before the pulse ends
    pub const fn remaining(&self) -> u32 {
        self.cycles - self.counter
    }

    /// Count one tick, returns true on the tick the pulse finishes
    pub fn tick(&mut self) -> bool {
        if self.is_active() {
            self.counter += 1;
            !self.is_active()
        } else {
            false
        }
    }
}

impl Default for PowerOnReset {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
