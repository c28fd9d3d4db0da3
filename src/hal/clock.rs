//! Clock Domains
//!
//! The PHY has two register-update contexts, `eth_rx` and `eth_tx`. Both are
//! driven by the receive line clock: the RX domain takes it straight from
//! the `RX_CLK` pad and the TX domain is declared as an alias of the RX
//! domain. The relation is recorded in a [`ClockTree`] instead of being
//! copied into two independent clocks, so a board with a separate TX
//! reference only has to change [`ClockSource`] for the TX handle.
//!
//! Logic is bound to a domain at the type level through the [`Domain`]
//! marker trait ([`EthRx`], [`EthTx`]).

use crate::internal::constants::{RX_CLK_HZ, TX_CLK_HZ};

// =============================================================================
// Domain Identity
// =============================================================================

/// Names of the clock domains in the PHY
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DomainId {
    /// Receive domain, clocked by `RX_CLK`
    EthRx,
    /// Transmit domain
    EthTx,
}

impl DomainId {
    /// Domain name as used in timing constraints
    pub const fn name(self) -> &'static str {
        match self {
            DomainId::EthRx => "eth_rx",
            DomainId::EthTx => "eth_tx",
        }
    }
}

/// Type-level clock domain marker
pub trait Domain {
    /// Identity of the domain
    const ID: DomainId;
}

/// Marker for the receive clock domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EthRx;

/// Marker for the transmit clock domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EthTx;

impl Domain for EthRx {
    const ID: DomainId = DomainId::EthRx;
}

impl Domain for EthTx {
    const ID: DomainId = DomainId::EthTx;
}

/// Logic that lives in one clock domain
pub trait Clocked {
    /// Domain the logic's registers are clocked by
    type Domain: Domain;

    /// Force every register to its idle value
    fn clear(&mut self);
}

// =============================================================================
// Clock Tree
// =============================================================================

/// Where a domain's clock comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockSource {
    /// Directly from the receive clock pad
    RxClkPad,
    /// Electrically the same net as another domain's clock
    AliasOf(DomainId),
}

/// Named, frequency-bound clock domain handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockDomain {
    id: DomainId,
    source: ClockSource,
    freq_hz: u32,
}

impl ClockDomain {
    /// Create a domain handle
    pub const fn new(id: DomainId, source: ClockSource, freq_hz: u32) -> Self {
        Self {
            id,
            source,
            freq_hz,
        }
    }

    /// Domain identity
    pub const fn id(&self) -> DomainId {
        self.id
    }

    /// Domain name
    pub const fn name(&self) -> &'static str {
        self.id.name()
    }

    /// Declared clock source
    pub const fn source(&self) -> ClockSource {
        self.source
    }

    /// Nominal frequency in Hz
    pub const fn freq_hz(&self) -> u32 {
        self.freq_hz
    }

    /// Clock period in picoseconds, `None` for a 0 Hz domain
    pub const fn period_ps(&self) -> Option<u32> {
        match 1_000_000_000_000u64.checked_div(self.freq_hz as u64) {
            Some(ps) if ps <= u32::MAX as u64 => Some(ps as u32),
            _ => None,
        }
    }
}

/// The RX and TX domain handles and the relation between them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTree {
    rx: ClockDomain,
    tx: ClockDomain,
}

impl ClockTree {
    /// Standard RGMII clocking: RX from the pad, TX aliased onto RX
    ///
    /// The TX domain is not derived independently. This matches link
    /// partners that expect TX timing to follow the recovered RX clock.
    pub const fn rgmii() -> Self {
        Self {
            rx: ClockDomain::new(DomainId::EthRx, ClockSource::RxClkPad, RX_CLK_HZ),
            tx: ClockDomain::new(
                DomainId::EthTx,
                ClockSource::AliasOf(DomainId::EthRx),
                TX_CLK_HZ,
            ),
        }
    }

    /// Handle for a domain
    pub const fn domain(&self, id: DomainId) -> &ClockDomain {
        match id {
            DomainId::EthRx => &self.rx,
            DomainId::EthTx => &self.tx,
        }
    }

    /// RX domain handle
    pub const fn rx(&self) -> &ClockDomain {
        &self.rx
    }

    /// TX domain handle
    pub const fn tx(&self) -> &ClockDomain {
        &self.tx
    }

    /// Follow aliases until a domain with its own source is reached
    pub fn root(&self, id: DomainId) -> DomainId {
        let mut current = id;
        // Two domains, so at most one hop
        for _ in 0..2 {
            match self.domain(current).source {
                ClockSource::AliasOf(next) if next != current => current = next,
                _ => break,
            }
        }
        current
    }

    /// True if both domains resolve to the same physical clock
    pub fn shares_source(&self) -> bool {
        self.root(DomainId::EthRx) == self.root(DomainId::EthTx)
    }
}

impl Default for ClockTree {
    fn default() -> Self {
        Self::rgmii()
    }
}

// =============================================================================
// Line Clock
// =============================================================================

/// Free-running tick counter of the shared line clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineClock {
    ticks: u64,
}

impl LineClock {
    /// Counter at zero
    pub const fn new() -> Self {
        Self { ticks: 0 }
    }

    /// Advance by one tick and return the index of the tick just started
    pub fn advance(&mut self) -> u64 {
        let current = self.ticks;
        self.ticks = self.ticks.wrapping_add(1);
        current
    }

    /// Number of ticks elapsed
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tx_is_alias_of_rx() {
        let tree = ClockTree::rgmii();
        assert_eq!(tree.rx().source(), ClockSource::RxClkPad);
        assert_eq!(tree.tx().source(), ClockSource::AliasOf(DomainId::EthRx));
        assert_eq!(tree.root(DomainId::EthTx), DomainId::EthRx);
        assert_eq!(tree.root(DomainId::EthRx), DomainId::EthRx);
        assert!(tree.shares_source());
    }

    #[test]
    fn domains_keep_their_own_names() {
        let tree = ClockTree::default();
        assert_eq!(tree.rx().name(), "eth_rx");
        assert_eq!(tree.tx().name(), "eth_tx");
        assert_eq!(tree.domain(DomainId::EthTx).id(), DomainId::EthTx);
    }

    #[test]
    fn line_rate_is_125_mhz() {
        let tree = ClockTree::rgmii();
        assert_eq!(tree.rx().freq_hz(), 125_000_000);
        assert_eq!(tree.tx().freq_hz(), 125_000_000);
        assert_eq!(tree.rx().period_ps(), Some(8_000));
    }

    #[test]
    fn period_of_stopped_or_slow_clock() {
        let stopped = ClockDomain::new(DomainId::EthRx, ClockSource::RxClkPad, 0);
        assert_eq!(stopped.period_ps(), None);
        // 1 Hz is 10^12 ps, beyond u32
        let slow = ClockDomain::new(DomainId::EthRx, ClockSource::RxClkPad, 1);
        assert_eq!(slow.period_ps(), None);
        let fast = ClockDomain::new(DomainId::EthRx, ClockSource::RxClkPad, 250_000_000);
        assert_eq!(fast.period_ps(), Some(4_000));
    }

    #[test]
    fn markers_map_to_ids() {
        assert_eq!(<EthRx as Domain>::ID, DomainId::EthRx);
        assert_eq!(<EthTx as Domain>::ID, DomainId::EthTx);
    }

    #[test]
    fn line_clock_counts() {
        let mut clock = LineClock::new();
        assert_eq!(clock.advance(), 0);
        assert_eq!(clock.advance(), 1);
        assert_eq!(clock.ticks(), 2);
    }
}
