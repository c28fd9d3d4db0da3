//! ISR-safe PHY wrapper using critical sections.
//!
//! Provides [`SharedPhy`], so the tick loop and an interrupt handler (for
//! example one that raises the reset request) can share one PHY.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::driver::config::PhyConfig;
use crate::driver::error::ConfigResult;
use crate::driver::phy::RgmiiPhy;
use crate::hal::fabric::{GateMateFabric, IoFabric};
use crate::hal::mdio::{ManagementSidecar, NoManagement};
use crate::internal::constants::DEFAULT_SYNC_STAGES;

/// ISR-safe PHY slot.
///
/// Starts empty so it can live in a `static`; [`SharedPhy::install`] puts a
/// configured PHY in it. All access goes through `critical_section::with()`.
///
/// # Example
///
/// ```ignore
/// static PHY: SharedPhy = SharedPhy::new();
///
/// PHY.install(RgmiiPhy::gatemate(PhyConfig::new())?);
///
/// #[interrupt]
/// fn LINK_FAULT() {
///     PHY.set_reset_request(true);
/// }
/// ```
pub struct SharedPhy<F = GateMateFabric, M = NoManagement, const N: usize = DEFAULT_SYNC_STAGES> {
    inner: Mutex<RefCell<Option<RgmiiPhy<F, M, N>>>>,
}

impl<F, M, const N: usize> SharedPhy<F, M, N> {
    /// Create an empty slot (const, suitable for static initialization).
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }
}

impl<F: IoFabric, M: ManagementSidecar, const N: usize> SharedPhy<F, M, N> {
    /// Put a PHY in the slot, returning the previous one.
    pub fn install(&self, phy: RgmiiPhy<F, M, N>) -> Option<RgmiiPhy<F, M, N>> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).replace(phy))
    }

    /// Take the PHY out of the slot.
    pub fn take(&self) -> Option<RgmiiPhy<F, M, N>> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).take())
    }

    /// True once a PHY has been installed.
    pub fn is_installed(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow_ref(cs).is_some())
    }

    /// Execute a closure with exclusive access to the PHY.
    ///
    /// Returns `None` if the slot is empty.
    #[inline]
    pub fn with<R, G>(&self, f: G) -> Option<R>
    where
        G: FnOnce(&mut RgmiiPhy<F, M, N>) -> R,
    {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).as_mut().map(f))
    }

    /// Try to execute a closure, returning `None` if already borrowed or empty.
    #[inline]
    pub fn try_with<R, G>(&self, f: G) -> Option<R>
    where
        G: FnOnce(&mut RgmiiPhy<F, M, N>) -> R,
    {
        critical_section::with(|cs| {
            let mut slot = self.inner.borrow(cs).try_borrow_mut().ok()?;
            slot.as_mut().map(f)
        })
    }

    /// Set or clear the reset request, returns false if the slot is empty.
    pub fn set_reset_request(&self, asserted: bool) -> bool {
        self.with(|phy| phy.set_reset_request(asserted)).is_some()
    }

    /// Install `phy` only if the slot is empty
    ///
    /// Hands `phy` back if a PHY is already installed.
    pub fn install_if_empty(&self, phy: RgmiiPhy<F, M, N>) -> Result<(), RgmiiPhy<F, M, N>> {
        critical_section::with(|cs| {
            let mut slot = self.inner.borrow_ref_mut(cs);
            if slot.is_some() {
                return Err(phy);
            }
            *slot = Some(phy);
            Ok(())
        })
    }
}

impl SharedPhy {
    /// Build a GateMate PHY from `config` and install it.
    pub fn install_gatemate(&self, config: PhyConfig) -> ConfigResult<()> {
        self.install(RgmiiPhy::gatemate(config)?);
        Ok(())
    }
}

impl<F, M, const N: usize> Default for SharedPhy<F, M, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datapath::stream::StreamElement;
    use crate::hal::clock::DomainId;
    use crate::hal::pads::RgmiiLines;

    fn config() -> PhyConfig {
        PhyConfig::new().with_hw_init_reset(false)
    }

    #[test]
    fn shared_phy_static_starts_empty() {
        static PHY: SharedPhy = SharedPhy::new();
        assert!(!PHY.is_installed());
        assert_eq!(PHY.with(|_| ()), None);
        assert!(!PHY.set_reset_request(true));
    }

    #[test]
    fn shared_phy_install_and_tick() {
        let shared: SharedPhy = SharedPhy::default();
        shared.install_gatemate(config()).unwrap();
        assert!(shared.is_installed());

        let out = shared.with(|phy| phy.tick(StreamElement::IDLE, RgmiiLines::IDLE));
        assert!(out.is_some());
    }

    #[test]
    fn shared_phy_reset_request_from_other_context() {
        let shared: SharedPhy = SharedPhy::new();
        shared.install_gatemate(config()).unwrap();

        assert!(shared.set_reset_request(true));
        shared.with(|phy| phy.tick(StreamElement::IDLE, RgmiiLines::IDLE));
        assert_eq!(shared.with(|phy| phy.in_reset(DomainId::EthRx)), Some(true));
    }

    #[test]
    fn shared_phy_try_with_fails_when_borrowed() {
        let shared: SharedPhy = SharedPhy::new();
        shared.install_gatemate(config()).unwrap();
        let nested = shared.with(|_| shared.try_with(|phy| phy.reset_request()));
        assert_eq!(nested, Some(None));
    }

    #[test]
    fn shared_phy_install_if_empty_keeps_first() {
        let shared: SharedPhy = SharedPhy::new();
        assert!(shared.install_if_empty(RgmiiPhy::gatemate(config()).unwrap()).is_ok());
        shared.set_reset_request(true);

        let second = RgmiiPhy::gatemate(config()).unwrap();
        let rejected = shared.install_if_empty(second);
        assert!(rejected.is_err());
        // The installed PHY still carries its request
        assert_eq!(shared.with(|phy| phy.reset_request()), Some(true));
    }

    #[test]
    fn shared_phy_install_returns_previous() {
        let shared: SharedPhy = SharedPhy::new();
        assert!(shared.install(RgmiiPhy::gatemate(config()).unwrap()).is_none());
        assert!(shared.install(RgmiiPhy::gatemate(config()).unwrap()).is_some());
    }

    #[test]
    fn shared_phy_take_empties_slot() {
        let shared: SharedPhy = SharedPhy::new();
        shared.install_gatemate(config()).unwrap();
        assert!(shared.take().is_some());
        assert!(!shared.is_installed());
    }

    #[test]
    fn shared_phy_rejects_bad_config() {
        let shared: SharedPhy = SharedPhy::new();
        assert!(shared.install_gatemate(config().with_rx_delay(1.0e-9)).is_err());
        assert!(!shared.is_installed());
    }
}
