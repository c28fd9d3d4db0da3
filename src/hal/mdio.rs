//! Management sidecar
//!
//! RGMII carries no management traffic. Boards that wire up MDC/MDIO get a
//! plain software-driven interface next to the data path: one control word
//! (clock level, output enable, output level) and one status bit (sampled
//! MDIO level). Framing and turnaround are left to the driver on top.
//!
//! | Bit | Control word |
//! |-----|--------------|
//! | 0   | `mdc`        |
//! | 1   | `oe`         |
//! | 2   | `w`          |

use embedded_hal::digital::{InputPin, OutputPin};

use crate::driver::error::{ConfigError, ConfigResult};

// =============================================================================
// Control Word
// =============================================================================

/// MDC/MDIO control word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MdioControl(u8);

impl MdioControl {
    /// MDC level
    pub const MDC: u8 = 1 << 0;
    /// MDIO output enable
    pub const OE: u8 = 1 << 1;
    /// MDIO output level
    pub const W: u8 = 1 << 2;

    /// Build a control word from its fields
    pub const fn new(mdc: bool, oe: bool, w: bool) -> Self {
        Self((mdc as u8) * Self::MDC | (oe as u8) * Self::OE | (w as u8) * Self::W)
    }

    /// Control word from a raw value, unused bits are dropped
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & (Self::MDC | Self::OE | Self::W))
    }

    /// Raw value
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// MDC level
    pub const fn mdc(self) -> bool {
        self.0 & Self::MDC != 0
    }

    /// MDIO driven by us
    pub const fn oe(self) -> bool {
        self.0 & Self::OE != 0
    }

    /// MDIO level when driven
    pub const fn w(self) -> bool {
        self.0 & Self::W != 0
    }
}

// =============================================================================
// Sidecar Trait
// =============================================================================

/// Software-driven management interface attached to the PHY
pub trait ManagementSidecar {
    /// Apply a control word
    fn write_control(&mut self, control: MdioControl) -> ConfigResult<()>;

    /// Sample the MDIO line
    fn read_data(&mut self) -> ConfigResult<bool>;

    /// False for boards without management pins
    fn is_present(&self) -> bool {
        true
    }
}

/// Placeholder for boards without MDC/MDIO
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoManagement;

impl ManagementSidecar for NoManagement {
    fn write_control(&mut self, _control: MdioControl) -> ConfigResult<()> {
        Ok(())
    }

    fn read_data(&mut self) -> ConfigResult<bool> {
        Ok(false)
    }

    fn is_present(&self) -> bool {
        false
    }
}

// =============================================================================
// Bit-Banged MDIO
// =============================================================================

/// Management sidecar on two GPIOs
///
/// `mdio` is expected to be open-drain with a pull-up: with `oe` cleared
/// the line is released by driving it high.
#[derive(Debug)]
pub struct MdioBitBang<MDC, MDIO> {
    mdc: MDC,
    mdio: MDIO,
    control: MdioControl,
}

impl<MDC, MDIO> MdioBitBang<MDC, MDIO>
where
    MDC: OutputPin,
    MDIO: OutputPin + InputPin,
{
    /// Take both pins, MDC low and MDIO released
    pub fn new(mut mdc: MDC, mut mdio: MDIO) -> ConfigResult<Self> {
        mdc.set_low().map_err(|_| ConfigError::GpioError)?;
        mdio.set_high().map_err(|_| ConfigError::GpioError)?;
        Ok(Self {
            mdc,
            mdio,
            control: MdioControl::default(),
        })
    }

    /// Last control word applied
    pub fn control(&self) -> MdioControl {
        self.control
    }

    /// Clock one bit out: data set up while MDC is low, latched on the rising edge
    pub fn write_bit(&mut self, bit: bool) -> ConfigResult<()> {
        self.write_control(MdioControl::new(false, true, bit))?;
        self.write_control(MdioControl::new(true, true, bit))
    }

    /// Clock one bit in with MDIO released, sampled while MDC is high
    pub fn read_bit(&mut self) -> ConfigResult<bool> {
        self.write_control(MdioControl::new(false, false, false))?;
        self.write_control(MdioControl::new(true, false, false))?;
        self.read_data()
    }

    /// Give both pins back
    pub fn release(self) -> (MDC, MDIO) {
        (self.mdc, self.mdio)
    }
}

impl<MDC, MDIO> ManagementSidecar for MdioBitBang<MDC, MDIO>
where
    MDC: OutputPin,
    MDIO: OutputPin + InputPin,
{
    fn write_control(&mut self, control: MdioControl) -> ConfigResult<()> {
        self.mdc
            .set_state(control.mdc().into())
            .map_err(|_| ConfigError::GpioError)?;

        // Released line floats high through the pull-up
        let level = !control.oe() || control.w();
        self.mdio
            .set_state(level.into())
            .map_err(|_| ConfigError::GpioError)?;

        self.control = control;
        Ok(())
    }

    fn read_data(&mut self) -> ConfigResult<bool> {
        self.mdio.is_high().map_err(|_| ConfigError::GpioError)
    }
}
