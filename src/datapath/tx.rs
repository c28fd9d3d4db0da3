//! Transmit data path
//!
//! Turns one stream element per `eth_tx` tick into the five DDR lines of the
//! transmit port. The byte is split into nibbles: bit `i` goes out on the
//! rising edge of `TXD[i]` and bit `i + 4` on the falling edge. `TX_CTL`
//! carries `valid` on both edges, so `TX_ER` is never signalled.
//!
//! The path never stalls. [`RgmiiTx::ready`] is constant `true` and a byte
//! offered while the domain is in reset is dropped.

use super::stream::{StreamElement, StreamSink};
use crate::hal::clock::{Clocked, EthTx};
use crate::hal::fabric::{DelayTaps, IoFabric};
use crate::hal::pads::{Pad, RgmiiLines};
use crate::internal::constants::DATA_LINES;

/// Transmit side of the PHY, clocked by `eth_tx`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RgmiiTx {
    /// Levels held by the output DDR cells
    lines: RgmiiLines,
}

impl RgmiiTx {
    /// Create the transmit path with all lines idle
    pub const fn new() -> Self {
        Self {
            lines: RgmiiLines::IDLE,
        }
    }

    /// Encode one element into line levels
    ///
    /// Every line goes through a DDR output cell and an undelayed output
    /// buffer.
    pub fn encode<F: IoFabric>(fabric: &F, beat: StreamElement) -> RgmiiLines {
        let ctl = fabric.ddr_encode(Pad::TxCtl, beat.valid, beat.valid);
        let mut lines = RgmiiLines {
            ctl: fabric.drive_output(Pad::TxCtl, ctl, DelayTaps::ZERO),
            ..RgmiiLines::IDLE
        };

        for (i, line) in lines.data.iter_mut().enumerate() {
            let pad = Pad::TxData(i as u8);
            let rise = (beat.data >> i) & 1 != 0;
            let fall = (beat.data >> (i + DATA_LINES)) & 1 != 0;
            let ddr = fabric.ddr_encode(pad, rise, fall);
            *line = fabric.drive_output(pad, ddr, DelayTaps::ZERO);
        }
        lines
    }

    /// Evaluate one `eth_tx` tick
    ///
    /// Returns the levels driven on the transmit lines during this tick.
    /// While `in_reset` is set the lines are driven idle.
    pub fn tick<F: IoFabric>(
        &mut self,
        fabric: &F,
        beat: StreamElement,
        in_reset: bool,
    ) -> RgmiiLines {
        let beat = if in_reset { StreamElement::IDLE } else { beat };
        self.lines = Self::encode(fabric, beat);
        self.lines
    }

    /// Levels currently driven
    pub const fn lines(&self) -> RgmiiLines {
        self.lines
    }

    /// Always ready
    pub const fn ready(&self) -> bool {
        true
    }
}

impl StreamSink for RgmiiTx {
    fn ready(&self) -> bool {
        RgmiiTx::ready(self)
    }
}

impl Clocked for RgmiiTx {
    type Domain = EthTx;

    fn clear(&mut self) {
        self.lines = RgmiiLines::IDLE;
    }
}
