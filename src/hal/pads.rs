//! Physical line model
//!
//! One RGMII direction is five lines (4 data + control) plus a clock. Each
//! line carries two levels per clock period: the level around the rising
//! edge and the level around the falling edge. A [`DdrPair`] is the state of
//! one line for one domain tick.
//!
//! | Signal      | Rising edge        | Falling edge              |
//! |-------------|--------------------|---------------------------|
//! | `TXD[3:0]`  | data bits 3..0     | data bits 7..4            |
//! | `TX_CTL`    | `TX_EN`            | `TX_EN ^ TX_ER`           |
//! | `RXD[3:0]`  | data bits 3..0     | data bits 7..4            |
//! | `RX_CTL`    | `RX_DV`            | `RX_DV ^ RX_ER`           |

use crate::internal::constants::DATA_LINES;

/// Levels of one physical line across one clock period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DdrPair {
    /// Level sampled/driven at the rising edge
    pub rise: bool,
    /// Level sampled/driven at the falling edge
    pub fall: bool,
}

impl DdrPair {
    /// Line held low for the whole period
    pub const LOW: Self = Self::new(false, false);

    /// Create a pair from its two sub-samples
    pub const fn new(rise: bool, fall: bool) -> Self {
        Self { rise, fall }
    }

    /// Same level on both edges
    pub const fn steady(level: bool) -> Self {
        Self::new(level, level)
    }
}

/// Identifies a pad for the I/O fabric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pad {
    /// Forwarded transmit clock
    TxClk,
    /// Transmit control line
    TxCtl,
    /// Transmit data line 0..=3
    TxData(u8),
    /// Receive control line
    RxCtl,
    /// Receive data line 0..=3
    RxData(u8),
}

/// The five data-carrying lines of one direction for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RgmiiLines {
    /// Control line
    pub ctl: DdrPair,
    /// Data lines, index `i` carries bit `i` then bit `i + 4`
    pub data: [DdrPair; DATA_LINES],
}

impl RgmiiLines {
    /// All lines low
    pub const IDLE: Self = Self {
        ctl: DdrPair::LOW,
        data: [DdrPair::LOW; DATA_LINES],
    };

    /// Build lines from a control pair and the two nibbles
    pub const fn from_nibbles(ctl: DdrPair, rise: u8, fall: u8) -> Self {
        let mut data = [DdrPair::LOW; DATA_LINES];
        let mut i = 0;
        while i < DATA_LINES {
            data[i] = DdrPair::new((rise >> i) & 1 != 0, (fall >> i) & 1 != 0);
            i += 1;
        }
        Self { ctl, data }
    }

    /// Nibble carried on the rising edges of the data lines
    pub fn rise_nibble(&self) -> u8 {
        self.data
            .iter()
            .enumerate()
            .fold(0, |acc, (i, line)| acc | (u8::from(line.rise) << i))
    }

    /// Nibble carried on the falling edges of the data lines
    pub fn fall_nibble(&self) -> u8 {
        self.data
            .iter()
            .enumerate()
            .fold(0, |acc, (i, line)| acc | (u8::from(line.fall) << i))
    }
}

/// Everything the transmit side drives during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TxPads {
    /// Forwarded line clock
    pub clk: DdrPair,
    /// Control and data lines
    pub lines: RgmiiLines,
}
