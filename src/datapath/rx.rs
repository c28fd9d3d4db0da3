//! Receive data path
//!
//! Rebuilds the byte stream from the five receive lines. Per `eth_rx` tick:
//!
//! 1. every line goes through the input buffer and the programmable delay
//!    line (`rx_taps`),
//! 2. the input DDR cell splits it into its rising and falling samples,
//! 3. the samples walk through [`RxPipeline`]: the DDR capture register,
//!    one re-registering stage and the output register,
//! 4. `last` is taken from the falling edge of `RX_DV` between two
//!    consecutive registered control samples ([`detect_last`]).
//!
//! A level change on `RX_CTL` shows up on the stream output three ticks
//! later, whatever the delay-line setting: taps move the sampling point
//! inside the period, not the number of registers.

use core::iter::FusedIterator;

use super::stream::{StreamElement, StreamSource};
use crate::hal::clock::{Clocked, EthRx};
use crate::hal::fabric::{DelayTaps, IoFabric};
use crate::hal::pads::{DdrPair, Pad, RgmiiLines};
use crate::internal::constants::DATA_LINES;

// =============================================================================
// Samples
// =============================================================================

/// Decoded `RX_CTL`: rising sample is `RX_DV`, falling sample is `RX_DV ^ RX_ER`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlSample {
    /// Rising-edge sample (bit 0)
    pub rise: bool,
    /// Falling-edge sample (bit 1)
    pub fall: bool,
}

impl ControlSample {
    /// Both edges low
    pub const IDLE: Self = Self {
        rise: false,
        fall: false,
    };

    /// Data valid (bit 0)
    pub const fn dv(&self) -> bool {
        self.rise
    }

    /// Receive error as encoded on the falling edge
    pub const fn error(&self) -> bool {
        self.rise ^ self.fall
    }

    /// Packed 2-bit value, rising sample in bit 0
    pub const fn bits(&self) -> u8 {
        (self.rise as u8) | ((self.fall as u8) << 1)
    }
}

/// One decoded tick of the receive lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RxSample {
    /// Control sample
    pub ctl: ControlSample,
    /// Byte assembled from both edges of the four data lines
    pub data: u8,
}

impl RxSample {
    /// Nothing received
    pub const IDLE: Self = Self {
        ctl: ControlSample::IDLE,
        data: 0,
    };
}

/// Falling edge of `RX_DV` between two consecutive registered samples
///
/// `current` is the newest registered control sample and `previous` the
/// same register one tick earlier. The edge is seen while the output
/// register still holds the final byte of the frame, so `last` travels
/// with that byte.
#[inline]
pub const fn detect_last(current: ControlSample, previous: ControlSample) -> bool {
    !current.dv() && previous.dv()
}

// =============================================================================
// Pipeline
// =============================================================================

/// Register chain of the receive path
///
/// | Register      | Loads             | Role                         |
/// |---------------|-------------------|------------------------------|
/// | `capture`     | decoded sample    | input DDR cell               |
/// | `stage1`      | `capture`         | first re-registered copy     |
/// | `stage1_prev` | `stage1.ctl`      | previous control, for `last` |
/// | `stage2`      | `stage1`          | output register              |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RxPipeline {
    capture: RxSample,
    stage1: RxSample,
    stage1_prev: ControlSample,
    stage2: RxSample,
}

impl RxPipeline {
    /// Pipeline with every register idle
    pub const fn new() -> Self {
        Self {
            capture: RxSample::IDLE,
            stage1: RxSample::IDLE,
            stage1_prev: ControlSample::IDLE,
            stage2: RxSample::IDLE,
        }
    }

    /// Stream element presented by the current register contents
    pub const fn output(&self) -> StreamElement {
        StreamElement {
            data: self.stage2.data,
            valid: self.stage2.ctl.dv(),
            last: detect_last(self.stage1.ctl, self.stage1_prev),
        }
    }

    /// Apply one clock edge, loading `sample` into the capture register
    pub fn clock(&mut self, sample: RxSample) {
        self.stage2 = self.stage1;
        self.stage1_prev = self.stage1.ctl;
        self.stage1 = self.capture;
        self.capture = sample;
    }

    /// Reset every register
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Contents of the capture register
    pub const fn capture(&self) -> RxSample {
        self.capture
    }

    /// Contents of the first re-registering stage
    pub const fn stage1(&self) -> RxSample {
        self.stage1
    }

    /// Contents of the output register
    pub const fn stage2(&self) -> RxSample {
        self.stage2
    }

    /// True if no register holds an asserted `RX_DV`
    pub const fn is_idle(&self) -> bool {
        !self.capture.ctl.dv()
            && !self.stage1.ctl.dv()
            && !self.stage1_prev.dv()
            && !self.stage2.ctl.dv()
    }
}

// =============================================================================
// Receive Path
// =============================================================================

/// Receive side of the PHY, clocked by `eth_rx`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RgmiiRx {
    rx_taps: DelayTaps,
    pipeline: RxPipeline,
}

impl RgmiiRx {
    /// Create the receive path with the given input delay
    pub const fn new(rx_taps: DelayTaps) -> Self {
        Self {
            rx_taps,
            pipeline: RxPipeline::new(),
        }
    }

    /// Input delay applied to every line
    pub const fn rx_taps(&self) -> DelayTaps {
        self.rx_taps
    }

    /// Register chain
    pub const fn pipeline(&self) -> &RxPipeline {
        &self.pipeline
    }

    /// Buffer, delay and DDR-decode the five lines
    pub fn sample<F: IoFabric>(&self, fabric: &F, lines: RgmiiLines) -> RxSample {
        let (rise, fall) = self.decode(fabric, Pad::RxCtl, lines.ctl);
        let ctl = ControlSample { rise, fall };

        let mut data = 0u8;
        for (i, &line) in lines.data.iter().enumerate() {
            let (rise, fall) = self.decode(fabric, Pad::RxData(i as u8), line);
            data |= u8::from(rise) << i;
            data |= u8::from(fall) << (i + DATA_LINES);
        }
        RxSample { ctl, data }
    }

    fn decode<F: IoFabric>(&self, fabric: &F, pad: Pad, line: DdrPair) -> (bool, bool) {
        let buffered = fabric.sample_input(pad, line);
        let delayed = fabric.apply_delay(pad, buffered, self.rx_taps);
        fabric.ddr_decode(pad, delayed)
    }

    /// Evaluate one `eth_rx` tick
    ///
    /// Returns the element presented during this tick, then clocks `lines`
    /// into the pipeline. While `in_reset` is set every register is held
    /// idle and the output is [`StreamElement::IDLE`].
    pub fn tick<F: IoFabric>(
        &mut self,
        fabric: &F,
        lines: RgmiiLines,
        in_reset: bool,
    ) -> StreamElement {
        if in_reset {
            self.pipeline.clear();
            return StreamElement::IDLE;
        }

        let out = self.pipeline.output();
        let sample = self.sample(fabric, lines);
        self.pipeline.clock(sample);
        out
    }

    /// Turn the receive path into an endless element stream
    ///
    /// The stream pulls one tick of line levels from `pads` per element and
    /// assumes the domain is out of reset.
    pub fn stream<'a, F: IoFabric, S: RxPadSource>(
        &'a mut self,
        fabric: &'a F,
        pads: S,
    ) -> RxStream<'a, F, S> {
        RxStream {
            rx: self,
            fabric,
            pads,
        }
    }
}

impl StreamSource for RgmiiRx {
    fn peek(&self) -> StreamElement {
        self.pipeline.output()
    }
}

impl Clocked for RgmiiRx {
    type Domain = EthRx;

    fn clear(&mut self) {
        self.pipeline.clear();
    }
}

// =============================================================================
// Stream
// =============================================================================

/// Supplier of receive line levels, one tick per call
pub trait RxPadSource {
    /// Line levels for the next tick
    fn next_lines(&mut self) -> RgmiiLines;
}

impl<F: FnMut() -> RgmiiLines> RxPadSource for F {
    fn next_lines(&mut self) -> RgmiiLines {
        self()
    }
}

/// Pad source replaying an iterator, then holding the lines idle
#[derive(Debug, Clone)]
pub struct IdleAfter<I> {
    inner: I,
}

impl<I: Iterator<Item = RgmiiLines>> RxPadSource for IdleAfter<I> {
    fn next_lines(&mut self) -> RgmiiLines {
        self.inner.next().unwrap_or(RgmiiLines::IDLE)
    }
}

/// Replay `lines`, then keep the receive lines idle forever
pub fn idle_after<I: IntoIterator<Item = RgmiiLines>>(lines: I) -> IdleAfter<I::IntoIter> {
    IdleAfter {
        inner: lines.into_iter(),
    }
}

/// Endless stream of received elements
///
/// Never returns `None`. It borrows the receive path mutably, so the
/// pipeline state it advances cannot be rewound.
#[derive(Debug)]
pub struct RxStream<'a, F, S> {
    rx: &'a mut RgmiiRx,
    fabric: &'a F,
    pads: S,
}

impl<F: IoFabric, S: RxPadSource> Iterator for RxStream<'_, F, S> {
    type Item = StreamElement;

    fn next(&mut self) -> Option<StreamElement> {
        let lines = self.pads.next_lines();
        Some(self.rx.tick(self.fabric, lines, false))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<F: IoFabric, S: RxPadSource> FusedIterator for RxStream<'_, F, S> {}

// =============================================================================
// Unit Tests
// =============================================================================
