//! Testing utilities and mock implementations
//!
//! This module provides mock implementations for testing the RGMII model
//! on the host without a fabric or board.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use crate::datapath::stream::StreamElement;
use crate::hal::fabric::{DelayTaps, GateMateFabric, IoFabric};
use crate::hal::pads::{DdrPair, Pad, RgmiiLines};

// =============================================================================
// Mock Fabric
// =============================================================================

/// One capability invocation recorded by [`MockFabric`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FabricCall {
    DriveOutput {
        pad: Pad,
        line: DdrPair,
        delay: DelayTaps,
    },
    SampleInput {
        pad: Pad,
    },
    ApplyDelay {
        pad: Pad,
        delay: DelayTaps,
    },
    DdrEncode {
        pad: Pad,
        rise: bool,
        fall: bool,
    },
    DdrDecode {
        pad: Pad,
    },
}

/// Fabric that behaves like [`GateMateFabric`] and logs every call
///
/// # Example
///
/// ```ignore
/// let fabric = MockFabric::new();
/// RgmiiTx::encode(&fabric, StreamElement::byte(0x81));
/// assert_eq!(fabric.calls().len(), 10);
/// ```
#[derive(Debug, Default)]
pub struct MockFabric {
    log: RefCell<Vec<FabricCall>>,
}

impl MockFabric {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call made so far, in order
    pub fn calls(&self) -> Vec<FabricCall> {
        self.log.borrow().clone()
    }

    /// Calls that touched `pad`
    pub fn calls_for(&self, pad: Pad) -> Vec<FabricCall> {
        self.log
            .borrow()
            .iter()
            .copied()
            .filter(|c| c.pad() == pad)
            .collect()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }

    fn record(&self, call: FabricCall) {
        self.log.borrow_mut().push(call);
    }
}

impl FabricCall {
    pub fn pad(&self) -> Pad {
        match *self {
            FabricCall::DriveOutput { pad, .. }
            | FabricCall::SampleInput { pad }
            | FabricCall::ApplyDelay { pad, .. }
            | FabricCall::DdrEncode { pad, .. }
            | FabricCall::DdrDecode { pad } => pad,
        }
    }
}

impl IoFabric for MockFabric {
    fn drive_output(&self, pad: Pad, line: DdrPair, delay: DelayTaps) -> DdrPair {
        self.record(FabricCall::DriveOutput { pad, line, delay });
        GateMateFabric.drive_output(pad, line, delay)
    }

    fn sample_input(&self, pad: Pad, line: DdrPair) -> DdrPair {
        self.record(FabricCall::SampleInput { pad });
        GateMateFabric.sample_input(pad, line)
    }

    fn apply_delay(&self, pad: Pad, line: DdrPair, delay: DelayTaps) -> DdrPair {
        self.record(FabricCall::ApplyDelay { pad, delay });
        GateMateFabric.apply_delay(pad, line, delay)
    }

    fn ddr_encode(&self, pad: Pad, rise: bool, fall: bool) -> DdrPair {
        self.record(FabricCall::DdrEncode { pad, rise, fall });
        GateMateFabric.ddr_encode(pad, rise, fall)
    }

    fn ddr_decode(&self, pad: Pad, line: DdrPair) -> (bool, bool) {
        self.record(FabricCall::DdrDecode { pad });
        GateMateFabric.ddr_decode(pad, line)
    }
}

// =============================================================================
// Mock Pin
// =============================================================================

/// Error returned by a [`MockPin`] set up to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

impl embedded_hal::digital::Error for MockPinError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

#[derive(Debug, Default)]
struct PinState {
    level: bool,
    input: bool,
    writes: Vec<bool>,
    fail: bool,
}

/// Bidirectional GPIO mock
///
/// Clones share state, so a test can keep one handle while the other is
/// moved into the code under test.
#[derive(Debug, Clone, Default)]
pub struct MockPin {
    state: Rc<RefCell<PinState>>,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin whose every operation fails
    pub fn failing() -> Self {
        let pin = Self::new();
        pin.set_failing(true);
        pin
    }

    pub fn set_failing(&self, fail: bool) {
        self.state.borrow_mut().fail = fail;
    }

    /// Level returned by reads
    pub fn set_input(&self, level: bool) {
        self.state.borrow_mut().input = level;
    }

    /// Level last driven
    pub fn level(&self) -> bool {
        self.state.borrow().level
    }

    /// Every level driven so far, in order
    pub fn writes(&self) -> Vec<bool> {
        self.state.borrow().writes.clone()
    }

    fn write(&self, level: bool) -> Result<(), MockPinError> {
        let mut state = self.state.borrow_mut();
        if state.fail {
            return Err(MockPinError);
        }
        state.level = level;
        state.writes.push(level);
        Ok(())
    }

    fn read(&self) -> Result<bool, MockPinError> {
        let state = self.state.borrow();
        if state.fail {
            return Err(MockPinError);
        }
        Ok(state.input)
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = MockPinError;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true)
    }
}

impl embedded_hal::digital::InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.read()
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.read().map(|level| !level)
    }
}

// =============================================================================
// Line Helpers
// =============================================================================

/// All receive lines low
pub fn idle_lines() -> RgmiiLines {
    RgmiiLines::IDLE
}

/// Wire levels a link partner drives for one element (no error signalled)
pub fn lines_for(beat: StreamElement) -> RgmiiLines {
    RgmiiLines::from_nibbles(
        DdrPair::steady(beat.valid),
        beat.low_nibble(),
        beat.high_nibble(),
    )
}

/// Wire levels for a whole frame followed by one idle tick
pub fn wire_frame(bytes: &[u8]) -> Vec<RgmiiLines> {
    let mut wire: Vec<_> = bytes
        .iter()
        .map(|&b| lines_for(StreamElement::byte(b)))
        .collect();
    wire.push(idle_lines());
    wire
}

/// Group received elements into frames, closing a frame on `last`
pub fn collect_frames<I: IntoIterator<Item = StreamElement>>(elements: I) -> Vec<Vec<u8>> {
    let mut frames = Vec::new();
    let mut current = Vec::new();
    for e in elements {
        if e.valid {
            current.push(e.data);
        }
        if e.last {
            frames.push(core::mem::take(&mut current));
        }
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::{InputPin, OutputPin};

    #[test]
    fn mock_pin_shares_state_between_clones() {
        let observer = MockPin::new();
        let mut pin = observer.clone();
        pin.set_high().unwrap();
        pin.set_low().unwrap();
        assert_eq!(observer.writes(), [true, false]);
        assert!(!observer.level());
    }

    #[test]
    fn mock_pin_failure_injection() {
        let mut pin = MockPin::failing();
        assert_eq!(pin.set_high(), Err(MockPinError));
        assert_eq!(pin.is_high(), Err(MockPinError));
        pin.set_failing(false);
        pin.set_input(true);
        assert_eq!(pin.is_high(), Ok(true));
    }

    #[test]
    fn lines_for_idle_is_idle() {
        assert_eq!(lines_for(StreamElement::IDLE), idle_lines());
    }

    #[test]
    fn collect_frames_splits_on_last() {
        let frames = collect_frames([
            StreamElement::byte(1),
            StreamElement::IDLE,
            StreamElement::last_byte(2),
            StreamElement::last_byte(3),
        ]);
        assert_eq!(frames, [std::vec![1, 2], std::vec![3]]);
    }
}
