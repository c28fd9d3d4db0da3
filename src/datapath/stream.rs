//! Byte stream endpoints
//!
//! The PHY talks to the MAC through a byte-wide stream: one [`StreamElement`]
//! per domain tick in each direction. `valid` qualifies the element; `last`
//! marks the final byte of a frame. There is no backpressure: the transmit
//! sink is always ready and the receive source always produces.

/// One beat of the byte stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StreamElement {
    /// Data byte, meaningful only when `valid` is set
    pub data: u8,
    /// Element carries a byte
    pub valid: bool,
    /// Element closes the current frame
    pub last: bool,
}

impl StreamElement {
    /// No data this tick
    pub const IDLE: Self = Self {
        data: 0,
        valid: false,
        last: false,
    };

    /// A valid byte inside a frame
    pub const fn byte(data: u8) -> Self {
        Self {
            data,
            valid: true,
            last: false,
        }
    }

    /// The final valid byte of a frame
    pub const fn last_byte(data: u8) -> Self {
        Self {
            data,
            valid: true,
            last: true,
        }
    }

    /// Low nibble (sent on the rising edge)
    pub const fn low_nibble(&self) -> u8 {
        self.data & 0x0F
    }

    /// High nibble (sent on the falling edge)
    pub const fn high_nibble(&self) -> u8 {
        self.data >> 4
    }
}

/// Elements for one frame: every byte valid, `last` on the final one
pub fn frame(bytes: &[u8]) -> impl ExactSizeIterator<Item = StreamElement> + '_ {
    let end = bytes.len().saturating_sub(1);
    bytes.iter().enumerate().map(move |(i, &b)| {
        if i == end {
            StreamElement::last_byte(b)
        } else {
            StreamElement::byte(b)
        }
    })
}

/// Consumer endpoint of the stream
pub trait StreamSink {
    /// Whether an element offered this tick is accepted
    fn ready(&self) -> bool;
}

/// Producer endpoint of the stream
pub trait StreamSource {
    /// Element presented on the output during the current tick
    fn peek(&self) -> StreamElement;
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec::Vec;

    use super::*;

    #[test]
    fn nibbles() {
        let e = StreamElement::byte(0xA5);
        assert_eq!(e.low_nibble(), 0x5);
        assert_eq!(e.high_nibble(), 0xA);
    }

    #[test]
    fn frame_marks_last_byte_only() {
        let beats: Vec<_> = frame(&[1, 2, 3]).collect();
        assert_eq!(
            beats,
            [
                StreamElement::byte(1),
                StreamElement::byte(2),
                StreamElement::last_byte(3)
            ]
        );
    }

    #[test]
    fn single_byte_frame() {
        let beats: Vec<_> = frame(&[0x42]).collect();
        assert_eq!(beats, [StreamElement::last_byte(0x42)]);
        assert_eq!(frame(&[]).len(), 0);
    }
}
