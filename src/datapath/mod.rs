//! Data path
//!
//! - [`stream`]: the byte-wide stream shared with the MAC
//! - [`tx`]: stream to transmit lines (`eth_tx`)
//! - [`rx`]: receive lines to stream (`eth_rx`)

pub mod rx;
pub mod stream;
pub mod tx;

pub use rx::{ControlSample, RgmiiRx, RxPadSource, RxPipeline, RxSample, RxStream, detect_last, idle_after};
pub use stream::{StreamElement, StreamSink, StreamSource, frame};
pub use tx::RgmiiTx;
