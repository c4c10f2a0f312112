//! A POCSAG (Post Office Code Standard Advisory Group) layer-2 pager
//! receiver: feed it demodulated hard bits one at a time, get back
//! decoded address/function/payload messages.

pub mod bch;
pub mod bitshifter;
pub mod charset;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod log_sink;
pub mod message;
pub mod receiver;
pub mod stats;
pub mod sync;
pub mod tracing_init;

pub use config::{CharsetEncoding, CharsetVariant, ErrorCorrection, ReceiverConfig};
pub use error::{CharsetError, LogSinkError};
pub use message::{DecodedMessage, Payload};
pub use receiver::Receiver;
pub use stats::Stats;
