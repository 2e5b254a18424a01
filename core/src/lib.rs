//! Channel-status engine for detector readout.
//!
//! Channels are classified as bad or noisy from static lists; everything else
//! up to the configured bound is good. The good-channel set is derived lazily
//! and cached until the bounds change.

pub mod channels;
pub mod prelude;
pub mod service;
pub mod telemetry;

pub use channels::SimpleChannelFilter;
pub use prelude::{ChannelId, ChannelSet, ChannelStatusProvider, FilterError, FilterResult};
