use std::collections::BTreeSet;
use std::sync::Arc;

/// Identifier of one hardware readout channel.
pub type ChannelId = u32;

/// Sentinel marking an identifier that names no channel.
pub const INVALID_CHANNEL_ID: ChannelId = ChannelId::MAX;

/// Ordered, duplicate-free set of channel identifiers.
pub type ChannelSet = BTreeSet<ChannelId>;

/// Returns whether `channel` names a real channel.
pub fn is_valid_channel_id(channel: ChannelId) -> bool {
    channel != INVALID_CHANNEL_ID
}

/// Maps the invalid sentinel to `None`.
pub fn valid_channel_id(channel: ChannelId) -> Option<ChannelId> {
    is_valid_channel_id(channel).then_some(channel)
}

/// Lowest identifier accepted by [`is_valid_channel_id`].
pub fn first_valid_channel_id() -> ChannelId {
    let mut channel: ChannelId = 0;
    while !is_valid_channel_id(channel) {
        channel += 1;
    }
    channel
}

/// Common error type for channel-status queries.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("no largest channel was set up; configure the filter before querying good channels")]
    Unconfigured,
    #[error("good channel cache poisoned by a panicked rebuild")]
    CachePoisoned,
}

pub type FilterResult<T> = Result<T, FilterError>;

/// Interface shared by every channel-quality implementation.
///
/// Presence, bad and noisy queries never fail. Good-channel queries fail with
/// [`FilterError::Unconfigured`] until the largest channel has been set.
pub trait ChannelStatusProvider: Send + Sync {
    /// Sets the largest allocated channel and, optionally, the largest present
    /// one, dropping any derived state.
    fn configure(&mut self, max_channel: ChannelId, max_present_channel: Option<ChannelId>);
    fn max_channel(&self) -> Option<ChannelId>;
    fn max_present_channel(&self) -> Option<ChannelId>;
    fn is_present(&self, channel: ChannelId) -> bool;
    fn is_bad(&self, channel: ChannelId) -> bool;
    fn is_noisy(&self, channel: ChannelId) -> bool;
    fn is_good(&self, channel: ChannelId) -> FilterResult<bool>;
    fn good_channels(&self) -> FilterResult<Arc<ChannelSet>>;
    fn bad_channels(&self) -> &ChannelSet;
    fn noisy_channels(&self) -> &ChannelSet;
}
