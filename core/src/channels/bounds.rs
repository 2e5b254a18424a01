use crate::prelude::{valid_channel_id, ChannelId};

/// Largest allocated and largest physically present channel.
///
/// Both start unset. `None` for the present bound means every valid channel
/// counts as present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelBounds {
    max_channel: Option<ChannelId>,
    max_present_channel: Option<ChannelId>,
}

impl ChannelBounds {
    /// Builds bounds from raw identifiers; the invalid sentinel reads as unset.
    pub fn new(max_channel: ChannelId, max_present_channel: Option<ChannelId>) -> Self {
        Self {
            max_channel: valid_channel_id(max_channel),
            max_present_channel: max_present_channel.and_then(valid_channel_id),
        }
    }

    pub fn max_channel(&self) -> Option<ChannelId> {
        self.max_channel
    }

    pub fn max_present_channel(&self) -> Option<ChannelId> {
        self.max_present_channel
    }

    /// Smaller of the two bounds. A present bound above the allocated one is
    /// ignored without notice.
    pub fn effective_bound(&self) -> Option<ChannelId> {
        let max_channel = self.max_channel?;
        Some(match self.max_present_channel {
            Some(present) if present < max_channel => present,
            _ => max_channel,
        })
    }
}
