use crate::prelude::{ChannelId, ChannelSet};

/// Bad and noisy channel lists, fixed once the registry is built.
///
/// Identifiers are not checked against any bound: an entry beyond the largest
/// channel simply never takes part in a good-channel computation.
#[derive(Debug, Clone, Default)]
pub struct ExclusionRegistry {
    bad: ChannelSet,
    noisy: ChannelSet,
}

impl ExclusionRegistry {
    pub fn new<B, N>(bad: B, noisy: N) -> Self
    where
        B: IntoIterator<Item = ChannelId>,
        N: IntoIterator<Item = ChannelId>,
    {
        Self {
            bad: bad.into_iter().collect(),
            noisy: noisy.into_iter().collect(),
        }
    }

    pub fn bad(&self) -> &ChannelSet {
        &self.bad
    }

    pub fn noisy(&self) -> &ChannelSet {
        &self.noisy
    }

    pub fn is_bad(&self, channel: ChannelId) -> bool {
        self.bad.contains(&channel)
    }

    pub fn is_noisy(&self, channel: ChannelId) -> bool {
        self.noisy.contains(&channel)
    }
}
