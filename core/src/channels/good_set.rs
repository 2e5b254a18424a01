use crate::prelude::{first_valid_channel_id, is_valid_channel_id, ChannelId, ChannelSet};
use std::sync::Arc;

/// Valid channels in `[first valid id, last_channel]` that are neither bad nor
/// noisy.
///
/// Both exclusion sets are walked once with an ascending cursor alongside the
/// candidate scan, so the cost is linear in the range plus the set sizes.
pub fn compute_good_set(
    bad: &ChannelSet,
    noisy: &ChannelSet,
    last_channel: ChannelId,
) -> ChannelSet {
    let mut vetoed = [bad.iter().copied().peekable(), noisy.iter().copied().peekable()];
    let mut good = Vec::new();

    for channel in first_valid_channel_id()..=last_channel {
        if !is_valid_channel_id(channel) {
            continue;
        }

        let mut excluded = false;
        for cursor in vetoed.iter_mut() {
            // entries below the candidate can never match a later one
            while cursor.next_if(|&id| id < channel).is_some() {}
            if cursor.next_if_eq(&channel).is_some() {
                excluded = true;
            }
        }

        if !excluded {
            good.push(channel);
        }
    }

    // ascending input lets the set bulk-build
    good.into_iter().collect()
}

/// Cached good-channel set: either stale or holding the last published build.
#[derive(Debug, Clone, Default)]
pub enum GoodSetCache {
    #[default]
    Stale,
    Fresh(Arc<ChannelSet>),
}

impl GoodSetCache {
    pub fn get(&self) -> Option<Arc<ChannelSet>> {
        match self {
            Self::Stale => None,
            Self::Fresh(set) => Some(Arc::clone(set)),
        }
    }

    pub fn is_fresh(&self) -> bool {
        matches!(self, Self::Fresh(_))
    }

    /// Stores a freshly built set and returns the shared snapshot.
    pub fn publish(&mut self, set: ChannelSet) -> Arc<ChannelSet> {
        let set = Arc::new(set);
        *self = Self::Fresh(Arc::clone(&set));
        set
    }

    pub fn invalidate(&mut self) {
        *self = Self::Stale;
    }
}
