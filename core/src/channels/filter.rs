use crate::channels::bounds::ChannelBounds;
use crate::channels::good_set::{compute_good_set, GoodSetCache};
use crate::channels::registry::ExclusionRegistry;
use crate::prelude::{
    is_valid_channel_id, ChannelId, ChannelSet, ChannelStatusProvider, FilterError, FilterResult,
};
use crate::telemetry::{LogManager, MetricsRecorder, MetricsSnapshot};
use std::sync::{Arc, RwLock};

/// Channel-quality provider driven by fixed bad/noisy lists.
///
/// The exclusion lists never change after construction. Bounds are set with
/// [`ChannelStatusProvider::configure`], which takes `&mut self` and so cannot
/// overlap any query. The good-channel set is built on the first query after
/// each configuration and shared as an immutable snapshot until the next one.
#[derive(Debug)]
pub struct SimpleChannelFilter {
    exclusions: ExclusionRegistry,
    bounds: ChannelBounds,
    good: RwLock<GoodSetCache>,
    metrics: MetricsRecorder,
    logger: LogManager,
}

impl SimpleChannelFilter {
    pub fn new(exclusions: ExclusionRegistry) -> Self {
        Self {
            exclusions,
            bounds: ChannelBounds::default(),
            good: RwLock::new(GoodSetCache::Stale),
            metrics: MetricsRecorder::new(),
            logger: LogManager::new("chanstatus::filter"),
        }
    }

    pub fn from_lists<B, N>(bad: B, noisy: N) -> Self
    where
        B: IntoIterator<Item = ChannelId>,
        N: IntoIterator<Item = ChannelId>,
    {
        Self::new(ExclusionRegistry::new(bad, noisy))
    }

    pub fn bounds(&self) -> ChannelBounds {
        self.bounds
    }

    pub fn effective_bound(&self) -> Option<ChannelId> {
        self.bounds.effective_bound()
    }

    pub fn exclusions(&self) -> &ExclusionRegistry {
        &self.exclusions
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    fn cached_good_channels(&self) -> FilterResult<Option<Arc<ChannelSet>>> {
        let cache = self.good.read().map_err(|_| FilterError::CachePoisoned)?;
        Ok(cache.get())
    }

    fn fill_good_channels(&self) -> FilterResult<Arc<ChannelSet>> {
        let last_channel = self
            .bounds
            .effective_bound()
            .ok_or(FilterError::Unconfigured)?;

        let mut cache = self.good.write().map_err(|_| FilterError::CachePoisoned)?;
        // another reader may have built it while we waited
        if let Some(set) = cache.get() {
            return Ok(set);
        }

        let set = compute_good_set(self.exclusions.bad(), self.exclusions.noisy(), last_channel);
        self.metrics.record_rebuild();
        self.logger.trace(&format!(
            "rebuilt good channel list: {} channels up to {}",
            set.len(),
            last_channel
        ));
        Ok(cache.publish(set))
    }
}

impl ChannelStatusProvider for SimpleChannelFilter {
    /// Any cached good-channel set is dropped; nothing is rebuilt here.
    fn configure(&mut self, max_channel: ChannelId, max_present_channel: Option<ChannelId>) {
        self.bounds = ChannelBounds::new(max_channel, max_present_channel);
        // fresh lock also clears poison left by a panicked rebuild
        self.good = RwLock::new(GoodSetCache::Stale);
        self.metrics.record_reconfiguration();
        self.logger.trace(&format!(
            "bounds set: largest channel {:?}, largest present {:?}",
            self.bounds.max_channel(),
            self.bounds.max_present_channel()
        ));
    }

    fn max_channel(&self) -> Option<ChannelId> {
        self.bounds.max_channel()
    }

    fn max_present_channel(&self) -> Option<ChannelId> {
        self.bounds.max_present_channel()
    }

    /// Without a present bound every id counts as present, the invalid
    /// sentinel included.
    fn is_present(&self, channel: ChannelId) -> bool {
        match self.bounds.max_present_channel() {
            Some(max_present) => is_valid_channel_id(channel) && channel <= max_present,
            None => true,
        }
    }

    fn is_bad(&self, channel: ChannelId) -> bool {
        self.exclusions.is_bad(channel)
    }

    fn is_noisy(&self, channel: ChannelId) -> bool {
        self.exclusions.is_noisy(channel)
    }

    fn is_good(&self, channel: ChannelId) -> FilterResult<bool> {
        {
            let cache = self.good.read().map_err(|_| FilterError::CachePoisoned)?;
            if let GoodSetCache::Fresh(set) = &*cache {
                return Ok(set.contains(&channel));
            }
        }
        Ok(self.fill_good_channels()?.contains(&channel))
    }

    fn good_channels(&self) -> FilterResult<Arc<ChannelSet>> {
        match self.cached_good_channels()? {
            Some(set) => Ok(set),
            None => self.fill_good_channels(),
        }
    }

    fn bad_channels(&self) -> &ChannelSet {
        self.exclusions.bad()
    }

    fn noisy_channels(&self) -> &ChannelSet {
        self.exclusions.noisy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::INVALID_CHANNEL_ID;
    use std::thread;

    fn scenario_filter() -> SimpleChannelFilter {
        SimpleChannelFilter::from_lists(vec![5, 2], vec![8, 5])
    }

    fn ids(set: &ChannelSet) -> Vec<ChannelId> {
        set.iter().copied().collect()
    }

    #[test]
    fn good_channels_before_configure_is_unconfigured() {
        let filter = scenario_filter();
        assert_eq!(filter.good_channels().unwrap_err(), FilterError::Unconfigured);
        assert_eq!(filter.is_good(0).unwrap_err(), FilterError::Unconfigured);
        assert_eq!(filter.metrics().rebuilds, 0);
    }

    #[test]
    fn configure_with_sentinel_leaves_filter_unconfigured() {
        let mut filter = scenario_filter();
        filter.configure(INVALID_CHANNEL_ID, None);
        assert_eq!(filter.good_channels().unwrap_err(), FilterError::Unconfigured);
    }

    #[test]
    fn full_range_scenario() {
        let mut filter = scenario_filter();
        filter.configure(9, None);

        let good = filter.good_channels().unwrap();
        assert_eq!(ids(&good), vec![0, 1, 3, 4, 6, 7, 9]);
        assert!(filter.is_present(5));
        assert!(filter.is_bad(5));
        assert!(filter.is_noisy(5));
        assert!(!filter.is_good(5).unwrap());
        assert!(filter.is_good(9).unwrap());
    }

    #[test]
    fn present_bound_scenario() {
        let mut filter = scenario_filter();
        filter.configure(9, Some(6));

        assert_eq!(filter.effective_bound(), Some(6));
        assert_eq!(ids(&filter.good_channels().unwrap()), vec![0, 1, 3, 4, 6]);
        assert!(!filter.is_present(7));
        assert!(filter.is_present(6));
        assert!(!filter.is_good(5).unwrap());
        assert!(!filter.is_good(7).unwrap());
    }

    #[test]
    fn present_bound_above_max_is_clamped() {
        let mut filter = scenario_filter();
        filter.configure(9, Some(20));
        assert_eq!(filter.effective_bound(), Some(9));
        assert_eq!(filter.good_channels().unwrap().iter().max(), Some(&9));
    }

    #[test]
    fn presence_asymmetry_for_invalid_id() {
        let mut filter = scenario_filter();
        filter.configure(9, None);
        assert!(filter.is_present(INVALID_CHANNEL_ID));
        assert!(filter.is_present(1_000));

        filter.configure(9, Some(6));
        assert!(!filter.is_present(INVALID_CHANNEL_ID));
        assert!(!filter.is_good(INVALID_CHANNEL_ID).unwrap());
    }

    #[test]
    fn presence_does_not_need_configuration() {
        let filter = scenario_filter();
        assert!(filter.is_present(3));
        assert!(filter.is_present(INVALID_CHANNEL_ID));
    }

    #[test]
    fn repeated_queries_reuse_cached_set() {
        let mut filter = scenario_filter();
        filter.configure(9, None);

        let first = filter.good_channels().unwrap();
        let second = filter.good_channels().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        for channel in 0..12 {
            filter.is_good(channel).unwrap();
        }
        assert_eq!(filter.metrics().rebuilds, 1);
    }

    #[test]
    fn configure_invalidates_without_rebuilding() {
        let mut filter = scenario_filter();
        filter.configure(9, None);
        let before = filter.good_channels().unwrap();

        filter.configure(9, None);
        assert_eq!(filter.metrics().rebuilds, 1);
        assert_eq!(filter.metrics().reconfigurations, 2);

        let after = filter.good_channels().unwrap();
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(before, after);
        assert_eq!(filter.metrics().rebuilds, 2);
    }

    #[test]
    fn shrinking_bound_drops_high_channels() {
        let mut filter = scenario_filter();
        filter.configure(9, None);
        assert!(filter.is_good(9).unwrap());

        filter.configure(4, None);
        let good = filter.good_channels().unwrap();
        assert!(good.iter().all(|&channel| channel <= 4));
        assert!(!filter.is_good(9).unwrap());
        assert_eq!(ids(&good), vec![0, 1, 3, 4]);
    }

    #[test]
    fn concurrent_readers_share_one_rebuild() {
        let mut filter = SimpleChannelFilter::from_lists(0..1_000, vec![5_000]);
        filter.configure(20_000, None);
        let filter = Arc::new(filter);

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let filter = Arc::clone(&filter);
                thread::spawn(move || {
                    let channel = 1_000 + worker;
                    filter.is_good(channel).unwrap()
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_eq!(filter.metrics().rebuilds, 1);
        assert_eq!(filter.good_channels().unwrap().len(), 20_001 - 1_000 - 1);
    }
}
