use crate::channels::SimpleChannelFilter;
use crate::prelude::{ChannelId, ChannelStatusProvider, INVALID_CHANNEL_ID};
use crate::service::config::{FilterConfig, ProviderKind};
use crate::service::geometry::ChannelGeometry;
use crate::telemetry::LogManager;
use serde::{Deserialize, Serialize};

/// Counts and bounds reported when the service is set up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceSummary {
    pub bad_channels: usize,
    pub noisy_channels: usize,
    pub max_channel: Option<ChannelId>,
    pub max_present_channel: Option<ChannelId>,
}

/// Owns the configured channel-status provider and keeps its bounds in step
/// with the detector geometry.
pub struct ChannelFilterService {
    provider: Box<dyn ChannelStatusProvider>,
    logger: LogManager,
}

impl ChannelFilterService {
    pub fn new<G>(config: &FilterConfig, geometry: &G) -> Self
    where
        G: ChannelGeometry + ?Sized,
    {
        let mut service = Self {
            provider: build_provider(config),
            logger: LogManager::new("chanstatus::service"),
        };
        service.apply_geometry(geometry);

        let summary = service.summary();
        service.logger.record(&format!(
            "loaded from configuration: {} bad channels, {} noisy channels, largest channel {}, largest present {}",
            summary.bad_channels,
            summary.noisy_channels,
            describe(summary.max_channel),
            describe(summary.max_present_channel),
        ));
        service
    }

    /// Resets the provider bounds from `geometry`. The good-channel cache is
    /// always dropped, even when the extent did not change.
    pub fn update_geometry<G>(&mut self, geometry: &G)
    where
        G: ChannelGeometry + ?Sized,
    {
        self.apply_geometry(geometry);
        self.logger.trace(&format!(
            "geometry updated: largest channel {}, largest present {}",
            describe(self.provider.max_channel()),
            describe(self.provider.max_present_channel()),
        ));
    }

    pub fn provider(&self) -> &dyn ChannelStatusProvider {
        self.provider.as_ref()
    }

    pub fn summary(&self) -> ServiceSummary {
        ServiceSummary {
            bad_channels: self.provider.bad_channels().len(),
            noisy_channels: self.provider.noisy_channels().len(),
            max_channel: self.provider.max_channel(),
            max_present_channel: self.provider.max_present_channel(),
        }
    }

    fn apply_geometry<G>(&mut self, geometry: &G)
    where
        G: ChannelGeometry + ?Sized,
    {
        // an empty detector leaves the provider unconfigured
        let max_channel = geometry.max_channel().unwrap_or(INVALID_CHANNEL_ID);
        self.provider.configure(max_channel, geometry.max_present_channel());
    }
}

fn build_provider(config: &FilterConfig) -> Box<dyn ChannelStatusProvider> {
    match config.provider {
        ProviderKind::Simple => Box::new(SimpleChannelFilter::from_lists(
            config.bad_channels.iter().copied(),
            config.noisy_channels.iter().copied(),
        )),
    }
}

fn describe(channel: Option<ChannelId>) -> String {
    channel.map_or_else(|| "unknown".to_string(), |id| id.to_string())
}
