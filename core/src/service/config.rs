use crate::prelude::ChannelId;
use serde::{Deserialize, Serialize};

/// Channel-quality implementation selected at start-up.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    #[default]
    Simple,
}

/// Exclusion lists as read from configuration. Order and duplicates are free.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FilterConfig {
    pub provider: ProviderKind,
    #[serde(alias = "BadChannels")]
    pub bad_channels: Vec<ChannelId>,
    #[serde(alias = "NoisyChannels")]
    pub noisy_channels: Vec<ChannelId>,
}

impl FilterConfig {
    pub fn new(bad_channels: Vec<ChannelId>, noisy_channels: Vec<ChannelId>) -> Self {
        Self {
            provider: ProviderKind::Simple,
            bad_channels,
            noisy_channels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_lists_default_to_empty() {
        let config: FilterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, FilterConfig::default());
        assert_eq!(config.provider, ProviderKind::Simple);
    }

    #[test]
    fn accepts_legacy_list_keys() {
        let config: FilterConfig =
            serde_json::from_str(r#"{"BadChannels": [3, 1, 3], "NoisyChannels": [7]}"#).unwrap();
        assert_eq!(config.bad_channels, vec![3, 1, 3]);
        assert_eq!(config.noisy_channels, vec![7]);
    }

    #[test]
    fn rejects_unknown_provider() {
        let parsed = serde_json::from_str::<FilterConfig>(r#"{"provider": "database"}"#);
        assert!(parsed.is_err());
    }
}
