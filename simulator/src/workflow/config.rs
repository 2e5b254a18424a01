use crate::generator::hits::GeneratorConfig;
use anyhow::Context;
use chanstatus::prelude::ChannelId;
use chanstatus::service::{FilterConfig, FixedGeometry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Geometry switch applied before a given pass.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeometryChange {
    pub at_pass: usize,
    pub channel_count: u32,
    #[serde(default)]
    pub present_channel_count: Option<u32>,
}

impl GeometryChange {
    pub fn geometry(&self) -> FixedGeometry {
        FixedGeometry {
            channel_count: self.channel_count,
            present_channel_count: self.present_channel_count,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkflowConfig {
    #[serde(default)]
    pub filter: FilterConfig,
    pub channel_count: u32,
    #[serde(default)]
    pub present_channel_count: Option<u32>,
    #[serde(default = "default_passes")]
    pub passes: usize,
    pub hits_per_pass: usize,
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub geometry_change: Option<GeometryChange>,
}

fn default_passes() -> usize {
    1
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        channel_count: u32,
        present_channel_count: Option<u32>,
        bad_channels: Vec<ChannelId>,
        noisy_channels: Vec<ChannelId>,
        passes: usize,
        hits_per_pass: usize,
        seed: u64,
    ) -> Self {
        Self {
            filter: FilterConfig::new(bad_channels, noisy_channels),
            channel_count,
            present_channel_count,
            passes,
            hits_per_pass,
            seed,
            generator: GeneratorConfig::default(),
            geometry_change: None,
        }
    }

    pub fn geometry(&self) -> FixedGeometry {
        FixedGeometry {
            channel_count: self.channel_count,
            present_channel_count: self.present_channel_count,
        }
    }
}
