use crate::generator::hits::{ChannelHit, HitGenerator};
use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use chanstatus::prelude::ChannelStatusProvider;
use chanstatus::service::{ChannelFilterService, ServiceSummary};
use log::debug;
use serde::Serialize;

/// Hit classification for one processing pass.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct PassSummary {
    pub pass: usize,
    pub hits: usize,
    pub good: usize,
    pub excluded: usize,
    pub absent: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkflowResult {
    pub service: ServiceSummary,
    pub passes: Vec<PassSummary>,
    pub good_hits: usize,
    pub excluded_hits: usize,
    pub absent_hits: usize,
    pub final_good_channels: usize,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> anyhow::Result<WorkflowResult> {
        let mut service = ChannelFilterService::new(&self.config.filter, &self.config.geometry());
        let initial = service.summary();
        let mut generator = HitGenerator::new(
            self.config.channel_count,
            self.config.seed,
            self.config.generator.clone(),
        );

        let mut passes = Vec::with_capacity(self.config.passes);
        for pass in 0..self.config.passes {
            if let Some(change) = self
                .config
                .geometry_change
                .as_ref()
                .filter(|change| change.at_pass == pass)
            {
                service.update_geometry(&change.geometry());
            }

            let hits = generator.next_pass(self.config.hits_per_pass);
            let summary = classify_pass(service.provider(), pass, &hits)
                .with_context(|| format!("classifying hits of pass {}", pass))?;
            debug!(
                "pass {}: {} good, {} excluded, {} absent",
                pass, summary.good, summary.excluded, summary.absent
            );
            passes.push(summary);
        }

        let final_good_channels = service
            .provider()
            .good_channels()
            .context("collecting final good channel list")?
            .len();

        Ok(WorkflowResult {
            service: initial,
            good_hits: passes.iter().map(|pass| pass.good).sum(),
            excluded_hits: passes.iter().map(|pass| pass.excluded).sum(),
            absent_hits: passes.iter().map(|pass| pass.absent).sum(),
            passes,
            final_good_channels,
        })
    }
}

fn classify_pass(
    provider: &dyn ChannelStatusProvider,
    pass: usize,
    hits: &[ChannelHit],
) -> anyhow::Result<PassSummary> {
    let mut summary = PassSummary {
        pass,
        hits: hits.len(),
        ..Default::default()
    };

    for hit in hits {
        if !provider.is_present(hit.channel) {
            summary.absent += 1;
        } else if provider.is_good(hit.channel)? {
            summary.good += 1;
        } else {
            summary.excluded += 1;
        }
    }

    Ok(summary)
}
