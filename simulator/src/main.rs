use anyhow::Context;
use chanstatus::prelude::ChannelId;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Offline channel-status workflow driver")]
struct Args {
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Number of allocated readout channels
    #[arg(long, default_value_t = 8256)]
    channels: u32,
    /// Number of channels physically read out, if fewer than allocated
    #[arg(long)]
    present: Option<u32>,
    #[arg(long, value_delimiter = ',')]
    bad: Vec<ChannelId>,
    #[arg(long, value_delimiter = ',')]
    noisy: Vec<ChannelId>,
    #[arg(long, default_value_t = 10)]
    passes: usize,
    #[arg(long, default_value_t = 10_000)]
    hits: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Write the JSON run report to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(
            args.channels,
            args.present,
            args.bad,
            args.noisy,
            args.passes,
            args.hits,
            args.seed,
        )
    };

    let runner = Runner::new(workflow_config);
    let result = runner.execute().context("running channel-status workflow")?;

    println!(
        "Run -> passes {}, good hits {}, excluded hits {}, absent hits {}, good channels {}",
        result.passes.len(),
        result.good_hits,
        result.excluded_hits,
        result.absent_hits,
        result.final_good_channels
    );

    if let Some(report_path) = args.report {
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let report = serde_json::to_string_pretty(&result).context("serializing run report")?;
        fs::write(&report_path, report)
            .with_context(|| format!("writing run report {}", report_path.display()))?;
    }

    Ok(())
}
