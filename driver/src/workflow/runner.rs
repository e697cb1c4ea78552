use crate::workflow::config::ToolsConfig;
use anyhow::Context;
use dhtfcore::areas::{AreaSetGenerator, GenerationReport};
use dhtfcore::results::{SweepPrinter, SweepSummary};
use log::info;
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Clone)]
pub struct Runner {
    config: ToolsConfig,
}

impl Runner {
    pub fn new(config: ToolsConfig) -> Self {
        Self { config }
    }

    pub fn sweep<W: Write>(&self, out: W) -> anyhow::Result<SweepSummary> {
        let mut printer = SweepPrinter::new(self.config.sweep.clone(), out);
        let summary = printer.run().context("printing result sweep")?;
        info!(
            "sweep done: {} files read, {} skipped, {} tasks",
            summary.files_read, summary.files_skipped, summary.rows
        );
        Ok(summary)
    }

    pub fn generate(&self, manifest: Option<&Path>) -> anyhow::Result<GenerationReport> {
        let generator = AreaSetGenerator::new(self.config.generator.clone())
            .context("validating generator config")?;
        let report = generator.generate().context("generating experiment files")?;

        let summary = report.manifest();
        info!(
            "areas {:?}, server hard tasks {:?}, client hard tasks {:?}",
            summary.active_areas, summary.hard_tasks_server, summary.hard_tasks_client
        );

        if let Some(path) = manifest {
            let json = serde_json::to_string_pretty(&summary).context("encoding area manifest")?;
            fs::write(path, json)
                .with_context(|| format!("writing area manifest {}", path.display()))?;
            info!("area manifest written to {}", path.display());
        }
        Ok(report)
    }
}
