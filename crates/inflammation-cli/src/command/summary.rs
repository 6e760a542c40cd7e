use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use inflammation_stats::summary::DailySummary;

use crate::{command::StatisticsArg, util};

#[derive(Debug, Clone, Args)]
pub(crate) struct SummaryArg {
    /// Inflammation CSV file
    pub file: PathBuf,

    #[clap(flatten)]
    pub statistics: StatisticsArg,

    /// Write the JSON here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let table = util::read_table(&arg.file)?;
    let summary = DailySummary::with_statistics(&table, &arg.statistics.statistics)
        .with_context(|| format!("No patients in {}", arg.file.display()))?;

    util::Output::save_json(&summary, arg.output.as_deref())?;
    tracing::info!("Wrote {} daily statistics", summary.len());
    Ok(())
}
