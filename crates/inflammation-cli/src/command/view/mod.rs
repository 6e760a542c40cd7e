use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use inflammation_stats::summary::DailySummary;

use self::app::{FilePlot, ViewApp};
use crate::{command::StatisticsArg, tui, ui::widgets::SummaryCharts, util};

mod app;

#[derive(Debug, Clone, Args)]
pub(crate) struct ViewArg {
    /// Inflammation CSV files to plot
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[clap(flatten)]
    pub statistics: StatisticsArg,
}

pub(crate) fn run(arg: &ViewArg) -> anyhow::Result<()> {
    let plots = arg
        .files
        .iter()
        .map(|path| {
            let table = util::read_table(path)?;
            let summary = DailySummary::with_statistics(&table, &arg.statistics.statistics)
                .with_context(|| format!("No patients in {}", path.display()))?;
            Ok(FilePlot {
                title: path.display().to_string(),
                charts: SummaryCharts::new(&summary),
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    tracing::info!("Computed daily statistics for {} files", plots.len());

    let mut app = ViewApp::new(plots);
    tui::run(&mut app)
}
