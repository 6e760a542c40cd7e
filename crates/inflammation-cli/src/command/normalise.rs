use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use inflammation_stats::normalise::patient_normalise;

use crate::util;

#[derive(Debug, Clone, Args)]
pub(crate) struct NormaliseArg {
    /// Inflammation CSV file
    pub file: PathBuf,

    /// Write the normalised CSV here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &NormaliseArg) -> anyhow::Result<()> {
    let table = util::read_table(&arg.file)?;
    let normalised = patient_normalise(&table)
        .with_context(|| format!("Failed to normalise {}", arg.file.display()))?;

    util::Output::save_csv(&normalised, arg.output.as_deref())?;
    tracing::info!("Normalised {} patients", normalised.nrows());
    Ok(())
}
