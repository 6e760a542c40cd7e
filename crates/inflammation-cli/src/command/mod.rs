use clap::{Args, Parser, Subcommand};
use inflammation_stats::summary::Statistic;

use self::{normalise::NormaliseArg, patient::PatientArg, summary::SummaryArg, view::ViewArg};

mod normalise;
mod patient;
mod summary;
mod view;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Plot daily statistics of inflammation files in the terminal
    View(#[clap(flatten)] ViewArg),
    /// Write daily statistics of an inflammation file as JSON
    Summary(#[clap(flatten)] SummaryArg),
    /// Write the per-patient normalised table as CSV
    Normalise(#[clap(flatten)] NormaliseArg),
    /// Show one table row as a patient with observations
    Patient(#[clap(flatten)] PatientArg),
}

/// Daily statistics to compute, shared by several commands.
#[derive(Debug, Clone, Args)]
pub(crate) struct StatisticsArg {
    /// Statistics to compute, in display order (comma-separated)
    #[arg(long, value_delimiter = ',', default_values = ["average", "max", "min", "std"])]
    pub statistics: Vec<Statistic>,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::View(arg) => view::run(&arg)?,
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::Normalise(arg) => normalise::run(&arg)?,
        Mode::Patient(arg) => patient::run(&arg)?,
    }
    Ok(())
}
