use std::path::PathBuf;

use clap::Args;
use inflammation_model::{Named as _, Observation, Patient};

use crate::util;

#[derive(Debug, Clone, Args)]
pub(crate) struct PatientArg {
    /// Inflammation CSV file
    pub file: PathBuf,

    /// Zero-based row of the patient in the table
    #[arg(long)]
    pub row: usize,

    /// Name to give the patient (defaults to "Patient <row>")
    #[arg(long)]
    pub name: Option<String>,

    /// Write the JSON here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, serde::Serialize)]
struct PatientReport<'a> {
    patient: &'a Patient,
    last_observation: Option<&'a Observation>,
}

pub(crate) fn run(arg: &PatientArg) -> anyhow::Result<()> {
    let table = util::read_table(&arg.file)?;
    if arg.row >= table.nrows() {
        anyhow::bail!(
            "Row {} out of range: {} has {} patients",
            arg.row,
            arg.file.display(),
            table.nrows()
        );
    }

    let name = arg
        .name
        .clone()
        .unwrap_or_else(|| format!("Patient {}", arg.row));
    let patient = Patient::from_readings(name, table.row(arg.row).iter().copied());
    let report = PatientReport {
        patient: &patient,
        last_observation: patient.last_observation().ok(),
    };

    util::Output::save_json(&report, arg.output.as_deref())?;
    tracing::info!(
        "{} has {} observations",
        patient.name(),
        patient.observations().len()
    );
    Ok(())
}
