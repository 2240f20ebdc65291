//! Missing-answer imputation command
//!
//! Fills in missing question answers from each participant's other answers
//! and writes the corrected table as JSON. The imputation summary goes to the
//! log so the JSON stream stays clean.

use std::path::PathBuf;

use clap::Args;
use log::info;

use crate::util;

#[derive(Debug, Clone, Args)]
pub(crate) struct CleanArg {
    /// Path to the questionnaire JSON file
    pub dataset: PathBuf,

    /// Write the corrected table to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &CleanArg) -> anyhow::Result<()> {
    let dataset = util::load_dataset(&arg.dataset)?;
    let outcome = dataset.impute_missing_scores();

    if outcome.imputed_rows.is_empty() {
        info!("No missing answers to fill in");
    } else {
        info!(
            "Filled in answers for {} of {} rows (row indices {:?})",
            outcome.imputed_rows.len(),
            dataset.len(),
            outcome.imputed_rows
        );
    }

    util::write_json(&outcome.records, arg.output.as_deref())
}
