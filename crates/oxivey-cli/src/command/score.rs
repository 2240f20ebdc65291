//! Participant scoring command
//!
//! Reduces each participant's answers to one whole-number score and writes
//! the scored table as JSON.

use std::path::PathBuf;

use clap::Args;
use log::info;
use oxivey_analysis::scoring::DEFAULT_MAX_MISSING;

use crate::util;

#[derive(Debug, Clone, Args)]
pub(crate) struct ScoreArg {
    /// Path to the questionnaire JSON file
    pub dataset: PathBuf,

    /// How many unanswered questions a participant may have and still be scored
    #[arg(long, default_value_t = DEFAULT_MAX_MISSING)]
    pub max_missing: usize,

    /// Write the scored table to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ScoreArg) -> anyhow::Result<()> {
    let dataset = util::load_dataset(&arg.dataset)?;
    let scored = dataset.score_subjects(arg.max_missing);

    let withheld = scored.iter().filter(|row| row.score.is_none()).count();
    if withheld > 0 {
        info!(
            "Withheld a score for {withheld} of {} rows (allowance: {})",
            scored.len(),
            arg.max_missing
        );
    }

    util::write_json(&scored, arg.output.as_deref())
}
