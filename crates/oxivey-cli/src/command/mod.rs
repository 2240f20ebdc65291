use clap::{Parser, Subcommand};

use self::{clean::CleanArg, report::ReportArg, score::ScoreArg};

mod clean;
mod report;
mod score;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to do with the questionnaire dataset
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print the standard analysis report for a dataset
    Report(#[clap(flatten)] ReportArg),
    /// Fill in missing answers and write the corrected table as JSON
    Clean(#[clap(flatten)] CleanArg),
    /// Score every participant and write the scored table as JSON
    Score(#[clap(flatten)] ScoreArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Report(arg) => report::run(&arg)?,
        Mode::Clean(arg) => clean::run(&arg)?,
        Mode::Score(arg) => score::run(&arg)?,
    }
    Ok(())
}
