//! Standard analysis report command
//!
//! Prints the project's standard survey report: participant counts, the age
//! distribution, email plausibility, and per-group mean answers.

use std::path::PathBuf;

use clap::Args;
use oxivey_analysis::{
    correlation::GenderAgeCorrelation, dataset::QuestionnaireDataset,
    distribution::AgeDistribution, record::QUESTION_COUNT,
};

use crate::util;

#[derive(Debug, Clone, Args)]
pub(crate) struct ReportArg {
    /// Path to the questionnaire JSON file
    pub dataset: PathBuf,
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let dataset = util::load_dataset(&arg.dataset)?;

    println!("Questionnaire Report: {}", arg.dataset.display());
    println!("========================================\n");

    report_participants(&dataset);
    println!();

    report_age_distribution(&dataset.age_distribution());
    println!();

    report_email_validity(&dataset);
    println!();

    report_group_means(&dataset.correlate_gender_age());

    Ok(())
}

fn report_participants(dataset: &QuestionnaireDataset) {
    let complete = dataset
        .records()
        .iter()
        .filter(|record| record.question_scores().iter().all(Option::is_some))
        .count();
    let touched = dataset.impute_missing_scores().imputed_rows.len();

    println!("Participants:");
    println!("  Records loaded: {}", dataset.len());
    println!("  Fully answered questionnaires: {complete}");
    println!("  Rows with at least one missing answer: {touched}");
}

fn report_age_distribution(distribution: &AgeDistribution) {
    println!("Age distribution:");
    println!("  {:<10} {:>6}", "Bracket", "Count");
    println!("  {}", "-".repeat(17));
    for (bin, count) in distribution.counts.iter().enumerate() {
        let label = format!("{}-{}", bin * 10, bin * 10 + 9);
        println!("  {label:<10} {count:>6}");
    }
    println!("  {:<10} {:>6}", "Total", distribution.total_counted());
}

fn report_email_validity(dataset: &QuestionnaireDataset) {
    let reachable = dataset.filter_valid_emails();
    println!("Email addresses:");
    println!("  Plausible: {}", reachable.len());
    println!("  Missing or implausible: {}", dataset.len() - reachable.len());
}

fn report_group_means(correlation: &GenderAgeCorrelation) {
    println!("Mean answers by gender and age bracket:");
    if correlation.groups.is_empty() {
        println!("  No rows carry both a gender and an age");
        return;
    }

    print!("  {:<20} {:>6}", "Group", "n");
    for question in 1..=QUESTION_COUNT {
        print!(" {:>12}", format!("q{question}"));
    }
    println!();
    println!("  {}", "-".repeat(27 + 13 * QUESTION_COUNT));

    for (key, stats) in &correlation.groups {
        print!("  {:<20} {:>6}", key.to_string(), stats.participants);
        for answer_mean in stats.means {
            let cell = answer_mean.map_or_else(|| "N/A".to_owned(), |value| format!("{value:.8}"));
            print!(" {cell:>12}");
        }
        println!();
    }
}
