//! Questionnaire survey analysis for the Oxivey project
//!
//! This crate loads a questionnaire export (a JSON array of participant
//! records) into a typed table and runs the project's standard analyses over
//! it: demographic distribution, contact-data screening, missing-answer
//! repair, per-participant scoring, and group comparisons.
//!
//! # Overview
//!
//! Everything starts from a [`dataset::QuestionnaireDataset`]:
//!
//! 1. **Bind and load** ([`dataset`]): Validate the file path, then parse the
//!    JSON array. Missing-value markers are normalized while parsing
//!    ([`record`]).
//! 2. **Describe** ([`distribution`]): Count participants into ten-year age
//!    bins.
//! 3. **Screen** ([`email`]): Keep only rows with a plausible email address.
//! 4. **Repair** ([`imputation`]): Estimate missing question answers from
//!    each participant's other answers.
//! 5. **Score** ([`scoring`]): Reduce each participant's answers to one
//!    whole-number score, with a configurable missing-answer allowance.
//! 6. **Compare** ([`correlation`]): Average answers per question across
//!    gender and age-bracket groups.
//!
//! Analyses never mutate the loaded table; each returns its own result
//! value, so they can run in any order and repeatedly.
//!
//! # Examples
//!
//! ```no_run
//! use oxivey_analysis::{dataset::QuestionnaireDataset, scoring::DEFAULT_MAX_MISSING};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Bind and load the export
//! let mut dataset = QuestionnaireDataset::new("participants.json")?;
//! dataset.load()?;
//!
//! // 2. Demographics
//! let distribution = dataset.age_distribution();
//! println!("{} participants with a usable age", distribution.total_counted());
//!
//! // 3. Contact-data screening
//! let reachable = dataset.filter_valid_emails();
//! println!("{} of {} rows keep a plausible email", reachable.len(), dataset.len());
//!
//! // 4. Repair and score
//! let corrected = dataset.impute_missing_scores();
//! println!("{} rows needed imputation", corrected.imputed_rows.len());
//! let scored = dataset.score_subjects(DEFAULT_MAX_MISSING);
//! println!("{} rows scored", scored.iter().filter(|s| s.score.is_some()).count());
//!
//! // 5. Group comparison
//! for (group, stats) in &dataset.correlate_gender_age().groups {
//!     println!("{group}: {:?}", stats.means);
//! }
//! # Ok(())
//! # }
//! ```

pub mod correlation;
pub mod dataset;
pub mod distribution;
pub mod email;
pub mod imputation;
pub mod record;
pub mod scoring;
