//! Missing-answer imputation from each participant's other answers
//!
//! A missing question answer is estimated as the mean of the participant's
//! answers to the remaining questions. Questions are processed one at a time
//! in `q1` through `q5` order across the whole table, so an estimate written
//! during the `q1` pass is already available as input when the `q3` pass
//! reaches the same participant. After the final pass every answer in the
//! corrected table is rounded to two decimals.
//!
//! # Examples
//!
//! ```
//! use oxivey_analysis::{imputation::ImputationOutcome, record::Record};
//!
//! let records = vec![Record {
//!     q2: Some(2.0),
//!     q3: Some(4.0),
//!     q4: Some(6.0),
//!     q5: Some(8.0),
//!     ..Record::default()
//! }];
//! let outcome = ImputationOutcome::from_records(&records);
//! assert_eq!(outcome.records[0].q1, Some(5.0));
//! assert_eq!(outcome.imputed_rows, vec![0]);
//! ```

use std::collections::BTreeSet;

use oxivey_stats::descriptive::{mean, round_to_decimals};

use crate::record::{QUESTION_COUNT, Record};

/// A corrected copy of the participant table plus the rows it touched.
#[derive(Debug, Clone, PartialEq)]
pub struct ImputationOutcome {
    /// The table with estimated answers filled in and all answers rounded
    /// to two decimals.
    pub records: Vec<Record>,
    /// Indices of rows that had at least one missing answer, sorted
    /// ascending without duplicates.
    pub imputed_rows: Vec<usize>,
}

impl ImputationOutcome {
    /// Fills in missing answers across a copy of the given table.
    ///
    /// A row missing every answer is reported in `imputed_rows` but left
    /// unanswered, since there is nothing to estimate from.
    #[must_use]
    pub fn from_records(records: &[Record]) -> Self {
        let mut corrected = records.to_vec();
        let mut touched = BTreeSet::new();

        for question in 0..QUESTION_COUNT {
            for (row, record) in corrected.iter_mut().enumerate() {
                let mut scores = record.question_scores();
                if scores[question].is_some() {
                    continue;
                }
                touched.insert(row);
                let others = scores
                    .iter()
                    .enumerate()
                    .filter(|&(other, _)| other != question)
                    .filter_map(|(_, score)| *score);
                if let Some(estimate) = mean(others) {
                    scores[question] = Some(estimate);
                    record.set_question_scores(scores);
                }
            }
        }

        for record in &mut corrected {
            let mut scores = record.question_scores();
            for score in scores.iter_mut().flatten() {
                *score = round_to_decimals(*score, 2);
            }
            record.set_question_scores(scores);
        }

        Self {
            records: corrected,
            imputed_rows: touched.into_iter().collect(),
        }
    }
}
