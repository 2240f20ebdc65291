//! Per-participant total scores with a missing-answer allowance
//!
//! A participant's score is the mean of their present answers, floored to a
//! whole number. Participants may skip up to `max_missing` questions and
//! still receive a score; beyond that the score is withheld rather than
//! guessed.
//!
//! # Examples
//!
//! ```
//! use oxivey_analysis::{
//!     record::Record,
//!     scoring::{DEFAULT_MAX_MISSING, ScoredRecord},
//! };
//!
//! let record = Record {
//!     q1: Some(3.0),
//!     q2: Some(4.0),
//!     q3: Some(4.0),
//!     q4: Some(5.0),
//!     q5: Some(5.0),
//!     ..Record::default()
//! };
//! let scored = ScoredRecord::from_record(&record, DEFAULT_MAX_MISSING);
//! assert_eq!(scored.score, Some(4)); // floor(4.2)
//! ```

use serde::Serialize;

use oxivey_stats::descriptive::mean;

use crate::record::{QUESTION_COUNT, Record};

/// Default allowance for unanswered questions when scoring.
pub const DEFAULT_MAX_MISSING: usize = 1;

/// A participant record together with its computed score.
///
/// Serializes as one flat JSON object: the record's columns followed by a
/// trailing `score` key, which is `null` when the score was withheld.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecord {
    #[serde(flatten)]
    pub record: Record,
    pub score: Option<u8>,
}

impl ScoredRecord {
    /// Scores a single participant.
    ///
    /// The score is the floored mean of the present answers, or `None` when
    /// fewer than `QUESTION_COUNT - max_missing` answers are present.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_record(record: &Record, max_missing: usize) -> Self {
        let scores = record.question_scores();
        let answered = scores.iter().flatten().count();
        let required = QUESTION_COUNT.saturating_sub(max_missing);
        let score = if answered < required {
            None
        } else {
            mean(scores.into_iter().flatten()).map(|value| value.floor() as u8)
        };
        Self {
            record: record.clone(),
            score,
        }
    }

    /// Scores every participant in the table, preserving row order.
    #[must_use]
    pub fn from_records(records: &[Record], max_missing: usize) -> Vec<Self> {
        records
            .iter()
            .map(|record| Self::from_record(record, max_missing))
            .collect()
    }
}
