//! Per-question means grouped by gender and age bracket
//!
//! Participants are split into groups keyed by their reported gender and by
//! whether their age is at or above 40. For every group the mean answer to
//! each question is computed over the answers actually given; missing
//! answers reduce the denominator instead of dragging the mean down.
//!
//! Participants whose age or gender is missing belong to no group and are
//! dropped from this analysis entirely.
//!
//! # Examples
//!
//! ```
//! use oxivey_analysis::{
//!     correlation::{GenderAgeCorrelation, GroupKey},
//!     record::Record,
//! };
//!
//! let records = vec![
//!     Record {
//!         gender: Some("female".to_owned()),
//!         age: Some(52.0),
//!         q1: Some(4.0),
//!         ..Record::default()
//!     },
//!     Record {
//!         gender: Some("female".to_owned()),
//!         age: Some(47.0),
//!         q1: Some(5.0),
//!         ..Record::default()
//!     },
//! ];
//! let correlation = GenderAgeCorrelation::from_records(&records);
//! let key = GroupKey {
//!     gender: "female".to_owned(),
//!     is_over_40: true,
//! };
//! assert_eq!(correlation.groups[&key].means[0], Some(4.5));
//! ```

use std::{array, collections::BTreeMap};

use oxivey_stats::descriptive::{mean, round_to_decimals};

use crate::record::{QUESTION_COUNT, Record};

/// A gender and age-bracket pair identifying one participant group.
///
/// Keys order by gender first and bracket second, so iterating a keyed map
/// visits a stable, readable group order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, derive_more::Display)]
#[display("{gender} / {}", if *is_over_40 { "40+" } else { "under 40" })]
pub struct GroupKey {
    /// Gender exactly as reported in the survey.
    pub gender: String,
    /// `true` when the participant's age is at or above 40.
    pub is_over_40: bool,
}

/// Mean answers for one participant group.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionMeans {
    /// Number of participants in the group.
    pub participants: usize,
    /// Mean answer per question, rounded to eight decimals. `None` when
    /// nobody in the group answered that question.
    pub means: [Option<f64>; QUESTION_COUNT],
}

impl QuestionMeans {
    /// Averages each question column over the given group rows.
    #[must_use]
    pub fn from_rows(rows: &[[Option<f64>; QUESTION_COUNT]]) -> Self {
        let means = array::from_fn(|question| {
            let answers = rows.iter().filter_map(|row| row[question]);
            mean(answers).map(|value| round_to_decimals(value, 8))
        });
        Self {
            participants: rows.len(),
            means,
        }
    }
}

/// Per-question mean answers for every (gender, age bracket) group.
#[derive(Debug, Clone, PartialEq)]
pub struct GenderAgeCorrelation {
    /// Group statistics keyed by gender and age bracket.
    pub groups: BTreeMap<GroupKey, QuestionMeans>,
}

impl GenderAgeCorrelation {
    /// Groups the records and averages their answers per question.
    #[must_use]
    pub fn from_records(records: &[Record]) -> Self {
        let mut rows_by_group: BTreeMap<GroupKey, Vec<[Option<f64>; QUESTION_COUNT]>> =
            BTreeMap::new();
        for record in records {
            let Some(age) = record.age else {
                continue;
            };
            let Some(gender) = record.gender.clone() else {
                continue;
            };
            let key = GroupKey {
                gender,
                is_over_40: age >= 40.0,
            };
            rows_by_group
                .entry(key)
                .or_default()
                .push(record.question_scores());
        }

        Self {
            groups: rows_by_group
                .into_iter()
                .map(|(key, rows)| (key, QuestionMeans::from_rows(&rows)))
                .collect(),
        }
    }
}
