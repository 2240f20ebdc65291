//! Questionnaire dataset loading and analysis entry points
//!
//! This module provides [`QuestionnaireDataset`], the owner of a loaded
//! participant table and the facade for every analysis this crate offers.
//!
//! # Overview
//!
//! A dataset is bound to a JSON file at construction time, which verifies the
//! path but does not touch the file contents. [`load`](QuestionnaireDataset::load)
//! then reads and parses the file, normalizing the export's missing-value
//! markers as described in [`record`](crate::record). All analyses read the
//! in-memory table and leave it untouched, so they can run in any order and
//! repeatedly.
//!
//! # Examples
//!
//! ```no_run
//! use oxivey_analysis::dataset::QuestionnaireDataset;
//!
//! let mut dataset = QuestionnaireDataset::new("participants.json").unwrap();
//! dataset.load().unwrap();
//!
//! let distribution = dataset.age_distribution();
//! println!("{} participants with a usable age", distribution.total_counted());
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    correlation::GenderAgeCorrelation,
    distribution::AgeDistribution,
    email,
    imputation::ImputationOutcome,
    record::Record,
    scoring::ScoredRecord,
};

/// An error raised while binding or loading a questionnaire dataset.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum DatasetError {
    /// The dataset path does not refer to an existing regular file.
    #[display("Dataset path is not a regular file: {}", path.display())]
    InvalidPath { path: PathBuf },
    /// The dataset file could not be read.
    #[display("Failed to read dataset file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    /// The dataset file is not a well-formed JSON array of records.
    #[display("Failed to parse dataset file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// A questionnaire survey dataset backed by a JSON file.
///
/// Holds the participant records parsed from the file, in file order. The
/// table is empty until [`load`](Self::load) succeeds.
#[derive(Debug, Clone)]
pub struct QuestionnaireDataset {
    path: PathBuf,
    records: Vec<Record>,
}

impl QuestionnaireDataset {
    /// Binds a dataset to the given JSON file.
    ///
    /// The path must refer to an existing regular file. The file itself is
    /// not opened until [`load`](Self::load).
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, DatasetError> {
        let path = path.into();
        if !path.is_file() {
            return Err(DatasetError::InvalidPath { path });
        }
        Ok(Self {
            path,
            records: Vec::new(),
        })
    }

    /// Reads and parses the dataset file, replacing the in-memory table.
    ///
    /// The file must contain a single JSON array of participant records. On
    /// failure the previously loaded table is left as it was.
    pub fn load(&mut self) -> Result<(), DatasetError> {
        let text = fs::read_to_string(&self.path).map_err(|source| DatasetError::Read {
            path: self.path.clone(),
            source,
        })?;
        self.records = serde_json::from_str(&text).map_err(|source| DatasetError::Parse {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }

    /// Returns the path the dataset was bound to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the loaded participant records in file order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of loaded participant records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no records are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Counts participants into ten-year age bins.
    ///
    /// See [`AgeDistribution::from_records`].
    #[must_use]
    pub fn age_distribution(&self) -> AgeDistribution {
        AgeDistribution::from_records(&self.records)
    }

    /// Returns copies of the records whose email address looks deliverable.
    ///
    /// See [`email::filter_valid_emails`].
    #[must_use]
    pub fn filter_valid_emails(&self) -> Vec<Record> {
        email::filter_valid_emails(&self.records)
    }

    /// Fills in missing question answers from each participant's other answers.
    ///
    /// Returns a corrected copy of the table; the dataset itself keeps the
    /// original answers. See [`ImputationOutcome::from_records`].
    #[must_use]
    pub fn impute_missing_scores(&self) -> ImputationOutcome {
        ImputationOutcome::from_records(&self.records)
    }

    /// Computes a per-participant total score, tolerating up to `max_missing`
    /// unanswered questions.
    ///
    /// See [`ScoredRecord::from_records`]. Callers without a specific policy
    /// should pass [`DEFAULT_MAX_MISSING`](crate::scoring::DEFAULT_MAX_MISSING).
    #[must_use]
    pub fn score_subjects(&self, max_missing: usize) -> Vec<ScoredRecord> {
        ScoredRecord::from_records(&self.records, max_missing)
    }

    /// Computes per-question mean answers grouped by gender and age bracket.
    ///
    /// See [`GenderAgeCorrelation::from_records`].
    #[must_use]
    pub fn correlate_gender_age(&self) -> GenderAgeCorrelation {
        GenderAgeCorrelation::from_records(&self.records)
    }
}
