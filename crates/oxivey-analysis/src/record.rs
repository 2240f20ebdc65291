//! Participant records and missing-value normalization
//!
//! This module defines [`Record`], the in-memory form of one questionnaire
//! response, together with the deserialization rules that turn the loosely
//! typed survey export into a well-typed row.
//!
//! # Missing values
//!
//! The survey export marks a missing value in several inconsistent ways. All
//! of them collapse to [`None`] during deserialization:
//!
//! - JSON `null`
//! - an absent key
//! - the literal text `"nan"`
//! - for numeric fields, any text that parses to an IEEE NaN
//!
//! Numeric fields additionally accept numbers quoted as text (`"54"` reads as
//! `54.0`); text that does not parse as a number is rejected as malformed
//! input. On serialization every missing value is written back as `null`, and
//! keys appear in a fixed alphabetical column order.
//!
//! # Examples
//!
//! ```
//! use oxivey_analysis::record::Record;
//!
//! let raw = r#"{
//!     "age": "54",
//!     "email": "nan",
//!     "first_name": "Nora",
//!     "gender": "female",
//!     "id": 17,
//!     "last_name": "Vale",
//!     "q1": 5, "q2": null, "q3": "nan", "q4": 4, "q5": 5
//! }"#;
//! let record: Record = serde_json::from_str(raw).unwrap();
//! assert_eq!(record.age, Some(54.0));
//! assert_eq!(record.email, None);
//! assert_eq!(record.question_scores(), [Some(5.0), None, None, Some(4.0), Some(5.0)]);
//! ```

use serde::{Deserialize, Serialize};

/// Number of questionnaire questions (`q1` through `q5`).
pub const QUESTION_COUNT: usize = 5;

/// One participant's questionnaire response.
///
/// Every field is optional: the survey export may omit, null out, or
/// `"nan"`-mark any of them. Fields are declared in the canonical column
/// order used for serialized output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Age in years.
    #[serde(default, deserialize_with = "flexible::number")]
    pub age: Option<f64>,
    /// Contact email address, unvalidated.
    #[serde(default, deserialize_with = "flexible::text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "flexible::text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "flexible::text")]
    pub gender: Option<String>,
    /// Participant identifier assigned by the survey platform.
    #[serde(default, deserialize_with = "flexible::id")]
    pub id: Option<u32>,
    #[serde(default, deserialize_with = "flexible::text")]
    pub last_name: Option<String>,
    /// Answer to question 1, on a 1-5 scale.
    #[serde(default, deserialize_with = "flexible::number")]
    pub q1: Option<f64>,
    #[serde(default, deserialize_with = "flexible::number")]
    pub q2: Option<f64>,
    #[serde(default, deserialize_with = "flexible::number")]
    pub q3: Option<f64>,
    #[serde(default, deserialize_with = "flexible::number")]
    pub q4: Option<f64>,
    #[serde(default, deserialize_with = "flexible::number")]
    pub q5: Option<f64>,
}

impl Record {
    /// Returns the five question answers in question order.
    #[must_use]
    pub fn question_scores(&self) -> [Option<f64>; QUESTION_COUNT] {
        [self.q1, self.q2, self.q3, self.q4, self.q5]
    }

    /// Overwrites the five question answers in question order.
    pub(crate) fn set_question_scores(&mut self, scores: [Option<f64>; QUESTION_COUNT]) {
        [self.q1, self.q2, self.q3, self.q4, self.q5] = scores;
    }
}

/// Deserialization helpers that absorb the export's missing-value markers.
mod flexible {
    use serde::{Deserialize, Deserializer, de::Error as _};

    /// A field that may arrive as a JSON number or as quoted text.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Number(f64),
        Text(String),
    }

    pub(super) fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = match Option::<Scalar>::deserialize(deserializer)? {
            None => return Ok(None),
            Some(Scalar::Number(number)) => number,
            Some(Scalar::Text(text)) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| D::Error::custom(format!("invalid numeric value {text:?}")))?,
        };
        Ok((!value.is_nan()).then_some(value))
    }

    pub(super) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.filter(|text| text != "nan"))
    }

    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(super) fn id<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(number(deserializer)?.map(|value| value as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_markers_normalize_to_none() {
        let raw = r#"{
            "age": null,
            "email": "nan",
            "gender": "NaN",
            "id": null,
            "q1": "nan",
            "q2": "NaN",
            "q3": null
        }"#;
        let record: Record = serde_json::from_str(raw).unwrap();
        assert_eq!(record.age, None);
        assert_eq!(record.email, None);
        // Only the exact text "nan" marks a missing text field.
        assert_eq!(record.gender, Some("NaN".to_owned()));
        assert_eq!(record.id, None);
        // Numeric fields treat anything that parses to NaN as missing.
        assert_eq!(record.q1, None);
        assert_eq!(record.q2, None);
        assert_eq!(record.q3, None);
        // Absent keys behave like null.
        assert_eq!(record.first_name, None);
        assert_eq!(record.q4, None);
        assert_eq!(record.q5, None);
    }

    #[test]
    fn test_numeric_text_is_coerced() {
        let raw = r#"{"age": "54", "id": "12", "q1": " 3.5 ", "q2": 4}"#;
        let record: Record = serde_json::from_str(raw).unwrap();
        assert_eq!(record.age, Some(54.0));
        assert_eq!(record.id, Some(12));
        assert_eq!(record.q1, Some(3.5));
        assert_eq!(record.q2, Some(4.0));
    }

    #[test]
    fn test_non_numeric_text_is_rejected() {
        let result = serde_json::from_str::<Record>(r#"{"age": "old"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let raw = r#"{"age": 30, "hobby": "chess"}"#;
        let record: Record = serde_json::from_str(raw).unwrap();
        assert_eq!(record.age, Some(30.0));
    }

    #[test]
    fn test_serializes_in_column_order_with_null_gaps() {
        let record = Record {
            age: Some(54.0),
            email: Some("a@b.c".to_owned()),
            first_name: Some("Ada".to_owned()),
            gender: Some("female".to_owned()),
            id: Some(7),
            last_name: None,
            q1: Some(5.0),
            q2: None,
            q3: Some(3.25),
            q4: Some(4.0),
            q5: Some(5.0),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"age":54.0,"email":"a@b.c","first_name":"Ada","gender":"female","id":7,"last_name":null,"q1":5.0,"q2":null,"q3":3.25,"q4":4.0,"q5":5.0}"#
        );
    }

    #[test]
    fn test_question_scores_follow_question_order() {
        let record = Record {
            q1: Some(1.0),
            q3: Some(3.0),
            q5: Some(5.0),
            ..Record::default()
        };
        assert_eq!(
            record.question_scores(),
            [Some(1.0), None, Some(3.0), None, Some(5.0)]
        );
    }
}
