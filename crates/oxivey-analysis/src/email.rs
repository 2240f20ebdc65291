//! Email plausibility screening
//!
//! The survey export collects email addresses free-form, so a share of them
//! are obvious typos. This module applies the project's lightweight
//! plausibility rules rather than full RFC validation: exactly one `@`, at
//! least one `.`, no `@.` sequence, and the address must not begin with `@`
//! or `.`.

use crate::record::Record;

/// Reports whether an address passes the plausibility rules.
///
/// # Examples
///
/// ```
/// use oxivey_analysis::email::is_valid_email;
///
/// assert!(is_valid_email("john.doe@example.com"));
/// assert!(!is_valid_email("@example.com"));
/// assert!(!is_valid_email("user@.com"));
/// ```
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    email.matches('@').count() == 1
        && email.contains('.')
        && !email.contains("@.")
        && !email.starts_with('@')
        && !email.starts_with('.')
}

/// Returns copies of the records whose email passes [`is_valid_email`].
///
/// Records without an email are dropped along with the implausible ones.
/// Row order is preserved.
#[must_use]
pub fn filter_valid_emails(records: &[Record]) -> Vec<Record> {
    records
        .iter()
        .filter(|record| record.email.as_deref().is_some_and(is_valid_email))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_addresses() {
        assert!(is_valid_email("john.doe@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first+tag@sub.domain.org"));
    }

    #[test]
    fn test_rejects_missing_at_or_dot() {
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("user@domaincom"));
        assert!(!is_valid_email("user.domain.com"));
    }

    #[test]
    fn test_rejects_leading_at_or_dot() {
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(".user@mail.com"));
    }

    #[test]
    fn test_rejects_multiple_ats() {
        assert!(!is_valid_email("user@@mail.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn test_rejects_at_followed_by_dot() {
        assert!(!is_valid_email("user@.com"));
    }

    #[test]
    fn test_tolerates_trailing_dot() {
        // The rules only police the start of the address and the "@." pair.
        assert!(is_valid_email("user@mail."));
    }

    #[test]
    fn test_filter_keeps_only_plausible_rows_in_order() {
        let records = vec![
            Record {
                id: Some(1),
                email: Some("ana@example.com".to_owned()),
                ..Record::default()
            },
            Record {
                id: Some(2),
                email: Some("@example.com".to_owned()),
                ..Record::default()
            },
            Record {
                id: Some(3),
                email: None,
                ..Record::default()
            },
            Record {
                id: Some(4),
                email: Some("bo@mail.org".to_owned()),
                ..Record::default()
            },
        ];

        let kept = filter_valid_emails(&records);
        let ids = kept.iter().map(|record| record.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![Some(1), Some(4)]);

        // Filtering an already filtered table changes nothing.
        assert_eq!(filter_valid_emails(&kept), kept);
    }
}
