//! Activity feed event tags and the append deduplication rule.
//!
//! The activity log is append-only. The only write-side logic is the
//! deduplication decision: a candidate entry is suppressed when the single
//! most recent entry carries the same description and was created less than
//! [`DEDUP_WINDOW_MS`] milliseconds ago. The lookback is exactly one entry --
//! two identical descriptions separated by an unrelated entry are both kept.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Window within which an identical description is suppressed.
pub const DEDUP_WINDOW_MS: i64 = 5_000;

/// The kind of entity an activity entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Invoice,
    Quotation,
    Payment,
    Expense,
    Employee,
    Contact,
    RentalItem,
    RentalAgreement,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Invoice => "invoice",
            Self::Quotation => "quotation",
            Self::Payment => "payment",
            Self::Expense => "expense",
            Self::Employee => "employee",
            Self::Contact => "contact",
            Self::RentalItem => "rental_item",
            Self::RentalAgreement => "rental_agreement",
        }
    }
}

/// What happened to the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    Create,
    Update,
    Delete,
}

impl ActivityAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// Decide whether a candidate description duplicates the latest log entry.
///
/// `latest` is the description and creation time of the single most recent
/// entry, if any. An empty log never suppresses.
pub fn is_duplicate(
    latest: Option<(&str, Timestamp)>,
    candidate: &str,
    now: Timestamp,
) -> bool {
    match latest {
        Some((description, created_at)) => {
            let time_diff = now.signed_duration_since(created_at).num_milliseconds();
            description == candidate && time_diff < DEDUP_WINDOW_MS
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    #[test]
    fn empty_log_never_suppresses() {
        assert!(!is_duplicate(None, "Changed report status", Utc::now()));
    }

    #[test]
    fn identical_description_inside_window_is_suppressed() {
        let t0 = Utc::now();
        let latest = Some(("Changed report status to Pending", t0));
        let now = t0 + Duration::milliseconds(4_999);
        assert!(is_duplicate(latest, "Changed report status to Pending", now));
    }

    #[test]
    fn identical_description_outside_window_is_kept() {
        let t0 = Utc::now();
        let latest = Some(("Changed report status to Pending", t0));
        let now = t0 + Duration::milliseconds(5_001);
        assert!(!is_duplicate(latest, "Changed report status to Pending", now));
    }

    #[test]
    fn window_boundary_is_exclusive() {
        // Exactly DEDUP_WINDOW_MS ago is no longer a duplicate.
        let t0 = Utc::now();
        let latest = Some(("same", t0));
        let now = t0 + Duration::milliseconds(DEDUP_WINDOW_MS);
        assert!(!is_duplicate(latest, "same", now));
    }

    #[test]
    fn different_description_is_never_suppressed() {
        let t0 = Utc::now();
        let latest = Some(("Created invoice for Acme", t0));
        let now = t0 + Duration::milliseconds(10);
        assert!(!is_duplicate(latest, "Deleted invoice 42", now));
    }

    #[test]
    fn lookback_is_a_single_entry() {
        // The caller only ever passes the latest entry. If an unrelated entry
        // landed in between, the earlier identical description is invisible
        // to the check and the candidate goes through.
        let t0 = Utc::now();
        let latest = Some(("Updated employee 7", t0));
        let now = t0 + Duration::milliseconds(100);
        assert!(!is_duplicate(latest, "Changed report status to Released", now));
    }

    #[test]
    fn tags_map_to_snake_case() {
        assert_eq!(EntityKind::RentalAgreement.as_str(), "rental_agreement");
        assert_eq!(ActivityAction::Update.as_str(), "update");
    }
}
