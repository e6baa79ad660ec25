//! Invoice status and report-status derivation.
//!
//! The report status is a reporting-oriented classification layered on top of
//! the invoice lifecycle status. When no report status has been persisted it
//! is derived from the lifecycle status, and the same derivation must be used
//! everywhere invoices are read.

use serde::{Deserialize, Serialize};

/// Lifecycle stage of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    /// Parse a status string as stored in the database / sent by clients.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Draft" => Some(Self::Draft),
            "Sent" => Some(Self::Sent),
            "Paid" => Some(Self::Paid),
            "Overdue" => Some(Self::Overdue),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Sent => "Sent",
            Self::Paid => "Paid",
            Self::Overdue => "Overdue",
        }
    }
}

/// Reporting classification of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    Released,
    Pending,
}

impl ReportStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Released" => Some(Self::Released),
            "Pending" => Some(Self::Pending),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Released => "Released",
            Self::Pending => "Pending",
        }
    }
}

/// Compute the effective report status of an invoice.
///
/// A persisted report status always wins. Without one, invoices that have
/// left the draft stage (Sent, Paid, Overdue) count as `Released`; everything
/// else is `Pending`.
pub fn derive_report_status(
    status: InvoiceStatus,
    persisted: Option<ReportStatus>,
) -> ReportStatus {
    if let Some(explicit) = persisted {
        return explicit;
    }
    match status {
        InvoiceStatus::Sent | InvoiceStatus::Paid | InvoiceStatus::Overdue => {
            ReportStatus::Released
        }
        InvoiceStatus::Draft => ReportStatus::Pending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn released_for_post_draft_statuses() {
        for status in [
            InvoiceStatus::Sent,
            InvoiceStatus::Paid,
            InvoiceStatus::Overdue,
        ] {
            assert_eq!(
                derive_report_status(status, None),
                ReportStatus::Released,
                "{status:?} without a persisted value must derive Released"
            );
        }
    }

    #[test]
    fn pending_for_draft() {
        assert_eq!(
            derive_report_status(InvoiceStatus::Draft, None),
            ReportStatus::Pending
        );
    }

    #[test]
    fn persisted_value_always_wins() {
        // A persisted Pending on a Paid invoice must not be overridden.
        assert_eq!(
            derive_report_status(InvoiceStatus::Paid, Some(ReportStatus::Pending)),
            ReportStatus::Pending
        );
        assert_eq!(
            derive_report_status(InvoiceStatus::Draft, Some(ReportStatus::Released)),
            ReportStatus::Released
        );
    }

    #[test]
    fn derivation_is_idempotent() {
        let first = derive_report_status(InvoiceStatus::Sent, None);
        let second = derive_report_status(InvoiceStatus::Sent, None);
        assert_eq!(first, second);
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(InvoiceStatus::parse("paid"), None);
        assert_eq!(InvoiceStatus::parse(""), None);
        assert_eq!(ReportStatus::parse("released"), None);
        assert_eq!(InvoiceStatus::parse("Paid"), Some(InvoiceStatus::Paid));
        assert_eq!(
            ReportStatus::parse("Pending"),
            Some(ReportStatus::Pending)
        );
    }
}
