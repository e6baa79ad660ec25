//! Role-based permission predicate.
//!
//! Roles are resolved server-side (from the users table into JWT claims) and
//! checked here. `super_admin` may do everything; payments management and
//! record deletion are reserved for it. Finance-adjacent listings are hidden
//! from plain employees.

use crate::roles::{ROLE_ADMIN, ROLE_SUPER_ADMIN};

/// Guarded operations, grouped the way the UI exposes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ManagePayments,
    DeleteRecords,
    ManageInvoices,
    ManageEmployees,
    ManageSettings,
    ViewFinance,
    ViewQuotations,
    ViewEmployees,
}

/// Returns `true` if `role` may perform `action`.
///
/// Unknown roles get no privileged access; actions not listed in the matrix
/// are open to every authenticated user.
pub fn role_can(role: &str, action: Action) -> bool {
    if role == ROLE_SUPER_ADMIN {
        return true;
    }

    match action {
        Action::ManagePayments | Action::DeleteRecords => false,

        Action::ManageInvoices | Action::ManageEmployees | Action::ManageSettings => {
            role == ROLE_ADMIN
        }

        // super_admin already returned above; plain employees and unknown
        // roles are denied.
        Action::ViewFinance | Action::ViewQuotations | Action::ViewEmployees => role == ROLE_ADMIN,
    }
}
