//! Well-known role name constants.
//!
//! These must match the values accepted by the `users.role` column and the
//! permission matrix in [`crate::permissions`].

pub const ROLE_SUPER_ADMIN: &str = "super_admin";
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_EMPLOYEE: &str = "employee";

/// Returns `true` if `role` is one of the known role names.
pub fn is_valid_role(role: &str) -> bool {
    matches!(role, ROLE_SUPER_ADMIN | ROLE_ADMIN | ROLE_EMPLOYEE)
}
