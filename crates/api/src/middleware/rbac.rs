//! Permission enforcement on top of [`AuthUser`].
//!
//! The permission matrix lives in `opsdesk_core::permissions`; this module
//! only translates a denied check into a 403 response.

use opsdesk_core::error::CoreError;
use opsdesk_core::permissions::{role_can, Action};

use crate::error::AppError;
use crate::middleware::auth::AuthUser;

/// Reject with 403 Forbidden unless `user`'s role may perform `action`.
///
/// ```ignore
/// let user: AuthUser = ...;
/// rbac::require(&user, Action::ManageInvoices)?;
/// ```
pub fn require(user: &AuthUser, action: Action) -> Result<(), AppError> {
    if role_can(&user.role, action) {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(format!(
            "Role '{}' may not perform this action",
            user.role
        ))))
    }
}
