//! Company settings model and DTOs.
//!
//! Settings are a single logical row keyed by a fixed identifier; reads fall
//! back to [`SettingsValues::default`] when nothing has been saved yet.

use opsdesk_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Fixed key of the single settings row.
pub const SETTINGS_KEY: &str = "global";

/// A row from the `settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Settings {
    #[serde(skip_serializing)]
    pub key: String,
    pub company_name: String,
    pub address: String,
    pub contact_email: String,
    pub currency: String,
    pub updated_at: Timestamp,
}

/// The saveable settings fields, also used as the GET response shape.
///
/// `Default` supplies the values returned before any settings were saved.
#[derive(Debug, Clone, Serialize)]
pub struct SettingsValues {
    pub company_name: String,
    pub address: String,
    pub contact_email: String,
    pub currency: String,
}

impl Default for SettingsValues {
    fn default() -> Self {
        Self {
            company_name: "Compliance Corp".into(),
            address: "123 Business Rd, Tech City".into(),
            contact_email: "admin@compliance-corp.com".into(),
            currency: "USD".into(),
        }
    }
}

impl From<Settings> for SettingsValues {
    fn from(row: Settings) -> Self {
        Self {
            company_name: row.company_name,
            address: row.address,
            contact_email: row.contact_email,
            currency: row.currency,
        }
    }
}

/// DTO for saving settings. Only provided fields overwrite stored values.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSettings {
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub contact_email: Option<String>,
    pub currency: Option<String>,
}

impl UpdateSettings {
    /// Merge these partial values over a base (the stored row or defaults).
    pub fn merge_into(self, base: SettingsValues) -> SettingsValues {
        SettingsValues {
            company_name: self.company_name.unwrap_or(base.company_name),
            address: self.address.unwrap_or(base.address),
            contact_email: self.contact_email.unwrap_or(base.contact_email),
            currency: self.currency.unwrap_or(base.currency),
        }
    }
}
