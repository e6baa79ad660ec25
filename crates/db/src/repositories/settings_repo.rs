//! Repository for the single-row `settings` table.

use sqlx::PgPool;

use crate::models::settings::{Settings, SettingsValues, SETTINGS_KEY};

const COLUMNS: &str = "key, company_name, address, contact_email, currency, updated_at";

/// Provides read and upsert operations for company settings.
pub struct SettingsRepo;

impl SettingsRepo {
    /// Fetch the settings row, if one has been saved.
    pub async fn get(pool: &PgPool) -> Result<Option<Settings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings WHERE key = $1");
        sqlx::query_as::<_, Settings>(&query)
            .bind(SETTINGS_KEY)
            .fetch_optional(pool)
            .await
    }

    /// Write the full settings row, inserting it on first save.
    ///
    /// Partial-update merging happens in the handler against the stored row
    /// (or the defaults), so this always receives complete values.
    pub async fn upsert(pool: &PgPool, values: &SettingsValues) -> Result<Settings, sqlx::Error> {
        let query = format!(
            "INSERT INTO settings (key, company_name, address, contact_email, currency) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (key) DO UPDATE SET \
                company_name = EXCLUDED.company_name, \
                address = EXCLUDED.address, \
                contact_email = EXCLUDED.contact_email, \
                currency = EXCLUDED.currency, \
                updated_at = now() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Settings>(&query)
            .bind(SETTINGS_KEY)
            .bind(&values.company_name)
            .bind(&values.address)
            .bind(&values.contact_email)
            .bind(&values.currency)
            .fetch_one(pool)
            .await
    }
}
