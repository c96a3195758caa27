use serde::{Deserialize, Serialize};
use tracing::warn;

use portal_sheets::Sheet;

use crate::model::MissingColumn;

/// A directory user, decoded from one Users sheet row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Email address as stored in the sheet. Matching is case-insensitive,
    /// but the original casing is preserved here.
    pub email: String,

    /// Plaintext password, compared by exact string equality.
    #[serde(skip_serializing)]
    pub password: String,

    /// Comma-separated list of BotIDs this user may open.
    pub allowed_bots: String,
}

impl UserRecord {
    /// Parse the allow-list: split on commas, trim each token, drop empties.
    ///
    /// `" a, b ,,c "` yields `["a", "b", "c"]`.
    pub fn allowed_ids(&self) -> Vec<String> {
        self.allowed_bots
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Normalize an email for matching: trim whitespace, lowercase.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// The decoded Users sheet.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    records: Vec<UserRecord>,
}

impl UserDirectory {
    /// Decode a fetched Users sheet into typed records.
    ///
    /// Requires `Email`, `Password`, and `AllowedBots` columns — the
    /// caller decides which absences fail soft and which are configuration
    /// errors. Rows whose normalized email repeats an earlier row are
    /// dropped with a warning: the first row wins.
    pub fn from_sheet(sheet: &Sheet) -> Result<Self, MissingColumn> {
        let col = |name: &'static str| {
            sheet.column(name).ok_or_else(|| MissingColumn {
                column: name,
                found: sheet.header().to_vec(),
            })
        };
        let email_col = col("Email")?;
        let password_col = col("Password")?;
        let allowed_col = col("AllowedBots")?;

        let mut records: Vec<UserRecord> = Vec::with_capacity(sheet.rows().len());
        let mut seen = std::collections::HashSet::new();

        for row in sheet.rows() {
            let record = UserRecord {
                email: row[email_col].clone(),
                password: row[password_col].clone(),
                allowed_bots: row[allowed_col].clone(),
            };
            if !seen.insert(normalize_email(&record.email)) {
                warn!(email = %record.email, "duplicate email in Users sheet, keeping first row");
                continue;
            }
            records.push(record);
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a user by normalized email. First (and, post-decode, only)
    /// match wins.
    pub fn find(&self, email: &str) -> Option<&UserRecord> {
        let needle = normalize_email(email);
        self.records
            .iter()
            .find(|r| normalize_email(&r.email) == needle)
    }
}
