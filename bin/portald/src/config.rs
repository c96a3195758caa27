//! Server configuration.
//!
//! Reads `/etc/portal/<name>.toml` (or a direct path). The two secrets —
//! spreadsheet id and API key — only ever arrive through this file, at
//! process start.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level server configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub sheets: SheetsSection,

    #[serde(default)]
    pub session: SessionSection,
}

/// `[sheets]` — remote directory source.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetsSection {
    /// Spreadsheet (dataset) identifier.
    pub sheet_id: String,

    /// API key credential.
    pub api_key: String,

    /// Values API base URL override.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Additional attempts after a failed fetch.
    #[serde(default = "default_retries")]
    pub retries: u32,

    /// Tab name of the users dataset.
    #[serde(default = "default_users_sheet")]
    pub users_sheet: String,

    /// Tab name of the bots dataset.
    #[serde(default = "default_bots_sheet")]
    pub bots_sheet: String,
}

/// `[session]` — login session behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionSection {
    /// Session lifetime in seconds.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: i64,
}

impl Default for SessionSection {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_retries() -> u32 {
    1
}

fn default_users_sheet() -> String {
    "Users".to_string()
}

fn default_bots_sheet() -> String {
    "Bots".to_string()
}

fn default_ttl_secs() -> i64 {
    28800 // 8h
}

impl ServerConfig {
    /// Resolve a context name or path to a config file path.
    ///
    /// A value containing `/` or `.` is used as a path directly; a bare
    /// name resolves to `/etc/portal/<name>.toml`.
    pub fn resolve_path(name_or_path: &str) -> PathBuf {
        if name_or_path.contains('/') || name_or_path.contains('.') {
            PathBuf::from(name_or_path)
        } else {
            PathBuf::from(format!("/etc/portal/{}.toml", name_or_path))
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read {}: {}", path.display(), e))?;
        let config: ServerConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path() {
        assert_eq!(
            ServerConfig::resolve_path("prod"),
            PathBuf::from("/etc/portal/prod.toml")
        );
        assert_eq!(
            ServerConfig::resolve_path("./local.toml"),
            PathBuf::from("./local.toml")
        );
        assert_eq!(
            ServerConfig::resolve_path("/tmp/p.toml"),
            PathBuf::from("/tmp/p.toml")
        );
    }

    #[test]
    fn test_parse_minimal() {
        let config: ServerConfig = toml::from_str(
            r#"
            [sheets]
            sheet_id = "sheet-123"
            api_key = "key-abc"
            "#,
        )
        .unwrap();

        assert_eq!(config.sheets.sheet_id, "sheet-123");
        assert_eq!(config.sheets.timeout_secs, 10);
        assert_eq!(config.sheets.retries, 1);
        assert_eq!(config.sheets.users_sheet, "Users");
        assert_eq!(config.sheets.bots_sheet, "Bots");
        assert_eq!(config.session.ttl_secs, 28800);
    }

    #[test]
    fn test_parse_overrides() {
        let config: ServerConfig = toml::from_str(
            r#"
            [sheets]
            sheet_id = "s"
            api_key = "k"
            endpoint = "http://localhost:9999/sheets"
            timeout_secs = 3
            retries = 0
            users_sheet = "Staff"
            bots_sheet = "Tools"

            [session]
            ttl_secs = 60
            "#,
        )
        .unwrap();

        assert_eq!(config.sheets.endpoint.as_deref(), Some("http://localhost:9999/sheets"));
        assert_eq!(config.sheets.timeout_secs, 3);
        assert_eq!(config.sheets.retries, 0);
        assert_eq!(config.sheets.users_sheet, "Staff");
        assert_eq!(config.sheets.bots_sheet, "Tools");
        assert_eq!(config.session.ttl_secs, 60);
    }
}
