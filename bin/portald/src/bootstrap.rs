//! Bootstrap — first-start configuration checks.
//!
//! portald refuses to start without the two directory secrets; a portal
//! that can never reach its directory would only ever serve denials.

use crate::config::ServerConfig;

/// Verify server configuration is ready for use.
pub fn verify_config(config: &ServerConfig) -> anyhow::Result<()> {
    if config.sheets.sheet_id.is_empty() {
        anyhow::bail!(
            "No spreadsheet id found in configuration.\n\
             Set [sheets].sheet_id to the directory spreadsheet id."
        );
    }
    if config.sheets.api_key.is_empty() {
        anyhow::bail!("[sheets].api_key is empty in configuration.");
    }
    if config.sheets.users_sheet.is_empty() || config.sheets.bots_sheet.is_empty() {
        anyhow::bail!("Sheet tab names must not be empty.");
    }
    Ok(())
}
