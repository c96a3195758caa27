pub mod bot;
pub mod session;
pub mod user;

pub use bot::{BotDirectory, BotRecord};
pub use session::{LoginRequest, LoginResponse, OpenBotRequest, Session};
pub use user::{normalize_email, UserDirectory, UserRecord};

/// A required column was absent from a sheet header.
///
/// Carries the columns that were actually present so the diagnostic can
/// name them, the way the operator sees the sheet.
#[derive(Debug, Clone)]
pub struct MissingColumn {
    pub column: &'static str,
    pub found: Vec<String>,
}

impl std::fmt::Display for MissingColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "sheet is missing required column '{}' (found: {:?})",
            self.column, self.found
        )
    }
}
