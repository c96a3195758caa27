use async_trait::async_trait;

use crate::error::SheetError;
use crate::sheet::Sheet;

/// A source of named tabular sheets.
///
/// The production implementation is [`crate::SheetsClient`]; tests inject
/// canned sheets instead. Fetches are full-table reads — there is no
/// pagination and no write-back.
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Fetch the sheet with the given tab name.
    ///
    /// A tab that exists but has no cells comes back as an empty [`Sheet`];
    /// transport and decode failures are errors.
    async fn fetch(&self, sheet_name: &str) -> Result<Sheet, SheetError>;
}
