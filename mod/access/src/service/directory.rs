use tracing::warn;

use crate::model::{BotDirectory, UserDirectory};
use crate::service::{AccessError, AccessService};

impl AccessService {
    /// Load and decode the Users sheet.
    ///
    /// Fails soft on an unreachable remote, an empty tab, or a missing
    /// `Email` column: those log a diagnostic and yield an empty directory,
    /// so a subsequent login uniformly fails. A Users sheet that has an
    /// `Email` column but lacks `Password` or `AllowedBots` is a
    /// deployment problem, reported as a distinct configuration error.
    pub async fn load_users(&self) -> Result<UserDirectory, AccessError> {
        let name = &self.config.users_sheet;
        let sheet = match self.source.fetch(name).await {
            Ok(sheet) => sheet,
            Err(e) => {
                warn!(sheet = %name, "users fetch failed ({}); check sheet sharing permissions and tab names", e);
                return Ok(UserDirectory::default());
            }
        };

        if sheet.is_empty() {
            warn!(sheet = %name, "users sheet returned no rows; check sheet sharing permissions and tab names");
            return Ok(UserDirectory::default());
        }

        match UserDirectory::from_sheet(&sheet) {
            Ok(dir) => Ok(dir),
            Err(missing) if missing.column == "Email" => {
                warn!(sheet = %name, "{}", missing);
                Ok(UserDirectory::default())
            }
            Err(missing) => Err(AccessError::Config(missing.to_string())),
        }
    }

    /// Load and decode the Bots sheet.
    ///
    /// Always fails soft: any failure logs a diagnostic and yields an
    /// empty directory, so the selection UI simply has nothing to offer.
    pub async fn load_bots(&self) -> BotDirectory {
        let name = &self.config.bots_sheet;
        let sheet = match self.source.fetch(name).await {
            Ok(sheet) => sheet,
            Err(e) => {
                warn!(sheet = %name, "bots fetch failed ({}); check sheet sharing permissions and tab names", e);
                return BotDirectory::default();
            }
        };

        if sheet.is_empty() {
            warn!(sheet = %name, "bots sheet returned no rows; check sheet sharing permissions and tab names");
            return BotDirectory::default();
        }

        match BotDirectory::from_sheet(&sheet) {
            Ok(dir) => dir,
            Err(missing) => {
                warn!(sheet = %name, "{}", missing);
                BotDirectory::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::service::testutil::{test_service, StaticSource};
    use crate::service::AccessError;

    #[tokio::test]
    async fn test_unreachable_source_yields_empty_users() {
        // No sheets seeded: every fetch errors.
        let svc = test_service(StaticSource::new());
        let users = svc.load_users().await.unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_zero_row_users_sheet_yields_empty() {
        let svc = test_service(StaticSource::new().with_sheet("Users", vec![]));
        let users = svc.load_users().await.unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_missing_email_column_fails_soft() {
        let svc = test_service(
            StaticSource::new().with_sheet("Users", vec![vec!["Password", "AllowedBots"]]),
        );
        let users = svc.load_users().await.unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_missing_password_column_is_config_error() {
        let svc = test_service(
            StaticSource::new().with_sheet(
                "Users",
                vec![vec!["Email", "AllowedBots"], vec!["a@x.com", "b1"]],
            ),
        );
        let err = svc.load_users().await.unwrap_err();
        assert!(matches!(err, AccessError::Config(_)));
    }

    #[tokio::test]
    async fn test_missing_botid_column_yields_empty_bots() {
        let svc = test_service(
            StaticSource::new().with_sheet(
                "Bots",
                vec![vec!["BotName", "BotURL"], vec!["Bot One", "http://x/1"]],
            ),
        );
        assert!(svc.load_bots().await.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_source_yields_empty_bots() {
        let svc = test_service(StaticSource::new());
        assert!(svc.load_bots().await.is_empty());
    }
}
