use crate::model::{Session, UserDirectory, UserRecord};
use crate::service::{AccessError, AccessService};

impl AccessService {
    /// Match credentials against a loaded user directory.
    ///
    /// Email matching is trim+lowercase-insensitive on both sides; the
    /// password check is exact string equality against the stored value.
    /// No-such-email and wrong-password both come back as [`AccessError::Denied`].
    pub fn authenticate(
        &self,
        email: &str,
        password: &str,
        users: &UserDirectory,
    ) -> Result<UserRecord, AccessError> {
        let user = users.find(email).ok_or(AccessError::Denied)?;
        if user.password != password {
            return Err(AccessError::Denied);
        }
        Ok(user.clone())
    }

    /// Full login flow: fetch the Users sheet, authenticate, open a session.
    ///
    /// Returns the session and the matched record. An unavailable or
    /// schema-broken directory degrades into the same uniform denial a bad
    /// password gets, except for the distinct configuration error (missing
    /// Password/AllowedBots columns).
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AccessError> {
        let users = self.load_users().await?;
        let user = self.authenticate(email, password, &users)?;
        Ok(self.create_session(user))
    }
}
