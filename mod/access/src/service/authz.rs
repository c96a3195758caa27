use std::collections::HashSet;

use crate::model::{BotDirectory, BotRecord, UserRecord};
use crate::service::{AccessError, AccessService};

impl AccessService {
    /// The subset of the bot directory the user may open, in sheet order.
    ///
    /// Membership is tested against BotID, never the display name. An
    /// allow-list with no valid tokens yields an empty subset.
    pub fn authorized_bots(&self, user: &UserRecord, bots: &BotDirectory) -> Vec<BotRecord> {
        let allowed: HashSet<String> = user.allowed_ids().into_iter().collect();
        bots.records()
            .iter()
            .filter(|b| allowed.contains(&b.id))
            .cloned()
            .collect()
    }

    /// Resolve a selected display name to its target URL, within the
    /// user's authorized subset only. First match wins on a duplicated
    /// name.
    pub fn resolve_bot_url(
        &self,
        user: &UserRecord,
        bot_name: &str,
        bots: &BotDirectory,
    ) -> Result<String, AccessError> {
        self.authorized_bots(user, bots)
            .into_iter()
            .find(|b| b.name == bot_name)
            .map(|b| b.url)
            .ok_or_else(|| AccessError::NotFound(format!("bot '{}'", bot_name)))
    }

    /// Fetch the Bots sheet and list the user's authorized subset.
    pub async fn list_bots(&self, user: &UserRecord) -> Vec<BotRecord> {
        let bots = self.load_bots().await;
        self.authorized_bots(user, &bots)
    }

    /// Fetch the Bots sheet and resolve a selected bot to its URL.
    pub async fn open_bot(&self, user: &UserRecord, bot_name: &str) -> Result<String, AccessError> {
        let bots = self.load_bots().await;
        self.resolve_bot_url(user, bot_name, &bots)
    }
}
