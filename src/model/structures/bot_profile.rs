use crate::{api::api_structs::BotUser, model::constants::TWO_WEEKS, utils::serde_utils::is_default};
use serde::{Deserialize, Serialize};

/// Information about a bot which either never changes or does not change very often.
/// Profiles are kept for every bot ever seen, whether or not it is currently online.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotProfile {
    pub name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub flair: String,
    /// Country or region flag code
    #[serde(skip_serializing_if = "is_default")]
    pub flag: String,
    /// Seconds since epoch
    #[serde(skip_serializing_if = "is_default")]
    pub created: i64,
    /// Seconds since epoch
    #[serde(skip_serializing_if = "is_default")]
    pub last_seen: i64,
    #[serde(skip_serializing_if = "is_default")]
    pub patron: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub tos_violation: bool,
    /// First appearance during this generation. Never persisted.
    #[serde(skip)]
    pub new: bool,
    /// Present in the current feed. Never persisted.
    #[serde(skip)]
    pub online: bool
}

impl BotProfile {
    /// Creates a profile for a bot in the current feed.
    /// The bot is assumed to be new; merging clears the flag for bots which were already known.
    pub fn from_bot_user(bot_user: &BotUser, current_time: i64) -> BotProfile {
        BotProfile {
            name: bot_user.username.clone(),
            flair: bot_user.flair.clone(),
            flag: bot_user.profile.flag.clone(),
            created: bot_user.created_at / 1000,
            last_seen: bot_user.seen_at.map_or(current_time, |seen_at| seen_at / 1000),
            patron: bot_user.patron,
            tos_violation: bot_user.tos_violation,
            new: true,
            online: true
        }
    }

    /// The profile as it should look when it was already known and is also in the current feed.
    pub fn merged_copy(&self) -> BotProfile {
        BotProfile {
            new: false,
            online: true,
            ..self.clone()
        }
    }

    /// Seen within the last two weeks and in good standing.
    pub fn is_active(&self, current_time: i64) -> bool {
        !self.tos_violation && current_time - self.last_seen <= TWO_WEEKS
    }
}
