use serde::{Deserialize, Serialize};

use crate::types::{
    media::{Animation, PhotoSize},
    message::entity::MessageEntity,
    user::User,
};

/// A game. Use BotFather to create and edit games.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Game {
    pub title: String,
    pub description: String,
    pub photo: Vec<PhotoSize>,
    /// Shown in the game message, up to 4096 characters.
    ///
    /// Can be edited automatically by `setGameScore` or manually with
    /// `editMessageText`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_entities: Option<Vec<MessageEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
}

/// One row of a game's high score table.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct GameHighScore {
    pub position: u32,
    pub user: User,
    pub score: i64,
}
