//! Games.

use crate::methods::{method, MessageOrTrue, MessageTarget};
use crate::types::{
    games::GameHighScore,
    id::{
        marker::{ChatMarker, MessageMarker, UserMarker},
        Id,
    },
    markup::InlineKeyboardMarkup,
    message::Message,
};

method! {
    SendGame("sendGame") -> Message {
        required {
            /// Games can't be sent to channels, so only numeric ids.
            chat_id: Id<ChatMarker>,
            /// Set up via BotFather.
            game_short_name: String,
        }
        optional {
            disable_notification: bool,
            protect_content: bool,
            reply_to_message_id: Id<MessageMarker>,
            allow_sending_without_reply: bool,
            /// The first button must launch the game.
            reply_markup: InlineKeyboardMarkup,
        }
    }
}

method! {
    /// Set a user's score. Fails when the score is not greater than the
    /// current one, unless `force` is set.
    SetGameScore("setGameScore") -> MessageOrTrue {
        required {
            user_id: Id<UserMarker>,
            /// Non-negative.
            score: i64,
            #[serde(flatten)]
            target: MessageTarget,
        }
        optional {
            /// Allow decreasing the score, for fixing mistakes or banning
            /// cheaters.
            force: bool,
            /// Don't update the scoreboard in the game message.
            disable_edit_message: bool,
        }
    }
}

method! {
    /// The score of a user and several of their neighbours in the table.
    GetGameHighScores("getGameHighScores") -> Vec<GameHighScore> {
        required {
            user_id: Id<UserMarker>,
            #[serde(flatten)]
            target: MessageTarget,
        }
        optional {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::methods::Ret;
    use serde_json::json;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(Ret<SetGameScore>, MessageOrTrue);

    #[test]
    fn score_in_inline_message() {
        let call = SetGameScore::new(7_i64, 1200_i64, MessageTarget::inline("AgAAA"))
            .force(true);
        assert_eq!(
            serde_json::to_value(&call).unwrap(),
            json!({
                "user_id": 7,
                "score": 1200,
                "inline_message_id": "AgAAA",
                "force": true
            })
        );
    }

    #[test]
    fn high_scores_in_chat() {
        let call = GetGameHighScores::new(7_i64, MessageTarget::chat(7_i64, 15_i64));
        assert_eq!(
            serde_json::to_value(&call).unwrap(),
            json!({ "user_id": 7, "chat_id": 7, "message_id": 15 })
        );
        let scores: Ret<GetGameHighScores> = serde_json::from_value(json!([{
            "position": 1,
            "user": { "id": 7, "is_bot": false, "first_name": "Ada" },
            "score": 1200
        }]))
        .unwrap();
        assert_eq!(scores[0].score, 1200);
    }
}
