//! Callback queries from inline keyboard buttons.

use serde::{Deserialize, Serialize};

use crate::types::{message::Message, user::User};

/// A press on a callback button of an inline keyboard.
///
/// Exactly one of `data` or `game_short_name` is sent, which is why the two
/// are folded into [`CallbackPayload`]. Payloads carrying both or neither are
/// rejected when decoding.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(try_from = "RawCallbackQuery")]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    /// Missing if the message is too old.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    /// Set when the button was attached to a message sent via the bot in
    /// inline mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,
    /// Identifies the chat the message was sent to, stable across
    /// callbacks. Useful for high scores in games.
    pub chat_instance: String,
    #[serde(flatten)]
    pub payload: CallbackPayload,
}

/// What a callback button carried.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CallbackPayload {
    /// `callback_data` of the button.
    Data(String),
    /// Short name of the game to launch.
    GameShortName(String),
}

impl CallbackQuery {
    pub fn data(&self) -> Option<&str> {
        match &self.payload {
            CallbackPayload::Data(data) => Some(data),
            CallbackPayload::GameShortName(_) => None,
        }
    }

    pub fn game_short_name(&self) -> Option<&str> {
        match &self.payload {
            CallbackPayload::GameShortName(name) => Some(name),
            CallbackPayload::Data(_) => None,
        }
    }
}

#[derive(Deserialize)]
struct RawCallbackQuery {
    id: String,
    from: User,
    #[serde(default)]
    message: Option<Message>,
    #[serde(default)]
    inline_message_id: Option<String>,
    chat_instance: String,
    #[serde(default)]
    data: Option<String>,
    #[serde(default)]
    game_short_name: Option<String>,
}

impl TryFrom<RawCallbackQuery> for CallbackQuery {
    type Error = &'static str;

    fn try_from(raw: RawCallbackQuery) -> Result<Self, Self::Error> {
        let payload = match (raw.data, raw.game_short_name) {
            (Some(data), None) => CallbackPayload::Data(data),
            (None, Some(name)) => CallbackPayload::GameShortName(name),
            (Some(_), Some(_)) => {
                return Err("callback query carries both `data` and `game_short_name`")
            }
            (None, None) => {
                return Err("callback query carries neither `data` nor `game_short_name`")
            }
        };

        Ok(Self {
            id: raw.id,
            from: raw.from,
            message: raw.message,
            inline_message_id: raw.inline_message_id,
            chat_instance: raw.chat_instance,
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn query(extra: Value) -> Value {
        let mut value = json!({
            "id": "4382bfdwdsb323b2d9",
            "from": { "id": 7, "is_bot": false, "first_name": "Ada" },
            "chat_instance": "-8157391245"
        });
        for (k, v) in extra.as_object().unwrap() {
            value[k] = v.clone();
        }
        value
    }

    #[test]
    fn data_payload() {
        let cb: CallbackQuery =
            serde_json::from_value(query(json!({ "data": "vote:1" }))).unwrap();
        assert_eq!(cb.data(), Some("vote:1"));
        assert_eq!(cb.game_short_name(), None);
        assert_eq!(
            serde_json::to_value(&cb).unwrap(),
            query(json!({ "data": "vote:1" }))
        );
    }

    #[test]
    fn game_payload() {
        let cb: CallbackQuery =
            serde_json::from_value(query(json!({ "game_short_name": "snake" }))).unwrap();
        assert_eq!(cb.payload, CallbackPayload::GameShortName("snake".to_owned()));
    }

    #[test]
    fn payload_is_exclusive() {
        let both = serde_json::from_value::<CallbackQuery>(query(json!({
            "data": "x",
            "game_short_name": "snake"
        })));
        assert!(both.unwrap_err().to_string().contains("both"));

        let neither = serde_json::from_value::<CallbackQuery>(query(json!({})));
        assert!(neither.unwrap_err().to_string().contains("neither"));
    }
}
