//! Keyboards attached to messages.
//!
//! The API documents several button fields as "exactly one of" (inline
//! buttons) or "at most one of" (reply keyboard buttons). Both are modelled
//! as enums and enforced when decoding.

use serde::{de::Error as DeError, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::types::{
    media::PollType,
    util::{exactly_one_key, True, ValueExt},
};

// ---------------------------------------------------------------------------
// Inline keyboards
// ---------------------------------------------------------------------------

/// An inline keyboard shown right below the message it belongs to.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct InlineKeyboardMarkup {
    /// Rows of buttons.
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

/// A button of an inline keyboard.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    #[serde(flatten)]
    pub kind: InlineKeyboardButtonKind,
}

/// What pressing an [`InlineKeyboardButton`] does.
///
/// Serialized as the single field carrying it, e.g. `{"url": "..."}`.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineKeyboardButtonKind {
    Url(String),
    /// Up to 64 bytes sent back in a callback query.
    CallbackData(String),
    WebApp(WebAppInfo),
    LoginUrl(LoginUrl),
    /// Prompt the user to pick a chat and insert the bot's username and
    /// this query in its input field.
    SwitchInlineQuery(String),
    SwitchInlineQueryCurrentChat(String),
    /// Launch the game. Must be the first button of the first row.
    CallbackGame(CallbackGame),
    /// Pay button. Must be the first button of the first row.
    Pay(True),
}

impl InlineKeyboardButtonKind {
    const KEYS: &'static [&'static str] = &[
        "url",
        "callback_data",
        "web_app",
        "login_url",
        "switch_inline_query",
        "switch_inline_query_current_chat",
        "callback_game",
        "pay",
    ];
}

impl<'de> Deserialize<'de> for InlineKeyboardButton {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut map = Map::<String, Value>::deserialize(deserializer)?;
        let key = exactly_one_key(&map, InlineKeyboardButtonKind::KEYS).map_err(D::Error::custom)?;

        let text = map
            .remove("text")
            .ok_or_else(|| D::Error::missing_field("text"))?
            .deserialize_into()
            .map_err(D::Error::custom)?;

        let mut action = Map::new();
        if let Some(value) = map.remove(key) {
            action.insert(key.to_owned(), value);
        }
        let kind = Value::Object(action)
            .deserialize_into()
            .map_err(D::Error::custom)?;

        Ok(Self { text, kind })
    }
}

impl InlineKeyboardButton {
    pub fn new(text: impl Into<String>, kind: InlineKeyboardButtonKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// A button that logs the user in on a website via Telegram.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct LoginUrl {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_write_access: Option<bool>,
}

/// Placeholder; holds no information.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct CallbackGame {}

/// A Web App to open.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct WebAppInfo {
    /// HTTPS URL of the Web App.
    pub url: String,
}

// ---------------------------------------------------------------------------
// Reply keyboards
// ---------------------------------------------------------------------------

/// A custom keyboard with reply options.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resize_keyboard: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_time_keyboard: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_field_placeholder: Option<String>,
    /// Show the keyboard only to mentioned users and the sender of the
    /// replied-to message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

/// A button of a reply keyboard. Without a request it just sends its text.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct KeyboardButton {
    pub text: String,
    #[serde(flatten)]
    pub request: Option<KeyboardButtonRequest>,
}

/// What a [`KeyboardButton`] asks the user for, at most one per button.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyboardButtonRequest {
    #[serde(rename = "request_contact")]
    Contact(True),
    #[serde(rename = "request_location")]
    Location(True),
    #[serde(rename = "request_poll")]
    Poll(KeyboardButtonPollType),
    WebApp(WebAppInfo),
}

impl KeyboardButtonRequest {
    const KEYS: &'static [&'static str] =
        &["request_contact", "request_location", "request_poll", "web_app"];
}

impl<'de> Deserialize<'de> for KeyboardButton {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut map = Map::<String, Value>::deserialize(deserializer)?;

        let text = map
            .remove("text")
            .ok_or_else(|| D::Error::missing_field("text"))?
            .deserialize_into()
            .map_err(D::Error::custom)?;

        let any_set = KeyboardButtonRequest::KEYS
            .iter()
            .any(|key| map.get(*key).is_some_and(|v| !v.is_null()));
        let request = if any_set {
            let key = exactly_one_key(&map, KeyboardButtonRequest::KEYS).map_err(D::Error::custom)?;
            let mut request = Map::new();
            if let Some(value) = map.remove(key) {
                request.insert(key.to_owned(), value);
            }
            Some(
                Value::Object(request)
                    .deserialize_into()
                    .map_err(D::Error::custom)?,
            )
        } else {
            None
        };

        Ok(Self { text, request })
    }
}

impl KeyboardButton {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            request: None,
        }
    }

    #[must_use]
    pub fn request(mut self, request: KeyboardButtonRequest) -> Self {
        self.request = Some(request);
        self
    }
}

/// Restricts the poll a `request_poll` button lets the user create.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct KeyboardButtonPollType {
    /// Any type when unset.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<PollType>,
}

/// Remove the current custom keyboard.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ReplyKeyboardRemove {
    pub remove_keyboard: True,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

/// Show a reply interface as if the user selected "Reply".
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ForceReply {
    pub force_reply: True,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_field_placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

/// Any of the markups accepted by the `reply_markup` argument.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
    InlineKeyboard(InlineKeyboardMarkup),
    ReplyKeyboard(ReplyKeyboardMarkup),
    Remove(ReplyKeyboardRemove),
    ForceReply(ForceReply),
}

impl From<InlineKeyboardMarkup> for ReplyMarkup {
    fn from(markup: InlineKeyboardMarkup) -> Self {
        ReplyMarkup::InlineKeyboard(markup)
    }
}

impl From<ReplyKeyboardMarkup> for ReplyMarkup {
    fn from(markup: ReplyKeyboardMarkup) -> Self {
        ReplyMarkup::ReplyKeyboard(markup)
    }
}

impl From<ReplyKeyboardRemove> for ReplyMarkup {
    fn from(markup: ReplyKeyboardRemove) -> Self {
        ReplyMarkup::Remove(markup)
    }
}

impl From<ForceReply> for ReplyMarkup {
    fn from(markup: ForceReply) -> Self {
        ReplyMarkup::ForceReply(markup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn inline_button_single_action() {
        let button: InlineKeyboardButton =
            serde_json::from_value(json!({ "text": "Open", "url": "https://t.me" })).unwrap();
        assert_eq!(
            button.kind,
            InlineKeyboardButtonKind::Url("https://t.me".to_owned())
        );
        assert_eq!(
            serde_json::to_value(&button).unwrap(),
            json!({ "text": "Open", "url": "https://t.me" })
        );
    }

    #[test]
    fn inline_button_requires_exactly_one_action() {
        let none = serde_json::from_value::<InlineKeyboardButton>(json!({ "text": "?" }));
        assert!(none.is_err());

        let both = serde_json::from_value::<InlineKeyboardButton>(json!({
            "text": "?",
            "url": "https://t.me",
            "callback_data": "x"
        }));
        let err = both.unwrap_err().to_string();
        assert!(err.contains("both"), "{err}");
    }

    #[test]
    fn pay_button_must_be_true() {
        let pay: InlineKeyboardButton =
            serde_json::from_value(json!({ "text": "Pay", "pay": true })).unwrap();
        assert_eq!(pay.kind, InlineKeyboardButtonKind::Pay(True::default()));

        assert!(
            serde_json::from_value::<InlineKeyboardButton>(json!({ "text": "Pay", "pay": false }))
                .is_err()
        );
    }

    #[test]
    fn keyboard_button_request_is_optional() {
        let plain: KeyboardButton = serde_json::from_value(json!({ "text": "Hi" })).unwrap();
        assert_eq!(plain, KeyboardButton::new("Hi"));
        assert_eq!(serde_json::to_value(&plain).unwrap(), json!({ "text": "Hi" }));

        let contact: KeyboardButton =
            serde_json::from_value(json!({ "text": "Share", "request_contact": true })).unwrap();
        assert_eq!(
            contact.request,
            Some(KeyboardButtonRequest::Contact(True::default()))
        );

        assert!(serde_json::from_value::<KeyboardButton>(json!({
            "text": "Both",
            "request_contact": true,
            "request_location": true
        }))
        .is_err());
    }

    #[test]
    fn poll_request_type() {
        let button = KeyboardButton::new("Quiz").request(KeyboardButtonRequest::Poll(
            KeyboardButtonPollType {
                kind: Some(PollType::Quiz),
            },
        ));
        assert_eq!(
            serde_json::to_value(&button).unwrap(),
            json!({ "text": "Quiz", "request_poll": { "type": "quiz" } })
        );
    }

    #[test]
    fn reply_markup_variants() {
        let remove: ReplyMarkup =
            serde_json::from_value(json!({ "remove_keyboard": true })).unwrap();
        assert!(matches!(remove, ReplyMarkup::Remove(_)));

        let force: ReplyMarkup = serde_json::from_value(json!({ "force_reply": true })).unwrap();
        assert!(matches!(force, ReplyMarkup::ForceReply(_)));

        let inline: ReplyMarkup = serde_json::from_value(json!({ "inline_keyboard": [] })).unwrap();
        assert!(matches!(inline, ReplyMarkup::InlineKeyboard(_)));
    }
}
