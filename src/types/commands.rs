//! Bot commands, their scopes, the menu button and webhook status.

use serde::{Deserialize, Serialize};

use crate::closure::{fields, variants};
use crate::types::{
    id::{marker::UserMarker, ChatId, Id},
    markup::WebAppInfo,
    util::UnixTime,
};

/// A command shown in the bot's command list.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct BotCommand {
    /// 1-32 characters: lowercase letters, digits and underscores.
    pub command: String,
    /// 1-256 characters.
    pub description: String,
}

impl BotCommand {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Command scopes
// ---------------------------------------------------------------------------

/// The set of users a command list applies to.
///
/// When several scopes match, the most specific one wins:
/// `ChatMember`, `ChatAdministrators`, `Chat`, then the `All*` scopes and
/// finally `Default`.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BotCommandScope {
    Default(ScopeDefault),
    AllPrivateChats(ScopeAllPrivateChats),
    AllGroupChats(ScopeAllGroupChats),
    AllChatAdministrators(ScopeAllChatAdministrators),
    Chat(ScopeChat),
    ChatAdministrators(ScopeChatAdministrators),
    ChatMember(ScopeChatMember),
}

impl Default for BotCommandScope {
    fn default() -> Self {
        BotCommandScope::Default(ScopeDefault {})
    }
}

impl BotCommandScope {
    pub fn chat(chat_id: impl Into<ChatId>) -> Self {
        BotCommandScope::Chat(ScopeChat {
            chat_id: chat_id.into(),
        })
    }

    pub fn chat_member(chat_id: impl Into<ChatId>, user_id: Id<UserMarker>) -> Self {
        BotCommandScope::ChatMember(ScopeChatMember {
            chat_id: chat_id.into(),
            user_id,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ScopeDefault {}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ScopeAllPrivateChats {}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ScopeAllGroupChats {}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ScopeAllChatAdministrators {}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ScopeChat {
    pub chat_id: ChatId,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ScopeChatAdministrators {
    pub chat_id: ChatId,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ScopeChatMember {
    pub chat_id: ChatId,
    pub user_id: Id<UserMarker>,
}

fields!(ScopeDefault { required: ["type"], optional: [] });
fields!(ScopeAllPrivateChats { required: ["type"], optional: [] });
fields!(ScopeAllGroupChats { required: ["type"], optional: [] });
fields!(ScopeAllChatAdministrators { required: ["type"], optional: [] });
fields!(ScopeChat { required: ["type", "chat_id"], optional: [] });
fields!(ScopeChatAdministrators { required: ["type", "chat_id"], optional: [] });
fields!(ScopeChatMember { required: ["type", "chat_id", "user_id"], optional: [] });

variants!(BotCommandScope {
    Default => ScopeDefault,
    AllPrivateChats => ScopeAllPrivateChats,
    AllGroupChats => ScopeAllGroupChats,
    AllChatAdministrators => ScopeAllChatAdministrators,
    Chat => ScopeChat,
    ChatAdministrators => ScopeChatAdministrators,
    ChatMember => ScopeChatMember,
});

// ---------------------------------------------------------------------------
// Menu button
// ---------------------------------------------------------------------------

/// The button next to the input field in private chats.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuButton {
    /// Opens the bot's command list.
    Commands,
    /// Launches a Web App.
    WebApp { text: String, web_app: WebAppInfo },
    /// No specific value set.
    #[default]
    Default,
}

// ---------------------------------------------------------------------------
// Webhook
// ---------------------------------------------------------------------------

/// Current webhook status, as returned by `getWebhookInfo`.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct WebhookInfo {
    /// Empty if no webhook is set up.
    pub url: String,
    pub has_custom_certificate: bool,
    pub pending_update_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error_date: Option<UnixTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_synchronization_error_date: Option<UnixTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<String>>,
}

impl WebhookInfo {
    pub fn is_set(&self) -> bool {
        !self.url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::closure::{validate, Access, Closed, ClosureError, Slot, Variants};
    use serde_json::json;

    #[test]
    fn scope_tags() {
        assert_eq!(
            serde_json::to_value(BotCommandScope::default()).unwrap(),
            json!({ "type": "default" })
        );
        assert_eq!(
            serde_json::to_value(BotCommandScope::chat_member("@group", Id::new(9))).unwrap(),
            json!({ "type": "chat_member", "chat_id": "@group", "user_id": 9 })
        );

        let scope: BotCommandScope =
            serde_json::from_value(json!({ "type": "chat_administrators", "chat_id": -100 }))
                .unwrap();
        assert_eq!(
            scope,
            BotCommandScope::ChatAdministrators(ScopeChatAdministrators {
                chat_id: ChatId::from(-100_i64),
            })
        );
    }

    #[test]
    fn closed_scopes() {
        let default = BotCommandScope::closed_shape_of("Default");
        assert_eq!(default.slot("type"), Some(Slot::Required));
        assert_eq!(default.slot("chat_id"), Some(Slot::Absent));
        assert_eq!(default.slot("user_id"), Some(Slot::Absent));

        let closed = Closed::new(BotCommandScope::chat(42_i64)).unwrap();
        assert_eq!(closed.get("chat_id"), Some(Access::Present(&json!(42))));
        assert_eq!(closed.get("user_id"), Some(Access::Absent));
    }

    #[test]
    fn foreign_user_id_is_rejected() {
        let raw = json!({ "type": "chat", "chat_id": 1, "user_id": 2 });
        assert!(matches!(
            validate::<BotCommandScope>(&raw),
            Err(ClosureError::ForeignField { variant: "Chat", .. })
        ));
    }

    #[test]
    fn menu_button() {
        let button = MenuButton::WebApp {
            text: "Open".to_owned(),
            web_app: WebAppInfo {
                url: "https://example.com".to_owned(),
            },
        };
        assert_eq!(
            serde_json::to_value(&button).unwrap(),
            json!({ "type": "web_app", "text": "Open", "web_app": { "url": "https://example.com" } })
        );
        let commands: MenuButton = serde_json::from_value(json!({ "type": "commands" })).unwrap();
        assert_eq!(commands, MenuButton::Commands);
    }
}
