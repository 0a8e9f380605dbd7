//! The bot itself: identity, session, command list and menu button.

use crate::methods::method;
use crate::types::{
    chat::ChatAdministratorRights,
    commands::{BotCommand, BotCommandScope, MenuButton},
    id::{marker::ChatMarker, Id},
    user::User,
    util::True,
};

method! {
    /// Basic information about the bot.
    GetMe("getMe") -> User {
        required {}
        optional {}
    }
}

method! {
    /// Log out from the cloud Bot API server before moving to a local one.
    LogOut("logOut") -> True {
        required {}
        optional {}
    }
}

method! {
    /// Close the bot instance before moving it to another local server.
    Close("close") -> True {
        required {}
        optional {}
    }
}

method! {
    SetMyCommands("setMyCommands") -> True {
        required {
            /// At most 100 commands.
            commands: Vec<BotCommand>,
        }
        optional {
            scope: BotCommandScope,
            /// Two-letter ISO 639-1 code. Empty applies to all users in the
            /// scope without a dedicated list.
            language_code: String,
        }
    }
}

method! {
    /// The command list for a scope and language. Empty if none is set.
    GetMyCommands("getMyCommands") -> Vec<BotCommand> {
        required {}
        optional {
            scope: BotCommandScope,
            language_code: String,
        }
    }
}

method! {
    DeleteMyCommands("deleteMyCommands") -> True {
        required {}
        optional {
            scope: BotCommandScope,
            language_code: String,
        }
    }
}

method! {
    /// Change the menu button of a private chat, or the default one.
    SetChatMenuButton("setChatMenuButton") -> True {
        required {}
        optional {
            /// Private chat to change. Omitted for the default button.
            chat_id: Id<ChatMarker>,
            menu_button: MenuButton,
        }
    }
}

method! {
    GetChatMenuButton("getChatMenuButton") -> MenuButton {
        required {}
        optional {
            chat_id: Id<ChatMarker>,
        }
    }
}

method! {
    /// Rights suggested to users adding the bot as an administrator.
    SetMyDefaultAdministratorRights("setMyDefaultAdministratorRights") -> True {
        required {}
        optional {
            rights: ChatAdministratorRights,
            /// Channels instead of groups and supergroups.
            for_channels: bool,
        }
    }
}

method! {
    GetMyDefaultAdministratorRights("getMyDefaultAdministratorRights") -> ChatAdministratorRights {
        required {}
        optional {
            for_channels: bool,
        }
    }
}

method! {
    /// Answer a callback query sent from an inline keyboard.
    ///
    /// The client shows a progress bar until the query is answered.
    AnswerCallbackQuery("answerCallbackQuery") -> True {
        required {
            callback_query_id: String,
        }
        optional {
            /// 0-200 characters, shown as a notification.
            text: String,
            /// Show an alert instead of a notification.
            show_alert: bool,
            /// Opened by the client. Only game and `t.me/bot?start=` URLs.
            url: String,
            /// Seconds the answer may be cached client-side.
            cache_time: u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::methods::{Method, Ret};
    use serde_json::json;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(Ret<GetMe>, User);
    assert_type_eq_all!(Ret<GetMyCommands>, Vec<BotCommand>);
    assert_type_eq_all!(Ret<LogOut>, True);

    #[test]
    fn parameterless_methods_send_empty_objects() {
        assert_eq!(serde_json::to_value(GetMe::new()).unwrap(), json!({}));
        assert_eq!(GetMe::NAME, "getMe");
        assert_eq!(Close::NAME, "close");
    }

    #[test]
    fn commands_with_scope() {
        let call = SetMyCommands::new(vec![BotCommand::new("start", "Start the bot")])
            .scope(BotCommandScope::chat(-100_i64))
            .language_code("en");
        assert_eq!(
            serde_json::to_value(&call).unwrap(),
            json!({
                "commands": [{ "command": "start", "description": "Start the bot" }],
                "scope": { "type": "chat", "chat_id": -100 },
                "language_code": "en"
            })
        );
    }

    #[test]
    fn answer_callback_query() {
        let call = AnswerCallbackQuery::new("4382bfdwdsb323b2d9")
            .text("Saved")
            .show_alert(true);
        assert_eq!(
            serde_json::to_value(&call).unwrap(),
            json!({
                "callback_query_id": "4382bfdwdsb323b2d9",
                "text": "Saved",
                "show_alert": true
            })
        );
    }

    #[test]
    fn menu_button_for_chat() {
        let call = SetChatMenuButton::new()
            .chat_id(Id::new(7))
            .menu_button(MenuButton::Commands);
        assert_eq!(
            serde_json::to_value(&call).unwrap(),
            json!({ "chat_id": 7, "menu_button": { "type": "commands" } })
        );
    }
}
