//! Extension traits for the catalog types.
//!
//! These add helpers (`.full_name()`, `.mention_html()`, `.command()`, ...)
//! that are not part of the Bot API schema but come up in nearly every bot.

use chrono::{DateTime, Utc};

use crate::types::{
    chat::{Chat, ChatKind},
    message::{entity::MessageEntityKind, ReplyMessage},
    user::User,
};

// ===========================================================================
// UserExt
// ===========================================================================

/// Convenience methods on [`User`].
pub trait UserExt {
    /// First and last name separated by a space.
    fn full_name(&self) -> String;

    /// `tg://user?id=` link opening the user's profile.
    fn url(&self) -> String;

    /// HTML link mentioning the user, for messages sent with
    /// `parse_mode = HTML`.
    fn mention_html(&self) -> String;
}

impl UserExt for User {
    fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }

    fn url(&self) -> String {
        format!("tg://user?id={}", self.id)
    }

    fn mention_html(&self) -> String {
        format!("<a href=\"{}\">{}</a>", self.url(), escape_html(&self.full_name()))
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// ===========================================================================
// MessageExt
// ===========================================================================

/// A `/command@bot args` invocation at the start of a message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CommandInvocation<'a> {
    /// Command name without the leading slash.
    pub name: &'a str,
    /// Bot username the command was addressed to, if any.
    pub bot: Option<&'a str>,
    /// Everything after the command, trimmed.
    pub args: &'a str,
}

/// Convenience methods on [`ReplyMessage`] (and so on `Message`).
pub trait MessageExt {
    fn date_time(&self) -> Option<DateTime<Utc>>;

    fn edit_date_time(&self) -> Option<DateTime<Utc>>;

    /// The bot command the message text starts with.
    fn command(&self) -> Option<CommandInvocation<'_>>;

    /// Public link to the message, for supergroups and channels with a
    /// username.
    fn url(&self) -> Option<String>;
}

impl MessageExt for ReplyMessage {
    fn date_time(&self) -> Option<DateTime<Utc>> {
        self.date.to_datetime()
    }

    fn edit_date_time(&self) -> Option<DateTime<Utc>> {
        self.edit_date?.to_datetime()
    }

    fn command(&self) -> Option<CommandInvocation<'_>> {
        let text = self.text()?;
        let entity = self
            .entities()
            .iter()
            .find(|e| e.offset == 0 && e.kind == MessageEntityKind::BotCommand)?;
        let command = entity.extract(text)?;
        let args = text.get(command.len()..).unwrap_or_default().trim();

        let command = command.strip_prefix('/')?;
        let (name, bot) = match command.split_once('@') {
            Some((name, bot)) => (name, Some(bot)),
            None => (command, None),
        };

        Some(CommandInvocation { name, bot, args })
    }

    fn url(&self) -> Option<String> {
        let username = match &self.chat.kind {
            ChatKind::Supergroup { username, .. } | ChatKind::Channel { username, .. } => {
                username.as_deref()?
            }
            ChatKind::Private { .. } | ChatKind::Group { .. } => return None,
        };
        Some(format!("https://t.me/{username}/{}", self.message_id))
    }
}

// ===========================================================================
// ChatExt
// ===========================================================================

/// Convenience methods on [`Chat`].
pub trait ChatExt {
    /// `https://t.me/<username>` for chats with a public username.
    fn url(&self) -> Option<String>;
}

impl ChatExt for Chat {
    fn url(&self) -> Option<String> {
        self.username().map(|name| format!("https://t.me/{name}"))
    }
}
