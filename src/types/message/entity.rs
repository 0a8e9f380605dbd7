//! Formatting entities inside message text.

use serde::{Deserialize, Serialize};

use crate::types::user::User;

/// One special entity in a text message: a hashtag, a link, bold text, ...
///
/// `offset` and `length` are measured in UTF-16 code units.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct MessageEntity {
    #[serde(flatten)]
    pub kind: MessageEntityKind,
    pub offset: u32,
    pub length: u32,
}

/// The kind of a [`MessageEntity`], tagged by `type`.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageEntityKind {
    Mention,
    Hashtag,
    Cashtag,
    BotCommand,
    Url,
    Email,
    PhoneNumber,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Spoiler,
    Code,
    Pre {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
    TextLink {
        url: String,
    },
    /// A mention of a user without a username.
    TextMention {
        user: User,
    },
    /// An entity type newer than this crate. Only the type name is kept.
    #[serde(untagged)]
    Unknown {
        #[serde(rename = "type")]
        kind: String,
    },
}

impl MessageEntity {
    pub fn new(kind: MessageEntityKind, offset: u32, length: u32) -> Self {
        Self {
            kind,
            offset,
            length,
        }
    }

    /// Slice the entity out of the text it belongs to.
    ///
    /// Returns `None` when the UTF-16 range doesn't fall on char boundaries
    /// of `text` or runs past its end.
    pub fn extract<'a>(&self, text: &'a str) -> Option<&'a str> {
        let end = self.offset.checked_add(self.length)?;
        let start = utf16_to_byte_offset(text, self.offset as usize)?;
        let end = utf16_to_byte_offset(text, end as usize)?;
        text.get(start..end)
    }
}

fn utf16_to_byte_offset(text: &str, utf16_offset: usize) -> Option<usize> {
    let mut units = 0;
    for (byte, ch) in text.char_indices() {
        if units == utf16_offset {
            return Some(byte);
        }
        units += ch.len_utf16();
    }
    (units == utf16_offset).then_some(text.len())
}

/// Formatting syntax of a message text or caption.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ParseMode {
    #[serde(rename = "MarkdownV2")]
    MarkdownV2,
    #[serde(rename = "HTML")]
    Html,
    /// Legacy mode kept for backward compatibility.
    #[serde(rename = "Markdown")]
    Markdown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unit_kinds_flatten() {
        let entity: MessageEntity =
            serde_json::from_value(json!({ "type": "bot_command", "offset": 0, "length": 6 }))
                .unwrap();
        assert_eq!(entity.kind, MessageEntityKind::BotCommand);
        assert_eq!(
            serde_json::to_value(&entity).unwrap(),
            json!({ "type": "bot_command", "offset": 0, "length": 6 })
        );
    }

    #[test]
    fn text_link_carries_url() {
        let entity: MessageEntity = serde_json::from_value(json!({
            "type": "text_link",
            "offset": 2,
            "length": 4,
            "url": "https://telegram.org"
        }))
        .unwrap();
        assert_eq!(
            entity.kind,
            MessageEntityKind::TextLink {
                url: "https://telegram.org".to_owned()
            }
        );
    }

    #[test]
    fn extract_counts_utf16_units() {
        // The emoji takes two UTF-16 code units.
        let text = "😀 /start now";
        let entity = MessageEntity::new(MessageEntityKind::BotCommand, 3, 6);
        assert_eq!(entity.extract(text), Some("/start"));

        let past_end = MessageEntity::new(MessageEntityKind::Bold, 10, 20);
        assert_eq!(past_end.extract(text), None);

        let overflowing = MessageEntity::new(MessageEntityKind::Bold, 1, u32::MAX);
        assert_eq!(overflowing.extract("hi"), None);
    }

    #[test]
    fn newer_kinds_keep_their_name() {
        let raw = json!({
            "type": "custom_emoji",
            "offset": 0,
            "length": 2,
            "custom_emoji_id": "5368324170671202286"
        });
        let entity: MessageEntity = serde_json::from_value(raw).unwrap();
        assert_eq!(
            entity.kind,
            MessageEntityKind::Unknown {
                kind: "custom_emoji".to_owned()
            }
        );
        assert_eq!(
            serde_json::to_value(&entity).unwrap(),
            json!({ "type": "custom_emoji", "offset": 0, "length": 2 })
        );
    }

    #[test]
    fn parse_mode_names() {
        assert_eq!(serde_json::to_string(&ParseMode::Html).unwrap(), "\"HTML\"");
        assert_eq!(
            serde_json::to_string(&ParseMode::MarkdownV2).unwrap(),
            "\"MarkdownV2\""
        );
    }
}
