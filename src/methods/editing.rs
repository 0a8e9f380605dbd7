//! Updating and deleting sent messages.
//!
//! Edits address their message through a [`MessageTarget`]. Editing a chat
//! message returns the edited [`Message`](crate::types::message::Message),
//! editing an inline message returns `true`.

use crate::methods::{method, MessageOrTrue, MessageTarget};
use crate::types::{
    id::{marker::MessageMarker, ChatId, Id},
    input::InputMedia,
    markup::InlineKeyboardMarkup,
    media::Poll,
    message::entity::{MessageEntity, ParseMode},
    util::True,
};

method! {
    EditMessageText("editMessageText") -> MessageOrTrue {
        required {
            #[serde(flatten)]
            target: MessageTarget,
            text: String,
        }
        optional {
            parse_mode: ParseMode,
            entities: Vec<MessageEntity>,
            disable_web_page_preview: bool,
            reply_markup: InlineKeyboardMarkup,
        }
    }
}

method! {
    EditMessageCaption("editMessageCaption") -> MessageOrTrue {
        required {
            #[serde(flatten)]
            target: MessageTarget,
        }
        optional {
            /// Omitted to remove the caption.
            caption: String,
            parse_mode: ParseMode,
            caption_entities: Vec<MessageEntity>,
            reply_markup: InlineKeyboardMarkup,
        }
    }
}

method! {
    /// Replace the animation, audio, document, photo or video of a message.
    ///
    /// A new file can't be uploaded for inline messages; use a file id or
    /// a URL instead.
    EditMessageMedia("editMessageMedia") -> MessageOrTrue {
        required {
            #[serde(flatten)]
            target: MessageTarget,
            media: InputMedia,
        }
        optional {
            reply_markup: InlineKeyboardMarkup,
        }
        uploads [media]
    }
}

method! {
    EditMessageReplyMarkup("editMessageReplyMarkup") -> MessageOrTrue {
        required {
            #[serde(flatten)]
            target: MessageTarget,
        }
        optional {
            /// Omitted to remove the keyboard.
            reply_markup: InlineKeyboardMarkup,
        }
    }
}

method! {
    /// Stop a poll sent by the bot and get its final state.
    StopPoll("stopPoll") -> Poll {
        required {
            chat_id: ChatId,
            message_id: Id<MessageMarker>,
        }
        optional {
            reply_markup: InlineKeyboardMarkup,
        }
    }
}

method! {
    /// Delete a message.
    ///
    /// Only messages younger than 48 hours can be deleted, with exceptions
    /// for service messages and the bot's own outgoing messages.
    DeleteMessage("deleteMessage") -> True {
        required {
            chat_id: ChatId,
            message_id: Id<MessageMarker>,
        }
        optional {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::methods::Method;
    use crate::types::input::{InputFile, InputMediaPhoto};
    use serde_json::json;

    #[test]
    fn edit_text_of_chat_message() {
        let call = EditMessageText::new(MessageTarget::chat(-100_i64, 42_i64), "updated")
            .parse_mode(ParseMode::MarkdownV2);
        assert_eq!(
            serde_json::to_value(&call).unwrap(),
            json!({
                "chat_id": -100,
                "message_id": 42,
                "text": "updated",
                "parse_mode": "MarkdownV2"
            })
        );
    }

    #[test]
    fn remove_keyboard_of_inline_message() {
        let call = EditMessageReplyMarkup::new(MessageTarget::inline("BAAD"));
        assert_eq!(
            serde_json::to_value(&call).unwrap(),
            json!({ "inline_message_id": "BAAD" })
        );
    }

    #[test]
    fn edit_media_uploads() {
        let media = InputMedia::Photo(InputMediaPhoto::new(InputFile::bytes("new.jpg", vec![7_u8])));
        let call = EditMessageMedia::new(MessageTarget::chat(1_i64, 2_i64), media);
        let uploads = call.uploads();
        assert_eq!(uploads.len(), 1);
        assert_eq!(
            serde_json::to_value(&call).unwrap()["media"],
            json!({ "type": "photo", "media": uploads[0].attach_ref() })
        );
    }

    #[test]
    fn delete_message() {
        assert_eq!(DeleteMessage::NAME, "deleteMessage");
        assert_eq!(
            serde_json::to_value(DeleteMessage::new(3_i64, 4_i64)).unwrap(),
            json!({ "chat_id": 3, "message_id": 4 })
        );
    }
}
