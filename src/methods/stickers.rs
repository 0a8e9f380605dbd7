//! Stickers and sticker sets.
//!
//! A set holds static (`.png`), animated (`.tgs`) or video (`.webm`)
//! stickers. The set methods take exactly one of the three file arguments.

use crate::methods::method;
use crate::types::{
    id::{
        marker::{MessageMarker, UserMarker},
        ChatId, Id,
    },
    input::InputFile,
    markup::ReplyMarkup,
    media::File,
    message::Message,
    stickers::{MaskPosition, StickerSet},
    util::True,
};

method! {
    /// Send a static .webp, animated .tgs or video .webm sticker.
    SendSticker("sendSticker") -> Message {
        required {
            chat_id: ChatId,
            sticker: InputFile,
        }
        optional {
            disable_notification: bool,
            protect_content: bool,
            reply_to_message_id: Id<MessageMarker>,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
        uploads [sticker]
    }
}

method! {
    GetStickerSet("getStickerSet") -> StickerSet {
        required {
            name: String,
        }
        optional {}
    }
}

method! {
    /// Upload a .png file for later use in set methods.
    UploadStickerFile("uploadStickerFile") -> File {
        required {
            /// Owner of the sticker set.
            user_id: Id<UserMarker>,
            /// At most 512 kB, 512 pixels on one side and at most 512 on
            /// the other.
            png_sticker: InputFile,
        }
        optional {}
        uploads [png_sticker]
    }
}

method! {
    /// Create a set owned by a user. The bot can edit the sets it creates.
    CreateNewStickerSet("createNewStickerSet") -> True {
        required {
            user_id: Id<UserMarker>,
            /// Must end in `_by_<bot username>`.
            name: String,
            /// 1-64 characters.
            title: String,
            /// Emoji matching the first sticker.
            emojis: String,
        }
        optional {
            png_sticker: InputFile,
            tgs_sticker: InputFile,
            webm_sticker: InputFile,
            contains_masks: bool,
            mask_position: MaskPosition,
        }
        uploads [png_sticker, tgs_sticker, webm_sticker]
    }
}

method! {
    /// Add a sticker to a set created by the bot.
    ///
    /// Static sets hold up to 120 stickers, animated and video sets up to
    /// 50.
    AddStickerToSet("addStickerToSet") -> True {
        required {
            user_id: Id<UserMarker>,
            name: String,
            emojis: String,
        }
        optional {
            png_sticker: InputFile,
            tgs_sticker: InputFile,
            webm_sticker: InputFile,
            mask_position: MaskPosition,
        }
        uploads [png_sticker, tgs_sticker, webm_sticker]
    }
}

method! {
    SetStickerPositionInSet("setStickerPositionInSet") -> True {
        required {
            /// File id of the sticker.
            sticker: String,
            /// Zero-based.
            position: u32,
        }
        optional {}
    }
}

method! {
    DeleteStickerFromSet("deleteStickerFromSet") -> True {
        required {
            sticker: String,
        }
        optional {}
    }
}

method! {
    /// Set the thumbnail of a set. Animated thumbnails are only allowed
    /// for animated and video sets.
    SetStickerSetThumb("setStickerSetThumb") -> True {
        required {
            name: String,
            user_id: Id<UserMarker>,
        }
        optional {
            /// Omitted to drop the thumbnail and use the first sticker.
            thumb: InputFile,
        }
        uploads [thumb]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::methods::Method;
    use serde_json::json;

    #[test]
    fn new_set_with_png_upload() {
        let call = CreateNewStickerSet::new(7_i64, "cats_by_botgram_bot", "Cats", "🐱")
            .png_sticker(InputFile::bytes("cat.png", vec![0_u8; 16]));
        let uploads = call.uploads();
        assert_eq!(uploads.len(), 1);

        let value = serde_json::to_value(&call).unwrap();
        assert_eq!(value["png_sticker"], json!(uploads[0].attach_ref()));
        assert!(value.get("tgs_sticker").is_none());
        assert!(value.get("contains_masks").is_none());
    }

    #[test]
    fn sticker_by_file_id() {
        let call = SendSticker::new(1_i64, InputFile::file_id("CAACAgIAAxkBAAE"));
        assert!(call.uploads().is_empty());
        assert_eq!(SendSticker::NAME, "sendSticker");
    }

    #[test]
    fn position_in_set() {
        assert_eq!(
            serde_json::to_value(SetStickerPositionInSet::new("CAAC", 0_u32)).unwrap(),
            json!({ "sticker": "CAAC", "position": 0 })
        );
    }
}
