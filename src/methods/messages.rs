//! Sending messages and files.
//!
//! Most send methods share the trailing group of options
//! `disable_notification`, `protect_content`, `reply_to_message_id`,
//! `allow_sending_without_reply` and `reply_markup`.

use serde::{Deserialize, Serialize};

use crate::methods::{method, MessageOrTrue, MessageTarget};
use crate::types::{
    id::{
        marker::{MessageMarker, UserMarker},
        ChatId, Id,
    },
    input::{InputFile, InputMedia},
    markup::ReplyMarkup,
    media::{File, PollType},
    message::{
        entity::{MessageEntity, ParseMode},
        Message, MessageId,
    },
    user::UserProfilePhotos,
    util::{Float, True, UnixTime},
};

method! {
    SendMessage("sendMessage") -> Message {
        required {
            chat_id: ChatId,
            /// 1-4096 characters after entity parsing.
            text: String,
        }
        optional {
            parse_mode: ParseMode,
            /// Used instead of `parse_mode`.
            entities: Vec<MessageEntity>,
            disable_web_page_preview: bool,
            disable_notification: bool,
            protect_content: bool,
            reply_to_message_id: Id<MessageMarker>,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
    }
}

method! {
    ForwardMessage("forwardMessage") -> Message {
        required {
            chat_id: ChatId,
            from_chat_id: ChatId,
            message_id: Id<MessageMarker>,
        }
        optional {
            disable_notification: bool,
            protect_content: bool,
        }
    }
}

method! {
    /// Copy a message without a link to the original.
    ///
    /// Service messages and invoices can't be copied. Quiz polls only when
    /// the bot knows the correct answer.
    CopyMessage("copyMessage") -> MessageId {
        required {
            chat_id: ChatId,
            from_chat_id: ChatId,
            message_id: Id<MessageMarker>,
        }
        optional {
            /// Replaces the caption of the original.
            caption: String,
            parse_mode: ParseMode,
            caption_entities: Vec<MessageEntity>,
            disable_notification: bool,
            protect_content: bool,
            reply_to_message_id: Id<MessageMarker>,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
    }
}

method! {
    SendPhoto("sendPhoto") -> Message {
        required {
            chat_id: ChatId,
            /// At most 10 MB, width and height together at most 10000.
            photo: InputFile,
        }
        optional {
            caption: String,
            parse_mode: ParseMode,
            caption_entities: Vec<MessageEntity>,
            disable_notification: bool,
            protect_content: bool,
            reply_to_message_id: Id<MessageMarker>,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
        uploads [photo]
    }
}

method! {
    /// Send an .mp3 or .m4a file to be shown in the music player.
    SendAudio("sendAudio") -> Message {
        required {
            chat_id: ChatId,
            audio: InputFile,
        }
        optional {
            caption: String,
            parse_mode: ParseMode,
            caption_entities: Vec<MessageEntity>,
            /// Seconds.
            duration: u32,
            performer: String,
            title: String,
            /// JPEG, at most 200 kB and 320x320. Only uploads are accepted.
            thumb: InputFile,
            disable_notification: bool,
            protect_content: bool,
            reply_to_message_id: Id<MessageMarker>,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
        uploads [audio, thumb]
    }
}

method! {
    SendDocument("sendDocument") -> Message {
        required {
            chat_id: ChatId,
            document: InputFile,
        }
        optional {
            thumb: InputFile,
            caption: String,
            parse_mode: ParseMode,
            caption_entities: Vec<MessageEntity>,
            disable_content_type_detection: bool,
            disable_notification: bool,
            protect_content: bool,
            reply_to_message_id: Id<MessageMarker>,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
        uploads [document, thumb]
    }
}

method! {
    SendVideo("sendVideo") -> Message {
        required {
            chat_id: ChatId,
            video: InputFile,
        }
        optional {
            duration: u32,
            width: u32,
            height: u32,
            thumb: InputFile,
            caption: String,
            parse_mode: ParseMode,
            caption_entities: Vec<MessageEntity>,
            supports_streaming: bool,
            disable_notification: bool,
            protect_content: bool,
            reply_to_message_id: Id<MessageMarker>,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
        uploads [video, thumb]
    }
}

method! {
    /// Send a GIF or an H.264/MPEG-4 AVC video without sound.
    SendAnimation("sendAnimation") -> Message {
        required {
            chat_id: ChatId,
            animation: InputFile,
        }
        optional {
            duration: u32,
            width: u32,
            height: u32,
            thumb: InputFile,
            caption: String,
            parse_mode: ParseMode,
            caption_entities: Vec<MessageEntity>,
            disable_notification: bool,
            protect_content: bool,
            reply_to_message_id: Id<MessageMarker>,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
        uploads [animation, thumb]
    }
}

method! {
    /// Send an .ogg file encoded with OPUS to be shown as a voice message.
    SendVoice("sendVoice") -> Message {
        required {
            chat_id: ChatId,
            voice: InputFile,
        }
        optional {
            caption: String,
            parse_mode: ParseMode,
            caption_entities: Vec<MessageEntity>,
            duration: u32,
            disable_notification: bool,
            protect_content: bool,
            reply_to_message_id: Id<MessageMarker>,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
        uploads [voice]
    }
}

method! {
    /// Send a rounded square video of up to a minute.
    SendVideoNote("sendVideoNote") -> Message {
        required {
            chat_id: ChatId,
            /// Sending video notes by URL is not supported.
            video_note: InputFile,
        }
        optional {
            duration: u32,
            /// Width and height of the square.
            length: u32,
            thumb: InputFile,
            disable_notification: bool,
            protect_content: bool,
            reply_to_message_id: Id<MessageMarker>,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
        uploads [video_note, thumb]
    }
}

method! {
    /// Send 2-10 photos, videos, documents or audios as an album.
    ///
    /// Documents and audios can only be grouped with media of the same
    /// type.
    SendMediaGroup("sendMediaGroup") -> Vec<Message> {
        required {
            chat_id: ChatId,
            media: Vec<InputMedia>,
        }
        optional {
            disable_notification: bool,
            protect_content: bool,
            reply_to_message_id: Id<MessageMarker>,
            allow_sending_without_reply: bool,
        }
        uploads [media]
    }
}

method! {
    SendLocation("sendLocation") -> Message {
        required {
            chat_id: ChatId,
            latitude: Float,
            longitude: Float,
        }
        optional {
            /// Radius of uncertainty in meters, 0-1500.
            horizontal_accuracy: Float,
            /// Seconds the location will be updated, 60-86400.
            live_period: u32,
            /// Direction of movement in degrees, 1-360.
            heading: u16,
            /// Meters, for proximity alerts about approaching chat members.
            proximity_alert_radius: u32,
            disable_notification: bool,
            protect_content: bool,
            reply_to_message_id: Id<MessageMarker>,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
    }
}

method! {
    /// Move a live location until its `live_period` expires or it is
    /// stopped.
    EditMessageLiveLocation("editMessageLiveLocation") -> MessageOrTrue {
        required {
            #[serde(flatten)]
            target: MessageTarget,
            latitude: Float,
            longitude: Float,
        }
        optional {
            horizontal_accuracy: Float,
            heading: u16,
            proximity_alert_radius: u32,
            reply_markup: ReplyMarkup,
        }
    }
}

method! {
    StopMessageLiveLocation("stopMessageLiveLocation") -> MessageOrTrue {
        required {
            #[serde(flatten)]
            target: MessageTarget,
        }
        optional {
            reply_markup: ReplyMarkup,
        }
    }
}

method! {
    SendVenue("sendVenue") -> Message {
        required {
            chat_id: ChatId,
            latitude: Float,
            longitude: Float,
            title: String,
            address: String,
        }
        optional {
            foursquare_id: String,
            foursquare_type: String,
            google_place_id: String,
            google_place_type: String,
            disable_notification: bool,
            protect_content: bool,
            reply_to_message_id: Id<MessageMarker>,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
    }
}

method! {
    SendContact("sendContact") -> Message {
        required {
            chat_id: ChatId,
            phone_number: String,
            first_name: String,
        }
        optional {
            last_name: String,
            /// Additional data as a vCard, 0-2048 bytes.
            vcard: String,
            disable_notification: bool,
            protect_content: bool,
            reply_to_message_id: Id<MessageMarker>,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
    }
}

method! {
    SendPoll("sendPoll") -> Message {
        required {
            chat_id: ChatId,
            /// 1-300 characters.
            question: String,
            /// 2-10 answers of 1-100 characters each.
            options: Vec<String>,
        }
        optional {
            /// Defaults to true.
            is_anonymous: bool,
            r#type: PollType,
            allows_multiple_answers: bool,
            /// Required for quizzes.
            correct_option_id: u8,
            explanation: String,
            explanation_parse_mode: ParseMode,
            explanation_entities: Vec<MessageEntity>,
            /// Seconds the poll is active, 5-600. Excludes `close_date`.
            open_period: u32,
            close_date: UnixTime,
            /// Send an already closed poll.
            is_closed: bool,
            disable_notification: bool,
            protect_content: bool,
            reply_to_message_id: Id<MessageMarker>,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
    }
}

method! {
    /// Send an animated emoji showing a random value.
    SendDice("sendDice") -> Message {
        required {
            chat_id: ChatId,
        }
        optional {
            /// One of 🎲 🎯 🏀 ⚽ 🎳 🎰. Defaults to 🎲.
            emoji: String,
            disable_notification: bool,
            protect_content: bool,
            reply_to_message_id: Id<MessageMarker>,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
    }
}

/// What the bot is about to do, shown as a status for five seconds.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAction {
    Typing,
    UploadPhoto,
    RecordVideo,
    UploadVideo,
    RecordVoice,
    UploadVoice,
    UploadDocument,
    ChooseSticker,
    FindLocation,
    RecordVideoNote,
    UploadVideoNote,
}

method! {
    SendChatAction("sendChatAction") -> True {
        required {
            chat_id: ChatId,
            action: ChatAction,
        }
        optional {}
    }
}

method! {
    GetUserProfilePhotos("getUserProfilePhotos") -> UserProfilePhotos {
        required {
            user_id: Id<UserMarker>,
        }
        optional {
            offset: u32,
            /// 1-100, defaults to 100.
            limit: u8,
        }
    }
}

method! {
    /// Prepare a file of at most 20 MB for download.
    ///
    /// The returned [`File::file_path`] is turned into a link with
    /// [`Bot::file_url`](crate::http::Bot::file_url).
    GetFile("getFile") -> File {
        required {
            file_id: String,
        }
        optional {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::methods::{Method, Ret};
    use crate::types::{builders::InlineKeyboardBuilder, builders::callback_button, input::InputMediaPhoto};
    use serde_json::json;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(Ret<SendMessage>, Message);
    assert_type_eq_all!(Ret<SendMediaGroup>, Vec<Message>);
    assert_type_eq_all!(Ret<CopyMessage>, MessageId);
    assert_type_eq_all!(Ret<EditMessageLiveLocation>, MessageOrTrue);

    #[test]
    fn send_message_skips_unset_options() {
        let markup = InlineKeyboardBuilder::new()
            .button(callback_button("Ok", "ok"))
            .build();
        let call = SendMessage::new(ChatId::username("rustlang"), "hello")
            .disable_notification(true)
            .reply_markup(markup);
        assert_eq!(
            serde_json::to_value(&call).unwrap(),
            json!({
                "chat_id": "@rustlang",
                "text": "hello",
                "disable_notification": true,
                "reply_markup": {
                    "inline_keyboard": [[{ "text": "Ok", "callback_data": "ok" }]]
                }
            })
        );
    }

    #[test]
    fn send_photo_by_id_has_no_uploads() {
        let call = SendPhoto::new(1_i64, InputFile::file_id("AgADBAAD"));
        assert!(call.uploads().is_empty());
        assert_eq!(serde_json::to_value(&call).unwrap()["photo"], json!("AgADBAAD"));
    }

    #[test]
    fn send_audio_collects_file_and_thumb() {
        let call = SendAudio::new(1_i64, InputFile::bytes("song.mp3", vec![0_u8; 4]))
            .thumb(InputFile::bytes("cover.jpg", vec![1_u8; 4]))
            .title("Song");
        let uploads = call.uploads();
        assert_eq!(uploads.len(), 2);
        assert_eq!(uploads[0].file_name, "song.mp3");

        let value = serde_json::to_value(&call).unwrap();
        assert_eq!(value["audio"], json!(uploads[0].attach_ref()));
        assert_eq!(value["thumb"], json!(uploads[1].attach_ref()));
    }

    #[test]
    fn media_group_uploads() {
        let call = SendMediaGroup::new(
            1_i64,
            vec![
                InputMedia::Photo(InputMediaPhoto::new(InputFile::bytes("a.jpg", vec![1_u8]))),
                InputMedia::Photo(InputMediaPhoto::new(InputFile::url("https://example.com/b.jpg"))),
            ],
        );
        assert_eq!(call.uploads().len(), 1);
        assert_eq!(SendMediaGroup::NAME, "sendMediaGroup");
    }

    #[test]
    fn live_location_targets() {
        let call = EditMessageLiveLocation::new(MessageTarget::inline("AAQ"), 52.5, 13.4);
        assert_eq!(
            serde_json::to_value(&call).unwrap(),
            json!({ "inline_message_id": "AAQ", "latitude": 52.5, "longitude": 13.4 })
        );

        let stop = StopMessageLiveLocation::new(MessageTarget::chat(5_i64, 9_i64));
        assert_eq!(
            serde_json::to_value(&stop).unwrap(),
            json!({ "chat_id": 5, "message_id": 9 })
        );
    }

    #[test]
    fn quiz_poll() {
        let call = SendPoll::new(1_i64, "2 + 2?", vec!["3".to_owned(), "4".to_owned()])
            .r#type(PollType::Quiz)
            .correct_option_id(1_u8);
        let value = serde_json::to_value(&call).unwrap();
        assert_eq!(value["type"], json!("quiz"));
        assert_eq!(value["correct_option_id"], json!(1));
    }

    #[test]
    fn chat_action_names() {
        let call = SendChatAction::new(1_i64, ChatAction::UploadVideoNote);
        assert_eq!(
            serde_json::to_value(&call).unwrap(),
            json!({ "chat_id": 1, "action": "upload_video_note" })
        );
    }
}
