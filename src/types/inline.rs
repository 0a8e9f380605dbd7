//! Inline mode: queries, results and the contents sent when a result is
//! chosen.

use serde::{
    de::{Deserializer, Error as DeError},
    Deserialize, Serialize,
};
use serde_json::Value;

use crate::closure::{fields, variants};
use crate::types::{
    markup::InlineKeyboardMarkup,
    media::Location,
    message::entity::{MessageEntity, ParseMode},
    payments::LabeledPrice,
    user::User,
    util::{Float, ValueExt},
};

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// An incoming inline query.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InlineQuery {
    pub id: String,
    pub from: User,
    /// Up to 256 characters.
    pub query: String,
    /// Offset of the results to return, controlled by the bot.
    pub offset: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_type: Option<InlineQueryChatType>,
    /// Only for bots that request user location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// Type of the chat an inline query was sent from.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineQueryChatType {
    /// Private chat with the inline query sender.
    Sender,
    Private,
    Group,
    Supergroup,
    Channel,
}

/// A result of an inline query that was chosen by the user.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ChosenInlineResult {
    pub result_id: String,
    pub from: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Only set when the message has an inline keyboard attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,
    pub query: String,
}

/// Returned by `answerWebAppQuery`.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct SentWebAppMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// One result of an inline query.
///
/// Several result kinds come in two flavours sharing the same `type` tag: a
/// link to a file on the web and a `*_file_id` of a file stored on Telegram
/// servers. Decoding tells them apart by the presence of the file id.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineQueryResult {
    Article(InlineQueryResultArticle),
    Audio(InlineQueryResultAudio),
    #[serde(rename = "audio")]
    CachedAudio(InlineQueryResultCachedAudio),
    Contact(InlineQueryResultContact),
    Document(InlineQueryResultDocument),
    #[serde(rename = "document")]
    CachedDocument(InlineQueryResultCachedDocument),
    Game(InlineQueryResultGame),
    Gif(InlineQueryResultGif),
    #[serde(rename = "gif")]
    CachedGif(InlineQueryResultCachedGif),
    Location(InlineQueryResultLocation),
    Mpeg4Gif(InlineQueryResultMpeg4Gif),
    #[serde(rename = "mpeg4_gif")]
    CachedMpeg4Gif(InlineQueryResultCachedMpeg4Gif),
    Photo(InlineQueryResultPhoto),
    #[serde(rename = "photo")]
    CachedPhoto(InlineQueryResultCachedPhoto),
    #[serde(rename = "sticker")]
    CachedSticker(InlineQueryResultCachedSticker),
    Venue(InlineQueryResultVenue),
    Video(InlineQueryResultVideo),
    #[serde(rename = "video")]
    CachedVideo(InlineQueryResultCachedVideo),
    Voice(InlineQueryResultVoice),
    #[serde(rename = "voice")]
    CachedVoice(InlineQueryResultCachedVoice),
}

impl InlineQueryResult {
    const TAGS: &'static [&'static str] = &[
        "article",
        "audio",
        "contact",
        "document",
        "game",
        "gif",
        "location",
        "mpeg4_gif",
        "photo",
        "sticker",
        "venue",
        "video",
        "voice",
    ];

    /// Unique identifier of the result, 1-64 bytes.
    pub fn id(&self) -> &str {
        match self {
            InlineQueryResult::Article(r) => &r.id,
            InlineQueryResult::Audio(r) => &r.id,
            InlineQueryResult::CachedAudio(r) => &r.id,
            InlineQueryResult::Contact(r) => &r.id,
            InlineQueryResult::Document(r) => &r.id,
            InlineQueryResult::CachedDocument(r) => &r.id,
            InlineQueryResult::Game(r) => &r.id,
            InlineQueryResult::Gif(r) => &r.id,
            InlineQueryResult::CachedGif(r) => &r.id,
            InlineQueryResult::Location(r) => &r.id,
            InlineQueryResult::Mpeg4Gif(r) => &r.id,
            InlineQueryResult::CachedMpeg4Gif(r) => &r.id,
            InlineQueryResult::Photo(r) => &r.id,
            InlineQueryResult::CachedPhoto(r) => &r.id,
            InlineQueryResult::CachedSticker(r) => &r.id,
            InlineQueryResult::Venue(r) => &r.id,
            InlineQueryResult::Video(r) => &r.id,
            InlineQueryResult::CachedVideo(r) => &r.id,
            InlineQueryResult::Voice(r) => &r.id,
            InlineQueryResult::CachedVoice(r) => &r.id,
        }
    }

    /// Whether the result refers to a file already stored on Telegram.
    pub fn is_cached(&self) -> bool {
        matches!(
            self,
            InlineQueryResult::CachedAudio(_)
                | InlineQueryResult::CachedDocument(_)
                | InlineQueryResult::CachedGif(_)
                | InlineQueryResult::CachedMpeg4Gif(_)
                | InlineQueryResult::CachedPhoto(_)
                | InlineQueryResult::CachedSticker(_)
                | InlineQueryResult::CachedVideo(_)
                | InlineQueryResult::CachedVoice(_)
        )
    }
}

impl<'de> Deserialize<'de> for InlineQueryResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| D::Error::missing_field("type"))?
            .to_owned();
        // Every cached flavour carries exactly one `<kind>_file_id`.
        let cached = value
            .as_object()
            .is_some_and(|map| map.keys().any(|key| key.ends_with("_file_id")));

        let result = match (kind.as_str(), cached) {
            ("article", _) => value.deserialize_into().map(Self::Article),
            ("audio", false) => value.deserialize_into().map(Self::Audio),
            ("audio", true) => value.deserialize_into().map(Self::CachedAudio),
            ("contact", _) => value.deserialize_into().map(Self::Contact),
            ("document", false) => value.deserialize_into().map(Self::Document),
            ("document", true) => value.deserialize_into().map(Self::CachedDocument),
            ("game", _) => value.deserialize_into().map(Self::Game),
            ("gif", false) => value.deserialize_into().map(Self::Gif),
            ("gif", true) => value.deserialize_into().map(Self::CachedGif),
            ("location", _) => value.deserialize_into().map(Self::Location),
            ("mpeg4_gif", false) => value.deserialize_into().map(Self::Mpeg4Gif),
            ("mpeg4_gif", true) => value.deserialize_into().map(Self::CachedMpeg4Gif),
            ("photo", false) => value.deserialize_into().map(Self::Photo),
            ("photo", true) => value.deserialize_into().map(Self::CachedPhoto),
            ("sticker", _) => value.deserialize_into().map(Self::CachedSticker),
            ("venue", _) => value.deserialize_into().map(Self::Venue),
            ("video", false) => value.deserialize_into().map(Self::Video),
            ("video", true) => value.deserialize_into().map(Self::CachedVideo),
            ("voice", false) => value.deserialize_into().map(Self::Voice),
            ("voice", true) => value.deserialize_into().map(Self::CachedVoice),
            (other, _) => return Err(D::Error::unknown_variant(other, Self::TAGS)),
        };

        result.map_err(D::Error::custom)
    }
}

/// A link to an article or web page.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InlineQueryResultArticle {
    pub id: String,
    pub title: String,
    pub input_message_content: InputMessageContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Hide the URL in the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_url: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_height: Option<u32>,
}

impl InlineQueryResultArticle {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        input_message_content: impl Into<InputMessageContent>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            input_message_content: input_message_content.into(),
            reply_markup: None,
            url: None,
            hide_url: None,
            description: None,
            thumb_url: None,
            thumb_width: None,
            thumb_height: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InlineQueryResultPhoto {
    pub id: String,
    /// A valid URL of the JPEG photo, at most 5MB.
    pub photo_url: String,
    pub thumb_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InlineQueryResultGif {
    pub id: String,
    pub gif_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gif_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gif_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gif_duration: Option<u32>,
    pub thumb_url: String,
    /// One of `image/jpeg`, `image/gif` or `video/mp4`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

/// A link to an H.264/MPEG-4 AVC video without sound.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InlineQueryResultMpeg4Gif {
    pub id: String,
    pub mpeg4_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mpeg4_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mpeg4_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mpeg4_duration: Option<u32>,
    pub thumb_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

/// A link to a page with an embedded player or a video file.
///
/// Embedded players (e.g. YouTube) must set `input_message_content`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InlineQueryResultVideo {
    pub id: String,
    pub video_url: String,
    /// `text/html` or `video/mp4`.
    pub mime_type: String,
    pub thumb_url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InlineQueryResultAudio {
    pub id: String,
    pub audio_url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InlineQueryResultVoice {
    pub id: String,
    pub voice_url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

/// A link to a PDF or ZIP file.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InlineQueryResultDocument {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub document_url: String,
    /// `application/pdf` or `application/zip`.
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_height: Option<u32>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InlineQueryResultLocation {
    pub id: String,
    pub latitude: Float,
    pub longitude: Float,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy: Option<Float>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_period: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proximity_alert_radius: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_height: Option<u32>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InlineQueryResultVenue {
    pub id: String,
    pub latitude: Float,
    pub longitude: Float,
    pub title: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foursquare_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foursquare_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_place_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_place_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_height: Option<u32>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InlineQueryResultContact {
    pub id: String,
    pub phone_number: String,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcard: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_height: Option<u32>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InlineQueryResultGame {
    pub id: String,
    pub game_short_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InlineQueryResultCachedPhoto {
    pub id: String,
    pub photo_file_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InlineQueryResultCachedGif {
    pub id: String,
    pub gif_file_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InlineQueryResultCachedMpeg4Gif {
    pub id: String,
    pub mpeg4_file_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InlineQueryResultCachedSticker {
    pub id: String,
    pub sticker_file_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InlineQueryResultCachedDocument {
    pub id: String,
    pub title: String,
    pub document_file_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InlineQueryResultCachedVideo {
    pub id: String,
    pub video_file_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InlineQueryResultCachedVoice {
    pub id: String,
    pub voice_file_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InlineQueryResultCachedAudio {
    pub id: String,
    pub audio_file_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

fields!(InlineQueryResultArticle {
    required: ["type", "id", "title", "input_message_content"],
    optional: [
        "reply_markup",
        "url",
        "hide_url",
        "description",
        "thumb_url",
        "thumb_width",
        "thumb_height",
    ],
});
fields!(InlineQueryResultPhoto {
    required: ["type", "id", "photo_url", "thumb_url"],
    optional: [
        "photo_width",
        "photo_height",
        "title",
        "description",
        "caption",
        "parse_mode",
        "caption_entities",
        "reply_markup",
        "input_message_content",
    ],
});
fields!(InlineQueryResultGif {
    required: ["type", "id", "gif_url", "thumb_url"],
    optional: [
        "gif_width",
        "gif_height",
        "gif_duration",
        "thumb_mime_type",
        "title",
        "caption",
        "parse_mode",
        "caption_entities",
        "reply_markup",
        "input_message_content",
    ],
});
fields!(InlineQueryResultMpeg4Gif {
    required: ["type", "id", "mpeg4_url", "thumb_url"],
    optional: [
        "mpeg4_width",
        "mpeg4_height",
        "mpeg4_duration",
        "thumb_mime_type",
        "title",
        "caption",
        "parse_mode",
        "caption_entities",
        "reply_markup",
        "input_message_content",
    ],
});
fields!(InlineQueryResultVideo {
    required: ["type", "id", "video_url", "mime_type", "thumb_url", "title"],
    optional: [
        "caption",
        "parse_mode",
        "caption_entities",
        "video_width",
        "video_height",
        "video_duration",
        "description",
        "reply_markup",
        "input_message_content",
    ],
});
fields!(InlineQueryResultAudio {
    required: ["type", "id", "audio_url", "title"],
    optional: [
        "caption",
        "parse_mode",
        "caption_entities",
        "performer",
        "audio_duration",
        "reply_markup",
        "input_message_content",
    ],
});
fields!(InlineQueryResultVoice {
    required: ["type", "id", "voice_url", "title"],
    optional: [
        "caption",
        "parse_mode",
        "caption_entities",
        "voice_duration",
        "reply_markup",
        "input_message_content",
    ],
});
fields!(InlineQueryResultDocument {
    required: ["type", "id", "title", "document_url", "mime_type"],
    optional: [
        "caption",
        "parse_mode",
        "caption_entities",
        "description",
        "reply_markup",
        "input_message_content",
        "thumb_url",
        "thumb_width",
        "thumb_height",
    ],
});
fields!(InlineQueryResultLocation {
    required: ["type", "id", "latitude", "longitude", "title"],
    optional: [
        "horizontal_accuracy",
        "live_period",
        "heading",
        "proximity_alert_radius",
        "reply_markup",
        "input_message_content",
        "thumb_url",
        "thumb_width",
        "thumb_height",
    ],
});
fields!(InlineQueryResultVenue {
    required: ["type", "id", "latitude", "longitude", "title", "address"],
    optional: [
        "foursquare_id",
        "foursquare_type",
        "google_place_id",
        "google_place_type",
        "reply_markup",
        "input_message_content",
        "thumb_url",
        "thumb_width",
        "thumb_height",
    ],
});
fields!(InlineQueryResultContact {
    required: ["type", "id", "phone_number", "first_name"],
    optional: [
        "last_name",
        "vcard",
        "reply_markup",
        "input_message_content",
        "thumb_url",
        "thumb_width",
        "thumb_height",
    ],
});
fields!(InlineQueryResultGame {
    required: ["type", "id", "game_short_name"],
    optional: ["reply_markup"],
});
fields!(InlineQueryResultCachedPhoto {
    required: ["type", "id", "photo_file_id"],
    optional: [
        "title",
        "description",
        "caption",
        "parse_mode",
        "caption_entities",
        "reply_markup",
        "input_message_content",
    ],
});
fields!(InlineQueryResultCachedGif {
    required: ["type", "id", "gif_file_id"],
    optional: [
        "title",
        "caption",
        "parse_mode",
        "caption_entities",
        "reply_markup",
        "input_message_content",
    ],
});
fields!(InlineQueryResultCachedMpeg4Gif {
    required: ["type", "id", "mpeg4_file_id"],
    optional: [
        "title",
        "caption",
        "parse_mode",
        "caption_entities",
        "reply_markup",
        "input_message_content",
    ],
});
fields!(InlineQueryResultCachedSticker {
    required: ["type", "id", "sticker_file_id"],
    optional: ["reply_markup", "input_message_content"],
});
fields!(InlineQueryResultCachedDocument {
    required: ["type", "id", "title", "document_file_id"],
    optional: [
        "description",
        "caption",
        "parse_mode",
        "caption_entities",
        "reply_markup",
        "input_message_content",
    ],
});
fields!(InlineQueryResultCachedVideo {
    required: ["type", "id", "video_file_id", "title"],
    optional: [
        "description",
        "caption",
        "parse_mode",
        "caption_entities",
        "reply_markup",
        "input_message_content",
    ],
});
fields!(InlineQueryResultCachedVoice {
    required: ["type", "id", "voice_file_id", "title"],
    optional: [
        "caption",
        "parse_mode",
        "caption_entities",
        "reply_markup",
        "input_message_content",
    ],
});
fields!(InlineQueryResultCachedAudio {
    required: ["type", "id", "audio_file_id"],
    optional: [
        "caption",
        "parse_mode",
        "caption_entities",
        "reply_markup",
        "input_message_content",
    ],
});

variants!(InlineQueryResult {
    Article => InlineQueryResultArticle,
    Audio => InlineQueryResultAudio,
    CachedAudio => InlineQueryResultCachedAudio,
    Contact => InlineQueryResultContact,
    Document => InlineQueryResultDocument,
    CachedDocument => InlineQueryResultCachedDocument,
    Game => InlineQueryResultGame,
    Gif => InlineQueryResultGif,
    CachedGif => InlineQueryResultCachedGif,
    Location => InlineQueryResultLocation,
    Mpeg4Gif => InlineQueryResultMpeg4Gif,
    CachedMpeg4Gif => InlineQueryResultCachedMpeg4Gif,
    Photo => InlineQueryResultPhoto,
    CachedPhoto => InlineQueryResultCachedPhoto,
    CachedSticker => InlineQueryResultCachedSticker,
    Venue => InlineQueryResultVenue,
    Video => InlineQueryResultVideo,
    CachedVideo => InlineQueryResultCachedVideo,
    Voice => InlineQueryResultVoice,
    CachedVoice => InlineQueryResultCachedVoice,
});

// ---------------------------------------------------------------------------
// Input message contents
// ---------------------------------------------------------------------------

/// The message sent when an inline result is chosen.
///
/// Untagged: the variant is decided by which required fields are present.
/// A venue also has the coordinates of a location, so it is tried first.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InputMessageContent {
    Text(InputTextMessageContent),
    Venue(InputVenueMessageContent),
    Location(InputLocationMessageContent),
    Contact(InputContactMessageContent),
    Invoice(InputInvoiceMessageContent),
}

impl From<InputTextMessageContent> for InputMessageContent {
    fn from(content: InputTextMessageContent) -> Self {
        InputMessageContent::Text(content)
    }
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct InputTextMessageContent {
    /// 1-4096 characters after entity parsing.
    pub message_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<MessageEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_web_page_preview: Option<bool>,
}

impl InputTextMessageContent {
    pub fn new(message_text: impl Into<String>) -> Self {
        Self {
            message_text: message_text.into(),
            parse_mode: None,
            entities: None,
            disable_web_page_preview: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InputLocationMessageContent {
    pub latitude: Float,
    pub longitude: Float,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy: Option<Float>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_period: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proximity_alert_radius: Option<u32>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InputVenueMessageContent {
    pub latitude: Float,
    pub longitude: Float,
    pub title: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foursquare_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foursquare_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_place_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_place_type: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct InputContactMessageContent {
    pub phone_number: String,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcard: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct InputInvoiceMessageContent {
    pub title: String,
    pub description: String,
    /// Bot-defined payload, 1-128 bytes. Not shown to the user.
    pub payload: String,
    pub provider_token: String,
    pub currency: String,
    pub prices: Vec<LabeledPrice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tip_amount: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_tip_amounts: Option<Vec<i64>>,
    /// JSON-serialized data shared with the payment provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub need_name: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub need_phone_number: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub need_email: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub need_shipping_address: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_phone_number_to_provider: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_email_to_provider: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_flexible: Option<bool>,
}

fields!(InputTextMessageContent {
    required: ["message_text"],
    optional: ["parse_mode", "entities", "disable_web_page_preview"],
});
fields!(InputLocationMessageContent {
    required: ["latitude", "longitude"],
    optional: [
        "horizontal_accuracy",
        "live_period",
        "heading",
        "proximity_alert_radius",
    ],
});
fields!(InputVenueMessageContent {
    required: ["latitude", "longitude", "title", "address"],
    optional: [
        "foursquare_id",
        "foursquare_type",
        "google_place_id",
        "google_place_type",
    ],
});
fields!(InputContactMessageContent {
    required: ["phone_number", "first_name"],
    optional: ["last_name", "vcard"],
});
fields!(InputInvoiceMessageContent {
    required: [
        "title",
        "description",
        "payload",
        "provider_token",
        "currency",
        "prices",
    ],
    optional: [
        "max_tip_amount",
        "suggested_tip_amounts",
        "provider_data",
        "photo_url",
        "photo_size",
        "photo_width",
        "photo_height",
        "need_name",
        "need_phone_number",
        "need_email",
        "need_shipping_address",
        "send_phone_number_to_provider",
        "send_email_to_provider",
        "is_flexible",
    ],
});

variants!(InputMessageContent {
    Text => InputTextMessageContent,
    Venue => InputVenueMessageContent,
    Location => InputLocationMessageContent,
    Contact => InputContactMessageContent,
    Invoice => InputInvoiceMessageContent,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::closure::{validate, Access, Closed, ClosureError, Slot, Variants};
    use serde_json::json;

    #[test]
    fn article_serializes_type_tag() {
        let article = InlineQueryResult::Article(InlineQueryResultArticle::new(
            "1",
            "Hello",
            InputTextMessageContent::new("Hello, world"),
        ));
        assert_eq!(
            serde_json::to_value(&article).unwrap(),
            json!({
                "type": "article",
                "id": "1",
                "title": "Hello",
                "input_message_content": { "message_text": "Hello, world" }
            })
        );
        assert_eq!(article.id(), "1");
    }

    #[test]
    fn cached_and_linked_flavours_share_a_tag() {
        let linked: InlineQueryResult = serde_json::from_value(json!({
            "type": "photo",
            "id": "a",
            "photo_url": "https://example.com/cat.jpg",
            "thumb_url": "https://example.com/cat_small.jpg"
        }))
        .unwrap();
        assert!(matches!(linked, InlineQueryResult::Photo(_)));
        assert!(!linked.is_cached());

        let cached: InlineQueryResult = serde_json::from_value(json!({
            "type": "photo",
            "id": "b",
            "photo_file_id": "AgAD"
        }))
        .unwrap();
        assert!(matches!(cached, InlineQueryResult::CachedPhoto(_)));
        assert_eq!(
            serde_json::to_value(&cached).unwrap()["type"],
            json!("photo")
        );
    }

    #[test]
    fn sticker_is_always_cached() {
        let sticker: InlineQueryResult = serde_json::from_value(json!({
            "type": "sticker",
            "id": "s",
            "sticker_file_id": "CAAC"
        }))
        .unwrap();
        assert!(sticker.is_cached());
    }

    #[test]
    fn unknown_result_type() {
        let err = serde_json::from_value::<InlineQueryResult>(json!({ "type": "hologram", "id": "x" }))
            .unwrap_err();
        assert!(err.to_string().contains("hologram"));
    }

    #[test]
    fn input_content_venue_before_location() {
        let venue: InputMessageContent = serde_json::from_value(json!({
            "latitude": 1.0,
            "longitude": 2.0,
            "title": "Cafe",
            "address": "Main st"
        }))
        .unwrap();
        assert!(matches!(venue, InputMessageContent::Venue(_)));

        let location: InputMessageContent =
            serde_json::from_value(json!({ "latitude": 1.0, "longitude": 2.0 })).unwrap();
        assert!(matches!(location, InputMessageContent::Location(_)));
    }

    #[test]
    fn closed_results() {
        let neighborhood = InlineQueryResult::neighborhood();
        for field in ["photo_file_id", "photo_url", "game_short_name", "mime_type"] {
            assert!(neighborhood.contains(field), "{field}");
        }

        let cached = InlineQueryResult::closed_shape_of("CachedPhoto");
        assert_eq!(cached.slot("photo_file_id"), Some(Slot::Required));
        assert_eq!(cached.slot("photo_url"), Some(Slot::Absent));
        assert_eq!(cached.slot("caption"), Some(Slot::Optional));

        let game = Closed::new(InlineQueryResult::Game(InlineQueryResultGame {
            id: "g".to_owned(),
            game_short_name: "snake".to_owned(),
            reply_markup: None,
        }))
        .unwrap();
        assert_eq!(game.get("type"), Some(Access::Present(&json!("game"))));
        assert_eq!(game.get("reply_markup"), Some(Access::Unset));
        assert_eq!(game.get("caption"), Some(Access::Absent));
    }

    #[test]
    fn closed_input_content() {
        let text = InputMessageContent::closed_shape_of("Text");
        assert_eq!(text.slot("latitude"), Some(Slot::Absent));
        assert_eq!(text.slot("parse_mode"), Some(Slot::Optional));

        let raw = json!({ "message_text": "hi", "phone_number": "+1" });
        assert!(matches!(
            validate::<InputMessageContent>(&raw),
            Err(ClosureError::ForeignField { variant: "Text", .. })
        ));
    }
}
