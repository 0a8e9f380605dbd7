//! Messages and their contents.
//!
//! A [`Message`] is a [`ReplyMessage`] plus an optional reference to the
//! message it replies to. The referenced message is itself a
//! [`ReplyMessage`], which has no `reply_to_message` field, so reply chains
//! are capped at one level by construction:
//!
//! ```compile_fail
//! # fn f(message: botgram::types::Message) {
//! let _ = message.reply_to_message.unwrap().reply_to_message;
//! # }
//! ```
//!
//! What the message carries (text, a photo, a service event, ...) lives in
//! [`MessageContent`], an untagged union decided by which content field is
//! present on the wire.

pub mod entity;

use serde::{de::Error as DeError, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::ops::{Deref, DerefMut};

use crate::closure::{fields, variants};
use crate::types::{
    chat::Chat,
    games::Game,
    id::{
        marker::{ChatMarker, MessageMarker},
        Id,
    },
    markup::InlineKeyboardMarkup,
    media::{
        Animation, Audio, Contact, Dice, Document, Location, MessageAutoDeleteTimerChanged,
        PhotoSize, Poll, ProximityAlertTriggered, Venue, Video, VideoChatEnded,
        VideoChatParticipantsInvited, VideoChatScheduled, VideoChatStarted, VideoNote, Voice,
        WebAppData,
    },
    passport::PassportData,
    payments::{Invoice, SuccessfulPayment},
    stickers::Sticker,
    user::User,
    util::{True, UnixTime},
};

use self::entity::MessageEntity;

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// A message, possibly replying to another one.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Message {
    #[serde(flatten)]
    pub inner: ReplyMessage,
    /// The original message when this one is a reply.
    ///
    /// Its own reply reference is never populated, even when it is itself
    /// a reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_message: Option<Box<ReplyMessage>>,
}

impl Deref for Message {
    type Target = ReplyMessage;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for Message {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl From<ReplyMessage> for Message {
    fn from(inner: ReplyMessage) -> Self {
        Self {
            inner,
            reply_to_message: None,
        }
    }
}

/// Identifier of a sent message, as returned by `copyMessage`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct MessageId {
    pub message_id: Id<MessageMarker>,
}

/// A message without a reply reference.
///
/// Used for the nested occurrences of a message: the target of a reply and
/// a pinned message.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ReplyMessage {
    pub message_id: Id<MessageMarker>,
    /// Empty for messages sent to channels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    /// Sender when sent on behalf of a chat.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_chat: Option<Chat>,
    pub date: UnixTime,
    pub chat: Chat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_from: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_from_chat: Option<Chat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_from_message_id: Option<Id<MessageMarker>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_signature: Option<String>,
    /// Sender name of users who disallow linking to their account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_sender_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_date: Option<UnixTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_automatic_forward: Option<True>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via_bot: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_date: Option<UnixTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_protected_content: Option<True>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(flatten, deserialize_with = "content_without_reply")]
    pub content: MessageContent,
}

/// Decode the content of a nested message, dropping its own reply
/// reference so [`MessageContent::Unknown`] can't pick it up.
fn content_without_reply<'de, D>(deserializer: D) -> Result<MessageContent, D::Error>
where
    D: Deserializer<'de>,
{
    let mut map = Map::<String, Value>::deserialize(deserializer)?;
    map.remove("reply_to_message");
    MessageContent::deserialize(Value::Object(map)).map_err(DeError::custom)
}

impl ReplyMessage {
    /// Text of a text message.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            MessageContent::Text(c) => Some(&c.text),
            _ => None,
        }
    }

    /// Caption of a media message.
    pub fn caption(&self) -> Option<&str> {
        match &self.content {
            MessageContent::Animation(c) => c.caption.as_deref(),
            MessageContent::Audio(c) => c.caption.as_deref(),
            MessageContent::Document(c) => c.caption.as_deref(),
            MessageContent::Photo(c) => c.caption.as_deref(),
            MessageContent::Video(c) => c.caption.as_deref(),
            MessageContent::Voice(c) => c.caption.as_deref(),
            _ => None,
        }
    }

    /// Entities of the text or the caption, whichever the message has.
    pub fn entities(&self) -> &[MessageEntity] {
        let entities = match &self.content {
            MessageContent::Text(c) => &c.entities,
            MessageContent::Animation(c) => &c.caption_entities,
            MessageContent::Audio(c) => &c.caption_entities,
            MessageContent::Document(c) => &c.caption_entities,
            MessageContent::Photo(c) => &c.caption_entities,
            MessageContent::Video(c) => &c.caption_entities,
            MessageContent::Voice(c) => &c.caption_entities,
            _ => return &[],
        };
        entities.as_deref().unwrap_or_default()
    }

    pub fn is_forwarded(&self) -> bool {
        self.forward_date.is_some()
    }

    /// Whether the message reports a change to the chat rather than
    /// carrying user content.
    pub fn is_service(&self) -> bool {
        self.content.is_service()
    }
}

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

/// What a message carries.
///
/// Variant order matters for decoding: an animation message also carries a
/// `document`, and a venue also carries a `location`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(TextContent),
    Animation(AnimationContent),
    Audio(AudioContent),
    Document(DocumentContent),
    Photo(PhotoContent),
    Sticker(StickerContent),
    Video(VideoContent),
    VideoNote(VideoNoteContent),
    Voice(VoiceContent),
    Contact(ContactContent),
    Dice(DiceContent),
    Game(GameContent),
    Poll(PollContent),
    Venue(VenueContent),
    Location(LocationContent),
    NewChatMembers(NewChatMembersContent),
    LeftChatMember(LeftChatMemberContent),
    NewChatTitle(NewChatTitleContent),
    NewChatPhoto(NewChatPhotoContent),
    DeleteChatPhoto(DeleteChatPhotoContent),
    GroupChatCreated(GroupChatCreatedContent),
    SupergroupChatCreated(SupergroupChatCreatedContent),
    ChannelChatCreated(ChannelChatCreatedContent),
    MessageAutoDeleteTimerChanged(MessageAutoDeleteTimerChangedContent),
    MigrateToChatId(MigrateToChatIdContent),
    MigrateFromChatId(MigrateFromChatIdContent),
    PinnedMessage(PinnedMessageContent),
    Invoice(InvoiceContent),
    SuccessfulPayment(SuccessfulPaymentContent),
    ConnectedWebsite(ConnectedWebsiteContent),
    PassportData(PassportDataContent),
    ProximityAlertTriggered(ProximityAlertTriggeredContent),
    VideoChatScheduled(VideoChatScheduledContent),
    VideoChatStarted(VideoChatStartedContent),
    VideoChatEnded(VideoChatEndedContent),
    VideoChatParticipantsInvited(VideoChatParticipantsInvitedContent),
    WebAppData(WebAppDataContent),
    /// Content this crate doesn't know about yet, kept verbatim.
    Unknown(Map<String, Value>),
}

impl MessageContent {
    pub fn is_service(&self) -> bool {
        matches!(
            self,
            MessageContent::NewChatMembers(_)
                | MessageContent::LeftChatMember(_)
                | MessageContent::NewChatTitle(_)
                | MessageContent::NewChatPhoto(_)
                | MessageContent::DeleteChatPhoto(_)
                | MessageContent::GroupChatCreated(_)
                | MessageContent::SupergroupChatCreated(_)
                | MessageContent::ChannelChatCreated(_)
                | MessageContent::MessageAutoDeleteTimerChanged(_)
                | MessageContent::MigrateToChatId(_)
                | MessageContent::MigrateFromChatId(_)
                | MessageContent::PinnedMessage(_)
                | MessageContent::SuccessfulPayment(_)
                | MessageContent::ConnectedWebsite(_)
                | MessageContent::ProximityAlertTriggered(_)
                | MessageContent::VideoChatScheduled(_)
                | MessageContent::VideoChatStarted(_)
                | MessageContent::VideoChatEnded(_)
                | MessageContent::VideoChatParticipantsInvited(_)
                | MessageContent::WebAppData(_)
        )
    }
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct TextContent {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<MessageEntity>>,
}

/// An animation. The API also fills in `document` for backward
/// compatibility.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct AnimationContent {
    pub animation: Animation,
    pub document: Document,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct AudioContent {
    pub audio: Audio,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct DocumentContent {
    pub document: Document,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PhotoContent {
    /// Available sizes of the photo.
    pub photo: Vec<PhotoSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StickerContent {
    pub sticker: Sticker,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct VideoContent {
    pub video: Video,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct VideoNoteContent {
    pub video_note: VideoNote,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct VoiceContent {
    pub voice: Voice,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ContactContent {
    pub contact: Contact,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct DiceContent {
    pub dice: Dice,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct GameContent {
    pub game: Game,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PollContent {
    pub poll: Poll,
}

/// A venue. The API also fills in `location`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct VenueContent {
    pub venue: Venue,
    pub location: Location,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct LocationContent {
    pub location: Location,
}

/// New members were added to the group (the bot itself may be one of them).
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct NewChatMembersContent {
    pub new_chat_members: Vec<User>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct LeftChatMemberContent {
    pub left_chat_member: User,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct NewChatTitleContent {
    pub new_chat_title: String,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct NewChatPhotoContent {
    pub new_chat_photo: Vec<PhotoSize>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct DeleteChatPhotoContent {
    pub delete_chat_photo: True,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct GroupChatCreatedContent {
    pub group_chat_created: True,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct SupergroupChatCreatedContent {
    pub supergroup_chat_created: True,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ChannelChatCreatedContent {
    pub channel_chat_created: True,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct MessageAutoDeleteTimerChangedContent {
    pub message_auto_delete_timer_changed: MessageAutoDeleteTimerChanged,
}

/// The group was upgraded to the supergroup with this id.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct MigrateToChatIdContent {
    pub migrate_to_chat_id: Id<ChatMarker>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct MigrateFromChatIdContent {
    pub migrate_from_chat_id: Id<ChatMarker>,
}

/// The pinned message never carries its own reply reference.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PinnedMessageContent {
    pub pinned_message: Box<ReplyMessage>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct InvoiceContent {
    pub invoice: Invoice,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SuccessfulPaymentContent {
    pub successful_payment: SuccessfulPayment,
}

/// The user logged in on this domain via the login widget.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ConnectedWebsiteContent {
    pub connected_website: String,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PassportDataContent {
    pub passport_data: PassportData,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ProximityAlertTriggeredContent {
    pub proximity_alert_triggered: ProximityAlertTriggered,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct VideoChatScheduledContent {
    pub video_chat_scheduled: VideoChatScheduled,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct VideoChatStartedContent {
    pub video_chat_started: VideoChatStarted,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct VideoChatEndedContent {
    pub video_chat_ended: VideoChatEnded,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct VideoChatParticipantsInvitedContent {
    pub video_chat_participants_invited: VideoChatParticipantsInvited,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct WebAppDataContent {
    pub web_app_data: WebAppData,
}

// ---------------------------------------------------------------------------
// Closure declarations
// ---------------------------------------------------------------------------

fields!(TextContent { required: ["text"], optional: ["entities"] });
fields!(AnimationContent {
    required: ["animation", "document"],
    optional: ["caption", "caption_entities"],
});
fields!(AudioContent { required: ["audio"], optional: ["caption", "caption_entities"] });
fields!(DocumentContent { required: ["document"], optional: ["caption", "caption_entities"] });
fields!(PhotoContent { required: ["photo"], optional: ["caption", "caption_entities"] });
fields!(StickerContent { required: ["sticker"], optional: [] });
fields!(VideoContent { required: ["video"], optional: ["caption", "caption_entities"] });
fields!(VideoNoteContent { required: ["video_note"], optional: [] });
fields!(VoiceContent { required: ["voice"], optional: ["caption", "caption_entities"] });
fields!(ContactContent { required: ["contact"], optional: [] });
fields!(DiceContent { required: ["dice"], optional: [] });
fields!(GameContent { required: ["game"], optional: [] });
fields!(PollContent { required: ["poll"], optional: [] });
fields!(VenueContent { required: ["venue", "location"], optional: [] });
fields!(LocationContent { required: ["location"], optional: [] });
fields!(NewChatMembersContent { required: ["new_chat_members"], optional: [] });
fields!(LeftChatMemberContent { required: ["left_chat_member"], optional: [] });
fields!(NewChatTitleContent { required: ["new_chat_title"], optional: [] });
fields!(NewChatPhotoContent { required: ["new_chat_photo"], optional: [] });
fields!(DeleteChatPhotoContent { required: ["delete_chat_photo"], optional: [] });
fields!(GroupChatCreatedContent { required: ["group_chat_created"], optional: [] });
fields!(SupergroupChatCreatedContent { required: ["supergroup_chat_created"], optional: [] });
fields!(ChannelChatCreatedContent { required: ["channel_chat_created"], optional: [] });
fields!(MessageAutoDeleteTimerChangedContent {
    required: ["message_auto_delete_timer_changed"],
    optional: [],
});
fields!(MigrateToChatIdContent { required: ["migrate_to_chat_id"], optional: [] });
fields!(MigrateFromChatIdContent { required: ["migrate_from_chat_id"], optional: [] });
fields!(PinnedMessageContent { required: ["pinned_message"], optional: [] });
fields!(InvoiceContent { required: ["invoice"], optional: [] });
fields!(SuccessfulPaymentContent { required: ["successful_payment"], optional: [] });
fields!(ConnectedWebsiteContent { required: ["connected_website"], optional: [] });
fields!(PassportDataContent { required: ["passport_data"], optional: [] });
fields!(ProximityAlertTriggeredContent {
    required: ["proximity_alert_triggered"],
    optional: [],
});
fields!(VideoChatScheduledContent { required: ["video_chat_scheduled"], optional: [] });
fields!(VideoChatStartedContent { required: ["video_chat_started"], optional: [] });
fields!(VideoChatEndedContent { required: ["video_chat_ended"], optional: [] });
fields!(VideoChatParticipantsInvitedContent {
    required: ["video_chat_participants_invited"],
    optional: [],
});
fields!(WebAppDataContent { required: ["web_app_data"], optional: [] });

variants!(MessageContent {
    Text => TextContent,
    Animation => AnimationContent,
    Audio => AudioContent,
    Document => DocumentContent,
    Photo => PhotoContent,
    Sticker => StickerContent,
    Video => VideoContent,
    VideoNote => VideoNoteContent,
    Voice => VoiceContent,
    Contact => ContactContent,
    Dice => DiceContent,
    Game => GameContent,
    Poll => PollContent,
    Venue => VenueContent,
    Location => LocationContent,
    NewChatMembers => NewChatMembersContent,
    LeftChatMember => LeftChatMemberContent,
    NewChatTitle => NewChatTitleContent,
    NewChatPhoto => NewChatPhotoContent,
    DeleteChatPhoto => DeleteChatPhotoContent,
    GroupChatCreated => GroupChatCreatedContent,
    SupergroupChatCreated => SupergroupChatCreatedContent,
    ChannelChatCreated => ChannelChatCreatedContent,
    MessageAutoDeleteTimerChanged => MessageAutoDeleteTimerChangedContent,
    MigrateToChatId => MigrateToChatIdContent,
    MigrateFromChatId => MigrateFromChatIdContent,
    PinnedMessage => PinnedMessageContent,
    Invoice => InvoiceContent,
    SuccessfulPayment => SuccessfulPaymentContent,
    ConnectedWebsite => ConnectedWebsiteContent,
    PassportData => PassportDataContent,
    ProximityAlertTriggered => ProximityAlertTriggeredContent,
    VideoChatScheduled => VideoChatScheduledContent,
    VideoChatStarted => VideoChatStartedContent,
    VideoChatEnded => VideoChatEndedContent,
    VideoChatParticipantsInvited => VideoChatParticipantsInvitedContent,
    WebAppData => WebAppDataContent,
} _ => "Unknown");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::closure::{validate, Access, Closed, ClosureError, Slot, Variants};
    use serde_json::json;
    use static_assertions::{assert_fields, assert_impl_all};

    assert_fields!(Message: inner, reply_to_message);
    assert_fields!(ReplyMessage: message_id, chat, content);
    assert_impl_all!(Message: Deref<Target = ReplyMessage>, Clone, Send, Sync);

    fn base(id: i64) -> Value {
        json!({
            "message_id": id,
            "date": 1_628_594_197,
            "chat": { "id": 7, "type": "private", "first_name": "Ada" },
            "from": { "id": 7, "is_bot": false, "first_name": "Ada" }
        })
    }

    fn with(mut value: Value, extra: Value) -> Value {
        let map = value.as_object_mut().unwrap();
        for (k, v) in extra.as_object().unwrap() {
            map.insert(k.clone(), v.clone());
        }
        value
    }

    fn photo_size() -> Value {
        json!({ "file_id": "f", "file_unique_id": "u", "width": 90, "height": 90 })
    }

    #[test]
    fn text_message() {
        let message: Message =
            serde_json::from_value(with(base(1), json!({ "text": "/start" }))).unwrap();
        assert_eq!(message.message_id.get(), 1);
        assert_eq!(message.text(), Some("/start"));
        assert!(message.reply_to_message.is_none());
        assert!(!message.is_service());
    }

    #[test]
    fn reply_is_truncated_to_one_level() {
        let grandparent = with(base(1), json!({ "text": "first" }));
        let parent = with(
            base(2),
            json!({ "text": "second", "reply_to_message": grandparent }),
        );
        let raw = with(base(3), json!({ "text": "third", "reply_to_message": parent }));

        let message: Message = serde_json::from_value(raw).unwrap();
        let reply = message.reply_to_message.as_deref().unwrap();
        assert_eq!(reply.message_id.get(), 2);
        assert_eq!(reply.text(), Some("second"));

        // The nested reference is dropped on decode and never re-emitted.
        let reencoded = serde_json::to_value(&message).unwrap();
        assert!(reencoded["reply_to_message"].get("reply_to_message").is_none());
    }

    #[test]
    fn reply_with_unknown_content_is_truncated() {
        let grandparent = with(base(1), json!({ "text": "first" }));
        let parent = with(
            base(2),
            json!({ "story": { "id": 9 }, "reply_to_message": grandparent }),
        );
        let raw = with(base(3), json!({ "text": "third", "reply_to_message": parent }));

        let message: Message = serde_json::from_value(raw).unwrap();
        let reply = message.reply_to_message.as_deref().unwrap();
        let MessageContent::Unknown(content) = &reply.content else {
            panic!("expected unknown content, got {:?}", reply.content);
        };
        assert!(content.contains_key("story"));
        assert!(!content.contains_key("reply_to_message"));

        let reencoded = serde_json::to_value(&message).unwrap();
        assert!(reencoded["reply_to_message"].get("reply_to_message").is_none());
        assert_eq!(reencoded["reply_to_message"]["story"], json!({ "id": 9 }));
    }

    #[test]
    fn pinned_message_with_unknown_content_is_truncated() {
        let replied = with(base(1), json!({ "text": "first" }));
        let pinned = with(
            base(2),
            json!({ "story": { "id": 9 }, "reply_to_message": replied }),
        );
        let message: Message =
            serde_json::from_value(with(base(3), json!({ "pinned_message": pinned }))).unwrap();
        let MessageContent::PinnedMessage(content) = &message.content else {
            panic!("expected a pinned message, got {:?}", message.content);
        };
        let MessageContent::Unknown(inner) = &content.pinned_message.content else {
            panic!("expected unknown content");
        };
        assert!(!inner.contains_key("reply_to_message"));
    }

    #[test]
    fn newer_entity_kind_keeps_the_text() {
        let message: Message = serde_json::from_value(with(
            base(1),
            json!({
                "text": "hi",
                "entities": [{ "type": "custom_emoji", "offset": 0, "length": 2, "custom_emoji_id": "1" }]
            }),
        ))
        .unwrap();
        assert_eq!(message.text(), Some("hi"));
        assert_eq!(message.entities().len(), 1);
    }

    #[test]
    fn animation_wins_over_document() {
        let doc = json!({ "file_id": "d", "file_unique_id": "du" });
        let animation = json!({
            "file_id": "a",
            "file_unique_id": "au",
            "width": 1,
            "height": 1,
            "duration": 2
        });
        let message: Message = serde_json::from_value(with(
            base(1),
            json!({ "animation": animation, "document": doc, "caption": "lol" }),
        ))
        .unwrap();
        assert!(matches!(message.content, MessageContent::Animation(_)));
        assert_eq!(message.caption(), Some("lol"));
    }

    #[test]
    fn venue_wins_over_location() {
        let location = json!({ "latitude": 1.0, "longitude": 2.0 });
        let message: Message = serde_json::from_value(with(
            base(1),
            json!({
                "venue": { "location": location, "title": "Cafe", "address": "Main st" },
                "location": location
            }),
        ))
        .unwrap();
        assert!(matches!(message.content, MessageContent::Venue(_)));
    }

    #[test]
    fn photo_caption_entities() {
        let message: Message = serde_json::from_value(with(
            base(1),
            json!({
                "photo": [photo_size()],
                "caption": "#tag",
                "caption_entities": [{ "type": "hashtag", "offset": 0, "length": 4 }]
            }),
        ))
        .unwrap();
        assert_eq!(message.entities().len(), 1);
        assert_eq!(message.caption(), Some("#tag"));
        assert!(message.text().is_none());
    }

    #[test]
    fn service_messages() {
        let migrated: Message = serde_json::from_value(with(
            base(1),
            json!({ "migrate_to_chat_id": -1_001_234_567_890_i64 }),
        ))
        .unwrap();
        let MessageContent::MigrateToChatId(content) = &migrated.content else {
            panic!("expected migration");
        };
        assert_eq!(content.migrate_to_chat_id.get(), -1_001_234_567_890);
        assert!(migrated.is_service());

        let created: Message =
            serde_json::from_value(with(base(2), json!({ "group_chat_created": true }))).unwrap();
        assert!(matches!(created.content, MessageContent::GroupChatCreated(_)));
    }

    #[test]
    fn pinned_message_has_no_reply() {
        let pinned = with(base(1), json!({ "text": "pin me" }));
        let message: Message =
            serde_json::from_value(with(base(2), json!({ "pinned_message": pinned }))).unwrap();
        let MessageContent::PinnedMessage(content) = &message.content else {
            panic!("expected pinned message");
        };
        assert_eq!(content.pinned_message.text(), Some("pin me"));
    }

    #[test]
    fn unknown_content_is_kept() {
        let message: Message = serde_json::from_value(with(
            base(1),
            json!({ "story": { "id": 3 } }),
        ))
        .unwrap();
        let MessageContent::Unknown(map) = &message.content else {
            panic!("expected unknown content");
        };
        assert_eq!(map["story"]["id"], 3);
    }

    #[test]
    fn closed_content_neighborhood() {
        let neighborhood = MessageContent::neighborhood();
        for field in ["text", "photo", "caption", "pinned_message", "web_app_data"] {
            assert!(neighborhood.contains(field), "{field}");
        }

        let text = MessageContent::closed_shape_of("Text");
        assert_eq!(text.slot("text"), Some(Slot::Required));
        assert_eq!(text.slot("entities"), Some(Slot::Optional));
        assert_eq!(text.slot("caption"), Some(Slot::Absent));
    }

    #[test]
    fn closed_photo_content() {
        let message: Message = serde_json::from_value(with(
            base(1),
            json!({ "photo": [photo_size()] }),
        ))
        .unwrap();
        let closed = Closed::new(message.inner.content).unwrap();
        assert_eq!(closed.variant(), "Photo");
        assert!(matches!(closed.get("photo"), Some(Access::Present(_))));
        assert_eq!(closed.get("caption"), Some(Access::Unset));
        assert_eq!(closed.get("text"), Some(Access::Absent));
    }

    #[test]
    fn unknown_content_is_open() {
        let closed = Closed::new(MessageContent::Unknown(Map::new())).unwrap();
        assert_eq!(closed.variant(), "Unknown");
        assert_eq!(closed.get("text"), Some(Access::Unset));
    }

    #[test]
    fn validate_flags_mixed_content() {
        let raw = json!({ "text": "hi", "photo": [photo_size()] });
        assert!(matches!(
            validate::<MessageContent>(&raw),
            Err(ClosureError::ForeignField { variant: "Text", .. })
        ));
    }
}
