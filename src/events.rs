//! Typed updates.
//!
//! `getUpdates` and webhooks deliver objects of the form
//! `{"update_id": 1, "<kind>": {...}}`, where exactly one optional field
//! carries the payload. The field name is the discriminant, so updates are
//! decoded by hand into [`UpdateKind`] rather than through a serde tag.

use bitflags::bitflags;
use serde::{
    de::{DeserializeOwned, Deserializer, Error as DeError, SeqAccess, Visitor},
    ser::{SerializeMap, SerializeSeq, Serializer},
    Deserialize, Serialize,
};
use serde_json::{Map, Value};
use std::fmt::{Formatter, Result as FmtResult};
use tracing::{debug, warn};

use crate::types::{
    callback::CallbackQuery,
    chat::{Chat, ChatJoinRequest, ChatMemberUpdated},
    id::{marker::UpdateMarker, Id},
    inline::{ChosenInlineResult, InlineQuery},
    media::{Poll, PollAnswer},
    message::Message,
    payments::{PreCheckoutQuery, ShippingQuery},
    user::User,
};

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// An incoming update.
#[derive(Clone, Debug, PartialEq)]
pub struct Update {
    /// Sequential identifier, used as the `offset` of the next
    /// `getUpdates` call.
    pub id: Id<UpdateMarker>,
    pub kind: UpdateKind,
}

/// The payload of an [`Update`].
#[derive(Clone, Debug, PartialEq)]
pub enum UpdateKind {
    Message(Message),
    EditedMessage(Message),
    ChannelPost(Message),
    EditedChannelPost(Message),
    InlineQuery(InlineQuery),
    ChosenInlineResult(ChosenInlineResult),
    CallbackQuery(CallbackQuery),
    ShippingQuery(ShippingQuery),
    PreCheckoutQuery(PreCheckoutQuery),
    /// New state of a poll. Only polls stopped or sent by the bot.
    Poll(Poll),
    PollAnswer(PollAnswer),
    /// The bot's own membership status changed.
    MyChatMember(ChatMemberUpdated),
    /// Someone else's membership changed. Only sent when listed in
    /// `allowed_updates`.
    ChatMember(ChatMemberUpdated),
    ChatJoinRequest(ChatJoinRequest),
    /// An update we don't have a typed variant for, or whose payload failed
    /// to decode. Carries the field name and raw JSON so callers can still
    /// inspect it.
    Unknown { name: String, data: Value },
}

impl Update {
    /// Build an update from its field name and payload.
    ///
    /// This never fails: unrecognised or malformed payloads become
    /// [`UpdateKind::Unknown`].
    pub fn from_parts(id: Id<UpdateMarker>, name: &str, data: Value) -> Self {
        Self {
            id,
            kind: UpdateKind::parse(name, data),
        }
    }

    /// The chat the update happened in, if any.
    pub fn chat(&self) -> Option<&Chat> {
        match &self.kind {
            UpdateKind::Message(m)
            | UpdateKind::EditedMessage(m)
            | UpdateKind::ChannelPost(m)
            | UpdateKind::EditedChannelPost(m) => Some(&m.chat),
            UpdateKind::CallbackQuery(q) => q.message.as_ref().map(|m| &m.chat),
            UpdateKind::MyChatMember(u) | UpdateKind::ChatMember(u) => Some(&u.chat),
            UpdateKind::ChatJoinRequest(r) => Some(&r.chat),
            _ => None,
        }
    }

    /// The user who caused the update, if any.
    pub fn from(&self) -> Option<&User> {
        match &self.kind {
            UpdateKind::Message(m)
            | UpdateKind::EditedMessage(m)
            | UpdateKind::ChannelPost(m)
            | UpdateKind::EditedChannelPost(m) => m.from.as_ref(),
            UpdateKind::InlineQuery(q) => Some(&q.from),
            UpdateKind::ChosenInlineResult(r) => Some(&r.from),
            UpdateKind::CallbackQuery(q) => Some(&q.from),
            UpdateKind::ShippingQuery(q) => Some(&q.from),
            UpdateKind::PreCheckoutQuery(q) => Some(&q.from),
            UpdateKind::PollAnswer(a) => Some(&a.user),
            UpdateKind::MyChatMember(u) | UpdateKind::ChatMember(u) => Some(&u.from),
            UpdateKind::ChatJoinRequest(r) => Some(&r.from),
            UpdateKind::Poll(_) | UpdateKind::Unknown { .. } => None,
        }
    }
}

impl UpdateKind {
    /// Parse a payload by its field name.
    fn parse(name: &str, data: Value) -> Self {
        macro_rules! typed {
            ($variant:ident) => {
                match Deserialize::deserialize(&data) {
                    Ok(payload) => UpdateKind::$variant(payload),
                    Err(e) => {
                        warn!(kind = name, error = %e, "failed to parse update payload");
                        UpdateKind::Unknown {
                            name: name.to_owned(),
                            data,
                        }
                    }
                }
            };
        }

        match name {
            "message" => typed!(Message),
            "edited_message" => typed!(EditedMessage),
            "channel_post" => typed!(ChannelPost),
            "edited_channel_post" => typed!(EditedChannelPost),
            "inline_query" => typed!(InlineQuery),
            "chosen_inline_result" => typed!(ChosenInlineResult),
            "callback_query" => typed!(CallbackQuery),
            "shipping_query" => typed!(ShippingQuery),
            "pre_checkout_query" => typed!(PreCheckoutQuery),
            "poll" => typed!(Poll),
            "poll_answer" => typed!(PollAnswer),
            "my_chat_member" => typed!(MyChatMember),
            "chat_member" => typed!(ChatMember),
            "chat_join_request" => typed!(ChatJoinRequest),
            _ => {
                debug!(kind = name, "unrecognised update kind");
                UpdateKind::Unknown {
                    name: name.to_owned(),
                    data,
                }
            }
        }
    }

    /// The wire name of the payload field.
    pub fn name(&self) -> &str {
        match self {
            UpdateKind::Message(_) => "message",
            UpdateKind::EditedMessage(_) => "edited_message",
            UpdateKind::ChannelPost(_) => "channel_post",
            UpdateKind::EditedChannelPost(_) => "edited_channel_post",
            UpdateKind::InlineQuery(_) => "inline_query",
            UpdateKind::ChosenInlineResult(_) => "chosen_inline_result",
            UpdateKind::CallbackQuery(_) => "callback_query",
            UpdateKind::ShippingQuery(_) => "shipping_query",
            UpdateKind::PreCheckoutQuery(_) => "pre_checkout_query",
            UpdateKind::Poll(_) => "poll",
            UpdateKind::PollAnswer(_) => "poll_answer",
            UpdateKind::MyChatMember(_) => "my_chat_member",
            UpdateKind::ChatMember(_) => "chat_member",
            UpdateKind::ChatJoinRequest(_) => "chat_join_request",
            UpdateKind::Unknown { name, .. } => name,
        }
    }

    /// The `allowed_updates` flag selecting this kind.
    pub fn update_type(&self) -> Option<UpdateTypes> {
        UpdateTypes::from_wire_name(self.name())
    }

    fn payload(&self) -> Result<Value, serde_json::Error> {
        match self {
            UpdateKind::Message(m)
            | UpdateKind::EditedMessage(m)
            | UpdateKind::ChannelPost(m)
            | UpdateKind::EditedChannelPost(m) => serde_json::to_value(m),
            UpdateKind::InlineQuery(q) => serde_json::to_value(q),
            UpdateKind::ChosenInlineResult(r) => serde_json::to_value(r),
            UpdateKind::CallbackQuery(q) => serde_json::to_value(q),
            UpdateKind::ShippingQuery(q) => serde_json::to_value(q),
            UpdateKind::PreCheckoutQuery(q) => serde_json::to_value(q),
            UpdateKind::Poll(p) => serde_json::to_value(p),
            UpdateKind::PollAnswer(a) => serde_json::to_value(a),
            UpdateKind::MyChatMember(u) | UpdateKind::ChatMember(u) => serde_json::to_value(u),
            UpdateKind::ChatJoinRequest(r) => serde_json::to_value(r),
            UpdateKind::Unknown { data, .. } => Ok(data.clone()),
        }
    }
}

impl<'de> Deserialize<'de> for Update {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut map = Map::<String, Value>::deserialize(deserializer)?;
        let id = map
            .remove("update_id")
            .ok_or_else(|| D::Error::missing_field("update_id"))?;
        let id = Id::<UpdateMarker>::deserialize(id).map_err(D::Error::custom)?;

        let mut payloads = map.into_iter().filter(|(_, data)| !data.is_null());
        let Some((name, data)) = payloads.next() else {
            return Err(D::Error::custom("update carries no payload"));
        };
        if let Some((extra, _)) = payloads.next() {
            warn!(update_id = %id, kind = %name, extra = %extra, "update carries more than one payload");
        }

        Ok(Update::from_parts(id, &name, data))
    }
}

impl Serialize for Update {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::Error as SerError;

        let payload = self.kind.payload().map_err(S::Error::custom)?;
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("update_id", &self.id)?;
        map.serialize_entry(self.kind.name(), &payload)?;
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Convenience trait for pulling a typed value out of an unknown update.
pub trait UnknownUpdateExt {
    /// If this is an `Unknown` update, try to deserialise its payload.
    fn try_parse_data<T: DeserializeOwned>(&self) -> Option<T>;
}

impl UnknownUpdateExt for Update {
    fn try_parse_data<T: DeserializeOwned>(&self) -> Option<T> {
        match &self.kind {
            UpdateKind::Unknown { data, .. } => serde_json::from_value(data.clone()).ok(),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Allowed updates
// ---------------------------------------------------------------------------

bitflags! {
    /// A set of update kinds, as passed in `allowed_updates`.
    ///
    /// Serialized as the list of wire names, e.g. `["message", "poll"]`.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct UpdateTypes: u16 {
        const MESSAGE = 1 << 0;
        const EDITED_MESSAGE = 1 << 1;
        const CHANNEL_POST = 1 << 2;
        const EDITED_CHANNEL_POST = 1 << 3;
        const INLINE_QUERY = 1 << 4;
        const CHOSEN_INLINE_RESULT = 1 << 5;
        const CALLBACK_QUERY = 1 << 6;
        const SHIPPING_QUERY = 1 << 7;
        const PRE_CHECKOUT_QUERY = 1 << 8;
        const POLL = 1 << 9;
        const POLL_ANSWER = 1 << 10;
        const MY_CHAT_MEMBER = 1 << 11;
        const CHAT_MEMBER = 1 << 12;
        const CHAT_JOIN_REQUEST = 1 << 13;
    }
}

impl UpdateTypes {
    /// The flag for a wire name such as `"callback_query"`.
    pub fn from_wire_name(name: &str) -> Option<Self> {
        if name.bytes().any(|b| b.is_ascii_uppercase()) {
            return None;
        }
        Self::from_name(&name.to_ascii_uppercase())
    }

    /// Wire names of the set flags, in declaration order.
    pub fn wire_names(self) -> impl Iterator<Item = String> {
        self.iter_names().map(|(name, _)| name.to_ascii_lowercase())
    }
}

impl Serialize for UpdateTypes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(None)?;
        for name in self.wire_names() {
            seq.serialize_element(&name)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for UpdateTypes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct UpdateTypesVisitor;

        impl<'de> Visitor<'de> for UpdateTypesVisitor {
            type Value = UpdateTypes;

            fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
                f.write_str("a list of update kinds")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut types = UpdateTypes::empty();
                while let Some(name) = seq.next_element::<String>()? {
                    match UpdateTypes::from_wire_name(&name) {
                        Some(flag) => types |= flag,
                        None => debug!(kind = %name, "ignoring unknown update kind"),
                    }
                }
                Ok(types)
            }
        }

        deserializer.deserialize_seq(UpdateTypesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serde_test::{assert_tokens, Token};

    fn user() -> Value {
        json!({ "id": 7, "is_bot": false, "first_name": "Ada" })
    }

    #[test]
    fn message_update() {
        let update: Update = serde_json::from_value(json!({
            "update_id": 10_000,
            "message": {
                "message_id": 1365,
                "date": 1_441_645_532,
                "chat": { "id": 1_111_111, "type": "private", "first_name": "Ada" },
                "from": user(),
                "text": "/start"
            }
        }))
        .unwrap();

        assert_eq!(update.id.get(), 10_000);
        assert_eq!(update.kind.name(), "message");
        assert_eq!(update.kind.update_type(), Some(UpdateTypes::MESSAGE));
        assert_eq!(update.chat().map(|c| c.id.get()), Some(1_111_111));
        assert_eq!(update.from().map(|u| u.first_name.as_str()), Some("Ada"));
        let UpdateKind::Message(message) = &update.kind else {
            panic!("expected a message");
        };
        assert_eq!(message.text(), Some("/start"));
    }

    #[test]
    fn callback_update() {
        let update: Update = serde_json::from_value(json!({
            "update_id": 2,
            "callback_query": {
                "id": "q",
                "from": user(),
                "chat_instance": "ci",
                "data": "vote:1"
            }
        }))
        .unwrap();
        let UpdateKind::CallbackQuery(query) = &update.kind else {
            panic!("expected a callback query");
        };
        assert_eq!(query.data(), Some("vote:1"));
        assert!(update.chat().is_none());
    }

    #[test]
    fn unknown_kind_is_preserved() {
        let raw = json!({ "update_id": 3, "message_reaction": { "emoji": "👍" } });
        let update: Update = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(update.kind.name(), "message_reaction");
        assert_eq!(update.kind.update_type(), None);

        #[derive(Deserialize)]
        struct Reaction {
            emoji: String,
        }
        let reaction: Reaction = update.try_parse_data().unwrap();
        assert_eq!(reaction.emoji, "👍");

        assert_eq!(serde_json::to_value(&update).unwrap(), raw);
    }

    #[test]
    fn malformed_payload_becomes_unknown() {
        let update: Update =
            serde_json::from_value(json!({ "update_id": 4, "poll": { "id": 1 } })).unwrap();
        assert!(matches!(update.kind, UpdateKind::Unknown { ref name, .. } if name == "poll"));
    }

    #[test]
    fn malformed_payload_keeps_raw_json() {
        let raw = json!({ "id": 1, "unexpected": [true] });
        let kind = UpdateKind::parse("poll", raw.clone());
        assert_eq!(
            kind,
            UpdateKind::Unknown {
                name: "poll".to_owned(),
                data: raw
            }
        );
    }

    #[test]
    fn update_requires_id_and_payload() {
        assert!(serde_json::from_value::<Update>(json!({ "message": {} })).is_err());
        assert!(serde_json::from_value::<Update>(json!({ "update_id": 5 })).is_err());
    }

    #[test]
    fn update_types_as_names() {
        assert_tokens(
            &(UpdateTypes::MESSAGE | UpdateTypes::CALLBACK_QUERY),
            &[
                Token::Seq { len: None },
                Token::Str("message"),
                Token::Str("callback_query"),
                Token::SeqEnd,
            ],
        );
        assert_eq!(
            serde_json::to_value(UpdateTypes::empty()).unwrap(),
            json!([])
        );
    }

    #[test]
    fn update_types_ignore_unknown_names() {
        let types: UpdateTypes =
            serde_json::from_value(json!(["chat_member", "message_reaction", "MESSAGE"])).unwrap();
        assert_eq!(types, UpdateTypes::CHAT_MEMBER);
    }
}
