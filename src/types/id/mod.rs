//! Type-safe numeric IDs.
//!
//! Every numeric identifier is an [`Id`] tagged with a marker from
//! [`marker`]. Arguments that accept either a numeric chat id or a public
//! `@username` take a [`ChatId`].

pub mod marker;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use self::marker::{ChatMarker, UserMarker};

/// ID of a resource, such as the ID of a [chat] or [user].
///
/// The value is a 64-bit signed integer: chat ids may exceed 32 bits and
/// are negative for groups and channels.
///
/// [chat]: marker::ChatMarker
/// [user]: marker::UserMarker
pub struct Id<T> {
    phantom: PhantomData<fn(T) -> T>,
    value: i64,
}

impl<T> Id<T> {
    /// Create an ID from a raw integer.
    pub const fn new(value: i64) -> Self {
        Self {
            phantom: PhantomData,
            value,
        }
    }

    /// Raw value of the ID.
    pub const fn get(self) -> i64 {
        self.value
    }

    /// Cast an ID from one type to another.
    ///
    /// A private chat's id equals the id of the user on the other side, so
    /// `Id<UserMarker>` to `Id<ChatMarker>` is the common case.
    pub const fn cast<New>(self) -> Id<New> {
        Id::new(self.value)
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> Debug for Id<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Id")?;
        let type_name = std::any::type_name::<T>();
        if let Some(position) = type_name.rfind("::") {
            if let Some(slice) = type_name.get(position + 2..) {
                f.write_str("<")?;
                f.write_str(slice)?;
                f.write_str(">")?;
            }
        }
        f.write_str("(")?;
        Debug::fmt(&self.value, f)?;
        f.write_str(")")
    }
}

impl<T> Display for Id<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.value, f)
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i64(self.value);
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.get()
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Self::new)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value)
    }
}

// ---------------------------------------------------------------------------
// ChatId
// ---------------------------------------------------------------------------

/// Target chat of a method: a numeric id or the `@username` of a public
/// group or channel.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(Id<ChatMarker>),
    Username(String),
}

impl ChatId {
    /// Build a username target, adding the leading `@` when missing.
    pub fn username(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.starts_with('@') {
            Self::Username(name)
        } else {
            Self::Username(format!("@{name}"))
        }
    }
}

impl From<Id<ChatMarker>> for ChatId {
    fn from(id: Id<ChatMarker>) -> Self {
        Self::Id(id)
    }
}

impl From<Id<UserMarker>> for ChatId {
    fn from(id: Id<UserMarker>) -> Self {
        Self::Id(id.cast())
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self::Id(Id::new(id))
    }
}

impl From<&str> for ChatId {
    fn from(name: &str) -> Self {
        Self::username(name)
    }
}

impl From<String> for ChatId {
    fn from(name: String) -> Self {
        Self::username(name)
    }
}

impl Display for ChatId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Id(id) => Display::fmt(id, f),
            Self::Username(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        marker::{ChatMarker, MessageMarker, UpdateMarker, UserMarker},
        ChatId, Id,
    };
    use serde_test::{assert_tokens, Token};
    use static_assertions::{assert_impl_all, assert_not_impl_any};
    use std::{fmt::Debug, hash::Hash};

    assert_impl_all!(ChatMarker: Debug, Send, Sync);
    assert_impl_all!(MessageMarker: Debug, Send, Sync);
    assert_impl_all!(UpdateMarker: Debug, Send, Sync);
    assert_impl_all!(UserMarker: Debug, Send, Sync);
    assert_impl_all!(Id<ChatMarker>: Clone, Copy, Debug, Eq, Hash, Ord, Send, Sync);
    assert_not_impl_any!(Id<ChatMarker>: Default);

    #[test]
    fn supergroup_id_survives_round_trip() {
        // Exceeds 32 bits; must not be truncated.
        let id = Id::<ChatMarker>::new(-1_001_234_567_890);
        assert_tokens(&id, &[Token::I64(-1_001_234_567_890)]);

        let parsed: Id<ChatMarker> = serde_json::from_str("-1001234567890").unwrap();
        assert_eq!(parsed, id);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "-1001234567890");
    }

    #[test]
    fn fifty_two_bit_value() {
        let max_safe = (1_i64 << 53) - 1;
        let parsed: Id<UserMarker> = serde_json::from_str(&max_safe.to_string()).unwrap();
        assert_eq!(parsed.get(), max_safe);
    }

    #[test]
    fn debug_includes_marker() {
        assert_eq!(
            format!("{:?}", Id::<MessageMarker>::new(7)),
            "Id<MessageMarker>(7)"
        );
    }

    #[test]
    fn cast_user_to_chat() {
        let user = Id::<UserMarker>::new(42);
        let chat: Id<ChatMarker> = user.cast();
        assert_eq!(chat.get(), 42);
        assert_eq!(ChatId::from(user), ChatId::Id(Id::new(42)));
    }

    #[test]
    fn chat_id_untagged() {
        assert_eq!(serde_json::to_string(&ChatId::from(-100)).unwrap(), "-100");
        assert_eq!(
            serde_json::to_string(&ChatId::from("botgram")).unwrap(),
            "\"@botgram\""
        );
        let parsed: ChatId = serde_json::from_str("\"@channel\"").unwrap();
        assert_eq!(parsed, ChatId::Username("@channel".to_owned()));
    }
}
