//! Telegram Bot API types.
//!
//! Records mirror the objects of the Bot API reference (version 6.1) field
//! for field. Optional fields are `Option<T>`, omitted from the wire when
//! `None`. Unions whose variants the API tells apart by a tag field are
//! internally tagged enums, the rest are decoded by which fields are
//! present.
//!
//! Three shapes differ from a literal transcription:
//!
//! | Object | Representation |
//! |---|---|
//! | `Message` | [`Message`] wraps a [`ReplyMessage`](message::ReplyMessage); nested replies can't hold a reply of their own. |
//! | `CallbackQuery` | `data` and `game_short_name` are one [`CallbackPayload`](callback::CallbackPayload). |
//! | `InlineKeyboardButton` | The action fields are one [`InlineKeyboardButtonKind`](markup::InlineKeyboardButtonKind). |
//!
//! Unions implementing [`Variants`](crate::closure::Variants) can be viewed
//! through their closed shape, see [`closure`](crate::closure).

// ===========================================================================
// Sub-modules
// ===========================================================================

/// Type-safe IDs with marker types.
pub mod id;

/// Scalar aliases, timestamps and `True`.
pub mod util;

/// Users and profile photos.
pub mod user;

/// Chats, members, permissions and invite links.
pub mod chat;

/// Photos, documents, locations, polls and other message payloads.
pub mod media;

/// Messages and their entities.
pub mod message;

/// Inline and reply keyboards.
pub mod markup;

/// Callback queries from inline keyboards.
pub mod callback;

/// Bot commands, scopes, the menu button and webhook status.
pub mod commands;

/// File arguments and input media.
pub mod input;

/// Inline queries and their results.
pub mod inline;

pub mod payments;

pub mod passport;

pub mod stickers;

pub mod games;

/// The `{ok, result}` response envelope.
pub mod response;


// ===========================================================================
// Builders and extensions
// ===========================================================================

/// Builder patterns for keyboards.
pub mod builders;

/// Extension traits for users, chats and messages.
pub mod ext;

// ===========================================================================
// Convenience re-exports
// ===========================================================================

// ---- IDs ------------------------------------------------------------------
pub use self::id::marker::{ChatMarker, MessageMarker, UpdateMarker, UserMarker};
pub use self::id::{ChatId, Id};

// ---- Scalars --------------------------------------------------------------
pub use self::util::{Float, Integer, True, UnixTime};

// ---- Core objects ---------------------------------------------------------
pub use self::callback::{CallbackPayload, CallbackQuery};
pub use self::chat::{Chat, ChatKind, ChatMember};
pub use self::input::{InputFile, InputFileUpload, InputMedia};
pub use self::markup::{
    InlineKeyboardButton, InlineKeyboardButtonKind, InlineKeyboardMarkup, KeyboardButton,
    ReplyKeyboardMarkup, ReplyMarkup,
};
pub use self::message::{
    entity::{MessageEntity, MessageEntityKind, ParseMode},
    Message, MessageContent, ReplyMessage,
};
pub use self::response::{ApiError, ApiResponse, ResponseParameters};
pub use self::user::User;

// ---- Extension traits -----------------------------------------------------
pub use self::ext::{ChatExt, MessageExt, UserExt};
