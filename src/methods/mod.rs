//! Call signatures of the Bot API.
//!
//! Every remote operation is a struct holding its arguments. The struct
//! implements [`Method`], which names the operation and its result type, so
//! [`Bot::execute`](crate::http::Bot::execute) can turn any of them into a
//! future of the typed result.
//!
//! Required arguments are taken by `new`; optional ones are set with the
//! builder method of the same name:
//!
//! ```
//! use botgram::methods::{messages::SendMessage, Method, Ret};
//! use botgram::types::message::{entity::ParseMode, Message};
//!
//! let send = SendMessage::new(42_i64, "<b>hi</b>").parse_mode(ParseMode::Html);
//! assert_eq!(SendMessage::NAME, "sendMessage");
//!
//! fn returns_message(_: Option<Ret<SendMessage>>) -> Option<Message> { None }
//! let _ = returns_message(None);
//! # let _ = send;
//! ```

pub mod bot;
pub mod chats;
pub mod editing;
pub mod games;
pub mod inline;
pub mod messages;
pub mod passport;
pub mod payments;
pub mod stickers;
pub mod updates;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::types::{
    id::{marker::MessageMarker, ChatId, Id},
    input::{InputFile, InputFileUpload, InputMedia},
    message::Message,
    util::True,
};

/// A Bot API operation.
pub trait Method: Serialize {
    /// Name of the operation as it appears in the request URL.
    const NAME: &'static str;

    /// What the `result` field of a successful response decodes into.
    type Response: DeserializeOwned;

    /// Files that must be uploaded with the request.
    ///
    /// When this is non-empty the call is sent as `multipart/form-data`.
    fn uploads(&self) -> Vec<&InputFileUpload> {
        Vec::new()
    }
}

/// The result type of a method.
pub type Ret<M> = <M as Method>::Response;

/// Result of operations that edit either a chat message or an inline
/// message: the edited message in the first case, `true` in the second.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MessageOrTrue {
    Message(Box<Message>),
    True(True),
}

impl MessageOrTrue {
    pub fn message(&self) -> Option<&Message> {
        match self {
            MessageOrTrue::Message(message) => Some(&**message),
            MessageOrTrue::True(_) => None,
        }
    }
}

/// The message an edit applies to.
///
/// Chat messages are addressed by chat and message id, messages sent via
/// inline mode by their inline id.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MessageTarget {
    Chat {
        chat_id: ChatId,
        message_id: Id<MessageMarker>,
    },
    Inline {
        inline_message_id: String,
    },
}

impl MessageTarget {
    pub fn chat(chat_id: impl Into<ChatId>, message_id: impl Into<Id<MessageMarker>>) -> Self {
        MessageTarget::Chat {
            chat_id: chat_id.into(),
            message_id: message_id.into(),
        }
    }

    pub fn inline(inline_message_id: impl Into<String>) -> Self {
        MessageTarget::Inline {
            inline_message_id: inline_message_id.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Upload collection
// ---------------------------------------------------------------------------

/// Arguments that may carry files to upload.
pub(crate) trait CollectUploads {
    fn collect_uploads<'a>(&'a self, out: &mut Vec<&'a InputFileUpload>);
}

impl CollectUploads for InputFile {
    fn collect_uploads<'a>(&'a self, out: &mut Vec<&'a InputFileUpload>) {
        out.extend(self.upload());
    }
}

impl CollectUploads for InputMedia {
    fn collect_uploads<'a>(&'a self, out: &mut Vec<&'a InputFileUpload>) {
        out.extend(self.uploads());
    }
}

impl<T: CollectUploads> CollectUploads for Option<T> {
    fn collect_uploads<'a>(&'a self, out: &mut Vec<&'a InputFileUpload>) {
        if let Some(inner) = self {
            inner.collect_uploads(out);
        }
    }
}

impl<T: CollectUploads> CollectUploads for Vec<T> {
    fn collect_uploads<'a>(&'a self, out: &mut Vec<&'a InputFileUpload>) {
        for item in self {
            item.collect_uploads(out);
        }
    }
}

// ---------------------------------------------------------------------------
// Declaration macro
// ---------------------------------------------------------------------------

/// Declare a method struct with its constructor, setters and [`Method`]
/// impl.
///
/// ```ignore
/// method! {
///     /// Send a text message.
///     SendMessage("sendMessage") -> Message {
///         required { chat_id: ChatId, text: String }
///         optional { parse_mode: ParseMode }
///     }
/// }
/// ```
///
/// Fields listed in `uploads [..]` must implement `CollectUploads`.
macro_rules! method {
    (
        $(#[$meta:meta])*
        $name:ident($api:literal) -> $ret:ty {
            required { $( $(#[$rmeta:meta])* $req:ident : $rty:ty ),* $(,)? }
            optional { $( $(#[$ometa:meta])* $opt:ident : $oty:ty ),* $(,)? }
            $( uploads [ $($file:ident),* $(,)? ] )?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, serde::Serialize)]
        pub struct $name {
            $(
                $(#[$rmeta])*
                pub $req: $rty,
            )*
            $(
                $(#[$ometa])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $opt: Option<$oty>,
            )*
        }

        impl $name {
            #[allow(clippy::new_without_default, clippy::too_many_arguments)]
            pub fn new($($req: impl Into<$rty>),*) -> Self {
                Self {
                    $($req: $req.into(),)*
                    $($opt: None,)*
                }
            }

            $(
                $(#[$ometa])*
                pub fn $opt(mut self, $opt: impl Into<$oty>) -> Self {
                    self.$opt = Some($opt.into());
                    self
                }
            )*
        }

        impl $crate::methods::Method for $name {
            const NAME: &'static str = $api;
            type Response = $ret;

            fn uploads(&self) -> Vec<&$crate::types::input::InputFileUpload> {
                #[allow(unused_mut)]
                let mut uploads = Vec::new();
                $($(
                    $crate::methods::CollectUploads::collect_uploads(&self.$file, &mut uploads);
                )*)?
                uploads
            }
        }
    };
}

pub(crate) use method;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_or_true() {
        let edited: MessageOrTrue = serde_json::from_value(json!(true)).unwrap();
        assert!(edited.message().is_none());

        let edited: MessageOrTrue = serde_json::from_value(json!({
            "message_id": 3,
            "date": 0,
            "chat": { "id": 1, "type": "private", "first_name": "Ada" },
            "text": "edited"
        }))
        .unwrap();
        assert_eq!(edited.message().and_then(|m| m.text()), Some("edited"));

        assert!(serde_json::from_value::<MessageOrTrue>(json!(false)).is_err());
    }

    #[test]
    fn message_target_shapes() {
        assert_eq!(
            serde_json::to_value(MessageTarget::chat(-100_i64, 7_i64)).unwrap(),
            json!({ "chat_id": -100, "message_id": 7 })
        );
        assert_eq!(
            serde_json::to_value(MessageTarget::inline("AAE")).unwrap(),
            json!({ "inline_message_id": "AAE" })
        );
    }

    #[test]
    fn uploads_are_collected_in_order() {
        let files = vec![
            Some(InputFile::bytes("a.png", vec![1_u8])),
            None,
            Some(InputFile::file_id("AgAD")),
            Some(InputFile::bytes("b.png", vec![2_u8])),
        ];
        let mut out = Vec::new();
        files.collect_uploads(&mut out);
        let names: Vec<_> = out.iter().map(|u| u.file_name.as_str()).collect();
        assert_eq!(names, ["a.png", "b.png"]);
    }
}
