//! Files and media sent to Telegram.

use serde::{
    de::{Deserializer, Error as DeError},
    Deserialize, Serialize, Serializer,
};
use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    path::{Path, PathBuf},
};

use crate::closure::{fields, variants};
use crate::types::{
    message::entity::{MessageEntity, ParseMode},
    util::Integer,
};

const ATTACH_SCHEME: &str = "attach://";

// ---------------------------------------------------------------------------
// InputFile
// ---------------------------------------------------------------------------

/// A file argument.
///
/// Files already on Telegram's servers are referenced by id, files on the
/// web by URL. New files are uploaded as parts of a `multipart/form-data`
/// request and referenced from the JSON arguments as `attach://<name>`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InputFile {
    FileId(String),
    Url(String),
    /// Reference to a part uploaded alongside the request under this name.
    Attach(String),
    Upload(InputFileUpload),
}

impl InputFile {
    pub fn file_id(id: impl Into<String>) -> Self {
        InputFile::FileId(id.into())
    }

    pub fn url(url: impl Into<String>) -> Self {
        InputFile::Url(url.into())
    }

    pub fn bytes(file_name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        InputFile::Upload(InputFileUpload::bytes(file_name, data))
    }

    pub fn path(path: impl Into<PathBuf>) -> Self {
        InputFile::Upload(InputFileUpload::path(path))
    }

    /// The upload carried by this argument, if any.
    pub fn upload(&self) -> Option<&InputFileUpload> {
        match self {
            InputFile::Upload(upload) => Some(upload),
            _ => None,
        }
    }
}

impl Serialize for InputFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            InputFile::FileId(id) => serializer.serialize_str(id),
            InputFile::Url(url) => serializer.serialize_str(url),
            InputFile::Attach(name) => {
                serializer.serialize_str(&format!("{ATTACH_SCHEME}{name}"))
            }
            InputFile::Upload(upload) => serializer.serialize_str(&upload.attach_ref()),
        }
    }
}

impl<'de> Deserialize<'de> for InputFile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        if value.is_empty() {
            return Err(D::Error::custom("empty file reference"));
        }

        Ok(if let Some(name) = value.strip_prefix(ATTACH_SCHEME) {
            InputFile::Attach(name.to_owned())
        } else if value.starts_with("http://") || value.starts_with("https://") {
            InputFile::Url(value)
        } else {
            InputFile::FileId(value)
        })
    }
}

impl From<InputFileUpload> for InputFile {
    fn from(upload: InputFileUpload) -> Self {
        InputFile::Upload(upload)
    }
}

/// A new file to upload.
#[derive(Clone, Eq, PartialEq)]
pub struct InputFileUpload {
    name: String,
    pub file_name: String,
    pub data: UploadData,
}

/// Where the bytes of an upload come from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UploadData {
    Bytes(Vec<u8>),
    /// Read when the request body is built.
    Path(PathBuf),
}

impl InputFileUpload {
    pub fn bytes(file_name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: attach_name(),
            file_name: file_name.into(),
            data: UploadData::Bytes(data.into()),
        }
    }

    pub fn path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_owned());
        Self {
            name: attach_name(),
            file_name,
            data: UploadData::Path(path),
        }
    }

    /// Name of the multipart part carrying the bytes.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `attach://<name>` reference written into the JSON arguments.
    pub fn attach_ref(&self) -> String {
        format!("{ATTACH_SCHEME}{}", self.name)
    }

    /// Local path of the file, when it is read from disk.
    pub fn source_path(&self) -> Option<&Path> {
        match &self.data {
            UploadData::Path(path) => Some(path),
            UploadData::Bytes(_) => None,
        }
    }
}

impl Debug for InputFileUpload {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut s = f.debug_struct("InputFileUpload");
        s.field("name", &self.name).field("file_name", &self.file_name);
        match &self.data {
            UploadData::Bytes(bytes) => s.field("bytes", &bytes.len()),
            UploadData::Path(path) => s.field("path", path),
        };
        s.finish()
    }
}

fn attach_name() -> String {
    format!("file{:016x}", rand::random::<u64>())
}

// ---------------------------------------------------------------------------
// InputMedia
// ---------------------------------------------------------------------------

/// Content of a media message to send, as used by `sendMediaGroup` and
/// `editMessageMedia`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputMedia {
    Photo(InputMediaPhoto),
    Video(InputMediaVideo),
    Animation(InputMediaAnimation),
    Audio(InputMediaAudio),
    Document(InputMediaDocument),
}

impl InputMedia {
    /// Files to upload along with the media: the media itself and its
    /// thumbnail.
    pub fn uploads(&self) -> Vec<&InputFileUpload> {
        let (media, thumb) = match self {
            InputMedia::Photo(m) => (&m.media, None),
            InputMedia::Video(m) => (&m.media, m.thumb.as_ref()),
            InputMedia::Animation(m) => (&m.media, m.thumb.as_ref()),
            InputMedia::Audio(m) => (&m.media, m.thumb.as_ref()),
            InputMedia::Document(m) => (&m.media, m.thumb.as_ref()),
        };
        media
            .upload()
            .into_iter()
            .chain(thumb.and_then(InputFile::upload))
            .collect()
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InputMediaPhoto {
    pub media: InputFile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
}

impl InputMediaPhoto {
    pub fn new(media: impl Into<InputFile>) -> Self {
        Self {
            media: media.into(),
            caption: None,
            parse_mode: None,
            caption_entities: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InputMediaVideo {
    pub media: InputFile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb: Option<InputFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Integer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Integer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Integer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_streaming: Option<bool>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InputMediaAnimation {
    pub media: InputFile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb: Option<InputFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Integer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Integer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Integer>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InputMediaAudio {
    pub media: InputFile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb: Option<InputFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Integer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InputMediaDocument {
    pub media: InputFile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb: Option<InputFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    /// Only meaningful for uploads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_content_type_detection: Option<bool>,
}

fields!(InputMediaPhoto {
    required: ["type", "media"],
    optional: ["caption", "parse_mode", "caption_entities"],
});
fields!(InputMediaVideo {
    required: ["type", "media"],
    optional: [
        "thumb",
        "caption",
        "parse_mode",
        "caption_entities",
        "width",
        "height",
        "duration",
        "supports_streaming",
    ],
});
fields!(InputMediaAnimation {
    required: ["type", "media"],
    optional: [
        "thumb",
        "caption",
        "parse_mode",
        "caption_entities",
        "width",
        "height",
        "duration",
    ],
});
fields!(InputMediaAudio {
    required: ["type", "media"],
    optional: [
        "thumb",
        "caption",
        "parse_mode",
        "caption_entities",
        "duration",
        "performer",
        "title",
    ],
});
fields!(InputMediaDocument {
    required: ["type", "media"],
    optional: [
        "thumb",
        "caption",
        "parse_mode",
        "caption_entities",
        "disable_content_type_detection",
    ],
});

variants!(InputMedia {
    Photo => InputMediaPhoto,
    Video => InputMediaVideo,
    Animation => InputMediaAnimation,
    Audio => InputMediaAudio,
    Document => InputMediaDocument,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::closure::{validate, Access, Closed, ClosureError, Slot, Variants};
    use serde_json::json;
    use serde_test::{assert_de_tokens, assert_ser_tokens, Token};

    #[test]
    fn input_file_references() {
        assert_ser_tokens(&InputFile::file_id("AgAD"), &[Token::Str("AgAD")]);
        assert_de_tokens(
            &InputFile::url("https://example.com/cat.png"),
            &[Token::Str("https://example.com/cat.png")],
        );
        assert_de_tokens(&InputFile::Attach("cat".to_owned()), &[Token::Str("attach://cat")]);
    }

    #[test]
    fn uploads_serialize_as_attach_refs() {
        let upload = InputFileUpload::bytes("cat.png", vec![1_u8, 2, 3]);
        let expected = format!("attach://{}", upload.name());
        let file = InputFile::from(upload);
        assert_eq!(serde_json::to_value(&file).unwrap(), json!(expected));
    }

    #[test]
    fn upload_names_are_unique() {
        let a = InputFileUpload::bytes("a", Vec::new());
        let b = InputFileUpload::bytes("a", Vec::new());
        assert_ne!(a.name(), b.name());
    }

    #[test]
    fn path_upload_takes_file_name() {
        let upload = InputFileUpload::path("/tmp/report.pdf");
        assert_eq!(upload.file_name, "report.pdf");
        assert_eq!(upload.source_path(), Some(Path::new("/tmp/report.pdf")));
    }

    #[test]
    fn media_uploads_include_thumb() {
        let media = InputMedia::Video(InputMediaVideo {
            media: InputFile::bytes("clip.mp4", vec![0_u8]),
            thumb: Some(InputFile::bytes("thumb.jpg", vec![1_u8])),
            caption: None,
            parse_mode: None,
            caption_entities: None,
            width: None,
            height: None,
            duration: None,
            supports_streaming: Some(true),
        });
        let uploads = media.uploads();
        assert_eq!(uploads.len(), 2);
        assert_eq!(uploads[1].file_name, "thumb.jpg");

        let by_id = InputMedia::Photo(InputMediaPhoto::new(InputFile::file_id("AgAD")));
        assert!(by_id.uploads().is_empty());
    }

    #[test]
    fn closed_input_media() {
        let photo = InputMedia::closed_shape_of("Photo");
        assert_eq!(photo.slot("supports_streaming"), Some(Slot::Absent));
        assert_eq!(photo.slot("caption"), Some(Slot::Optional));

        let closed = Closed::new(InputMedia::Photo(InputMediaPhoto::new(InputFile::file_id(
            "AgAD",
        ))))
        .unwrap();
        assert_eq!(closed.get("type"), Some(Access::Present(&json!("photo"))));
        assert_eq!(closed.get("thumb"), Some(Access::Absent));
        assert_eq!(closed.get("performer"), Some(Access::Absent));

        let raw = json!({ "type": "photo", "media": "AgAD", "duration": 3 });
        assert!(matches!(
            validate::<InputMedia>(&raw),
            Err(ClosureError::ForeignField { variant: "Photo", .. })
        ));
    }
}
