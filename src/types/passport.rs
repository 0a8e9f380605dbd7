//! Telegram Passport data shared with the bot, and errors reported back.

use serde::{Deserialize, Serialize};

use crate::closure::{fields, variants};
use crate::types::util::UnixTime;

/// Telegram Passport data the user shared with the bot.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PassportData {
    pub data: Vec<EncryptedPassportElement>,
    /// Needed to decrypt the data.
    pub credentials: EncryptedCredentials,
}

/// A file uploaded to Telegram Passport. Files are JPG, at most 10MB.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PassportFile {
    pub file_id: String,
    pub file_unique_id: String,
    pub file_size: u64,
    pub file_date: UnixTime,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassportElementType {
    PersonalDetails,
    Passport,
    DriverLicense,
    IdentityCard,
    InternalPassport,
    Address,
    UtilityBill,
    BankStatement,
    RentalAgreement,
    PassportRegistration,
    TemporaryRegistration,
    PhoneNumber,
    Email,
}

/// Documents or other Telegram Passport elements shared with the bot.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EncryptedPassportElement {
    #[serde(rename = "type")]
    pub kind: PassportElementType,
    /// Base64-encoded encrypted data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<PassportFile>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_side: Option<PassportFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse_side: Option<PassportFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selfie: Option<PassportFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<Vec<PassportFile>>,
    /// Base64-encoded element hash for `PassportElementError::Unspecified`.
    pub hash: String,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EncryptedCredentials {
    pub data: String,
    pub hash: String,
    /// Secret encrypted with the bot's public RSA key.
    pub secret: String,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// An error in the Telegram Passport element submitted that should be
/// resolved by the user, tagged by `source`.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum PassportElementError {
    #[serde(rename = "data")]
    DataField(PassportElementErrorDataField),
    FrontSide(PassportElementErrorFile),
    ReverseSide(PassportElementErrorFile),
    Selfie(PassportElementErrorFile),
    File(PassportElementErrorFile),
    Files(PassportElementErrorFiles),
    TranslationFile(PassportElementErrorFile),
    TranslationFiles(PassportElementErrorFiles),
    Unspecified(PassportElementErrorUnspecified),
}

impl PassportElementError {
    pub fn message(&self) -> &str {
        match self {
            PassportElementError::DataField(e) => &e.message,
            PassportElementError::FrontSide(e)
            | PassportElementError::ReverseSide(e)
            | PassportElementError::Selfie(e)
            | PassportElementError::File(e)
            | PassportElementError::TranslationFile(e) => &e.message,
            PassportElementError::Files(e) | PassportElementError::TranslationFiles(e) => {
                &e.message
            }
            PassportElementError::Unspecified(e) => &e.message,
        }
    }
}

/// An error in one of the data fields provided by the user.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PassportElementErrorDataField {
    #[serde(rename = "type")]
    pub kind: PassportElementType,
    pub field_name: String,
    pub data_hash: String,
    pub message: String,
}

/// An error with a single file: a document side, the selfie, a scan or a
/// translation.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PassportElementErrorFile {
    #[serde(rename = "type")]
    pub kind: PassportElementType,
    pub file_hash: String,
    pub message: String,
}

/// An error with a list of scans or translations.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PassportElementErrorFiles {
    #[serde(rename = "type")]
    pub kind: PassportElementType,
    pub file_hashes: Vec<String>,
    pub message: String,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PassportElementErrorUnspecified {
    #[serde(rename = "type")]
    pub kind: PassportElementType,
    pub element_hash: String,
    pub message: String,
}

fields!(PassportElementErrorDataField {
    required: ["source", "type", "field_name", "data_hash", "message"],
    optional: [],
});
fields!(PassportElementErrorFile {
    required: ["source", "type", "file_hash", "message"],
    optional: [],
});
fields!(PassportElementErrorFiles {
    required: ["source", "type", "file_hashes", "message"],
    optional: [],
});
fields!(PassportElementErrorUnspecified {
    required: ["source", "type", "element_hash", "message"],
    optional: [],
});

variants!(PassportElementError {
    DataField => PassportElementErrorDataField,
    FrontSide => PassportElementErrorFile,
    ReverseSide => PassportElementErrorFile,
    Selfie => PassportElementErrorFile,
    File => PassportElementErrorFile,
    Files => PassportElementErrorFiles,
    TranslationFile => PassportElementErrorFile,
    TranslationFiles => PassportElementErrorFiles,
    Unspecified => PassportElementErrorUnspecified,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::closure::{Access, Closed, Slot, Variants};
    use serde_json::json;

    #[test]
    fn source_tag() {
        let error = PassportElementError::DataField(PassportElementErrorDataField {
            kind: PassportElementType::Passport,
            field_name: "document_no".to_owned(),
            data_hash: "aGFzaA==".to_owned(),
            message: "Unreadable".to_owned(),
        });
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({
                "source": "data",
                "type": "passport",
                "field_name": "document_no",
                "data_hash": "aGFzaA==",
                "message": "Unreadable"
            })
        );
        assert_eq!(error.message(), "Unreadable");

        let files: PassportElementError = serde_json::from_value(json!({
            "source": "translation_files",
            "type": "utility_bill",
            "file_hashes": ["a", "b"],
            "message": "Blurry"
        }))
        .unwrap();
        assert!(matches!(files, PassportElementError::TranslationFiles(_)));
    }

    #[test]
    fn closed_errors_share_records() {
        let shapes = PassportElementError::closed_shapes();
        assert_eq!(shapes.len(), 9);

        let selfie = PassportElementError::closed_shape_of("Selfie");
        assert_eq!(selfie.slot("file_hash"), Some(Slot::Required));
        assert_eq!(selfie.slot("file_hashes"), Some(Slot::Absent));
        assert_eq!(selfie.slot("element_hash"), Some(Slot::Absent));

        let closed = Closed::new(PassportElementError::Unspecified(
            PassportElementErrorUnspecified {
                kind: PassportElementType::Email,
                element_hash: "h".to_owned(),
                message: "Wrong".to_owned(),
            },
        ))
        .unwrap();
        assert_eq!(closed.get("element_hash"), Some(Access::Present(&json!("h"))));
        assert_eq!(closed.get("field_name"), Some(Access::Absent));
    }
}
