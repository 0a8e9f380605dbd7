//! Telegram Passport.

use crate::methods::method;
use crate::types::{
    id::{marker::UserMarker, Id},
    passport::PassportElementError,
    util::True,
};

method! {
    /// Report errors in the Passport data a user submitted.
    ///
    /// The user can't resubmit until the reported errors are fixed. Fields
    /// not reported stay accepted.
    SetPassportDataErrors("setPassportDataErrors") -> True {
        required {
            user_id: Id<UserMarker>,
            errors: Vec<PassportElementError>,
        }
        optional {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::passport::{PassportElementErrorFile, PassportElementType};
    use serde_json::json;

    #[test]
    fn errors_carry_their_source() {
        let call = SetPassportDataErrors::new(
            7_i64,
            vec![PassportElementError::Selfie(PassportElementErrorFile {
                kind: PassportElementType::Passport,
                file_hash: "aGFzaA==".to_owned(),
                message: "Face not visible".to_owned(),
            })],
        );
        assert_eq!(
            serde_json::to_value(&call).unwrap(),
            json!({
                "user_id": 7,
                "errors": [{
                    "source": "selfie",
                    "type": "passport",
                    "file_hash": "aGFzaA==",
                    "message": "Face not visible"
                }]
            })
        );
    }
}
