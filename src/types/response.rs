//! The envelope every Bot API call answers with.
//!
//! ```json
//! { "ok": true, "result": { ... } }
//! { "ok": false, "error_code": 400, "description": "Bad Request: ...", "parameters": { ... } }
//! ```

use serde::{
    de::{Deserializer, Error as DeError},
    ser::{SerializeMap, Serializer},
    Deserialize, Serialize,
};
use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

use crate::types::id::{marker::ChatMarker, Id};

/// A decoded response envelope: the result of a successful call or the
/// error Telegram reported.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiResponse<T> {
    Ok(T),
    Err(ApiError),
}

impl<T> ApiResponse<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, ApiResponse::Ok(_))
    }

    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            ApiResponse::Ok(value) => Ok(value),
            ApiResponse::Err(error) => Err(error),
        }
    }
}

impl<T> From<ApiResponse<T>> for Result<T, ApiError> {
    fn from(response: ApiResponse<T>) -> Self {
        response.into_result()
    }
}

#[derive(Deserialize)]
struct RawResponse<T> {
    ok: bool,
    result: Option<T>,
    error_code: Option<i64>,
    description: Option<String>,
    parameters: Option<ResponseParameters>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ApiResponse<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawResponse::<T>::deserialize(deserializer)?;

        if raw.ok {
            let result = raw.result.ok_or_else(|| D::Error::missing_field("result"))?;
            return Ok(ApiResponse::Ok(result));
        }

        Ok(ApiResponse::Err(ApiError {
            error_code: raw
                .error_code
                .ok_or_else(|| D::Error::missing_field("error_code"))?,
            description: raw
                .description
                .ok_or_else(|| D::Error::missing_field("description"))?,
            parameters: raw.parameters,
        }))
    }
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ApiResponse::Ok(result) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("ok", &true)?;
                map.serialize_entry("result", result)?;
                map.end()
            }
            ApiResponse::Err(error) => {
                let len = 3 + usize::from(error.parameters.is_some());
                let mut map = serializer.serialize_map(Some(len))?;
                map.serialize_entry("ok", &false)?;
                map.serialize_entry("error_code", &error.error_code)?;
                map.serialize_entry("description", &error.description)?;
                if let Some(parameters) = &error.parameters {
                    map.serialize_entry("parameters", parameters)?;
                }
                map.end()
            }
        }
    }
}

/// An unsuccessful call as reported by Telegram.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ApiError {
    /// Mirrors an HTTP status code, subject to change.
    pub error_code: i64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ResponseParameters>,
}

impl ApiError {
    /// Seconds to wait before repeating a call that hit flood control.
    pub fn retry_after(&self) -> Option<u32> {
        self.parameters.as_ref()?.retry_after
    }

    /// The supergroup a group was migrated to.
    pub fn migrate_to_chat_id(&self) -> Option<Id<ChatMarker>> {
        self.parameters.as_ref()?.migrate_to_chat_id
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "telegram error {}: {}", self.error_code, self.description)
    }
}

impl Error for ApiError {}

/// Hints on how an unsuccessful request can be retried.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ResponseParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<Id<ChatMarker>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn success_envelope() {
        let response: ApiResponse<Value> =
            serde_json::from_str(r#"{"ok":true,"result":{"id":42}}"#).unwrap();
        assert_eq!(response, ApiResponse::Ok(json!({ "id": 42 })));
    }

    #[test]
    fn error_envelope() {
        let response: ApiResponse<Value> =
            serde_json::from_str(r#"{"ok":false,"error_code":400,"description":"Bad Request"}"#)
                .unwrap();
        let ApiResponse::Err(error) = response else {
            panic!("expected an error");
        };
        assert_eq!(error.error_code, 400);
        assert_eq!(error.description, "Bad Request");
        assert_eq!(error.parameters, None);
        assert_eq!(error.to_string(), "telegram error 400: Bad Request");
    }

    #[test]
    fn error_parameters() {
        let response: ApiResponse<bool> = serde_json::from_value(json!({
            "ok": false,
            "error_code": 429,
            "description": "Too Many Requests: retry after 5",
            "parameters": { "retry_after": 5 }
        }))
        .unwrap();
        let error = response.into_result().unwrap_err();
        assert_eq!(error.retry_after(), Some(5));
        assert_eq!(error.migrate_to_chat_id(), None);

        let migrated: ApiResponse<bool> = serde_json::from_value(json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: group chat was upgraded to a supergroup chat",
            "parameters": { "migrate_to_chat_id": -1_001_234_567_890_i64 }
        }))
        .unwrap();
        let error = migrated.into_result().unwrap_err();
        assert_eq!(error.migrate_to_chat_id().map(Id::get), Some(-1_001_234_567_890));
    }

    #[test]
    fn ok_without_result_is_rejected() {
        assert!(serde_json::from_str::<ApiResponse<Value>>(r#"{"ok":true}"#).is_err());
        assert!(serde_json::from_str::<ApiResponse<Value>>(r#"{"ok":false}"#).is_err());
    }

    #[test]
    fn serializes_both_shapes() {
        assert_eq!(
            serde_json::to_value(ApiResponse::Ok(true)).unwrap(),
            json!({ "ok": true, "result": true })
        );
        let error: ApiResponse<bool> = ApiResponse::Err(ApiError {
            error_code: 403,
            description: "Forbidden".to_owned(),
            parameters: None,
        });
        assert_eq!(
            serde_json::to_value(error).unwrap(),
            json!({ "ok": false, "error_code": 403, "description": "Forbidden" })
        );
    }
}
