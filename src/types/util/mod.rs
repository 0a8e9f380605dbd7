//! Scalar vocabulary and small serde helpers shared by the type catalog.
//!
//! The Bot API documents its fields in terms of a handful of scalar names
//! (`Integer`, `Float`, `True`, ...). We keep those names as aliases so the
//! record definitions read like the API reference.

pub mod datetime;
pub(crate) mod mustbe;

pub use self::{
    datetime::{UnixTime, UnixTimeParseError},
    mustbe::{MustBeBool, True},
};

use serde_json::{Map, Value};

/// Signed integer as used by the Bot API.
///
/// Some values (chat ids in particular) need more than 32 bits but never more
/// than 52 significant bits, so a 64-bit integer is always lossless.
pub type Integer = i64;

/// Double-precision float as used by the Bot API.
pub type Float = f64;

// ---------------------------------------------------------------------------
// serde_json::Value helpers
// ---------------------------------------------------------------------------

/// Extension trait on [`serde_json::Value`] providing
/// `.deserialize_into::<T>()` for hand-written deserializers that first
/// buffer into a `Value`.
pub(crate) trait ValueExt: Sized {
    /// Consume this value and attempt to deserialize it into `T`.
    fn deserialize_into<T: serde::de::DeserializeOwned>(self) -> Result<T, serde_json::Error>;
}

impl ValueExt for Value {
    fn deserialize_into<T: serde::de::DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self)
    }
}

/// Return the single key of `keys` present (and non-null) in `map`.
///
/// Used by records whose optional fields are documented as "exactly one of".
/// Fails when none or more than one of the keys are set.
pub(crate) fn exactly_one_key(
    map: &Map<String, Value>,
    keys: &[&'static str],
) -> Result<&'static str, String> {
    let mut found = keys
        .iter()
        .copied()
        .filter(|key| map.get(*key).is_some_and(|v| !v.is_null()));

    match (found.next(), found.next()) {
        (Some(key), None) => Ok(key),
        (None, _) => Err(format!("expected exactly one of {keys:?}, found none")),
        (Some(first), Some(second)) => Err(format!(
            "expected exactly one of {keys:?}, found both `{first}` and `{second}`"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::exactly_one_key;
    use serde_json::json;

    #[test]
    fn exactly_one_key_accepts_single() {
        let value = json!({ "text": "hi", "url": "https://example.com" });
        let map = value.as_object().unwrap();
        assert_eq!(exactly_one_key(map, &["url", "callback_data"]), Ok("url"));
    }

    #[test]
    fn exactly_one_key_rejects_none_and_many() {
        let none = json!({ "text": "hi" });
        assert!(exactly_one_key(none.as_object().unwrap(), &["url", "pay"]).is_err());

        let many = json!({ "url": "u", "pay": true });
        let err = exactly_one_key(many.as_object().unwrap(), &["url", "pay"]).unwrap_err();
        assert!(err.contains("both"));
    }

    #[test]
    fn null_does_not_count_as_set() {
        let value = json!({ "url": null, "pay": true });
        assert_eq!(
            exactly_one_key(value.as_object().unwrap(), &["url", "pay"]),
            Ok("pay")
        );
    }
}
