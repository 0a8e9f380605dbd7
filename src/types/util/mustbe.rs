//! Literal-value types.
//!
//! The Bot API uses the pseudo-type `True` for fields and results that can
//! only ever be `true`. [`MustBeBool`] only (de)serializes its one value and
//! rejects everything else.

use serde::{
    de::{Deserializer, Error as DeError, Unexpected, Visitor},
    Deserialize, Serialize, Serializer,
};
use std::fmt::{Formatter, Result as FmtResult};

/// A boolean that must always be `V`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct MustBeBool<const V: bool>;

/// The Bot API `True` type.
pub type True = MustBeBool<true>;

impl<const V: bool> MustBeBool<V> {
    /// The boolean this type stands for.
    pub const fn get(self) -> bool {
        V
    }
}

impl<const V: bool> From<MustBeBool<V>> for bool {
    fn from(_: MustBeBool<V>) -> Self {
        V
    }
}

impl<'de, const V: bool> Deserialize<'de> for MustBeBool<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MustBeBoolVisitor<const V: bool>;

        impl<const V: bool> Visitor<'_> for MustBeBoolVisitor<V> {
            type Value = MustBeBool<V>;

            fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, "the boolean {V}")
            }

            fn visit_bool<E: DeError>(self, v: bool) -> Result<Self::Value, E> {
                if v == V {
                    Ok(MustBeBool)
                } else {
                    Err(E::invalid_value(Unexpected::Bool(v), &self))
                }
            }
        }

        deserializer.deserialize_bool(MustBeBoolVisitor::<V>)
    }
}

impl<const V: bool> Serialize for MustBeBool<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(V)
    }
}

#[cfg(test)]
mod tests {
    use super::{MustBeBool, True};
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};

    #[test]
    fn true_round_trips() {
        assert_tokens(&True::default(), &[Token::Bool(true)]);
    }

    #[test]
    fn true_rejects_false() {
        assert_de_tokens_error::<True>(
            &[Token::Bool(false)],
            "invalid value: boolean `false`, expected the boolean true",
        );
    }

    #[test]
    fn must_be_false() {
        assert_tokens(&MustBeBool::<false>, &[Token::Bool(false)]);
        assert!(!bool::from(MustBeBool::<false>));
    }

    #[test]
    fn true_from_json() {
        let parsed: True = serde_json::from_str("true").unwrap();
        assert!(parsed.get());
        assert!(serde_json::from_str::<True>("false").is_err());
        assert!(serde_json::from_str::<True>("1").is_err());
    }
}
