//! Closed views over union types.
//!
//! Several Bot API objects are unions of record shapes: a message carries
//! text *or* a photo *or* a poll, an inline query result is an article *or*
//! a cached photo, and so on. Consumers often want to ask "does this value
//! have a `caption`?" without first matching on the exact variant.
//!
//! This module computes, for a union `U = V1 | ... | Vn`:
//!
//! - the **neighborhood**: every field name declared by *any* variant,
//! - each variant's **boundary**: the neighborhood fields it does not
//!   declare,
//! - the **closed** union, where every variant is extended with
//!   [`Slot::Absent`] for its boundary while declared fields keep their
//!   [`Slot::Required`] / [`Slot::Optional`] status.
//!
//! Rust has no structural type algebra, so the closed union is computed from
//! per-record field lists ([`Fields`], declared with [`fields!`]) and applied
//! to values at runtime:
//!
//! - [`Closed`] wraps a union value and answers [`Closed::get`] for any
//!   neighborhood field, yielding [`Access::Absent`] for foreign ones.
//! - [`validate`] rejects raw JSON whose decoded variant is accompanied by a
//!   foreign field with a value. Mistakes are caught when a payload is
//!   decoded, not at build time.
//!
//! Absent markers never reach the wire: [`Closed`] serializes exactly like
//! the value it wraps.

use serde::{de::DeserializeOwned, Serialize, Serializer};
use serde_json::{Map, Value};
use std::{
    collections::{BTreeMap, BTreeSet},
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

// ---------------------------------------------------------------------------
// Field declarations
// ---------------------------------------------------------------------------

/// Whether a declared field must be present on the wire.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Presence {
    Required,
    Optional,
}

/// One declared field of a record.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub presence: Presence,
}

impl Field {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            presence: Presence::Required,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            presence: Presence::Optional,
        }
    }
}

/// A record whose wire field names are known statically.
///
/// For members of internally tagged unions the tag (`type`, `status`,
/// `source`) is part of the list.
pub trait Fields {
    const FIELDS: &'static [Field];
}

/// Name and field list of one union member.
#[derive(Clone, Copy, Debug)]
pub struct VariantShape {
    pub name: &'static str,
    pub fields: &'static [Field],
}

/// A union of records.
///
/// Implemented with [`variants!`].
pub trait Variants: Serialize + DeserializeOwned {
    /// Every member of the union, in declaration order.
    const VARIANTS: &'static [VariantShape];

    /// Name of the member held by this value.
    fn variant_name(&self) -> &'static str;

    /// Shapes of all members, unclosed.
    fn shapes() -> Vec<Shape> {
        Self::VARIANTS
            .iter()
            .map(|v| Shape::from_fields(v.name, v.fields))
            .collect()
    }

    fn neighborhood() -> Neighborhood {
        Neighborhood::of(&Self::shapes())
    }

    /// Shapes of all members after closing.
    fn closed_shapes() -> Vec<Shape> {
        close(&Self::shapes())
    }

    /// Closed shape of the member called `name`.
    ///
    /// A name outside [`Variants::VARIANTS`] (a catch-all for payloads newer
    /// than this crate) gets an open shape: every neighborhood field is
    /// optional, none is absent.
    fn closed_shape_of(name: &'static str) -> Shape {
        let neighborhood = Self::neighborhood();
        match Self::VARIANTS.iter().find(|v| v.name == name) {
            Some(v) => neighborhood.close(&Shape::from_fields(v.name, v.fields)),
            None => neighborhood
                .iter()
                .fold(Shape::new(name), |shape, field| {
                    shape.with(field, Slot::Optional)
                }),
        }
    }
}

/// Implement [`Fields`] for a record.
///
/// ```ignore
/// fields!(Venue {
///     required: ["location", "title", "address"],
///     optional: ["foursquare_id", "foursquare_type"],
/// });
/// ```
macro_rules! fields {
    ($ty:ty {
        required: [$($req:literal),* $(,)?],
        optional: [$($opt:literal),* $(,)?] $(,)?
    }) => {
        impl $crate::closure::Fields for $ty {
            const FIELDS: &'static [$crate::closure::Field] = &[
                $($crate::closure::Field::required($req),)*
                $($crate::closure::Field::optional($opt),)*
            ];
        }
    };
}

/// Implement [`Variants`] for an enum of newtype variants.
///
/// A trailing `_ => "Name"` arm covers catch-all variants that have no
/// record of their own.
macro_rules! variants {
    ($union:ty {
        $($variant:ident => $record:ty),+ $(,)?
    } $(_ => $fallback:literal)?) => {
        impl $crate::closure::Variants for $union {
            const VARIANTS: &'static [$crate::closure::VariantShape] = &[
                $($crate::closure::VariantShape {
                    name: stringify!($variant),
                    fields: <$record as $crate::closure::Fields>::FIELDS,
                },)+
            ];

            fn variant_name(&self) -> &'static str {
                match self {
                    $(Self::$variant(..) => stringify!($variant),)+
                    $(#[allow(unreachable_patterns)] _ => $fallback,)?
                }
            }
        }
    };
}

pub(crate) use fields;
pub(crate) use variants;

// ---------------------------------------------------------------------------
// Shapes
// ---------------------------------------------------------------------------

/// Status of a field name on a (possibly closed) shape.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Slot {
    Required,
    Optional,
    /// The field belongs to a sibling variant and never carries a value here.
    Absent,
}

impl From<Presence> for Slot {
    fn from(presence: Presence) -> Self {
        match presence {
            Presence::Required => Slot::Required,
            Presence::Optional => Slot::Optional,
        }
    }
}

/// The field names of one union member and their [`Slot`]s.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Shape {
    name: &'static str,
    slots: BTreeMap<&'static str, Slot>,
}

impl Shape {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            slots: BTreeMap::new(),
        }
    }

    pub fn from_fields(name: &'static str, fields: &[Field]) -> Self {
        fields
            .iter()
            .fold(Self::new(name), |shape, f| shape.with(f.name, f.presence.into()))
    }

    /// Add or replace a field.
    #[must_use]
    pub fn with(mut self, field: &'static str, slot: Slot) -> Self {
        self.slots.insert(field, slot);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn slot(&self, field: &str) -> Option<Slot> {
        self.slots.get(field).copied()
    }

    /// Whether the field is declared with a value type (not absent).
    pub fn declares(&self, field: &str) -> bool {
        matches!(self.slot(field), Some(Slot::Required | Slot::Optional))
    }

    /// Every field name on the shape, absent ones included.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slots.keys().copied()
    }

    pub fn slots(&self) -> impl Iterator<Item = (&'static str, Slot)> + '_ {
        self.slots.iter().map(|(k, v)| (*k, *v))
    }
}

/// The union of all field names across a set of shapes.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Neighborhood(BTreeSet<&'static str>);

impl Neighborhood {
    /// Collect every field name mentioned by any shape.
    pub fn of<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> Self {
        Self(shapes.into_iter().flat_map(Shape::keys).collect())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().copied()
    }

    /// Neighborhood fields the shape does not mention at all.
    pub fn boundary(&self, shape: &Shape) -> BTreeSet<&'static str> {
        self.iter().filter(|f| shape.slot(f).is_none()).collect()
    }

    /// Extend `shape` with [`Slot::Absent`] for its boundary.
    pub fn close(&self, shape: &Shape) -> Shape {
        self.boundary(shape)
            .into_iter()
            .fold(shape.clone(), |closed, field| closed.with(field, Slot::Absent))
    }
}

/// Close every shape over the neighborhood of all of them.
pub fn close(shapes: &[Shape]) -> Vec<Shape> {
    let neighborhood = Neighborhood::of(shapes);
    shapes.iter().map(|s| neighborhood.close(s)).collect()
}

// ---------------------------------------------------------------------------
// Closed values
// ---------------------------------------------------------------------------

/// Result of looking up a neighborhood field on a [`Closed`] value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Access<'a> {
    /// Declared by the variant and carrying a value.
    Present(&'a Value),
    /// Declared by the variant but not sent.
    Unset,
    /// Foreign to the variant.
    Absent,
}

impl<'a> Access<'a> {
    pub fn value(self) -> Option<&'a Value> {
        match self {
            Access::Present(v) => Some(v),
            Access::Unset | Access::Absent => None,
        }
    }
}

/// A union value that answers field lookups for its whole neighborhood.
#[derive(Clone, Debug)]
pub struct Closed<U> {
    inner: U,
    shape: Shape,
    wire: Map<String, Value>,
}

impl<U: Variants> Closed<U> {
    /// Close a decoded union value.
    ///
    /// # Errors
    ///
    /// Returns [`ClosureError::Encode`] when the value doesn't serialize to
    /// JSON and [`ClosureError::NotAnObject`] when it serializes to anything
    /// but an object.
    pub fn new(inner: U) -> Result<Self, ClosureError> {
        let wire = match serde_json::to_value(&inner).map_err(ClosureError::Encode)? {
            Value::Object(map) => map,
            _ => return Err(ClosureError::NotAnObject),
        };
        let shape = U::closed_shape_of(inner.variant_name());
        Ok(Self { inner, shape, wire })
    }

    /// Decode and validate raw JSON, then close it.
    pub fn from_raw(raw: &Value) -> Result<Self, ClosureError> {
        Self::new(validate::<U>(raw)?)
    }

    /// Look up any field of the union's neighborhood.
    ///
    /// Returns `None` for names no variant declares.
    pub fn get(&self, field: &str) -> Option<Access<'_>> {
        match self.shape.slot(field)? {
            Slot::Absent => Some(Access::Absent),
            Slot::Required | Slot::Optional => Some(match self.wire.get(field) {
                Some(v) if !v.is_null() => Access::Present(v),
                _ => Access::Unset,
            }),
        }
    }

    pub fn variant(&self) -> &'static str {
        self.shape.name()
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn inner(&self) -> &U {
        &self.inner
    }

    pub fn into_inner(self) -> U {
        self.inner
    }
}

impl<U: Serialize> Serialize for Closed<U> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.inner.serialize(serializer)
    }
}

/// Decode raw JSON into `U`, rejecting foreign fields that carry a value.
///
/// Keys outside the union's neighborhood are ignored so newer API fields
/// don't break decoding.
///
/// # Errors
///
/// - [`ClosureError::NotAnObject`] if `raw` isn't a JSON object.
/// - [`ClosureError::Decode`] if `raw` doesn't decode as `U`.
/// - [`ClosureError::ForeignField`] if a sibling variant's field is set.
pub fn validate<U: Variants>(raw: &Value) -> Result<U, ClosureError> {
    let map = raw.as_object().ok_or(ClosureError::NotAnObject)?;
    let value: U = serde_json::from_value(raw.clone()).map_err(ClosureError::Decode)?;
    let shape = U::closed_shape_of(value.variant_name());

    let foreign = map
        .iter()
        .find(|(key, v)| !v.is_null() && shape.slot(key) == Some(Slot::Absent));

    match foreign {
        Some((field, _)) => Err(ClosureError::ForeignField {
            variant: shape.name(),
            field: field.clone(),
        }),
        None => Ok(value),
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum ClosureError {
    /// The payload did not decode as any member of the union.
    Decode(serde_json::Error),
    /// A union value failed to serialize.
    Encode(serde_json::Error),
    /// A field declared only by sibling variants carried a value.
    ForeignField { variant: &'static str, field: String },
    /// Unions of records are JSON objects.
    NotAnObject,
}

impl Display for ClosureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ClosureError::Decode(e) => write!(f, "union member failed to decode: {e}"),
            ClosureError::Encode(e) => write!(f, "union member failed to encode: {e}"),
            ClosureError::ForeignField { variant, field } => {
                write!(f, "field `{field}` does not belong to variant {variant}")
            }
            ClosureError::NotAnObject => f.write_str("union member is not a JSON object"),
        }
    }
}

impl Error for ClosureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ClosureError::Decode(e) | ClosureError::Encode(e) => Some(e),
            ClosureError::ForeignField { .. } | ClosureError::NotAnObject => None,
        }
    }
}
