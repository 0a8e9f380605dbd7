//! Typed Telegram Bot API.
//!
//! The crate has no network client of its own. It describes the API (every
//! object in [`types`], every call in [`methods`]) and turns calls into
//! request bodies and responses into values. Sending the bytes is left to a
//! caller-provided [`Transport`].
//!
//! - [`types`]: API objects, with the unions of the API as Rust enums.
//! - [`methods`]: one struct per API method, built with `new` and setters.
//! - [`events`]: incoming updates.
//! - [`http`]: request bodies, configuration and [`Bot`].
//! - [`closure`]: field-set closure for the untagged unions.

pub mod closure;
pub mod events;
pub mod http;
pub mod methods;
pub mod types;

pub use events::{Update, UpdateKind, UpdateTypes};
pub use http::{Bot, BotConfig, RequestBody, RequestError, Transport};
pub use methods::{Method, Ret};
