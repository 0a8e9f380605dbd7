//! Markers for the kinds of numeric identifiers, such as chats or users.
//!
//! Markers themselves perform no logical action, and are only used to ensure
//! that IDs of incorrect types aren't used. A user's ID cannot be passed where
//! a message ID is required without an explicit [`Id::cast`].
//!
//! [`Id::cast`]: super::Id::cast

/// Marker for chat IDs.
///
/// Types such as [`Chat`] use this ID marker. Supergroup and channel ids
/// are negative and exceed 32 bits.
///
/// [`Chat`]: crate::types::chat::Chat
#[derive(Debug)]
#[non_exhaustive]
pub struct ChatMarker;

/// Marker for message IDs.
///
/// Message ids are unique per chat only.
#[derive(Debug)]
#[non_exhaustive]
pub struct MessageMarker;

/// Marker for update IDs.
///
/// Types such as [`Update`] use this ID marker.
///
/// [`Update`]: crate::events::Update
#[derive(Debug)]
#[non_exhaustive]
pub struct UpdateMarker;

/// Marker for user IDs.
///
/// Types such as [`User`] or [`Contact`] use this ID marker.
///
/// [`User`]: crate::types::user::User
/// [`Contact`]: crate::types::media::Contact
#[derive(Debug)]
#[non_exhaustive]
pub struct UserMarker;
