//! Chats, chat members and invite links.

use serde::{Deserialize, Serialize};

use crate::closure::{fields, variants};
use crate::types::{
    id::{marker::ChatMarker, Id},
    media::Location,
    message::Message,
    user::User,
    util::{True, UnixTime},
};

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

/// A private chat, group, supergroup or channel.
///
/// Fields below `kind` are only filled in by `getChat`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Chat {
    pub id: Id<ChatMarker>,
    #[serde(flatten)]
    pub kind: ChatKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<ChatPhoto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_private_forwards: Option<True>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_to_send_messages: Option<True>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_by_request: Option<True>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned_message: Option<Box<Message>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<ChatPermissions>,
    /// Seconds between consecutive messages of unprivileged users.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slow_mode_delay: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_auto_delete_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_protected_content: Option<True>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker_set_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_set_sticker_set: Option<True>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_chat_id: Option<Id<ChatMarker>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<ChatLocation>,
}

/// The kind of a chat, tagged by `type`.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatKind {
    Private {
        first_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        last_name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        username: Option<String>,
    },
    Group {
        title: String,
    },
    Supergroup {
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        username: Option<String>,
    },
    Channel {
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        username: Option<String>,
    },
}

impl Chat {
    /// Title of a group or channel, or the other party's first name.
    pub fn display_name(&self) -> &str {
        match &self.kind {
            ChatKind::Private { first_name, .. } => first_name,
            ChatKind::Group { title }
            | ChatKind::Supergroup { title, .. }
            | ChatKind::Channel { title, .. } => title,
        }
    }

    pub fn username(&self) -> Option<&str> {
        match &self.kind {
            ChatKind::Private { username, .. }
            | ChatKind::Supergroup { username, .. }
            | ChatKind::Channel { username, .. } => username.as_deref(),
            ChatKind::Group { .. } => None,
        }
    }

    pub fn is_private(&self) -> bool {
        matches!(self.kind, ChatKind::Private { .. })
    }

    pub fn is_channel(&self) -> bool {
        matches!(self.kind, ChatKind::Channel { .. })
    }
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ChatPhoto {
    pub small_file_id: String,
    pub small_file_unique_id: String,
    pub big_file_id: String,
    pub big_file_unique_id: String,
}

/// Location a supergroup is connected to.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ChatLocation {
    pub location: Location,
    pub address: String,
}

/// Actions a non-administrator is allowed to take in a chat.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ChatPermissions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_messages: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_media_messages: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_polls: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_other_messages: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_add_web_page_previews: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_change_info: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_invite_users: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_pin_messages: Option<bool>,
}

/// Rights of an administrator.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ChatAdministratorRights {
    pub is_anonymous: bool,
    pub can_manage_chat: bool,
    pub can_delete_messages: bool,
    pub can_manage_video_chats: bool,
    pub can_restrict_members: bool,
    pub can_promote_members: bool,
    pub can_change_info: bool,
    pub can_invite_users: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_post_messages: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_edit_messages: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_pin_messages: Option<bool>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ChatInviteLink {
    /// Links created by other administrators have their second part
    /// replaced with "…".
    pub invite_link: String,
    pub creator: User,
    pub creates_join_request: bool,
    pub is_primary: bool,
    pub is_revoked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_date: Option<UnixTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_join_request_count: Option<u32>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ChatJoinRequest {
    pub chat: Chat,
    pub from: User,
    pub date: UnixTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_link: Option<ChatInviteLink>,
}

// ---------------------------------------------------------------------------
// Chat members
// ---------------------------------------------------------------------------

/// A member of a chat, tagged by `status`.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChatMember {
    #[serde(rename = "creator")]
    Owner(ChatMemberOwner),
    Administrator(ChatMemberAdministrator),
    Member(ChatMemberMember),
    Restricted(ChatMemberRestricted),
    Left(ChatMemberLeft),
    #[serde(rename = "kicked")]
    Banned(ChatMemberBanned),
}

impl ChatMember {
    pub fn user(&self) -> &User {
        match self {
            ChatMember::Owner(m) => &m.user,
            ChatMember::Administrator(m) => &m.user,
            ChatMember::Member(m) => &m.user,
            ChatMember::Restricted(m) => &m.user,
            ChatMember::Left(m) => &m.user,
            ChatMember::Banned(m) => &m.user,
        }
    }

    /// Wire value of the `status` tag.
    pub fn status(&self) -> &'static str {
        match self {
            ChatMember::Owner(_) => "creator",
            ChatMember::Administrator(_) => "administrator",
            ChatMember::Member(_) => "member",
            ChatMember::Restricted(_) => "restricted",
            ChatMember::Left(_) => "left",
            ChatMember::Banned(_) => "kicked",
        }
    }

    /// Whether the user is currently in the chat.
    pub fn is_present(&self) -> bool {
        match self {
            ChatMember::Owner(_) | ChatMember::Administrator(_) | ChatMember::Member(_) => true,
            ChatMember::Restricted(m) => m.is_member,
            ChatMember::Left(_) | ChatMember::Banned(_) => false,
        }
    }

    pub fn is_privileged(&self) -> bool {
        matches!(self, ChatMember::Owner(_) | ChatMember::Administrator(_))
    }
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ChatMemberOwner {
    pub user: User,
    pub is_anonymous: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ChatMemberAdministrator {
    pub user: User,
    pub can_be_edited: bool,
    #[serde(flatten)]
    pub rights: ChatAdministratorRights,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ChatMemberMember {
    pub user: User,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ChatMemberRestricted {
    pub user: User,
    pub is_member: bool,
    pub can_change_info: bool,
    pub can_invite_users: bool,
    pub can_pin_messages: bool,
    pub can_send_messages: bool,
    pub can_send_media_messages: bool,
    pub can_send_polls: bool,
    pub can_send_other_messages: bool,
    pub can_add_web_page_previews: bool,
    /// Zero means "forever".
    pub until_date: UnixTime,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ChatMemberLeft {
    pub user: User,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ChatMemberBanned {
    pub user: User,
    /// Zero means "forever".
    pub until_date: UnixTime,
}

fields!(ChatMemberOwner {
    required: ["status", "user", "is_anonymous"],
    optional: ["custom_title"],
});

fields!(ChatMemberAdministrator {
    required: [
        "status",
        "user",
        "can_be_edited",
        "is_anonymous",
        "can_manage_chat",
        "can_delete_messages",
        "can_manage_video_chats",
        "can_restrict_members",
        "can_promote_members",
        "can_change_info",
        "can_invite_users",
    ],
    optional: [
        "can_post_messages",
        "can_edit_messages",
        "can_pin_messages",
        "custom_title",
    ],
});

fields!(ChatMemberMember {
    required: ["status", "user"],
    optional: [],
});

fields!(ChatMemberRestricted {
    required: [
        "status",
        "user",
        "is_member",
        "can_change_info",
        "can_invite_users",
        "can_pin_messages",
        "can_send_messages",
        "can_send_media_messages",
        "can_send_polls",
        "can_send_other_messages",
        "can_add_web_page_previews",
        "until_date",
    ],
    optional: [],
});

fields!(ChatMemberLeft {
    required: ["status", "user"],
    optional: [],
});

fields!(ChatMemberBanned {
    required: ["status", "user", "until_date"],
    optional: [],
});

variants!(ChatMember {
    Owner => ChatMemberOwner,
    Administrator => ChatMemberAdministrator,
    Member => ChatMemberMember,
    Restricted => ChatMemberRestricted,
    Left => ChatMemberLeft,
    Banned => ChatMemberBanned,
});

/// A change in a chat member's status.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ChatMemberUpdated {
    pub chat: Chat,
    pub from: User,
    pub date: UnixTime,
    pub old_chat_member: ChatMember,
    pub new_chat_member: ChatMember,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_link: Option<ChatInviteLink>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::closure::{Access, Closed, Slot, Variants};
    use serde_json::json;

    fn user() -> serde_json::Value {
        json!({ "id": 7, "is_bot": false, "first_name": "Ada" })
    }

    #[test]
    fn chat_kinds() {
        let private: Chat = serde_json::from_value(json!({
            "id": 7,
            "type": "private",
            "first_name": "Ada",
            "username": "ada"
        }))
        .unwrap();
        assert!(private.is_private());
        assert_eq!(private.display_name(), "Ada");
        assert_eq!(private.username(), Some("ada"));

        let channel: Chat = serde_json::from_value(json!({
            "id": -1_001_234_567_890_i64,
            "type": "channel",
            "title": "News"
        }))
        .unwrap();
        assert!(channel.is_channel());
        assert_eq!(channel.id.get(), -1_001_234_567_890);
        assert_eq!(channel.display_name(), "News");
    }

    #[test]
    fn chat_serializes_type_tag() {
        let chat = Chat {
            id: Id::new(-5),
            kind: ChatKind::Group {
                title: "Friends".to_owned(),
            },
            photo: None,
            bio: None,
            has_private_forwards: None,
            join_to_send_messages: None,
            join_by_request: None,
            description: None,
            invite_link: None,
            pinned_message: None,
            permissions: None,
            slow_mode_delay: None,
            message_auto_delete_time: None,
            has_protected_content: None,
            sticker_set_name: None,
            can_set_sticker_set: None,
            linked_chat_id: None,
            location: None,
        };
        assert_eq!(
            serde_json::to_value(&chat).unwrap(),
            json!({ "id": -5, "type": "group", "title": "Friends" })
        );
    }

    #[test]
    fn chat_member_statuses() {
        let owner: ChatMember = serde_json::from_value(json!({
            "status": "creator",
            "user": user(),
            "is_anonymous": false
        }))
        .unwrap();
        assert_eq!(owner.status(), "creator");
        assert!(owner.is_privileged());

        let banned: ChatMember = serde_json::from_value(json!({
            "status": "kicked",
            "user": user(),
            "until_date": 0
        }))
        .unwrap();
        assert!(matches!(banned, ChatMember::Banned(_)));
        assert!(!banned.is_present());
        assert_eq!(banned.user().first_name, "Ada");
    }

    #[test]
    fn administrator_rights_are_flattened() {
        let admin: ChatMember = serde_json::from_value(json!({
            "status": "administrator",
            "user": user(),
            "can_be_edited": false,
            "is_anonymous": false,
            "can_manage_chat": true,
            "can_delete_messages": true,
            "can_manage_video_chats": false,
            "can_restrict_members": true,
            "can_promote_members": false,
            "can_change_info": true,
            "can_invite_users": true,
            "can_pin_messages": true
        }))
        .unwrap();
        let ChatMember::Administrator(admin) = admin else {
            panic!("expected administrator");
        };
        assert!(admin.rights.can_delete_messages);
        assert_eq!(admin.rights.can_pin_messages, Some(true));
        assert_eq!(admin.rights.can_post_messages, None);
    }

    #[test]
    fn closed_chat_member() {
        let shapes = ChatMember::closed_shapes();
        assert_eq!(shapes.len(), 6);
        let left = shapes.iter().find(|s| s.name() == "Left").unwrap();
        assert_eq!(left.slot("status"), Some(Slot::Required));
        assert_eq!(left.slot("until_date"), Some(Slot::Absent));

        let member = Closed::new(ChatMember::Member(ChatMemberMember {
            user: serde_json::from_value(user()).unwrap(),
        }))
        .unwrap();
        assert_eq!(member.get("status"), Some(Access::Present(&json!("member"))));
        assert_eq!(member.get("can_be_edited"), Some(Access::Absent));
    }
}
