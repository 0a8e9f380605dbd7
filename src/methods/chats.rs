//! Chat administration.
//!
//! Nearly all of these require the bot to be an administrator with the
//! matching right.

use crate::methods::method;
use crate::types::{
    chat::{Chat, ChatInviteLink, ChatMember, ChatPermissions},
    id::{
        marker::{ChatMarker, MessageMarker, UserMarker},
        ChatId, Id,
    },
    input::InputFile,
    util::{True, UnixTime},
};

// ---------------------------------------------------------------------------
// Members
// ---------------------------------------------------------------------------

method! {
    /// Ban a user. In supergroups and channels the user can't return on
    /// their own until unbanned.
    BanChatMember("banChatMember") -> True {
        required {
            chat_id: ChatId,
            user_id: Id<UserMarker>,
        }
        optional {
            /// Bans shorter than 30 seconds or longer than 366 days are
            /// permanent.
            until_date: UnixTime,
            /// Delete all of the user's messages. Always true for
            /// supergroups and channels.
            revoke_messages: bool,
        }
    }
}

method! {
    UnbanChatMember("unbanChatMember") -> True {
        required {
            chat_id: ChatId,
            user_id: Id<UserMarker>,
        }
        optional {
            /// Do nothing if the user is not banned, instead of removing a
            /// current member.
            only_if_banned: bool,
        }
    }
}

method! {
    /// Restrict a supergroup member. Passing all permissions lifts the
    /// restrictions.
    RestrictChatMember("restrictChatMember") -> True {
        required {
            chat_id: ChatId,
            user_id: Id<UserMarker>,
            permissions: ChatPermissions,
        }
        optional {
            until_date: UnixTime,
        }
    }
}

method! {
    /// Promote or demote a member. Passing `false` for every right demotes.
    PromoteChatMember("promoteChatMember") -> True {
        required {
            chat_id: ChatId,
            user_id: Id<UserMarker>,
        }
        optional {
            is_anonymous: bool,
            can_manage_chat: bool,
            can_post_messages: bool,
            can_edit_messages: bool,
            can_delete_messages: bool,
            can_manage_video_chats: bool,
            can_restrict_members: bool,
            can_promote_members: bool,
            can_change_info: bool,
            can_invite_users: bool,
            can_pin_messages: bool,
        }
    }
}

method! {
    SetChatAdministratorCustomTitle("setChatAdministratorCustomTitle") -> True {
        required {
            chat_id: ChatId,
            user_id: Id<UserMarker>,
            /// 0-16 characters, emoji are not allowed.
            custom_title: String,
        }
        optional {}
    }
}

method! {
    /// Ban a channel chat from posting on behalf of itself.
    BanChatSenderChat("banChatSenderChat") -> True {
        required {
            chat_id: ChatId,
            sender_chat_id: Id<ChatMarker>,
        }
        optional {}
    }
}

method! {
    UnbanChatSenderChat("unbanChatSenderChat") -> True {
        required {
            chat_id: ChatId,
            sender_chat_id: Id<ChatMarker>,
        }
        optional {}
    }
}

method! {
    /// Default permissions of all members.
    SetChatPermissions("setChatPermissions") -> True {
        required {
            chat_id: ChatId,
            permissions: ChatPermissions,
        }
        optional {}
    }
}

// ---------------------------------------------------------------------------
// Invite links
// ---------------------------------------------------------------------------

method! {
    /// Generate a new primary invite link, revoking the previous one.
    ExportChatInviteLink("exportChatInviteLink") -> String {
        required {
            chat_id: ChatId,
        }
        optional {}
    }
}

method! {
    CreateChatInviteLink("createChatInviteLink") -> ChatInviteLink {
        required {
            chat_id: ChatId,
        }
        optional {
            /// 0-32 characters.
            name: String,
            expire_date: UnixTime,
            /// 1-99999 simultaneous members.
            member_limit: u32,
            /// Users joining need approval. Excludes `member_limit`.
            creates_join_request: bool,
        }
    }
}

method! {
    EditChatInviteLink("editChatInviteLink") -> ChatInviteLink {
        required {
            chat_id: ChatId,
            invite_link: String,
        }
        optional {
            name: String,
            expire_date: UnixTime,
            member_limit: u32,
            creates_join_request: bool,
        }
    }
}

method! {
    /// Revoke a link created by the bot. A revoked primary link is
    /// replaced automatically.
    RevokeChatInviteLink("revokeChatInviteLink") -> ChatInviteLink {
        required {
            chat_id: ChatId,
            invite_link: String,
        }
        optional {}
    }
}

method! {
    ApproveChatJoinRequest("approveChatJoinRequest") -> True {
        required {
            chat_id: ChatId,
            user_id: Id<UserMarker>,
        }
        optional {}
    }
}

method! {
    DeclineChatJoinRequest("declineChatJoinRequest") -> True {
        required {
            chat_id: ChatId,
            user_id: Id<UserMarker>,
        }
        optional {}
    }
}

// ---------------------------------------------------------------------------
// Chat settings
// ---------------------------------------------------------------------------

method! {
    /// Set a new chat photo. Not available for private chats.
    SetChatPhoto("setChatPhoto") -> True {
        required {
            chat_id: ChatId,
            /// Must be a new upload.
            photo: InputFile,
        }
        optional {}
        uploads [photo]
    }
}

method! {
    DeleteChatPhoto("deleteChatPhoto") -> True {
        required {
            chat_id: ChatId,
        }
        optional {}
    }
}

method! {
    SetChatTitle("setChatTitle") -> True {
        required {
            chat_id: ChatId,
            /// 1-255 characters.
            title: String,
        }
        optional {}
    }
}

method! {
    SetChatDescription("setChatDescription") -> True {
        required {
            chat_id: ChatId,
        }
        optional {
            /// 0-255 characters.
            description: String,
        }
    }
}

method! {
    PinChatMessage("pinChatMessage") -> True {
        required {
            chat_id: ChatId,
            message_id: Id<MessageMarker>,
        }
        optional {
            /// Pin silently. Notifications are always off in channels and
            /// private chats.
            disable_notification: bool,
        }
    }
}

method! {
    UnpinChatMessage("unpinChatMessage") -> True {
        required {
            chat_id: ChatId,
        }
        optional {
            /// Omitted to unpin the most recent pinned message.
            message_id: Id<MessageMarker>,
        }
    }
}

method! {
    UnpinAllChatMessages("unpinAllChatMessages") -> True {
        required {
            chat_id: ChatId,
        }
        optional {}
    }
}

method! {
    LeaveChat("leaveChat") -> True {
        required {
            chat_id: ChatId,
        }
        optional {}
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

method! {
    /// Up-to-date information about a chat, including the fields only
    /// `getChat` fills in.
    GetChat("getChat") -> Chat {
        required {
            chat_id: ChatId,
        }
        optional {}
    }
}

method! {
    /// Administrators other than bots. Empty for groups without any.
    GetChatAdministrators("getChatAdministrators") -> Vec<ChatMember> {
        required {
            chat_id: ChatId,
        }
        optional {}
    }
}

method! {
    GetChatMemberCount("getChatMemberCount") -> u32 {
        required {
            chat_id: ChatId,
        }
        optional {}
    }
}

method! {
    GetChatMember("getChatMember") -> ChatMember {
        required {
            chat_id: ChatId,
            user_id: Id<UserMarker>,
        }
        optional {}
    }
}

method! {
    /// Set the group sticker set of a supergroup. Check
    /// [`Chat::can_set_sticker_set`] first.
    SetChatStickerSet("setChatStickerSet") -> True {
        required {
            chat_id: ChatId,
            sticker_set_name: String,
        }
        optional {}
    }
}

method! {
    DeleteChatStickerSet("deleteChatStickerSet") -> True {
        required {
            chat_id: ChatId,
        }
        optional {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::methods::{Method, Ret};
    use serde_json::json;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(Ret<GetChatMemberCount>, u32);
    assert_type_eq_all!(Ret<ExportChatInviteLink>, String);
    assert_type_eq_all!(Ret<GetChatAdministrators>, Vec<ChatMember>);

    #[test]
    fn ban_until() {
        let call = BanChatMember::new(-1_001_234_567_890_i64, 7_i64)
            .until_date(UnixTime::from_secs(1_700_000_000));
        assert_eq!(
            serde_json::to_value(&call).unwrap(),
            json!({
                "chat_id": -1_001_234_567_890_i64,
                "user_id": 7,
                "until_date": 1_700_000_000
            })
        );
    }

    #[test]
    fn restrict_to_read_only() {
        let call = RestrictChatMember::new(
            "@rustlang",
            7_i64,
            ChatPermissions {
                can_send_messages: Some(false),
                ..ChatPermissions::default()
            },
        );
        assert_eq!(
            serde_json::to_value(&call).unwrap(),
            json!({
                "chat_id": "@rustlang",
                "user_id": 7,
                "permissions": { "can_send_messages": false }
            })
        );
    }

    #[test]
    fn invite_link_options() {
        let call = CreateChatInviteLink::new(-100_i64)
            .name("beta")
            .creates_join_request(true);
        assert_eq!(
            serde_json::to_value(&call).unwrap(),
            json!({ "chat_id": -100, "name": "beta", "creates_join_request": true })
        );
    }

    #[test]
    fn chat_photo_is_uploaded() {
        let call = SetChatPhoto::new(-100_i64, InputFile::bytes("logo.png", vec![0_u8; 8]));
        assert_eq!(call.uploads().len(), 1);
        assert_eq!(SetChatPhoto::NAME, "setChatPhoto");
    }

    #[test]
    fn get_member_result() {
        let member: Ret<GetChatMember> = serde_json::from_value(json!({
            "status": "member",
            "user": { "id": 7, "is_bot": false, "first_name": "Ada" }
        }))
        .unwrap();
        assert!(member.is_present());
    }
}
