//! Receiving updates: long polling and webhooks.

use crate::events::{Update, UpdateTypes};
use crate::methods::method;
use crate::types::{commands::WebhookInfo, input::InputFile, util::True};

method! {
    /// Long-poll for incoming updates.
    ///
    /// Pass `offset = last update_id + 1` to confirm the updates already
    /// seen.
    GetUpdates("getUpdates") -> Vec<Update> {
        required {}
        optional {
            /// First update to return. Negative values count from the end
            /// of the queue.
            offset: i64,
            /// 1-100, defaults to 100.
            limit: u8,
            /// Long polling timeout in seconds.
            timeout: u32,
            /// Kinds to receive. Empty means all except `chat_member`.
            allowed_updates: UpdateTypes,
        }
    }
}

method! {
    /// Deliver updates to an HTTPS endpoint instead of `getUpdates`.
    SetWebhook("setWebhook") -> True {
        required {
            url: String,
        }
        optional {
            /// Public key certificate, for self-signed certificates.
            certificate: InputFile,
            ip_address: String,
            /// 1-100, defaults to 40.
            max_connections: u8,
            allowed_updates: UpdateTypes,
            drop_pending_updates: bool,
            /// Sent back in the `X-Telegram-Bot-Api-Secret-Token` header.
            secret_token: String,
        }
        uploads [certificate]
    }
}

method! {
    DeleteWebhook("deleteWebhook") -> True {
        required {}
        optional {
            drop_pending_updates: bool,
        }
    }
}

method! {
    GetWebhookInfo("getWebhookInfo") -> WebhookInfo {
        required {}
        optional {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::methods::Method;
    use serde_json::json;

    #[test]
    fn get_updates_arguments() {
        let call = GetUpdates::new()
            .offset(101)
            .timeout(30_u32)
            .allowed_updates(UpdateTypes::MESSAGE | UpdateTypes::CALLBACK_QUERY);
        assert_eq!(
            serde_json::to_value(&call).unwrap(),
            json!({
                "offset": 101,
                "timeout": 30,
                "allowed_updates": ["message", "callback_query"]
            })
        );
        assert!(call.uploads().is_empty());
        assert_eq!(serde_json::to_value(GetUpdates::new()).unwrap(), json!({}));
    }

    #[test]
    fn webhook_certificate_is_uploaded() {
        let call = SetWebhook::new("https://example.com/hook")
            .certificate(InputFile::bytes("cert.pem", b"-----BEGIN".to_vec()));
        assert_eq!(call.uploads().len(), 1);

        let by_url = SetWebhook::new("https://example.com/hook");
        assert!(by_url.uploads().is_empty());
        assert_eq!(SetWebhook::NAME, "setWebhook");
    }
}
