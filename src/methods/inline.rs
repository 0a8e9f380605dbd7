//! Inline mode and Web Apps.

use crate::methods::method;
use crate::types::{
    inline::{InlineQueryResult, SentWebAppMessage},
    util::True,
};

method! {
    /// Answer an inline query with at most 50 results.
    AnswerInlineQuery("answerInlineQuery") -> True {
        required {
            inline_query_id: String,
            results: Vec<InlineQueryResult>,
        }
        optional {
            /// Seconds the results may be cached server-side, defaults to
            /// 300.
            cache_time: u32,
            /// Cache per user instead of for everyone sending the query.
            is_personal: bool,
            /// Passed back with the next query for the same text to fetch
            /// more results. Empty when there are no more. At most 64 bytes.
            next_offset: String,
            /// Button shown above the results switching to a private chat.
            switch_pm_text: String,
            /// `/start` parameter sent with that button.
            switch_pm_parameter: String,
        }
    }
}

method! {
    /// Answer a Web App query by sending a message on behalf of the user.
    AnswerWebAppQuery("answerWebAppQuery") -> SentWebAppMessage {
        required {
            web_app_query_id: String,
            result: InlineQueryResult,
        }
        optional {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::inline::{InlineQueryResultArticle, InputTextMessageContent};
    use serde_json::json;

    #[test]
    fn answer_with_article() {
        let article = InlineQueryResultArticle::new(
            "1",
            "Hello",
            InputTextMessageContent::new("Hello, world"),
        );
        let call = AnswerInlineQuery::new("q1", vec![InlineQueryResult::Article(article)])
            .cache_time(0_u32)
            .is_personal(true);
        let value = serde_json::to_value(&call).unwrap();
        assert_eq!(value["inline_query_id"], json!("q1"));
        assert_eq!(value["results"][0]["type"], json!("article"));
        assert_eq!(
            value["results"][0]["input_message_content"],
            json!({ "message_text": "Hello, world" })
        );
        assert_eq!(value["cache_time"], json!(0));
        assert!(value.get("next_offset").is_none());
    }
}
