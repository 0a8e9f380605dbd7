//! Payments.

use crate::methods::method;
use crate::types::{
    id::{marker::MessageMarker, ChatId, Id},
    markup::InlineKeyboardMarkup,
    message::Message,
    payments::{LabeledPrice, ShippingOption},
    util::True,
};

method! {
    SendInvoice("sendInvoice") -> Message {
        required {
            chat_id: ChatId,
            /// 1-32 characters.
            title: String,
            /// 1-255 characters.
            description: String,
            /// Bot-defined payload, 1-128 bytes. Not shown to the user.
            payload: String,
            provider_token: String,
            currency: String,
            prices: Vec<LabeledPrice>,
        }
        optional {
            /// In the smallest units of the currency.
            max_tip_amount: i64,
            /// At most 4 positive amounts in increasing order.
            suggested_tip_amounts: Vec<i64>,
            /// Forwarded copies get a Pay button with this deep link when
            /// set, and a URL button to the bot otherwise.
            start_parameter: String,
            /// JSON data passed to the payment provider.
            provider_data: String,
            photo_url: String,
            photo_size: u32,
            photo_width: u32,
            photo_height: u32,
            need_name: bool,
            need_phone_number: bool,
            need_email: bool,
            need_shipping_address: bool,
            send_phone_number_to_provider: bool,
            send_email_to_provider: bool,
            /// The final price depends on the shipping method.
            is_flexible: bool,
            disable_notification: bool,
            protect_content: bool,
            reply_to_message_id: Id<MessageMarker>,
            allow_sending_without_reply: bool,
            /// The first button must be a Pay button.
            reply_markup: InlineKeyboardMarkup,
        }
    }
}

method! {
    /// Create a link for an invoice.
    CreateInvoiceLink("createInvoiceLink") -> String {
        required {
            title: String,
            description: String,
            payload: String,
            provider_token: String,
            currency: String,
            prices: Vec<LabeledPrice>,
        }
        optional {
            max_tip_amount: i64,
            suggested_tip_amounts: Vec<i64>,
            provider_data: String,
            photo_url: String,
            photo_size: u32,
            photo_width: u32,
            photo_height: u32,
            need_name: bool,
            need_phone_number: bool,
            need_email: bool,
            need_shipping_address: bool,
            send_phone_number_to_provider: bool,
            send_email_to_provider: bool,
            is_flexible: bool,
        }
    }
}

method! {
    /// Reply to a shipping query of a flexible invoice.
    ///
    /// `shipping_options` is required when `ok` is true, `error_message`
    /// when it is false. [`AnswerShippingQuery::accept`] and
    /// [`AnswerShippingQuery::reject`] build the two valid forms.
    AnswerShippingQuery("answerShippingQuery") -> True {
        required {
            shipping_query_id: String,
            ok: bool,
        }
        optional {
            shipping_options: Vec<ShippingOption>,
            error_message: String,
        }
    }
}

impl AnswerShippingQuery {
    pub fn accept(shipping_query_id: impl Into<String>, options: Vec<ShippingOption>) -> Self {
        Self::new(shipping_query_id, true).shipping_options(options)
    }

    pub fn reject(shipping_query_id: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self::new(shipping_query_id, false).error_message(error_message)
    }
}

method! {
    /// Confirm or refuse an order. Must be answered within 10 seconds of
    /// the pre-checkout query.
    AnswerPreCheckoutQuery("answerPreCheckoutQuery") -> True {
        required {
            pre_checkout_query_id: String,
            ok: bool,
        }
        optional {
            /// Required when `ok` is false.
            error_message: String,
        }
    }
}

impl AnswerPreCheckoutQuery {
    pub fn accept(pre_checkout_query_id: impl Into<String>) -> Self {
        Self::new(pre_checkout_query_id, true)
    }

    pub fn reject(
        pre_checkout_query_id: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self::new(pre_checkout_query_id, false).error_message(error_message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn invoice_arguments() {
        let call = SendInvoice::new(
            1_i64,
            "Coffee",
            "A cup of coffee",
            "order-17",
            "284685063:TEST:token",
            "EUR",
            vec![LabeledPrice::new("Coffee", 350)],
        )
        .suggested_tip_amounts(vec![50_i64, 100])
        .need_email(true);
        let value = serde_json::to_value(&call).unwrap();
        assert_eq!(value["prices"], json!([{ "label": "Coffee", "amount": 350 }]));
        assert_eq!(value["suggested_tip_amounts"], json!([50, 100]));
        assert!(value.get("is_flexible").is_none());
    }

    #[test]
    fn shipping_answers() {
        let option = ShippingOption {
            id: "dhl".to_owned(),
            title: "DHL".to_owned(),
            prices: vec![LabeledPrice::new("Shipping", 499)],
        };
        assert_eq!(
            serde_json::to_value(AnswerShippingQuery::accept("s1", vec![option])).unwrap(),
            json!({
                "shipping_query_id": "s1",
                "ok": true,
                "shipping_options": [{
                    "id": "dhl",
                    "title": "DHL",
                    "prices": [{ "label": "Shipping", "amount": 499 }]
                }]
            })
        );
        assert_eq!(
            serde_json::to_value(AnswerShippingQuery::reject("s1", "No delivery to Mars")).unwrap(),
            json!({ "shipping_query_id": "s1", "ok": false, "error_message": "No delivery to Mars" })
        );
    }

    #[test]
    fn pre_checkout_answers() {
        assert_eq!(
            serde_json::to_value(AnswerPreCheckoutQuery::accept("p1")).unwrap(),
            json!({ "pre_checkout_query_id": "p1", "ok": true })
        );
    }
}
