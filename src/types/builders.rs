//! Builder patterns for keyboards.
//!
//! Keyboards are nested `Vec<Vec<_>>` of buttons whose action is one of
//! several mutually exclusive fields. The helpers here build a button with
//! exactly one action, and the builders lay buttons out row by row.

use crate::types::{
    markup::{
        InlineKeyboardButton, InlineKeyboardButtonKind, InlineKeyboardMarkup, KeyboardButton,
        KeyboardButtonRequest, ReplyKeyboardMarkup, WebAppInfo,
    },
    util::True,
};

// ===========================================================================
// Inline keyboard builder
// ===========================================================================

/// Ergonomic builder for [`InlineKeyboardMarkup`].
///
/// # Examples
///
/// ```
/// use botgram::types::builders::{callback_button, url_button, InlineKeyboardBuilder};
///
/// let markup = InlineKeyboardBuilder::new()
///     .button(callback_button("Yes", "vote:yes"))
///     .button(callback_button("No", "vote:no"))
///     .row()
///     .button(url_button("Results", "https://example.com/results"))
///     .build();
/// assert_eq!(markup.inline_keyboard.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct InlineKeyboardBuilder {
    rows: Vec<Vec<InlineKeyboardButton>>,
    current: Vec<InlineKeyboardButton>,
}

impl InlineKeyboardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a button to the current row.
    pub fn button(mut self, button: InlineKeyboardButton) -> Self {
        self.current.push(button);
        self
    }

    /// Close the current row. Empty rows are skipped.
    pub fn row(mut self) -> Self {
        if !self.current.is_empty() {
            self.rows.push(std::mem::take(&mut self.current));
        }
        self
    }

    /// Consume the builder and return the finished [`InlineKeyboardMarkup`].
    pub fn build(self) -> InlineKeyboardMarkup {
        let Self { mut rows, current } = self;
        if !current.is_empty() {
            rows.push(current);
        }
        InlineKeyboardMarkup {
            inline_keyboard: rows,
        }
    }
}

// ===========================================================================
// Reply keyboard builder
// ===========================================================================

/// Ergonomic builder for [`ReplyKeyboardMarkup`].
#[derive(Clone, Debug, Default)]
pub struct ReplyKeyboardBuilder {
    inner: ReplyKeyboardMarkup,
    current: Vec<KeyboardButton>,
}

impl ReplyKeyboardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a button to the current row.
    pub fn button(mut self, button: KeyboardButton) -> Self {
        self.current.push(button);
        self
    }

    /// Close the current row. Empty rows are skipped.
    pub fn row(mut self) -> Self {
        if !self.current.is_empty() {
            self.inner.keyboard.push(std::mem::take(&mut self.current));
        }
        self
    }

    /// Fit the keyboard height to its buttons.
    pub fn resize(mut self) -> Self {
        self.inner.resize_keyboard = Some(true);
        self
    }

    /// Hide the keyboard once a button was pressed.
    pub fn one_time(mut self) -> Self {
        self.inner.one_time_keyboard = Some(true);
        self
    }

    /// Placeholder shown in the input field while the keyboard is active.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.inner.input_field_placeholder = Some(text.into());
        self
    }

    pub fn selective(mut self) -> Self {
        self.inner.selective = Some(true);
        self
    }

    /// Consume the builder and return the finished [`ReplyKeyboardMarkup`].
    pub fn build(self) -> ReplyKeyboardMarkup {
        let Self { mut inner, current } = self;
        if !current.is_empty() {
            inner.keyboard.push(current);
        }
        inner
    }
}

// ===========================================================================
// Button helper functions
// ===========================================================================

/// Build a button sending `data` back in a callback query.
pub fn callback_button(text: impl Into<String>, data: impl Into<String>) -> InlineKeyboardButton {
    InlineKeyboardButton::new(text, InlineKeyboardButtonKind::CallbackData(data.into()))
}

/// Build a button opening a URL.
pub fn url_button(text: impl Into<String>, url: impl Into<String>) -> InlineKeyboardButton {
    InlineKeyboardButton::new(text, InlineKeyboardButtonKind::Url(url.into()))
}

/// Build a button launching a Web App.
pub fn web_app_button(text: impl Into<String>, url: impl Into<String>) -> InlineKeyboardButton {
    InlineKeyboardButton::new(
        text,
        InlineKeyboardButtonKind::WebApp(WebAppInfo { url: url.into() }),
    )
}

/// Build a button switching to inline mode in the current chat with
/// `query` prefilled.
pub fn switch_inline_button(
    text: impl Into<String>,
    query: impl Into<String>,
) -> InlineKeyboardButton {
    InlineKeyboardButton::new(
        text,
        InlineKeyboardButtonKind::SwitchInlineQueryCurrentChat(query.into()),
    )
}

/// Build a pay button. It must be the first button of the first row.
pub fn pay_button(text: impl Into<String>) -> InlineKeyboardButton {
    InlineKeyboardButton::new(text, InlineKeyboardButtonKind::Pay(True::default()))
}

/// Build a reply keyboard button sending the user's phone number.
pub fn contact_button(text: impl Into<String>) -> KeyboardButton {
    KeyboardButton::new(text).request(KeyboardButtonRequest::Contact(True::default()))
}

/// Build a reply keyboard button sending the user's location.
pub fn location_button(text: impl Into<String>) -> KeyboardButton {
    KeyboardButton::new(text).request(KeyboardButtonRequest::Location(True::default()))
}

// ===========================================================================
// Tests
// ===========================================================================
