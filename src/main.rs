//! Update inspector.
//!
//! Reads a `getUpdates` response (a file path argument, or stdin when none
//! is given) and logs each update it contains. Useful for checking what a
//! bot would see without running one.
//!
//! No token is needed. The environment configuration
//! ([`BotConfig::from_env`](botgram::http::BotConfig::from_env)) is for
//! library callers that execute methods.
//!
//! ```text
//! curl -s "https://api.telegram.org/bot$TELEGRAM_BOT_TOKEN/getUpdates" | botgram
//! RUST_LOG=debug botgram updates.json
//! ```

use std::io::Read;

use tracing::{debug, error, info, warn};

use botgram::closure::Variants;
use botgram::events::{Update, UpdateKind};
use botgram::types::ext::MessageExt;
use botgram::types::{ApiResponse, ChatExt};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

fn read_input() -> std::io::Result<String> {
    match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

// ---------------------------------------------------------------------------
// Reporting
// ---------------------------------------------------------------------------

fn log_update(update: &Update) {
    let chat = update.chat().map(|c| c.display_name().to_owned());
    let from = update.from().map(|u| u.first_name.clone());

    info!(
        id = %update.id,
        kind = update.kind.name(),
        chat = chat.as_deref().unwrap_or("-"),
        from = from.as_deref().unwrap_or("-"),
        "update"
    );

    match &update.kind {
        UpdateKind::Message(message)
        | UpdateKind::EditedMessage(message)
        | UpdateKind::ChannelPost(message)
        | UpdateKind::EditedChannelPost(message) => {
            let content = message.content.variant_name();
            match message.command() {
                Some(command) => info!(
                    content,
                    command = command.name,
                    args = command.args,
                    "  bot command"
                ),
                None => info!(content, text = message.text().unwrap_or(""), "  message"),
            }
            if let Some(url) = message.url().or_else(|| message.chat.url()) {
                debug!(url = %url, "  link");
            }
        }
        UpdateKind::CallbackQuery(query) => {
            info!(query_id = %query.id, payload = ?query.payload, "  callback query");
        }
        UpdateKind::InlineQuery(query) => {
            info!(query = %query.query, offset = %query.offset, "  inline query");
        }
        UpdateKind::Unknown { name, data } => {
            warn!(kind = %name, keys = data.as_object().map_or(0, |o| o.len()), "  unrecognised update");
        }
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    // Initialise tracing (respects RUST_LOG env, defaults to info).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let input = match read_input() {
        Ok(input) => input,
        Err(e) => {
            error!(error = %e, "failed to read input");
            std::process::exit(1);
        }
    };

    let response: ApiResponse<Vec<Update>> = match serde_json::from_str(&input) {
        Ok(response) => response,
        Err(e) => {
            error!(error = %e, "input is not a getUpdates response");
            std::process::exit(1);
        }
    };

    let updates = match response.into_result() {
        Ok(updates) => updates,
        Err(e) => {
            error!(
                code = e.error_code,
                retry_after = ?e.retry_after(),
                error = %e,
                "telegram returned an error"
            );
            std::process::exit(1);
        }
    };

    info!(count = updates.len(), "decoded updates");
    for update in &updates {
        log_update(update);
    }

    // The offset to pass to the next getUpdates call.
    if let Some(last) = updates.iter().map(|u| u.id.get()).max() {
        info!(next_offset = last + 1, "done");
    }
}
