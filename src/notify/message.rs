use crate::error::ScrapeError;
use crate::models::{MatchDetails, MatchReference, ADDRESS_NOT_FOUND, TIME_NOT_SPECIFIED};

const HEARTBEAT_TEXT: &str = "🤖 Le bot se réveille pour sa vérification hebdomadaire...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Upcoming match announcement
    Match,
    /// A stage failed; the text explains which
    Diagnostic,
    /// Wake-up ping sent before scraping
    Heartbeat,
}

/// Text ready for the chat, using Telegram's legacy Markdown (`*bold*`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl NotificationMessage {
    pub fn heartbeat() -> Self {
        NotificationMessage {
            kind: MessageKind::Heartbeat,
            text: HEARTBEAT_TEXT.to_string(),
        }
    }

    pub fn diagnostic(err: &ScrapeError) -> Self {
        NotificationMessage {
            kind: MessageKind::Diagnostic,
            text: escape_markdown(&err.to_string()),
        }
    }

    /// The one place a scrape outcome becomes user-facing text.
    pub fn from_outcome(outcome: &Result<(MatchReference, MatchDetails), ScrapeError>) -> Self {
        match outcome {
            Ok((reference, details)) => format_match(reference, details),
            Err(err) => Self::diagnostic(err),
        }
    }
}

/// Backslash-escape the characters legacy Markdown treats as entity markers,
/// so scraped text is shown literally instead of breaking the message.
fn escape_markdown(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '_' | '*' | '`' | '[') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

pub fn format_match(reference: &MatchReference, details: &MatchDetails) -> NotificationMessage {
    let text = format!(
        "📅 *Prochain Match : {home} vs {away}* ⚽\n\n\
         ▪️ *Date* : {date}\n\
         ▪️ *Heure* : {time}\n\
         ▪️ *Stade* : {venue}\n\
         ▪️ *Adresse* : {address}",
        home = escape_markdown(&reference.home_team),
        away = escape_markdown(&reference.away_team),
        date = escape_markdown(&details.date),
        time = escape_markdown(or_placeholder(&details.time, TIME_NOT_SPECIFIED)),
        venue = escape_markdown(&details.venue),
        address = escape_markdown(or_placeholder(&details.address, ADDRESS_NOT_FOUND)),
    );
    NotificationMessage {
        kind: MessageKind::Match,
        text,
    }
}
