/// Placeholder used when the match page carries no address paragraph.
pub const ADDRESS_NOT_FOUND: &str = "Adresse non trouvée";

/// Placeholder used when the date/time text has no ` - ` separator.
pub const TIME_NOT_SPECIFIED: &str = "Heure non spécifiée";

/// The upcoming match as discovered on the team page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReference {
    pub team_page_url: String,
    pub match_detail_url: String,
    /// Left-hand team on the preview card
    pub home_team: String,
    /// Right-hand team on the preview card
    pub away_team: String,
}

/// Practical details scraped from the match page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchDetails {
    pub venue: String,
    pub date: String,
    /// Kick-off time, or [`TIME_NOT_SPECIFIED`]
    pub time: String,
    /// Postal address, or [`ADDRESS_NOT_FOUND`]
    pub address: String,
}

/// Telegram bot credentials, read once at startup
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub bot_token: String,
    pub chat_id: String,
}

// Keep the token out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}
