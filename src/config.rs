use clap::builder::FalseyValueParser;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::time::Duration;
use tracing::{error, warn};

use crate::models::Credentials;
use crate::scrape::{DetailLayout, HeadingMatch};

const DEFAULT_BASE_URL: &str = "https://www.sportcorico.com";
const DEFAULT_CLUB_PATH: &str = "/clubs/bresse-tonic-foot";
const DEFAULT_TEAM_LABEL: &str = "U18 2";
const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Next-match notifier for the Bresse Tonic Foot U18 2 team
#[derive(Parser, Debug, Clone)]
#[command(name = "match-notifier", version, about)]
pub struct Config {
    /// Telegram bot token
    #[arg(long, env = "BOT_TOKEN", hide_env_values = true)]
    pub bot_token: Option<String>,

    /// Telegram chat receiving the notification
    #[arg(long, env = "CHAT_ID", allow_hyphen_values = true)]
    pub chat_id: Option<String>,

    /// Root of the scraped site; discovered hrefs are resolved against it
    #[arg(long, env = "BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Club landing page, relative to the base URL
    #[arg(long, env = "CLUB_PATH", default_value = DEFAULT_CLUB_PATH)]
    pub club_path: String,

    /// Text identifying the team link on the club page
    #[arg(long, env = "TEAM_LABEL", default_value = DEFAULT_TEAM_LABEL)]
    pub team_label: String,

    /// How the "Prochain Match" heading is matched
    #[arg(long, env = "HEADING_MATCH", value_enum, default_value_t = HeadingMatch::Contains)]
    pub heading_match: HeadingMatch,

    /// Match page layout to read
    #[arg(long, env = "DETAIL_LAYOUT", value_enum, default_value_t = DetailLayout::Auto)]
    pub detail_layout: DetailLayout,

    /// Telegram Bot API base URL
    #[arg(long, env = "TELEGRAM_API_URL", default_value = DEFAULT_TELEGRAM_API_URL)]
    pub telegram_api_url: String,

    /// Send a wake-up message before scraping (any value but 0/false/no/off enables it)
    #[arg(
        long,
        env = "HEARTBEAT",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub heartbeat: bool,

    /// Log messages instead of sending them (any value but 0/false/no/off enables it)
    #[arg(
        long,
        env = "DRY_RUN",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub dry_run: bool,

    /// Overall timeout per page fetch; the HTTP client default applies when unset
    #[arg(long, env = "HTTP_TIMEOUT_SECS")]
    pub http_timeout_secs: Option<u64>,
}

impl Config {
    /// Parse the process arguments and environment. A rejected value never
    /// aborts the run: it is logged and the built-in defaults are used.
    pub fn load() -> Self {
        Self::load_from(std::env::args_os())
    }

    pub fn load_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Config::try_parse_from(args) {
            Ok(config) => config,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(e) => {
                error!(
                    "Invalid configuration, falling back to defaults: {}",
                    e.to_string().trim_end()
                );
                Config::fallback()
            }
        }
    }

    /// Built-in defaults plus the credentials, read straight from the environment.
    fn fallback() -> Self {
        Config {
            bot_token: std::env::var("BOT_TOKEN").ok(),
            chat_id: std::env::var("CHAT_ID").ok(),
            base_url: DEFAULT_BASE_URL.to_string(),
            club_path: DEFAULT_CLUB_PATH.to_string(),
            team_label: DEFAULT_TEAM_LABEL.to_string(),
            heading_match: HeadingMatch::default(),
            detail_layout: DetailLayout::default(),
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            heartbeat: false,
            dry_run: false,
            http_timeout_secs: None,
        }
    }

    /// Both token and chat id, or `None` if either is missing or blank.
    pub fn credentials(&self) -> Option<Credentials> {
        fn non_blank(v: &Option<String>) -> Option<&str> {
            v.as_deref().map(str::trim).filter(|s| !s.is_empty())
        }

        match (non_blank(&self.bot_token), non_blank(&self.chat_id)) {
            (Some(bot_token), Some(chat_id)) => Some(Credentials {
                bot_token: bot_token.to_string(),
                chat_id: chat_id.to_string(),
            }),
            _ => {
                warn!("BOT_TOKEN or CHAT_ID is not defined; messages will only be logged");
                None
            }
        }
    }

    pub fn http_timeout(&self) -> Option<Duration> {
        self.http_timeout_secs.map(Duration::from_secs)
    }
}
