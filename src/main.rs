use std::sync::Arc;
use tracing::{error, info};

mod config;
mod error;
mod models;
mod notify;
mod pipeline;
mod scrape;

use config::Config;
use notify::{NotificationMessage, Notifier, TelegramClient};
use pipeline::{Pipeline, Target};
use scrape::HttpFetcher;

// Runs unattended on a schedule: every failure is logged and the exit status stays 0.
#[tokio::main]
async fn main() {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::load();
    info!("Looking up the next '{}' match", config.team_label);

    let telegram = match TelegramClient::new(&config.telegram_api_url) {
        Ok(client) => client,
        Err(e) => {
            error!("Telegram client unavailable, nothing can be sent: {:#}", e);
            return;
        }
    };
    let notifier = Notifier::new(Arc::new(telegram), config.credentials(), config.dry_run);

    if config.heartbeat {
        notifier.deliver(&NotificationMessage::heartbeat()).await;
    }

    let fetcher = match HttpFetcher::new(config.http_timeout()) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!("Page fetcher unavailable, skipping the scrape: {:#}", e);
            return;
        }
    };
    let pipeline = Pipeline::new(Arc::new(fetcher), Target::from(&config));

    // Failures come back as a diagnostic message, delivered like any other.
    let message = pipeline.next_match_message().await;
    notifier.deliver(&message).await;

    info!("Done");
}
