pub mod message;
pub mod telegram;

pub use message::NotificationMessage;
pub use telegram::TelegramClient;

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::error::DeliveryError;
use crate::models::Credentials;

/// A chat backend able to post one text message.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send_message(
        &self,
        credentials: &Credentials,
        text: &str,
    ) -> Result<(), DeliveryError>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}

/// Delivers messages and never fails: the job runs unattended, so every
/// problem ends up in the log instead of the exit status.
pub struct Notifier {
    sender: Arc<dyn MessageSender>,
    credentials: Option<Credentials>,
    dry_run: bool,
}

impl Notifier {
    pub fn new(
        sender: Arc<dyn MessageSender>,
        credentials: Option<Credentials>,
        dry_run: bool,
    ) -> Self {
        Notifier {
            sender,
            credentials,
            dry_run,
        }
    }

    pub async fn deliver(&self, message: &NotificationMessage) {
        if self.dry_run {
            info!("🟡 DRY RUN – {:?} message not sent:\n{}", message.kind, message.text);
            return;
        }

        let Some(credentials) = &self.credentials else {
            error!("BOT_TOKEN or CHAT_ID is not set; {:?} message not sent", message.kind);
            info!("{}", message.text);
            return;
        };

        match self.sender.send_message(credentials, &message.text).await {
            Ok(()) => info!("{:?} message sent via {}", message.kind, self.sender.name()),
            Err(e) => warn!(
                "Failed to send {:?} message via {}: {}",
                message.kind,
                self.sender.name(),
                e
            ),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records what would have been sent.
    #[derive(Default)]
    pub(crate) struct RecordingSender {
        pub sent: Mutex<Vec<(String, String)>>,
        pub fail: bool,
    }

    #[async_trait]
    impl MessageSender for RecordingSender {
        async fn send_message(
            &self,
            credentials: &Credentials,
            text: &str,
        ) -> Result<(), DeliveryError> {
            self.sent
                .lock()
                .unwrap()
                .push((credentials.chat_id.clone(), text.to_string()));
            if self.fail {
                return Err(DeliveryError::Api {
                    status: reqwest::StatusCode::UNAUTHORIZED,
                    description: "Unauthorized".into(),
                });
            }
            Ok(())
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    fn credentials() -> Credentials {
        Credentials {
            bot_token: "t".into(),
            chat_id: "c".into(),
        }
    }

    #[tokio::test]
    async fn test_missing_credentials_skip_delivery() {
        let sender = Arc::new(RecordingSender::default());
        let notifier = Notifier::new(sender.clone(), None, false);
        notifier.deliver(&NotificationMessage::heartbeat()).await;
        assert!(sender.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dry_run_skips_delivery() {
        let sender = Arc::new(RecordingSender::default());
        let notifier = Notifier::new(sender.clone(), Some(credentials()), true);
        notifier.deliver(&NotificationMessage::heartbeat()).await;
        assert!(sender.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delivers_to_chat() {
        let sender = Arc::new(RecordingSender::default());
        let notifier = Notifier::new(sender.clone(), Some(credentials()), false);
        notifier.deliver(&NotificationMessage::heartbeat()).await;
        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "c");
        assert!(sent[0].1.starts_with("🤖"));
    }

    #[tokio::test]
    async fn test_delivery_error_is_swallowed() {
        let sender = Arc::new(RecordingSender {
            fail: true,
            ..Default::default()
        });
        let notifier = Notifier::new(sender.clone(), Some(credentials()), false);
        // Returns normally even though the sender failed.
        notifier.deliver(&NotificationMessage::heartbeat()).await;
        assert_eq!(sender.sent.lock().unwrap().len(), 1);
    }
}
