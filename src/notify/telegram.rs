use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::MessageSender;
use crate::error::DeliveryError;
use crate::models::Credentials;

/// Body of a Bot API `sendMessage` call.
#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
}

/// Envelope every Bot API reply is wrapped in.
#[derive(Debug, Deserialize)]
struct ApiReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Client for the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramClient {
    http: Client,
    api_url: String,
}

impl TelegramClient {
    pub fn new(api_url: &str) -> Result<Self> {
        let http = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(TelegramClient {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl MessageSender for TelegramClient {
    fn name(&self) -> &str {
        "Telegram"
    }

    async fn send_message(
        &self,
        credentials: &Credentials,
        text: &str,
    ) -> Result<(), DeliveryError> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, credentials.bot_token);
        debug!("Sending {} bytes to chat {}", text.len(), credentials.chat_id);

        let body = SendMessage {
            chat_id: &credentials.chat_id,
            text,
            parse_mode: "Markdown",
        };

        // The request URL embeds the token, so strip it from any error.
        let resp = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| DeliveryError::Request(e.without_url()))?;

        let status = resp.status();
        let reply: Option<ApiReply> = resp.json().await.ok();
        match reply {
            Some(ApiReply { ok: true, .. }) if status.is_success() => Ok(()),
            Some(ApiReply { description, .. }) => Err(DeliveryError::Api {
                status,
                description: description.unwrap_or_else(|| "no description".to_string()),
            }),
            None => Err(DeliveryError::Api {
                status,
                description: "unreadable reply".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    type Inbox = Arc<Mutex<Vec<Value>>>;

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn credentials() -> Credentials {
        Credentials {
            bot_token: "42-TOKEN".into(),
            chat_id: "-10042".into(),
        }
    }

    #[tokio::test]
    async fn test_send_message_posts_markdown() {
        let inbox: Inbox = Arc::default();
        let app = Router::new()
            .route(
                "/bot42-TOKEN/sendMessage",
                post(|State(inbox): State<Inbox>, Json(body): Json<Value>| async move {
                    inbox.lock().unwrap().push(body);
                    Json(json!({ "ok": true, "result": { "message_id": 7 } }))
                }),
            )
            .with_state(inbox.clone());
        let api = serve(app).await;

        let client = TelegramClient::new(&format!("{}/", api)).unwrap();
        client
            .send_message(&credentials(), "*Prochain Match*")
            .await
            .unwrap();

        let received = inbox.lock().unwrap().clone();
        assert_eq!(
            received,
            vec![json!({
                "chat_id": "-10042",
                "text": "*Prochain Match*",
                "parse_mode": "Markdown"
            })]
        );
    }

    #[tokio::test]
    async fn test_api_rejection_is_delivery_error() {
        let app = Router::new().route(
            "/bot42-TOKEN/sendMessage",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "ok": false,
                        "error_code": 400,
                        "description": "Bad Request: chat not found"
                    })),
                )
            }),
        );
        let api = serve(app).await;

        let client = TelegramClient::new(&api).unwrap();
        let err = client.send_message(&credentials(), "hi").await.unwrap_err();
        match err {
            DeliveryError::Api { status, description } => {
                assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
                assert_eq!(description, "Bad Request: chat not found");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
