//! HTTP implementation of [`Gateway`] for the Dragons of Mugloar style API.
//!
//! Calls are blocking and never retried here. Status codes are mapped to
//! [`GatewayError`] kinds per endpoint.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::RETRY_AFTER;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::core::types::{PurchaseOutcome, Session, ShopItem, SolveOutcome, Task};
use crate::io::config::ApiConfig;
use crate::io::gateway::{Gateway, GatewayError, validate_id};

/// Response bodies are truncated to this many characters in errors and logs.
const SNIPPET_CHARS: usize = 200;

/// Gateway that talks to the game service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

/// Failure before endpoint-specific status mapping.
enum CallFailure {
    Classified(GatewayError),
    Status {
        status: StatusCode,
        body: String,
        retry_after_secs: Option<u64>,
    },
}

impl HttpGateway {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("build http client")?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn call<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        action: &str,
        endpoint: &str,
    ) -> Result<T, CallFailure> {
        info!(action, endpoint, "calling game service");
        let response = request
            .send()
            .map_err(|err| CallFailure::Classified(transport_error(endpoint, &err)))?;
        let status = response.status();
        let retry_after_secs = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok());
        let body = response
            .text()
            .map_err(|err| CallFailure::Classified(transport_error(endpoint, &err)))?;

        if !status.is_success() {
            error!(
                action,
                status = status.as_u16(),
                body = %snippet(&body),
                "game service returned error status"
            );
            return Err(CallFailure::Status {
                status,
                body,
                retry_after_secs,
            });
        }

        let value = decode_body(action, status, &body).map_err(CallFailure::Classified)?;
        debug!(action, "game service call completed");
        Ok(value)
    }
}

impl Gateway for HttpGateway {
    #[instrument(skip_all)]
    fn start_session(&self) -> Result<Session, GatewayError> {
        let action = "start new game";
        let endpoint = build_url(&self.base_url, &["game", "start"]);
        self.call(self.client.post(&endpoint), action, &endpoint)
            .map_err(|failure| status_fallback(action, failure))
    }

    #[instrument(skip(self))]
    fn list_tasks(&self, session_id: &str) -> Result<Vec<Task>, GatewayError> {
        validate_id("gameId", session_id)?;
        let action = "list missions";
        let endpoint = build_url(&self.base_url, &[session_id, "messages"]);
        self.call(self.client.get(&endpoint), action, &endpoint)
            .map_err(|failure| listing_error(action, session_id, failure))
    }

    #[instrument(skip(self))]
    fn solve_task(&self, session_id: &str, task_id: &str) -> Result<SolveOutcome, GatewayError> {
        validate_id("gameId", session_id)?;
        validate_id("adId", task_id)?;
        let action = format!("solve mission {task_id}");
        let endpoint = build_url(&self.base_url, &[session_id, "solve", task_id]);
        self.call(self.client.post(&endpoint), &action, &endpoint)
            .map_err(|failure| match failure {
                CallFailure::Status { status, body, .. } if status == StatusCode::NOT_FOUND => {
                    if mentions_any(&body, &["mission", "ad", "adid", "message"]) {
                        GatewayError::TaskNotFound {
                            session_id: session_id.to_string(),
                            task_id: task_id.to_string(),
                        }
                    } else {
                        GatewayError::SessionNotFound {
                            session_id: session_id.to_string(),
                        }
                    }
                }
                CallFailure::Status { status, .. } if status == StatusCode::BAD_REQUEST => {
                    GatewayError::InvalidSessionState {
                        session_id: session_id.to_string(),
                        task_id: task_id.to_string(),
                    }
                }
                other => status_fallback(&action, other),
            })
    }

    #[instrument(skip(self))]
    fn list_shop_items(&self, session_id: &str) -> Result<Vec<ShopItem>, GatewayError> {
        validate_id("gameId", session_id)?;
        let action = "list shop items";
        let endpoint = build_url(&self.base_url, &[session_id, "shop"]);
        self.call(self.client.get(&endpoint), action, &endpoint)
            .map_err(|failure| listing_error(action, session_id, failure))
    }

    #[instrument(skip(self))]
    fn purchase_item(
        &self,
        session_id: &str,
        item_id: &str,
    ) -> Result<PurchaseOutcome, GatewayError> {
        validate_id("gameId", session_id)?;
        validate_id("itemId", item_id)?;
        let action = format!("purchase item {item_id}");
        let endpoint = build_url(&self.base_url, &[session_id, "shop", "buy", item_id]);
        self.call(self.client.post(&endpoint), &action, &endpoint)
            .map_err(|failure| match failure {
                CallFailure::Status { status, body, .. } if status == StatusCode::NOT_FOUND => {
                    if mentions_any(&body, &["item"]) {
                        GatewayError::ItemNotFound {
                            item_id: item_id.to_string(),
                        }
                    } else {
                        GatewayError::SessionNotFound {
                            session_id: session_id.to_string(),
                        }
                    }
                }
                CallFailure::Status { status, body, .. }
                    if status == StatusCode::BAD_REQUEST
                        && mentions_any(&body, &["gold", "insufficient"]) =>
                {
                    GatewayError::InsufficientResources {
                        item_id: item_id.to_string(),
                    }
                }
                other => status_fallback(&action, other),
            })
    }
}

/// Listing endpoints report an unknown session as 404.
fn listing_error(action: &str, session_id: &str, failure: CallFailure) -> GatewayError {
    match failure {
        CallFailure::Status { status, .. } if status == StatusCode::NOT_FOUND => {
            GatewayError::SessionNotFound {
                session_id: session_id.to_string(),
            }
        }
        other => status_fallback(action, other),
    }
}

/// Mapping shared by every endpoint once endpoint-specific statuses are handled.
fn status_fallback(action: &str, failure: CallFailure) -> GatewayError {
    match failure {
        CallFailure::Classified(err) => err,
        CallFailure::Status {
            status,
            retry_after_secs,
            ..
        } if status == StatusCode::TOO_MANY_REQUESTS => {
            GatewayError::RateLimited { retry_after_secs }
        }
        CallFailure::Status { status, body, .. } => GatewayError::Response {
            action: action.to_string(),
            status: status.as_u16(),
            body: snippet(&body),
        },
    }
}

fn transport_error(endpoint: &str, err: &reqwest::Error) -> GatewayError {
    GatewayError::Connectivity {
        endpoint: endpoint.to_string(),
        message: err.to_string(),
    }
}

/// Decode a success body, rejecting HTML pages served in place of JSON.
pub fn decode_body<T: DeserializeOwned>(
    action: &str,
    status: StatusCode,
    body: &str,
) -> Result<T, GatewayError> {
    if looks_like_html(body) {
        return Err(GatewayError::Response {
            action: action.to_string(),
            status: status.as_u16(),
            body: format!("server returned HTML instead of JSON: {}", snippet(body)),
        });
    }
    serde_json::from_str(body).map_err(|err| GatewayError::Response {
        action: action.to_string(),
        status: status.as_u16(),
        body: format!("malformed body ({err}): {}", snippet(body)),
    })
}

pub fn build_url(base_url: &str, segments: &[&str]) -> String {
    let mut url = base_url.trim_end_matches('/').to_string();
    for segment in segments {
        url.push('/');
        url.push_str(segment);
    }
    url
}

pub fn looks_like_html(body: &str) -> bool {
    let head = body.trim_start().to_ascii_lowercase();
    head.starts_with("<!doctype") || head.starts_with("<html")
}

/// First [`SNIPPET_CHARS`] characters of a body, with an ellipsis when cut.
pub fn snippet(body: &str) -> String {
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(SNIPPET_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Whether any word of `body` (case-insensitive) is one of `words`.
fn mentions_any(body: &str, words: &[&str]) -> bool {
    body.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .any(|word| words.iter().any(|want| word.eq_ignore_ascii_case(want)))
}
