//! Demo scheduling API
//!
//! Provides the REST endpoint used by the landing page form:
//! - POST /api/schedule-demo - Submit a demo request

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use std::sync::Arc;

use super::{ApiError, DemoInbox, DemoRequest, DemoResponse, DemoValidationError, StoredDemoRequest};
use crate::core::config::Config;

/// Message returned to the visitor after a successful submission
pub const DEMO_ACCEPTED_MESSAGE: &str =
    "Thanks! We'll be in touch within one business day to find a time.";

/// Where accepted requests are forwarded
#[derive(Debug, Clone)]
pub struct DemoWebhook {
    pub url: String,
    client: reqwest::Client,
}

impl DemoWebhook {
    pub fn new(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    async fn forward(&self, stored: &StoredDemoRequest) -> Result<(), ScheduleDemoError> {
        self.client
            .post(&self.url)
            .json(stored)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map(|_| ())
            .map_err(|e| ScheduleDemoError::Upstream(e.to_string()))
    }
}

/// Demo API state
#[derive(Debug, Clone, Default)]
pub struct DemoApiState {
    pub inbox: DemoInbox,
    pub webhook: Option<DemoWebhook>,
}

impl DemoApiState {
    pub fn new(inbox: DemoInbox) -> Self {
        Self {
            inbox,
            webhook: None,
        }
    }

    /// Build state from configuration, creating the webhook client if needed
    pub fn from_config(config: &Config) -> Result<Self, ScheduleDemoError> {
        let webhook = match &config.demo_webhook_url {
            Some(url) => {
                let client = reqwest::Client::builder()
                    .timeout(config.demo_webhook_timeout)
                    .build()
                    .map_err(|e| ScheduleDemoError::InternalError(e.to_string()))?;
                Some(DemoWebhook::new(url.clone(), client))
            }
            None => None,
        };

        Ok(Self {
            inbox: DemoInbox::bounded(config.demo_inbox_capacity),
            webhook,
        })
    }
}

/// Demo API error types
#[derive(Debug, thiserror::Error)]
pub enum ScheduleDemoError {
    #[error(transparent)]
    Validation(#[from] DemoValidationError),

    #[error("Could not forward demo request: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl IntoResponse for ScheduleDemoError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ScheduleDemoError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ScheduleDemoError::Upstream(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            ScheduleDemoError::InternalError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ApiError::new(self.to_string(), code);

        (status, Json(body)).into_response()
    }
}

/// Create the demo API router
pub fn demo_api_router(state: DemoApiState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/api/schedule-demo", post(schedule_demo_handler))
        .with_state(state)
}

/// POST /api/schedule-demo
/// Validate, store and optionally forward a demo request
async fn schedule_demo_handler(
    State(state): State<Arc<DemoApiState>>,
    Json(request): Json<DemoRequest>,
) -> Result<Json<DemoResponse>, ScheduleDemoError> {
    let request = request.normalized().inspect_err(|e| {
        tracing::warn!("Rejected demo request (field: {}): {}", e.field(), e);
    })?;

    let stored = state.inbox.insert(request);

    if let Some(webhook) = &state.webhook {
        if let Err(e) = webhook.forward(&stored).await {
            tracing::error!("Failed to forward demo request {}: {}", stored.id, e);
            state.inbox.remove(&stored.id);
            return Err(e);
        }
    }

    tracing::info!("Demo request {} accepted", stored.id);
    tracing::debug!(
        "Demo request {} contact: {} ({})",
        stored.id,
        stored.request.email,
        stored.request.company
    );

    Ok(Json(DemoResponse {
        success: true,
        message: DEMO_ACCEPTED_MESSAGE.to_string(),
        id: stored.id.to_string(),
    }))
}
