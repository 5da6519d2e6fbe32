//! HTTP plumbing shared by the auth and catalog clients
//!
//! Every call builds a `reqwest` client, runs it to completion on a
//! short-lived tokio runtime and maps failures into `ClientError`. Callers run
//! these functions on a background thread; they block.

use std::future::Future;

use reqwest::{Client, Response};
use tokio::runtime::Runtime;

use crate::egui_app::config::Config;
use crate::shared::ClientError;

/// Body fields checked, in order, for a human-readable rejection reason
const REASON_FIELDS: [&str; 4] = ["message", "msg", "error", "detail"];

/// Longest plain-text body shown to the user verbatim
const MAX_PLAIN_REASON: usize = 200;

pub(crate) fn client(config: &Config) -> Result<Client, ClientError> {
    Client::builder()
        .timeout(config.request_timeout())
        .build()
        .map_err(|e| ClientError::network(e.to_string()))
}

pub(crate) fn block_on<T, F>(future: F) -> Result<T, ClientError>
where
    F: Future<Output = Result<T, ClientError>>,
{
    let rt = Runtime::new().map_err(|e| ClientError::runtime(e.to_string()))?;
    rt.block_on(future)
}

pub(crate) fn send_error(err: reqwest::Error) -> ClientError {
    ClientError::network(err.to_string())
}

/// Turn a non-success response into `ClientError::Rejected`
pub(crate) async fn rejection(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    ClientError::rejected(status, reason_from_body(&body))
}

/// Pull a reason out of an error body, if it carries one
pub fn reason_from_body(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => REASON_FIELDS
            .iter()
            .filter_map(|field| map.get(*field))
            .filter_map(|value| value.as_str())
            .map(str::trim)
            .find(|reason| !reason.is_empty())
            .map(str::to_string),
        Ok(_) => None,
        Err(_) if body.chars().count() <= MAX_PLAIN_REASON && !body.starts_with('<') => {
            Some(body.to_string())
        }
        Err(_) => None,
    }
}
