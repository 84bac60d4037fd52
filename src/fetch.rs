//! HTTP client for the upstream user list

use crate::config::SourceConfig;
use crate::error::{Error, Result};
use crate::events::EventSink;
use crate::mapper::{json_type, map_user};
use crate::types::{Event, UserRecord};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Fetches the user list with a single GET request
///
/// There are no retries: any transport failure or non-200 status is
/// returned to the caller as [`Error::Connection`].
pub struct FetchClient {
    http: reqwest::Client,
    url: String,
}

impl FetchClient {
    /// Create a new client for the configured endpoint
    ///
    /// # Errors
    /// Returns [`Error::Unexpected`] if the HTTP client cannot be created
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::Unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            url: config.url.trim().to_string(),
        })
    }

    /// Endpoint this client fetches from
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch, decode and map every user
    ///
    /// Records come back in the same order as the JSON array. If any element
    /// cannot be mapped the whole fetch fails and nothing is returned.
    ///
    /// # Errors
    /// - [`Error::Connection`] on network failure, timeout, or a status other than 200
    /// - [`Error::Parse`] if the body is not a JSON array of objects
    pub async fn fetch_all(&self, sink: &dyn EventSink) -> Result<Vec<UserRecord>> {
        sink.emit(&Event::FetchStarted {
            url: self.url.clone(),
        });
        debug!(url = %self.url, "Sending user list request");

        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(url = %self.url, status = status.as_u16(), "Unexpected HTTP status");
            return Err(Error::http_status(status.as_u16(), &self.url));
        }

        let body = response.bytes().await.map_err(transport_error)?;
        debug!(bytes = body.len(), "Read response body");

        let records = decode_users(&body)?;

        info!(url = %self.url, count = records.len(), "Fetched user records");
        sink.emit(&Event::FetchCompleted {
            count: records.len(),
        });

        Ok(records)
    }
}

/// Decode a response body into user records
///
/// The body must be a JSON array whose elements are all objects.
///
/// # Errors
/// Returns [`Error::Parse`] on invalid JSON, a non-array document, or a
/// non-object element.
pub fn decode_users(body: &[u8]) -> Result<Vec<UserRecord>> {
    let document: Value = serde_json::from_slice(body).map_err(|e| Error::Parse {
        message: format!("JSON decode error: {e}"),
        source: Some(e),
    })?;

    let Value::Array(items) = document else {
        return Err(Error::parse(format!(
            "expected a JSON array of users, got {}",
            json_type(&document)
        )));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            map_user(item).map_err(|e| match e {
                Error::Parse { message, source } => Error::Parse {
                    message: format!("element {index}: {message}"),
                    source,
                },
                other => other,
            })
        })
        .collect()
}

fn transport_error(e: reqwest::Error) -> Error {
    let reason = if e.is_timeout() {
        "request timed out"
    } else if e.is_connect() {
        "could not connect"
    } else {
        "request failed"
    };

    Error::Connection {
        message: format!("{reason}: {e}"),
        status: e.status().map(|s| s.as_u16()),
        source: Some(e),
    }
}
