//! Shared request helpers used by every dataset operation
//!
//! The backend wraps every answer in a `{ "code", "message", "data" }` envelope.
//! [`ApiResponse`] models it; the helpers here turn HTTP failures and failed
//! envelopes into [`Error`] so the operations only ever see decoded payloads.

use reqwest::header::{HeaderMap, AUTHORIZATION, RETRY_AFTER, USER_AGENT};
use reqwest::{Method, Url};
use reqwest_middleware::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::client::DatasetClient;
use crate::error::{Error, Result};
use crate::loading::LoadingFlag;

/// Envelope code the backend uses for success
pub const SUCCESS_CODE: i64 = 200;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Response envelope returned by every endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Whether the envelope reports success
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Split the envelope into its payload or a [`Error::Rejected`]
    pub fn into_result(self) -> Result<Option<T>> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(Error::Rejected {
                code: self.code,
                message: self.message.unwrap_or_default(),
            })
        }
    }
}

impl DatasetClient {
    pub(crate) fn get(&self, path: &[&str]) -> Result<RequestBuilder> {
        self.request(Method::GET, path)
    }

    pub(crate) fn post(&self, path: &[&str]) -> Result<RequestBuilder> {
        self.request(Method::POST, path)
    }

    pub(crate) fn put(&self, path: &[&str]) -> Result<RequestBuilder> {
        self.request(Method::PUT, path)
    }

    pub(crate) fn del(&self, path: &[&str]) -> Result<RequestBuilder> {
        self.request(Method::DELETE, path)
    }

    fn request(&self, method: Method, path: &[&str]) -> Result<RequestBuilder> {
        let url = self.url_for(path)?;
        let mut request = self
            .http
            .request(method, url)
            .header(USER_AGENT, self.user_agent.as_str());
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, token.as_str());
        }
        Ok(request)
    }

    /// Resolve path segments against the base URL, percent-encoding each one
    pub(crate) fn url_for(&self, path: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::Configuration(format!("Base URL '{}' cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(path);
        Ok(url)
    }

    /// Dispatch a request and decode a mandatory envelope payload
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        loading: Option<&LoadingFlag>,
    ) -> Result<T> {
        self.send_optional(request, loading)
            .await?
            .ok_or_else(|| Error::Api("Response envelope carried no data".to_string()))
    }

    /// Dispatch a request whose success is settled by status and envelope code
    ///
    /// A boolean payload is passed through; any other payload, or none, reads as `true`.
    pub(crate) async fn send_acknowledged(
        &self,
        request: RequestBuilder,
        loading: Option<&LoadingFlag>,
    ) -> Result<bool> {
        self.send_optional::<serde_json::Value>(request, loading)
            .await
            .map(acknowledged)
    }

    /// Dispatch a request and decode an envelope whose payload may be null
    pub(crate) async fn send_optional<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        loading: Option<&LoadingFlag>,
    ) -> Result<Option<T>> {
        let _guard = loading.map(LoadingFlag::raise);

        let request = request.build()?;
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending dataset API request");

        let response = self.http.execute(request).await?;
        let status = response.status();
        let request_id = header_str(response.headers(), REQUEST_ID_HEADER);
        let retry_after = retry_after(response.headers());
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = error_message(&body);
            warn!(%method, %url, status = status.as_u16(), ?request_id, %message, "dataset API request failed");
            return Err(Error::from_status(
                status.as_u16(),
                message,
                retry_after,
                request_id,
            ));
        }

        let envelope: ApiResponse<T> = serde_json::from_slice(&body)?;
        envelope.into_result().inspect_err(|err| {
            warn!(%method, %url, error = %err, "dataset API request rejected");
        })
    }
}

fn acknowledged(data: Option<serde_json::Value>) -> bool {
    data.and_then(|value| value.as_bool()).unwrap_or(true)
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Prefer the envelope message, fall back to the raw body
fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<ApiResponse<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.message)
        .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned())
}
