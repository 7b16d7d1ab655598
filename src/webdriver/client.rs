//! WebDriver client for communicating with an Appium server
//!
//! Speaks the three session commands the tool needs: create the session,
//! read the page source, and delete the session. Transport failures and
//! server-side error payloads both surface as the error variant of the
//! command that hit them.

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::common::{Error, Result};
use crate::runner::Driver;

use super::types::{Capabilities, NewSessionRequest, NewSessionValue, WireError, WireResponse};

/// WebDriver client bound to one Appium server endpoint
#[derive(Debug)]
pub struct WebDriverClient {
    /// HTTP transport; default client, no request timeout of our own
    http: reqwest::Client,
    /// Server base URL
    server_url: Url,
    /// ID of the open session, if any
    session_id: Option<String>,
}

impl WebDriverClient {
    /// Create a client for the given server endpoint
    ///
    /// No request is made until a session is opened.
    pub fn new(server_url: &str) -> Result<Self> {
        let server_url = Url::parse(server_url)
            .map_err(|e| Error::Config(format!("Invalid server URL '{server_url}': {e}")))?;
        if server_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "Server URL '{server_url}' cannot carry a session path"
            )));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            server_url,
            session_id: None,
        })
    }

    /// ID of the open session, if any
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Build a command URL under the server base
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.server_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn open_session_id(&self) -> Result<String> {
        self.session_id.clone().ok_or(Error::SessionNotOpen)
    }
}

#[async_trait]
impl Driver for WebDriverClient {
    async fn open(&mut self, capabilities: &Capabilities) -> Result<()> {
        let request = NewSessionRequest::new(capabilities.clone());
        tracing::debug!("opening session against {}", self.server_url);

        let response = self
            .http
            .post(self.endpoint(&["session"]))
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::SessionStart(e.to_string()))?;

        let value: NewSessionValue = unpack(response).await.map_err(Error::SessionStart)?;
        tracing::info!("session {} open", value.session_id);
        self.session_id = Some(value.session_id);
        Ok(())
    }

    async fn page_source(&mut self) -> Result<String> {
        let id = self.open_session_id()?;

        let response = self
            .http
            .get(self.endpoint(&["session", &id, "source"]))
            .send()
            .await
            .map_err(|e| Error::HierarchyFetch(e.to_string()))?;

        unpack(response).await.map_err(Error::HierarchyFetch)
    }

    async fn quit(&mut self) -> Result<()> {
        let id = self.open_session_id()?;
        // The session is gone client-side whatever the server answers
        self.session_id = None;

        let response = self
            .http
            .delete(self.endpoint(&["session", &id]))
            .send()
            .await
            .map_err(|e| Error::SessionClose(e.to_string()))?;

        unpack::<serde_json::Value>(response)
            .await
            .map_err(Error::SessionClose)?;
        tracing::debug!("session {id} closed");
        Ok(())
    }
}

/// Decode a WebDriver response envelope
///
/// On an error status, surfaces the server's error payload as the
/// message so the caller's error variant carries it verbatim.
async fn unpack<T: DeserializeOwned>(
    response: reqwest::Response,
) -> std::result::Result<T, String> {
    let status = response.status();
    let body = response.bytes().await.map_err(|e| e.to_string())?;

    if !status.is_success() {
        return Err(decode_error(status, &body));
    }

    serde_json::from_slice::<WireResponse<T>>(&body)
        .map(|envelope| envelope.value)
        .map_err(|e| format!("Malformed driver response: {e}"))
}

/// Render an error reply as "message (error code)", falling back to the
/// bare HTTP status when the body is not a WebDriver error envelope
fn decode_error(status: StatusCode, body: &[u8]) -> String {
    match serde_json::from_slice::<WireResponse<WireError>>(body) {
        Ok(envelope) => format!("{} ({})", envelope.value.message, envelope.value.error),
        Err(_) => format!("Driver returned HTTP {status}"),
    }
}
