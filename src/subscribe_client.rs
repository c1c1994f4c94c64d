use reqwest::{Client, Url};
use std::time::Duration;

use crate::domain::{SubscriptionRequest, SubscriptionResponse};
use crate::utils::chain_error_fmt;

const SUBSCRIBE_PATH: &str = "subscribe";

#[derive(Debug)]
pub struct SubscribeClient {
    http_client: Client,
    subscribe_url: Url,
}

#[derive(thiserror::Error, Debug)]
pub enum SubscribeClientError {
    #[error("`{base_url}` is not a valid base url: {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
    #[error("Failed to build the http client")]
    HttpClient(#[from] reqwest::Error),
}

/// Failures of a single subscribe call.
///
/// A reply with `success: false` is not one of them.
#[derive(thiserror::Error)]
pub enum SubscribeError {
    #[error("The subscribe request failed before a response arrived")]
    Network(#[from] reqwest::Error),
    #[error("The subscribe response was not a valid subscription response")]
    MalformedResponse(#[from] serde_json::Error),
}

impl std::fmt::Debug for SubscribeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        chain_error_fmt(self, f)
    }
}

impl SubscribeClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, SubscribeClientError> {
        let subscribe_url = subscribe_url(&base_url).map_err(|reason| {
            SubscribeClientError::InvalidBaseUrl {
                base_url: base_url.clone(),
                reason,
            }
        })?;
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            subscribe_url,
        })
    }

    pub fn subscribe_url(&self) -> &Url {
        &self.subscribe_url
    }

    /// Sends one subscription request. No retry.
    ///
    /// The body is parsed whatever the status code is: the endpoint reports
    /// refusals in the body, not through the status.
    #[tracing::instrument(
        name = "Sending a subscription request",
        skip(self, request),
        fields(subscribe_url = %self.subscribe_url)
    )]
    pub async fn subscribe(
        &self,
        request: &SubscriptionRequest,
    ) -> Result<SubscriptionResponse, SubscribeError> {
        let response = self
            .http_client
            .post(self.subscribe_url.clone())
            .json(request)
            .send()
            .await?;
        tracing::debug!(status = %response.status(), "Subscribe endpoint replied");
        let body = response.bytes().await?;
        let response = serde_json::from_slice(&body)?;
        Ok(response)
    }
}

fn subscribe_url(base_url: &str) -> Result<Url, String> {
    let mut base = Url::parse(base_url).map_err(|e| e.to_string())?;
    if base.cannot_be_a_base() {
        return Err("the url cannot be a base".into());
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(SUBSCRIBE_PATH).map_err(|e| e.to_string())
}
