use super::types::*;
use crate::{Error, Result, config::InferenceConfig};
use async_trait::async_trait;
use reqwest::{StatusCode, header::AUTHORIZATION};
use std::time::Duration;
use tracing::{debug, warn};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Submits a prompt and returns the raw `generated_text` of the first
    /// reply element.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

pub struct HuggingFaceClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl HuggingFaceClient {
    pub fn new(config: InferenceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.api_url,
            api_key: config.api_key,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl InferenceClient for HuggingFaceClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!(
            "Sending {} byte prompt to inference API at {}",
            prompt.len(),
            self.api_url
        );

        let request = InferenceRequest {
            inputs: prompt.to_string(),
        };

        let response = self
            .client
            .post(&self.api_url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(Error::from_transport)?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::SERVICE_UNAVAILABLE => {
                warn!("Inference API returned 503");
                return Err(Error::ServiceUnavailable);
            }
            StatusCode::UNAUTHORIZED => {
                warn!("Inference API rejected the API key");
                return Err(Error::Unauthorized);
            }
            status => {
                warn!("Inference API returned unexpected status {}", status);
                return Err(Error::Upstream {
                    status: status.as_u16(),
                });
            }
        }

        let replies: Vec<GeneratedText> =
            response.json().await.map_err(Error::from_transport)?;

        let first = replies
            .into_iter()
            .next()
            .ok_or_else(|| Error::internal("Inference API returned an empty reply"))?;

        debug!(
            "Received {} bytes of generated text",
            first.generated_text.len()
        );

        Ok(first.generated_text)
    }
}
