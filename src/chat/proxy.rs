use super::{build_prompt, extract_answer};
use crate::{Result, config::InferenceConfig, inference::InferenceClient};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Builds the persona prompt, forwards it to the inference service and
/// extracts the answer. Holds no per-request state.
pub struct ChatProxy {
    client: Arc<dyn InferenceClient>,
    prompt_template: String,
}

impl ChatProxy {
    pub fn new(client: Arc<dyn InferenceClient>, config: &InferenceConfig) -> Self {
        Self {
            client,
            prompt_template: config.prompt_template.clone(),
        }
    }

    pub async fn handle(&self, user_input: &str) -> Result<String> {
        info!("Handling chat request ({} chars)", user_input.chars().count());

        let prompt = build_prompt(&self.prompt_template, user_input);

        let generated = self.client.generate(&prompt).await.map_err(|e| {
            error!("Inference call failed: {}", e);
            e
        })?;

        let answer = extract_answer(&generated);
        debug!("Extracted {} byte answer", answer.len());

        Ok(answer.to_string())
    }
}
