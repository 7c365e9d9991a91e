use serde::{Deserialize, Serialize};

/// Body sent to the text-generation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceRequest {
    pub inputs: String,
}

/// One element of the sequence returned on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedText {
    pub generated_text: String,
}
