use persona_chat_proxy::{
    config::{Config, InferenceConfig},
    inference::HuggingFaceClient,
    server,
};
use axum::Router;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const MODEL_PATH: &str = "/models/test-model";
pub const TEST_API_KEY: &str = "hf_test_key";

/// Create a test configuration pointing at the given inference endpoint
pub fn create_test_config(api_url: &str) -> Config {
    Config {
        inference: InferenceConfig {
            api_url: api_url.to_string(),
            api_key: TEST_API_KEY.to_string(),
            timeout_ms: 30_000,
            ..InferenceConfig::default()
        },
        ..Config::default()
    }
}

/// Start a mock inference service
pub async fn start_inference_mock() -> MockServer {
    MockServer::start().await
}

pub fn model_url(mock: &MockServer) -> String {
    format!("{}{}", mock.uri(), MODEL_PATH)
}

/// Mount a single response for the model path
pub async fn mount_reply(mock: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(response)
        .mount(mock)
        .await;
}

/// Successful reply body in the inference API's shape
pub fn generated_reply(text: &str) -> Value {
    json!([{ "generated_text": text }])
}

/// Build the application router with a real inference client
pub fn create_test_router(config: &Config) -> Router {
    let client = HuggingFaceClient::new(config.inference.clone()).unwrap();
    server::app(config, Arc::new(client))
}

/// Build a test server whose inference client targets `config`
pub fn create_test_server(config: &Config) -> TestServer {
    TestServer::new(create_test_router(config)).unwrap()
}

/// Test server wired to a fresh mock inference service
pub async fn create_test_app() -> (TestServer, MockServer) {
    let mock = start_inference_mock().await;
    let config = create_test_config(&model_url(&mock));
    (create_test_server(&config), mock)
}
