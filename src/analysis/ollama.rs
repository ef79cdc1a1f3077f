use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::types::LlmClient;
use super::AnalysisError;
use crate::config;

/// Ollama HTTP client for local LLM inference.
pub struct OllamaClient {
    base_url: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl OllamaClient {
    /// Create a new OllamaClient pointing at a local Ollama instance.
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    /// Client configured from the environment (base URL + timeout).
    pub fn from_config() -> Self {
        Self::new(&config::ollama_base_url(), config::request_timeout_secs())
    }
}

/// Request body for Ollama /api/generate
#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    system: &'a str,
    stream: bool,
}

/// Response body from Ollama /api/generate
#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

/// Response body from Ollama /api/tags
#[derive(Deserialize)]
struct OllamaTagsResponse {
    models: Vec<OllamaModel>,
}

#[derive(Deserialize)]
struct OllamaModel {
    name: String,
}

#[async_trait]
impl LlmClient for OllamaClient {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        system: &str,
    ) -> Result<String, AnalysisError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = OllamaGenerateRequest {
            model,
            prompt,
            system,
            stream: false,
        };

        let response = self.client.post(&url).json(&body).send().await.map_err(|e| {
            if e.is_connect() {
                AnalysisError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                AnalysisError::HttpClient(format!(
                    "Request timed out after {}s",
                    self.timeout_secs
                ))
            } else {
                AnalysisError::HttpClient(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: OllamaGenerateResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::JsonParsing(e.to_string()))?;

        Ok(parsed.response)
    }

    async fn is_model_available(&self, model: &str) -> Result<bool, AnalysisError> {
        let models = self.list_models().await?;
        Ok(models.iter().any(|m| m.starts_with(model)))
    }

    async fn list_models(&self) -> Result<Vec<String>, AnalysisError> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_connect() {
                AnalysisError::Connection(self.base_url.clone())
            } else {
                AnalysisError::HttpClient(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: OllamaTagsResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::JsonParsing(e.to_string()))?;

        Ok(parsed.models.into_iter().map(|m| m.name).collect())
    }
}

/// Mock LLM client for testing — returns a configurable reply or failure.
pub struct MockLlmClient {
    reply: Result<String, String>,
    available_models: Vec<String>,
}

impl MockLlmClient {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            available_models: vec!["medgemma:latest".to_string()],
        }
    }

    /// A client whose generate call always fails with the given message.
    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            available_models: vec!["medgemma:latest".to_string()],
        }
    }

    pub fn with_models(mut self, models: Vec<String>) -> Self {
        self.available_models = models;
        self
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(
        &self,
        _model: &str,
        _prompt: &str,
        _system: &str,
    ) -> Result<String, AnalysisError> {
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(AnalysisError::Capability(message.clone())),
        }
    }

    async fn is_model_available(&self, model: &str) -> Result<bool, AnalysisError> {
        Ok(self.available_models.iter().any(|m| m.starts_with(model)))
    }

    async fn list_models(&self) -> Result<Vec<String>, AnalysisError> {
        Ok(self.available_models.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_client_returns_configured_reply() {
        let client = MockLlmClient::new("test reply");
        let result = client.generate("model", "prompt", "system").await.unwrap();
        assert_eq!(result, "test reply");
    }

    #[tokio::test]
    async fn mock_client_failure_carries_message() {
        let client = MockLlmClient::failing("rate limited");
        let err = client
            .generate("model", "prompt", "system")
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Capability(ref m) if m == "rate limited"));
    }

    #[tokio::test]
    async fn mock_client_lists_models() {
        let client = MockLlmClient::new("")
            .with_models(vec!["medgemma:latest".into(), "llama3:8b".into()]);
        let models = client.list_models().await.unwrap();
        assert_eq!(models.len(), 2);
        assert!(client.is_model_available("medgemma").await.unwrap());
    }

    #[tokio::test]
    async fn mock_client_model_not_available() {
        let client = MockLlmClient::new("").with_models(vec!["llama3:8b".into()]);
        assert!(!client.is_model_available("medgemma").await.unwrap());
    }

    #[test]
    fn ollama_client_trims_trailing_slash() {
        let client = OllamaClient::new("http://localhost:11434/", 60);
        assert_eq!(client.base_url, "http://localhost:11434");
        assert_eq!(client.timeout_secs, 60);
    }
}
