use crate::error::ScanError;
use rig::client::CompletionClient;
use rig::completion::{AssistantContent, CompletionModel};
use rig::providers::openai;
use std::future::Future;
use std::pin::Pin;

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub model_name: String,
    pub api_key: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

/// One prompt in, raw response text out. No batching, no internal retries;
/// retry policy, if any, belongs to a surrounding operational layer.
pub trait LlmProvider: Send + Sync {
    fn complete<'a>(
        &'a self,
        system_prompt: &'a str,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, ScanError>> + Send + 'a>>;

    fn get_model_name(&self) -> &str;
}

pub struct RigLlmClient {
    config: LlmConfig,
    client: openai::Client,
}

impl RigLlmClient {
    pub fn new(config: LlmConfig) -> Result<Self, ScanError> {
        let model_name = config.model_name.trim();
        if !is_openai_model(model_name) {
            return Err(ScanError::LlmClientError(format!(
                "Unsupported model '{}'. Use OpenAI (gpt-*, o*) models",
                model_name
            )));
        }

        let client = openai::Client::new(&config.api_key);
        Ok(Self { config, client })
    }

    async fn send_completion_request(
        &self,
        system_prompt: &str,
        prompt: &str,
    ) -> Result<String, ScanError> {
        let model = self.client.completion_model(&self.config.model_name);

        let mut builder = model
            .completion_request(prompt)
            .preamble(system_prompt.to_string());

        // gpt-5 and o-series reject explicit temperature
        if let Some(temp) = self.config.temperature {
            if !self.config.model_name.starts_with("gpt-5")
                && !self.config.model_name.starts_with("o1")
            {
                builder = builder.temperature(temp as f64);
            }
        }

        if let Some(max_tokens) = self.config.max_tokens {
            builder = builder.max_tokens(max_tokens as u64);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| classify_request_error(&e.to_string()))?;

        let mut extracted_text = String::new();
        for content in response.choice.iter() {
            if let AssistantContent::Text(text_content) = content {
                extracted_text.push_str(&text_content.text);
            }
        }

        if extracted_text.trim().is_empty() {
            return Err(ScanError::EmptyResponse);
        }

        Ok(extracted_text)
    }
}

impl LlmProvider for RigLlmClient {
    fn complete<'a>(
        &'a self,
        system_prompt: &'a str,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, ScanError>> + Send + 'a>> {
        Box::pin(self.send_completion_request(system_prompt, prompt))
    }

    fn get_model_name(&self) -> &str {
        &self.config.model_name
    }
}

pub fn create_llm_client(
    model: &str,
    api_key: String,
) -> Result<Box<dyn LlmProvider + Send + Sync>, ScanError> {
    let config = LlmConfig {
        model_name: model.to_string(),
        api_key,
        max_tokens: Some(2000),
        temperature: Some(0.3),
    };

    let client = RigLlmClient::new(config)?;
    Ok(Box::new(client))
}

/// Maps the provider's opaque error text onto the failure taxonomy so the
/// caller can distinguish auth, quota, and network problems.
fn classify_request_error(message: &str) -> ScanError {
    let lower = message.to_lowercase();

    if lower.contains("401")
        || lower.contains("unauthorized")
        || lower.contains("invalid api key")
        || lower.contains("incorrect api key")
        || lower.contains("authentication")
    {
        ScanError::AuthenticationFailed(message.to_string())
    } else if lower.contains("429")
        || lower.contains("rate limit")
        || lower.contains("quota")
        || lower.contains("too many requests")
    {
        ScanError::RateLimited(message.to_string())
    } else {
        ScanError::RequestFailed(message.to_string())
    }
}

fn is_openai_model(model: &str) -> bool {
    let candidate = model.strip_prefix("openai/").unwrap_or(model);
    let candidate = candidate.strip_prefix("ft:").unwrap_or(candidate);

    candidate.starts_with("gpt-")
        || candidate.starts_with("chatgpt-")
        || candidate.starts_with("o1")
        || candidate.starts_with("o3")
        || candidate.starts_with("o4")
}
