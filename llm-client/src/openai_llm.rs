//! OpenAI implementation of [`LlmClient`].

use anyhow::Result;
use async_openai::{
    config::OpenAIConfig, types::CreateChatCompletionRequestArgs, Client,
};
use async_trait::async_trait;
use prompt::ChatMessage;
use std::sync::Arc;
use tracing::instrument;

use super::{chat_message_to_openai, LlmClient};

/// LlmClient backed by an OpenAI-compatible chat completion API.
#[derive(Clone)]
pub struct OpenAILlmClient {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
}

impl OpenAILlmClient {
    pub fn new(api_key: String) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        Self {
            client: Arc::new(Client::with_config(config)),
            model: "gpt-4o-mini".to_string(),
        }
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        Self {
            client: Arc::new(Client::with_config(config)),
            model: "gpt-4o-mini".to_string(),
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Builds a client from env config (OPENAI_API_KEY, OPENAI_BASE_URL, MODEL).
    pub fn from_config(config: &super::EnvLlmConfig) -> Self {
        Self::with_base_url(config.openai_api_key.clone(), config.openai_base_url.clone())
            .with_model(config.llm_model.clone())
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, messages))]
    async fn get_llm_response_with_messages(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let mut openai_messages = Vec::with_capacity(messages.len());
        for msg in &messages {
            openai_messages.push(chat_message_to_openai(msg)?);
        }

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(openai_messages)
            .build()?;

        let response = self.client.chat().create(request).await?;

        if let Some(choice) = response.choices.first() {
            Ok(choice.message.content.clone().unwrap_or_default())
        } else {
            anyhow::bail!("No response from OpenAI")
        }
    }
}
