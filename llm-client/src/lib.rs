//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait and an OpenAI implementation over
//! async-openai. Transport-agnostic; the intent classifier and the response
//! composer both talk to the model through this trait, so tests can swap in
//! a canned-response mock.

use anyhow::Result;
use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
};
use async_trait::async_trait;
use prompt::{ChatMessage, MessageRole};

mod config;
mod openai_llm;

pub use config::EnvLlmConfig;
pub use openai_llm::OpenAILlmClient;

/// LLM client interface: request one completion from a list of messages.
///
/// Every call is attempted exactly once; retry policy is deliberately absent
/// and callers degrade to local fallbacks on error.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model reply text for the given messages (system/user/assistant).
    async fn get_llm_response_with_messages(&self, messages: Vec<ChatMessage>) -> Result<String>;
}

/// Converts a single [`ChatMessage`] into OpenAI API message format.
fn chat_message_to_openai(msg: &ChatMessage) -> Result<ChatCompletionRequestMessage> {
    let content = msg.content.clone();
    let openai_msg: ChatCompletionRequestMessage = match msg.role {
        MessageRole::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::User => ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
            .content(content)
            .build()?
            .into(),
    };
    Ok(openai_msg)
}
