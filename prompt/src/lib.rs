//! # Prompt
//!
//! Builds the prompt text sent to the model: persona preamble, intent
//! classification instructions, needs-data question, and the analysis prompt
//! with its mood-record block.
//!
//! ## External interactions
//!
//! - **AI models**: every builder's output is sent to an OpenAI-compatible
//!   chat completion API via the llm-client crate.

mod analysis;
mod classify;
mod persona;

pub use analysis::{
    analysis_system_prompt, fatigue_label, render_record_line, NO_RECORDS_MESSAGE,
};
pub use classify::{classification_prompt, needs_data_prompt};
pub use persona::{conversation_context, persona_preamble, SECTION_RECENT};

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

/// A single chat message, one-to-one with one element of the OpenAI `messages` array.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}
