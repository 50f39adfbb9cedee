//! # doran-server
//!
//! HTTP backend for the doran parenting chat app. Inbound chat messages run
//! through the intent pipeline (classify → needs-data decision → record
//! fetch → compose → optional chart) and every endpoint of the mobile app's
//! surface lives here: chat, chat history, record CRUD, health, metrics.

pub mod config;
pub mod http;
pub mod pipeline;

pub use config::ServerConfig;
