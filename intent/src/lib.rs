//! # Intent
//!
//! Turns a free-text chat message plus "now" into a structured [`Intent`].
//!
//! The primary path asks the model to classify ([`LlmIntentClassifier`]);
//! its JSON reply is untrusted input: code fences are stripped, the first
//! balanced `{...}` span is extracted, and every field is read defensively.
//! Any failure falls through to the deterministic [`KeywordClassifier`],
//! which always returns a complete intent. Date windows are resolved locally
//! ([`resolve_window`]); today/yesterday arithmetic from the model is never
//! trusted.

mod classifier;
mod extract;
mod model;
mod range;

pub use classifier::{needs_database_lookup, IntentClassifier, KeywordClassifier, LlmIntentClassifier};
pub use extract::extract_json_object;
pub use model::{AnalysisType, Intent, PeriodType, TimeRange};
pub use range::{resolve_period, resolve_window, DateRange};
