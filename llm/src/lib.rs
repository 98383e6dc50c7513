//! Abstractions for running chat completions against a language model API.
//!
//! The `llm` crate defines a [`ChatClient`] trait along with the concrete
//! [`OpenAiClient`] implementation. Errors are reported through the closed
//! [`LlmError`] enumeration so callers can tell transport trouble apart from
//! authentication, quota and malformed-response failures.

pub mod openai;
pub mod traits;

pub use openai::{OpenAiClient, DEFAULT_BASE_URL};
pub use traits::{ChatClient, LlmError};
