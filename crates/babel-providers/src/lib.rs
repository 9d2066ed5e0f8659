//! # babel-providers
//!
//! Translation backends for Babel.

pub mod openai;

pub use openai::{translation_prompt, OpenAiTranslator};
