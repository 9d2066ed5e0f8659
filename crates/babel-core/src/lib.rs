//! # babel-core
//!
//! Core types, traits, configuration, and error handling for the Babel bot.

pub mod config;
pub mod error;
pub mod flags;
pub mod message;
pub mod traits;
