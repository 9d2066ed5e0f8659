//! # babel-channels
//!
//! Messaging platform integrations for Babel.

pub mod discord;
