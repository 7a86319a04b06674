//! OpenAI-compatible chat completion client.
//!
//! Implements `CompletionClient` against any endpoint exposing
//! `POST {base_url}/chat/completions`, such as the hosted SUPA API.

mod api;
mod client;
mod config;


pub use client::OpenAiClient;
pub use config::OpenAiConfig;
