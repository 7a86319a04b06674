//! Conversation session management.
//!
//! A `Session` owns the transcript of one conversation and drives one
//! request/response cycle per user input.

mod chat;
mod manager;
mod transcript;
mod types;


pub use manager::Session;
pub use transcript::{Transcript, Turn};
pub use types::{CycleState, SessionError};
