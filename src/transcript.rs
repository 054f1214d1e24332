//! Conversation transcript accumulation
//!
//! The transcript is the ordered, append-only list of role-tagged messages
//! exchanged with the provider. It is never reordered or mutated in place;
//! rendering returns the structured message list itself, not a flattened
//! text blob.

use thiserror::Error;

use crate::llm::Message;
use crate::prompts;

/// Errors raised by transcript operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranscriptError {
    #[error("idea must not be empty")]
    EmptyIdea,

    #[error("transcript is already seeded")]
    AlreadySeeded,

    #[error("answer must not be empty")]
    EmptyMessage,
}

/// Append-only ordered transcript of the conversation
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the transcript with the framing instruction and the idea text.
    ///
    /// The seed is always the first message and always role=user. Seeding
    /// twice is an error; a session seeds exactly once.
    pub fn seed(&mut self, idea: &str) -> Result<(), TranscriptError> {
        if !self.messages.is_empty() {
            return Err(TranscriptError::AlreadySeeded);
        }
        let idea = idea.trim();
        if idea.is_empty() {
            return Err(TranscriptError::EmptyIdea);
        }
        self.messages.push(Message::user(prompts::seed_prompt(idea)));
        Ok(())
    }

    /// Append a provider reply.
    ///
    /// Emptiness is not validated here; the client classifies an empty
    /// reply as `NoCompletion` before this point is reached.
    pub fn append_assistant(&mut self, text: impl Into<String>) {
        self.messages.push(Message::assistant(text));
    }

    /// Append a user answer. Callers check the termination command first.
    pub fn append_user(&mut self, text: &str) -> Result<(), TranscriptError> {
        if text.trim().is_empty() {
            return Err(TranscriptError::EmptyMessage);
        }
        self.messages.push(Message::user(text));
        Ok(())
    }

    /// The full transcript in insertion order
    pub fn render(&self) -> &[Message] {
        &self.messages
    }

    /// Append the closing synthesis instruction as a user message and
    /// render. Used exactly once, at termination; valid on a transcript
    /// holding only the seed message.
    pub fn append_final_request(&mut self, instruction: &str) -> &[Message] {
        self.messages.push(Message::user(instruction));
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
