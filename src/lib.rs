//! specforge - interactive idea-to-specification assistant
//!
//! Turns a one-line idea into a developer-ready specification document
//! through an iterative question-and-answer exchange with an LLM
//! completion provider.

pub mod artifact;
pub mod cli;
pub mod config;
pub mod llm;
pub mod prompts;
pub mod session;
pub mod spinner;
pub mod transcript;
