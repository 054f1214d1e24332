//! Interview session - the question/answer/synthesize protocol
//!
//! Drives the turn-taking loop: render the transcript, request the next
//! question, collect the user's answer, and on the termination command
//! issue the final synthesis call and persist the artifact. Any provider
//! failure is terminal for the run; there is no retry and no partial save.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, info, warn};

use crate::artifact;
use crate::llm::{CompletionClient, LlmError, Message};
use crate::prompts;
use crate::spinner::Spinner;
use crate::transcript::{Transcript, TranscriptError};

/// Command that ends the question loop and starts synthesis
pub const TERMINATION_COMMAND: &str = "/finish";

/// Check whether user input is the termination command.
///
/// Matches a trimmed, case-folded copy exactly; trailing words do not
/// terminate.
pub fn is_termination(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(TERMINATION_COMMAND)
}

/// Protocol state of an interview session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Asking questions and collecting answers
    Questioning,
    /// Termination received; the final synthesis call is next
    Synthesizing,
    /// Specification produced
    Done,
    /// A protocol step failed; no further provider calls are made
    Failed,
}

/// Outcome of recording one user answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Answer committed; ask the next question
    Continue,
    /// Termination command received; move to synthesis
    Finish,
}

/// InterviewSession owns the transcript and drives the protocol
///
/// A pending question is held outside the transcript until the user
/// answers it: a real answer commits the question/answer pair, while the
/// termination command discards the pending question so the synthesis
/// request carries only completed turns. This is why a run that is
/// terminated at the very first prompt synthesizes from the seed message
/// alone.
pub struct InterviewSession {
    client: Arc<dyn CompletionClient>,
    transcript: Transcript,
    pending_question: Option<String>,
    state: SessionState,
    /// Turn counter, display only
    turn: usize,
}

impl InterviewSession {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client,
            transcript: Transcript::new(),
            pending_question: None,
            state: SessionState::Questioning,
            turn: 0,
        }
    }

    /// Seed the transcript with the framing instruction and the idea
    pub fn seed(&mut self, idea: &str) -> Result<(), TranscriptError> {
        self.transcript.seed(idea)
    }

    /// Request the next question from the provider.
    ///
    /// On failure the session is terminal and nothing is appended to the
    /// transcript.
    pub async fn next_question(&mut self) -> Result<String, LlmError> {
        debug!(transcript_len = self.transcript.len(), "next_question: requesting completion");
        match self.client.complete(self.transcript.render()).await {
            Ok(text) => {
                self.turn += 1;
                self.pending_question = Some(text.clone());
                Ok(text)
            }
            Err(e) => {
                warn!(error = %e, "next_question: completion failed");
                self.state = SessionState::Failed;
                Err(e)
            }
        }
    }

    /// Record the user's response to the pending question
    pub fn record_answer(&mut self, answer: &str) -> Result<AnswerOutcome, TranscriptError> {
        if is_termination(answer) {
            debug!(turn = self.turn, "record_answer: termination received");
            self.pending_question = None;
            self.state = SessionState::Synthesizing;
            return Ok(AnswerOutcome::Finish);
        }

        let answer = answer.trim();
        if answer.is_empty() {
            self.state = SessionState::Failed;
            return Err(TranscriptError::EmptyMessage);
        }

        if let Some(question) = self.pending_question.take() {
            self.transcript.append_assistant(question);
        }
        self.transcript.append_user(answer)?;
        Ok(AnswerOutcome::Continue)
    }

    /// Run the final synthesis call and return the specification body
    pub async fn synthesize(&mut self) -> Result<String, LlmError> {
        debug_assert_eq!(self.state, SessionState::Synthesizing);

        let client = Arc::clone(&self.client);
        let messages = self.transcript.append_final_request(prompts::SYNTHESIS_INSTRUCTION);
        debug!(transcript_len = messages.len(), "synthesize: requesting completion");

        match client.complete(messages).await {
            Ok(body) => {
                self.state = SessionState::Done;
                Ok(body)
            }
            Err(e) => {
                warn!(error = %e, "synthesize: completion failed");
                self.state = SessionState::Failed;
                Err(e)
            }
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    /// The committed transcript, in insertion order
    pub fn transcript(&self) -> &[Message] {
        self.transcript.render()
    }

    /// Run the interactive loop: questions, answers, synthesis, artifact.
    ///
    /// Returns the path of the written specification.
    pub async fn run_interactive(&mut self, idea: &str, output_dir: &Path) -> Result<PathBuf> {
        self.seed(idea)?;
        info!("Interview started");
        print_welcome();

        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        loop {
            let spinner = Spinner::start("thinking");
            let result = self.next_question().await;
            spinner.stop().await;
            let question = result?;

            println!();
            println!("{}", format!("Question {}", self.turn).bright_cyan().bold());
            println!("{}", question);
            println!();

            let answer = loop {
                match rl.readline(&format!("{} ", ">".bright_green())) {
                    Ok(line) => {
                        let input = line.trim().to_string();
                        if input == "/help" {
                            print_help();
                            continue;
                        }
                        let _ = rl.add_history_entry(&input);
                        break input;
                    }
                    Err(ReadlineError::Interrupted) => {
                        // Ctrl+C cancels before anything is appended
                        println!("^C");
                        self.state = SessionState::Failed;
                        eyre::bail!("Session cancelled");
                    }
                    Err(ReadlineError::Eof) => {
                        self.state = SessionState::Failed;
                        return Err(TranscriptError::EmptyMessage.into());
                    }
                    Err(err) => {
                        self.state = SessionState::Failed;
                        return Err(eyre::eyre!("Readline error: {}", err));
                    }
                }
            };

            match self.record_answer(&answer)? {
                AnswerOutcome::Continue => continue,
                AnswerOutcome::Finish => break,
            }
        }

        println!();
        let spinner = Spinner::start("compiling the specification");
        let result = self.synthesize().await;
        spinner.stop().await;
        let body = result?;

        let path = artifact::write_spec(output_dir, &body)?;
        info!(path = %path.display(), turns = self.turn, "Specification written");

        println!("{} {}", "Specification written to".bright_green(), path.display());
        Ok(path)
    }
}

/// Print the welcome banner
fn print_welcome() {
    println!();
    println!("{}", "specforge".bright_cyan().bold());
    println!("Answer each question to refine the idea into a specification.");
    println!(
        "Type {} when you are done, {} for commands",
        TERMINATION_COMMAND.yellow(),
        "/help".yellow()
    );
}

/// Print help for prompt commands
fn print_help() {
    println!();
    println!("{}", "Available Commands:".bright_cyan());
    println!("  {:10} End the interview and compile the specification", "/finish".yellow());
    println!("  {:10} Show this help", "/help".yellow());
    println!();
}
