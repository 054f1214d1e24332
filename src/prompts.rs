//! Prompt text for the interview protocol
//!
//! The framing instruction seeds the conversation; the synthesis
//! instruction closes it. Both are sent as user-role messages.

/// Framing instruction prefixed to the idea in the seed message
const FRAMING_INSTRUCTION: &str = "Ask me one question at a time so we can develop a thorough, \
step-by-step spec for this idea. Each question should build on my previous answers, and our end \
goal is to have a detailed specification I can hand off to a developer. Let's do this iteratively \
and dig into every relevant detail. Remember, only one question at a time. Here's the idea: ";

/// Closing instruction that turns the transcript into the final specification
pub const SYNTHESIS_INSTRUCTION: &str = "Now that we've wrapped up the brainstorming process, can \
you compile our findings into a comprehensive, developer-ready specification?";

/// Build the seed message content for an idea
pub fn seed_prompt(idea: &str) -> String {
    format!("{}{}", FRAMING_INSTRUCTION, idea)
}
