//! Scripted affirmation gate for testing.
//!
//! Answers gate questions from queued replies and records every message it
//! was shown, so tests can assert on both sides of the conversation.
//!
//! # Example
//!
//! ```
//! use hemolink::adapters::gate::ScriptedGate;
//! use hemolink::ports::AffirmationGate;
//!
//! let gate = ScriptedGate::affirming().with_text(Some("schedule conflict"));
//! assert!(gate.confirm("Cancel this appointment?"));
//! assert_eq!(gate.prompt_text("Why?"), Some("schedule conflict".to_string()));
//! assert_eq!(gate.seen_messages().len(), 2);
//! ```

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::ports::AffirmationGate;

/// Scripted gate for tests.
///
/// Yes/no questions pop queued replies first and fall back to the default
/// answer. Text prompts pop queued replies and fall back to `None`
/// (a dismissed prompt).
///
/// # Panics
///
/// Methods panic if internal locks are poisoned. Acceptable for test code;
/// this adapter should NOT be used in production.
#[derive(Debug)]
pub struct ScriptedGate {
    default_answer: bool,
    confirm_replies: Mutex<VecDeque<bool>>,
    text_replies: Mutex<VecDeque<Option<String>>>,
    seen_messages: Mutex<Vec<String>>,
}

impl ScriptedGate {
    /// Gate that answers yes to every question not covered by the script.
    pub fn affirming() -> Self {
        Self::with_default(true)
    }

    /// Gate that answers no to every question not covered by the script.
    pub fn declining() -> Self {
        Self::with_default(false)
    }

    fn with_default(default_answer: bool) -> Self {
        Self {
            default_answer,
            confirm_replies: Mutex::new(VecDeque::new()),
            text_replies: Mutex::new(VecDeque::new()),
            seen_messages: Mutex::new(Vec::new()),
        }
    }

    /// Queues a reply for the next yes/no question.
    pub fn with_confirm(self, reply: bool) -> Self {
        self.confirm_replies
            .lock()
            .expect("ScriptedGate: confirm lock poisoned")
            .push_back(reply);
        self
    }

    /// Queues a reply for the next text prompt. `None` simulates a
    /// dismissed prompt.
    pub fn with_text(self, reply: Option<&str>) -> Self {
        self.text_replies
            .lock()
            .expect("ScriptedGate: text lock poisoned")
            .push_back(reply.map(str::to_string));
        self
    }

    /// Returns every message shown to the gate so far (for assertions).
    pub fn seen_messages(&self) -> Vec<String> {
        self.seen_messages
            .lock()
            .expect("ScriptedGate: messages lock poisoned")
            .clone()
    }

    fn record(&self, message: &str) {
        self.seen_messages
            .lock()
            .expect("ScriptedGate: messages lock poisoned")
            .push(message.to_string());
    }
}

impl AffirmationGate for ScriptedGate {
    fn confirm(&self, message: &str) -> bool {
        self.record(message);
        self.confirm_replies
            .lock()
            .expect("ScriptedGate: confirm lock poisoned")
            .pop_front()
            .unwrap_or(self.default_answer)
    }

    fn prompt_text(&self, message: &str) -> Option<String> {
        self.record(message);
        self.text_replies
            .lock()
            .expect("ScriptedGate: text lock poisoned")
            .pop_front()
            .flatten()
    }
}
