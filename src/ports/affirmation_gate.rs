//! Affirmation gate port - explicit user confirmation before mutations.

/// Blocking yes/no and text-prompt capability injected into mutating
/// operations.
///
/// Every mutating operation asks the gate before touching state; when the
/// gate is declined (or a prompt is dismissed) the operation is abandoned
/// with zero side effects. There is no partial mutation to roll back because
/// nothing runs before the gate answers.
pub trait AffirmationGate: Send + Sync {
    /// Asks the user a yes/no question and blocks until answered.
    fn confirm(&self, message: &str) -> bool;

    /// Asks the user for a line of text. Returns `None` when the prompt is
    /// dismissed without an answer.
    fn prompt_text(&self, message: &str) -> Option<String>;
}
