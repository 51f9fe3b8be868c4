//! Blocking yes/no confirmation port.

/// Asks the user to confirm a destructive action.
///
/// Implementations block until the user answers. `true` means "proceed".
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> ConfirmPrompt for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Fixed answer, for callers that already asked the user elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetAnswer(pub bool);

impl ConfirmPrompt for PresetAnswer {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}
