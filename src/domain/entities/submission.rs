//! Form submission event.

use uuid::Uuid;

/// One user-initiated form submission.
///
/// The host checks [`SubmissionEvent::is_default_prevented`] after dispatch
/// and skips its own default handling when the flag is set.
#[derive(Debug, Clone)]
pub struct SubmissionEvent {
    id: Uuid,
    default_prevented: bool,
}

impl SubmissionEvent {
    /// Creates a fresh event with a random correlation id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            default_prevented: false,
        }
    }

    /// Returns the correlation id used in logs.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Cancels the host's default handling.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Returns whether default handling was cancelled.
    #[must_use]
    pub const fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl Default for SubmissionEvent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_event_allows_default() {
        let event = SubmissionEvent::new();
        assert!(!event.is_default_prevented());
    }

    #[test]
    fn test_prevent_default() {
        let mut event = SubmissionEvent::new();
        event.prevent_default();
        assert!(event.is_default_prevented());
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(SubmissionEvent::new().id(), SubmissionEvent::new().id());
    }
}
