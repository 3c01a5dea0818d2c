//! Submit button state.

/// Enabled/disabled status of the submit control.
///
/// Doubles as the in-flight indicator: the button is disabled while a
/// greeting call is pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonState {
    /// Accepts submissions.
    #[default]
    Enabled,
    /// Refuses submissions.
    Disabled,
}

impl ButtonState {
    /// Returns whether the button accepts submissions.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }

    /// Returns whether the button refuses submissions.
    #[must_use]
    pub const fn is_disabled(self) -> bool {
        matches!(self, Self::Disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_enabled() {
        assert_eq!(ButtonState::default(), ButtonState::Enabled);
        assert!(ButtonState::default().is_enabled());
    }

    #[test]
    fn test_disabled_predicates() {
        assert!(ButtonState::Disabled.is_disabled());
        assert!(!ButtonState::Disabled.is_enabled());
    }
}
