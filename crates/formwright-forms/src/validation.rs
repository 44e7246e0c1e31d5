use crate::response::FormValue;

/// Result of validating one submitted control value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Correct,
    /// Rejected; the message is shown under the control's label
    Error(String),
}

impl ValidationOutcome {
    pub fn correct() -> Self {
        ValidationOutcome::Correct
    }

    pub fn error(message: impl Into<String>) -> Self {
        ValidationOutcome::Error(message.into())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ValidationOutcome::Error(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ValidationOutcome::Correct => None,
            ValidationOutcome::Error(message) => Some(message),
        }
    }
}

impl<E: Into<String>> From<Result<(), E>> for ValidationOutcome {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => ValidationOutcome::Correct,
            Err(message) => ValidationOutcome::Error(message.into()),
        }
    }
}

/// Validator attached to one input control
pub type ControlCallback = Box<dyn FnMut(&FormValue) -> ValidationOutcome>;

/// Validator for controls added without one
pub(crate) fn always_correct() -> ControlCallback {
    Box::new(|_| ValidationOutcome::Correct)
}
