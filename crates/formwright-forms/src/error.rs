/// Errors surfaced by a form's `show`
///
/// Validation failures and cancellations are not errors: the former rebuild
/// the form, the latter end the show cycle with [`crate::FormOutcome::Canceled`].
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Host failed to show form: {0}")]
    Host(String),

    #[error("Host returned {actual} values but the form has {expected} input controls")]
    ValueCountMismatch { expected: usize, actual: usize },

    #[error("Value {index} does not match its control (expected {expected})")]
    ValueTypeMismatch { index: usize, expected: &'static str },

    #[error("Selection {index} is out of range for a form with {options} options")]
    SelectionOutOfRange { index: usize, options: usize },
}

impl FormError {
    /// Wrap any host-side error as [`FormError::Host`]
    pub fn host(err: impl std::fmt::Display) -> Self {
        FormError::Host(err.to_string())
    }
}
