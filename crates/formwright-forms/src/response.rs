use std::fmt;

/// A single value submitted from a modal form control
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    /// Text field contents
    Text(String),
    /// Toggle state
    Bool(bool),
    /// Selected dropdown option
    Index(usize),
    /// Slider position
    Number(f64),
}

impl FormValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FormValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            FormValue::Index(index) => Some(*index),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FormValue::Number(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::Text(value.to_string())
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        FormValue::Text(value)
    }
}

impl From<bool> for FormValue {
    fn from(value: bool) -> Self {
        FormValue::Bool(value)
    }
}

impl From<usize> for FormValue {
    fn from(value: usize) -> Self {
        FormValue::Index(value)
    }
}

impl From<f64> for FormValue {
    fn from(value: f64) -> Self {
        FormValue::Number(value)
    }
}

/// Why the host closed a form without a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelationReason {
    /// The player dismissed the form
    UserClosed,
    /// The player was busy (e.g. another screen was open) and never saw it
    UserBusy,
}

impl fmt::Display for CancelationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelationReason::UserClosed => write!(f, "user closed"),
            CancelationReason::UserBusy => write!(f, "user busy"),
        }
    }
}

/// What the host reports when a shown form resolves
#[derive(Debug, Clone, PartialEq)]
pub enum FormResponse<T> {
    Submitted(T),
    Canceled(CancelationReason),
}

/// Values submitted from a modal form, one per input control in addition order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModalFormResponse {
    pub form_values: Vec<FormValue>,
}

impl ModalFormResponse {
    pub fn new(form_values: Vec<FormValue>) -> Self {
        Self { form_values }
    }
}

/// How a wrapper's `show` ended
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    /// A selection form resolved and the option's callback ran
    Selected(usize),
    /// A modal form passed validation and its submit callback ran
    Submitted { attempts: u32 },
    /// The host closed the form; no callback ran
    Canceled(CancelationReason),
}
