use crate::host::ModalFormBackend;
use crate::response::FormValue;
use crate::text::RawText;

#[derive(Debug, Clone, PartialEq)]
pub struct TextField {
    pub label: RawText,
    pub placeholder: RawText,
    pub default_value: Option<String>,
}

impl TextField {
    pub fn new(label: impl Into<RawText>, placeholder: impl Into<RawText>) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            default_value: None,
        }
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toggle {
    pub label: RawText,
    pub default_value: Option<bool>,
}

impl Toggle {
    pub fn new(label: impl Into<RawText>) -> Self {
        Self {
            label: label.into(),
            default_value: None,
        }
    }

    pub fn default_value(mut self, value: bool) -> Self {
        self.default_value = Some(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dropdown {
    pub label: RawText,
    pub options: Vec<RawText>,
    pub default_index: Option<usize>,
}

impl Dropdown {
    pub fn new<T: Into<RawText>>(
        label: impl Into<RawText>,
        options: impl IntoIterator<Item = T>,
    ) -> Self {
        Self {
            label: label.into(),
            options: options.into_iter().map(Into::into).collect(),
            default_index: None,
        }
    }

    pub fn default_index(mut self, index: usize) -> Self {
        self.default_index = Some(index);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    pub label: RawText,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default_value: Option<f64>,
}

impl Slider {
    /// Slider from `min` to `max` in steps of 1
    pub fn new(label: impl Into<RawText>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            step: 1.0,
            default_value: None,
        }
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn default_value(mut self, value: f64) -> Self {
        self.default_value = Some(value);
        self
    }
}

/// One builder call on a modal form, with its arguments
#[derive(Debug, Clone, PartialEq)]
pub enum ModalControl {
    Title(RawText),
    TextField(TextField),
    Toggle(Toggle),
    Dropdown(Dropdown),
    Slider(Slider),
    SubmitButton(RawText),
}

impl ModalControl {
    /// Whether the control contributes a value to the response
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            ModalControl::TextField(_)
                | ModalControl::Toggle(_)
                | ModalControl::Dropdown(_)
                | ModalControl::Slider(_)
        )
    }

    pub fn label(&self) -> &RawText {
        match self {
            ModalControl::Title(text) | ModalControl::SubmitButton(text) => text,
            ModalControl::TextField(field) => &field.label,
            ModalControl::Toggle(field) => &field.label,
            ModalControl::Dropdown(field) => &field.label,
            ModalControl::Slider(field) => &field.label,
        }
    }

    fn label_mut(&mut self) -> &mut RawText {
        match self {
            ModalControl::Title(text) | ModalControl::SubmitButton(text) => text,
            ModalControl::TextField(field) => &mut field.label,
            ModalControl::Toggle(field) => &mut field.label,
            ModalControl::Dropdown(field) => &mut field.label,
            ModalControl::Slider(field) => &mut field.label,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            ModalControl::Title(_) => "title",
            ModalControl::TextField(_) => "text field",
            ModalControl::Toggle(_) => "toggle",
            ModalControl::Dropdown(_) => "dropdown",
            ModalControl::Slider(_) => "slider",
            ModalControl::SubmitButton(_) => "submit button",
        }
    }

    /// Whether `value` is the kind of value this control submits
    pub fn accepts(&self, value: &FormValue) -> bool {
        matches!(
            (self, value),
            (ModalControl::TextField(_), FormValue::Text(_))
                | (ModalControl::Toggle(_), FormValue::Bool(_))
                | (ModalControl::Dropdown(_), FormValue::Index(_))
                | (ModalControl::Slider(_), FormValue::Number(_))
        )
    }

    /// Use a submitted value as the control's default
    fn prefill(&mut self, value: &FormValue) {
        match (self, value) {
            (ModalControl::TextField(field), FormValue::Text(text)) => {
                field.default_value = Some(text.clone());
            }
            (ModalControl::Toggle(field), FormValue::Bool(value)) => {
                field.default_value = Some(*value);
            }
            (ModalControl::Dropdown(field), FormValue::Index(index)) => {
                field.default_index = Some(*index);
            }
            (ModalControl::Slider(field), FormValue::Number(value)) => {
                field.default_value = Some(*value);
            }
            _ => {}
        }
    }

    /// Issue the builder call this control describes
    pub fn replay<B: ModalFormBackend>(&self, backend: &mut B) {
        match self {
            ModalControl::Title(text) => backend.title(text),
            ModalControl::TextField(field) => backend.text_field(
                &field.label,
                &field.placeholder,
                field.default_value.as_deref(),
            ),
            ModalControl::Toggle(field) => backend.toggle(&field.label, field.default_value),
            ModalControl::Dropdown(field) => {
                backend.dropdown(&field.label, &field.options, field.default_index)
            }
            ModalControl::Slider(field) => backend.slider(
                &field.label,
                field.min,
                field.max,
                field.step,
                field.default_value,
            ),
            ModalControl::SubmitButton(text) => backend.submit_button(text),
        }
    }
}

impl From<TextField> for ModalControl {
    fn from(field: TextField) -> Self {
        ModalControl::TextField(field)
    }
}

impl From<Toggle> for ModalControl {
    fn from(field: Toggle) -> Self {
        ModalControl::Toggle(field)
    }
}

impl From<Dropdown> for ModalControl {
    fn from(field: Dropdown) -> Self {
        ModalControl::Dropdown(field)
    }
}

impl From<Slider> for ModalControl {
    fn from(field: Slider) -> Self {
        ModalControl::Slider(field)
    }
}

/// Entry in a modal form's construction log
///
/// Holds the control exactly as the caller built it plus the error from the
/// latest failed submission. The displayed label is always derived from the
/// original one, so errors never pile up across attempts.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructionRecord {
    control: ModalControl,
    error: Option<String>,
}

impl ConstructionRecord {
    pub fn new(control: ModalControl) -> Self {
        Self {
            control,
            error: None,
        }
    }

    /// The control as originally added (defaults may be pre-filled)
    pub fn control(&self) -> &ModalControl {
        &self.control
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_input(&self) -> bool {
        self.control.is_input()
    }

    pub(crate) fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub(crate) fn prefill(&mut self, value: &FormValue) {
        self.control.prefill(value);
    }

    /// The control as the host should render it
    pub fn displayed(&self, separator: &str) -> ModalControl {
        let mut control = self.control.clone();
        if let Some(error) = &self.error {
            let label = control.label().with_error(separator, error);
            *control.label_mut() = label;
        }
        control
    }

    pub(crate) fn replay<B: ModalFormBackend>(&self, backend: &mut B, separator: &str) {
        self.displayed(separator).replay(backend);
    }
}
