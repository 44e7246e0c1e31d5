//! Modal forms with per-field validation
//!
//! Every builder call is appended to a construction log as well as forwarded
//! to the host form. When a submission fails validation the host form is
//! thrown away, the log is replayed into a fresh one with the error text
//! appended to the failing labels, and the form is shown again. This repeats
//! until a submission passes or the player closes the form.

mod record;

pub use record::{ConstructionRecord, Dropdown, ModalControl, Slider, TextField, Toggle};

use tracing::{debug, info, warn};

use crate::error::FormError;
use crate::events::{FormEvent, FormKind};
use crate::host::ModalFormBackend;
use crate::navigation::{EntryId, NavigationContext};
use crate::response::{FormOutcome, FormResponse, FormValue, ModalFormResponse};
use crate::session::FormSession;
use crate::text::RawText;
use crate::validation::{ControlCallback, ValidationOutcome, always_correct};

/// Callback run with the full response once every field validates
pub type SubmitCallback = Box<dyn FnMut(ModalFormResponse)>;

fn noop_submit() -> SubmitCallback {
    Box::new(|_| {})
}

/// Modal form wrapper
///
/// ```rust,ignore
/// let mut form = ModalForm::<HostModalForm>::new(&nav, reopen_profile)
///     .title("Profile")
///     .text_field(TextField::new("Age", "e.g. 21"), |age| {
///         if age.is_empty() {
///             ValidationOutcome::error("must not be empty")
///         } else {
///             ValidationOutcome::Correct
///         }
///     })
///     .submit_button("Save", |response| save(response.form_values));
/// form.show(&player).await?;
/// ```
pub struct ModalForm<B: ModalFormBackend> {
    backend: B,
    records: Vec<ConstructionRecord>,
    validators: Vec<ControlCallback>,
    on_submit: SubmitCallback,
    session: FormSession,
}

impl<B: ModalFormBackend> ModalForm<B> {
    /// Start an empty form, pushing `on_back` onto the navigation stack
    pub fn new(navigation: &NavigationContext, on_back: impl FnMut() + 'static) -> Self {
        Self {
            backend: B::default(),
            records: Vec::new(),
            validators: Vec::new(),
            on_submit: noop_submit(),
            session: FormSession::open(navigation, FormKind::Modal, on_back),
        }
    }

    pub fn title(mut self, text: impl Into<RawText>) -> Self {
        self.add(ModalControl::Title(text.into()));
        self
    }

    pub fn text_field(
        self,
        field: TextField,
        mut validate: impl FnMut(&str) -> ValidationOutcome + 'static,
    ) -> Self {
        self.add_input(
            field.into(),
            Box::new(move |value| match value {
                FormValue::Text(text) => validate(text),
                _ => ValidationOutcome::Correct,
            }),
        )
    }

    pub fn toggle(
        self,
        field: Toggle,
        mut validate: impl FnMut(bool) -> ValidationOutcome + 'static,
    ) -> Self {
        self.add_input(
            field.into(),
            Box::new(move |value| match value {
                FormValue::Bool(on) => validate(*on),
                _ => ValidationOutcome::Correct,
            }),
        )
    }

    pub fn dropdown(
        self,
        field: Dropdown,
        mut validate: impl FnMut(usize) -> ValidationOutcome + 'static,
    ) -> Self {
        self.add_input(
            field.into(),
            Box::new(move |value| match value {
                FormValue::Index(index) => validate(*index),
                _ => ValidationOutcome::Correct,
            }),
        )
    }

    pub fn slider(
        self,
        field: Slider,
        mut validate: impl FnMut(f64) -> ValidationOutcome + 'static,
    ) -> Self {
        self.add_input(
            field.into(),
            Box::new(move |value| match value {
                FormValue::Number(number) => validate(*number),
                _ => ValidationOutcome::Correct,
            }),
        )
    }

    /// Add a control without a callback
    ///
    /// Inputs always validate; a submit button resets the submit callback to
    /// a no-op.
    pub fn control(mut self, control: impl Into<ModalControl>) -> Self {
        let control = control.into();
        if control.is_input() {
            return self.add_input(control, always_correct());
        }
        if let ModalControl::SubmitButton(_) = control {
            self.on_submit = noop_submit();
        }
        self.add(control);
        self
    }

    /// Set the submit button label and the callback run on a valid submission
    pub fn submit_button(
        mut self,
        text: impl Into<RawText>,
        on_submit: impl FnMut(ModalFormResponse) + 'static,
    ) -> Self {
        self.add(ModalControl::SubmitButton(text.into()));
        self.on_submit = Box::new(on_submit);
        self
    }

    fn add_input(mut self, control: ModalControl, validator: ControlCallback) -> Self {
        self.add(control);
        self.validators.push(validator);
        self
    }

    fn add(&mut self, control: ModalControl) {
        self.replay(ConstructionRecord::new(control));
    }

    /// Forward a record to the host form and append it to the log
    fn replay(&mut self, record: ConstructionRecord) {
        let separator = &self.session.navigation().config().error_separator;
        record.replay(&mut self.backend, separator);
        self.records.push(record);
    }

    /// Construction log, in addition order
    pub fn records(&self) -> &[ConstructionRecord] {
        &self.records
    }

    pub fn input_count(&self) -> usize {
        self.validators.len()
    }

    pub fn entry_id(&self) -> EntryId {
        self.session.entry()
    }

    pub fn navigation(&self) -> &NavigationContext {
        self.session.navigation()
    }

    /// Show the form until a submission validates or the player closes it
    ///
    /// Every attempt runs every validator. A valid submission runs the submit
    /// callback once with the full response.
    pub async fn show(&mut self, player: &B::Player) -> Result<FormOutcome, FormError> {
        let result = self.show_until_valid(player).await;
        result.inspect_err(|err| self.session.failed(err))
    }

    async fn show_until_valid(&mut self, player: &B::Player) -> Result<FormOutcome, FormError> {
        let mut attempt = 1;
        loop {
            self.session.shown(attempt);

            let response = match self.backend.show(player).await? {
                FormResponse::Canceled(reason) => {
                    self.session.canceled(reason);
                    return Ok(FormOutcome::Canceled(reason));
                }
                FormResponse::Submitted(response) => response,
            };

            let outcomes = self.validate(&response.form_values)?;
            let failed: Vec<usize> = outcomes
                .iter()
                .enumerate()
                .filter(|(_, outcome)| outcome.is_error())
                .map(|(index, _)| index)
                .collect();

            if failed.is_empty() {
                info!(target: "forms", "Form {} submitted after {} attempt(s)", self.entry_id(), attempt);
                self.clear_errors(&response.form_values);
                (self.on_submit)(response);
                self.session.emit(FormEvent::Submitted {
                    form: self.entry_id(),
                    attempts: attempt,
                });
                return Ok(FormOutcome::Submitted { attempts: attempt });
            }

            debug!(target: "forms", "Form {} attempt {} failed validation for inputs {:?}", self.entry_id(), attempt, failed);
            self.session.emit(FormEvent::ValidationFailed {
                form: self.entry_id(),
                attempt,
                failed,
            });

            self.mark_errors(outcomes, &response.form_values);
            self.rebuild();
            attempt += 1;
        }
    }

    /// Run every validator against its value
    fn validate(&mut self, values: &[FormValue]) -> Result<Vec<ValidationOutcome>, FormError> {
        let expected = self.validators.len();
        if values.len() != expected {
            warn!(target: "forms", "Form {} expected {} values, host returned {}", self.entry_id(), expected, values.len());
            return Err(FormError::ValueCountMismatch {
                expected,
                actual: values.len(),
            });
        }

        let inputs = self.records.iter().filter(|record| record.is_input());
        for (index, (record, value)) in inputs.zip(values).enumerate() {
            if !record.control().accepts(value) {
                warn!(target: "forms", "Form {} value {} is {:?}, not a {} value", self.entry_id(), index, value, record.control().kind_name());
                return Err(FormError::ValueTypeMismatch {
                    index,
                    expected: record.control().kind_name(),
                });
            }
        }

        Ok(self
            .validators
            .iter_mut()
            .zip(values)
            .map(|(validate, value)| validate(value))
            .collect())
    }

    /// Record this attempt's errors (clearing earlier ones) on the input records
    fn mark_errors(&mut self, outcomes: Vec<ValidationOutcome>, values: &[FormValue]) {
        let preserve_values = self.session.navigation().config().preserve_values;
        let inputs = self.records.iter_mut().filter(|record| record.is_input());

        for ((record, outcome), value) in inputs.zip(outcomes).zip(values) {
            record.set_error(match outcome {
                ValidationOutcome::Correct => None,
                ValidationOutcome::Error(message) => Some(message),
            });
            if preserve_values {
                record.prefill(value);
            }
        }
    }

    /// Drop errors left by earlier attempts so the next show starts clean
    fn clear_errors(&mut self, values: &[FormValue]) {
        if self.records.iter().all(|record| record.error().is_none()) {
            return;
        }

        let preserve_values = self.session.navigation().config().preserve_values;
        let inputs = self.records.iter_mut().filter(|record| record.is_input());
        for (record, value) in inputs.zip(values) {
            record.set_error(None);
            if preserve_values {
                record.prefill(value);
            }
        }
        self.rebuild();
    }

    /// Replace the host form with a fresh one built from the construction log
    fn rebuild(&mut self) {
        debug!(target: "forms", "Rebuilding form {} from {} records", self.entry_id(), self.records.len());
        self.backend = B::default();
        let records = std::mem::take(&mut self.records);
        for record in records {
            self.replay(record);
        }
    }
}
