//! Capabilities the host form engine provides, one trait per form kind
//!
//! Builder methods mirror the host's own form data calls. `show` renders the
//! form to a player and resolves once the player responds or the form is
//! closed. Host failures (e.g. the player left) are reported as
//! [`FormError::Host`].

use std::future::Future;

use crate::error::FormError;
use crate::response::{FormResponse, ModalFormResponse};
use crate::text::RawText;

/// Form with a list of buttons; responds with the pressed button's index
pub trait ActionFormBackend {
    /// Handle identifying who the form is shown to
    type Player;

    fn title(&mut self, text: &RawText);

    fn body(&mut self, text: &RawText);

    fn button(&mut self, text: &RawText, icon: Option<&str>);

    fn show(
        &self,
        player: &Self::Player,
    ) -> impl Future<Output = Result<FormResponse<usize>, FormError>>;
}

/// Two-button dialog; `button1` reports selection 0, `button2` selection 1
pub trait MessageFormBackend {
    type Player;

    fn title(&mut self, text: &RawText);

    fn body(&mut self, text: &RawText);

    fn button1(&mut self, text: &RawText);

    fn button2(&mut self, text: &RawText);

    fn show(
        &self,
        player: &Self::Player,
    ) -> impl Future<Output = Result<FormResponse<usize>, FormError>>;
}

/// Form with input controls; responds with one value per input control
///
/// `Default` must produce an empty form: modal wrappers discard the current
/// form and replay their construction log into a fresh one when a
/// submission fails validation.
pub trait ModalFormBackend: Default {
    type Player;

    fn title(&mut self, text: &RawText);

    fn text_field(&mut self, label: &RawText, placeholder: &RawText, default_value: Option<&str>);

    fn toggle(&mut self, label: &RawText, default_value: Option<bool>);

    fn dropdown(&mut self, label: &RawText, options: &[RawText], default_index: Option<usize>);

    fn slider(
        &mut self,
        label: &RawText,
        min: f64,
        max: f64,
        step: f64,
        default_value: Option<f64>,
    );

    fn submit_button(&mut self, text: &RawText);

    fn show(
        &self,
        player: &Self::Player,
    ) -> impl Future<Output = Result<FormResponse<ModalFormResponse>, FormError>>;
}
