//! Scripted in-memory host for driving forms in tests
//!
//! The player handle carries the queue of responses the "user" will give and
//! a log of every form the host was asked to display.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use formwright_forms::{
    ActionFormBackend, CancelationReason, Dropdown, FormError, FormResponse, FormValue,
    MessageFormBackend, ModalControl, ModalFormBackend, ModalFormResponse, RawText, Slider,
    TextField, Toggle,
};

/// What the scripted player does with the next form
#[derive(Debug, Clone)]
pub enum Reply {
    Select(usize),
    Submit(Vec<FormValue>),
    Cancel(CancelationReason),
    Fail(String),
}

/// Snapshot of a form as the host received it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShownForm {
    pub title: Option<String>,
    pub body: Option<String>,
    pub buttons: Vec<String>,
    pub controls: Vec<ModalControl>,
}

impl ShownForm {
    /// Plain-text labels of the input controls, in order
    pub fn input_labels(&self) -> Vec<String> {
        self.controls
            .iter()
            .filter(|control| control.is_input())
            .map(|control| control.label().to_plain())
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct MockPlayer {
    replies: RefCell<VecDeque<Reply>>,
    shown: RefCell<Vec<ShownForm>>,
}

impl MockPlayer {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: RefCell::new(replies.into_iter().collect()),
            shown: RefCell::new(Vec::new()),
        }
    }

    pub fn shown(&self) -> Vec<ShownForm> {
        self.shown.borrow().clone()
    }

    pub fn shown_count(&self) -> usize {
        self.shown.borrow().len()
    }

    fn next_reply(&self, form: ShownForm) -> Reply {
        self.shown.borrow_mut().push(form);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or(Reply::Cancel(CancelationReason::UserClosed))
    }

    fn select(&self, form: ShownForm) -> Result<FormResponse<usize>, FormError> {
        match self.next_reply(form) {
            Reply::Select(index) => Ok(FormResponse::Submitted(index)),
            Reply::Cancel(reason) => Ok(FormResponse::Canceled(reason)),
            Reply::Fail(message) => Err(FormError::Host(message)),
            Reply::Submit(_) => panic!("scripted a modal submission for a selection form"),
        }
    }

    fn submit(&self, form: ShownForm) -> Result<FormResponse<ModalFormResponse>, FormError> {
        match self.next_reply(form) {
            Reply::Submit(values) => Ok(FormResponse::Submitted(ModalFormResponse::new(values))),
            Reply::Cancel(reason) => Ok(FormResponse::Canceled(reason)),
            Reply::Fail(message) => Err(FormError::Host(message)),
            Reply::Select(_) => panic!("scripted a selection for a modal form"),
        }
    }
}

#[derive(Debug, Default)]
pub struct MockActionForm {
    form: ShownForm,
}

impl ActionFormBackend for MockActionForm {
    type Player = MockPlayer;

    fn title(&mut self, text: &RawText) {
        self.form.title = Some(text.to_plain());
    }

    fn body(&mut self, text: &RawText) {
        self.form.body = Some(text.to_plain());
    }

    fn button(&mut self, text: &RawText, _icon: Option<&str>) {
        self.form.buttons.push(text.to_plain());
    }

    async fn show(&self, player: &Self::Player) -> Result<FormResponse<usize>, FormError> {
        player.select(self.form.clone())
    }
}

#[derive(Debug, Default)]
pub struct MockMessageForm {
    form: ShownForm,
}

impl MessageFormBackend for MockMessageForm {
    type Player = MockPlayer;

    fn title(&mut self, text: &RawText) {
        self.form.title = Some(text.to_plain());
    }

    fn body(&mut self, text: &RawText) {
        self.form.body = Some(text.to_plain());
    }

    fn button1(&mut self, text: &RawText) {
        self.form.buttons.push(format!("1:{}", text.to_plain()));
    }

    fn button2(&mut self, text: &RawText) {
        self.form.buttons.push(format!("2:{}", text.to_plain()));
    }

    async fn show(&self, player: &Self::Player) -> Result<FormResponse<usize>, FormError> {
        player.select(self.form.clone())
    }
}

#[derive(Debug, Default)]
pub struct MockModalForm {
    form: ShownForm,
}

impl ModalFormBackend for MockModalForm {
    type Player = MockPlayer;

    fn title(&mut self, text: &RawText) {
        self.form.title = Some(text.to_plain());
        self.form.controls.push(ModalControl::Title(text.clone()));
    }

    fn text_field(&mut self, label: &RawText, placeholder: &RawText, default_value: Option<&str>) {
        let mut field = TextField::new(label, placeholder);
        field.default_value = default_value.map(str::to_string);
        self.form.controls.push(field.into());
    }

    fn toggle(&mut self, label: &RawText, default_value: Option<bool>) {
        let mut field = Toggle::new(label);
        field.default_value = default_value;
        self.form.controls.push(field.into());
    }

    fn dropdown(&mut self, label: &RawText, options: &[RawText], default_index: Option<usize>) {
        let mut field = Dropdown::new(label, options.iter().cloned());
        field.default_index = default_index;
        self.form.controls.push(field.into());
    }

    fn slider(
        &mut self,
        label: &RawText,
        min: f64,
        max: f64,
        step: f64,
        default_value: Option<f64>,
    ) {
        let mut field = Slider::new(label, min, max).step(step);
        field.default_value = default_value;
        self.form.controls.push(field.into());
    }

    fn submit_button(&mut self, text: &RawText) {
        self.form.buttons.push(text.to_plain());
        self.form.controls.push(ModalControl::SubmitButton(text.clone()));
    }

    async fn show(
        &self,
        player: &Self::Player,
    ) -> Result<FormResponse<ModalFormResponse>, FormError> {
        player.submit(self.form.clone())
    }
}
