//! Line-oriented terminal host
//!
//! Forms are printed as plain text and answered one line at a time. An empty
//! line on a selection form, `:q`, or end of input closes the form. In a modal
//! form an empty answer keeps the control's default and `:clear` empties a
//! text field.

use std::fmt::Write as _;

use formwright_forms::{
    ActionFormBackend, CancelationReason, Dropdown, FormError, FormResponse, FormValue,
    MessageFormBackend, ModalControl, ModalFormBackend, ModalFormResponse, RawText, Slider,
    TextField, Toggle,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;
use tracing::debug;

const QUIT: &str = ":q";
const CLEAR: &str = ":clear";

/// What the player typed
enum Line {
    Closed,
    Text(String),
}

/// The person at the terminal
pub struct TerminalPlayer {
    reader: Mutex<Box<dyn AsyncBufRead + Unpin>>,
    writer: Mutex<Box<dyn AsyncWrite + Unpin>>,
}

impl TerminalPlayer {
    pub fn new(
        reader: impl AsyncBufRead + Unpin + 'static,
        writer: impl AsyncWrite + Unpin + 'static,
    ) -> Self {
        Self {
            reader: Mutex::new(Box::new(reader)),
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Player on the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }

    async fn write(&self, text: &str) -> Result<(), FormError> {
        let mut writer = self.writer.lock().await;
        writer.write_all(text.as_bytes()).await.map_err(FormError::host)?;
        writer.flush().await.map_err(FormError::host)
    }

    async fn prompt(&self, prompt: &str) -> Result<Line, FormError> {
        self.write(prompt).await?;

        let mut line = String::new();
        let read = self
            .reader
            .lock()
            .await
            .read_line(&mut line)
            .await
            .map_err(FormError::host)?;

        let line = line.trim();
        if read == 0 || line == QUIT {
            debug!(target: "forms", "Player closed the form");
            return Ok(Line::Closed);
        }
        Ok(Line::Text(line.to_string()))
    }

    /// Ask for a 1-based choice among `count` options
    async fn choose(&self, count: usize) -> Result<FormResponse<usize>, FormError> {
        loop {
            match self.prompt("> ").await? {
                Line::Closed => return Ok(FormResponse::Canceled(CancelationReason::UserClosed)),
                Line::Text(text) if text.is_empty() => {
                    return Ok(FormResponse::Canceled(CancelationReason::UserClosed));
                }
                Line::Text(text) => match text.parse::<usize>() {
                    Ok(choice) if (1..=count).contains(&choice) => {
                        return Ok(FormResponse::Submitted(choice - 1));
                    }
                    _ => {
                        self.write(&format!("Enter a number from 1 to {}\n", count))
                            .await?
                    }
                },
            }
        }
    }

    /// Ask for one modal value, re-prompting until `parse` accepts the line
    async fn ask<T>(
        &self,
        prompt: &str,
        hint: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<Option<T>, FormError> {
        loop {
            match self.prompt(prompt).await? {
                Line::Closed => return Ok(None),
                Line::Text(text) => match parse(&text) {
                    Some(value) => return Ok(Some(value)),
                    None => self.write(&format!("{}\n", hint)).await?,
                },
            }
        }
    }
}

fn heading(out: &mut String, title: Option<&str>, body: Option<&str>) {
    out.push('\n');
    if let Some(title) = title {
        let _ = writeln!(out, "== {} ==", title);
    }
    if let Some(body) = body {
        let _ = writeln!(out, "{}", body);
    }
}

#[derive(Debug, Default)]
pub struct TerminalActionForm {
    title: Option<String>,
    body: Option<String>,
    buttons: Vec<String>,
}

impl ActionFormBackend for TerminalActionForm {
    type Player = TerminalPlayer;

    fn title(&mut self, text: &RawText) {
        self.title = Some(text.to_plain());
    }

    fn body(&mut self, text: &RawText) {
        self.body = Some(text.to_plain());
    }

    fn button(&mut self, text: &RawText, _icon: Option<&str>) {
        self.buttons.push(text.to_plain());
    }

    async fn show(&self, player: &Self::Player) -> Result<FormResponse<usize>, FormError> {
        let mut out = String::new();
        heading(&mut out, self.title.as_deref(), self.body.as_deref());
        for (index, button) in self.buttons.iter().enumerate() {
            let _ = writeln!(out, "  [{}] {}", index + 1, button);
        }
        player.write(&out).await?;
        player.choose(self.buttons.len()).await
    }
}

#[derive(Debug, Default)]
pub struct TerminalMessageForm {
    title: Option<String>,
    body: Option<String>,
    button1: String,
    button2: String,
}

impl MessageFormBackend for TerminalMessageForm {
    type Player = TerminalPlayer;

    fn title(&mut self, text: &RawText) {
        self.title = Some(text.to_plain());
    }

    fn body(&mut self, text: &RawText) {
        self.body = Some(text.to_plain());
    }

    fn button1(&mut self, text: &RawText) {
        self.button1 = text.to_plain();
    }

    fn button2(&mut self, text: &RawText) {
        self.button2 = text.to_plain();
    }

    async fn show(&self, player: &Self::Player) -> Result<FormResponse<usize>, FormError> {
        let mut out = String::new();
        heading(&mut out, self.title.as_deref(), self.body.as_deref());
        let _ = writeln!(out, "  [1] {}", self.button1);
        let _ = writeln!(out, "  [2] {}", self.button2);
        player.write(&out).await?;
        player.choose(2).await
    }
}

/// Modal form asked field by field
#[derive(Debug, Default)]
pub struct TerminalModalForm {
    controls: Vec<ModalControl>,
}

impl TerminalModalForm {
    async fn ask_text(
        player: &TerminalPlayer,
        field: &TextField,
    ) -> Result<Option<FormValue>, FormError> {
        let default = field.default_value.clone().unwrap_or_default();
        let prompt = format!(
            "{} ({}) [{}]: ",
            field.label.to_plain(),
            field.placeholder.to_plain(),
            default
        );
        let value = player
            .ask(&prompt, "", |line| {
                Some(match line {
                    "" => default.clone(),
                    CLEAR => String::new(),
                    _ => line.to_string(),
                })
            })
            .await?;
        Ok(value.map(FormValue::Text))
    }

    async fn ask_toggle(
        player: &TerminalPlayer,
        field: &Toggle,
    ) -> Result<Option<FormValue>, FormError> {
        let default = field.default_value.unwrap_or(false);
        let prompt = format!(
            "{} [{}]: ",
            field.label.to_plain(),
            if default { "Y/n" } else { "y/N" }
        );
        let value = player
            .ask(&prompt, "Answer y or n", |line| {
                match line.to_ascii_lowercase().as_str() {
                    "" => Some(default),
                    "y" | "yes" | "on" | "true" => Some(true),
                    "n" | "no" | "off" | "false" => Some(false),
                    _ => None,
                }
            })
            .await?;
        Ok(value.map(FormValue::Bool))
    }

    async fn ask_dropdown(
        player: &TerminalPlayer,
        field: &Dropdown,
    ) -> Result<Option<FormValue>, FormError> {
        let count = field.options.len();
        if count == 0 {
            return Err(FormError::host(format!(
                "dropdown \"{}\" has no options",
                field.label.to_plain()
            )));
        }
        let default = field
            .default_index
            .filter(|index| *index < count)
            .unwrap_or(0);

        let mut out = format!("{}\n", field.label.to_plain());
        for (index, option) in field.options.iter().enumerate() {
            let _ = writeln!(out, "  [{}] {}", index + 1, option.to_plain());
        }
        player.write(&out).await?;

        let prompt = format!("choice [{}]: ", default + 1);
        let hint = format!("Enter a number from 1 to {}", count);
        let value = player
            .ask(&prompt, &hint, |line| {
                if line.is_empty() {
                    return Some(default);
                }
                match line.parse::<usize>() {
                    Ok(choice) if (1..=count).contains(&choice) => Some(choice - 1),
                    _ => None,
                }
            })
            .await?;
        Ok(value.map(FormValue::Index))
    }

    async fn ask_slider(
        player: &TerminalPlayer,
        field: &Slider,
    ) -> Result<Option<FormValue>, FormError> {
        let default = field.default_value.unwrap_or(field.min);
        let prompt = format!(
            "{} ({} to {}, step {}) [{}]: ",
            field.label.to_plain(),
            field.min,
            field.max,
            field.step,
            default
        );
        let hint = format!("Enter a number from {} to {}", field.min, field.max);
        let value = player
            .ask(&prompt, &hint, |line| {
                if line.is_empty() {
                    return Some(default);
                }
                line.parse::<f64>()
                    .ok()
                    .filter(|number| (field.min..=field.max).contains(number))
            })
            .await?;
        Ok(value.map(FormValue::Number))
    }
}

impl ModalFormBackend for TerminalModalForm {
    type Player = TerminalPlayer;

    fn title(&mut self, text: &RawText) {
        self.controls.push(ModalControl::Title(text.clone()));
    }

    fn text_field(&mut self, label: &RawText, placeholder: &RawText, default_value: Option<&str>) {
        let mut field = TextField::new(label, placeholder);
        field.default_value = default_value.map(str::to_string);
        self.controls.push(field.into());
    }

    fn toggle(&mut self, label: &RawText, default_value: Option<bool>) {
        let mut field = Toggle::new(label);
        field.default_value = default_value;
        self.controls.push(field.into());
    }

    fn dropdown(&mut self, label: &RawText, options: &[RawText], default_index: Option<usize>) {
        let mut field = Dropdown::new(label, options.iter().cloned());
        field.default_index = default_index;
        self.controls.push(field.into());
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
        self.controls.push(field.into());
    }

    fn submit_button(&mut self, text: &RawText) {
        self.controls.push(ModalControl::SubmitButton(text.clone()));
    }

    async fn show(
        &self,
        player: &Self::Player,
    ) -> Result<FormResponse<ModalFormResponse>, FormError> {
        let mut values = Vec::new();
        let mut submit = None;

        for control in &self.controls {
            let value = match control {
                ModalControl::Title(text) => {
                    player.write(&format!("\n== {} ==\n", text.to_plain())).await?;
                    continue;
                }
                ModalControl::SubmitButton(text) => {
                    submit = Some(text.to_plain());
                    continue;
                }
                ModalControl::TextField(field) => Self::ask_text(player, field).await?,
                ModalControl::Toggle(field) => Self::ask_toggle(player, field).await?,
                ModalControl::Dropdown(field) => Self::ask_dropdown(player, field).await?,
                ModalControl::Slider(field) => Self::ask_slider(player, field).await?,
            };

            match value {
                Some(value) => values.push(value),
                None => return Ok(FormResponse::Canceled(CancelationReason::UserClosed)),
            }
        }

        player
            .write(&format!("[{}]\n", submit.as_deref().unwrap_or("Submit")))
            .await?;
        Ok(FormResponse::Submitted(ModalFormResponse::new(values)))
    }
}
