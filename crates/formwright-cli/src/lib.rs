//! Terminal host and demo session for formwright forms

pub mod demo;
pub mod logging;
pub mod terminal;

pub use demo::{Demo, DemoHost, Profile, Screen};
pub use terminal::{TerminalActionForm, TerminalMessageForm, TerminalModalForm, TerminalPlayer};

/// Form types backed by the terminal
pub struct TerminalHost;

impl DemoHost for TerminalHost {
    type Player = TerminalPlayer;
    type Action = TerminalActionForm;
    type Message = TerminalMessageForm;
    type Modal = TerminalModalForm;
}
