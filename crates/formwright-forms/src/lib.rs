//! Callback-driven wrappers for host-rendered forms
//!
//! The host engine renders action, message and modal forms and reports back a
//! selection, a list of submitted values or a cancellation. This crate layers
//! per-control callbacks on top of that, re-displays modal forms whose fields
//! fail validation, and keeps a per-session back navigation stack.
//!
//! Hosts implement the traits in [`host`]; scripts build forms through
//! [`ActionForm`], [`MessageForm`] and [`ModalForm`].

pub mod config;
pub mod error;
pub mod events;
pub mod host;
pub mod modal;
pub mod navigation;
pub mod response;
pub mod selection;
mod session;
pub mod text;
pub mod validation;

pub use config::{CancelPolicy, ConfigLoadError, FormsConfig, ProjectPaths};
pub use error::FormError;
pub use events::{FormEvent, FormKind};
pub use host::{ActionFormBackend, MessageFormBackend, ModalFormBackend};
pub use modal::{
    ConstructionRecord, Dropdown, ModalControl, ModalForm, Slider, TextField, Toggle,
};
pub use navigation::{EntryId, NavigationContext, NavigationStack};
pub use response::{CancelationReason, FormOutcome, FormResponse, FormValue, ModalFormResponse};
pub use selection::{ActionForm, MessageForm};
pub use text::RawText;
pub use validation::{ControlCallback, ValidationOutcome};
