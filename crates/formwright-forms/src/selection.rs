//! Action and message forms with one callback per button

use tracing::{debug, warn};

use crate::error::FormError;
use crate::events::{FormEvent, FormKind};
use crate::host::{ActionFormBackend, MessageFormBackend};
use crate::navigation::{EntryId, NavigationContext};
use crate::response::{FormOutcome, FormResponse};
use crate::session::FormSession;
use crate::text::RawText;

/// Callback run when its button is pressed
pub type SelectionCallback = Box<dyn FnMut()>;

fn noop() -> SelectionCallback {
    Box::new(|| {})
}

/// Run the callback for `index` and report the outcome
fn dispatch(
    session: &FormSession,
    callbacks: &mut [SelectionCallback],
    response: FormResponse<usize>,
) -> Result<FormOutcome, FormError> {
    let index = match response {
        FormResponse::Canceled(reason) => {
            session.canceled(reason);
            return Ok(FormOutcome::Canceled(reason));
        }
        FormResponse::Submitted(index) => index,
    };

    let options = callbacks.len();
    let Some(callback) = callbacks.get_mut(index) else {
        warn!(target: "forms", "Host selected option {} but form {} has {} options", index, session.entry(), options);
        return Err(FormError::SelectionOutOfRange { index, options });
    };

    debug!(target: "forms", "Form {} option {} selected", session.entry(), index);
    callback();
    session.emit(FormEvent::OptionSelected {
        form: session.entry(),
        index,
    });
    Ok(FormOutcome::Selected(index))
}

/// Form with any number of buttons
///
/// ```rust,ignore
/// let mut menu = ActionForm::new(HostActionForm::default(), &nav, reopen_menu)
///     .title("Main menu")
///     .button("Teleport", || teleport_home())
///     .passive_button("Close");
/// menu.show(&player).await?;
/// ```
pub struct ActionForm<B: ActionFormBackend> {
    backend: B,
    callbacks: Vec<SelectionCallback>,
    session: FormSession,
}

impl<B: ActionFormBackend> ActionForm<B> {
    /// Wrap `backend`, pushing `on_back` onto the navigation stack
    pub fn new(
        backend: B,
        navigation: &NavigationContext,
        on_back: impl FnMut() + 'static,
    ) -> Self {
        Self {
            backend,
            callbacks: Vec::new(),
            session: FormSession::open(navigation, FormKind::Action, on_back),
        }
    }

    pub fn title(mut self, text: impl Into<RawText>) -> Self {
        self.backend.title(&text.into());
        self
    }

    pub fn body(mut self, text: impl Into<RawText>) -> Self {
        self.backend.body(&text.into());
        self
    }

    pub fn button(self, text: impl Into<RawText>, on_select: impl FnMut() + 'static) -> Self {
        self.add_button(text.into(), None, Box::new(on_select))
    }

    pub fn icon_button(
        self,
        text: impl Into<RawText>,
        icon: &str,
        on_select: impl FnMut() + 'static,
    ) -> Self {
        self.add_button(text.into(), Some(icon), Box::new(on_select))
    }

    /// Button that does nothing when pressed
    pub fn passive_button(self, text: impl Into<RawText>) -> Self {
        self.add_button(text.into(), None, noop())
    }

    fn add_button(
        mut self,
        text: RawText,
        icon: Option<&str>,
        callback: SelectionCallback,
    ) -> Self {
        self.backend.button(&text, icon);
        self.callbacks.push(callback);
        self
    }

    pub fn button_count(&self) -> usize {
        self.callbacks.len()
    }

    /// Navigation entry pushed for this form
    pub fn entry_id(&self) -> EntryId {
        self.session.entry()
    }

    pub fn navigation(&self) -> &NavigationContext {
        self.session.navigation()
    }

    /// Show the form and run the pressed button's callback
    pub async fn show(&mut self, player: &B::Player) -> Result<FormOutcome, FormError> {
        self.session.shown(1);
        let result = match self.backend.show(player).await {
            Ok(response) => dispatch(&self.session, &mut self.callbacks, response),
            Err(err) => Err(err),
        };
        result.inspect_err(|err| self.session.failed(err))
    }
}

/// Two-button dialog
///
/// `button1` always maps to selection 0 and `button2` to selection 1,
/// whichever is configured first. Unconfigured buttons do nothing.
pub struct MessageForm<B: MessageFormBackend> {
    backend: B,
    callbacks: [SelectionCallback; 2],
    session: FormSession,
}

impl<B: MessageFormBackend> MessageForm<B> {
    pub fn new(
        backend: B,
        navigation: &NavigationContext,
        on_back: impl FnMut() + 'static,
    ) -> Self {
        Self {
            backend,
            callbacks: [noop(), noop()],
            session: FormSession::open(navigation, FormKind::Message, on_back),
        }
    }

    pub fn title(mut self, text: impl Into<RawText>) -> Self {
        self.backend.title(&text.into());
        self
    }

    pub fn body(mut self, text: impl Into<RawText>) -> Self {
        self.backend.body(&text.into());
        self
    }

    pub fn button1(mut self, text: impl Into<RawText>, on_select: impl FnMut() + 'static) -> Self {
        self.backend.button1(&text.into());
        self.callbacks[0] = Box::new(on_select);
        self
    }

    pub fn button2(mut self, text: impl Into<RawText>, on_select: impl FnMut() + 'static) -> Self {
        self.backend.button2(&text.into());
        self.callbacks[1] = Box::new(on_select);
        self
    }

    pub fn entry_id(&self) -> EntryId {
        self.session.entry()
    }

    pub fn navigation(&self) -> &NavigationContext {
        self.session.navigation()
    }

    pub async fn show(&mut self, player: &B::Player) -> Result<FormOutcome, FormError> {
        self.session.shown(1);
        let result = match self.backend.show(player).await {
            Ok(response) => dispatch(&self.session, &mut self.callbacks, response),
            Err(err) => Err(err),
        };
        result.inspect_err(|err| self.session.failed(err))
    }
}
