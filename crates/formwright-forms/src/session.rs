use tracing::{debug, warn};

use crate::config::CancelPolicy;
use crate::error::FormError;
use crate::events::{FormEvent, FormKind};
use crate::navigation::{EntryId, NavigationContext};
use crate::response::CancelationReason;

/// A form's claim on its navigation context
///
/// Created with the wrapper, before any control is added, so the re-display
/// action is on the stack before the form can be shown. Applies the
/// configured [`CancelPolicy`] when the host cancels the form or showing it
/// fails.
pub(crate) struct FormSession {
    navigation: NavigationContext,
    entry: EntryId,
    kind: FormKind,
}

impl FormSession {
    pub(crate) fn open(
        navigation: &NavigationContext,
        kind: FormKind,
        on_back: impl FnMut() + 'static,
    ) -> Self {
        let entry = navigation.push(on_back);
        Self {
            navigation: navigation.clone(),
            entry,
            kind,
        }
    }

    pub(crate) fn entry(&self) -> EntryId {
        self.entry
    }

    pub(crate) fn navigation(&self) -> &NavigationContext {
        &self.navigation
    }

    pub(crate) fn emit(&self, event: FormEvent) {
        self.navigation.events().emit(event);
    }

    pub(crate) fn shown(&self, attempt: u32) {
        self.emit(FormEvent::Shown {
            form: self.entry,
            kind: self.kind,
            attempt,
        });
    }

    pub(crate) fn canceled(&self, reason: CancelationReason) {
        debug!(target: "forms", "{:?} form {} canceled: {}", self.kind, self.entry, reason);
        self.release();
        self.emit(FormEvent::Canceled {
            form: self.entry,
            reason,
        });
    }

    /// Release the form's entry after `show` returned an error
    pub(crate) fn failed(&self, error: &FormError) {
        warn!(target: "forms", "{:?} form {} failed: {}", self.kind, self.entry, error);
        self.release();
    }

    fn release(&self) {
        match self.navigation.config().on_cancel {
            CancelPolicy::Keep => {}
            CancelPolicy::PopOwn => {
                self.navigation.remove(self.entry);
            }
            CancelPolicy::ClearAll => self.navigation.clear(),
        }
    }
}
