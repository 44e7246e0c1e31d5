use tokio::sync::mpsc::UnboundedSender;

use crate::navigation::EntryId;
use crate::response::CancelationReason;

/// Kind of form a [`FormEvent`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Action,
    Message,
    Modal,
}

/// Lifecycle events emitted by form wrappers
///
/// `form` is the navigation entry the wrapper pushed when it was created, so
/// observers can correlate events from the same form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// Handed to the host for display. `attempt` counts modal redisplays from 1.
    Shown {
        form: EntryId,
        kind: FormKind,
        attempt: u32,
    },
    OptionSelected {
        form: EntryId,
        index: usize,
    },
    /// A modal submission was rejected; `failed` lists input positions
    ValidationFailed {
        form: EntryId,
        attempt: u32,
        failed: Vec<usize>,
    },
    Submitted {
        form: EntryId,
        attempts: u32,
    },
    Canceled {
        form: EntryId,
        reason: CancelationReason,
    },
}

/// Optional sender for [`FormEvent`]s
#[derive(Debug, Clone, Default)]
pub(crate) struct EventSink {
    tx: Option<UnboundedSender<FormEvent>>,
}

impl EventSink {
    pub(crate) fn new(tx: UnboundedSender<FormEvent>) -> Self {
        Self { tx: Some(tx) }
    }

    pub(crate) fn emit(&self, event: FormEvent) {
        if let Some(tx) = &self.tx {
            // Observers are optional; a dropped receiver is not an error
            let _ = tx.send(event);
        }
    }
}
