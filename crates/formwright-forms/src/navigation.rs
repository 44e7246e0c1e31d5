//! Back navigation between forms
//!
//! Every form wrapper pushes a "show me again" action when it is created. Going
//! back discards the current form's own entry and runs the one beneath it.
//! Each session (typically one per player) owns its own [`NavigationContext`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::config::FormsConfig;
use crate::events::{EventSink, FormEvent};

/// Identifies one entry on a navigation stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    #[cfg(test)]
    pub(crate) fn from_raw(raw: u64) -> Self {
        EntryId(raw)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Zero-argument action that re-displays a form
pub type NavigationAction = Box<dyn FnMut()>;

struct NavigationEntry {
    id: EntryId,
    action: NavigationAction,
}

/// Ordered stack of re-display actions
#[derive(Default)]
pub struct NavigationStack {
    entries: Vec<NavigationEntry>,
    next_id: u64,
}

impl NavigationStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, returning its id
    pub fn push(&mut self, action: impl FnMut() + 'static) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(NavigationEntry {
            id,
            action: Box::new(action),
        });
        id
    }

    /// Remove and discard the last entry
    pub fn pop_last(&mut self) -> Option<EntryId> {
        self.entries.pop().map(|entry| entry.id)
    }

    /// Remove a specific entry wherever it sits
    pub fn remove(&mut self, id: EntryId) -> bool {
        match self.entries.iter().position(|entry| entry.id == id) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Id of the last entry
    pub fn top(&self) -> Option<EntryId> {
        self.entries.last().map(|entry| entry.id)
    }

    /// Entry ids from bottom to top
    pub fn ids(&self) -> Vec<EntryId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    /// Drop the current entry and take the one beneath it.
    ///
    /// The current entry is removed even when nothing lies beneath it.
    fn take_previous(&mut self) -> Option<NavigationEntry> {
        self.entries.pop()?;
        self.entries.pop()
    }
}

impl fmt::Debug for NavigationStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationStack")
            .field("entries", &self.ids())
            .field("next_id", &self.next_id)
            .finish()
    }
}

/// Shared handle to one session's navigation stack, config and event sink
///
/// Cloning is cheap and every clone refers to the same stack. Single-threaded:
/// the host resumes form continuations on its own event loop.
#[derive(Clone, Default)]
pub struct NavigationContext {
    stack: Rc<RefCell<NavigationStack>>,
    config: Rc<FormsConfig>,
    events: EventSink,
}

impl NavigationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FormsConfig) -> Self {
        Self {
            config: Rc::new(config),
            ..Self::default()
        }
    }

    /// Send [`FormEvent`]s from every form built on this context
    pub fn with_events(mut self, tx: UnboundedSender<FormEvent>) -> Self {
        self.events = EventSink::new(tx);
        self
    }

    pub fn config(&self) -> &FormsConfig {
        &self.config
    }

    pub(crate) fn events(&self) -> &EventSink {
        &self.events
    }

    pub fn push(&self, action: impl FnMut() + 'static) -> EntryId {
        let id = self.stack.borrow_mut().push(action);
        debug!(target: "navigation", "Pushed entry {}", id);
        id
    }

    pub fn pop_last(&self) -> Option<EntryId> {
        let popped = self.stack.borrow_mut().pop_last();
        if let Some(id) = popped {
            debug!(target: "navigation", "Popped entry {}", id);
        }
        popped
    }

    pub fn remove(&self, id: EntryId) -> bool {
        self.stack.borrow_mut().remove(id)
    }

    /// Go back to the previous form
    ///
    /// Removes the current form's entry, then removes and runs the entry
    /// beneath it. At the root (zero or one entries) this only empties the
    /// stack and returns `false`.
    pub fn navigate_back(&self) -> bool {
        // Release the borrow before running the action: it usually builds a
        // form, which pushes onto this same stack.
        let previous = self.stack.borrow_mut().take_previous();
        match previous {
            Some(mut entry) => {
                debug!(target: "navigation", "Navigating back to entry {}", entry.id);
                (entry.action)();
                true
            }
            None => {
                debug!(target: "navigation", "Already at root, nothing to go back to");
                false
            }
        }
    }

    pub fn clear(&self) {
        self.stack.borrow_mut().clear();
        debug!(target: "navigation", "Cleared navigation stack");
    }

    pub fn len(&self) -> usize {
        self.stack.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.borrow().is_empty()
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.stack.borrow().contains(id)
    }

    pub fn top(&self) -> Option<EntryId> {
        self.stack.borrow().top()
    }

    pub fn ids(&self) -> Vec<EntryId> {
        self.stack.borrow().ids()
    }
}

impl fmt::Debug for NavigationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationContext")
            .field("stack", &self.stack.borrow())
            .field("config", &self.config)
            .finish()
    }
}
