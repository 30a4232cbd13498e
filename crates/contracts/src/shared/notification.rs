//! Toast notifications shared between the submission flow and the UI.
//!
//! The flow only knows the [`Notifier`] trait; the frontend provides the
//! concrete toast surface.

use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Maximum number of toasts visible at the same time
pub const TOAST_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastVariant {
    /// Neutral informational message
    #[default]
    Default,
    /// Error styling
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub variant: ToastVariant,
}

impl Toast {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

/// Sink for user-facing feedback
pub trait Notifier {
    fn notify(&self, toast: Toast);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, toast: Toast) {
        (**self).notify(toast)
    }
}

impl<N: Notifier + ?Sized> Notifier for Rc<N> {
    fn notify(&self, toast: Toast) {
        (**self).notify(toast)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastEntry {
    pub id: u64,
    pub toast: Toast,
}

/// Ordered list of visible toasts, oldest first.
///
/// Pushing beyond the limit drops the oldest entries.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    entries: Vec<ToastEntry>,
    next_id: u64,
    limit: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(TOAST_LIMIT)
    }
}

impl ToastQueue {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            limit: limit.max(1),
        }
    }

    /// Adds a toast and returns its id
    pub fn push(&mut self, toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(ToastEntry { id, toast });
        if self.entries.len() > self.limit {
            let overflow = self.entries.len() - self.limit;
            self.entries.drain(..overflow);
        }
        id
    }

    /// Removes the toast with the given id. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
