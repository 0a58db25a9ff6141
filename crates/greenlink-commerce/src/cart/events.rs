//! Events a cart store reports to the view layer.

use crate::cart::{Cart, LineKey};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Success,
    Error,
    Info,
}

impl Severity {
    /// Lowercase name, as used in CSS classes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A short user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }
}

/// Something the view layer may need to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// Lines, counts or totals changed; re-render.
    Changed,
    /// A unit of `key` was added; the line now holds `quantity`.
    ItemAdded { key: LineKey, quantity: u32 },
    /// A message to show the user.
    Notice(Notice),
    /// The persisted snapshot was unreadable and the cart started empty.
    SnapshotDiscarded { reason: String },
    /// Writing the snapshot failed; the in-memory cart is still current.
    PersistFailed { error: String },
}

/// Receives cart events synchronously, after the cart has been updated.
pub trait CartListener: Send {
    fn on_event(&mut self, event: &CartEvent, cart: &Cart);
}

impl<F> CartListener for F
where
    F: FnMut(&CartEvent, &Cart) + Send,
{
    fn on_event(&mut self, event: &CartEvent, cart: &Cart) {
        self(event, cart)
    }
}
