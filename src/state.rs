//! State Module
//!
//! Accumulated application state, kept in memory for the life of the
//! process.
//!
//! ## Invariant
//! `count() == submitters().len()`. The only mutator,
//! [`State::record_submission`], appends and increments in one call.

/// Accumulated application state
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct State {
    /// Senders of accepted advance requests, in submission order
    submitters: Vec<String>,

    /// Number of accepted advance requests
    count: u64,
}

impl State {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one accepted submission from `sender`
    pub fn record_submission(&mut self, sender: impl Into<String>) {
        self.submitters.push(sender.into());
        self.count += 1;
    }

    /// Senders in submission order
    pub fn submitters(&self) -> &[String] {
        &self.submitters
    }

    /// Number of accepted submissions
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.submitters.is_empty()
    }
}
