//! Network Module
//!
//! Talks to the rollup server.
//!
//! ## Architecture
//! - [`Rollup`] is the seam handlers and the dispatcher are written against
//! - [`RollupClient`] implements it over blocking HTTP
//! - Every call blocks until the server answers

mod client;

pub use client::RollupClient;

use crate::error::Result;
use crate::protocol::{Outcome, RequestEnvelope};

/// The three calls offered by the rollup server
pub trait Rollup {
    /// Report the previous outcome and wait for the next request
    ///
    /// Returns `None` when the server has no pending request.
    fn finish(&mut self, status: Outcome) -> Result<Option<RequestEnvelope>>;

    /// Emit a notice (state-changing event) carrying `text`
    fn notice(&mut self, text: &str) -> Result<()>;

    /// Emit a report (read-only result or diagnostic) carrying `text`
    fn report(&mut self, text: &str) -> Result<()>;
}

impl<R: Rollup + ?Sized> Rollup for &mut R {
    fn finish(&mut self, status: Outcome) -> Result<Option<RequestEnvelope>> {
        (**self).finish(status)
    }

    fn notice(&mut self, text: &str) -> Result<()> {
        (**self).notice(text)
    }

    fn report(&mut self, text: &str) -> Result<()> {
        (**self).report(text)
    }
}
