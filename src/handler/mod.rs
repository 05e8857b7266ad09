//! Handler Module
//!
//! Application rules for each request kind.
//!
//! ## Responsibilities
//! - advance_state: validate a sentence, record its sender, emit a notice
//! - inspect_state: answer `list` / `total` queries with a report
//!
//! Handlers borrow State for one request only and never see each other's
//! in-progress work.

mod advance;
mod inspect;

pub use advance::{handle_advance, is_numeric, validate_sentence, NOT_HEX_DIAGNOSTIC};
pub use inspect::{handle_inspect, Route, ROUTE_NOT_IMPLEMENTED};

use crate::error::Result;
use crate::network::Rollup;
use crate::protocol::{Outcome, RequestEnvelope};
use crate::state::State;

/// Route a request to its handler
pub fn handle<R: Rollup + ?Sized>(
    state: &mut State,
    rollup: &mut R,
    request: &RequestEnvelope,
) -> Result<Outcome> {
    match request {
        RequestEnvelope::Advance(data) => handle_advance(state, rollup, data),
        RequestEnvelope::Inspect(data) => handle_inspect(state, rollup, data),
    }
}
