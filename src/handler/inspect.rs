//! Inspect Handler
//!
//! Read-only queries against State.

use crate::error::{DappError, Result};
use crate::network::Rollup;
use crate::protocol::{codec, InspectRequestData, Outcome};
use crate::state::State;

/// Reported for any route other than `list` or `total`
pub const ROUTE_NOT_IMPLEMENTED: &str = "route not implemented";

/// Inspect routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Submitters in submission order
    List,

    /// Number of accepted submissions
    Total,

    Unknown(String),
}

impl Route {
    pub fn parse(name: &str) -> Self {
        match name {
            "list" => Route::List,
            "total" => Route::Total,
            other => Route::Unknown(other.to_string()),
        }
    }

    /// Render the answer for this route
    pub fn answer(&self, state: &State) -> Result<String> {
        match self {
            Route::List => serde_json::to_string(state.submitters())
                .map_err(|e| DappError::Serialization(e.to_string())),
            Route::Total => Ok(state.count().to_string()),
            Route::Unknown(_) => Ok(ROUTE_NOT_IMPLEMENTED.to_string()),
        }
    }
}

/// Handle an inspect request
///
/// Emits exactly one report. An undecodable route is returned as the
/// decode error without reporting.
pub fn handle_inspect<R: Rollup + ?Sized>(
    state: &State,
    rollup: &mut R,
    request: &InspectRequestData,
) -> Result<Outcome> {
    let route = Route::parse(&codec::decode(&request.payload)?);
    tracing::debug!(?route, "Received inspect request");

    let answer = route.answer(state)?;
    rollup.report(&answer)?;

    Ok(Outcome::Accept)
}
