//! Dispatcher Module
//!
//! The request-processing loop.
//!
//! ## State Machine
//! ```text
//!        ┌──────────────────────────────┐
//!        ▼                              │
//!     ┌──────┐  finish(status)   ┌──────────┐  202   ┌──────┐
//!     │ Idle │ ────────────────▶ │ Polling  │ ─────▶ │ Idle │
//!     └──────┘                   └────┬─────┘        └──────┘
//!        ▲                            │ 200
//!        │        outcome             ▼
//!        └──────────────────── ┌─────────────┐
//!                              │ Dispatching │
//!                              └─────────────┘
//! ```
//!
//! The outcome of each request is the status sent on the next `finish`.
//! The first `finish` sends `accept`.
//!
//! ## Error Policy
//! - Input errors (bad hex, numeric sentence): `reject`, loop continues
//! - Transport failure inside a handler: `reject`, loop continues
//! - Malformed envelope: logged, previous status kept, loop re-polls
//! - Unknown `request_type`: `reject`, loop continues
//! - Transport failure on `finish`: fatal, returned from [`Dispatcher::run`]

use std::thread;

use crate::config::Config;
use crate::error::{DappError, Result};
use crate::handler;
use crate::network::Rollup;
use crate::protocol::{Outcome, RequestEnvelope};
use crate::state::State;

/// Where the loop currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    Idle,
    Polling,
    Dispatching,
}

/// What one loop iteration did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// No pending request
    Idle,

    /// A request was handled with this outcome
    Processed(Outcome),

    /// The envelope had an unrecognized `request_type`; answered with `Reject`
    Unrecognized,

    /// The envelope could not be parsed; previous status kept
    Malformed,
}

/// Loop counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    pub iterations: u64,
    pub idle_polls: u64,
    pub accepted: u64,
    pub rejected: u64,
    pub malformed: u64,
}

impl LoopStats {
    /// Requests that reached a handler or were rejected as unrecognized
    pub fn processed(&self) -> u64 {
        self.accepted + self.rejected
    }
}

/// Drives the poll → dispatch → report cycle
///
/// Owns the application State and lends it to one handler at a time.
pub struct Dispatcher<R: Rollup> {
    config: Config,

    /// Connection to the rollup server
    rollup: R,

    /// Accumulated application state
    state: State,

    /// Status sent on the next `finish`
    status: Outcome,

    phase: LoopPhase,

    stats: LoopStats,
}

impl<R: Rollup> Dispatcher<R> {
    /// Create a dispatcher with empty State
    pub fn new(config: Config, rollup: R) -> Self {
        Self::with_state(config, rollup, State::new())
    }

    /// Create a dispatcher starting from `state`
    pub fn with_state(config: Config, rollup: R, state: State) -> Self {
        Self {
            config,
            rollup,
            state,
            status: Outcome::Accept,
            phase: LoopPhase::Idle,
            stats: LoopStats::default(),
        }
    }

    /// Run until a fatal error, or until `max_iterations` is reached
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("Entering request loop");

        loop {
            if let Some(max) = self.config.max_iterations {
                if self.stats.iterations >= max {
                    tracing::info!("Stopping after {} iterations", max);
                    return Ok(());
                }
            }

            let step = self.step()?;

            if step == Step::Idle {
                if let Some(backoff) = self.config.idle_backoff() {
                    thread::sleep(backoff);
                }
            }
        }
    }

    /// Run a single loop iteration
    ///
    /// Only fatal errors are returned; everything else is folded into the
    /// status for the next `finish`.
    pub fn step(&mut self) -> Result<Step> {
        self.stats.iterations += 1;
        self.enter(LoopPhase::Polling);

        let polled = self.rollup.finish(self.status);
        self.enter(LoopPhase::Idle);

        let request = match polled {
            Ok(Some(request)) => request,
            Ok(None) => {
                tracing::debug!("No pending rollup request, trying again");
                self.stats.idle_polls += 1;
                return Ok(Step::Idle);
            }
            Err(DappError::UnknownRequestKind(kind)) => {
                tracing::warn!("Rejecting request of unknown type {:?}", kind);
                self.record(Outcome::Reject);
                return Ok(Step::Unrecognized);
            }
            Err(e @ DappError::ResponseFormat(_)) => {
                tracing::warn!("Skipping malformed request: {}", e);
                self.stats.malformed += 1;
                return Ok(Step::Malformed);
            }
            Err(e) => {
                tracing::error!("Polling the rollup server failed: {}", e);
                return Err(e);
            }
        };

        self.enter(LoopPhase::Dispatching);
        let outcome = self.dispatch(&request);
        self.enter(LoopPhase::Idle);

        self.record(outcome);
        Ok(Step::Processed(outcome))
    }

    fn dispatch(&mut self, request: &RequestEnvelope) -> Outcome {
        tracing::debug!("Dispatching {} request", request.kind().as_str());

        match handler::handle(&mut self.state, &mut self.rollup, request) {
            Ok(outcome) => outcome,
            Err(e) if e.is_transport_error() => {
                tracing::error!("Handler failed to reach the rollup server: {}", e);
                Outcome::Reject
            }
            Err(e) => {
                tracing::warn!("Handler error: {}", e);
                Outcome::Reject
            }
        }
    }

    fn enter(&mut self, phase: LoopPhase) {
        tracing::trace!(from = ?self.phase, to = ?phase, "Loop transition");
        self.phase = phase;
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Accept => self.stats.accepted += 1,
            Outcome::Reject => self.stats.rejected += 1,
        }
        self.status = outcome;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Status that will be sent on the next `finish`
    pub fn status(&self) -> Outcome {
        self.status
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    pub fn rollup(&self) -> &R {
        &self.rollup
    }

    /// Consume the dispatcher, returning its State
    pub fn into_state(self) -> State {
        self.state
    }
}
