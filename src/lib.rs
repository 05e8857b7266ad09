//! # dappnode
//!
//! An off-chain compute node for a rollup request/response protocol:
//! - Polls the rollup server for `advance_state` / `inspect_state` requests
//! - Upper-cases submitted sentences and records their senders
//! - Answers `list` / `total` queries about accepted submissions
//! - Reports an accept/reject outcome for every request
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Rollup Server                            │
//! │            /finish      /notice      /report                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  JSON + hex payloads
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Dispatcher                              │
//! │          (single sequential poll/dispatch loop)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Advance   │          │   Inspect   │
//!   │  (&mut)     │          │   (&)       │
//!   └──────┬──────┘          └──────┬──────┘
//!          │                        │
//!          └───────────┬────────────┘
//!                      ▼
//!              ┌─────────────┐
//!              │    State    │
//!              └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod state;
pub mod network;
pub mod handler;
pub mod dispatcher;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DappError, Result};
pub use config::Config;
pub use dispatcher::Dispatcher;
pub use state::State;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of dappnode
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
