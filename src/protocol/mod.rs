//! Protocol Module
//!
//! Defines the wire protocol spoken with the rollup server.
//!
//! ## Endpoints
//! ```text
//! POST /finish  {"status": "accept"|"reject"}
//!               202 → no pending request
//!               200 → {"request_type": ..., "data": {...}}
//! POST /notice  {"payload": "0x..."}
//! POST /report  {"payload": "0x..."}
//! ```
//!
//! ### Request Data
//! - advance_state: `{"metadata": {"msg_sender": ..., ...}, "payload": "0x..."}`
//! - inspect_state: `{"payload": "0x..."}`
//!
//! Every payload is hex-encoded text (see [`codec`]).

pub mod codec;
mod request;
mod status;

pub use codec::{decode, encode};
pub use request::{
    AdvanceMetadata, AdvanceRequestData, InspectRequestData, RequestEnvelope, RequestKind,
};
pub use status::{FinishRequest, Outcome, PayloadRequest};
