//! Advance Handler
//!
//! Upper-cases submitted sentences and records who sent them.

use crate::error::{DappError, Result};
use crate::network::Rollup;
use crate::protocol::{codec, AdvanceRequestData, Outcome};
use crate::state::State;

/// Diagnostic reported for payloads that are not a usable sentence
pub const NOT_HEX_DIAGNOSTIC: &str = "sentence is not in hex format";

/// Handle an advance request
///
/// Steps:
/// 1. Decode the payload into a sentence
/// 2. Reject numeric sentences
/// 3. Record the sender
/// 4. Emit the upper-cased sentence as a notice
///
/// Undecodable or numeric input is reported with [`NOT_HEX_DIAGNOSTIC`]
/// and answered with `Reject`; State is left untouched. Transport failures
/// are returned as errors.
pub fn handle_advance<R: Rollup + ?Sized>(
    state: &mut State,
    rollup: &mut R,
    request: &AdvanceRequestData,
) -> Result<Outcome> {
    let sender = request.sender();
    tracing::debug!(
        sender,
        input_index = ?request.metadata.input_index,
        "Received advance request"
    );

    // Step 1 + 2: decode and validate
    let sentence = match codec::decode(&request.payload).and_then(validate_sentence) {
        Ok(sentence) => sentence,
        Err(e) => {
            tracing::warn!(sender, "Rejecting advance: {}", e);
            rollup.report(NOT_HEX_DIAGNOSTIC)?;
            return Ok(Outcome::Reject);
        }
    };

    // Step 3: record the submission
    state.record_submission(sender);

    // Step 4: notify
    let upper = sentence.to_ascii_uppercase();
    rollup.notice(&upper)?;

    tracing::info!(sender, total = state.count(), "Accepted sentence");
    Ok(Outcome::Accept)
}

/// Reject sentences that parse as a number
pub fn validate_sentence(sentence: String) -> Result<String> {
    if is_numeric(&sentence) {
        return Err(DappError::Validation(format!(
            "sentence {:?} is numeric",
            sentence
        )));
    }
    Ok(sentence)
}

/// Whether `text` parses entirely as a floating point number
///
/// Covers integers, decimals, exponents, `inf` and `NaN`. Literals that
/// overflow `f64` (e.g. `1e400`) are out of range and do not count.
pub fn is_numeric(text: &str) -> bool {
    match text.parse::<f64>() {
        Ok(value) => value.is_finite() || is_non_finite_literal(text),
        Err(_) => false,
    }
}

/// `inf`, `infinity` or `nan`, optionally signed, in any case
fn is_non_finite_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    ["inf", "infinity", "nan"]
        .iter()
        .any(|word| unsigned.eq_ignore_ascii_case(word))
}
