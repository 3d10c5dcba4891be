// src/application/commands/votes.rs
//! Parsing of `{ "inc_votes": <non-zero integer> }` bodies shared by the
//! article and comment vote endpoints.
use serde_json::Value;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::votes::{MAX_VOTES, VoteIncrement, VoteRejection},
};

const INCOMPLETE_BODY: &str = "Bad request! Incomplete request body! Accept only if request body is an object in the form { inc_votes: newVote }, where newVote is a non-zero integer.";
const INVALID_KEY: &str = "Bad request! Invalid key! Accept only if request body is an object in the form { inc_votes: newVote }, where newVote is a non-zero integer.";
const NOT_AN_INTEGER: &str =
    "Bad request! Increment value is not an integer! The increment value must be a non-zero integer.";
const WRONG_DATA_TYPE: &str =
    "Bad request! Wrong data type! The increment value must be a non-zero integer.";

/// Turns a raw vote body into a validated increment.
pub fn parse_vote_body(payload: &Value) -> ApplicationResult<VoteIncrement> {
    let fields = match payload.as_object() {
        Some(fields) if !fields.is_empty() => fields,
        _ => return Err(ApplicationError::validation(INCOMPLETE_BODY)),
    };
    let raw = fields
        .get("inc_votes")
        .ok_or_else(|| ApplicationError::validation(INVALID_KEY))?;

    let delta = match raw {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                int
            } else if let Some(float) = number.as_f64() {
                if float.fract() != 0.0 {
                    return Err(ApplicationError::validation(NOT_AN_INTEGER));
                }
                // Integral floats such as `2.0`; out-of-range magnitudes fall through below.
                if float.abs() > f64::from(i32::MAX) {
                    return Err(ApplicationError::validation(WRONG_DATA_TYPE));
                }
                float as i64
            } else {
                return Err(ApplicationError::validation(WRONG_DATA_TYPE));
            }
        }
        _ => return Err(ApplicationError::validation(WRONG_DATA_TYPE)),
    };

    let delta =
        i32::try_from(delta).map_err(|_| ApplicationError::validation(WRONG_DATA_TYPE))?;
    Ok(VoteIncrement::new(delta)?)
}

/// Client message for a vote the store refused to apply to a `kind` row.
pub(crate) fn rejection_message(kind: &str, rejection: VoteRejection) -> String {
    match rejection {
        VoteRejection::BelowZero { current_votes } => format!(
            "Bad request! The current number of votes of this {kind} is {current_votes}. Number of votes cannot be less than 0 after decrement."
        ),
        VoteRejection::AboveMax { current_votes } => format!(
            "Bad request! The current number of votes of this {kind} is {current_votes}. Number of votes cannot be more than {MAX_VOTES} after increment."
        ),
    }
}
