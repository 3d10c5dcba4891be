// src/domain/votes.rs
use crate::domain::errors::{DomainError, DomainResult};

pub const VOTES_UNCHANGED: &str =
    "Bad request! Votes remains unchanged! The increment value must be a non-zero integer.";

/// Largest value a votes counter can hold.
pub const MAX_VOTES: i32 = i32::MAX;

/// Signed, non-zero delta applied to a votes counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteIncrement(i32);

impl VoteIncrement {
    pub fn new(delta: i32) -> DomainResult<Self> {
        if delta == 0 {
            return Err(DomainError::Validation(VOTES_UNCHANGED.into()));
        }
        Ok(Self(delta))
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// Votes after applying this delta. The counter must stay within
    /// `0..=MAX_VOTES`.
    pub fn apply_to(self, current: i32) -> Result<i32, VoteRejection> {
        let next = i64::from(current) + i64::from(self.0);
        if next < 0 {
            Err(VoteRejection::BelowZero {
                current_votes: current,
            })
        } else if next > i64::from(MAX_VOTES) {
            Err(VoteRejection::AboveMax {
                current_votes: current,
            })
        } else {
            Ok(next as i32)
        }
    }
}

/// Why a guarded vote update left the counter untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteRejection {
    BelowZero { current_votes: i32 },
    AboveMax { current_votes: i32 },
}

/// Result of a guarded vote update. The store only commits when the new
/// count stays in range; otherwise it reports why, with the untouched count.
#[derive(Debug, Clone)]
pub enum VoteOutcome<T> {
    Applied(T),
    Rejected(VoteRejection),
}
