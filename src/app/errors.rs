use std::fmt;

use thiserror::Error;

use crate::models::PriceField;

/// Ways a pass can end without results.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PassError {
    #[error("fetch returned no rows")]
    EmptyResult,
    #[error("fetch failed: {0}")]
    FetchFailure(String),
    #[error("cannot derive change from {field}: {reason}")]
    DegenerateInput {
        field: PriceField,
        reason: DegenerateReason,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DegenerateReason {
    ZeroBaseline,
    MissingValue,
}

impl fmt::Display for DegenerateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegenerateReason::ZeroBaseline => f.write_str("first value is zero"),
            DegenerateReason::MissingValue => f.write_str("first or last value is missing"),
        }
    }
}
