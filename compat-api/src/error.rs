/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Translation error type.
//!
//! Translation has exactly one fallible step: serializing the extra-data
//! blob. The underlying serde error is surfaced unchanged through
//! `source()` — it is deterministic for a given input, so callers should
//! fail the request rather than retry.

use std::fmt;

/// Error produced while translating a legacy request.
#[derive(Debug)]
pub enum ConvertError {
    /// The extra-data blob could not be serialized to JSON.
    ExtraData(serde_json::Error),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::ExtraData(err) => {
                write!(f, "failed to serialize extra data: {err}")
            }
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::ExtraData(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::ExtraData(err)
    }
}
