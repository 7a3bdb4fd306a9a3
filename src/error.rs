// Copyright (c) 2024 Weird Constructor <weirdconstructor@gmail.com>
// This is a part of vseq. See README.md and COPYING for details.

//! Errors reported by the explicit `*_e` operation variants. The bare
//! variants swallow these and degrade to a no-op or an empty result.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Index assignment outside the sequence. The index is reported as
    /// requested, before negative index normalization.
    #[error("index {index} out of bounds for sequence of length {len}")]
    OutOfBounds { index: i64, len: usize },

    /// A value did not coerce into the element type of the sequence.
    #[error("cannot coerce {got} into {want}")]
    Coerce { want: &'static str, got: &'static str },

    #[cfg(feature = "serde")]
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}
