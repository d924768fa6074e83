// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use crate::latch::Latch;
use thiserror::Error;

/// Error type for latch operations
#[derive(Debug, Error)]
pub enum LatchError {
    /// The reduction did not observe exactly one element.
    ///
    /// Raised for both the empty and the multiple case; the strict finisher
    /// does not tell them apart.
    #[error("No unique element: expected exactly one element")]
    NoUniqueElement,
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Deserialization error: {0}")]
    Deserialization(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl LatchError {
    /// Returns true if this is the operator failure rather than a transport error.
    pub fn is_no_unique_element(&self) -> bool {
        matches!(self, LatchError::NoUniqueElement)
    }
}

/// Finishing step of a unique reduction.
///
/// A finisher turns the surviving latch of a reduction run into the
/// caller-visible result. It is a type-level choice, so a reducer carries no
/// runtime state for it.
///
/// # Requirements
///
/// Implementations must treat `Empty` and `Conflict` identically: a finisher
/// only ever learns whether the latch is `Single`.
pub trait Finisher<T> {
    /// The caller-visible result of a reduction.
    type Output;

    /// Consumes the final latch and produces the result.
    fn finish(latch: Latch<T>) -> Self::Output;
}
