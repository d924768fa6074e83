// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use crate::enums::Cardinality;
use crate::traits::LatchError;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, trace};

/// Latch: a per-partition accumulator that remembers whether it has seen
/// zero, exactly one, or more than one element.
///
/// Each worker of a reduction owns one latch, feeds it the elements of its
/// partition, and hands it over to be merged with the latches of the other
/// partitions. The merge only looks at which states the two sides are in, so
/// the final state reflects the total count class regardless of how the input
/// was partitioned or in which order partial results were combined.
///
/// # Key Properties
///
/// - **Monotone**: states only move `Empty -> Single -> Conflict`.
/// - **Absorbing**: once `Conflict`, always `Conflict`.
/// - **Count, not value**: two `Single` latches merge to `Conflict` even when
///   their payloads are equal. `T` needs no `Eq` or `Ord`.
///
/// # Algebraic Properties
///
/// - **Commutativity**: Yes.
/// - **Associativity**: Yes.
/// - **Identity**: `Empty`.
/// - **Idempotence**: No. A latch merged with a copy of itself counts its
///   element twice.
///
/// # Example
///
/// ```
/// use unique_latch::Latch;
///
/// let mut left = Latch::new();
/// left.accumulate("x");
///
/// let mut right = Latch::new();
/// right.accumulate("y");
///
/// assert!(left.clone().into_option().is_some());
/// assert!(left.merge(right).is_conflict());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: DeserializeOwned"))]
pub enum Latch<T> {
    /// No element seen yet.
    Empty,
    /// Exactly one element seen.
    Single(T),
    /// Two or more elements seen.
    Conflict,
}

impl<T> Default for Latch<T> {
    fn default() -> Self {
        Latch::Empty
    }
}

impl<T> Latch<T> {
    /// Creates a new, empty latch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one element into the latch.
    pub fn accumulate(&mut self, value: T) {
        *self = match std::mem::take(self) {
            Latch::Empty => Latch::Single(value),
            Latch::Single(_) | Latch::Conflict => Latch::Conflict,
        };
    }

    /// By-value form of [`Latch::accumulate`], for use as a fold step.
    pub fn with(mut self, value: T) -> Self {
        self.accumulate(value);
        self
    }

    /// Merges the latches of two disjoint partitions.
    ///
    /// Both inputs are consumed. The result is `Conflict` whenever both sides
    /// are non-empty, since each side attests to at least one element of its
    /// own.
    pub fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Latch::Empty, other) => other,
            (this, Latch::Empty) => this,
            (this, other) => {
                trace!(
                    left = %this.cardinality(),
                    right = %other.cardinality(),
                    "merged two non-empty latches into a conflict"
                );
                Latch::Conflict
            }
        }
    }

    /// Merges any number of partition latches into one.
    ///
    /// Returns `Empty` when `latches` yields nothing. Stops reading once the
    /// accumulated result is `Conflict`.
    pub fn merge_all<I>(latches: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut result = Latch::Empty;
        for latch in latches {
            result = result.merge(latch);
            if result.is_conflict() {
                break;
            }
        }
        result
    }

    /// Returns true if the latch has not seen any element.
    pub fn is_empty(&self) -> bool {
        matches!(self, Latch::Empty)
    }

    /// Returns true if the latch has seen exactly one element.
    pub fn is_single(&self) -> bool {
        matches!(self, Latch::Single(_))
    }

    /// Returns true if the latch has seen two or more elements.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Latch::Conflict)
    }

    /// Returns the count class this latch attests to.
    pub fn cardinality(&self) -> Cardinality {
        match self {
            Latch::Empty => Cardinality::Zero,
            Latch::Single(_) => Cardinality::One,
            Latch::Conflict => Cardinality::Many,
        }
    }

    /// Borrows the carried value, if there is exactly one.
    pub fn as_single(&self) -> Option<&T> {
        match self {
            Latch::Single(value) => Some(value),
            _ => None,
        }
    }

    /// Optional finish: the value if exactly one element was seen.
    pub fn into_option(self) -> Option<T> {
        match self {
            Latch::Single(value) => Some(value),
            Latch::Empty | Latch::Conflict => None,
        }
    }

    /// Strict finish: the value, or `NoUniqueElement` if the latch is
    /// `Empty` or `Conflict`.
    pub fn into_value(self) -> Result<T, LatchError> {
        match self {
            Latch::Single(value) => Ok(value),
            other => {
                debug!(cardinality = %other.cardinality(), "no unique element");
                Err(LatchError::NoUniqueElement)
            }
        }
    }
}

impl<T> Latch<&T>
where
    T: Clone,
{
    /// Maps a `Latch<&T>` to a `Latch<T>` by cloning the carried value.
    pub fn cloned(self) -> Latch<T> {
        match self {
            Latch::Empty => Latch::Empty,
            Latch::Single(value) => Latch::Single(value.clone()),
            Latch::Conflict => Latch::Conflict,
        }
    }
}

impl<T> From<Option<T>> for Latch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Latch::Single(value),
            None => Latch::Empty,
        }
    }
}

impl<T> Extend<T> for Latch<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        if self.is_conflict() {
            return;
        }
        for value in iter {
            self.accumulate(value);
            if self.is_conflict() {
                break;
            }
        }
    }
}

impl<T> FromIterator<T> for Latch<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut latch = Latch::new();
        latch.extend(iter);
        latch
    }
}
