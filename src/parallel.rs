// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Rayon integration.
//!
//! Rayon decides how the input is split; every split folds into its own
//! latch and the latches are merged in whatever tree rayon builds.

use crate::latch::Latch;
use crate::traits::LatchError;
use rayon::iter::ParallelIterator;

/// Exactly-one reductions for rayon parallel iterators.
///
/// # Example
///
/// ```
/// use rayon::prelude::*;
/// use unique_latch::ParallelUniqueExt;
///
/// let items: Vec<u32> = (0..10_000).collect();
/// assert_eq!(items.par_iter().filter(|&&n| n == 4_242).single().copied().unwrap(), 4_242);
/// assert_eq!(items.par_iter().filter(|&&n| n % 2 == 0).single_opt(), None);
/// ```
pub trait ParallelUniqueExt: ParallelIterator {
    /// Folds every split into a latch and merges them into one.
    fn into_latch(self) -> Latch<Self::Item> {
        self.fold(Latch::new, Latch::with)
            .reduce(Latch::new, Latch::merge)
    }

    /// The only element, or `NoUniqueElement`.
    fn single(self) -> Result<Self::Item, LatchError> {
        self.into_latch().into_value()
    }

    /// The only element, or `None` for zero or several.
    fn single_opt(self) -> Option<Self::Item> {
        self.into_latch().into_option()
    }
}

impl<I: ParallelIterator> ParallelUniqueExt for I {}
