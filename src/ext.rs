// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use crate::latch::Latch;
use crate::traits::LatchError;

/// Exactly-one reductions for sequential iterators.
///
/// # Example
///
/// ```
/// use unique_latch::UniqueIteratorExt;
///
/// assert_eq!([3].into_iter().single().unwrap(), 3);
/// assert_eq!([1, 2].into_iter().single_opt(), None);
/// assert!(std::iter::empty::<u8>().single().is_err());
/// ```
pub trait UniqueIteratorExt: Iterator + Sized {
    /// The only element, or `NoUniqueElement`.
    ///
    /// Stops pulling from the iterator after the second element.
    fn single(self) -> Result<Self::Item, LatchError> {
        self.collect::<Latch<_>>().into_value()
    }

    /// The only element, or `None` for zero or several.
    fn single_opt(self) -> Option<Self::Item> {
        self.collect::<Latch<_>>().into_option()
    }
}

impl<I: Iterator> UniqueIteratorExt for I {}
