// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Unique Reducer
//!
//! The stateless operator definition around [`Latch`]: how to create a fresh
//! latch, how to fold an element into it, how to merge two partition latches
//! and how to finish the surviving one.
//!
//! Two finishing modes are provided:
//!
//! - [`Strict`]: `Result<T, LatchError>`, failing with `NoUniqueElement`.
//! - [`Optional`]: `Option<T>`, never failing.
//!
//! # Example
//!
//! ```
//! use unique_latch::reducer::{unique, unique_optional};
//!
//! let strict = unique::<&str>();
//! assert_eq!(strict.reduce(["x"]).unwrap(), "x");
//!
//! let optional = unique_optional::<&str>();
//! let partitions = vec![vec!["x"], vec!["y"]];
//! assert_eq!(optional.reduce_partitions(partitions), None);
//! ```

use crate::latch::Latch;
use crate::traits::{Finisher, LatchError};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use rayon::ThreadPoolBuilder;
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;
#[cfg(feature = "parallel")]
use tracing::warn;

/// Strict finisher: the value, or `NoUniqueElement`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Strict;

impl<T> Finisher<T> for Strict {
    type Output = Result<T, LatchError>;

    fn finish(latch: Latch<T>) -> Self::Output {
        latch.into_value()
    }
}

/// Optional finisher: `Some` only in the exactly-one case.
#[derive(Debug, Clone, Copy, Default)]
pub struct Optional;

impl<T> Finisher<T> for Optional {
    type Output = Option<T>;

    fn finish(latch: Latch<T>) -> Self::Output {
        latch.into_option()
    }
}

/// Settings for [`UniqueReducer::reduce_slice`].
#[cfg(feature = "parallel")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReduceOptions {
    /// Minimum number of elements per partition.
    pub partition_size: usize,
    /// Size of a dedicated thread pool. `None` runs on rayon's global pool.
    pub max_threads: Option<usize>,
}

#[cfg(feature = "parallel")]
impl Default for ReduceOptions {
    fn default() -> Self {
        Self {
            partition_size: 1024,
            max_threads: None,
        }
    }
}

#[cfg(feature = "parallel")]
impl ReduceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum partition size. Zero is treated as one.
    pub fn with_partition_size(mut self, partition_size: usize) -> Self {
        self.partition_size = partition_size.max(1);
        self
    }

    /// Runs reductions on a dedicated pool of at most `max_threads` threads.
    /// Zero is treated as one.
    pub fn with_max_threads(mut self, max_threads: usize) -> Self {
        self.max_threads = Some(max_threads.max(1));
        self
    }

    fn threads(&self) -> usize {
        self.max_threads
            .unwrap_or_else(rayon::current_num_threads)
            .max(1)
    }

    fn chunk_len(&self, len: usize, threads: usize) -> usize {
        len.div_ceil(threads.max(1)).max(self.partition_size.max(1))
    }
}

/// Exactly-one reducer over elements of type `T`, finished by `F`.
pub struct UniqueReducer<T, F> {
    _phantom: PhantomData<fn() -> (T, F)>,
}

impl<T, F> UniqueReducer<T, F>
where
    F: Finisher<T>,
{
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }

    /// Fresh latch for a new partition.
    pub fn create(&self) -> Latch<T> {
        Latch::new()
    }

    pub fn accumulate(&self, latch: Latch<T>, value: T) -> Latch<T> {
        latch.with(value)
    }

    pub fn merge(&self, left: Latch<T>, right: Latch<T>) -> Latch<T> {
        left.merge(right)
    }

    pub fn finish(&self, latch: Latch<T>) -> F::Output {
        F::finish(latch)
    }

    /// Reduces a sequence as a single partition.
    pub fn reduce<I>(&self, items: I) -> F::Output
    where
        I: IntoIterator<Item = T>,
    {
        self.finish(items.into_iter().collect())
    }

    /// Reduces pre-partitioned input: one latch per partition, merged left
    /// to right. Stops reading partitions once the result is `Conflict`.
    pub fn reduce_partitions<P, I>(&self, partitions: P) -> F::Output
    where
        P: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        let mut partitions_read = 0usize;
        let latches = partitions.into_iter().map(|partition| {
            partitions_read += 1;
            partition.into_iter().collect::<Latch<T>>()
        });
        let merged = Latch::merge_all(latches);
        debug!(partitions_read, cardinality = %merged.cardinality(), "reduced partitions");
        self.finish(merged)
    }
}

#[cfg(feature = "parallel")]
impl<T, F> UniqueReducer<T, F>
where
    T: Clone + Sync,
    F: Finisher<T>,
{
    /// Splits `items` into partitions and folds them with rayon, one latch per
    /// partition, merged in whatever tree rayon builds.
    ///
    /// Only the surviving value is cloned.
    pub fn reduce_slice(&self, items: &[T], options: &ReduceOptions) -> F::Output {
        if items.is_empty() {
            return self.finish(Latch::Empty);
        }

        let threads = options.threads();
        let chunk_len = options.chunk_len(items.len(), threads);
        let partitions = items.len().div_ceil(chunk_len);
        let fold = || {
            items
                .par_chunks(chunk_len)
                .map(|chunk| chunk.iter().collect::<Latch<&T>>())
                .reduce(Latch::new, Latch::merge)
        };

        let merged = match options.max_threads {
            Some(_) => match ThreadPoolBuilder::new()
                .num_threads(threads.min(partitions))
                .build()
            {
                Ok(pool) => pool.install(fold),
                Err(e) => {
                    warn!(error = %e, "failed to build thread pool, using the global pool");
                    fold()
                }
            },
            None => fold(),
        };

        debug!(partitions, chunk_len, "folded slice partitions");
        self.finish(merged.cloned())
    }
}

impl<T, F> Default for UniqueReducer<T, F>
where
    F: Finisher<T>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> Clone for UniqueReducer<T, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, F> Copy for UniqueReducer<T, F> {}

impl<T, F> fmt::Debug for UniqueReducer<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueReducer")
            .field("element", &std::any::type_name::<T>())
            .field("finisher", &std::any::type_name::<F>())
            .finish()
    }
}

/// Reducer that returns the single element or fails with `NoUniqueElement`.
pub fn unique<T>() -> UniqueReducer<T, Strict> {
    UniqueReducer::new()
}

/// Reducer that returns `Some` only when there is exactly one element.
pub fn unique_optional<T>() -> UniqueReducer<T, Optional> {
    UniqueReducer::new()
}
