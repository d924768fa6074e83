//! # unique-latch
//!
//! An exactly-one reduction that stays correct when the input is split across
//! independent workers and the partial results are merged in any order.
//!
//! Each partition folds its elements into a [`Latch`] (`Empty`, `Single` or
//! `Conflict`). Latches merge pairwise; whenever both sides have seen an
//! element the result is `Conflict`, so a 1/1 split is never mistaken for a
//! unique element. A [`UniqueReducer`] wraps the latch with a finishing mode:
//! strict (`Result`) or optional (`Option`).
//!
//! ```
//! use unique_latch::unique;
//!
//! let reducer = unique::<&str>();
//! let left = reducer.accumulate(reducer.create(), "x");
//! let right = reducer.accumulate(reducer.create(), "y");
//! assert!(reducer.finish(reducer.merge(left, right)).is_err());
//! ```

pub mod bridge;
pub mod compaction;
pub mod enums;
pub mod ext;
pub mod latch;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod reducer;
#[cfg(test)]
mod test_support;
pub mod traits;

// Re-export core traits
pub use traits::{Finisher, LatchError};

pub use bridge::LatchBridge;
pub use enums::Cardinality;
pub use ext::UniqueIteratorExt;
pub use latch::Latch;
#[cfg(feature = "parallel")]
pub use parallel::ParallelUniqueExt;
pub use reducer::{unique, unique_optional, Optional, Strict, UniqueReducer};
#[cfg(feature = "parallel")]
pub use reducer::ReduceOptions;
