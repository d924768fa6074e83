// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Latch Compaction Module
//!
//! Compacts many serialized partial latches into one serialized latch.
//!
//! # Two Compaction Pathways
//!
//! - **JSON Compaction**: For web APIs and JSON-based storage systems.
//! - **Binary Compaction**: `bincode` bytes for compact transport.
//!
//! # Example
//!
//! ```
//! use unique_latch::compaction::compact_json_values;
//! use serde_json::json;
//!
//! let values = vec![json!("Empty"), json!({"Single": "x"}), json!("Empty")];
//!
//! let compacted = compact_json_values::<String>(&values).unwrap();
//! assert_eq!(compacted, json!({"Single": "x"}));
//! ```

use crate::bridge::LatchBridge;
use crate::traits::LatchError;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Compacts multiple JSON latches into a single JSON latch.
///
/// An empty slice compacts to the `Empty` latch.
pub fn compact_json_values<T>(values: &[Value]) -> Result<Value, LatchError>
where
    T: Serialize + DeserializeOwned,
{
    LatchBridge::merge_json_values::<T>(values)
}

/// Compacts multiple `bincode` buffers into a single buffer.
///
/// This is the binary pathway; it avoids JSON overhead entirely.
///
/// # Example
///
/// ```
/// use unique_latch::{Latch, LatchBridge};
/// use unique_latch::compaction::compact_bytes;
///
/// let a = LatchBridge::to_bytes(&Latch::Single(1u64)).unwrap();
/// let b = LatchBridge::to_bytes(&Latch::Single(1u64)).unwrap();
///
/// let compacted = compact_bytes::<u64>(&[&a, &b]).unwrap();
/// assert!(LatchBridge::from_bytes::<u64>(&compacted).unwrap().is_conflict());
/// ```
pub fn compact_bytes<T>(buffers: &[&[u8]]) -> Result<Vec<u8>, LatchError>
where
    T: Serialize + DeserializeOwned,
{
    LatchBridge::merge_bytes::<T>(buffers)
}
