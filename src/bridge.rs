// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use crate::latch::Latch;
use crate::traits::LatchError;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// A bridge for moving partial latches between processes.
///
/// Workers that fold their partition on another host ship the resulting latch
/// either as JSON (for web APIs and JSON-based storage) or as compact
/// `bincode` bytes, and the coordinator merges them here.
///
/// # Example
///
/// ```
/// use unique_latch::{Latch, LatchBridge};
///
/// let left = LatchBridge::to_json(&Latch::Single("x".to_string())).unwrap();
/// let right = LatchBridge::to_json(&Latch::<String>::Empty).unwrap();
///
/// let merged = LatchBridge::merge_json_values::<String>(&[left, right]).unwrap();
/// let latch: Latch<String> = LatchBridge::from_json(merged).unwrap();
/// assert_eq!(latch.into_option().as_deref(), Some("x"));
/// ```
pub struct LatchBridge;

impl LatchBridge {
    /// Converts a latch to a JSON value.
    pub fn to_json<T: Serialize>(latch: &Latch<T>) -> Result<Value, LatchError> {
        serde_json::to_value(latch).map_err(|e| LatchError::Serialization(e.to_string()))
    }

    /// Parses a latch from a JSON value.
    pub fn from_json<T: DeserializeOwned>(value: Value) -> Result<Latch<T>, LatchError> {
        serde_json::from_value(value)
            .map_err(|e| LatchError::Deserialization(format!("JSON parse error: {}", e)))
    }

    /// Encodes a latch as `bincode` bytes.
    pub fn to_bytes<T: Serialize>(latch: &Latch<T>) -> Result<Vec<u8>, LatchError> {
        bincode::serialize(latch).map_err(|e| LatchError::Serialization(e.to_string()))
    }

    /// Decodes a latch from `bincode` bytes.
    pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<Latch<T>, LatchError> {
        bincode::deserialize(bytes).map_err(|e| LatchError::Deserialization(e.to_string()))
    }

    /// Merges multiple JSON latches into a single JSON latch.
    ///
    /// Every value is decoded before merging, so a malformed entry is reported
    /// even if an earlier entry already forced `Conflict`.
    pub fn merge_json_values<T>(values: &[Value]) -> Result<Value, LatchError>
    where
        T: Serialize + DeserializeOwned,
    {
        let latches = values
            .iter()
            .map(|value| Self::from_json::<T>(value.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::to_json(&Latch::merge_all(latches))
    }

    /// Merges multiple `bincode` latches into a single encoded latch.
    pub fn merge_bytes<T>(buffers: &[&[u8]]) -> Result<Vec<u8>, LatchError>
    where
        T: Serialize + DeserializeOwned,
    {
        let latches = buffers
            .iter()
            .map(|bytes| Self::from_bytes::<T>(bytes))
            .collect::<Result<Vec<_>, _>>()?;
        Self::to_bytes(&Latch::merge_all(latches))
    }
}
