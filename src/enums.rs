// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::traits::LatchError;

/// Count class a latch attests to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Cardinality {
    Zero,
    One,
    Many,
}

impl Cardinality {
    /// Count class of two disjoint partitions taken together.
    pub fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Cardinality::Zero, c) | (c, Cardinality::Zero) => c,
            _ => Cardinality::Many,
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cardinality::Zero => write!(f, "zero"),
            Cardinality::One => write!(f, "one"),
            Cardinality::Many => write!(f, "many"),
        }
    }
}

impl FromStr for Cardinality {
    type Err = LatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zero" | "0" => Ok(Cardinality::Zero),
            "one" | "1" => Ok(Cardinality::One),
            "many" => Ok(Cardinality::Many),
            _ => Err(LatchError::InvalidInput(format!("Unknown cardinality: {}", s))),
        }
    }
}
