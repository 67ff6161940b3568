// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Class label vocabulary loaded from a JSON array.
//!
//! The label file is a flat JSON array of strings, one per class, ordered
//! to match the model's output logit positions:
//!
//! ```json
//! ["tench", "goldfish", "great white shark", ...]
//! ```
//!
//! The table is loaded once at startup and never mutated.

use crate::ClassifierError;
use std::path::Path;

/// An ordered, immutable sequence of class names.
///
/// Index `i` corresponds exactly to the model's output logit position `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTable {
    labels: Vec<String>,
}

impl LabelTable {
    /// Loads a label table from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ClassifierError> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            ClassifierError::LabelRead {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::from_json(&content)
    }

    /// Parses a label table from a JSON string.
    ///
    /// The root must be an array of strings; anything else (an object, a
    /// number, an array of mixed types) is a parse error, never an empty
    /// table.
    pub fn from_json(json: &str) -> Result<Self, ClassifierError> {
        let labels: Vec<String> = serde_json::from_str(json)?;
        Ok(Self { labels })
    }

    /// Builds a table from an in-memory list (for tests and tooling).
    pub fn from_labels(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Returns the label at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Returns the label at `index`, or a loud error on a label/model
    /// mismatch.
    pub fn label_for(&self, index: usize) -> Result<&str, ClassifierError> {
        self.get(index)
            .ok_or(ClassifierError::LabelIndexOutOfRange {
                index,
                len: self.labels.len(),
            })
    }

    /// Number of classes in the table.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if the table holds no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates over the labels in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}
