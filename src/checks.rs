//! Loading the selector-set ("checks") file.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// An ordered, immutable set of selector strings to check for.
///
/// Loaded once from a JSON array of strings and sorted lexicographically so
/// the report's key order is stable across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSet {
    selectors: Vec<String>,
}

impl CheckSet {
    /// Load a check set from a JSON file containing an array of strings.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = fs::read(path)?;
        Self::from_json(&bytes)
    }

    /// Parse a check set from JSON bytes, validating the shape explicitly
    /// rather than letting a wrong type surface downstream.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_slice(bytes)?;

        let items = value
            .as_array()
            .ok_or_else(|| Error::InvalidChecks("expected a JSON array".to_string()))?;

        let mut selectors = Vec::with_capacity(items.len());
        for item in items {
            let s = item.as_str().ok_or_else(|| {
                Error::InvalidChecks(format!("expected a string, got {item}"))
            })?;
            selectors.push(s.to_string());
        }
        selectors.sort();

        Ok(Self { selectors })
    }

    /// Selectors in sorted order.
    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }
}
