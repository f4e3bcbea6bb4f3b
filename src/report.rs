//! Presence evaluation and report output.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::checks::CheckSet;
use crate::document::Document;
use crate::dom::Selector;
use crate::error::Result;

/// Mapping from selector string to presence in the document.
///
/// Keys iterate in lexicographic order, matching the sorted [`CheckSet`], so
/// serialized output is byte-stable across runs. Duplicate selectors in the
/// input collapse onto one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PresenceReport {
    entries: BTreeMap<String, bool>,
}

impl PresenceReport {
    /// Evaluate every selector in the check set against the document.
    ///
    /// Each selector is compiled and evaluated in turn, duplicates included;
    /// presence is "at least one element matches". A selector the CSS parser
    /// rejects aborts the whole run — it is never silently reported absent.
    pub fn evaluate(document: &Document, checks: &CheckSet) -> Result<Self> {
        let mut entries = BTreeMap::new();
        for selector in checks.selectors() {
            let compiled = Selector::compile(selector)?;
            entries.insert(selector.clone(), document.has_match(&compiled));
        }
        Ok(Self { entries })
    }

    /// Write the report as pretty-printed JSON with 4-space indentation,
    /// followed by a newline. Called exactly once per run.
    pub fn write_pretty(&self, mut writer: impl Write) -> Result<()> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        self.serialize(&mut serializer)?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn get(&self, selector: &str) -> Option<bool> {
        self.entries.get(selector).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
