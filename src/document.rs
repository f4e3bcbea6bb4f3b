//! Document acquisition and parsing.
//!
//! A [`Document`] is built from HTML bytes obtained from exactly one
//! [`DocumentSource`]: a local file read synchronously, or a single blocking
//! HTTP GET. There is no caching, no retry, and no timeout beyond what the
//! transport defaults to.

use std::fs;
use std::path::PathBuf;

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

use crate::dom::{Dom, DomSink, Selector};
use crate::error::Result;

/// Where the HTML bytes come from. Exactly one variant is active per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    File(PathBuf),
    Url(String),
}

impl DocumentSource {
    /// Acquire the bytes and parse them into a [`Document`].
    ///
    /// The URL path is the program's single suspension point: the GET either
    /// resolves with a body or fails, exactly once. Non-success HTTP
    /// statuses count as failure.
    pub fn load(&self) -> Result<Document> {
        match self {
            Self::File(path) => {
                let bytes = fs::read(path)?;
                Ok(Document::parse(&bytes))
            }
            Self::Url(url) => {
                let response = reqwest::blocking::get(url.as_str())?.error_for_status()?;
                let bytes = response.bytes()?;
                Ok(Document::parse(&bytes))
            }
        }
    }
}

/// A parsed, queryable HTML document. Immutable after parse.
pub struct Document {
    dom: Dom,
}

impl Document {
    /// Parse HTML bytes. Parsing is lenient like a browser and never fails;
    /// malformed markup still produces a tree.
    pub fn parse(bytes: &[u8]) -> Self {
        let sink = DomSink::new();
        let dom = parse_document(sink, ParseOpts::default())
            .from_utf8()
            .one(bytes)
            .into_dom();
        Self { dom }
    }

    /// Whether at least one element matches the compiled selector.
    pub fn has_match(&self, selector: &Selector) -> bool {
        self.dom.elements().any(|id| selector.matches(&self.dom, id))
    }
}
