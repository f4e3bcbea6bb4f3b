//! # pagecheck
//!
//! Checks an HTML document for the presence of CSS selectors and reports
//! the result as a JSON object mapping each selector to a boolean.
//!
//! The document comes from a local file or a single HTTP GET; the selectors
//! come from a JSON array of strings. Selectors are sorted before
//! evaluation so the report's key order is reproducible.
//!
//! ```no_run
//! use pagecheck::{CheckSet, DocumentSource, PresenceReport};
//!
//! let checks = CheckSet::load("checks.json").unwrap();
//! let document = DocumentSource::File("index.html".into()).load().unwrap();
//! let report = PresenceReport::evaluate(&document, &checks).unwrap();
//! report.write_pretty(std::io::stdout()).unwrap();
//! ```

pub mod checks;
pub mod document;
pub mod dom;
pub mod error;
pub mod report;

pub use checks::CheckSet;
pub use document::{Document, DocumentSource};
pub use error::{Error, Result};
pub use report::PresenceReport;
