//! Arena DOM, html5ever integration, and CSS selector matching.

pub mod arena;
pub mod select;
pub mod tree_sink;

pub use arena::{Dom, NodeId};
pub use select::Selector;
pub use tree_sink::DomSink;
