//! Madder Document Model
//!
//! This crate provides the mutable XML document model used by the Madder
//! icon tool. It includes:
//!
//! - **Nodes**: A tagged-variant tree of elements, text, CDATA, and
//!   comments ([`Node`], [`Element`], [`Document`])
//! - **Parsing**: Reading markup text into a [`Document`] ([`Document::parse`])
//! - **Serialization**: Writing a [`Document`] back to markup text
//!   ([`Document::to_xml`])
//!
//! The model preserves attribute order and child order, so a parse →
//! mutate → serialize round trip only changes what was explicitly
//! mutated.
//!
//! # Example
//!
//! ```
//! use madder_dom::Document;
//!
//! let doc = Document::parse(r#"<svg><g><path d="M0 0h4v4z"/></g></svg>"#).unwrap();
//! assert_eq!(doc.root().name(), "svg");
//!
//! let xml = doc.to_xml();
//! assert!(xml.contains("<path"));
//! ```

mod error;
mod node;
mod parser;
mod writer;

pub use error::ParseError;
pub use node::{Document, Element, Node};
