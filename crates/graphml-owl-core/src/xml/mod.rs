//! Namespace-aware XML element trees.
//!
//! Both document formats are read into an [`Element`] tree before mapping and
//! written from one afterwards. The tree keeps the raw qualified names as they
//! appear in the source, plus the namespace URI each name resolves to, so
//! lookups can be done by `(namespace, local name)` regardless of the prefix a
//! producer chose.

mod error;
mod tree;

pub use error::XmlError;
pub use tree::{Attribute, Element, XmlNode};

/// Literal declaration written at the top of every ontology document.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Literal declaration written at the top of every GraphML document.
pub const XML_DECLARATION_STANDALONE: &str =
    r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;
