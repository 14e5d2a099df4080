use thiserror::Error;

/// Errors raised while reading or writing an XML tree.
#[derive(Debug, Error)]
pub enum XmlError {
    #[error("Malformed XML: {0}")]
    Malformed(#[from] quick_xml::Error),

    #[error("Malformed attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Unexpected end tag </{0}>")]
    UnexpectedEnd(String),

    #[error("Element <{0}> is never closed")]
    Unclosed(String),

    #[error("Document has no root element")]
    MissingRoot,

    #[error("Document has more than one root element (found <{0}>)")]
    MultipleRoots(String),

    #[error("Failed to write XML: {0}")]
    Write(#[from] std::io::Error),
}
