use thiserror::Error;

#[derive(Debug, Error)]
/// Errors of which majority are related to I/O issues or malformed dbSNP XML
pub enum Error {
    #[error("Read error: {0}")]
    /// Could not read from the input stream or write the report
    ReadError(#[from] std::io::Error),
    #[error("Could not open input: {0}")]
    /// Opening or decompressing the input failed
    InputError(#[from] niffler::Error),
    #[error("Parse error at byte {position}: {source}")]
    /// The XML decoder reported a structural error
    ParseError {
        /// Byte offset reported by the decoder
        position: usize,
        /// Decoder error
        source: quick_xml::Error,
    },
    #[error("Parse error at byte {position}: element `{element}` is not closed")]
    /// Input ended while an element was still open
    UnclosedElement {
        /// Byte offset of the end of input
        position: usize,
        /// Innermost element left open
        element: String,
    },
    #[error("Could not convert bytes in XML as it is invalid UTF-8")]
    /// Element name or attribute is not UTF-8
    NotUTF8(#[from] std::str::Utf8Error),
    #[error("Missing attribute `{attribute}` on element `{element}`")]
    /// Required attribute is absent
    MissingAttribute {
        /// Attribute name (or position) that was expected
        attribute: String,
        /// Enclosing element
        element: String,
    },
    #[error("Attribute `{attribute}` on element `{element}` is not a valid number: `{value}`")]
    /// Numeric attribute could not be parsed
    InvalidNumber {
        /// Attribute name
        attribute: String,
        /// Enclosing element
        element: String,
        /// Raw attribute value
        value: String,
    },
    #[error("Threshold must be a percentage between 0 and 100 but got {0}")]
    /// Threshold percentage out of range
    InvalidThreshold(f32),
}
