use thiserror::Error;

#[derive(Debug, Error)]
pub enum SymbolgenError {
    #[error("XML parsing error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("Invalid vector drawable: {0}")]
    InvalidVector(String),

    #[error("Invalid path data: {0}")]
    InvalidPath(String),

    #[error("Unknown theme directory: {0}")]
    UnknownTheme(String),

    #[error("Icon set mismatch between themes: {0}")]
    Completeness(String),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
