use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("xml attribute error: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),
    #[error("unsupported document format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("malformed document '{}': {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },
}
