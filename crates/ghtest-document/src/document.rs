use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::DocumentError;

/// One top-level object of an opened document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentObject {
    /// Structural kind (component id) of the object.
    pub kind: Uuid,
    /// Display label (nickname) as typed by the author.
    pub label: String,
    /// Instance id, unique within the document.
    pub id: Uuid,
}

/// An opened project document. Dropping the handle releases it.
pub trait Document {
    fn display_name(&self) -> &str;
    fn file_path(&self) -> &Path;
    /// Objects in the document's native order.
    fn objects(&self) -> &[DocumentObject];
}

/// Opens project documents by path.
pub trait DocumentLoader {
    /// Open the document at `path`.
    ///
    /// # Errors
    ///
    /// Any failure to read or interpret the file. Callers treat every error
    /// as "this file could not be opened" and carry on with the next one.
    fn open(&self, path: &Path) -> Result<Box<dyn Document>, DocumentError>;
}

/// A fully materialized document: name, path, and object list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    pub display_name: String,
    pub file_path: PathBuf,
    pub objects: Vec<DocumentObject>,
}

impl Document for LoadedDocument {
    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn objects(&self) -> &[DocumentObject] {
        &self.objects
    }
}
