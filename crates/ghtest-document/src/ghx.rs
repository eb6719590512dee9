//! Loader for XML project archives (`.ghx`).
//!
//! An archive is a tree of `chunk` elements holding `item` values:
//!
//! ```text
//! <Archive name="Root">
//!   <chunks><chunk name="Definition"><chunks>
//!     <chunk name="DefinitionObjects"><chunks>
//!       <chunk name="Object" index="0">
//!         <items><item name="GUID">{component kind}</item> ...</items>
//!         <chunks><chunk name="Container"><items>
//!           <item name="InstanceGuid">{instance id}</item>
//!           <item name="NickName">{label}</item>
//!           ...
//! ```
//!
//! Item text is kept verbatim, so labels keep their surrounding whitespace;
//! only GUID values are trimmed before parsing.
//!
//! Only the three values above are read from each top-level object; every
//! other chunk and item (including objects nested inside clusters) is
//! skipped. Binary archives (`.gh`) cannot be read
//! here and are reported as [`DocumentError::UnsupportedFormat`].

use std::io::BufRead;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use uuid::Uuid;

use crate::document::{Document, DocumentLoader, DocumentObject, LoadedDocument};
use crate::error::DocumentError;

/// Chunk path of a top-level document object. Objects nested deeper (for
/// example inside clusters) belong to other documents and are ignored.
const OBJECT_PATH: [&str; 3] = ["Definition", "DefinitionObjects", "Object"];
const CONTAINER_CHUNK: &str = "Container";

/// Reads `.ghx` files from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct GhxLoader;

impl DocumentLoader for GhxLoader {
    fn open(&self, path: &Path) -> Result<Box<dyn Document>, DocumentError> {
        if !path.extension().is_some_and(|ext| ext == "ghx") {
            return Err(DocumentError::UnsupportedFormat(path.to_path_buf()));
        }

        let mut reader = Reader::from_file(path)?;
        let objects = read_objects(&mut reader, path)?;

        tracing::debug!(path = %path.display(), objects = objects.len(), "opened archive");
        Ok(Box::new(LoadedDocument {
            display_name: display_name(path),
            file_path: path.to_path_buf(),
            objects,
        }))
    }
}

/// Parse an in-memory archive. `path` is only used for naming and errors.
pub fn parse_str(xml: &str, path: &Path) -> Result<LoadedDocument, DocumentError> {
    let mut reader = Reader::from_str(xml);
    let objects = read_objects(&mut reader, path)?;
    Ok(LoadedDocument {
        display_name: display_name(path),
        file_path: path.to_path_buf(),
        objects,
    })
}

/// The document's display name: the file name without its extension.
fn display_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[derive(Debug, Default)]
struct PendingObject {
    kind: Option<Uuid>,
    label: Option<String>,
    id: Option<Uuid>,
}

impl PendingObject {
    fn finish(self) -> Option<DocumentObject> {
        match (self.kind, self.id) {
            (Some(kind), Some(id)) => Some(DocumentObject {
                kind,
                label: self.label.unwrap_or_default(),
                id,
            }),
            _ => None,
        }
    }
}

fn read_objects<B: BufRead>(
    reader: &mut Reader<B>,
    path: &Path,
) -> Result<Vec<DocumentObject>, DocumentError> {
    let mut buf = Vec::new();
    let mut chunks: Vec<String> = Vec::new();
    let mut item: Option<String> = None;
    let mut text = String::new();
    let mut pending: Option<PendingObject> = None;
    let mut objects = Vec::new();
    let mut saw_archive = false;
    let mut closed_archive = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"Archive" => saw_archive = true,
                b"chunk" => {
                    chunks.push(name_attr(&e)?.unwrap_or_default());
                    if is_object_chunk(&chunks) {
                        pending = Some(PendingObject::default());
                    }
                }
                b"item" => {
                    item = name_attr(&e)?;
                    text.clear();
                }
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"Archive" => {
                    saw_archive = true;
                    closed_archive = true;
                }
                b"item" => {
                    if let Some(name) = name_attr(&e)? {
                        apply_item(&chunks, pending.as_mut(), &name, "", path)?;
                    }
                }
                _ => {}
            },
            Event::Text(t) => {
                if item.is_some() {
                    text.push_str(&t.unescape()?);
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"Archive" => closed_archive = true,
                b"item" => {
                    if let Some(name) = item.take() {
                        apply_item(&chunks, pending.as_mut(), &name, &text, path)?;
                    }
                }
                b"chunk" => {
                    if is_object_chunk(&chunks) {
                        if let Some(object) = pending.take() {
                            match object.finish() {
                                Some(object) => objects.push(object),
                                None => tracing::debug!(
                                    path = %path.display(),
                                    "skipping object without kind or instance id"
                                ),
                            }
                        }
                    }
                    chunks.pop();
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !saw_archive {
        return Err(DocumentError::Malformed {
            path: path.to_path_buf(),
            reason: "missing <Archive> root element".into(),
        });
    }
    if !closed_archive {
        return Err(DocumentError::Malformed {
            path: path.to_path_buf(),
            reason: "archive ends before </Archive>".into(),
        });
    }
    Ok(objects)
}

fn name_attr(e: &BytesStart<'_>) -> Result<Option<String>, DocumentError> {
    match e.try_get_attribute("name")? {
        Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}

fn is_object_chunk(chunks: &[String]) -> bool {
    chunks.len() == OBJECT_PATH.len() && chunks.iter().zip(OBJECT_PATH).all(|(c, p)| c == p)
}

fn is_container_chunk(chunks: &[String]) -> bool {
    matches!(chunks, [object @ .., last] if last == CONTAINER_CHUNK && is_object_chunk(object))
}

fn apply_item(
    chunks: &[String],
    pending: Option<&mut PendingObject>,
    name: &str,
    value: &str,
    path: &Path,
) -> Result<(), DocumentError> {
    let Some(object) = pending else {
        return Ok(());
    };
    if is_object_chunk(chunks) {
        if name == "GUID" {
            object.kind = Some(parse_guid(value, path)?);
        }
    } else if is_container_chunk(chunks) {
        match name {
            "InstanceGuid" => object.id = Some(parse_guid(value, path)?),
            "NickName" => object.label = Some(value.to_string()),
            _ => {}
        }
    }
    Ok(())
}

fn parse_guid(value: &str, path: &Path) -> Result<Uuid, DocumentError> {
    Uuid::parse_str(value.trim()).map_err(|e| DocumentError::Malformed {
        path: path.to_path_buf(),
        reason: format!("invalid guid '{value}': {e}"),
    })
}
