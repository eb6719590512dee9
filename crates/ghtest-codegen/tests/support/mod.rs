//! In-memory document loader for codegen integration tests.
//!
//! Documents are keyed by file name. Every `open` and every drop of a
//! returned handle is appended to a shared event list so tests can assert
//! that handles never overlap.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use ghtest_document::{Document, DocumentError, DocumentLoader, DocumentObject};
use uuid::Uuid;

pub const UNIT_TEST_KIND: Uuid = Uuid::from_u128(0xa1e8_a0f4_27c7_4c4e_9c1b_3b7a_52f9_d6e2);
pub const PLAIN_GROUP_KIND: Uuid = Uuid::from_u128(0xc552_a431_af5b_46a9_a8a4_0fcb_c27e_f596);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Open(String),
    Drop(String),
}

pub type Events = Rc<RefCell<Vec<Event>>>;

#[derive(Default)]
pub struct FakeLoader {
    documents: HashMap<String, Vec<DocumentObject>>,
    failing: Vec<String>,
    pub events: Events,
}

impl FakeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `file_name` with one unit-test grouping per label.
    pub fn with_groups(mut self, file_name: &str, labels: &[&str]) -> Self {
        let objects = labels
            .iter()
            .enumerate()
            .map(|(i, label)| test_group(label, group_id(file_name, i)))
            .collect();
        self.documents.insert(file_name.to_string(), objects);
        self
    }

    pub fn with_objects(mut self, file_name: &str, objects: Vec<DocumentObject>) -> Self {
        self.documents.insert(file_name.to_string(), objects);
        self
    }

    pub fn failing(mut self, file_name: &str) -> Self {
        self.failing.push(file_name.to_string());
        self
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }
}

impl DocumentLoader for FakeLoader {
    fn open(&self, path: &Path) -> Result<Box<dyn Document>, DocumentError> {
        let name = file_name(path);
        if self.failing.contains(&name) {
            return Err(DocumentError::Malformed {
                path: path.to_path_buf(),
                reason: "corrupt archive".into(),
            });
        }
        self.events.borrow_mut().push(Event::Open(name.clone()));
        Ok(Box::new(FakeDocument {
            display_name: display_name(&name),
            path: path.to_path_buf(),
            objects: self.documents.get(&name).cloned().unwrap_or_default(),
            events: Rc::clone(&self.events),
        }))
    }
}

struct FakeDocument {
    display_name: String,
    path: PathBuf,
    objects: Vec<DocumentObject>,
    events: Events,
}

impl Document for FakeDocument {
    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn file_path(&self) -> &Path {
        &self.path
    }

    fn objects(&self) -> &[DocumentObject] {
        &self.objects
    }
}

impl Drop for FakeDocument {
    fn drop(&mut self) {
        self.events
            .borrow_mut()
            .push(Event::Drop(file_name(&self.path)));
    }
}

pub fn test_group(label: &str, id: Uuid) -> DocumentObject {
    DocumentObject {
        kind: UNIT_TEST_KIND,
        label: label.to_string(),
        id,
    }
}

pub fn plain_group(label: &str) -> DocumentObject {
    DocumentObject {
        kind: PLAIN_GROUP_KIND,
        label: label.to_string(),
        id: Uuid::from_u128(1),
    }
}

/// Deterministic id for the `index`-th grouping of `file_name`.
pub fn group_id(file_name: &str, index: usize) -> Uuid {
    let seed = file_name
        .bytes()
        .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(u64::from(b)));
    Uuid::from_u128((u128::from(seed) << 64) | index as u128)
}

/// Create empty placeholder files below `root`; the fake loader supplies
/// their content.
pub fn touch(root: &Path, relative: &[&str]) {
    for path in relative {
        let path = root.join(path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"").unwrap();
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn display_name(file_name: &str) -> String {
    file_name
        .rsplit_once('.')
        .map_or(file_name, |(stem, _)| stem)
        .to_string()
}
