//! Tree object
//!
//! Trees represent directory snapshots. They contain entries for files (blobs)
//! and subdirectories (other trees), along with their names and modes. Since
//! every entry embeds the address of its child, a tree's address depends on
//! its whole subtree.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <name>\0<20-byte-sha1>`
//!
//! The codec keeps entries in the order it is given. Callers that need a
//! canonical address (the tree builder) sort entries by name first.

use crate::artifacts::core::{StoreError, StoreResult};
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use derive_new::new;
use std::io::{BufRead, Cursor};

/// A single `(mode, name, child address)` record of a tree
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TreeEntry {
    pub mode: EntryMode,
    #[new(into)]
    pub name: String,
    pub oid: ObjectId,
}

impl TreeEntry {
    /// `tree` for directory entries, `blob` for everything else
    pub fn object_type(&self) -> ObjectType {
        self.mode.object_type()
    }

    pub fn is_tree(&self) -> bool {
        self.mode.is_tree()
    }

    /// A name is a single, non-empty path segment without NUL bytes
    pub fn validate_name(name: &str) -> StoreResult<()> {
        let invalid = name.is_empty()
            || name == "."
            || name == ".."
            || name.contains('\0')
            || name.contains('/');

        if invalid {
            return Err(StoreError::InvalidEntryName(name.to_string()));
        }
        Ok(())
    }
}

/// Directory snapshot as an ordered list of entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    pub fn new(entries: Vec<TreeEntry>) -> Self {
        Tree { entries }
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Encode entries into a tree payload, in the given order
pub fn encode(entries: &[TreeEntry]) -> StoreResult<Bytes> {
    let mut payload = Vec::new();

    for entry in entries {
        TreeEntry::validate_name(&entry.name)?;

        payload.extend_from_slice(entry.mode.as_str().as_bytes());
        payload.push(b' ');
        payload.extend_from_slice(entry.name.as_bytes());
        payload.push(b'\0');
        payload.extend_from_slice(&entry.oid.to_raw());
    }

    Ok(payload.into())
}

/// Decode a tree payload record by record
///
/// Each record is consumed positionally: mode up to the next space, name up to
/// the next NUL, then exactly 20 raw address bytes. The address bytes may hold
/// any value, including space and NUL. A truncated record fails the whole
/// decode; no partial list is ever returned.
pub fn decode(payload: &[u8]) -> StoreResult<Vec<TreeEntry>> {
    let mut reader = Cursor::new(payload);
    let mut entries = Vec::new();

    // Reuse scratch buffers to reduce allocs
    let mut mode_bytes = Vec::new();
    let mut name_bytes = Vec::new();

    while (reader.position() as usize) < payload.len() {
        let offset = reader.position();

        mode_bytes.clear();
        read_field(&mut reader, b' ', &mut mode_bytes)
            .ok_or_else(|| malformed(offset, "unexpected end of payload in mode"))?;
        let mode = std::str::from_utf8(&mode_bytes)
            .ok()
            .and_then(|mode| EntryMode::try_from(mode).ok())
            .ok_or_else(|| {
                malformed(
                    offset,
                    format!("invalid mode {:?}", String::from_utf8_lossy(&mode_bytes)),
                )
            })?;

        name_bytes.clear();
        read_field(&mut reader, b'\0', &mut name_bytes)
            .ok_or_else(|| malformed(offset, "unexpected end of payload in name"))?;
        let name = std::str::from_utf8(&name_bytes)
            .map_err(|_| malformed(offset, "entry name is not valid UTF-8"))?
            .to_owned();

        let oid = ObjectId::read_raw_from(&mut reader)
            .map_err(|_| malformed(offset, "unexpected end of payload in object id"))?;

        entries.push(TreeEntry::new(mode, name, oid));
    }

    Ok(entries)
}

/// Read up to `delimiter`, dropping it; `None` if the payload ends first
fn read_field(reader: &mut Cursor<&[u8]>, delimiter: u8, field: &mut Vec<u8>) -> Option<()> {
    let n = reader.read_until(delimiter, field).ok()?;
    if n == 0 || field.last() != Some(&delimiter) {
        return None;
    }
    field.pop();
    Some(())
}

fn malformed(offset: u64, reason: impl AsRef<str>) -> StoreError {
    StoreError::MalformedTree(format!("record at byte {offset}: {}", reason.as_ref()))
}

impl Packable for Tree {
    fn serialize(&self) -> StoreResult<Bytes> {
        encode(&self.entries)
    }
}

impl Unpackable for Tree {
    fn deserialize(content: Bytes) -> StoreResult<Self> {
        Ok(Tree::new(decode(&content)?))
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn display(&self) -> String {
        self.entries
            .iter()
            .map(|entry| {
                format!(
                    "{:06o} {} {}\t{}",
                    entry.mode.as_u32(),
                    entry.object_type(),
                    entry.oid,
                    entry.name
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}
