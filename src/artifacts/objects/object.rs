use crate::artifacts::core::{StoreError, StoreResult};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::artifacts::objects::RAW_OBJECT_ID_LENGTH;
use bytes::Bytes;
use sha1::{Digest, Sha1};

/// Encodes an object into its payload (the part after the frame header)
pub trait Packable {
    fn serialize(&self) -> StoreResult<Bytes>;
}

/// Decodes an object from its payload
pub trait Unpackable {
    fn deserialize(content: Bytes) -> StoreResult<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn display(&self) -> String;

    fn object_id(&self) -> StoreResult<ObjectId> {
        Ok(hash_frame(self.object_type(), &self.serialize()?))
    }
}

pub enum ObjectBox {
    Blob(Box<Blob>),
    Tree(Box<Tree>),
    Commit(Box<Commit>),
}

impl ObjectBox {
    pub fn display(&self) -> String {
        match self {
            ObjectBox::Blob(blob) => blob.display(),
            ObjectBox::Tree(tree) => tree.display(),
            ObjectBox::Commit(commit) => commit.display(),
        }
    }
}

/// Build the `<type> <len>\0<content>` frame that gets hashed and stored
pub fn frame(object_type: ObjectType, content: &[u8]) -> Bytes {
    let header = format!("{} {}\0", object_type.as_str(), content.len());
    let mut framed = Vec::with_capacity(header.len() + content.len());
    framed.extend_from_slice(header.as_bytes());
    framed.extend_from_slice(content);
    framed.into()
}

/// Address of `content` framed as `object_type`
pub fn hash_frame(object_type: ObjectType, content: &[u8]) -> ObjectId {
    let mut hasher = Sha1::new();
    hasher.update(format!("{} {}\0", object_type.as_str(), content.len()));
    hasher.update(content);

    let mut raw = [0; RAW_OBJECT_ID_LENGTH];
    raw.copy_from_slice(&hasher.finalize());
    ObjectId::from_raw(&raw)
}

/// Split a decompressed frame into its type and content
///
/// The header must name a known type and a decimal length (no sign, no
/// leading zeros) equal to the number of content bytes.
pub fn split_frame(oid: &ObjectId, framed: Bytes) -> StoreResult<(ObjectType, Bytes)> {
    let nul = framed
        .iter()
        .position(|&b| b == b'\0')
        .ok_or_else(|| StoreError::corrupt(oid, "missing header separator"))?;

    let header = std::str::from_utf8(&framed[..nul])
        .map_err(|_| StoreError::corrupt(oid, "header is not ASCII"))?;
    let (object_type, size) = header
        .split_once(' ')
        .ok_or_else(|| StoreError::corrupt(oid, format!("malformed header {header:?}")))?;

    let object_type = ObjectType::try_from(object_type)
        .map_err(|_| StoreError::corrupt(oid, format!("unknown object type {object_type:?}")))?;

    let valid_digits = !size.is_empty()
        && size.bytes().all(|b| b.is_ascii_digit())
        && (size == "0" || !size.starts_with('0'));
    let size = valid_digits
        .then(|| size.parse::<usize>().ok())
        .flatten()
        .ok_or_else(|| StoreError::corrupt(oid, format!("invalid object size {size:?}")))?;

    let content = framed.slice(nul + 1..);
    if content.len() != size {
        return Err(StoreError::corrupt(
            oid,
            format!("header declares {size} bytes, found {}", content.len()),
        ));
    }

    Ok((object_type, content))
}
