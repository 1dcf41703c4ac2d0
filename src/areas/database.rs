//! Object database
//!
//! Objects live under `.git/objects/<2 hex chars>/<38 hex chars>`, each file
//! holding the zlib-compressed frame `<type> <len>\0<content>`. Objects are
//! immutable: writing content that is already stored is a no-op.

use crate::artifacts::core::{StoreError, StoreResult};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{self, Object, ObjectBox, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use bytes::Bytes;
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Address `content` as `object_type`, persisting it when `write` is set
    ///
    /// With `write == false` nothing touches the filesystem. The objects root
    /// must already exist; only the fan-out subdirectory is created on demand.
    pub fn put(
        &self,
        object_type: ObjectType,
        content: &[u8],
        write: bool,
    ) -> StoreResult<ObjectId> {
        let object_id = object::hash_frame(object_type, content);
        if !write {
            return Ok(object_id);
        }

        let object_path = self.object_path(&object_id);
        if object_path.exists() {
            tracing::trace!(oid = %object_id, "object already stored");
            return Ok(object_id);
        }

        let framed = object::frame(object_type, content);
        self.write_object(&object_path, framed)?;
        tracing::debug!(oid = %object_id, kind = %object_type, size = content.len(), "stored object");

        Ok(object_id)
    }

    /// Persist a typed object and return its address
    pub fn store(&self, object: &impl Object) -> StoreResult<ObjectId> {
        self.put(object.object_type(), &object.serialize()?, true)
    }

    /// Read an object back as its type and content
    pub fn get(&self, object_id: &ObjectId) -> StoreResult<(ObjectType, Bytes)> {
        let object_path = self.object_path(object_id);
        let compressed = std::fs::read(&object_path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => StoreError::NotFound(object_id.clone()),
            _ => StoreError::io(&object_path, err),
        })?;

        let framed = Self::decompress(&compressed)
            .map_err(|err| StoreError::corrupt(object_id, format!("decompression failed: {err}")))?;
        tracing::trace!(oid = %object_id, size = framed.len(), "loaded object");

        object::split_frame(object_id, framed)
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.object_path(object_id).is_file()
    }

    pub fn parse_object(&self, object_id: &ObjectId) -> StoreResult<ObjectBox> {
        let (object_type, content) = self.get(object_id)?;

        match object_type {
            ObjectType::Blob => Ok(ObjectBox::Blob(Box::new(Blob::deserialize(content)?))),
            ObjectType::Tree => Ok(ObjectBox::Tree(Box::new(Tree::deserialize(content)?))),
            ObjectType::Commit => Ok(ObjectBox::Commit(Box::new(Commit::deserialize(
                content,
            )?))),
        }
    }

    pub fn parse_object_as_tree(&self, object_id: &ObjectId) -> StoreResult<Option<Tree>> {
        match self.get(object_id)? {
            (ObjectType::Tree, content) => Ok(Some(Tree::deserialize(content)?)),
            _ => Ok(None),
        }
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> StoreResult<Option<Commit>> {
        match self.get(object_id)? {
            (ObjectType::Commit, content) => Ok(Some(Commit::deserialize(content)?)),
            _ => Ok(None),
        }
    }

    fn object_path(&self, object_id: &ObjectId) -> PathBuf {
        self.path.join(object_id.to_path())
    }

    fn write_object(&self, object_path: &Path, framed: Bytes) -> StoreResult<()> {
        let object_dir = object_path
            .parent()
            .ok_or_else(|| StoreError::io(object_path, ErrorKind::InvalidInput.into()))?;

        // only the fan-out directory is ours to create
        match std::fs::create_dir(object_dir) {
            Err(err) if err.kind() != ErrorKind::AlreadyExists => {
                return Err(StoreError::io(object_dir, err));
            }
            _ => {}
        }

        let compressed = Self::compress(&framed).map_err(|err| StoreError::io(object_path, err))?;

        // write to a temp file first and rename it into place, so an
        // interrupted write never leaves a truncated object behind
        let mut temp_file = tempfile::Builder::new()
            .prefix("tmp-obj-")
            .tempfile_in(object_dir)
            .map_err(|err| StoreError::io(object_dir, err))?;
        temp_file
            .write_all(&compressed)
            .map_err(|err| StoreError::io(temp_file.path(), err))?;
        temp_file
            .persist(object_path)
            .map_err(|err| StoreError::io(object_path, err.error))?;

        Ok(())
    }

    fn compress(data: &[u8]) -> std::io::Result<Vec<u8>> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(data)?;
        encoder.finish()
    }

    fn decompress(data: &[u8]) -> std::io::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(data);
        let mut decompressed_content = Vec::new();
        decoder.read_to_end(&mut decompressed_content)?;

        Ok(decompressed_content.into())
    }
}
