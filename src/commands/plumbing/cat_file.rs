use crate::areas::repository::Repository;
use crate::artifacts::objects::object::ObjectBox;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;

/// What `cat-file` prints about an object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatFileMode {
    /// Content; trees are rendered as a listing
    Pretty,
    Type,
    Size,
}

impl Repository {
    pub fn cat_file(&mut self, object_id: &str, mode: CatFileMode) -> anyhow::Result<()> {
        let oid = ObjectId::try_parse(object_id.to_string())?;

        match mode {
            CatFileMode::Type => {
                let (object_type, _) = self.database().get(&oid)?;
                writeln!(self.writer(), "{}", object_type)?;
            }
            CatFileMode::Size => {
                let (_, content) = self.database().get(&oid)?;
                writeln!(self.writer(), "{}", content.len())?;
            }
            CatFileMode::Pretty => {
                let object = self
                    .database()
                    .parse_object(&oid)
                    .with_context(|| format!("Unable to read object {oid}"))?;

                match object {
                    // raw bytes, so binary blobs come out unchanged
                    ObjectBox::Blob(blob) => self.writer().write_all(blob.content())?,
                    ObjectBox::Tree(tree) if tree.is_empty() => {}
                    other => writeln!(self.writer(), "{}", other.display().trim_end_matches('\n'))?,
                }
            }
        }

        Ok(())
    }
}
