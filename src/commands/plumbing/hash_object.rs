use crate::areas::repository::Repository;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use std::path::Path;

impl Repository {
    pub fn hash_object(
        &mut self,
        object_path: &str,
        object_type: ObjectType,
        write: bool,
    ) -> anyhow::Result<()> {
        let content = self
            .workspace()
            .read_file(Path::new(object_path))
            .with_context(|| format!("Unable to read {object_path}"))?;

        // without -w this only computes the address
        let object_id = self
            .database()
            .put(object_type, &content, write)
            .with_context(|| format!("Unable to store {object_path}"))?;

        writeln!(self.writer(), "{}", object_id)?;

        Ok(())
    }
}
