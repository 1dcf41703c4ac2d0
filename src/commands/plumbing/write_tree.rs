use crate::areas::repository::Repository;
use crate::artifacts::builders::tree_builder::TreeBuilder;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::path::Path;

impl Repository {
    pub fn write_tree(&mut self) -> anyhow::Result<ObjectId> {
        let tree_id = TreeBuilder::new(self.database(), self.workspace())
            .build(Path::new(""))
            .context("Unable to write tree for the working directory")?;

        writeln!(self.writer(), "{}", tree_id)?;

        Ok(tree_id)
    }
}
