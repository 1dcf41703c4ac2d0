use crate::areas::repository::Repository;
use crate::artifacts::builders::commit_builder::CommitBuilder;
use crate::artifacts::objects::commit::Author;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;

impl Repository {
    pub fn commit_tree(
        &mut self,
        tree_sha: &str,
        parent_sha: Option<&str>,
        message: &str,
        author: Author,
    ) -> anyhow::Result<ObjectId> {
        let tree_oid = ObjectId::try_parse(tree_sha.to_string())?;
        let parent = parent_sha
            .map(|sha| ObjectId::try_parse(sha.to_string()))
            .transpose()?;

        let commit_id = CommitBuilder::new(self.database(), author)
            .build(tree_oid, parent, message)
            .context("Unable to write commit object")?;

        writeln!(self.writer(), "{}", commit_id)?;

        Ok(commit_id)
    }
}
