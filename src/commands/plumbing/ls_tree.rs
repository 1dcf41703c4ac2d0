use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;

impl Repository {
    /// List a tree's entries; a commit address lists the commit's tree
    pub fn ls_tree(&mut self, object_sha: &str, name_only: bool) -> anyhow::Result<()> {
        let oid = ObjectId::try_parse(object_sha.to_string())?;

        let tree_oid = match self.database().parse_object_as_commit(&oid)? {
            Some(commit) => commit.tree_oid().clone(),
            None => oid,
        };

        let tree = self
            .database()
            .parse_object_as_tree(&tree_oid)?
            .with_context(|| format!("{tree_oid} is not a tree object"))?;

        for entry in tree.entries() {
            if name_only {
                writeln!(self.writer(), "{}", entry.name)?;
            } else {
                writeln!(
                    self.writer(),
                    "{:06o} {} {}\t{}",
                    entry.mode.as_u32(),
                    entry.object_type(),
                    entry.oid,
                    entry.name
                )?;
            }
        }

        Ok(())
    }
}
