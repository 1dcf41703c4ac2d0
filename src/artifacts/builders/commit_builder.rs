use crate::areas::database::Database;
use crate::artifacts::core::StoreResult;
use crate::artifacts::objects::commit::{Author, Commit};
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

/// Composes commit objects for a fixed author identity
///
/// Neither the tree nor the parent is checked for existence; callers that care
/// must resolve them before building.
#[derive(new)]
pub struct CommitBuilder<'r> {
    database: &'r Database,
    author: Author,
}

impl CommitBuilder<'_> {
    pub fn build(
        &self,
        tree_oid: ObjectId,
        parent: Option<ObjectId>,
        message: &str,
    ) -> StoreResult<ObjectId> {
        let commit = Commit::new(tree_oid, parent, self.author.clone(), message);
        let commit_id = self.database.store(&commit)?;
        tracing::debug!(oid = %commit_id, tree = %commit.tree_oid(), "built commit");

        Ok(commit_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use pretty_assertions::assert_eq;

    #[test]
    fn stores_the_commit_with_the_injected_identity() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("objects")).unwrap();
        let database = Database::new(dir.path().join("objects").into());

        let builder = CommitBuilder::new(&database, Author::new("A", "a@b.c"));
        let commit_id = builder
            .build(
                "1c8f9abb0b9a9503ad6696db883610783d60b317".parse().unwrap(),
                Some("d73317ea8580a09187a12522e2ca7b0573cae1bb".parse().unwrap()),
                "msg",
            )
            .unwrap();

        assert_eq!(commit_id.as_ref(), "59251ada5a8ea8ceb941d52dc1e07a0fcda4b4df");

        let commit = database.parse_object_as_commit(&commit_id).unwrap().unwrap();
        assert_eq!(commit.author(), &Author::new("A", "a@b.c"));
        assert_eq!(commit.message(), "msg");
    }

    #[test]
    fn referenced_objects_need_not_exist() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("objects")).unwrap();
        let database = Database::new(dir.path().join("objects").into());

        let tree_oid: ObjectId = "4b825dc642cb6eb9a060e54bf8d69288fbee4904".parse().unwrap();
        let commit_id = CommitBuilder::new(&database, Author::default())
            .build(tree_oid.clone(), None, "root")
            .unwrap();

        assert!(database.contains(&commit_id));
        assert!(!database.contains(&tree_oid));
    }
}
