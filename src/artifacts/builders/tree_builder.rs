//! Snapshot a directory into tree and blob objects
//!
//! The walk is depth-first and post-order: a directory's tree is only encoded
//! once every child has an address. An explicit stack of pending directories
//! replaces recursion, so deep hierarchies cannot exhaust the call stack.
//!
//! Policy for entries that are neither regular files nor directories:
//! - symlinks are not followed and are left out
//! - sockets, FIFOs and devices are left out
//! - directories without any stored entry are left out of their parent
//!   (the root always yields a tree, possibly the empty one)

use crate::areas::database::Database;
use crate::areas::workspace::{EntryKind, Workspace, WorkspaceEntry};
use crate::artifacts::core::StoreResult;
use crate::artifacts::objects::entry_mode::{EntryMode, FileMode};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::{self, TreeEntry};
use std::path::Path;

/// A directory whose children are still being processed
struct PendingTree {
    /// Name inside the parent tree
    name: String,
    children: std::vec::IntoIter<WorkspaceEntry>,
    entries: Vec<TreeEntry>,
}

pub struct TreeBuilder<'r> {
    database: &'r Database,
    workspace: &'r Workspace,
    write: bool,
}

impl<'r> TreeBuilder<'r> {
    pub fn new(database: &'r Database, workspace: &'r Workspace) -> Self {
        TreeBuilder {
            database,
            workspace,
            write: true,
        }
    }

    /// Compute addresses without writing any object
    pub fn dry_run(mut self) -> Self {
        self.write = false;
        self
    }

    /// Store every file and directory below `dir_path` and return the
    /// address of the tree for `dir_path` itself
    ///
    /// `dir_path` is resolved against the workspace root.
    pub fn build(&self, dir_path: &Path) -> StoreResult<ObjectId> {
        let dir_path = self.workspace.path().join(dir_path);
        let mut root = self.open(String::new(), &dir_path)?;
        let mut stack: Vec<PendingTree> = Vec::new();

        loop {
            let pending = stack.last_mut().unwrap_or(&mut root);

            if let Some(child) = pending.children.next() {
                match child.kind {
                    EntryKind::Directory => {
                        let subtree = self.open(child.name, &child.path)?;
                        stack.push(subtree);
                    }
                    EntryKind::File => {
                        let content = self.workspace.read_file(&child.path)?;
                        let oid = self.database.put(ObjectType::Blob, &content, self.write)?;
                        pending.entries.push(TreeEntry::new(
                            EntryMode::File(FileMode::Regular),
                            child.name,
                            oid,
                        ));
                    }
                    EntryKind::Symlink | EntryKind::Special => {
                        tracing::debug!(path = %child.path.display(), kind = ?child.kind, "skipping entry");
                    }
                }
                continue;
            }

            let Some(finished) = stack.pop() else {
                return self.emit(&root.entries);
            };

            if finished.entries.is_empty() {
                tracing::debug!(name = %finished.name, "skipping empty directory");
                continue;
            }

            let oid = self.emit(&finished.entries)?;
            stack
                .last_mut()
                .unwrap_or(&mut root)
                .entries
                .push(TreeEntry::new(EntryMode::Directory, finished.name, oid));
        }
    }

    fn open(&self, name: String, dir_path: &Path) -> StoreResult<PendingTree> {
        let children = self.workspace.list_dir(dir_path)?;

        Ok(PendingTree {
            name,
            entries: Vec::with_capacity(children.len()),
            children: children.into_iter(),
        })
    }

    fn emit(&self, entries: &[TreeEntry]) -> StoreResult<ObjectId> {
        let payload = tree::encode(entries)?;
        let oid = self.database.put(ObjectType::Tree, &payload, self.write)?;
        tracing::trace!(oid = %oid, entries = entries.len(), "built tree");

        Ok(oid)
    }
}
