//! Commit object
//!
//! Commits tie a tree snapshot to its parent commit, an author identity and a
//! message.
//!
//! ## Format
//!
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email>
//! author <name> <email>
//!
//! <commit message>
//! ```
//!
//! The `parent` line is omitted for root commits.

use crate::artifacts::core::{StoreError, StoreResult};
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use derive_new::new;

const DEFAULT_AUTHOR_NAME: &str = "mingit";
const DEFAULT_AUTHOR_EMAIL: &str = "mingit@localhost";

/// Author identity recorded in commits
#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct Author {
    #[new(into)]
    name: String,
    #[new(into)]
    email: String,
}

impl Default for Author {
    fn default() -> Self {
        Author::new(DEFAULT_AUTHOR_NAME, DEFAULT_AUTHOR_EMAIL)
    }
}

impl Author {
    /// Load author information from environment variables
    ///
    /// Reads GIT_AUTHOR_NAME and GIT_AUTHOR_EMAIL. Each falls back to the
    /// default identity when unset.
    pub fn load_from_env() -> Self {
        let fallback = Author::default();
        let name = std::env::var("GIT_AUTHOR_NAME").unwrap_or(fallback.name);
        let email = std::env::var("GIT_AUTHOR_EMAIL").unwrap_or(fallback.email);

        Author::new(name, email)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Format as written on an `author` line: "name email"
    pub fn display(&self) -> String {
        format!("{} {}", self.name, self.email)
    }
}

impl TryFrom<&str> for Author {
    type Error = StoreError;

    fn try_from(value: &str) -> StoreResult<Self> {
        // the email is the last word, the name may contain spaces
        let (name, email) = value
            .rsplit_once(' ')
            .ok_or_else(|| StoreError::MalformedCommit(format!("invalid author {value:?}")))?;

        Ok(Author::new(name, email))
    }
}

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct Commit {
    tree_oid: ObjectId,
    parent: Option<ObjectId>,
    author: Author,
    #[new(into)]
    message: String,
}

impl Commit {
    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Packable for Commit {
    fn serialize(&self) -> StoreResult<Bytes> {
        let mut lines = vec![format!("tree {}", self.tree_oid)];
        if let Some(parent) = &self.parent {
            lines.push(format!("parent {parent}"));
        }
        // author is written twice: once as author, once in the committer slot
        lines.push(format!("author {}", self.author.display()));
        lines.push(format!("author {}", self.author.display()));

        let content = format!("{}\n\n{}\n", lines.join("\n"), self.message);
        Ok(Bytes::from(content))
    }
}

impl Unpackable for Commit {
    fn deserialize(content: Bytes) -> StoreResult<Self> {
        let content = std::str::from_utf8(&content)
            .map_err(|_| StoreError::MalformedCommit("commit is not valid UTF-8".to_string()))?;
        let (headers, message) = content
            .split_once("\n\n")
            .ok_or_else(|| StoreError::MalformedCommit("missing message separator".to_string()))?;

        let mut tree_oid = None;
        let mut parent = None;
        let mut author = None;

        for line in headers.lines() {
            let (key, value) = line
                .split_once(' ')
                .ok_or_else(|| StoreError::MalformedCommit(format!("invalid header {line:?}")))?;
            match key {
                "tree" => tree_oid = Some(value.parse::<ObjectId>()?),
                "parent" => parent = Some(value.parse::<ObjectId>()?),
                "author" if author.is_none() => author = Some(Author::try_from(value)?),
                _ => {}
            }
        }

        let tree_oid = tree_oid
            .ok_or_else(|| StoreError::MalformedCommit("missing tree header".to_string()))?;
        let author =
            author.ok_or_else(|| StoreError::MalformedCommit("missing author header".to_string()))?;
        let message = message.strip_suffix('\n').unwrap_or(message);

        Ok(Commit::new(tree_oid, parent, author, message))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn display(&self) -> String {
        self.serialize()
            .map(|content| String::from_utf8_lossy(&content).into_owned())
            .unwrap_or_default()
    }
}
