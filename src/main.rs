use anyhow::Result;
use clap::{ArgGroup, Parser, Subcommand};
use mingit::areas::repository::Repository;
use mingit::artifacts::objects::commit::Author;
use mingit::artifacts::objects::object_type::ObjectType;
use mingit::commands::plumbing::cat_file::CatFileMode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mingit",
    version = "0.1.0",
    about = "A minimal content-addressed object store",
    long_about = "A minimal implementation of git's object store, written in Rust. \
    It hashes, stores and reads blobs, trees and commits using the same \
    on-disk layout as git.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "cat-file",
        about = "Print the content, type or size of an object",
        group(ArgGroup::new("mode").required(true).args(["pretty", "object_type", "size"]))
    )]
    CatFile {
        #[arg(short = 'p', help = "Pretty-print the object content")]
        pretty: bool,
        #[arg(short = 't', help = "Print the object type")]
        object_type: bool,
        #[arg(short = 's', help = "Print the object size")]
        size: bool,
        #[arg(index = 1, help = "The object SHA")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file and optionally write it to the object database",
        long_about = "This command computes the object ID of a file's content and can write it to the object database."
    )]
    HashObject {
        #[arg(short, long, help = "Write the object to the object database")]
        write: bool,
        #[arg(short = 't', long = "type", default_value = "blob", help = "The object type")]
        object_type: ObjectType,
        #[arg(index = 1)]
        file: String,
    },
    #[command(name = "ls-tree", about = "List the contents of a tree object")]
    LsTree {
        #[arg(long, help = "Only print entry names")]
        name_only: bool,
        #[arg(index = 1, help = "The tree or commit SHA")]
        sha: String,
    },
    #[command(
        name = "write-tree",
        about = "Create a tree object from the working directory"
    )]
    WriteTree,
    #[command(
        name = "commit-tree",
        about = "Create a commit object for a tree",
        long_about = "This command creates a commit object pointing at the given tree. \
        The author is read from GIT_AUTHOR_NAME and GIT_AUTHOR_EMAIL."
    )]
    CommitTree {
        #[arg(index = 1, help = "The tree SHA")]
        tree: String,
        #[arg(short, long, help = "The parent commit SHA")]
        parent: Option<String>,
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
}

fn open_repository(path: Option<&str>) -> Result<Repository> {
    let path = match path {
        Some(path) => path.to_string(),
        None => std::env::current_dir()?.to_string_lossy().into_owned(),
    };

    Repository::new(&path, Box::new(std::io::stdout()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => open_repository(path.as_deref())?.init()?,
        Commands::CatFile {
            pretty: _,
            object_type,
            size,
            sha,
        } => {
            let mode = if *object_type {
                CatFileMode::Type
            } else if *size {
                CatFileMode::Size
            } else {
                CatFileMode::Pretty
            };

            open_repository(None)?.cat_file(sha, mode)?
        }
        Commands::HashObject {
            write,
            object_type,
            file,
        } => open_repository(None)?.hash_object(file, *object_type, *write)?,
        Commands::LsTree { name_only, sha } => open_repository(None)?.ls_tree(sha, *name_only)?,
        Commands::WriteTree => {
            open_repository(None)?.write_tree()?;
        }
        Commands::CommitTree {
            tree,
            parent,
            message,
        } => {
            let author = Author::load_from_env();
            open_repository(None)?.commit_tree(tree, parent.as_deref(), message, author)?;
        }
    }

    Ok(())
}
