use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const AUTHOR_NAME: &str = "fake_user";
pub const AUTHOR_EMAIL: &str = "fake_email@email.com";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_mingit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

/// `a.txt` = "x" and `sub/b.txt` = "y"
#[fixture]
pub fn nested_repository_dir(init_repository_dir: TempDir) -> TempDir {
    write_file(FileSpec::new(
        init_repository_dir.path().join("a.txt"),
        "x".to_string(),
    ));
    write_file(FileSpec::new(
        init_repository_dir.path().join("sub").join("b.txt"),
        "y".to_string(),
    ));

    init_repository_dir
}

pub fn run_mingit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("mingit").expect("Failed to find mingit binary");
    cmd.current_dir(dir);
    cmd.env_remove("RUST_LOG");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn mingit_commit_tree(dir: &Path, tree: &str, parent: Option<&str>, message: &str) -> Command {
    let mut args = vec!["commit-tree", tree, "-m", message];
    if let Some(parent) = parent {
        args.extend(["-p", parent]);
    }

    let mut cmd = run_mingit_command(dir, &args);
    cmd.envs(vec![
        ("GIT_AUTHOR_NAME", AUTHOR_NAME),
        ("GIT_AUTHOR_EMAIL", AUTHOR_EMAIL),
    ]);
    cmd
}

/// Run a command and return its trimmed stdout
pub fn stdout_of(mut cmd: Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output)
        .expect("stdout is not UTF-8")
        .trim_end()
        .to_string()
}
