use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;
use common::command::{repository_dir, run_mingit_command};

#[rstest]
fn new_repository_initiated_with_git_directory(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir_absolute_path = repository_dir.path().canonicalize()?.display().to_string();

    run_mingit_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Initialized empty Git repository in",
        ))
        .stdout(predicate::str::contains(dir_absolute_path));

    let git_dir = repository_dir.path().join(".git");
    assert!(git_dir.join("objects").is_dir());
    assert!(git_dir.join("refs").join("heads").is_dir());
    pretty_assertions::assert_eq!(
        std::fs::read_to_string(git_dir.join("HEAD"))?,
        "ref: refs/heads/main\n"
    );

    Ok(())
}

#[rstest]
fn init_accepts_a_target_path(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let target = repository_dir.path().join("nested").join("project");

    let mut sut = Command::cargo_bin("mingit")?;
    sut.current_dir(repository_dir.path())
        .arg("init")
        .arg(&target);

    sut.assert().success();
    assert!(target.join(".git").join("objects").is_dir());

    Ok(())
}

#[rstest]
fn reinitializing_keeps_existing_head(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_mingit_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    let head = repository_dir.path().join(".git").join("HEAD");
    std::fs::write(&head, "ref: refs/heads/trunk\n")?;

    run_mingit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    pretty_assertions::assert_eq!(std::fs::read_to_string(head)?, "ref: refs/heads/trunk\n");

    Ok(())
}
