use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn git(dir: &Path, args: &[&str]) {
    let status = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .unwrap();
    assert!(status.success(), "git {:?} failed", args);
}

#[test]
fn test_missing_ruff() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("ruff-check")
        .unwrap()
        .current_dir(dir.path())
        .args(["--ruff", "nonexistent_ruff_12345", "--no-color"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Could not find nonexistent_ruff_12345. Please add nonexistent_ruff_12345 to your python environment",
        ));
}

#[test]
fn test_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("pyproject.toml"), "[tool.autohooks\n").unwrap();

    Command::cargo_bin("ruff-check")
        .unwrap()
        .current_dir(dir.path())
        .args(["--ruff", "nonexistent_ruff_12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[cfg(unix)]
#[test]
fn test_lint_staged_files() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let repo = dir.path().join("repo");
    fs::create_dir(&repo).unwrap();
    git(&repo, &["init", "-q"]);

    let ruff = dir.path().join("fake-ruff");
    fs::write(
        &ruff,
        "#!/bin/sh\n\
         for last; do :; done\n\
         case \"$last\" in\n\
         *bad.py) echo \"$last:1:8: F401 [*] \\`os\\` imported but unused\"; echo 'Found 1 error.'; exit 1;;\n\
         esac\n\
         echo 'All checks passed!'\n",
    )
    .unwrap();
    fs::set_permissions(&ruff, fs::Permissions::from_mode(0o755)).unwrap();
    let ruff = ruff.to_str().unwrap();

    // Nothing staged yet
    Command::cargo_bin("ruff-check")
        .unwrap()
        .current_dir(&repo)
        .args(["--ruff", ruff, "--no-color", "--no-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No staged files to lint."));

    fs::write(repo.join("bad.py"), "import os\n").unwrap();
    fs::write(repo.join("good.py"), "print('ok')\n").unwrap();
    fs::write(repo.join("README.md"), "# readme\n").unwrap();
    git(&repo, &["add", "bad.py", "good.py", "README.md"]);

    Command::cargo_bin("ruff-check")
        .unwrap()
        .current_dir(&repo)
        .args(["--ruff", ruff, "--no-color", "--no-progress"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("bad.py:1:8: F401 [*] `os` imported but unused"))
        .stdout(predicate::str::contains("Found 1 error."))
        .stdout(predicate::str::contains("Linting good.py was successful."))
        .stdout(predicate::str::contains("README.md").not());
}

#[cfg(unix)]
#[test]
fn test_many_failing_files_still_fail() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let repo = dir.path().join("repo");
    fs::create_dir(&repo).unwrap();
    git(&repo, &["init", "-q"]);

    // Flags every file it is given
    let ruff = dir.path().join("flag-all");
    fs::write(
        &ruff,
        "#!/bin/sh\n\
         for last; do :; done\n\
         echo \"$last:1:1: F401 [*] \\`os\\` imported but unused\"\n\
         echo 'Found 1 error.'\n\
         exit 1\n",
    )
    .unwrap();
    fs::set_permissions(&ruff, fs::Permissions::from_mode(0o755)).unwrap();

    for i in 0..256 {
        fs::write(repo.join(format!("mod_{:03}.py", i)), "import os\n").unwrap();
    }
    git(&repo, &["add", "."]);

    let output = Command::cargo_bin("ruff-check")
        .unwrap()
        .current_dir(&repo)
        .args(["--ruff", ruff.to_str().unwrap(), "--no-color", "--no-progress"])
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Found 1 error.").count(), 256);
    assert_eq!(output.status.code(), Some(255));
}
