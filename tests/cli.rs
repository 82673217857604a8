use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const OUTPUT_DIR: &str = "app/src/main/res/drawable-nodpi";
const FILES: [&str; 2] = ["pattern_dots.png", "pattern_grid.png"];

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "nodpi_patterns_cli_{}_{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nodpi_patterns"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_fresh_directory_prints_confirmation_once() {
    let root = scratch_dir("fresh");
    let output = run_in(&root);

    assert!(output.status.success(), "exit status {:?}", output.status);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Patterns created successfully!\n"
    );
    for file in FILES {
        let path = root.join(OUTPUT_DIR).join(file);
        assert!(path.is_file(), "{} missing", path.display());
    }

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_blocked_output_dir_fails_silently_on_stdout() {
    let root = scratch_dir("blocked");
    let blocked = root.join(OUTPUT_DIR);
    fs::create_dir_all(blocked.parent().unwrap()).unwrap();
    fs::write(&blocked, b"not a directory").unwrap();

    let output = run_in(&root);

    assert!(!output.status.success(), "expected failure, got {:?}", output.status);
    assert!(output.stdout.is_empty(), "stdout: {:?}", String::from_utf8_lossy(&output.stdout));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to create directory"));
    assert!(blocked.is_file());
    for file in FILES {
        assert!(!blocked.join(file).exists());
    }

    fs::remove_dir_all(&root).unwrap();
}
