//! Test harness for seedmd integration tests

use std::path::Path;
use std::process::Command;

pub use seedmd::test_utils::TestTree;

pub fn run_seedmd(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_seedmd");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env_remove("FORCE_COLOR")
        .output()
        .expect("Failed to run seedmd");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_source() {
        let tree = TestTree::new();
        let path = tree.add_source("Java", "lexer", "Token.java");
        assert!(path.ends_with("src/main/java/com/dnikulin/vijil/lexer/Token.java"));
        assert!(path.exists());
    }
}
