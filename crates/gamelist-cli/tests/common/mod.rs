use std::path::{Path, PathBuf};
use std::process::Output;

use tokio::process::Command;

/// Run the CLI binary against `api_url`, keeping session files under `home`.
pub async fn run_cli(args: &[&str], home: &Path, api_url: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gamelist"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.env("GAMELIST_API_URL", api_url);
    cmd.env_remove("GAMELIST_PASSWORD");
    cmd.env_remove("RUST_LOG");
    cmd.env("NO_COLOR", "1");
    cmd.output().await.expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub async fn run_cli_success(args: &[&str], home: &Path, api_url: &str) -> String {
    let output = run_cli(args, home, api_url).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure, returning stderr.
pub async fn run_cli_failure(args: &[&str], home: &Path, api_url: &str) -> String {
    let output = run_cli(args, home, api_url).await;
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Where the CLI keeps its session for a given `home`.
pub fn session_file(home: &Path) -> PathBuf {
    home.join("data").join("gamelist").join("session.json")
}

/// Write a session file as if a previous run had logged in.
pub fn seed_session(home: &Path, api_url: &str, access: &str, refresh: Option<&str>) {
    let path = session_file(home);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    let stored = serde_json::json!({
        "api_url": api_url,
        "access_token": access,
        "refresh_token": refresh,
    });
    std::fs::write(path, serde_json::to_string_pretty(&stored).unwrap()).unwrap();
}

pub fn read_session(home: &Path) -> serde_json::Value {
    let json = std::fs::read_to_string(session_file(home)).unwrap();
    serde_json::from_str(&json).unwrap()
}
