//! Common test utilities

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use usersvc::core::UserService;

/// Create a temp project whose data path lives under a not-yet-created dir
pub fn create_test_project() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let data_path = temp_dir.path().join("app").join("users.json");
    (temp_dir, data_path)
}

/// Write a usersvc.toml into the project root
pub fn write_config(temp_dir: &TempDir, data_path: &PathBuf, max_users: usize) {
    let content = format!(
        r#"[storage]
config_path = "{}"

[limits]
max_users = {}
"#,
        data_path.display(),
        max_users
    );
    fs::write(temp_dir.path().join("usersvc.toml"), content).expect("Failed to write config");
}

/// Create a service pointing at the given data path
pub fn create_service(data_path: &PathBuf) -> UserService {
    UserService::new(Some(data_path.to_str().expect("Non-UTF-8 temp path")))
}

/// Seed the three sample users
pub fn seed_sample_users(service: &mut UserService) {
    for (name, email) in [
        ("Alice Johnson", "alice@example.com"),
        ("Bob Smith", "bob@example.com"),
        ("Charlie Brown", "charlie@example.com"),
    ] {
        service
            .create_user(name, email)
            .expect("Failed to create sample user");
    }
}
