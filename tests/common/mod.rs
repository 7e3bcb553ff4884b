use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use aieth::config::EndpointConfig;

#[allow(dead_code)]
pub fn temp_config_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("failed to create tempdir");
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, contents).expect("failed to write config file");
    (temp_dir, config_path)
}

/// Endpoint config pointing at a mock server with the default chat path
#[allow(dead_code)]
pub fn endpoint_for(base_url: &str) -> EndpointConfig {
    EndpointConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        ..EndpointConfig::default()
    }
}
