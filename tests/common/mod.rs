use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use jobbank::{JobBank, JobBankConfig};

pub fn fixture_path(relative: impl AsRef<Path>) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(relative)
}

pub fn read_fixture(relative: impl AsRef<Path>) -> String {
    fs::read_to_string(fixture_path(relative)).expect("fixture file should be readable")
}

/// Client against the live site, at the default pace.
#[allow(dead_code)]
pub fn jobbank() -> JobBank {
    JobBank::new(jobbank::DEFAULT_USER_AGENT).unwrap()
}

/// Client against a local mock server, paced fast enough for tests.
#[allow(dead_code)]
pub fn mock_client(base_url: &str) -> JobBank {
    let config = JobBankConfig {
        user_agent: "jobbank-test".to_string(),
        request_interval: Duration::from_millis(10),
        timeout: Duration::from_secs(5),
        base_url: base_url.to_string(),
    };
    JobBank::with_config(config).unwrap()
}
