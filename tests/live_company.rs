mod common;

use common::jobbank;
use jobbank::{ExportOptions, JobBankError, ProfileOperations};

#[tokio::test]
#[ignore]
async fn company_profile() {
    let client = jobbank();
    let record = client.company_profile("e6o7g3l").await.unwrap();
    assert!(!record.name.is_empty());
    assert!(!record.registration_number.is_empty());
}

#[tokio::test]
#[ignore]
async fn company_content_is_json() {
    let client = jobbank();
    let content = client.company_content("e6o7g3l").await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert!(value["data"].is_object());
}

#[tokio::test]
#[ignore]
async fn company_not_found() {
    let client = jobbank();
    let result = client.company_profile("zzzzzzzzzzzz").await;
    assert!(matches!(
        result,
        Err(JobBankError::NotFound
            | JobBankError::InvalidResponse(_)
            | JobBankError::UnexpectedStatus { .. })
    ));
}

#[tokio::test]
#[ignore]
async fn export_profile() {
    let dir = tempfile::tempdir().unwrap();
    let client = jobbank();
    let report = client
        .export_profile("e6o7g3l", &ExportOptions::new().with_output_dir(dir.path()))
        .await
        .unwrap();
    assert!(report.is_complete());
}
