mod common;

use common::{mock_client, read_fixture};
use jobbank::{
    ErrorKind, ExportOptions, JobBank, JobBankConfig, JobBankError, OutputFormat,
    ProfileOperations,
};
use std::fs;
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COMPANY_ID: &str = "e6o7g3l";
const CONTENT_PATH: &str = "/company/ajax/content/e6o7g3l";

async fn serve(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(CONTENT_PATH))
        .and(query_param("resourceStatus", "1"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

fn json_body(body: impl Into<String>) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.into(), "application/json")
}

#[tokio::test]
async fn sends_browser_headers_and_referer() {
    let mock_server = MockServer::start().await;
    serve(&mock_server, json_body(read_fixture("company/minimal.json"))).await;

    let client = mock_client(&mock_server.uri());
    client.company_profile(COMPANY_ID).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let header = |name: &str| {
        requests[0]
            .headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };
    assert_eq!(
        header("accept").as_deref(),
        Some("application/json, text/plain, */*")
    );
    assert_eq!(header("user-agent").as_deref(), Some("jobbank-test"));
    assert_eq!(
        header("referer"),
        Some(format!("{}/company/{}", mock_server.uri(), COMPANY_ID))
    );
}

#[tokio::test]
async fn fetches_and_parses_profile() {
    let mock_server = MockServer::start().await;
    serve(&mock_server, json_body(read_fixture("company/content.json"))).await;

    let client = mock_client(&mock_server.uri());
    let record = client.company_profile(COMPANY_ID).await.unwrap();

    assert_eq!(record.name, "雲端數位科技股份有限公司");
    assert_eq!(record.development_history.len(), 3);
}

#[tokio::test]
async fn not_found() {
    let mock_server = MockServer::start().await;
    serve(&mock_server, ResponseTemplate::new(404)).await;

    let client = mock_client(&mock_server.uri());
    let result = client.company_profile(COMPANY_ID).await;

    assert!(matches!(result, Err(JobBankError::NotFound)));
}

#[tokio::test]
async fn server_error_is_not_retried() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CONTENT_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server.uri());
    let err = client.company_profile(COMPANY_ID).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    match err {
        JobBankError::UnexpectedStatus {
            status, preview, ..
        } => {
            assert_eq!(status, 500);
            assert_eq!(preview, "internal error");
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    // Bind and release a port so nothing is listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = mock_client(&format!("http://{addr}"));
    let err = client.company_profile(COMPANY_ID).await.unwrap_err();

    assert!(matches!(err, JobBankError::RequestError(_)));
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn slow_response_times_out() {
    let mock_server = MockServer::start().await;
    serve(
        &mock_server,
        json_body(read_fixture("company/minimal.json")).set_delay(Duration::from_secs(3)),
    )
    .await;

    let config = JobBankConfig {
        request_interval: Duration::from_millis(10),
        timeout: Duration::from_millis(200),
        base_url: mock_server.uri(),
        ..JobBankConfig::default()
    };
    let client = JobBank::with_config(config).unwrap();
    let err = client.company_profile(COMPANY_ID).await.unwrap_err();

    match &err {
        JobBankError::RequestError(source) => assert!(source.is_timeout()),
        other => panic!("expected RequestError, got {other:?}"),
    }
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn invalid_json_is_a_decode_error() {
    let mock_server = MockServer::start().await;
    serve(&mock_server, json_body("{\"data\": ")).await;

    let client = mock_client(&mock_server.uri());
    let err = client.company_profile(COMPANY_ID).await.unwrap_err();

    assert!(matches!(err, JobBankError::JsonError(_)));
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn missing_data_is_a_decode_error() {
    let mock_server = MockServer::start().await;
    serve(&mock_server, json_body(r#"{"data": null}"#)).await;

    let client = mock_client(&mock_server.uri());
    let err = client.company_profile(COMPANY_ID).await.unwrap_err();

    assert!(matches!(err, JobBankError::InvalidResponse(_)));
}

#[tokio::test]
async fn html_page_is_rejected() {
    let mock_server = MockServer::start().await;
    serve(
        &mock_server,
        ResponseTemplate::new(200).set_body_raw(
            "<html><body>系統維護中</body></html>",
            "text/html; charset=utf-8",
        ),
    )
    .await;

    let client = mock_client(&mock_server.uri());
    let err = client.company_profile(COMPANY_ID).await.unwrap_err();

    match err {
        JobBankError::UnexpectedContentType {
            got_content_type,
            content_preview,
            ..
        } => {
            assert!(got_content_type.starts_with("text/html"));
            assert!(content_preview.contains("系統維護中"));
        }
        other => panic!("expected UnexpectedContentType, got {other:?}"),
    }
}

#[tokio::test]
async fn json_served_as_html_is_accepted() {
    let mock_server = MockServer::start().await;
    serve(
        &mock_server,
        ResponseTemplate::new(200)
            .set_body_raw(read_fixture("company/minimal.json"), "text/html"),
    )
    .await;

    let client = mock_client(&mock_server.uri());
    let record = client.company_profile(COMPANY_ID).await.unwrap();

    assert_eq!(record.name, "測試公司");
}

#[tokio::test]
async fn invalid_id_sends_no_request() {
    let mock_server = MockServer::start().await;

    let client = mock_client(&mock_server.uri());
    let err = client.company_profile("../admin").await.unwrap_err();

    assert!(matches!(err, JobBankError::InvalidCompanyId(_)));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn requests_are_paced() {
    let mock_server = MockServer::start().await;
    serve(&mock_server, json_body(read_fixture("company/minimal.json"))).await;

    let config = JobBankConfig {
        request_interval: Duration::from_millis(300),
        base_url: mock_server.uri(),
        ..JobBankConfig::default()
    };
    let client = JobBank::with_config(config).unwrap();

    let start = Instant::now();
    client.company_content(COMPANY_ID).await.unwrap();
    client.company_content(COMPANY_ID).await.unwrap();

    assert!(start.elapsed() >= Duration::from_millis(250));
}

#[tokio::test]
async fn export_writes_all_formats() {
    let mock_server = MockServer::start().await;
    serve(&mock_server, json_body(read_fixture("company/minimal.json"))).await;

    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("output");
    let client = mock_client(&mock_server.uri());

    let report = client
        .export_profile(COMPANY_ID, &ExportOptions::new().with_output_dir(&output_dir))
        .await
        .unwrap();

    assert!(report.is_complete());
    assert_eq!(report.base_path(), output_dir.join("測試公司"));

    let json = fs::read_to_string(output_dir.join("測試公司.json")).unwrap();
    assert!(json.contains("\"registrationNumber\": \"12345678\""));

    let markdown = fs::read_to_string(report.path(OutputFormat::Markdown).unwrap()).unwrap();
    assert!(markdown.contains("### 2020年1月\nfounded\n"));

    for format in OutputFormat::ALL {
        assert!(report.path(*format).unwrap().is_file());
    }
}

#[tokio::test]
async fn export_without_name_uses_fallback() {
    let mock_server = MockServer::start().await;
    serve(&mock_server, json_body(r#"{"data": {"custNo": "12345678"}}"#)).await;

    let dir = tempfile::tempdir().unwrap();
    let client = mock_client(&mock_server.uri());

    let paths = client
        .export_profile(COMPANY_ID, &ExportOptions::new().with_output_dir(dir.path()))
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(paths.len(), OutputFormat::ALL.len());
    assert!(dir.path().join("company.json").is_file());
    assert!(dir.path().join("company.md").is_file());
}

#[tokio::test]
async fn failed_fetch_writes_nothing() {
    let mock_server = MockServer::start().await;
    serve(&mock_server, ResponseTemplate::new(404)).await;

    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("output");
    let client = mock_client(&mock_server.uri());

    let result = client
        .export_profile(COMPANY_ID, &ExportOptions::new().with_output_dir(&output_dir))
        .await;

    assert!(matches!(result, Err(JobBankError::NotFound)));
    assert!(!output_dir.exists());
}
