//! End-to-end report runs against a mock endpoint and a temp directory

mod common;

use common::*;
use portable_report::events::{MemorySink, NoOpSink};
use portable_report::fetch::decode_users;
use portable_report::{Error, Event, ReportPipeline, render_report};
use tempfile::tempdir;
use wiremock::ResponseTemplate;

#[tokio::test]
async fn writes_report_for_single_user() {
    let server = mock_users_endpoint(json_response(LEANNE_JSON)).await;
    let temp = tempdir().unwrap();
    let out_dir = temp.path().join("portable_reports");
    let pipeline = ReportPipeline::new(config_for(&server, &out_dir)).unwrap();

    let summary = pipeline.run_at(&NoOpSink, fixed_timestamp()).await.unwrap();

    assert_eq!(summary.record_count, 1);
    assert_eq!(summary.generated_at, fixed_timestamp());
    assert_eq!(
        summary.path.file_name().unwrap(),
        "Report_20240115_093000.txt"
    );
    assert!(summary.path.is_absolute());

    let text = std::fs::read_to_string(&summary.path).unwrap();
    assert!(text.contains("Generated on: 2024-01-15 09:30:00"));
    assert!(text.contains("\nCompany  : Romaguera-Crona\n"));
    assert!(text.contains("\nCity     : Gwenborough\n"));
    assert!(text.ends_with("Total Users: 1"));
}

#[tokio::test]
async fn file_content_equals_rendered_report() {
    let server = mock_users_endpoint(json_response(MIXED_USERS_JSON)).await;
    let temp = tempdir().unwrap();
    let pipeline = ReportPipeline::new(config_for(&server, temp.path())).unwrap();

    let summary = pipeline.run_at(&NoOpSink, fixed_timestamp()).await.unwrap();

    let records = decode_users(MIXED_USERS_JSON.as_bytes()).unwrap();
    let expected = render_report(&records, fixed_timestamp());
    assert_eq!(std::fs::read_to_string(&summary.path).unwrap(), expected);
    assert_eq!(summary.record_count, 3);
}

#[tokio::test]
async fn empty_user_list_still_writes_report() {
    let server = mock_users_endpoint(json_response("[]")).await;
    let temp = tempdir().unwrap();
    let pipeline = ReportPipeline::new(config_for(&server, temp.path())).unwrap();

    let summary = pipeline.run_at(&NoOpSink, fixed_timestamp()).await.unwrap();

    let text = std::fs::read_to_string(&summary.path).unwrap();
    assert!(text.ends_with("Total Users: 0"));
    assert!(!text.contains("ID       :"));
}

#[tokio::test]
async fn events_cover_whole_run() {
    let server = mock_users_endpoint(json_response(LEANNE_JSON)).await;
    let temp = tempdir().unwrap();
    let pipeline = ReportPipeline::new(config_for(&server, temp.path())).unwrap();
    let sink = MemorySink::default();

    let summary = pipeline.run_at(&sink, fixed_timestamp()).await.unwrap();

    let events = sink.events();
    assert_eq!(events.len(), 3);
    assert!(matches!(events[0], Event::FetchStarted { .. }));
    assert_eq!(events[1], Event::FetchCompleted { count: 1 });
    assert_eq!(events[2], Event::ReportSaved { path: summary.path });
}

#[tokio::test]
async fn http_404_writes_nothing() {
    let server = mock_users_endpoint(ResponseTemplate::new(404)).await;
    let temp = tempdir().unwrap();
    let out_dir = temp.path().join("portable_reports");
    let pipeline = ReportPipeline::new(config_for(&server, &out_dir)).unwrap();

    let err = pipeline.run_at(&NoOpSink, fixed_timestamp()).await.unwrap_err();

    assert!(matches!(err, Error::Connection { status: Some(404), .. }));
    assert!(!out_dir.exists(), "no output directory on failure");
}

#[tokio::test]
async fn invalid_json_writes_nothing() {
    let server = mock_users_endpoint(
        ResponseTemplate::new(200).set_body_string("not json"),
    )
    .await;
    let temp = tempdir().unwrap();
    let out_dir = temp.path().join("portable_reports");
    let pipeline = ReportPipeline::new(config_for(&server, &out_dir)).unwrap();

    let err = pipeline.run_at(&NoOpSink, fixed_timestamp()).await.unwrap_err();

    assert!(matches!(err, Error::Parse { .. }));
    assert!(!out_dir.exists());
}

#[tokio::test]
async fn unwritable_output_is_io_error() {
    let server = mock_users_endpoint(json_response(LEANNE_JSON)).await;
    let temp = tempdir().unwrap();
    let blocker = temp.path().join("blocker");
    std::fs::write(&blocker, "a file, not a directory").unwrap();
    let pipeline = ReportPipeline::new(config_for(&server, &blocker)).unwrap();

    let err = pipeline.run_at(&NoOpSink, fixed_timestamp()).await.unwrap_err();

    assert!(matches!(err, Error::Io { .. }), "{err:?}");
    assert_eq!(err.exit_code(), 5);
}

#[tokio::test]
async fn rerun_with_same_timestamp_overwrites() {
    let server = wiremock::MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path(USERS_PATH))
        .respond_with(json_response(LEANNE_JSON))
        .expect(2)
        .mount(&server)
        .await;
    let temp = tempdir().unwrap();
    let pipeline = ReportPipeline::new(config_for(&server, temp.path())).unwrap();

    let first = pipeline.run_at(&NoOpSink, fixed_timestamp()).await.unwrap();
    let second = pipeline.run_at(&NoOpSink, fixed_timestamp()).await.unwrap();

    assert_eq!(first.path, second.path);
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 1);
}
