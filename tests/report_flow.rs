//! End-to-end tests: commands driving tables against a mocked statistics service

use stackstats::{Host, run};
use std::io::Write;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Host that captures output in memory.
#[derive(Debug, Default)]
struct CaptureHost {
    output: Vec<u8>,
    error: Vec<u8>,
}

impl CaptureHost {
    fn output_string(&self) -> String {
        String::from_utf8(self.output.clone()).expect("output should be UTF-8")
    }
}

impl Host for CaptureHost {
    fn output(&mut self) -> impl Write {
        &mut self.output
    }

    fn error(&mut self) -> impl Write {
        &mut self.error
    }

    fn exit(&mut self, _code: i32) {}
}

fn contribution_body(commits: u64, loc: u64) -> serde_json::Value {
    serde_json::json!({
        "contribution": {
            "commit_count": commits,
            "email_count": 3,
            "loc": loc,
            "patch_set_count": 7,
            "resolved_bug_count": 1,
            "marks": {"-1": 1, "1": 9, "2": 4, "A": 2}
        }
    })
}

/// Mock a service that knows user1 and user2, with one contribution record per
/// (user, release) pair over the given releases.
async fn mock_service(releases: &[&str]) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1.0/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{"id": "user1"}, {"id": "user2"}]
        })))
        .mount(&server)
        .await;

    for user in ["user1", "user2"] {
        for release in releases {
            Mock::given(method("GET"))
                .and(path("/api/1.0/contribution"))
                .and(query_param("user_id", user))
                .and(query_param("release", *release))
                .respond_with(ResponseTemplate::new(200).set_body_json(contribution_body(5, 100)))
                .mount(&server)
                .await;
        }
    }

    // Anything else has no statistics.
    Mock::given(method("GET"))
        .and(path("/api/1.0/contribution"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    server
}

#[tokio::test]
async fn test_group_command_console_output() {
    let server = mock_service(&["icehouse"]).await;
    let url = server.uri();
    let mut host = CaptureHost::default();

    run(
        &mut host,
        [
            "stackstats",
            "group",
            "--people",
            "user1,user2",
            "--releases",
            "icehouse",
            "--metrics",
            "commit_count,loc",
            "--stats-url",
            url.as_str(),
            "--color",
            "never",
        ],
    )
    .await
    .unwrap();

    let output = host.output_string();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "metric/release  icehouse");
    assert_eq!(lines[1], "commits         10");
    assert_eq!(lines[2], "lines of code   200");
    assert_eq!(lines[3], "sum             10");
}

#[tokio::test]
async fn test_user_command_blank_row_for_unknown_person() {
    let server = mock_service(&["icehouse", "juno"]).await;
    let url = server.uri();
    let mut host = CaptureHost::default();

    run(
        &mut host,
        [
            "stackstats",
            "user",
            "--people",
            "user1,ghost",
            "--releases",
            "icehouse,juno",
            "--metrics",
            "commit_count",
            "--stats-url",
            url.as_str(),
            "--color",
            "never",
        ],
    )
    .await
    .unwrap();

    let output = host.output_string();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "user/metric  commits");
    assert_eq!(lines[1], "user1        10");
    assert_eq!(lines[2], "ghost");
}

#[tokio::test]
async fn test_group_command_missing_release_counts_as_zero() {
    // "kilo" is mocked as 404 for every user; its column must aggregate to zero.
    let server = mock_service(&["icehouse"]).await;
    let url = server.uri();
    let mut host = CaptureHost::default();

    run(
        &mut host,
        [
            "stackstats",
            "group",
            "--people",
            "user1",
            "--releases",
            "icehouse,kilo",
            "--metrics",
            "commit_count",
            "--stats-url",
            url.as_str(),
            "--color",
            "never",
        ],
    )
    .await
    .unwrap();

    let output = host.output_string();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "metric/release  icehouse  kilo");
    assert_eq!(lines[1], "commits         5         0");
}

#[tokio::test]
async fn test_group_command_all_unknown_people_fails() {
    let server = mock_service(&["icehouse"]).await;
    let url = server.uri();
    let mut host = CaptureHost::default();

    let result = run(
        &mut host,
        [
            "stackstats",
            "group",
            "--people",
            "ghost",
            "--releases",
            "icehouse",
            "--metrics",
            "loc",
            "--stats-url",
            url.as_str(),
        ],
    )
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_group_command_bad_query_fails_without_service() {
    // No mocks mounted: construction must fail before any request is made.
    let server = MockServer::start().await;
    let url = server.uri();
    let mut host = CaptureHost::default();

    let result = run(
        &mut host,
        [
            "stackstats",
            "group",
            "--people",
            "user1,",
            "--releases",
            "icehouse",
            "--metrics",
            "loc",
            "--stats-url",
            url.as_str(),
        ],
    )
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_group_command_csv_file() {
    let server = mock_service(&["icehouse"]).await;
    let url = server.uri();
    let tmp = tempfile::tempdir().unwrap();
    let csv_path = tmp.path().join("table.csv");
    let mut host = CaptureHost::default();

    run(
        &mut host,
        [
            "stackstats",
            "group",
            "--people",
            "user1,user2",
            "--releases",
            "icehouse",
            "--metrics",
            "reviews",
            "--stats-url",
            url.as_str(),
            "--csv",
            csv_path.to_str().unwrap(),
        ],
    )
    .await
    .unwrap();

    // Console output is suppressed when writing a file.
    assert!(host.output_string().is_empty());

    let written = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "metric/release,icehouse");
    assert_eq!(lines[1], "\"reviews (-2, -1, +1, +2, A)\",\"(0, 2, 18, 8, 4)\"");
    assert_eq!(lines[2], "sum,0");
}

#[tokio::test]
async fn test_report_command_renders_configured_tables() {
    let server = mock_service(&["icehouse", "juno"]).await;
    let url = server.uri();
    let tmp = tempfile::tempdir().unwrap();
    let config_path = tmp.path().join("stackstats.toml");

    std::fs::write(
        &config_path,
        r#"
releases = "icehouse,juno"

[[tables]]
name = "team-activity"
kind = "group-metrics"
people = "user1,user2"
releases = "icehouse"
metrics = "commit_count"

[[tables]]
name = "individual-activity"
kind = "user-metrics"
people = "user1,ghost"
metrics = "loc"
"#,
    )
    .unwrap();

    let mut host = CaptureHost::default();
    run(
        &mut host,
        [
            "stackstats",
            "report",
            "--config",
            config_path.to_str().unwrap(),
            "--stats-url",
            url.as_str(),
            "--color",
            "never",
        ],
    )
    .await
    .unwrap();

    let output = host.output_string();
    assert!(output.contains("team-activity\n"));
    assert!(output.contains("individual-activity\n"));
    // Group table: two people over one release.
    assert!(output.contains("commits         10"));
    // User table: user1 summed over both default releases, ghost blank.
    assert!(output.contains("user1        200"));
    assert!(output.lines().any(|line| line.trim_end() == "ghost"));
}

#[tokio::test]
async fn test_report_command_selects_single_table() {
    let server = mock_service(&["icehouse"]).await;
    let url = server.uri();
    let tmp = tempfile::tempdir().unwrap();
    let config_path = tmp.path().join("stackstats.toml");

    std::fs::write(
        &config_path,
        r#"
releases = "icehouse"

[[tables]]
name = "first"
kind = "group-metrics"
people = "user1"
metrics = "commit_count"

[[tables]]
name = "second"
kind = "user-metrics"
people = "user1"
metrics = "loc"
"#,
    )
    .unwrap();

    let mut host = CaptureHost::default();
    run(
        &mut host,
        [
            "stackstats",
            "report",
            "--config",
            config_path.to_str().unwrap(),
            "--table",
            "second",
            "--stats-url",
            url.as_str(),
            "--color",
            "never",
        ],
    )
    .await
    .unwrap();

    let output = host.output_string();
    assert!(!output.contains("first"));
    assert!(output.contains("second\n"));
    assert!(output.contains("user1        100"));
}

#[tokio::test]
async fn test_report_command_unknown_table_name_fails() {
    let server = MockServer::start().await;
    let url = server.uri();
    let tmp = tempfile::tempdir().unwrap();
    let config_path = tmp.path().join("stackstats.toml");

    std::fs::write(
        &config_path,
        r#"
releases = "icehouse"

[[tables]]
name = "only"
kind = "group-metrics"
people = "user1"
metrics = "loc"
"#,
    )
    .unwrap();

    let mut host = CaptureHost::default();
    let result = run(
        &mut host,
        [
            "stackstats",
            "report",
            "--config",
            config_path.to_str().unwrap(),
            "--table",
            "nope",
            "--stats-url",
            url.as_str(),
        ],
    )
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_report_command_file_output_needs_single_table() {
    let server = MockServer::start().await;
    let url = server.uri();
    let tmp = tempfile::tempdir().unwrap();
    let config_path = tmp.path().join("stackstats.toml");

    std::fs::write(
        &config_path,
        r#"
releases = "icehouse"

[[tables]]
name = "first"
kind = "group-metrics"
people = "user1"
metrics = "loc"

[[tables]]
name = "second"
kind = "user-metrics"
people = "user1"
metrics = "loc"
"#,
    )
    .unwrap();

    let mut host = CaptureHost::default();
    let result = run(
        &mut host,
        [
            "stackstats",
            "report",
            "--config",
            config_path.to_str().unwrap(),
            "--stats-url",
            url.as_str(),
            "--csv",
            tmp.path().join("out.csv").to_str().unwrap(),
        ],
    )
    .await;

    assert!(result.is_err());
}
