//! Mock upstream endpoint helpers

use portable_report::{Config, SourceConfig};
use std::path::Path;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the mock server serves the user list on
pub const USERS_PATH: &str = "/users";

/// Start a mock server answering `GET /users` exactly once with `response`
pub async fn mock_users_endpoint(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(USERS_PATH))
        .respond_with(response)
        .expect(1)
        .mount(&server)
        .await;
    server
}

/// 200 response with a JSON body
pub fn json_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "application/json")
}

/// Source settings pointing at the mock server's user list
pub fn source_for(server: &MockServer) -> SourceConfig {
    SourceConfig {
        url: format!("{}{}", server.uri(), USERS_PATH),
        ..Default::default()
    }
}

/// Full config pointing at the mock server and writing into `output_dir`
pub fn config_for(server: &MockServer, output_dir: &Path) -> Config {
    let mut config = Config::default();
    config.source = source_for(server);
    config.output.directory = output_dir.to_path_buf();
    config
}
