use distgit_jobs::error::AppError;
use distgit_jobs::models::{HttpConfig, PageRequest};
use distgit_jobs::services::{AliasDirectoryClient, AliasSource, DatagrepperClient, PageSource};
use distgit_jobs::utils::http::create_client;
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client() -> reqwest::Client {
    create_client(&HttpConfig::default()).unwrap()
}

fn request(page: u64, delta: u64) -> PageRequest {
    PageRequest {
        rows_per_page: 100,
        time_window_seconds: delta,
        topic: "org.fedoraproject.prod.pagure.pull-request.new".to_string(),
        page_number: page,
    }
}

#[tokio::test]
async fn test_fetch_page_sends_query_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/datagrepper/raw"))
        .and(query_param("rows_per_page", "100"))
        .and(query_param("delta", "604800"))
        .and(query_param("topic", "org.fedoraproject.prod.pagure.pull-request.new"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pages": 3,
            "total": 250,
            "raw_messages": [{"msg": {}}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let source = DatagrepperClient::new(client(), format!("{}/datagrepper/raw", mock_server.uri()));
    let page = source.fetch_page(&request(2, 604_800)).await.unwrap();

    assert_eq!(page.total_pages, 3);
    assert_eq!(page.total_items, 250);
    assert_eq!(page.items.len(), 1);
}

#[tokio::test]
async fn test_fetch_page_omits_zero_delta() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/raw"))
        .and(query_param_is_missing("delta"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pages": 1,
            "total": 0,
            "raw_messages": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let source = DatagrepperClient::new(client(), format!("{}/raw", mock_server.uri()));
    assert!(source.fetch_page(&request(1, 0)).await.is_ok());
}

#[tokio::test]
async fn test_fetch_page_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/raw"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let source = DatagrepperClient::new(client(), format!("{}/raw", mock_server.uri()));
    let result = source.fetch_page(&request(1, 0)).await;
    assert!(matches!(result, Err(AppError::Http(_))));
}

#[tokio::test]
async fn test_fetch_page_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/raw"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let source = DatagrepperClient::new(client(), format!("{}/raw", mock_server.uri()));
    let result = source.fetch_page(&request(1, 0)).await;
    assert!(matches!(result, Err(AppError::Json(_))));
}

#[tokio::test]
async fn test_fetch_aliases() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/extras/pagure_owner_alias.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rpms": {
                "python-foo": ["alice", "bob"],
                "nested/pkg": ["carol"]
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let aliases = AliasDirectoryClient::new(
        client(),
        format!("{}/extras/pagure_owner_alias.json", mock_server.uri()),
    );
    let directory = aliases.fetch_aliases().await.unwrap();

    assert_eq!(directory.maintainers_of("rpms/python-foo"), ["alice", "bob"]);
    assert_eq!(directory.maintainers_of("rpms/nested/pkg"), ["carol"]);
}

#[tokio::test]
async fn test_fetch_aliases_without_rpms_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/extras/pagure_owner_alias.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "maintenance"})))
        .mount(&mock_server)
        .await;

    let aliases = AliasDirectoryClient::new(
        client(),
        format!("{}/extras/pagure_owner_alias.json", mock_server.uri()),
    );
    let result = aliases.fetch_aliases().await;
    assert!(matches!(result, Err(AppError::Json(_))));
}

#[tokio::test]
async fn test_fetch_aliases_failure_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let aliases = AliasDirectoryClient::new(client(), format!("{}/missing.json", mock_server.uri()));
    assert!(aliases.fetch_aliases().await.is_err());
}
