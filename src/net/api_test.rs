use super::*;
use crate::net::types::Topic;
use crate::stub::{self, StubState};

async fn stub_api() -> HttpApi {
    let addr = stub::spawn(StubState::seeded(), "127.0.0.1:0").await.unwrap();
    let config = ClientConfig::default()
        .with_base_url(&format!("http://{addr}"))
        .unwrap();
    HttpApi::new(&config).unwrap()
}

async fn login_token(api: &HttpApi) -> String {
    api.login(&Credentials::new("foo", "12345678"))
        .await
        .unwrap()
        .token
}

// =============================================================================
// endpoints
// =============================================================================

#[test]
fn endpoint_urls_format_expected_paths() {
    assert_eq!(login_url("http://localhost:9000"), "http://localhost:9000/api/login");
    assert_eq!(articles_url("http://localhost:9000"), "http://localhost:9000/api/articles");
    assert_eq!(article_url("http://localhost:9000", 12), "http://localhost:9000/api/articles/12");
}

#[test]
fn new_trims_trailing_slash() {
    let config = ClientConfig { base_url: "http://localhost:9000/".into(), ..ClientConfig::default() };
    let api = HttpApi::new(&config).unwrap();
    assert_eq!(api.base_url(), "http://localhost:9000");
}

// =============================================================================
// parse_body
// =============================================================================

#[test]
fn parse_body_success() {
    let body = r#"{"message":"hi","token":"abc"}"#;
    let resp: LoginResponse = parse_body(StatusCode::OK, body).unwrap();
    assert_eq!(resp.token, "abc");
    assert_eq!(resp.message, "hi");
}

#[test]
fn parse_body_401_is_unauthorized_with_server_message() {
    let body = r#"{"message":"Ouch: token expired"}"#;
    let err = parse_body::<ArticlesResponse>(StatusCode::UNAUTHORIZED, body).unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized { ref message } if message == "Ouch: token expired"));
}

#[test]
fn parse_body_other_status_keeps_code() {
    let err = parse_body::<ArticlesResponse>(StatusCode::UNPROCESSABLE_ENTITY, r#"{"message":"bad"}"#).unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 422, ref message } if message == "bad"));
}

#[test]
fn parse_body_error_falls_back_to_raw_text() {
    let err = parse_body::<ArticlesResponse>(StatusCode::BAD_GATEWAY, "upstream down").unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 502, ref message } if message == "upstream down"));
}

#[test]
fn parse_body_error_falls_back_to_reason_phrase() {
    let err = parse_body::<ArticlesResponse>(StatusCode::NOT_FOUND, "").unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 404, ref message } if message == "Not Found"));
}

#[test]
fn parse_body_invalid_json_is_parse_error() {
    let err = parse_body::<ArticlesResponse>(StatusCode::OK, "not json").unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));
}

// =============================================================================
// HttpApi against the stub server
// =============================================================================

#[tokio::test]
async fn login_returns_token() {
    let api = stub_api().await;
    let resp = api.login(&Credentials::new("foo", "12345678")).await.unwrap();
    assert_eq!(resp.token.len(), 64);
    assert!(resp.message.contains("foo"));
}

#[tokio::test]
async fn login_rejects_short_password() {
    let api = stub_api().await;
    let err = api.login(&Credentials::new("foo", "short")).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 422, .. }));
}

#[tokio::test]
async fn list_requires_valid_token() {
    let api = stub_api().await;
    let err = api.list_articles("not-a-token").await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn crud_round_through_stub() {
    let api = stub_api().await;
    let token = login_token(&api).await;

    let listed = api.list_articles(&token).await.unwrap();
    let seeded = listed.articles.len();
    assert!(seeded > 0);

    let draft = ArticleDraft::new("Ownership", "Borrow checker notes", Topic::Node);
    let created = api.create_article(&token, &draft).await.unwrap();
    assert_eq!(created.article.title, "Ownership");

    let edit = ArticleDraft { title: "Ownership 2".into(), ..draft };
    let updated = api
        .update_article(&token, created.article.id, &edit)
        .await
        .unwrap();
    assert_eq!(updated.article.id, created.article.id);
    assert_eq!(updated.article.title, "Ownership 2");

    let deleted = api.delete_article(&token, created.article.id).await.unwrap();
    assert!(deleted.message.contains(&created.article.id.to_string()));

    let after = api.list_articles(&token).await.unwrap();
    assert_eq!(after.articles.len(), seeded);
    assert!(after.articles.iter().all(|a| a.id != created.article.id));
}

#[tokio::test]
async fn delete_unknown_id_is_not_found() {
    let api = stub_api().await;
    let token = login_token(&api).await;
    let err = api.delete_article(&token, 9_999).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 404, .. }));
}

#[tokio::test]
async fn unreachable_server_is_request_error() {
    let config = ClientConfig::default().with_base_url("http://127.0.0.1:9").unwrap();
    let api = HttpApi::new(&config).unwrap();
    let err = api.list_articles("token").await.unwrap_err();
    assert!(matches!(err, ApiError::Request(_)));
}
