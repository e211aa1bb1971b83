use plex_playlists::plex::{
    auth::{Authenticator, ClientHeaders},
    error::PlexError,
};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn authenticator_for(server: &MockServer) -> Authenticator {
    Authenticator::new(ClientHeaders::new(Some("1.41.0".to_string())))
        .unwrap()
        .with_signin_url(format!("{}/users/sign_in.json", server.uri()))
}

#[tokio::test]
async fn exchanges_credentials_for_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/sign_in.json"))
        .and(header("X-Plex-Product", "PlexAPI"))
        .and(header("X-Plex-Version", "1.41.0"))
        .and(body_string_contains("user%5Blogin%5D=alice"))
        .and(body_string_contains("user%5Bpassword%5D=hunter2"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "user": {"username": "alice", "authToken": "tok-123"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = authenticator_for(&server)
        .fetch_token("alice", "hunter2")
        .await
        .unwrap();
    assert_eq!(token, "tok-123");
}

#[tokio::test]
async fn missing_token_is_an_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/sign_in.json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"user": {"username": "alice"}})))
        .mount(&server)
        .await;

    let err = authenticator_for(&server)
        .fetch_token("alice", "hunter2")
        .await
        .unwrap_err();
    assert!(matches!(err, PlexError::Authentication(_)));
}

#[tokio::test]
async fn rejected_credentials_are_an_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/sign_in.json"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid email, username, or password."})))
        .mount(&server)
        .await;

    let err = authenticator_for(&server)
        .fetch_token("alice", "wrong")
        .await
        .unwrap_err();
    assert!(matches!(err, PlexError::Authentication(_)));
}

#[tokio::test]
async fn client_headers_pick_up_server_version() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/identity"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<MediaContainer size="0" machineIdentifier="f00d" version="1.41.0.8992"></MediaContainer>"#,
        ))
        .mount(&server)
        .await;

    let headers = ClientHeaders::for_server(&server.uri()).await;
    assert_eq!(headers.version, "1.41.0.8992");
}

#[tokio::test]
async fn client_headers_survive_unreachable_server() {
    let headers = ClientHeaders::for_server("http://127.0.0.1:1").await;
    assert_eq!(headers.version, "Unknown");
}
