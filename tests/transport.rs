//! Transport behaviour against a mock Plex server.

use std::time::Duration;

use plex_playlists::plex::{client::Plex, config::PlexConfig};
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn plex_for(server: &MockServer) -> Plex {
    Plex::new(PlexConfig::new(server.uri(), "secret-token").unwrap()).unwrap()
}

#[tokio::test]
async fn fetch_xml_sends_token_and_parses_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/playlists"))
        .and(header("X-Plex-Token", "secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<MediaContainer size="1"><Playlist ratingKey="1" title="a" playlistType="audio"/></MediaContainer>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let root = plex_for(&server).fetch_xml("/playlists").await.unwrap();
    assert_eq!(root.name, "MediaContainer");
    assert_eq!(root.attributes.get("size").map(String::as_str), Some("1"));
}

#[tokio::test]
async fn fetch_xml_is_none_on_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/playlists"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    assert!(plex_for(&server).fetch_xml("playlists").await.is_none());
}

#[tokio::test]
async fn fetch_xml_is_none_on_malformed_xml() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<MediaContainer><Playlist>"))
        .mount(&server)
        .await;

    assert!(plex_for(&server).fetch_xml("playlists").await.is_none());
}

#[tokio::test]
async fn fetch_xml_is_none_when_server_is_unreachable() {
    let plex = Plex::new(PlexConfig::new("http://127.0.0.1:1", "secret-token").unwrap()).unwrap();
    assert!(plex.fetch_xml("playlists").await.is_none());
}

#[tokio::test]
async fn fetch_xml_gives_up_after_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/playlists"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<MediaContainer/>")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = PlexConfig::new(server.uri(), "secret-token")
        .unwrap()
        .with_timeout(Duration::from_millis(200));
    let plex = Plex::new(config).unwrap();
    assert!(plex.fetch_xml("playlists").await.is_none());
}

#[tokio::test]
async fn post_form_decodes_json_on_created() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/playlists"))
        .and(header("X-Plex-Token", "secret-token"))
        .and(query_param("title", "Road trip"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let response = plex_for(&server)
        .post_form("playlists", &[("title", "Road trip")])
        .await
        .unwrap();
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body, json!({"ok": true}));
}

#[tokio::test]
async fn post_form_is_none_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/playlists"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(plex_for(&server)
        .post_form("playlists", &[("title", "x")])
        .await
        .is_none());
}

#[tokio::test]
async fn post_form_requires_exactly_created() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    assert!(plex_for(&server)
        .post_form("playlists", &[("title", "x")])
        .await
        .is_none());
}

#[tokio::test]
async fn delete_resource_accepts_ok_and_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/playlists/1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/playlists/2"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/playlists/3"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let plex = plex_for(&server);
    assert!(plex.delete_resource("playlists/1").await);
    assert!(plex.delete_resource("playlists/2").await);
    assert!(!plex.delete_resource("playlists/3").await);
}

#[tokio::test]
async fn identity_reports_server_version() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/identity"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<MediaContainer size="0" claimed="1" machineIdentifier="f00d" version="1.41.0.8992" />"#,
        ))
        .mount(&server)
        .await;

    let identity = plex_for(&server).fetch_identity().await.unwrap();
    assert_eq!(identity.version.as_deref(), Some("1.41.0.8992"));
    assert_eq!(identity.machine_identifier.as_deref(), Some("f00d"));
}
