mod common;

use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use vendorlist_client::{
    ClientError, DocumentFetcher, GlobalVendorList, GvlConfig, HttpFetcher,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher() -> HttpFetcher {
    HttpFetcher::from_config(&GvlConfig::default()).unwrap()
}

#[tokio::test]
async fn fetch_returns_parsed_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/doc.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "hello": "world" })))
        .expect(1)
        .mount(&server)
        .await;

    let value = fetcher()
        .fetch(&format!("{}/doc.json", server.uri()))
        .await
        .unwrap();
    assert_eq!(value, json!({ "hello": "world" }));
}

#[tokio::test]
async fn fetch_reports_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/missing.json", server.uri());
    let err = fetcher().fetch(&url).await.unwrap_err();
    assert_eq!(err.url, url);
    assert!(err.message.contains("404"));
}

#[tokio::test]
async fn fetch_reports_invalid_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ not json"))
        .mount(&server)
        .await;

    let err = fetcher()
        .fetch(&format!("{}/broken.json", server.uri()))
        .await
        .unwrap_err();
    assert!(err.message.contains("invalid JSON"));
}

// ── End to end over HTTP ────────────────────────────────────────

#[tokio::test]
async fn load_and_translate_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/archives/vendor-list-v17.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::vendor_list(17)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/purposes-de.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::translation(17, "DE")))
        .expect(1)
        .mount(&server)
        .await;

    let config = GvlConfig::with_base_url(format!("{}/v2", server.uri()));
    let fetcher = Arc::new(HttpFetcher::from_config(&config).unwrap());

    let mut gvl = GlobalVendorList::load_version(config, fetcher, 17)
        .unwrap()
        .await
        .unwrap();
    assert_eq!(gvl.index().vendor_list_version(), 17);

    gvl.change_language("de").unwrap().await.unwrap();
    assert_eq!(gvl.language().as_str(), "DE");
    assert!(gvl.index().purposes()["1"].name.starts_with("DE "));
    assert_eq!(gvl.index().vendors_with_consent_purpose(1).len(), 1);
}

#[tokio::test]
async fn server_error_surfaces_through_readiness() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vendor-list.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let config = GvlConfig::with_base_url(server.uri());
    let fetcher = Arc::new(HttpFetcher::from_config(&config).unwrap());

    let pending = GlobalVendorList::load_latest(config, fetcher).unwrap();
    match pending.await {
        Err(ClientError::Fetch(err)) => assert!(err.message.contains("503")),
        other => panic!("expected fetch error, got {other:?}"),
    }
}
