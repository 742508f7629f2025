//! HTTP API tests
//!
//! Drive the axum router in-process with `tower::ServiceExt::oneshot` while
//! a wiremock server stands in for the search provider.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use research_radar::config::Settings;
use research_radar::network::HttpClient;
use research_radar::web::{create_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app(server: &MockServer, api_key: Option<&str>) -> Router {
    let mut settings = Settings::default();
    settings.provider.base_url = server.uri();
    settings.provider.api_key = api_key.map(str::to_string);
    create_router(AppState::new(settings, HttpClient::new().unwrap()))
}

fn one_result(title: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "results": [{"title": title, "url": format!("https://example.com/{}", title)}]
    }))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_search(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/search")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Fails the test on drop if the provider is called at all
async fn forbid_provider_calls(server: &MockServer) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

#[tokio::test]
async fn bulk_search_fans_out_to_four_categories() {
    let server = MockServer::start().await;
    let expected = [
        ("research", "academic research papers about CRISPR gene editing"),
        ("news", "biotech pharma news clinical trials funding CRISPR gene editing"),
        ("patents", "patent: CRISPR gene editing"),
        ("companies", "biotech pharmaceutical company working on CRISPR gene editing"),
    ];
    for (key, query) in expected {
        Mock::given(method("POST"))
            .and(path("/search"))
            .and(header("x-api-key", "test-key"))
            .and(body_partial_json(json!({
                "query": query,
                "type": "auto",
                "numResults": 6,
                "contents": {"text": {"maxCharacters": 300}, "highlights": {"numSentences": 1}}
            })))
            .respond_with(one_result(key))
            .expect(1)
            .mount(&server)
            .await;
    }

    let (status, body) = send(
        app(&server, Some("test-key")),
        post_search(json!({"query": "CRISPR gene editing", "deep": false})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    for (key, _) in expected {
        let results = body[key].as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["title"], key);
    }
}

#[tokio::test]
async fn deep_mode_reaches_every_category() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_partial_json(json!({"type": "deep"})))
        .respond_with(one_result("deep"))
        .expect(4)
        .mount(&server)
        .await;

    let (status, body) = send(
        app(&server, Some("test-key")),
        post_search(json!({"query": "protein folding", "deep": true})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["news"][0]["title"], "deep");
}

#[tokio::test]
async fn failing_category_comes_back_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_partial_json(json!({"query": "patent: base editing"})))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(one_result("ok"))
        .expect(3)
        .mount(&server)
        .await;

    let (status, body) = send(
        app(&server, Some("test-key")),
        post_search(json!({"query": "base editing"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["patents"], json!([]));
    for key in ["research", "news", "companies"] {
        assert_eq!(body[key].as_array().unwrap().len(), 1, "{key}");
    }
}

#[tokio::test]
async fn bulk_search_rejects_blank_or_malformed_queries() {
    let server = MockServer::start().await;
    forbid_provider_calls(&server).await;

    for request in [
        post_search(json!({"query": "   "})),
        post_search(json!({"deep": true})),
        post_search(json!({"query": 42})),
        Request::builder()
            .method("POST")
            .uri("/api/search")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap(),
    ] {
        let (status, body) = send(app(&server, Some("test-key")), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Query is required");
    }
}

#[tokio::test]
async fn missing_api_key_is_a_server_error() {
    let server = MockServer::start().await;
    forbid_provider_calls(&server).await;

    let (status, body) = send(app(&server, None), post_search(json!({"query": "x"}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Search failed. Check your EXA_API_KEY.");

    let (status, body) = send(app(&server, None), get("/api/search/detail?q=x&category=news")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "EXA_API_KEY is not set");
}

#[tokio::test]
async fn detail_requests_summaries() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_partial_json(json!({
            "query": "patent: lipid nanoparticles",
            "numResults": 10,
            "type": "auto",
            "includeDomains": [
                "patents.google.com",
                "patentscope.wipo.int",
                "worldwide.espacenet.com",
                "ppubs.uspto.gov",
                "patents.justia.com",
                "freepatentsonline.com"
            ],
            "contents": {
                "text": {"maxCharacters": 1500},
                "summary": {
                    "query": "Summarize this source in 2-3 sentences related to: lipid nanoparticles. Include one key takeaway."
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "title": "LNP formulation",
                "url": "https://patents.google.com/patent/US2",
                "author": "2019-05-01",
                "summary": "Covers ionizable lipids.",
                "highlights": ["Improves delivery."]
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = send(
        app(&server, Some("test-key")),
        get("/api/search/detail?q=lipid%20nanoparticles&category=patents"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"][0]["summary"], "Covers ionizable lipids.");
    let card = &body["cards"][0];
    assert_eq!(card["owner"], Value::Null);
    assert_eq!(card["takeaway"], "Improves delivery.");
    assert_eq!(card["source"], "patents.google.com");
}

#[tokio::test]
async fn detail_rejects_unknown_category_without_calling_provider() {
    let server = MockServer::start().await;
    forbid_provider_calls(&server).await;

    for uri in [
        "/api/search/detail?q=x&category=foo",
        "/api/search/detail?q=x",
        "/api/search/detail?category=news",
    ] {
        let (status, body) = send(app(&server, Some("test-key")), get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"], "Valid query and category are required");
    }
}

#[tokio::test]
async fn detail_upstream_failure_is_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = send(
        app(&server, Some("test-key")),
        get("/api/search/detail?q=x&category=research"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Search failed");
}

#[tokio::test]
async fn similar_drops_the_seed_url() {
    let server = MockServer::start().await;
    let seed = "https://www.nature.com/articles/seed";
    Mock::given(method("POST"))
        .and(path("/findSimilar"))
        .and(body_partial_json(json!({
            "url": seed,
            "numResults": 8,
            "type": "deep",
            "contents": {
                "text": {"maxCharacters": 1200},
                "summary": {
                    "query": "Summarize this source in 2-3 sentences in context of: CRISPR. Include one key takeaway."
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"title": "Seed", "url": seed},
                {"title": "Neighbour", "url": "https://www.nature.com/articles/other"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = format!(
        "/api/search/similar?url={}&category=research&deep=1&q=CRISPR",
        "https%3A%2F%2Fwww.nature.com%2Farticles%2Fseed"
    );
    let (status, body) = send(app(&server, Some("test-key")), get(&uri)).await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["title"], "Neighbour");
    assert_eq!(body["cards"][0]["source"], "nature.com");
}

#[tokio::test]
async fn similar_upstream_failure_is_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/findSimilar"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = send(
        app(&server, Some("test-key")),
        get("/api/search/similar?url=https%3A%2F%2Fseed.org%2Fa&category=news"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Similar source search failed");
}

#[tokio::test]
async fn similar_requires_a_url() {
    let server = MockServer::start().await;
    forbid_provider_calls(&server).await;

    let (status, body) = send(app(&server, Some("test-key")), get("/api/search/similar?q=x")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Source URL is required");
}

#[tokio::test]
async fn health_reports_version() {
    let server = MockServer::start().await;
    let (status, body) = send(app(&server, None), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], research_radar::VERSION);
}
