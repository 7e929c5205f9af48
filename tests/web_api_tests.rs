use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::{header, Method, Request, StatusCode};
use axum::Json;
use serde_json::{json, Value};
use tower::ServiceExt;

use pathladder::ladder::Dictionary;
use pathladder::web::api::{dictionary_info, health_check, shortest_path, word_ladder, AppState};
use pathladder::web::models::{ShortestPathRequest, WebEdge, WordLadderRequest};
use pathladder::web::server::{build_app, ServerConfig, DICTIONARY_ENV};

fn example_request(destination: Option<usize>) -> ShortestPathRequest {
    let edges = [(0, 1, 3.0), (0, 2, 1.0), (1, 3, 2.0), (1, 2, 4.0), (2, 3, 6.0)]
        .into_iter()
        .map(|(source, target, weight)| WebEdge { source, target, weight })
        .collect();
    ShortestPathRequest {
        vertex_count: 4,
        edges,
        source: 0,
        destination,
    }
}

fn state() -> AppState {
    AppState::new(Dictionary::from_words(["cat", "cot", "cog", "dog"]))
}

#[tokio::test]
async fn test_shortest_path_endpoint() {
    let Json(response) = shortest_path(State(state()), Json(example_request(Some(3)))).await.unwrap();

    assert_eq!(response.algorithm, "Dijkstra");
    assert_eq!(response.distances, vec![Some(0.0), Some(3.0), Some(1.0), Some(5.0)]);
    assert_eq!(response.path, vec![0, 1, 3]);
    assert_eq!(response.total_cost, Some(5.0));
}

#[tokio::test]
async fn test_shortest_path_without_destination() {
    let Json(response) = shortest_path(State(state()), Json(example_request(None))).await.unwrap();

    assert!(response.path.is_empty());
    assert_eq!(response.total_cost, None);
    assert_eq!(response.predecessors, vec![None, Some(0), Some(0), Some(1)]);
}

#[tokio::test]
async fn test_shortest_path_rejects_negative_weights() {
    let mut request = example_request(Some(3));
    request.edges[0].weight = -1.0;

    let (status, Json(body)) = shortest_path(State(state()), Json(request)).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "negative_weight");
}

#[tokio::test]
async fn test_shortest_path_rejects_bad_vertices() {
    let mut request = example_request(Some(9));
    let (status, Json(body)) = shortest_path(State(state()), Json(request.clone())).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "invalid_vertex");

    request.destination = None;
    request.source = 7;
    let (_, Json(body)) = shortest_path(State(state()), Json(request)).await.unwrap_err();
    assert_eq!(body.error, "invalid_vertex");
}

#[tokio::test]
async fn test_word_ladder_endpoint() {
    let request = WordLadderRequest {
        begin: "CAT".to_string(),
        end: "dog".to_string(),
    };
    let Json(response) = word_ladder(State(state()), Json(request)).await;

    assert!(response.found);
    assert_eq!(response.ladder, vec!["cat", "cot", "cog", "dog"]);
    assert!(response.message.is_none());
}

#[tokio::test]
async fn test_word_ladder_endpoint_reports_failures() {
    let request = WordLadderRequest {
        begin: "cat".to_string(),
        end: "cow".to_string(),
    };
    let Json(response) = word_ladder(State(state()), Json(request)).await;

    assert!(!response.found);
    assert!(response.ladder.is_empty());
    assert!(response.message.unwrap().contains("dictionary"));
}

#[tokio::test]
async fn test_dictionary_and_health_endpoints() {
    let Json(info) = dictionary_info(State(state())).await;
    assert_eq!(info.words, 4);

    let Json(health) = health_check().await;
    assert_eq!(health["status"], "healthy");
}

#[tokio::test]
async fn test_shortest_path_rejects_oversized_graphs() {
    let mut request = example_request(None);
    request.vertex_count = 1 << 42;

    let (status, Json(body)) = shortest_path(State(state()), Json(request)).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "invalid_request");

    let limited = state().with_max_vertices(3);
    let (_, Json(body)) = shortest_path(State(limited), Json(example_request(Some(3))))
        .await
        .unwrap_err();
    assert_eq!(body.error, "invalid_request");
}

fn app(max_vertices: usize) -> axum::Router {
    let config = ServerConfig {
        max_vertices,
        ..ServerConfig::default()
    };
    build_app(Dictionary::from_words(["cat", "cot", "cog", "dog"]), &config)
}

async fn send(app: axum::Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Option<String>, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::ORIGIN, "http://example.com");
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let allow_origin = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, allow_origin, json)
}

#[tokio::test]
async fn test_router_shortest_path() {
    let body = json!({
        "vertex_count": 4,
        "edges": [
            {"source": 0, "target": 1, "weight": 3.0},
            {"source": 0, "target": 2, "weight": 1.0},
            {"source": 1, "target": 3, "weight": 2.0},
            {"source": 1, "target": 2, "weight": 4.0},
            {"source": 2, "target": 3, "weight": 6.0}
        ],
        "source": 0,
        "destination": 3
    });
    let (status, allow_origin, json) = send(app(100), Method::POST, "/api/shortest-path", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(allow_origin.as_deref(), Some("*"));
    assert_eq!(json["path"], json!([0, 1, 3]));
    assert_eq!(json["total_cost"], json!(5.0));
    assert_eq!(json["distances"], json!([0.0, 3.0, 1.0, 5.0]));
}

#[tokio::test]
async fn test_router_enforces_vertex_limit() {
    let body = json!({"vertex_count": 101, "edges": [], "source": 0});
    let (status, _, json) = send(app(100), Method::POST, "/api/shortest-path", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_request");
}

#[tokio::test]
async fn test_router_rejects_malformed_json() {
    let body = json!({"edges": []});
    let (status, _, _) = send(app(100), Method::POST, "/api/shortest-path", Some(body)).await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_router_word_ladder() {
    let body = json!({"begin": "Cat", "end": "dog"});
    let (status, _, json) = send(app(100), Method::POST, "/api/word-ladder", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["found"], true);
    assert_eq!(json["ladder"], json!(["cat", "cot", "cog", "dog"]));

    let body = json!({"begin": "cat", "end": "cow"});
    let (status, _, json) = send(app(100), Method::POST, "/api/word-ladder", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["found"], false);
    assert_eq!(json["ladder"], json!([]));
}

#[tokio::test]
async fn test_router_dictionary_and_health() {
    let (status, _, json) = send(app(100), Method::GET, "/api/dictionary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["words"], 4);

    let (status, _, json) = send(app(100), Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_router_without_cors() {
    let config = ServerConfig {
        enable_cors: false,
        ..ServerConfig::default()
    };
    let app = build_app(Dictionary::new(), &config);
    let (status, allow_origin, _) = send(app, Method::GET, "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(allow_origin, None);
}

#[test]
fn test_dictionary_override_only_applies_from_env() {
    std::env::set_var(DICTIONARY_ENV, "/srv/words/english.txt");
    let defaults = ServerConfig::default();
    let from_env = ServerConfig::from_env();
    std::env::remove_var(DICTIONARY_ENV);

    assert_eq!(defaults.port, 3005);
    assert_eq!(defaults.dictionary_path, "words.txt");
    assert!(defaults.enable_cors);
    assert_eq!(from_env.dictionary_path, "/srv/words/english.txt");
    assert_eq!(from_env.max_vertices, defaults.max_vertices);
}
