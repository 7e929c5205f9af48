use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use ordered_float::OrderedFloat;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::{DirectedGraph, Graph, MutableGraph};
use crate::ladder::{Dictionary, WordLadder};
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Largest graph accepted when no limit is configured
pub const DEFAULT_MAX_VERTICES: usize = 1_000_000;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub dictionary: Arc<Dictionary>,
    /// Upper bound on `vertex_count` in shortest path requests
    pub max_vertices: usize,
}

impl AppState {
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary: Arc::new(dictionary),
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }

    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/shortest-path", post(shortest_path))
        .route("/api/word-ladder", post(word_ladder))
        .route("/api/dictionary", get(dictionary_info))
        .route("/api/health", get(health_check))
}

/// Run Dijkstra on a graph submitted with the request
pub async fn shortest_path(
    State(state): State<AppState>,
    Json(request): Json<ShortestPathRequest>,
) -> Result<Json<ShortestPathResponse>, ApiError> {
    if request.vertex_count > state.max_vertices {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                "invalid_request",
                format!(
                    "vertex_count {} exceeds the limit of {}",
                    request.vertex_count, state.max_vertices
                ),
            )),
        ));
    }

    let graph = convert_web_graph_to_rust(&request).map_err(bad_request)?;

    if let Some(destination) = request.destination {
        if !graph.has_vertex(destination) {
            return Err(bad_request(Error::InvalidVertex(destination)));
        }
    }

    let start_time = Instant::now();
    let dijkstra = Dijkstra::new();
    let result = dijkstra
        .compute_shortest_paths(&graph, request.source)
        .map_err(bad_request)?;
    let execution_time = start_time.elapsed();

    let (path, total_cost) = match request.destination {
        Some(destination) => (
            result.extract_path(destination),
            result.distance(destination).map(OrderedFloat::into_inner),
        ),
        None => (Vec::new(), None),
    };

    log::info!(
        "shortest path from {} on {} vertices: {} reachable in {:?}",
        request.source,
        graph.vertex_count(),
        result.reachable_count(),
        execution_time
    );

    Ok(Json(ShortestPathResponse {
        execution_id: Uuid::new_v4(),
        computed_at: Utc::now(),
        algorithm: <Dijkstra as ShortestPathAlgorithm<OrderedFloat<f64>, DirectedGraph<OrderedFloat<f64>>>>::name(&dijkstra).to_string(),
        source: result.source,
        distances: result
            .distances
            .iter()
            .map(|d| d.map(OrderedFloat::into_inner))
            .collect(),
        predecessors: result.predecessors.clone(),
        destination: request.destination,
        path,
        total_cost,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
    }))
}

/// Search the server dictionary for a word ladder
pub async fn word_ladder(
    State(state): State<AppState>,
    Json(request): Json<WordLadderRequest>,
) -> Json<WordLadderResponse> {
    let start_time = Instant::now();
    let outcome = WordLadder::new().try_generate(&request.begin, &request.end, &state.dictionary);
    let execution_time = start_time.elapsed();

    let (ladder, message) = match outcome {
        Ok(ladder) => (ladder, None),
        Err(err) => {
            log::warn!("word ladder {} -> {}: {}", request.begin, request.end, err);
            (Vec::new(), Some(err.to_string()))
        }
    };

    Json(WordLadderResponse {
        execution_id: Uuid::new_v4(),
        computed_at: Utc::now(),
        begin: request.begin,
        end: request.end,
        found: !ladder.is_empty(),
        ladder,
        message,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
    })
}

/// Size of the loaded dictionary
pub async fn dictionary_info(State(state): State<AppState>) -> Json<DictionaryInfo> {
    Json(DictionaryInfo {
        words: state.dictionary.len(),
    })
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

fn convert_web_graph_to_rust(
    request: &ShortestPathRequest,
) -> Result<DirectedGraph<OrderedFloat<f64>>, Error> {
    let mut graph = DirectedGraph::with_capacity(request.vertex_count);
    for edge in &request.edges {
        if !edge.weight.is_finite() {
            return Err(Error::InvalidEdge(edge.source, edge.target));
        }
        graph.add_edge(edge.source, edge.target, OrderedFloat(edge.weight))?;
    }
    Ok(graph)
}

fn bad_request(err: Error) -> ApiError {
    let code = match &err {
        Error::InvalidVertex(_) | Error::SourceNotFound(_) => "invalid_vertex",
        Error::InvalidEdge(..) => "invalid_edge",
        Error::NegativeWeight { .. } => "negative_weight",
        _ => "invalid_request",
    };
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(code, err.to_string())))
}
