use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An edge as submitted by API clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

/// Parameters for a shortest path query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortestPathRequest {
    pub vertex_count: usize,
    #[serde(default)]
    pub edges: Vec<WebEdge>,
    pub source: usize,
    #[serde(default)]
    pub destination: Option<usize>,
}

/// Response containing shortest path results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortestPathResponse {
    pub execution_id: Uuid,
    pub computed_at: DateTime<Utc>,
    pub algorithm: String,
    pub source: usize,
    /// `None` marks an unreachable vertex
    pub distances: Vec<Option<f64>>,
    pub predecessors: Vec<Option<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<usize>,
    /// Empty when no destination was requested or it is unreachable
    pub path: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    pub execution_time_ms: f64,
}

/// Parameters for a word ladder query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordLadderRequest {
    pub begin: String,
    pub end: String,
}

/// Response containing a word ladder. A failed search is still a response:
/// `found` is false, `ladder` is empty and `message` says why.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordLadderResponse {
    pub execution_id: Uuid,
    pub computed_at: DateTime<Utc>,
    pub begin: String,
    pub end: String,
    pub ladder: Vec<String>,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub execution_time_ms: f64,
}

/// Dictionary statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryInfo {
    pub words: usize,
}

/// Error response for API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            details: None,
        }
    }
}
