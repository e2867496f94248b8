//! Vector index client — top-K nearest-neighbor queries against a managed
//! Pinecone-style index over the HTTP API.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::AppError;

/// How many nearest neighbors each résumé query asks for.
pub const DEFAULT_TOP_K: u32 = 10;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
    vector: &'a [f32],
    top_k: u32,
    include_values: bool,
    include_metadata: bool,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<RawMatch>,
}

#[derive(Debug, Deserialize)]
struct RawMatch {
    id: String,
    score: f64,
}

/// A candidate returned by the index: a job id and its similarity score
/// (higher = more similar).
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCandidate {
    pub id: i32,
    pub score: f64,
}

#[derive(Clone)]
pub struct PineconeClient {
    client: Client,
    api_key: String,
    index_host: String,
}

impl PineconeClient {
    pub fn new(api_key: String, index_host: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            index_host,
        }
    }

    /// Queries the index for the `top_k` vectors nearest to `vector`.
    pub async fn query(
        &self,
        vector: &[f32],
        top_k: u32,
    ) -> Result<Vec<MatchCandidate>, AppError> {
        let url = format!("{}/query", self.index_host.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .header("Api-Key", &self.api_key)
            .json(&QueryRequest {
                vector,
                top_k,
                include_values: false,
                include_metadata: false,
            })
            .send()
            .await
            .map_err(|e| AppError::VectorIndex(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::VectorIndex(format!(
                "index query returned {status}: {body}"
            )));
        }

        let parsed: QueryResponse = response
            .json()
            .await
            .map_err(|e| AppError::VectorIndex(e.to_string()))?;

        let candidates = parse_candidates(parsed);
        debug!("Vector index returned {} candidates", candidates.len());
        Ok(candidates)
    }
}

/// Index ids are strings on the wire; job ids are integers. Entries whose id
/// does not parse are dropped here with a warning.
fn parse_candidates(response: QueryResponse) -> Vec<MatchCandidate> {
    response
        .matches
        .into_iter()
        .filter_map(|m| match m.id.parse::<i32>() {
            Ok(id) => Some(MatchCandidate { id, score: m.score }),
            Err(_) => {
                warn!("Dropping index match with non-numeric id '{}'", m.id);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_response() {
        let body = r#"{
            "matches": [
                {"id": "42", "score": 0.87},
                {"id": "7", "score": 0.81}
            ],
            "namespace": ""
        }"#;
        let parsed: QueryResponse = serde_json::from_str(body).unwrap();
        let candidates = parse_candidates(parsed);
        assert_eq!(
            candidates,
            vec![
                MatchCandidate { id: 42, score: 0.87 },
                MatchCandidate { id: 7, score: 0.81 },
            ]
        );
    }

    #[test]
    fn test_non_numeric_ids_are_dropped() {
        let body = r#"{"matches": [{"id": "job-abc", "score": 0.9}, {"id": "3", "score": 0.5}]}"#;
        let parsed: QueryResponse = serde_json::from_str(body).unwrap();
        let candidates = parse_candidates(parsed);
        assert_eq!(candidates, vec![MatchCandidate { id: 3, score: 0.5 }]);
    }

    #[test]
    fn test_missing_matches_field_is_empty() {
        let parsed: QueryResponse = serde_json::from_str("{}").unwrap();
        assert!(parse_candidates(parsed).is_empty());
    }
}
