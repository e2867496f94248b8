//! Match enrichment and ranking — the core of the service.
//!
//! Merges vector-index candidates with their job rows, derives a display URL
//! for postings ingested from Indeed, and orders the result by descending
//! similarity. Pure; all network work happens upstream.

use serde::Serialize;

use crate::models::job::JobRow;
use crate::vector_index::MatchCandidate;

const INDEED_ORIGIN: &str = "ca.indeed.com";

/// A fully enriched match: every job column plus the similarity score and,
/// for Indeed postings, a viewable URL. Built per request, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct JobMatch {
    #[serde(flatten)]
    pub job: JobRow,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Merges candidates with their fetched rows and sorts by descending score.
///
/// Candidates without a matching row are dropped. The linear search is
/// O(n·m), fine at top-K scale. Sort is stable, so equal scores keep the
/// index's original order.
pub fn merge_and_rank(candidates: Vec<MatchCandidate>, jobs: Vec<JobRow>) -> Vec<JobMatch> {
    let mut merged: Vec<JobMatch> = candidates
        .into_iter()
        .filter_map(|candidate| {
            jobs.iter().find(|job| job.id == candidate.id).map(|job| JobMatch {
                url: display_url(job),
                job: job.clone(),
                score: candidate.score,
            })
        })
        .collect();

    merged.sort_by(|a, b| b.score.total_cmp(&a.score));
    merged
}

/// Indeed postings get a direct view link; other origins have none.
fn display_url(job: &JobRow) -> Option<String> {
    if job.origin.as_deref() != Some(INDEED_ORIGIN) {
        return None;
    }
    job.origin_id
        .as_deref()
        .map(|jk| format!("https://ca.indeed.com/viewjob?jk={jk}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: i32, origin: &str, origin_id: &str) -> JobRow {
        JobRow {
            id,
            origin: Some(origin.to_string()),
            origin_id: Some(origin_id.to_string()),
            title: Some(format!("Job {id}")),
            company: Some("Acme".to_string()),
            location: Some("Toronto, ON".to_string()),
            job_details: Some("Full-time".to_string()),
            qualifications: Some("Rust".to_string()),
            reviews: Some(12),
            stars: Some(4.2),
            job_description: Some("Build things".to_string()),
            benefits: None,
            hiring_insights: None,
            created_at: Some("2024-01-01T00:00:00Z".to_string()),
            updated_at: Some("2024-01-02T00:00:00Z".to_string()),
        }
    }

    fn sparse_job(id: i32) -> JobRow {
        JobRow {
            id,
            origin: None,
            origin_id: None,
            title: None,
            company: None,
            location: None,
            job_details: None,
            qualifications: None,
            reviews: None,
            stars: None,
            job_description: None,
            benefits: None,
            hiring_insights: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn candidate(id: i32, score: f64) -> MatchCandidate {
        MatchCandidate { id, score }
    }

    #[test]
    fn test_sorted_by_descending_score() {
        let candidates = vec![candidate(1, 0.9), candidate(2, 0.95)];
        let jobs = vec![job(1, "linkedin.com", "a"), job(2, "linkedin.com", "b")];

        let ranked = merge_and_rank(candidates, jobs);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].job.id, 2);
        assert_eq!(ranked[1].job.id, 1);
        assert!(ranked[0].score >= ranked[1].score);
    }

    #[test]
    fn test_unmatched_candidate_is_dropped() {
        let candidates = vec![candidate(1, 0.9), candidate(99, 0.8)];
        let jobs = vec![job(1, "linkedin.com", "a")];

        let ranked = merge_and_rank(candidates, jobs);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].job.id, 1);
    }

    #[test]
    fn test_output_no_longer_than_matching_rows() {
        let candidates = vec![candidate(1, 0.9), candidate(2, 0.8), candidate(3, 0.7)];
        let jobs = vec![job(2, "x", "b")];

        assert_eq!(merge_and_rank(candidates, jobs).len(), 1);
    }

    #[test]
    fn test_indeed_origin_gets_url() {
        let candidates = vec![candidate(5, 0.5)];
        let jobs = vec![job(5, "ca.indeed.com", "abc123")];

        let ranked = merge_and_rank(candidates, jobs);

        assert_eq!(
            ranked[0].url.as_deref(),
            Some("https://ca.indeed.com/viewjob?jk=abc123")
        );
    }

    #[test]
    fn test_other_origins_get_no_url() {
        let candidates = vec![candidate(5, 0.5)];
        let jobs = vec![job(5, "linkedin.com", "abc123")];

        let ranked = merge_and_rank(candidates, jobs);

        assert!(ranked[0].url.is_none());
        // and the field is absent from the JSON, not null
        let value = serde_json::to_value(&ranked[0]).unwrap();
        assert!(value.get("url").is_none());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let candidates = vec![candidate(1, 0.5), candidate(2, 0.5), candidate(3, 0.5)];
        let jobs = vec![job(3, "x", "c"), job(1, "x", "a"), job(2, "x", "b")];

        let ranked = merge_and_rank(candidates, jobs);

        let ids: Vec<i32> = ranked.iter().map(|m| m.job.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_merged_fields_equal_row_fields() {
        let row = job(7, "ca.indeed.com", "xyz");
        let ranked = merge_and_rank(vec![candidate(7, 0.42)], vec![row.clone()]);

        assert_eq!(ranked[0].job, row);

        let value = serde_json::to_value(&ranked[0]).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["originId"], "xyz");
        assert_eq!(value["title"], "Job 7");
        assert_eq!(value["score"], 0.42);
        assert_eq!(value["createdAt"], "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_highest_scoring_unmatched_candidate_does_not_displace_output() {
        let candidates = vec![candidate(1, 0.9), candidate(2, 0.95), candidate(77, 0.99)];
        let jobs = vec![job(1, "ca.indeed.com", "a"), job(2, "ca.indeed.com", "b")];

        let ranked = merge_and_rank(candidates, jobs);

        let ids: Vec<i32> = ranked.iter().map(|m| m.job.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(
            ranked[0].url.as_deref(),
            Some("https://ca.indeed.com/viewjob?jk=b")
        );
    }

    #[test]
    fn test_row_with_null_columns_still_ranks() {
        let ranked = merge_and_rank(vec![candidate(9, 0.3)], vec![sparse_job(9)]);

        assert_eq!(ranked.len(), 1);
        assert!(ranked[0].url.is_none());

        let value = serde_json::to_value(&ranked[0]).unwrap();
        assert_eq!(value["id"], 9);
        assert!(value["title"].is_null());
        assert!(value["createdAt"].is_null());
        assert_eq!(value["score"], 0.3);
    }

    #[test]
    fn test_indeed_origin_without_origin_id_gets_no_url() {
        let mut row = sparse_job(4);
        row.origin = Some("ca.indeed.com".to_string());

        let ranked = merge_and_rank(vec![candidate(4, 0.6)], vec![row]);
        assert!(ranked[0].url.is_none());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(merge_and_rank(vec![], vec![]).is_empty());
        assert!(merge_and_rank(vec![candidate(1, 0.9)], vec![]).is_empty());
        assert!(merge_and_rank(vec![], vec![job(1, "x", "a")]).is_empty());
    }
}
