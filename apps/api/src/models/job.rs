use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A job posting row from the `"Job"` table. Written by the external
/// ingestion process; read-only here. Column names are camelCase in the
/// schema, and the API serializes them back out unchanged.
///
/// Every non-key column is nullable in the ingestion schema, so everything
/// except `id` decodes as an Option and serializes as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct JobRow {
    pub id: i32,
    /// Source website the posting was ingested from, e.g. "ca.indeed.com".
    pub origin: Option<String>,
    /// The posting's identifier on its origin site.
    pub origin_id: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_details: Option<String>,
    pub qualifications: Option<String>,
    pub reviews: Option<i32>,
    pub stars: Option<f64>,
    pub job_description: Option<String>,
    pub benefits: Option<String>,
    pub hiring_insights: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
