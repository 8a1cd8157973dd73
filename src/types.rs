use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of attempting to fetch one URL.
///
/// Exactly one outcome is produced per submitted URL. Non-200 responses and
/// transport faults are ordinary values here, not errors to propagate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FetchOutcome {
    /// Completed with status 200; `body` is the decoded response text.
    Success { url: String, body: String },
    /// Completed with any other status code.
    HttpError { url: String, status: u16 },
    /// Did not complete: timeout, connection, protocol, or decoding failure.
    TransportError { url: String, reason: String },
}

impl FetchOutcome {
    pub fn url(&self) -> &str {
        match self {
            FetchOutcome::Success { url, .. }
            | FetchOutcome::HttpError { url, .. }
            | FetchOutcome::TransportError { url, .. } => url,
        }
    }
}

/// Per-URL extraction result. The row exists even when no address was found;
/// an empty `emails` renders as an empty cell in the output table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionRecord {
    pub url: String,
    pub emails: Vec<String>,
}

/// Per-URL failure result with a human-readable reason
/// (`"HTTP 404"`, `"timed out after 10s"`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectionRecord {
    pub url: String,
    pub reason: String,
}

/// The two disjoint outcome collections of one pipeline run.
///
/// Invariant: every URL submitted to the pipeline appears in exactly one of
/// the two collections, so `extracted.len() + rejected.len()` equals the
/// number of submitted URLs. Order within each collection is completion
/// order, not input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub extracted: Vec<ExtractionRecord>,
    pub rejected: Vec<RejectionRecord>,
}

impl ResultSet {
    pub fn total(&self) -> usize {
        self.extracted.len() + self.rejected.len()
    }
}

/// Machine-readable summary printed to stdout after a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub urls_loaded: usize,
    pub extracted: usize,
    pub rejected: usize,
    /// Path of the extraction table, when one was written.
    pub output: Option<String>,
    /// Path of the rejection table, when one was written.
    pub rejected_output: Option<String>,
}
