mod tests;

use crate::extract::extract_emails;
use crate::fetch::Fetcher;
use crate::types::{ExtractionRecord, FetchOutcome, RejectionRecord, ResultSet};
use futures_util::stream::{self, StreamExt};
use tracing::{error, info};

/// One per-URL result, ready to be partitioned at the barrier.
enum Record {
    Extracted(ExtractionRecord),
    Rejected(RejectionRecord),
}

/// Fetch every URL concurrently and fold the outcomes into a result set.
///
/// `concurrency` caps the number of in-flight requests; `None` dispatches
/// every URL at once. Each task returns its own record, so there is no
/// shared mutable state to guard. The call returns only after every fetch
/// has resolved; stragglers are never cancelled. Records accumulate in
/// completion order, and every submitted URL lands in exactly one of the
/// two collections.
pub async fn run(urls: Vec<String>, fetcher: &Fetcher, concurrency: Option<usize>) -> ResultSet {
    let limit = concurrency.unwrap_or_else(|| urls.len()).max(1);

    let records: Vec<Record> = stream::iter(urls)
        .map(|url| process_url(fetcher, url))
        .buffer_unordered(limit)
        .collect()
        .await;

    let mut results = ResultSet::default();
    for record in records {
        match record {
            Record::Extracted(r) => results.extracted.push(r),
            Record::Rejected(r) => results.rejected.push(r),
        }
    }
    results
}

/// Fetch one URL and translate the outcome into a record. HTTP and
/// transport failures are expected outcomes here, never panics.
async fn process_url(fetcher: &Fetcher, url: String) -> Record {
    match fetcher.fetch(&url).await {
        FetchOutcome::Success { url, body } => {
            let emails = extract_emails(&body);
            info!("Successfully processed {}", url);
            Record::Extracted(ExtractionRecord { url, emails })
        }
        FetchOutcome::HttpError { url, status } => {
            error!("HTTP error {} for URL: {}", status, url);
            Record::Rejected(RejectionRecord {
                url,
                reason: format!("HTTP {}", status),
            })
        }
        FetchOutcome::TransportError { url, reason } => {
            error!("Error processing {}: {}", url, reason);
            Record::Rejected(RejectionRecord { url, reason })
        }
    }
}
