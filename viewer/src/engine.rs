use crate::errors::{Error, Result};
use crate::mapper::to_display;
use crate::metrics::{
    COUNT_FAILURES_TOTAL, PAGE_REQUESTS_TOTAL, QUERY_FAILURES_TOTAL, QUERY_LATENCY_SECONDS,
};
use crate::model::PageResult;
use crate::pagination::{total_pages, PageWindow};
use crate::store::{RecordStore, WindowQuery};
use std::future::Future;
use tokio::time::Instant;
use tracing::{debug, error, warn};

/// What to do when counting the records fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountPolicy {
    /// Report zero records and keep serving the page.
    #[default]
    DegradeToZero,
    /// Fail the request with [`Error::Count`].
    Propagate,
}

/// Turns page numbers into bounded, ordered reads against a [`RecordStore`].
#[derive(Debug)]
pub struct PageEngine<S> {
    store: S,
    count_policy: CountPolicy,
}

impl<S: RecordStore> PageEngine<S> {
    pub fn new(store: S, count_policy: CountPolicy) -> Self {
        Self {
            store,
            count_policy,
        }
    }

    /// Fetch one page of display records.
    ///
    /// Page numbers below 1 are served as page 1. A page past the end is
    /// empty, not an error. When `deadline` is set, both store calls are
    /// dropped once it passes and the request fails with
    /// [`Error::DeadlineExceeded`].
    pub async fn fetch_page(
        &self,
        page_number: i64,
        deadline: Option<Instant>,
    ) -> Result<PageResult> {
        PAGE_REQUESTS_TOTAL.inc();
        let start = Instant::now();
        let window = PageWindow::for_page(page_number);

        let counted = with_deadline(deadline, "count", self.store.count_records()).await?;
        let total_records = match counted {
            Ok(count) => count,
            Err(e) => {
                COUNT_FAILURES_TOTAL.inc();
                match self.count_policy {
                    CountPolicy::DegradeToZero => {
                        warn!("Record count failed, reporting zero records: {}", e);
                        0
                    }
                    CountPolicy::Propagate => {
                        error!("Record count failed: {}", e);
                        return Err(Error::Count(Box::new(e)));
                    }
                }
            }
        };

        let query = WindowQuery {
            skip: window.skip,
            limit: window.limit,
        };
        let records = with_deadline(deadline, "query", self.store.fetch_window(&query))
            .await?
            .map_err(|e| {
                QUERY_FAILURES_TOTAL.inc();
                error!("Page query failed (page={}): {}", window.page, e);
                Error::Query(Box::new(e))
            })?;

        let elapsed = start.elapsed().as_secs_f64();
        QUERY_LATENCY_SECONDS.observe(elapsed);
        debug!(
            "Fetched page {} ({} records, skip={}) in {:.3}s",
            window.page,
            records.len(),
            window.skip,
            elapsed
        );

        Ok(PageResult {
            items: records.into_iter().map(to_display).collect(),
            total_pages: total_pages(total_records),
            page_number: window.page,
            total_records,
        })
    }
}

async fn with_deadline<F: Future>(
    deadline: Option<Instant>,
    stage: &str,
    fut: F,
) -> Result<F::Output> {
    match deadline {
        Some(deadline) => tokio::time::timeout_at(deadline, fut).await.map_err(|_| {
            QUERY_FAILURES_TOTAL.inc();
            warn!("Page {} exceeded the request deadline", stage);
            Error::DeadlineExceeded
        }),
        None => Ok(fut.await),
    }
}
