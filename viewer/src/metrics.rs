use lazy_static::lazy_static;
use prometheus::{Counter, Encoder, Histogram, HistogramOpts, Opts, Registry, TextEncoder};

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();
    pub static ref PAGE_REQUESTS_TOTAL: Counter = Counter::with_opts(Opts::new(
        "viewer_page_requests_total",
        "Total page fetches served"
    ))
    .unwrap();
    pub static ref COUNT_FAILURES_TOTAL: Counter = Counter::with_opts(Opts::new(
        "viewer_count_failures_total",
        "Total record count failures"
    ))
    .unwrap();
    pub static ref QUERY_FAILURES_TOTAL: Counter = Counter::with_opts(Opts::new(
        "viewer_query_failures_total",
        "Total windowed query failures"
    ))
    .unwrap();
    pub static ref QUERY_LATENCY_SECONDS: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "viewer_query_latency_seconds",
            "Time taken to count and fetch one page"
        )
        .buckets(vec![
            0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0
        ])
    )
    .unwrap();
}

pub fn init_metrics() -> prometheus::Result<()> {
    REGISTRY.register(Box::new(PAGE_REQUESTS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(COUNT_FAILURES_TOTAL.clone()))?;
    REGISTRY.register(Box::new(QUERY_FAILURES_TOTAL.clone()))?;
    REGISTRY.register(Box::new(QUERY_LATENCY_SECONDS.clone()))?;
    Ok(())
}

pub fn gather_metrics() -> anyhow::Result<String> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
