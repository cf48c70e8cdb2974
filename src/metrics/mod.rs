//! Prometheus metrics for grepctx
//!
//! Counters and histograms for the search pipeline. They are process-local and
//! reset on restart; the MCP `stats` tool and `grepctx search --metrics`
//! render them.

use lazy_static::lazy_static;
use prometheus::{Counter, Encoder, Histogram, HistogramOpts, Opts, Registry, TextEncoder};

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // ============================================================================
    // Query metrics
    // ============================================================================

    /// Total number of queries handled
    pub static ref QUERIES: Counter = Counter::with_opts(
        Opts::new(
            "grepctx_queries_total",
            "Total number of queries handled"
        )
    ).expect("Failed to create QUERIES counter");

    /// End-to-end query latency in seconds
    pub static ref QUERY_LATENCY: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "grepctx_query_latency_seconds",
            "End-to-end query latency in seconds"
        ).buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 30.0])
    ).expect("Failed to create QUERY_LATENCY histogram");

    /// Number of sections returned per query
    pub static ref SECTIONS_RETURNED: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "grepctx_sections_returned",
            "Number of sections returned per query"
        ).buckets(vec![0.0, 1.0, 5.0, 10.0, 50.0, 100.0, 500.0])
    ).expect("Failed to create SECTIONS_RETURNED histogram");

    // ============================================================================
    // Search backend metrics
    // ============================================================================

    /// Searches that failed and were reported as empty
    pub static ref SEARCH_FAILURES: Counter = Counter::with_opts(
        Opts::new(
            "grepctx_search_failures_total",
            "Searches that failed and were reported as empty"
        )
    ).expect("Failed to create SEARCH_FAILURES counter");

    /// Searches that hit the deadline
    pub static ref SEARCH_TIMEOUTS: Counter = Counter::with_opts(
        Opts::new(
            "grepctx_search_timeouts_total",
            "Searches that hit the deadline"
        )
    ).expect("Failed to create SEARCH_TIMEOUTS counter");

    // ============================================================================
    // Symbol extraction metrics
    // ============================================================================

    /// Files whose definitions were extracted
    pub static ref FILES_PARSED: Counter = Counter::with_opts(
        Opts::new(
            "grepctx_files_parsed_total",
            "Files whose definitions were extracted"
        )
    ).expect("Failed to create FILES_PARSED counter");

    /// Files of a supported language that could not be parsed
    pub static ref PARSE_FAILURES: Counter = Counter::with_opts(
        Opts::new(
            "grepctx_parse_failures_total",
            "Files of a supported language that could not be parsed"
        )
    ).expect("Failed to create PARSE_FAILURES counter");
}

/// Register all metrics with the global registry.
///
/// Call once at startup. Panics if called twice.
pub fn register_metrics() {
    REGISTRY
        .register(Box::new(QUERIES.clone()))
        .expect("Failed to register QUERIES");
    REGISTRY
        .register(Box::new(QUERY_LATENCY.clone()))
        .expect("Failed to register QUERY_LATENCY");
    REGISTRY
        .register(Box::new(SECTIONS_RETURNED.clone()))
        .expect("Failed to register SECTIONS_RETURNED");
    REGISTRY
        .register(Box::new(SEARCH_FAILURES.clone()))
        .expect("Failed to register SEARCH_FAILURES");
    REGISTRY
        .register(Box::new(SEARCH_TIMEOUTS.clone()))
        .expect("Failed to register SEARCH_TIMEOUTS");
    REGISTRY
        .register(Box::new(FILES_PARSED.clone()))
        .expect("Failed to register FILES_PARSED");
    REGISTRY
        .register(Box::new(PARSE_FAILURES.clone()))
        .expect("Failed to register PARSE_FAILURES");
}

/// Gather all metrics and encode them in Prometheus text format.
///
/// Returns an empty string if encoding fails.
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();

    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
        return String::new();
    }

    String::from_utf8(buffer).unwrap_or_else(|e| {
        tracing::error!("Metrics contained invalid UTF-8: {}", e);
        String::new()
    })
}
