//! Prometheus metrics for suggestion lookups
//!
//! Metrics are created lazily and registered with [`PROMETHEUS_REGISTRY`] by
//! [`init_metrics`]. Unregistered metrics still record, they are simply not
//! exported.
//!
//! # Example
//! ```no_run
//! use autocomplete_suggest::metrics;
//!
//! metrics::init_metrics().expect("metrics registered once");
//! println!("{}", metrics::gather_metrics());
//! ```

use lazy_static::lazy_static;
use prometheus::{CounterVec, Histogram, HistogramOpts, Opts, Registry};

lazy_static! {
    /// Global Prometheus registry for all metrics
    pub static ref PROMETHEUS_REGISTRY: Registry = Registry::new();

    /// Total number of suggestion lookups
    ///
    /// Labels: outcome (matched, no_match, missing_key, failed)
    pub static ref SUGGEST_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new("requests_total", "Total number of suggestion lookups")
            .namespace("suggest"),
        &["outcome"]
    ).expect("Failed to create SUGGEST_REQUESTS_TOTAL metric");

    /// End-to-end lookup duration in seconds, store read included
    pub static ref SUGGEST_REQUEST_DURATION_SECONDS: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "request_duration_seconds",
            "Suggestion lookup duration in seconds"
        )
        .namespace("suggest")
        .buckets(vec![0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0])
    ).expect("Failed to create SUGGEST_REQUEST_DURATION_SECONDS metric");

    /// Size of serialized index payloads read from the store
    pub static ref SUGGEST_INDEX_SIZE_BYTES: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "index_size_bytes",
            "Size of serialized index payloads in bytes"
        )
        .namespace("suggest")
        .buckets(prometheus::exponential_buckets(1024.0, 4.0, 8)
            .expect("Failed to create SUGGEST_INDEX_SIZE_BYTES buckets"))
    ).expect("Failed to create SUGGEST_INDEX_SIZE_BYTES metric");
}

/// Register all metrics with the global registry
///
/// Fails if called twice, since Prometheus rejects duplicate registrations.
pub fn init_metrics() -> Result<(), prometheus::Error> {
    PROMETHEUS_REGISTRY.register(Box::new(SUGGEST_REQUESTS_TOTAL.clone()))?;
    PROMETHEUS_REGISTRY.register(Box::new(SUGGEST_REQUEST_DURATION_SECONDS.clone()))?;
    PROMETHEUS_REGISTRY.register(Box::new(SUGGEST_INDEX_SIZE_BYTES.clone()))?;

    tracing::info!("Prometheus metrics initialized successfully");
    Ok(())
}

/// Generate Prometheus text format metrics
pub fn gather_metrics() -> String {
    use prometheus::Encoder;
    let encoder = prometheus::TextEncoder::new();
    let metric_families = PROMETHEUS_REGISTRY.gather();
    let mut buffer = Vec::new();

    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
        return String::from("# Error encoding metrics\n");
    }

    String::from_utf8(buffer).unwrap_or_else(|e| {
        tracing::error!("Failed to convert metrics to string: {}", e);
        String::from("# Error converting metrics\n")
    })
}
