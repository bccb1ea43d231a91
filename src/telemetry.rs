use tracing_subscriber::{
    fmt::{format::FmtSpan, SubscriberBuilder},
    EnvFilter,
};

/// Default filter for the storefront binary when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,storefront=debug,actix_server=warn";

/// Install the global subscriber.
///
/// Page-load spans are reported when they close so every render logs its
/// duration alongside the catalog fetch events it contained.
pub fn init_tracing(default_filter: &str) -> Result<(), anyhow::Error> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {}", e))
}
