pub mod test_helpers;

pub use test_helpers::*;

/// Base URL used by tests that generate shareable links.
pub const TEST_SHARE_BASE_URL: &str = "https://eventsify.app/event/";

/// Install a test-friendly tracing subscriber. Safe to call from every
/// test; only the first call wins.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .with_test_writer()
        .try_init();
}
