use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Install a stderr-writing subscriber once per test binary so that
/// `tracing` events emitted by the search (cache hits, cutoffs, best-move
/// updates) show up when a test fails. Respects `RUST_LOG`; defaults to
/// `warn`.
pub fn init_subscriber() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
    });
}
