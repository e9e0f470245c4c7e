use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Routes `log` records and tracing spans to the test output.
///
/// Filter with `RUST_LOG`, e.g. `RUST_LOG=vizmath=debug`.
pub fn init_logging() {
    INIT.call_once(|| {
        tracing_log::LogTracer::init().expect("log tracer already installed");
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("global subscriber already installed");
    });
}
