use std::sync::Once;

/// Initialize the global tracing subscriber once (used by tests that run with `RUST_LOG`).
///
/// Logs go to the test's stdout so `cargo test -- --nocapture` shows them
/// next to the assertion output. ureq's per-request noise is filtered out.
pub fn init_tracing_from_env() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let env_filter = tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("ureq=warn".parse().unwrap())
            .add_directive("rustls=warn".parse().unwrap());

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_test_writer();
        let _ = subscriber.try_init();
    });
}
