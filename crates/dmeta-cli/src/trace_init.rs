#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Write `dmeta_core` spans and events as JSON lines under `log_dir`.
/// Returns whether a subscriber is installed.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> bool {
    INIT.call_once(|| {
        // Blocking writer: dmtool exits right after the command, so there is
        // no worker guard to keep alive.
        let file_appender = tracing_appender::rolling::never(log_dir, "dmtool-trace.jsonl");

        tracing_subscriber::fmt()
            .json()
            .with_writer(file_appender)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("dmeta_core=debug")),
            )
            .init();
    });
    true
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(log_dir: &std::path::Path) -> bool {
    eprintln!(
        "warning: --trace-dir {} ignored: dmtool was built without the `trace` feature",
        log_dir.display()
    );
    false
}
