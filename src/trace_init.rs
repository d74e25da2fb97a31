#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Send JSON span/event logs to `<log_dir>/ac-trace.jsonl`.
/// `RUST_LOG` overrides the default filter (debug for all three engine
/// crates). The first record states the active completion settings.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, "ac-trace.jsonl");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard); // flushed for the life of the host process

        tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(
                        "ac_engine=debug,ac_core=debug,ac_session=debug",
                    )
                }),
            )
            .init();

        let s = ac_core::settings::settings();
        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            mode = %s.completion.mode,
            min_prefix_len = s.completion.min_prefix_len,
            dropdown_max_results = s.dropdown.max_results,
            fuzzy_max_distance = s.fuzzy.max_distance,
            "completion tracing started"
        );
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}
