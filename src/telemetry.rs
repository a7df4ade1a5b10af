use tracing::subscriber::set_global_default;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

/// Install the global tracing stack: bunyan-formatted JSON lines on stdout,
/// filtered through `RUST_LOG` with an `info` default.
///
/// The returned guard flushes the non-blocking writer on drop and must be
/// held for the process lifetime.
pub fn init(name: &str) -> WorkerGuard {
    LogTracer::init().expect("Failed to install the log-to-tracing bridge");

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(name.into(), writer));
    set_global_default(subscriber).expect("Failed to set the global tracing subscriber");
    guard
}
