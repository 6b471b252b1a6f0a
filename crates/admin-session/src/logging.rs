//! Tracing subscriber setup
//!
//! Native builds log to stderr filtered by `RUST_LOG`, falling back to the
//! given level. Browser builds write to the devtools console.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Later calls are ignored.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_tracing(default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init();
}

/// Install the global subscriber. Later calls are ignored.
#[cfg(target_arch = "wasm32")]
pub fn init_tracing(default_level: &str) {
    use tracing_subscriber::filter::LevelFilter;

    let level = default_level.parse().unwrap_or(LevelFilter::INFO);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(tracing_web::MakeWebConsoleWriter::new());

    let _ = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(level)
        .try_init();
}
