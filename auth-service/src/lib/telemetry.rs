use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "auth_service=debug";

/// Install the global tracing subscriber for the hosting process.
///
/// Honours `RUST_LOG` and falls back to `auth_service=debug`.
///
/// # Errors
/// * `TryInitError` - A global subscriber is already installed
pub fn init_tracing() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
