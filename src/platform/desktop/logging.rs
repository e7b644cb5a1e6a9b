use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_LOG_FILTER: &str = "estoque=info";

/// Installs the stdout subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = default_env_filter();

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init();

    if let Err(err) = installed {
        eprintln!("tracing already initialized: {err}");
    }
}

/// `RUST_LOG` when it parses, the crate default otherwise.
fn default_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}
