use std::sync::Once;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "flowcast_core=info";

/// Initializes the global tracing subscriber with sensible defaults.
///
/// `RUST_LOG` is honoured first; `directive` (usually the configured
/// `log_filter`) is added on top, falling back to `flowcast_core=info`.
pub fn init_tracing(directive: Option<&str>) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

        let directive = directive
            .and_then(|raw| raw.parse::<Directive>().ok())
            .or_else(|| DEFAULT_DIRECTIVE.parse().ok());
        let filter = match directive {
            Some(directive) => EnvFilter::from_default_env().add_directive(directive),
            None => EnvFilter::from_default_env(),
        };

        if let Err(error) = fmt().with_env_filter(filter).try_init() {
            tracing::debug!(%error, "Global tracing subscriber already installed");
        }
    });
}
