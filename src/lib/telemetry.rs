//! Telemetry initialization and client run span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Filter applied when `RUST_LOG` is unset; stdout belongs to the client.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Initialize `tracing` and format developer logs on stderr.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of one client run.
pub struct ClientRunSpan {
    span: Span,
    started_at: Instant,
}

impl ClientRunSpan {
    /// Start a client run span.
    pub fn start(environment: &str, program: &str, credential_count: usize) -> Self {
        let span = info_span!(
            target: "supernova::runtime",
            "client_run",
            environment,
            program,
            credential_count
        );
        Self {
            span,
            started_at: Instant::now(),
        }
    }

    /// Close the span while recording the exit code.
    pub fn finish(self, exit_code: Option<i32>) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "supernova::runtime",
            exit_code = exit_code,
            elapsed_ms = elapsed_ms,
            "Client exited"
        );
    }
}
