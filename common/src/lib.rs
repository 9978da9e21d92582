pub mod artifact;
pub mod crypto;
pub mod error;
pub mod render;

pub use artifact::{
    ArtifactKind, EncodedArtifact, PersistedKeys, artifact_paths, encode_and_persist,
};
pub use crypto::{KeyPair, RSA_KEY_SIZE, RSA_PUBLIC_EXPONENT, generate_keypair};
pub use error::{CommonError, Result};
pub use render::{render_grant_sql, render_pkcs8_json, render_secret_json};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber. `RUST_LOG` takes precedence over `log_level`.
///
/// With `log_dir` set, output goes to a daily rolling file and the returned
/// guard must be kept alive until exit. Otherwise a compact, timestamp-free
/// layer writes to stderr, which keeps stdout free for rendered results.
pub fn init_tracing(log_dir: Option<&str>, log_file: &str, log_level: &str) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let registry = tracing_subscriber::registry().with(filter);

    match log_dir {
        Some(log_dir) => {
            let file_appender = tracing_appender::rolling::daily(log_dir, log_file);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            registry
                .with(
                    fmt::layer()
                        .with_writer(non_blocking)
                        .with_target(true)
                        .with_line_number(true)
                        .with_ansi(false),
                )
                .init();
            Some(guard)
        }
        None => {
            registry
                .with(
                    fmt::layer()
                        .compact()
                        .without_time()
                        .with_writer(std::io::stderr)
                        .with_target(false),
                )
                .init();
            None
        }
    }
}
