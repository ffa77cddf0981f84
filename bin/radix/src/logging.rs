use std::path::PathBuf;

use log::Dispatch;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt::{Layer, Subscriber},
    layer::SubscriberExt,
};

/// Stdout carries the identifiers, so the default level stays quiet.
///
/// Without `-v`, `RUST_LOG` decides the level and only falls back to warnings when unset.
fn create_filter(verbose: Option<u8>) -> EnvFilter {
    #[allow(clippy::wildcard_in_or_patterns)]
    let level_filter = match verbose {
        None => {
            return EnvFilter::builder().with_default_directive(LevelFilter::WARN.into()).from_env_lossy();
        }
        Some(0) => LevelFilter::WARN,
        Some(1) => LevelFilter::INFO,
        Some(2) => LevelFilter::DEBUG,
        Some(3) | _ => LevelFilter::TRACE,
    };

    EnvFilter::from_default_env().add_directive(level_filter.into())
}

pub fn generate(
    verbose: Option<u8>,
    dir: Option<PathBuf>,
) -> Result<(Dispatch, Option<WorkerGuard>), anyhow::Error> {
    let filter = create_filter(verbose);

    Ok(match dir {
        None => (
            Dispatch::new(Subscriber::builder().with_env_filter(filter).with_writer(std::io::stderr).finish()),
            None,
        ),
        Some(dir) => {
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("radix")
                .filename_suffix("log")
                .build(dir)?;

            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let file_logger = Layer::new().with_writer(non_blocking).with_ansi(false);
            let stderr_logger = Layer::new().with_writer(std::io::stderr);

            let collector = tracing_subscriber::registry().with(filter).with(file_logger).with(stderr_logger);

            (Dispatch::new(collector), Some(guard))
        }
    })
}
