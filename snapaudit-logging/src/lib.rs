use std::env;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{prelude::*, registry, EnvFilter};

/// Initializes the global tracing subscriber based on environment variables.
///
/// `LOG_LEVEL` sets the default filter (overridden by `RUST_LOG`),
/// `LOG_OUTPUT` selects `console` (default) or `file`, and `LOG_FILE_PATH`
/// names the log file for file output. The returned guard must be held for
/// the lifetime of the process so buffered file output is flushed.
pub fn init_subscriber() -> Option<WorkerGuard> {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_output = env::var("LOG_OUTPUT").unwrap_or_else(|_| "console".to_string());
    let log_file_path =
        env::var("LOG_FILE_PATH").unwrap_or_else(|_| "/tmp/snapaudit.log".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&log_level))
        .add_directive("hyper=warn".parse().unwrap())
        .add_directive("aws_config=warn".parse().unwrap())
        .add_directive("aws_smithy_runtime=warn".parse().unwrap());

    let subscriber = registry().with(env_filter);

    if log_output == "file" {
        let log_path = Path::new(&log_file_path);
        let log_dir = log_path.parent().unwrap_or_else(|| Path::new("/tmp"));
        let log_filename = log_path.file_name().unwrap_or("snapaudit.log".as_ref());

        let file_appender = tracing_appender::rolling::daily(log_dir, log_filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false);
        subscriber.with(fmt_layer).init();
        Some(guard)
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
        subscriber.with(fmt_layer).init();
        None
    }
}
