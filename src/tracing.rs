use std::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn start_qint_tracing_subscriber() {
    // Get the logging filter level from the RUST_LOG environment variable
    //   - INFO messages are logged by default
    //   - If RUST_LOG=debug, DEBUG messages will also be included
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Everything goes to stderr, stdout is reserved for the tables
    let stderr_log = fmt::layer().with_writer(io::stderr).with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_log).init()
}
