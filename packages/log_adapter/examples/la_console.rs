//! Routes the same events to the console target and to `tracing`.
#![allow(
    missing_docs,
    reason = "No need for API documentation in example code"
)]

use log_adapter::{Level, LogAdapter, TracingTarget, WriterTarget};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let console = LogAdapter::console();
    console.info("console adapter ready");
    console.warning_with("queue is getting long", &[17, 23, 42]);

    // Only errors and worse go to stderr; everything is forwarded to tracing.
    let mut logger = LogAdapter::new();
    logger.subscribe(Level::Error, WriterTarget::new(std::io::stderr()));
    logger.subscribe(Level::Fatal, WriterTarget::new(std::io::stderr()));
    logger.subscribe_all(TracingTarget);

    logger.debug("cache warmed");
    logger.error_with("request failed", &("GET", "/health", 503));
    logger.fatal("shutting down");
}
