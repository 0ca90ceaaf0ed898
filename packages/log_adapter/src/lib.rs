#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Leveled log event dispatcher.
//!
//! A [`LogAdapter`] lets a library emit log messages without knowing where they end up. The
//! embedding application subscribes zero or more [`Target`]s to each [`Level`]; emitting a
//! message at a level invokes every target subscribed to that level, in subscription order.
//! Emitting at a level that has no subscribers does nothing.
//!
//! ```
//! use std::sync::Arc;
//!
//! use log_adapter::{Level, LogAdapter};
//! use parking_lot::Mutex;
//!
//! let lines = Arc::new(Mutex::new(Vec::new()));
//!
//! let mut logger = LogAdapter::new();
//! logger.subscribe_fn(Level::Warning, {
//!     let lines = Arc::clone(&lines);
//!     move |level, message, _context| lines.lock().push(format!("{level}: {message}"))
//! });
//!
//! logger.info("nobody is listening");
//! logger.warning("disk almost full");
//!
//! assert_eq!(*lines.lock(), ["Warning: disk almost full"]);
//! ```
//!
//! # Targets
//!
//! Formatting lives in the targets, not in the adapter:
//!
//! * [`WriterTarget`] writes one `[Level] message` line per event to any [`std::io::Write`].
//!   [`WriterTarget::stdout()`] is the console target used by [`LogAdapter::console()`].
//! * [`TracingTarget`] forwards events to the [`tracing`] ecosystem, used by
//!   [`LogAdapter::tracing()`].
//! * Any closure can be subscribed through [`LogAdapter::subscribe_fn()`].

mod adapter;
mod level;
mod target;
mod tracing_target;
mod writer_target;

pub use adapter::*;
pub use level::*;
pub use target::*;
pub use tracing_target::*;
pub use writer_target::*;
