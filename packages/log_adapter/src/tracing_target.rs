use std::fmt;

use crate::{Level, Target};

/// Forwards each event to the [`tracing`] macro of the matching level.
///
/// [`Level::Warning`] maps to `warn!`. [`tracing`] has no fatal level, so [`Level::Fatal`]
/// events are emitted with `error!` and carry an extra `fatal = true` field. The context, if
/// any, is recorded as a `context` field in debug format.
#[derive(Clone, Copy, Debug, Default)]
#[allow(
    clippy::exhaustive_structs,
    reason = "a stateless unit target that callers construct by name"
)]
pub struct TracingTarget;

macro_rules! forward {
    ($macro:ident, $message:expr, $context:expr $(, $field:ident = $value:expr)?) => {
        match $context {
            Some(context) => tracing::$macro!($($field = $value,)? context = ?context, "{}", $message),
            None => tracing::$macro!($($field = $value,)? "{}", $message),
        }
    };
}

impl Target for TracingTarget {
    fn log(&self, level: Level, message: &str, context: Option<&dyn fmt::Debug>) {
        match level {
            Level::Trace => forward!(trace, message, context),
            Level::Debug => forward!(debug, message, context),
            Level::Info => forward!(info, message, context),
            Level::Warning => forward!(warn, message, context),
            Level::Error => forward!(error, message, context),
            Level::Fatal => forward!(error, message, context, fatal = true),
        }
    }
}
