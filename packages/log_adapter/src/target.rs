use std::fmt;

use crate::Level;

/// A destination for log events dispatched by a [`LogAdapter`][crate::LogAdapter].
///
/// Targets are shared between levels and between threads, so they receive events through a
/// shared reference and must synchronize any state they mutate.
pub trait Target: Send + Sync {
    /// Handles one event. `context` is the optional object the caller attached to the message.
    fn log(&self, level: Level, message: &str, context: Option<&dyn fmt::Debug>);
}

/// Adapts a closure into a [`Target`].
///
/// Usually created implicitly by [`LogAdapter::subscribe_fn()`][crate::LogAdapter::subscribe_fn].
pub struct FnTarget<F>(F);

impl<F> FnTarget<F>
where
    F: Fn(Level, &str, Option<&dyn fmt::Debug>) + Send + Sync,
{
    /// Wraps `f` so that it can be subscribed as a target.
    #[must_use]
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Target for FnTarget<F>
where
    F: Fn(Level, &str, Option<&dyn fmt::Debug>) + Send + Sync,
{
    fn log(&self, level: Level, message: &str, context: Option<&dyn fmt::Debug>) {
        (self.0)(level, message, context);
    }
}

impl<F> fmt::Debug for FnTarget<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTarget")
            .field("fn_type", &format_args!("{}", std::any::type_name::<F>()))
            .finish_non_exhaustive()
    }
}
