use std::fmt;
use std::sync::Arc;

use crate::{FnTarget, Level, Target, TracingTarget, WriterTarget};

/// Dispatches log events to the targets subscribed to each [`Level`].
///
/// The adapter holds no global state. Subscriptions are made through `&mut self` while the
/// adapter is being set up; emitting only needs `&self`, so a configured adapter can be shared
/// between threads (for example in an [`Arc`]).
///
/// Each level has its own ordered list of targets. Subscribing the same target to a level
/// twice means it receives every event at that level twice.
///
/// # Example
///
/// ```
/// use log_adapter::{Level, LogAdapter, TracingTarget};
///
/// let mut logger = LogAdapter::new();
/// logger.subscribe(Level::Error, TracingTarget);
/// logger.subscribe(Level::Fatal, TracingTarget);
///
/// logger.error_with("request failed", &("GET", "/index.html", 503));
/// ```
#[derive(Default)]
pub struct LogAdapter {
    /// Indexed by [`Level::index()`].
    targets: [Vec<Arc<dyn Target>>; Level::ALL.len()],
}

impl LogAdapter {
    /// Creates an adapter without any subscribers. Every emitted event is discarded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an adapter that writes every level to standard output, one line per event.
    ///
    /// Lines have the form `[Level] message`, followed by the context in debug format if one
    /// was supplied.
    #[must_use]
    pub fn console() -> Self {
        let mut adapter = Self::new();
        adapter.subscribe_all(WriterTarget::stdout());
        adapter
    }

    /// Creates an adapter that forwards every level to [`tracing`] via [`TracingTarget`].
    #[must_use]
    pub fn tracing() -> Self {
        let mut adapter = Self::new();
        adapter.subscribe_all(TracingTarget);
        adapter
    }

    /// Adds `target` to the end of the subscriber list for `level`.
    pub fn subscribe(&mut self, level: Level, target: impl Target + 'static) {
        self.subscribe_shared(level, Arc::new(target));
    }

    /// Adds a target that is already shared, for example with other adapters.
    pub fn subscribe_shared(&mut self, level: Level, target: Arc<dyn Target>) {
        self.targets_mut(level).push(target);
    }

    /// Adds `f` as a target for `level`.
    ///
    /// This is the same as subscribing a [`FnTarget`] but lets the compiler infer the
    /// closure's parameter types.
    pub fn subscribe_fn<F>(&mut self, level: Level, f: F)
    where
        F: Fn(Level, &str, Option<&dyn fmt::Debug>) + Send + Sync + 'static,
    {
        self.subscribe(level, FnTarget::new(f));
    }

    /// Adds one shared instance of `target` to the subscriber list of every level.
    pub fn subscribe_all(&mut self, target: impl Target + 'static) {
        let target: Arc<dyn Target> = Arc::new(target);

        for level in Level::ALL {
            self.subscribe_shared(level, Arc::clone(&target));
        }
    }

    /// The number of targets subscribed to `level`.
    #[must_use]
    pub fn subscriber_count(&self, level: Level) -> usize {
        self.targets(level).len()
    }

    /// Invokes every target subscribed to `level`, in subscription order.
    pub fn emit(&self, level: Level, message: &str, context: Option<&dyn fmt::Debug>) {
        for target in self.targets(level) {
            target.log(level, message, context);
        }
    }

    /// Emits `message` at [`Level::Trace`].
    pub fn trace(&self, message: &str) {
        self.emit(Level::Trace, message, None);
    }

    /// Emits `message` with `context` at [`Level::Trace`].
    pub fn trace_with(&self, message: &str, context: &dyn fmt::Debug) {
        self.emit(Level::Trace, message, Some(context));
    }

    /// Emits `message` at [`Level::Debug`].
    pub fn debug(&self, message: &str) {
        self.emit(Level::Debug, message, None);
    }

    /// Emits `message` with `context` at [`Level::Debug`].
    pub fn debug_with(&self, message: &str, context: &dyn fmt::Debug) {
        self.emit(Level::Debug, message, Some(context));
    }

    /// Emits `message` at [`Level::Info`].
    pub fn info(&self, message: &str) {
        self.emit(Level::Info, message, None);
    }

    /// Emits `message` with `context` at [`Level::Info`].
    pub fn info_with(&self, message: &str, context: &dyn fmt::Debug) {
        self.emit(Level::Info, message, Some(context));
    }

    /// Emits `message` at [`Level::Warning`].
    pub fn warning(&self, message: &str) {
        self.emit(Level::Warning, message, None);
    }

    /// Emits `message` with `context` at [`Level::Warning`].
    pub fn warning_with(&self, message: &str, context: &dyn fmt::Debug) {
        self.emit(Level::Warning, message, Some(context));
    }

    /// Emits `message` at [`Level::Error`].
    pub fn error(&self, message: &str) {
        self.emit(Level::Error, message, None);
    }

    /// Emits `message` with `context` at [`Level::Error`].
    pub fn error_with(&self, message: &str, context: &dyn fmt::Debug) {
        self.emit(Level::Error, message, Some(context));
    }

    /// Emits `message` at [`Level::Fatal`].
    pub fn fatal(&self, message: &str) {
        self.emit(Level::Fatal, message, None);
    }

    /// Emits `message` with `context` at [`Level::Fatal`].
    pub fn fatal_with(&self, message: &str, context: &dyn fmt::Debug) {
        self.emit(Level::Fatal, message, Some(context));
    }

    fn targets(&self, level: Level) -> &[Arc<dyn Target>] {
        self.targets
            .get(level.index())
            .expect("every level has a subscriber list")
    }

    fn targets_mut(&mut self, level: Level) -> &mut Vec<Arc<dyn Target>> {
        self.targets
            .get_mut(level.index())
            .expect("every level has a subscriber list")
    }
}

impl fmt::Debug for LogAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("LogAdapter");

        for level in Level::ALL {
            debug.field(level.name(), &self.subscriber_count(level));
        }

        debug.finish_non_exhaustive()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    #![allow(
        clippy::indexing_slicing,
        reason = "we do not need to worry about these things when writing test code"
    )]

    use parking_lot::Mutex;
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(LogAdapter: Send, Sync, Default);

    type Events = Arc<Mutex<Vec<(&'static str, Level, String, Option<String>)>>>;

    /// Subscribes a target named `name` to `level` that records every event into `events`.
    fn record(adapter: &mut LogAdapter, level: Level, name: &'static str, events: &Events) {
        let events = Arc::clone(events);

        adapter.subscribe_fn(level, move |level, message, context| {
            events.lock().push((
                name,
                level,
                message.to_string(),
                context.map(|context| format!("{context:?}")),
            ));
        });
    }

    #[test]
    fn new_adapter_has_no_subscribers() {
        let adapter = LogAdapter::new();

        for level in Level::ALL {
            assert_eq!(adapter.subscriber_count(level), 0);
        }

        // Nothing to call, nothing to fail.
        adapter.fatal("into the void");
    }

    #[test]
    fn emits_only_to_matching_level() {
        let events = Events::default();
        let mut adapter = LogAdapter::new();
        record(&mut adapter, Level::Info, "info", &events);

        adapter.debug("hidden");
        adapter.info("shown");
        adapter.warning("hidden");

        let events = events.lock();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].1, Level::Info);
        assert_eq!(events[0].2, "shown");
        assert_eq!(events[0].3, None);
    }

    #[test]
    fn targets_run_in_subscription_order() {
        let events = Events::default();
        let mut adapter = LogAdapter::new();
        record(&mut adapter, Level::Error, "first", &events);
        record(&mut adapter, Level::Error, "second", &events);
        record(&mut adapter, Level::Error, "third", &events);

        adapter.error("boom");

        let names: Vec<_> = events.lock().iter().map(|event| event.0).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn context_is_passed_through() {
        let events = Events::default();
        let mut adapter = LogAdapter::new();
        record(&mut adapter, Level::Trace, "trace", &events);

        adapter.trace_with("with context", &(1, "two"));
        adapter.trace("without context");

        let events = events.lock();
        assert_eq!(events[0].3.as_deref(), Some("(1, \"two\")"));
        assert_eq!(events[1].3, None);
    }

    #[test]
    fn every_convenience_method_uses_its_level() {
        let events = Events::default();
        let mut adapter = LogAdapter::new();

        for level in Level::ALL {
            record(&mut adapter, level, "all", &events);
        }

        adapter.trace("t");
        adapter.debug("d");
        adapter.info("i");
        adapter.warning("w");
        adapter.error("e");
        adapter.fatal("f");
        adapter.trace_with("t", &0);
        adapter.debug_with("d", &0);
        adapter.info_with("i", &0);
        adapter.warning_with("w", &0);
        adapter.error_with("e", &0);
        adapter.fatal_with("f", &0);

        let levels: Vec<_> = events.lock().iter().map(|event| event.1).collect();
        let expected: Vec<_> = Level::ALL.into_iter().chain(Level::ALL).collect();
        assert_eq!(levels, expected);
    }

    #[test]
    fn subscribe_all_shares_one_target() {
        let events = Events::default();
        let mut adapter = LogAdapter::new();

        let target_events = Arc::clone(&events);
        adapter.subscribe_all(FnTarget::new(move |level, message: &str, _| {
            target_events
                .lock()
                .push(("all", level, message.to_string(), None));
        }));

        for level in Level::ALL {
            assert_eq!(adapter.subscriber_count(level), 1);
        }

        adapter.info("one");
        adapter.fatal("two");

        assert_eq!(events.lock().len(), 2);
    }

    #[test]
    fn console_subscribes_each_level_once() {
        let adapter = LogAdapter::console();

        for level in Level::ALL {
            assert_eq!(adapter.subscriber_count(level), 1);
        }
    }

    #[test]
    fn tracing_subscribes_each_level_once() {
        let adapter = LogAdapter::tracing();

        for level in Level::ALL {
            assert_eq!(adapter.subscriber_count(level), 1);
        }
    }

    #[test]
    fn shared_between_threads() {
        let events = Events::default();
        let mut adapter = LogAdapter::new();
        record(&mut adapter, Level::Info, "info", &events);

        let adapter = Arc::new(adapter);

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..10 {
                        adapter.info("from a thread");
                    }
                });
            }
        });

        assert_eq!(events.lock().len(), 40);
    }

    #[test]
    fn debug_shows_subscriber_counts() {
        let mut adapter = LogAdapter::new();
        adapter.subscribe(Level::Warning, TracingTarget);

        let output = format!("{adapter:?}");

        assert!(output.contains("Warning: 1"));
        assert!(output.contains("Trace: 0"));
    }
}
