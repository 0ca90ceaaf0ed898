use std::fmt;
use std::io::{self, Write};

use parking_lot::Mutex;

use crate::{Level, Target};

/// Writes each event as one line of text: `[Level] message`, followed by ` {context:?}` when
/// the event carries a context.
///
/// Lines from concurrent events never interleave. Write failures are ignored because a log
/// target has nowhere to report them.
///
/// # Example
///
/// ```
/// use log_adapter::{Level, Target, WriterTarget};
///
/// let target = WriterTarget::new(Vec::new());
/// target.log(Level::Info, "started", None);
/// target.log(Level::Error, "failed", Some(&42));
///
/// let output = String::from_utf8(target.into_inner()).unwrap();
/// assert_eq!(output, "[Info] started\n[Error] failed 42\n");
/// ```
pub struct WriterTarget<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterTarget<W> {
    /// Creates a target that writes to `writer`.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the target and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl WriterTarget<io::Stdout> {
    /// Creates a target that writes to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> Target for WriterTarget<W> {
    #[cfg_attr(test, mutants::skip)] // Ignored write errors cannot be observed.
    fn log(&self, level: Level, message: &str, context: Option<&dyn fmt::Debug>) {
        let mut writer = self.writer.lock();

        let written = match context {
            Some(context) => writeln!(writer, "[{level}] {message} {context:?}"),
            None => writeln!(writer, "[{level}] {message}"),
        };

        _ = written.and_then(|()| writer.flush());
    }
}

impl<W> fmt::Debug for WriterTarget<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterTarget")
            .field(
                "writer_type",
                &format_args!("{}", std::any::type_name::<W>()),
            )
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;
    use crate::LogAdapter;

    assert_impl_all!(WriterTarget<Vec<u8>>: Send, Sync);
    assert_impl_all!(WriterTarget<io::Stdout>: Send, Sync);

    fn output_of(target: WriterTarget<Vec<u8>>) -> String {
        String::from_utf8(target.into_inner()).unwrap()
    }

    #[test]
    fn formats_level_and_message() {
        let target = WriterTarget::new(Vec::new());

        target.log(Level::Warning, "low on memory", None);

        assert_eq!(output_of(target), "[Warning] low on memory\n");
    }

    #[test]
    fn appends_context_in_debug_format() {
        let target = WriterTarget::new(Vec::new());

        target.log(Level::Debug, "parsed", Some(&vec!["a", "b"]));

        assert_eq!(output_of(target), "[Debug] parsed [\"a\", \"b\"]\n");
    }

    #[test]
    fn one_line_per_event() {
        let target = WriterTarget::new(Vec::new());

        for level in Level::ALL {
            target.log(level, "x", None);
        }

        assert_eq!(
            output_of(target),
            "[Trace] x\n[Debug] x\n[Info] x\n[Warning] x\n[Error] x\n[Fatal] x\n"
        );
    }

    #[test]
    fn write_failure_is_ignored() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("broken pipe"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Err(io::Error::other("broken pipe"))
            }
        }

        let mut adapter = LogAdapter::new();
        adapter.subscribe(Level::Info, WriterTarget::new(Broken));

        adapter.info("goes nowhere");
    }
}
