use std::fmt;

/// The severity of a log event.
///
/// Levels are ordered from least to most severe.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[non_exhaustive]
pub enum Level {
    /// Very detailed diagnostics, usually only enabled while chasing a specific problem.
    Trace,

    /// Diagnostics that are useful during development.
    Debug,

    /// Normal operational messages.
    Info,

    /// Something unexpected happened but the operation continued.
    Warning,

    /// An operation failed.
    Error,

    /// A failure that the application cannot continue from.
    Fatal,
}

impl Level {
    /// Every level, from least to most severe.
    pub const ALL: [Self; 6] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Fatal,
    ];

    /// The human-readable name of the level, as used in formatted output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Trace => "Trace",
            Self::Debug => "Debug",
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Fatal => "Fatal",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Trace => 0,
            Self::Debug => 1,
            Self::Info => 2,
            Self::Warning => 3,
            Self::Error => 4,
            Self::Fatal => 5,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
