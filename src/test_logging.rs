//! Test logging infrastructure.
//!
//! Captures timestamped, categorized events during tests so that a failed
//! assertion can dump the full history of the run instead of a bare
//! condition. Used by the integration suite via the [`test_log!`],
//! [`assert_log!`] and [`assert_eq_log!`] macros.

use std::fmt::Write as _;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Logging verbosity level for tests.
///
/// Levels are ordered from least to most verbose:
/// `Error < Warn < Info < Debug`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum TestLogLevel {
    /// Only errors and failures.
    Error,
    /// Warnings and above.
    Warn,
    /// General test progress.
    #[default]
    Info,
    /// Everything, including per-poll detail.
    Debug,
}

impl std::str::FromStr for TestLogLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(()),
        }
    }
}

/// A typed event captured during a test run.
#[derive(Debug, Clone)]
pub enum TestEvent {
    /// A named phase of the test began.
    Phase {
        /// Phase name.
        name: String,
    },
    /// Free-form progress message.
    Custom {
        /// Event category, e.g. `"race"` or `"setup"`.
        category: &'static str,
        /// Formatted message.
        message: String,
    },
    /// Something unexpected but non-fatal.
    Warn {
        /// Event category.
        category: &'static str,
        /// Formatted message.
        message: String,
    },
    /// A failure observation.
    Error {
        /// Event category.
        category: &'static str,
        /// Formatted message.
        message: String,
    },
}

impl TestEvent {
    fn level(&self) -> TestLogLevel {
        match self {
            Self::Phase { .. } | Self::Custom { .. } => TestLogLevel::Info,
            Self::Warn { .. } => TestLogLevel::Warn,
            Self::Error { .. } => TestLogLevel::Error,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Phase { name } => format!("=== {name} ==="),
            Self::Custom { category, message } => format!("[{category}] {message}"),
            Self::Warn { category, message } => format!("WARN [{category}] {message}"),
            Self::Error { category, message } => format!("ERROR [{category}] {message}"),
        }
    }
}

struct Record {
    elapsed: Duration,
    event: TestEvent,
}

/// Captures and reports test events with timestamps.
pub struct TestLogger {
    level: TestLogLevel,
    start: Instant,
    events: Mutex<Vec<Record>>,
}

impl TestLogger {
    /// Creates a logger capturing events at or below `level`.
    #[must_use]
    pub fn new(level: TestLogLevel) -> Self {
        Self {
            level,
            start: Instant::now(),
            events: Mutex::new(Vec::new()),
        }
    }

    /// Creates a logger whose level comes from `ANY_OF_TEST_LOG`,
    /// defaulting to `Info` when unset or unparseable.
    #[must_use]
    pub fn from_env() -> Self {
        let level = std::env::var("ANY_OF_TEST_LOG")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();
        Self::new(level)
    }

    /// Records an event if it passes the verbosity filter.
    pub fn log(&self, event: TestEvent) {
        if event.level() > self.level {
            return;
        }
        let record = Record {
            elapsed: self.start.elapsed(),
            event,
        };
        self.events.lock().expect("lock poisoned").push(record);
    }

    /// Number of captured error events.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.events
            .lock()
            .expect("lock poisoned")
            .iter()
            .filter(|r| matches!(r.event, TestEvent::Error { .. }))
            .count()
    }

    /// Formats every captured event with its offset from logger creation.
    #[must_use]
    pub fn report(&self) -> String {
        let events = self.events.lock().expect("lock poisoned");
        let mut out = String::new();
        for record in events.iter() {
            let _ = writeln!(
                out,
                "[{:>10.3?}] {}",
                record.elapsed,
                record.event.describe()
            );
        }
        out
    }

    /// Clears all captured events.
    pub fn clear(&self) {
        self.events.lock().expect("lock poisoned").clear();
    }
}

impl Default for TestLogger {
    fn default() -> Self {
        Self::new(TestLogLevel::Info)
    }
}

/// Log a custom event to a test logger.
///
/// ```ignore
/// test_log!(logger, "race", "spawning {} contenders", n);
/// ```
#[macro_export]
macro_rules! test_log {
    ($logger:expr, $cat:literal, $($arg:tt)*) => {
        $logger.log($crate::test_logging::TestEvent::Custom {
            category: $cat,
            message: format!($($arg)*),
        });
    };
}

/// Log a warning event to a test logger.
#[macro_export]
macro_rules! test_warn {
    ($logger:expr, $cat:literal, $($arg:tt)*) => {
        $logger.log($crate::test_logging::TestEvent::Warn {
            category: $cat,
            message: format!($($arg)*),
        });
    };
}

/// Log an error event to a test logger.
#[macro_export]
macro_rules! test_error {
    ($logger:expr, $cat:literal, $($arg:tt)*) => {
        $logger.log($crate::test_logging::TestEvent::Error {
            category: $cat,
            message: format!($($arg)*),
        });
    };
}

/// Mark the start of a named test phase.
#[macro_export]
macro_rules! test_phase {
    ($logger:expr, $name:expr) => {
        $logger.log($crate::test_logging::TestEvent::Phase {
            name: String::from($name),
        });
    };
}

/// Assert a condition, printing the full log on failure.
#[macro_export]
macro_rules! assert_log {
    ($logger:expr, $cond:expr) => {
        if !$cond {
            eprintln!("{}", $logger.report());
            panic!("assertion failed: {}", stringify!($cond));
        }
    };
    ($logger:expr, $cond:expr, $($arg:tt)*) => {
        if !$cond {
            eprintln!("{}", $logger.report());
            panic!($($arg)*);
        }
    };
}

/// Assert equality, printing the full log on failure.
///
/// Operands are evaluated exactly once and bound by reference before the
/// comparison, so side effects run once and the comparison drives type
/// inference for both sides.
#[macro_export]
macro_rules! assert_eq_log {
    ($logger:expr, $left:expr, $right:expr) => {
        match (&$left, &$right) {
            (left_val, right_val) => {
                if left_val != right_val {
                    eprintln!("{}", $logger.report());
                    panic!(
                        "assertion failed: `(left == right)`\n  left: {:?}\n right: {:?}",
                        left_val, right_val
                    );
                }
            }
        }
    };
}
