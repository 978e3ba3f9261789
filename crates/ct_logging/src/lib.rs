use core::{
    fmt::{self, Arguments, Display, Write as _},
    str::FromStr,
    sync::atomic::{self, AtomicU8},
};
use std::io::{self, Write};
use chrono::{DateTime, Local};
use parking_lot::{const_mutex, const_rwlock, Mutex, RwLock};

static LOGGER : RwLock<Option<&'static Logger>> = const_rwlock(None);

/// Register the global logger used by the logging macros
pub fn set_logger(logger: &'static Logger) {
    *LOGGER.write() = Some(logger);
}

/// Get the global logger
///
/// # Panics
///
/// Panics when no logger was registered with [`set_logger`].
pub fn get_logger() -> &'static Logger {
    try_get_logger().expect("Logger was not set")
}

/// Get the global logger, if one was registered
pub fn try_get_logger() -> Option<&'static Logger> {
    *LOGGER.read()
}

/// Logging level
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum LogLevel {
    /// Severe error: will probably result in a crash
    Severe,
    /// Error: may not result in a crash
    Error,
    /// Warning: While not as bad as an error, it may point to something like a precision loss
    Warning,
    /// General info
    Info,
    /// Verbose info
    Verbose,
    /// Debug info (includes verbose info)
    Debug,
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Severe  => f.write_str("\x1B[1m\x1B[41m\x1B[30m[SEVERE ]\x1B[0m"),
            LogLevel::Error   => f.write_str(               "\x1B[91m[ERROR  ]\x1B[0m"),
            LogLevel::Warning => f.write_str(               "\x1B[93m[WARNING]\x1B[0m"),
            LogLevel::Info    => f.write_str(               "\x1B[37m[INFO   ]\x1B[0m"),
            LogLevel::Verbose => f.write_str(               "\x1B[90m[VERBOSE]\x1B[0m"),
            LogLevel::Debug   => f.write_str(               "\x1B[94m[DEBUG  ]\x1B[0m"),
        }
    }
}

/// Error returned when a string does not name a log level
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ParseLogLevelError(String);

impl Display for ParseLogLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level '{}', expected one of: severe, error, warning, info, verbose, debug", self.0)
    }
}

impl std::error::Error for ParseLogLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "severe"  => Ok(LogLevel::Severe),
            "error"   => Ok(LogLevel::Error),
            "warning" => Ok(LogLevel::Warning),
            "info"    => Ok(LogLevel::Info),
            "verbose" => Ok(LogLevel::Verbose),
            "debug"   => Ok(LogLevel::Debug),
            _ => Err(ParseLogLevelError(s.to_string())),
        }
    }
}

/// Log category
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LogCategory {
    category     : &'static str,
    sub_category : Option<&'static str>
}

impl LogCategory {
    pub const fn new(name: &'static str) -> Self {
        Self { category: name, sub_category: None }
    }

    pub const fn new_with_sub(name: &'static str, sub_name: &'static str) -> Self {
        Self { category: name, sub_category: Some(sub_name) }
    }
}

impl Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sub_category {
            Some(sub) => write!(f, "{}({sub})", self.category),
            None => f.write_str(self.category),
        }
    }
}

/// Additional info about where the log occured
pub struct LogLocation {
    file : &'static str,
    line : u32,
    func : &'static str,
    time : DateTime<Local>,
}

impl LogLocation {
    /// Creates a new log location
    pub fn new(file: &'static str, line: u32, func: &'static str, time: DateTime<Local>) -> Self {
        Self { file, line, func, time }
    }

    /// Get the file name where the log occured
    pub fn file(&self) -> &str {
        self.file
    }

    /// Get the line where the log occurred
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Get the function where the log occurred
    pub fn function(&self) -> &str {
        self.func
    }

    /// Get the local time when the log occurred
    pub fn timestamp(&self) -> DateTime<Local> {
        self.time
    }
}

// Only severe, error and debug messages carry their source location
struct LogLocationFormatter<'a> {
    loc   : &'a LogLocation,
    level : LogLevel
}

impl Display for LogLocationFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            LogLevel::Severe | LogLevel::Error | LogLevel::Debug => {
                write!(f, " ({}:{}", self.loc.file(), self.loc.line())?;
                if !self.loc.function().is_empty() {
                    write!(f, ": {}", self.loc.function())?;
                }
                f.write_str(")")
            },
            LogLevel::Warning | LogLevel::Info | LogLevel::Verbose => Ok(()),
        }
    }
}

pub fn get_func_name<F>(_: F) -> &'static str {
    core::any::type_name::<F>()
}

#[macro_export]
macro_rules! log_location {
    () => {
        $crate::LogLocation::new(file!(), line!(), "", $crate::now())
    };
    ($func: expr) => {
        $crate::LogLocation::new(file!(), line!(), $crate::get_func_name($func), $crate::now())
    };
}

/// Current local time, used to timestamp log messages
pub fn now() -> DateTime<Local> {
    Local::now()
}

type BoxedWriter = Box<dyn Write + Send>;

pub struct LoggerState {
    writers:        [Option<BoxedWriter>; Self::MAX_WRITERS],
    cache:          String,
    always_flush:   bool,
    log_to_console: bool,
}

impl LoggerState {
    const MAX_WRITERS: usize = 8;
    const CACHE_FLUSH_LIMIT: usize = 4 * 1024;

    pub const fn new() -> Self {
        const NONE: Option<BoxedWriter> = None;
        Self {
            writers: [NONE; Self::MAX_WRITERS],
            cache: String::new(),
            always_flush: false,
            log_to_console: true,
        }
    }

    fn write_message(&mut self, message: &str) {
        self.cache.push_str(message);
        self.flush_when_needed();
    }

    fn format_message(&mut self, fmt_args: Arguments) {
        _ = self.cache.write_fmt(fmt_args);
        self.flush_when_needed();
    }

    fn flush_when_needed(&mut self) {
        if self.always_flush || self.cache.len() > Self::CACHE_FLUSH_LIMIT {
            self.flush();
        }
    }

    // Writer failures are dropped, there is nowhere left to report them.
    fn flush(&mut self) {
        if self.cache.is_empty() {
            return;
        }

        if self.log_to_console {
            let mut stdout = io::stdout().lock();
            _ = stdout.write_all(self.cache.as_bytes());
            _ = stdout.flush();
        }

        for writer in self.writers.iter_mut().flatten() {
            _ = writer.write_all(self.cache.as_bytes());
            _ = writer.flush();
        }
        self.cache.clear();
    }
}

/// Logger
///
/// Supports up to 8 writers, e.g. terminal, file, external tool, etc
pub struct Logger {
    state: Mutex<LoggerState>,
    max_log_level: AtomicU8,
}

impl Logger {
    pub const fn new() -> Self {
        Self {
            state: const_mutex(LoggerState::new()),
            max_log_level: AtomicU8::new(LogLevel::Debug as u8),
        }
    }

    /// Set the maximum log level (severe == lowest, debug == highest)
    pub fn set_max_level(&self, level: LogLevel) {
        self.max_log_level.store(level as u8, atomic::Ordering::Relaxed)
    }

    /// Check whether messages of `level` are currently written
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level as u8 <= self.max_log_level.load(atomic::Ordering::Relaxed)
    }

    /// Set whether the logger should flush after each write
    pub fn set_always_flush(&self, always_flush: bool) {
        self.state.lock().always_flush = always_flush;
    }

    /// Set whether the logger should log it's output to console
    pub fn set_log_to_console(&self, log_to_console: bool) {
        let mut state = self.state.lock();

        // Messages logged up to now still follow the old setting
        state.flush();
        state.log_to_console = log_to_console;
    }

    /// Add a writer.
    ///
    /// Returns `Ok(index)` if space was available. This index can be used to remove the writer later on.
    ///
    /// Otherwise returns an `Err` with the provided writer
    pub fn add_writer(&self, writer: BoxedWriter) -> Result<usize, BoxedWriter> {
        let mut state = self.state.lock();

        let empty = state.writers.iter_mut().enumerate().find(|(_, slot)| slot.is_none());
        match empty {
            Some((id, slot)) => {
                *slot = Some(writer);
                Ok(id)
            },
            None => Err(writer),
        }
    }

    /// Remove a writer from the logger, pending messages are flushed to it first
    pub fn remove_writer(&self, index: usize) -> Option<BoxedWriter> {
        let mut state = self.state.lock();
        state.flush();
        state.writers.get_mut(index).and_then(Option::take)
    }

    /// Log a message
    pub fn log(&self, category: LogCategory, level: LogLevel, loc: LogLocation, text: &str) {
        self.log_fmt(category, level, loc, format_args!("{text}"));
    }

    /// Log a formatted message
    pub fn log_fmt(&self, category: LogCategory, level: LogLevel, loc: LogLocation, format: Arguments) {
        if self.is_enabled(level) {
            let loc_formatter = LogLocationFormatter { loc: &loc, level };
            let timestamp = loc.timestamp().format("%H:%M:%S%.3f");
            let mut state = self.state.lock();
            state.format_message(format_args!("{timestamp} {level} [{category}]{loc_formatter}: {format}\n"));
        }
    }

    pub fn flush(&self) {
        self.state.lock().flush()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.flush();
    }
}

#[macro_export]
macro_rules! log {
    ($category:expr, $level:expr, $func:expr, $text:expr) => {
        if let Some(logger) = $crate::try_get_logger() {
            logger.log_fmt($category, $level, $crate::log_location!($func), format_args!($text));
        }
    };
    ($category:expr, $level:expr, $func:expr, $format:expr, $($arg:expr),*) => {
        if let Some(logger) = $crate::try_get_logger() {
            logger.log_fmt($category, $level, $crate::log_location!($func), format_args!($format, $($arg),*));
        }
    };
}

#[macro_export]
macro_rules! log_severe {
    ($category:expr, $func:expr, $($fmt:tt)+) => {
        $crate::log!($category, $crate::LogLevel::Severe, $func, $($fmt)+)
    };
}

#[macro_export]
macro_rules! log_error {
    ($category:expr, $func:expr, $($fmt:tt)+) => {
        $crate::log!($category, $crate::LogLevel::Error, $func, $($fmt)+)
    };
}

#[macro_export]
macro_rules! log_warning {
    ($category:expr, $text:expr) => {
        if let Some(logger) = $crate::try_get_logger() {
            logger.log_fmt($category, $crate::LogLevel::Warning, $crate::log_location!(), format_args!($text));
        }
    };
    ($category:expr, $format:expr, $($arg:expr),*) => {
        if let Some(logger) = $crate::try_get_logger() {
            logger.log_fmt($category, $crate::LogLevel::Warning, $crate::log_location!(), format_args!($format, $($arg),*));
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($category:expr, $text:expr) => {
        if let Some(logger) = $crate::try_get_logger() {
            logger.log_fmt($category, $crate::LogLevel::Info, $crate::log_location!(), format_args!($text));
        }
    };
    ($category:expr, $format:expr, $($arg:expr),*) => {
        if let Some(logger) = $crate::try_get_logger() {
            logger.log_fmt($category, $crate::LogLevel::Info, $crate::log_location!(), format_args!($format, $($arg),*));
        }
    };
}

#[macro_export]
macro_rules! log_verbose {
    ($category:expr, $text:expr) => {
        if let Some(logger) = $crate::try_get_logger() {
            logger.log_fmt($category, $crate::LogLevel::Verbose, $crate::log_location!(), format_args!($text));
        }
    };
    ($category:expr, $format:expr, $($arg:expr),*) => {
        if let Some(logger) = $crate::try_get_logger() {
            logger.log_fmt($category, $crate::LogLevel::Verbose, $crate::log_location!(), format_args!($format, $($arg),*));
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($category:expr, $func:expr, $($fmt:tt)+) => {
        $crate::log!($category, $crate::LogLevel::Debug, $func, $($fmt)+)
    };
}
