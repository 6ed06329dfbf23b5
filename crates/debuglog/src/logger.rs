//! crates/debuglog/src/logger.rs
//! The logger context: option store, level gate, redirect dispatch, sinks.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use debuglog_sink::{SinkKind, SinkSet};

use crate::category::Category;
use crate::format::{TRACE_MARKER, bracketed_prefix, now_timestamp};
use crate::options::Options;
use crate::redirect::{DispatchOutcome, LogTarget, RedirectTable};
use crate::timer::Timer;

/// Environment variable seeding the numeric verbosity level.
///
/// An empty value disables debug logging; a non-numeric value is ignored.
pub const ENV_DEBUG_LEVEL: &str = "AUTOMATE_DEBUG";
/// Environment variable seeding the general log file path.
pub const ENV_LOG_FILE: &str = "AUTOMATE_LOGFILE";
/// Environment variable seeding the user log file path.
pub const ENV_USER_LOG_FILE: &str = "AUTOMATE_LOGFILE_USER";

/// Level carried by lines that bypass the numeric gate (error, info, action,
/// test, profile and user emissions). The threshold never drops below zero
/// through the public surface, so these always pass.
const ALWAYS_ON: i32 = -1;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Returns the process-wide logger, constructing it from the environment on
/// first use.
///
/// The convenience macros ([`log_info!`](crate::log_info),
/// [`log_error!`](crate::log_error), ...) all route through this instance.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::from_env)
}

/// Everything the facility mutates, behind the logger's single lock.
struct LoggerState {
    threshold: i32,
    options: Options,
    redirects: RedirectTable,
    sinks: SinkSet,
}

/// A logging and profiling context.
///
/// A `Logger` owns the verbosity threshold, the option store, the redirect
/// table and the local sinks, all guarded by one internal lock so that
/// configuration changes and dispatch serialize against each other. Tests
/// and embedding hosts construct their own instances; application code
/// normally uses [`global()`].
///
/// # Examples
///
/// ```
/// use debuglog::Logger;
/// use debuglog_sink::SharedBuffer;
///
/// let console = SharedBuffer::new();
/// let logger = Logger::with_console(console.clone());
/// logger.error("something failed");
/// assert_eq!(console.contents(), "[error] something failed\n");
/// ```
pub struct Logger {
    state: Mutex<LoggerState>,
}

impl Logger {
    /// Creates a logger with default options, writing to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(LoggerState {
                threshold: 0,
                options: Options::default(),
                redirects: RedirectTable::new(),
                sinks: SinkSet::new(),
            }),
        }
    }

    /// Creates a logger whose console is the given writer.
    #[must_use]
    pub fn with_console<W>(console: W) -> Self
    where
        W: Write + Send + 'static,
    {
        let logger = Self::new();
        logger.lock().sinks.set_console(Box::new(console));
        logger
    }

    /// Creates a logger seeded from the process environment.
    ///
    /// Reads [`ENV_DEBUG_LEVEL`] into the threshold (an empty value forces
    /// level 0 and `DebugLogs` off; a malformed value is ignored), then
    /// [`ENV_LOG_FILE`] and [`ENV_USER_LOG_FILE`] as configured file paths,
    /// opening each sink that is configured.
    #[must_use]
    pub fn from_env() -> Self {
        let logger = Self::new();
        {
            let mut state = logger.lock();
            match std::env::var(ENV_DEBUG_LEVEL) {
                Ok(raw) if raw.is_empty() => state.set_threshold(0),
                Ok(raw) => {
                    if let Ok(level) = raw.parse::<i32>() {
                        state.set_threshold(level);
                    }
                }
                Err(_) => {}
            }
            if let Ok(path) = std::env::var(ENV_LOG_FILE) {
                state.options.log_file = Some(path);
            }
            if let Ok(path) = std::env::var(ENV_USER_LOG_FILE) {
                state.options.user_log_file = Some(path);
            }
        }
        logger.set_log_file(None);
        logger.set_user_log_file(None);
        logger
    }

    fn lock(&self) -> MutexGuard<'_, LoggerState> {
        // A panic in one caller must not silence logging for the process.
        self.state
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    // ---- threshold ----

    /// Returns the current verbosity threshold.
    #[must_use]
    pub fn debug_level(&self) -> i32 {
        self.lock().threshold
    }

    /// Sets the verbosity threshold.
    ///
    /// Raising it above 0 also turns the `DebugLogs` toggle on; lowering it
    /// to 0 or below turns the toggle off, keeping the two views consistent.
    pub fn set_debug_level(&self, level: i32) {
        self.lock().set_threshold(level);
    }

    /// Sets the threshold from a numeric string; malformed input is ignored
    /// and the previous threshold is retained.
    pub fn set_debug_level_str(&self, level: &str) {
        if let Ok(parsed) = level.parse::<i32>() {
            self.lock().set_threshold(parsed);
        }
    }

    /// Turns debug logging on at the given level.
    pub fn on(&self, level: i32) {
        self.set_debug_level(level);
    }

    /// Turns debug logging off.
    pub fn off(&self) {
        self.set_debug_level(0);
    }

    /// Reports whether the threshold is at least `level`.
    #[must_use]
    pub fn is_level(&self, level: i32) -> bool {
        self.lock().threshold >= level
    }

    /// Emits a leveled line announcing the active threshold, when positive.
    ///
    /// Intended to be called once at startup after environment seeding.
    pub fn announce(&self) {
        let mut state = self.lock();
        let level = state.threshold;
        if level > 0 {
            state.logx_line(level, &format!("debug logging on: level {level}"));
        }
    }

    // ---- options ----

    /// Returns the boolean option named `key` (`false` for unknown keys).
    #[must_use]
    pub fn is_option(&self, key: &str) -> bool {
        self.lock().options.flag(key)
    }

    /// Sets the boolean option named `key`; returns `false` for unknown keys.
    pub fn set_option(&self, key: &str, value: bool) -> bool {
        self.lock().options.set_flag(key, value).is_ok()
    }

    /// Sets the string option named `key`; returns `false` for unknown keys.
    pub fn set_text_option(&self, key: &str, value: &str) -> bool {
        self.lock().options.set_text(key, value).is_ok()
    }

    /// Sets the prefix word rendered on user-facing lines.
    pub fn set_user_log_prefix(&self, prefix: &str) {
        self.lock().options.user_log_prefix = prefix.to_owned();
    }

    /// Returns a snapshot of the option store.
    #[must_use]
    pub fn options(&self) -> Options {
        self.lock().options.clone()
    }

    /// Turns match highlighting on (mirrors into the `Highlight` option).
    pub fn highlight_on(&self) {
        self.lock().options.highlight = true;
    }

    /// Turns match highlighting off.
    pub fn highlight_off(&self) {
        self.lock().options.highlight = false;
    }

    /// Reports whether match highlighting is requested.
    #[must_use]
    pub fn should_highlight(&self) -> bool {
        self.lock().options.highlight
    }

    // ---- sinks ----

    /// Opens the general log file.
    ///
    /// `None` consults the path seeded at construction (a no-op returning
    /// `false` when none is configured); an empty string resolves the
    /// default file name in the working directory. Any previously open
    /// general log is closed first. On failure a diagnostic goes directly
    /// to the console and `false` is returned.
    pub fn set_log_file(&self, path: Option<&str>) -> bool {
        self.lock().open_sink(SinkKind::General, path)
    }

    /// Opens the user log file; same path resolution as
    /// [`set_log_file`](Self::set_log_file).
    pub fn set_user_log_file(&self, path: Option<&str>) -> bool {
        self.lock().open_sink(SinkKind::User, path)
    }

    /// Reports whether lines of the given kind go to a file.
    #[must_use]
    pub fn is_log_to_file(&self, kind: SinkKind) -> bool {
        self.lock().sinks.is_open(kind)
    }

    /// Returns the path of the open log file of the given kind.
    #[must_use]
    pub fn log_file_path(&self, kind: SinkKind) -> Option<PathBuf> {
        self.lock().sinks.path(kind).map(Path::to_path_buf)
    }

    /// Replaces the console writer.
    pub fn set_console<W>(&self, console: W)
    where
        W: Write + Send + 'static,
    {
        self.lock().sinks.set_console(Box::new(console));
    }

    /// Installs a capture writer that tees error lines and high-verbosity
    /// debug lines from the general sink while the threshold is above 2.
    pub fn set_capture<W>(&self, capture: W)
    where
        W: Write + Send + 'static,
    {
        self.lock().sinks.set_capture(Some(Box::new(capture)));
    }

    /// Removes the capture writer.
    pub fn clear_capture(&self) {
        self.lock().sinks.set_capture(None);
    }

    // ---- redirect registration ----

    /// Registers the shared redirect handle used by
    /// [`set_logger_all`](Self::set_logger_all), with per-category
    /// prefixing enabled. Existing per-category bindings persist.
    pub fn set_logger(&self, target: Arc<dyn LogTarget>) {
        let mut state = self.lock();
        state.redirects.set_handle(target, true);
        state.logx_line(3, "set logger: redirect handle registered");
    }

    /// Same as [`set_logger`](Self::set_logger), but redirected lines are
    /// delivered without any category prefix.
    pub fn set_logger_no_prefix(&self, target: Arc<dyn LogTarget>) {
        let mut state = self.lock();
        state.redirects.set_handle(target, false);
        state.logx_line(3, "set logger: redirect handle registered (no prefix)");
    }

    /// Binds the shared handle to all five redirectable categories (user,
    /// info, action, error, debug). Returns `false` when no handle has been
    /// registered.
    pub fn set_logger_all(&self) -> bool {
        let mut state = self.lock();
        let bound = state.redirects.bind_all();
        if bound {
            state.logx_line(3, "set logger all: five categories bound");
        }
        bound
    }

    /// Binds or clears the user-category redirect. `None` restores local
    /// sinks for the category and always succeeds.
    pub fn set_logger_user(&self, target: Option<Arc<dyn LogTarget>>) -> bool {
        self.lock().redirects.bind(Category::User, target)
    }

    /// Binds or clears the info-category redirect.
    pub fn set_logger_info(&self, target: Option<Arc<dyn LogTarget>>) -> bool {
        self.lock().redirects.bind(Category::Info, target)
    }

    /// Binds or clears the action-category redirect.
    pub fn set_logger_action(&self, target: Option<Arc<dyn LogTarget>>) -> bool {
        self.lock().redirects.bind(Category::Action, target)
    }

    /// Binds or clears the error-category redirect.
    pub fn set_logger_error(&self, target: Option<Arc<dyn LogTarget>>) -> bool {
        self.lock().redirects.bind(Category::Error, target)
    }

    /// Binds or clears the debug-category redirect.
    pub fn set_logger_debug(&self, target: Option<Arc<dyn LogTarget>>) -> bool {
        self.lock().redirects.bind(Category::Debug, target)
    }

    // ---- category entry points ----

    /// Emits an error message. Never suppressible.
    pub fn error(&self, message: &str) {
        self.lock().error_line(message);
    }

    /// Emits an informational message, gated by `InfoLogs`.
    ///
    /// Independently of the toggle and of any redirect, the message is also
    /// echoed through the verbosity-3 debug path when the threshold is 3 or
    /// higher.
    pub fn info(&self, message: &str) {
        let mut state = self.lock();
        if state.options.info_logs {
            match state.redirects.try_redirect(Category::Info, "", message) {
                DispatchOutcome::Delivered => {}
                DispatchOutcome::NoTarget => {
                    state.emit(ALWAYS_ON, Category::Info, Category::Info.tag(), message);
                }
                DispatchOutcome::Failed { reason } => {
                    state.report_redirect_failure(Category::Info, &reason);
                    state.emit(ALWAYS_ON, Category::Info, Category::Info.tag(), message);
                }
            }
        }
        if state.threshold >= 3 {
            state.logx_line(3, message);
        }
    }

    /// Emits an action trace, gated by `ActionLogs`.
    ///
    /// At threshold 3 or higher the fallback switches to verbosity-3 debug
    /// formatting instead of the action tag.
    pub fn action(&self, message: &str) {
        let mut state = self.lock();
        if !state.options.action_logs {
            return;
        }
        match state.redirects.try_redirect(Category::Action, "", message) {
            DispatchOutcome::Delivered => return,
            DispatchOutcome::NoTarget => {}
            DispatchOutcome::Failed { reason } => {
                state.report_redirect_failure(Category::Action, &reason);
            }
        }
        if state.threshold >= 3 {
            state.logx_line(3, message);
        } else {
            state.emit(ALWAYS_ON, Category::Action, Category::Action.tag(), message);
        }
    }

    /// Forwards to [`action`](Self::action).
    #[deprecated(note = "use action()")]
    pub fn history(&self, message: &str) {
        self.action(message);
    }

    /// Emits a test-harness message. Never suppressible.
    pub fn test(&self, message: &str) {
        let mut state = self.lock();
        state.emit(ALWAYS_ON, Category::Test, Category::Test.tag(), message);
    }

    /// Emits a test-harness message, replacing the literal `#returned#`
    /// token with `returned: true` or `returned: false`.
    pub fn test_returned(&self, message: &str, returned: bool) {
        let verdict = if returned {
            "returned: true"
        } else {
            "returned: false"
        };
        self.test(&message.replace("#returned#", verdict));
    }

    /// Emits a debug message at level 0, gated by `DebugLogs`.
    pub fn debug(&self, message: &str) {
        self.debug_at(0, message);
    }

    /// Emits a debug message at the given level, gated by `DebugLogs` and
    /// the numeric comparison `level <= threshold`.
    pub fn debug_at(&self, level: i32, message: &str) {
        let mut state = self.lock();
        if state.options.debug_logs {
            state.emit(level, Category::Debug, Category::Debug.tag(), message);
        }
    }

    /// Emits a user-facing message, gated by `UserLogs`.
    ///
    /// The prefix is the configured `UserLogPrefix`, with a timestamp when
    /// `UserLogTime` is set; the generic `LogTime` decoration does not
    /// apply.
    pub fn user(&self, message: &str) {
        let mut state = self.lock();
        if state.options.user_logs {
            state.emit(ALWAYS_ON, Category::User, Category::User.tag(), message);
        }
    }

    /// Emits a profiling line, gated by `ProfileLogs`.
    pub fn profile(&self, message: &str) {
        let mut state = self.lock();
        if state.options.profile_logs {
            state.emit(
                ALWAYS_ON,
                Category::Profile,
                Category::Profile.tag(),
                message,
            );
        }
    }

    /// Profiling convenience: entering a region.
    pub fn enter(&self, message: &str) {
        self.profile(&format!("entering: {message}"));
    }

    /// Profiling convenience: exiting a region.
    pub fn exit(&self, message: &str) {
        self.profile(&format!("exiting: {message}"));
    }

    /// Leveled compatibility entry mapping numeric levels to category tags:
    /// −1 and −100 carry the error tag, −2 the action tag, −3 no tag, and
    /// every other value the debug tag. Gated only by the numeric
    /// comparison, not by any toggle.
    ///
    /// Returns the rendered line (empty when the line was gated off).
    pub fn logx(&self, level: i32, message: &str) -> String {
        self.lock().logx_line(level, message)
    }

    /// Formats straight to the console, bypassing gates, redirects and file
    /// sinks, and returns the rendered text.
    pub fn plain(&self, message: &str) -> String {
        self.lock().sinks.console_line(message);
        message.to_owned()
    }

    /// Starts a profiling timer. The first tab splits the message into a
    /// short title and the retained body; see [`Timer`].
    pub fn start_timer(&self, message: &str) -> Timer<'_> {
        Timer::start(self, message)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerState {
    fn set_threshold(&mut self, level: i32) {
        self.threshold = level;
        self.options.debug_logs = level > 0;
    }

    /// The error path shared by the public entry point and internal
    /// failure reporting: error redirect first, local sink otherwise.
    fn error_line(&mut self, message: &str) {
        match self.redirects.try_redirect(Category::Error, "", message) {
            DispatchOutcome::Delivered => {}
            DispatchOutcome::NoTarget => {
                self.emit(ALWAYS_ON, Category::Error, Category::Error.tag(), message);
            }
            DispatchOutcome::Failed { reason } => {
                self.report_redirect_failure(Category::Error, &reason);
                self.emit(ALWAYS_ON, Category::Error, Category::Error.tag(), message);
            }
        }
    }

    /// Reports a failed delivery on the error category.
    ///
    /// The failing binding is already cleared, so the recursion through
    /// [`error_line`](Self::error_line) terminates: a failing error target
    /// cannot be asked twice.
    fn report_redirect_failure(&mut self, failed: Category, reason: &str) {
        let text = format!(
            "calling the {} log target failed - resetting to default: {reason}",
            failed.tag()
        );
        self.error_line(&text);
    }

    fn logx_line(&mut self, level: i32, message: &str) -> String {
        match level {
            -1 | -100 => self.emit(ALWAYS_ON, Category::Error, Category::Error.tag(), message),
            -2 => self.emit(-2, Category::Action, Category::Action.tag(), message),
            -3 => self.emit(-3, Category::Debug, "", message),
            _ => self.emit(level, Category::Debug, Category::Debug.tag(), message),
        }
    }

    /// The innermost write-and-format step.
    ///
    /// Applies the numeric gate and the TRACE sub-filter, renders the
    /// prefix, offers the line to the generic debug redirect (user lines to
    /// the user redirect), and otherwise writes to the resolved local sink,
    /// mirroring selected lines to the capture writer. Returns the rendered
    /// line, empty when gated off.
    fn emit(&mut self, level: i32, category: Category, tag: &str, text: &str) -> String {
        if level > self.threshold {
            return String::new();
        }
        if level == 3 && text.starts_with(TRACE_MARKER) && !self.options.trace_logs {
            return String::new();
        }
        let is_user = matches!(category, Category::User);
        let prefix = if is_user {
            self.user_prefix()
        } else {
            let stamp = if self.options.log_time {
                Some(now_timestamp())
            } else {
                None
            };
            bracketed_prefix(tag, stamp.as_deref())
        };
        let line = format!("{prefix}{text}");

        let offer = if is_user {
            Category::User
        } else {
            Category::Debug
        };
        match self.redirects.try_redirect(offer, &prefix, text) {
            DispatchOutcome::Delivered => return line,
            DispatchOutcome::NoTarget => {}
            DispatchOutcome::Failed { reason } => {
                self.report_redirect_failure(offer, &reason);
            }
        }

        let kind = if is_user {
            SinkKind::User
        } else {
            SinkKind::General
        };
        self.sinks.write_line(kind, &line);
        if !is_user && self.threshold > 2 && (level == ALWAYS_ON || level > 2) {
            self.sinks.mirror_to_capture(&line);
        }
        line
    }

    fn user_prefix(&self) -> String {
        let base = self.options.user_log_prefix.as_str();
        if self.options.user_log_time {
            format!("{base} ({}) ", now_timestamp())
        } else if base.is_empty() {
            String::new()
        } else {
            format!("{base} ")
        }
    }

    /// Opens a file sink, resolving `None` against the seeded path and an
    /// empty string against the default file name in the working directory.
    fn open_sink(&mut self, kind: SinkKind, explicit: Option<&str>) -> bool {
        let configured = match explicit {
            Some(path) => Some(path.to_owned()),
            None => match kind {
                SinkKind::General => self.options.log_file.clone(),
                SinkKind::User => self.options.user_log_file.clone(),
            },
        };
        let Some(raw) = configured else {
            // Not configured: a no-op, not an error.
            return false;
        };
        let path = if raw.is_empty() {
            default_sink_path(kind)
        } else {
            PathBuf::from(raw)
        };
        match self.sinks.open(kind, &path) {
            Ok(()) => {
                if self.options.debug_logs {
                    let text = match kind {
                        SinkKind::General => format!("set log file: {}", path.display()),
                        SinkKind::User => format!("set user log file: {}", path.display()),
                    };
                    self.emit(3, Category::Debug, Category::Debug.tag(), &text);
                }
                true
            }
            Err(err) => {
                // Reported straight to the console, never via redirect.
                let what = match kind {
                    SinkKind::General => "log file",
                    SinkKind::User => "user log file",
                };
                self.sinks.console_line(&format!(
                    "[error] {what} {} not accessible - check given path ({err})",
                    path.display()
                ));
                false
            }
        }
    }
}

fn default_sink_path(kind: SinkKind) -> PathBuf {
    std::env::current_dir().map_or_else(
        |_| PathBuf::from(kind.default_file_name()),
        |dir| dir.join(kind.default_file_name()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use debuglog_sink::SharedBuffer;

    #[test]
    fn test_threshold_couples_debug_logs_toggle() {
        let logger = Logger::with_console(SharedBuffer::new());
        logger.set_debug_level(2);
        assert!(logger.is_option("DebugLogs"));
        logger.set_debug_level(0);
        assert!(!logger.is_option("DebugLogs"));
    }

    #[test]
    fn test_malformed_threshold_string_is_ignored() {
        let logger = Logger::with_console(SharedBuffer::new());
        logger.set_debug_level(2);
        logger.set_debug_level_str("not-a-number");
        assert_eq!(logger.debug_level(), 2);
        logger.set_debug_level_str("4");
        assert_eq!(logger.debug_level(), 4);
    }

    #[test]
    fn test_unconfigured_log_file_is_a_no_op() {
        let logger = Logger::with_console(SharedBuffer::new());
        assert!(!logger.set_log_file(None));
        assert!(!logger.is_log_to_file(SinkKind::General));
    }

    #[test]
    fn test_plain_returns_rendered_text() {
        let console = SharedBuffer::new();
        let logger = Logger::with_console(console.clone());
        let rendered = logger.plain("raw line");
        assert_eq!(rendered, "raw line");
        assert_eq!(console.contents(), "raw line\n");
    }

    #[test]
    fn test_highlight_mirrors_into_option() {
        let logger = Logger::with_console(SharedBuffer::new());
        assert!(!logger.should_highlight());
        logger.highlight_on();
        assert!(logger.is_option("Highlight"));
        logger.highlight_off();
        assert!(!logger.is_option("Highlight"));
    }
}
