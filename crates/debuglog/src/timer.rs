//! crates/debuglog/src/timer.rs
//! Start/lap/end stopwatch sessions emitting profiling lines.

use std::time::Instant;

use crate::logger::Logger;

/// A profiling stopwatch tied to a [`Logger`].
///
/// Created by [`Logger::start_timer`]. The start message may carry a short
/// title separated from the body by the first tab character; the title is
/// used as the label on lap and end lines, the body (tabs replaced by
/// spaces) on the start line. `lap` keeps the timer running; `end` is
/// one-shot and clears the start instant, so a second `end` reports a
/// timer-error profiling line and returns −1.
///
/// Timers are plain values owned by a single logical unit of work; they
/// carry no locking of their own.
///
/// # Examples
///
/// ```
/// use debuglog::Logger;
///
/// let logger = Logger::new();
/// let mut timer = logger.start_timer("search\tscanning the screen");
/// // ... the measured region ...
/// let elapsed_ms = timer.end();
/// assert!(elapsed_ms >= 0);
/// assert_eq!(timer.end(), -1);
/// ```
pub struct Timer<'a> {
    logger: &'a Logger,
    begin: Option<Instant>,
    title: Option<String>,
    message: String,
}

impl<'a> Timer<'a> {
    pub(crate) fn start(logger: &'a Logger, message: &str) -> Self {
        let (title, message) = match message.find('\t') {
            Some(pos) => (
                Some(message[..pos].to_owned()),
                message.replace('\t', " "),
            ),
            None => (None, message.to_owned()),
        };
        if !message.is_empty() {
            logger.profile(&format!("TStart: {message}"));
        }
        Self {
            logger,
            begin: Some(Instant::now()),
            title,
            message,
        }
    }

    /// Stops the timer, emits the end profiling line, and returns the
    /// elapsed milliseconds. Returns −1 when the timer is not running.
    pub fn end(&mut self) -> i64 {
        let label = self.title.clone().unwrap_or_else(|| self.message.clone());
        self.finish(&label, false)
    }

    /// Emits a lap profiling line without stopping the timer and returns
    /// the elapsed milliseconds. Returns −1 when the timer is not running.
    pub fn lap(&mut self, note: &str) -> i64 {
        let base = self.title.as_deref().unwrap_or(self.message.as_str());
        let label = format!("({note}) {base}");
        self.finish(&label, true)
    }

    /// Reports whether the timer is still running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.begin.is_some()
    }

    fn finish(&mut self, label: &str, is_lap: bool) -> i64 {
        let Some(begin) = self.begin else {
            self.logger
                .profile(&format!("TError: timer not started ({label})"));
            return -1;
        };
        let elapsed = begin.elapsed();
        if !is_lap {
            self.begin = None;
        }
        if !label.is_empty() {
            let seconds = elapsed.as_secs_f64();
            let head = if is_lap { "TLap:" } else { "TEnd" };
            self.logger
                .profile(&format!("{head} ({seconds:.3} sec): {label}"));
        }
        i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
    }
}
