//! Integration tests for user-facing output.
//!
//! These tests verify the user prefix and its independent timestamp policy,
//! the UserLogs toggle, and the configurable prefix word.

use debuglog::{Logger, SharedBuffer};

fn logger_with_console() -> (Logger, SharedBuffer) {
    let console = SharedBuffer::new();
    let logger = Logger::with_console(console.clone());
    (logger, console)
}

/// Verifies a user line carries the prefix and no timestamp by default.
#[test]
fn user_line_has_prefix_without_timestamp() {
    let (logger, console) = logger_with_console();
    logger.user("hi");
    assert_eq!(console.contents(), "user hi\n");
}

/// Verifies UserLogTime adds a timestamp between prefix and message.
#[test]
fn user_log_time_adds_a_timestamp() {
    let (logger, console) = logger_with_console();
    logger.set_option("UserLogTime", true);
    logger.user("hi");

    let line = console.contents();
    assert!(line.starts_with("user ("));
    // The rendering is YYYY/MM/DD HH:MM:SS.
    assert!(line.contains('/'));
    assert!(line.contains(':'));
    assert!(line.ends_with(") hi\n"));
}

/// Verifies the user timestamp is independent of the generic LogTime flag.
#[test]
fn generic_log_time_does_not_decorate_user_lines() {
    let (logger, console) = logger_with_console();
    logger.set_option("LogTime", true);
    logger.user("hi");
    assert_eq!(console.contents(), "user hi\n");
}

/// Verifies LogTime decorates non-user prefixes.
#[test]
fn log_time_decorates_tagged_prefixes() {
    let (logger, console) = logger_with_console();
    logger.set_option("LogTime", true);
    logger.error("boom");

    let line = console.contents();
    assert!(line.starts_with("[error ("));
    assert!(line.ends_with(")] boom\n"));
}

/// Verifies the prefix word is configurable.
#[test]
fn user_prefix_is_configurable() {
    let (logger, console) = logger_with_console();
    logger.set_user_log_prefix("robot");
    logger.user("step done");
    assert_eq!(console.contents(), "robot step done\n");
}

/// Verifies the UserLogs toggle suppresses user lines entirely.
#[test]
fn user_logs_toggle_suppresses_output() {
    let (logger, console) = logger_with_console();
    logger.set_option("UserLogs", false);
    logger.user("hi");
    assert!(console.is_empty());
}

/// Verifies an empty prefix leaves the bare message.
#[test]
fn empty_prefix_leaves_bare_message() {
    let (logger, console) = logger_with_console();
    logger.set_user_log_prefix("");
    logger.user("bare");
    assert_eq!(console.contents(), "bare\n");
}
