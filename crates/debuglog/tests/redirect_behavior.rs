//! Integration tests for redirect registration and dispatch.
//!
//! These tests verify exactly-once delivery to bound targets, suppression
//! of local sinks on successful delivery, auto-disable with an error report
//! on delivery failure, and the shared-handle bind-all operation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use debuglog::{DeliverError, LogTarget, Logger, SharedBuffer};

/// Records every delivered line; can be switched into a failing mode.
struct RecordingTarget {
    lines: Mutex<Vec<String>>,
    fail: AtomicBool,
}

impl RecordingTarget {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            lines: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        })
    }

    fn failing() -> Arc<Self> {
        let target = Self::new();
        target.fail.store(true, Ordering::SeqCst);
        target
    }

    fn delivered(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl LogTarget for RecordingTarget {
    fn deliver(&self, text: &str) -> Result<(), DeliverError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DeliverError::new("target closed"));
        }
        self.lines.lock().unwrap().push(text.to_owned());
        Ok(())
    }
}

fn logger_with_console() -> (Logger, SharedBuffer) {
    let console = SharedBuffer::new();
    let logger = Logger::with_console(console.clone());
    (logger, console)
}

// ============================================================================
// Delivery and suppression
// ============================================================================

/// Verifies a bound category delivers exactly one formatted line to the
/// target and writes nothing to the local sinks.
#[test]
fn info_redirect_delivers_once_and_suppresses_sinks() {
    let (logger, console) = logger_with_console();
    let target = RecordingTarget::new();
    assert!(logger.set_logger_info(Some(target.clone())));

    logger.info("hello");

    assert_eq!(target.delivered(), ["[info] hello"]);
    assert!(console.is_empty());
}

/// Verifies each category carries its own prefix word to the target.
#[test]
fn category_prefixes_reach_the_target() {
    let (logger, console) = logger_with_console();
    let target = RecordingTarget::new();
    logger.set_logger_action(Some(target.clone()));
    logger.set_logger_error(Some(target.clone()));

    logger.action("pressed enter");
    logger.error("capture failed");

    assert_eq!(
        target.delivered(),
        ["[action] pressed enter", "[error] capture failed"]
    );
    assert!(console.is_empty());
}

/// Verifies clearing a binding restores local sink output.
#[test]
fn clearing_a_binding_restores_local_sinks() {
    let (logger, console) = logger_with_console();
    let target = RecordingTarget::new();
    logger.set_logger_info(Some(target.clone()));
    assert!(logger.set_logger_info(None));

    logger.info("back to console");

    assert!(target.delivered().is_empty());
    assert_eq!(console.contents(), "[info] back to console\n");
}

/// Verifies closures work as targets through the blanket implementation.
#[test]
fn closures_are_valid_targets() {
    let (logger, _console) = logger_with_console();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let target: Arc<dyn LogTarget> = Arc::new(move |text: &str| -> Result<(), DeliverError> {
        sink.lock().unwrap().push(text.to_owned());
        Ok(())
    });
    logger.set_logger_user(Some(target));

    logger.user("hi there");

    assert_eq!(seen.lock().unwrap().as_slice(), ["user hi there"]);
}

// ============================================================================
// Failure and auto-disable
// ============================================================================

/// Verifies a failing target produces exactly one local error report and
/// becomes inert: subsequent messages go to the local sink only.
#[test]
fn failing_target_auto_disables_with_one_error_report() {
    let (logger, console) = logger_with_console();
    let target = RecordingTarget::failing();
    logger.set_logger_info(Some(target.clone()));

    logger.info("first message");

    let lines = console.lines();
    let error_reports: Vec<&String> = lines
        .iter()
        .filter(|line| line.starts_with("[error] calling the info log target failed"))
        .collect();
    assert_eq!(error_reports.len(), 1);
    assert!(error_reports[0].contains("target closed"));
    // The failing message itself fell back to the local sink.
    assert!(lines.contains(&"[info] first message".to_owned()));

    console.clear();
    logger.info("second message");
    assert_eq!(console.contents(), "[info] second message\n");
    assert!(target.delivered().is_empty());
}

/// Verifies a failing error target cannot recurse: the report lands on the
/// local sink after the binding is cleared.
#[test]
fn failing_error_target_reports_locally() {
    let (logger, console) = logger_with_console();
    logger.set_logger_error(Some(RecordingTarget::failing()));

    logger.error("boom");

    let output = console.contents();
    assert!(output.contains("[error] calling the error log target failed"));
    assert!(output.contains("[error] boom"));
}

// ============================================================================
// Shared handle and bind-all
// ============================================================================

/// Verifies bind-all fails without a registered handle.
#[test]
fn bind_all_without_handle_returns_false() {
    let (logger, _console) = logger_with_console();
    assert!(!logger.set_logger_all());
}

/// Verifies bind-all routes all five redirectable categories to the shared
/// handle.
#[test]
fn bind_all_routes_every_redirectable_category() {
    let (logger, console) = logger_with_console();
    let target = RecordingTarget::new();
    logger.set_logger(target.clone());
    assert!(logger.set_logger_all());

    logger.user("u");
    logger.info("i");
    logger.action("a");
    logger.error("e");
    logger.set_debug_level(1);
    logger.debug("d");

    let delivered = target.delivered();
    assert_eq!(delivered[0], "user u");
    assert_eq!(delivered[1], "[info] i");
    assert_eq!(delivered[2], "[action] a");
    assert_eq!(delivered[3], "[error] e");
    assert_eq!(delivered[4], "[debug] d");
    assert!(console.is_empty());
}

/// Verifies re-registering the shared handle keeps per-category bindings.
#[test]
fn reregistering_the_handle_keeps_bindings() {
    let (logger, console) = logger_with_console();
    let bound = RecordingTarget::new();
    logger.set_logger(RecordingTarget::new());
    logger.set_logger_info(Some(bound.clone()));

    logger.set_logger(RecordingTarget::new());
    logger.info("still redirected");

    assert_eq!(bound.delivered(), ["[info] still redirected"]);
    assert!(console.is_empty());
}

/// Verifies the no-prefix registration strips category prefixes from
/// delivered lines.
#[test]
fn no_prefix_registration_delivers_bare_text() {
    let (logger, _console) = logger_with_console();
    let target = RecordingTarget::new();
    logger.set_logger_no_prefix(target.clone());
    assert!(logger.set_logger_all());

    logger.error("bare");

    assert_eq!(target.delivered(), ["bare"]);
}

// ============================================================================
// Generic-path offers
// ============================================================================

/// Verifies a line not consumed by its own category is offered to the
/// debug redirect on the shared write path, carrying the full local prefix.
#[test]
fn unconsumed_lines_are_offered_to_the_debug_target() {
    let (logger, console) = logger_with_console();
    let target = RecordingTarget::new();
    logger.set_logger_debug(Some(target.clone()));

    logger.error("routed via debug slot");
    logger.test("harness line");

    assert_eq!(
        target.delivered(),
        ["[error] routed via debug slot", "[test] harness line"]
    );
    assert!(console.is_empty());
}

/// Verifies user lines are offered to the user redirect, not the debug one.
#[test]
fn user_lines_prefer_the_user_target() {
    let (logger, console) = logger_with_console();
    let debug_target = RecordingTarget::new();
    let user_target = RecordingTarget::new();
    logger.set_logger_debug(Some(debug_target.clone()));
    logger.set_logger_user(Some(user_target.clone()));

    logger.user("hello");

    assert_eq!(user_target.delivered(), ["user hello"]);
    assert!(debug_target.delivered().is_empty());
    assert!(console.is_empty());
}
