//! crates/debuglog/src/macros.rs
//! Convenience macros routing format arguments to the global logger.
//!
//! Each macro renders its arguments with the standard formatting machinery
//! before handing the text to the matching [`Logger`](crate::Logger) entry
//! point, so a template/argument mismatch is a compile error.

/// Emit an error message through the global logger.
///
/// # Example
/// ```
/// use debuglog::log_error;
///
/// log_error!("capture failed after {} attempts", 3);
/// ```
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::global().error(&::std::format!($($arg)*));
    };
}

/// Emit an informational message through the global logger.
///
/// # Example
/// ```
/// use debuglog::log_info;
///
/// log_info!("loaded {} images", 12);
/// ```
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::global().info(&::std::format!($($arg)*));
    };
}

/// Emit an action trace through the global logger.
///
/// # Example
/// ```
/// use debuglog::log_action;
///
/// log_action!("click at ({}, {})", 100, 200);
/// ```
#[macro_export]
macro_rules! log_action {
    ($($arg:tt)*) => {
        $crate::global().action(&::std::format!($($arg)*));
    };
}

/// Emit a level-0 debug message through the global logger.
///
/// # Example
/// ```
/// use debuglog::log_debug;
///
/// log_debug!("match score {:.2}", 0.97);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::global().debug(&::std::format!($($arg)*));
    };
}

/// Emit a leveled debug message through the global logger.
///
/// # Example
/// ```
/// use debuglog::log_debug_at;
///
/// log_debug_at!(3, "retry {} of {}", 2, 5);
/// ```
#[macro_export]
macro_rules! log_debug_at {
    ($level:expr, $($arg:tt)*) => {
        $crate::global().debug_at($level, &::std::format!($($arg)*));
    };
}

/// Emit a user-facing message through the global logger.
///
/// # Example
/// ```
/// use debuglog::log_user;
///
/// log_user!("step {} done", 4);
/// ```
#[macro_export]
macro_rules! log_user {
    ($($arg:tt)*) => {
        $crate::global().user(&::std::format!($($arg)*));
    };
}

/// Emit a test-harness message through the global logger.
///
/// # Example
/// ```
/// use debuglog::log_test;
///
/// log_test!("checking region {}", "top-left");
/// ```
#[macro_export]
macro_rules! log_test {
    ($($arg:tt)*) => {
        $crate::global().test(&::std::format!($($arg)*));
    };
}

/// Emit a profiling line through the global logger.
///
/// # Example
/// ```
/// use debuglog::log_profile;
///
/// log_profile!("screen scan took {} ms", 42);
/// ```
#[macro_export]
macro_rules! log_profile {
    ($($arg:tt)*) => {
        $crate::global().profile(&::std::format!($($arg)*));
    };
}
