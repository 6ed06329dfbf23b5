//! crates/debuglog/src/tracing_target.rs
//! Redirect target forwarding delivered lines as tracing events.
//!
//! This is the bridge for hosts that already run a `tracing` subscriber:
//! bind a [`TracingTarget`] to one or more categories and every redirected
//! line becomes a `tracing` event under the `debuglog` target.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use debuglog::{Logger, TracingTarget};
//!
//! let logger = Logger::new();
//! logger.set_logger_error(Some(Arc::new(TracingTarget::with_level(tracing::Level::ERROR))));
//! logger.set_logger_info(Some(Arc::new(TracingTarget::new())));
//! ```

use tracing::Level;

use crate::redirect::{DeliverError, LogTarget};

/// A [`LogTarget`] that emits each delivered line as a `tracing` event.
pub struct TracingTarget {
    level: Level,
}

impl TracingTarget {
    /// Creates a target emitting at `INFO`.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_level(Level::INFO)
    }

    /// Creates a target emitting at the given level.
    #[must_use]
    pub const fn with_level(level: Level) -> Self {
        Self { level }
    }
}

impl Default for TracingTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl LogTarget for TracingTarget {
    fn deliver(&self, text: &str) -> Result<(), DeliverError> {
        if self.level == Level::ERROR {
            tracing::error!(target: "debuglog", "{text}");
        } else if self.level == Level::WARN {
            tracing::warn!(target: "debuglog", "{text}");
        } else if self.level == Level::DEBUG {
            tracing::debug!(target: "debuglog", "{text}");
        } else if self.level == Level::TRACE {
            tracing::trace!(target: "debuglog", "{text}");
        } else {
            tracing::info!(target: "debuglog", "{text}");
        }
        Ok(())
    }
}
