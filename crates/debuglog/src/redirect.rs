//! crates/debuglog/src/redirect.rs
//! Redirect targets: the delivery capability and the per-category table.

use std::fmt;
use std::sync::Arc;

use crate::category::Category;

/// Error returned by a [`LogTarget`] that failed to deliver a line.
///
/// The facility only ever inspects the rendered reason, which is reported on
/// the error category before the failing binding is cleared.
#[derive(Debug)]
pub struct DeliverError {
    reason: String,
}

impl DeliverError {
    /// Creates an error from any displayable reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Returns the failure reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for DeliverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

impl std::error::Error for DeliverError {}

impl From<std::io::Error> for DeliverError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Delivery capability for redirected log lines.
///
/// A target receives the fully rendered line (category prefix included,
/// unless prefixing was disabled at registration) and either accepts it or
/// reports a failure. A failing target is automatically unbound from its
/// category and all subsequent lines fall back to the local sinks until it
/// is re-bound.
///
/// A target is invoked while the logger's internal lock is held: an
/// implementation must not call back into the same [`Logger`](crate::Logger),
/// or it will deadlock.
///
/// Any `Fn(&str) -> Result<(), DeliverError>` closure is a target:
///
/// ```
/// use std::sync::Arc;
/// use debuglog::{DeliverError, LogTarget, Logger};
///
/// let logger = Logger::new();
/// let target: Arc<dyn LogTarget> = Arc::new(|line: &str| -> Result<(), DeliverError> {
///     eprintln!("intercepted: {line}");
///     Ok(())
/// });
/// logger.set_logger_error(Some(target));
/// ```
pub trait LogTarget: Send + Sync {
    /// Delivers one rendered line.
    fn deliver(&self, text: &str) -> Result<(), DeliverError>;
}

impl<F> LogTarget for F
where
    F: Fn(&str) -> Result<(), DeliverError> + Send + Sync,
{
    fn deliver(&self, text: &str) -> Result<(), DeliverError> {
        self(text)
    }
}

/// Result of offering a line to a category's redirect slot.
pub(crate) enum DispatchOutcome {
    /// No capability is bound for the category; the caller emits locally.
    NoTarget,
    /// The target accepted the line; local sinks must stay silent.
    Delivered,
    /// The target failed; its binding has been cleared and the caller both
    /// reports the failure and falls back to local sinks.
    Failed {
        /// Rendered failure reason from the target.
        reason: String,
    },
}

/// One redirect slot: an optional capability plus the category prefix.
struct Slot {
    target: Option<Arc<dyn LogTarget>>,
    prefix: String,
}

impl Slot {
    fn new(prefix: &str) -> Self {
        Self {
            target: None,
            prefix: prefix.to_owned(),
        }
    }
}

// Slot order also fixes the bind-all sequence.
const SLOT_USER: usize = 0;
const SLOT_INFO: usize = 1;
const SLOT_ACTION: usize = 2;
const SLOT_ERROR: usize = 3;
const SLOT_DEBUG: usize = 4;
const SLOT_COUNT: usize = 5;

const fn slot_index(category: Category) -> Option<usize> {
    match category {
        Category::User => Some(SLOT_USER),
        Category::Info => Some(SLOT_INFO),
        Category::Action => Some(SLOT_ACTION),
        Category::Error => Some(SLOT_ERROR),
        Category::Debug => Some(SLOT_DEBUG),
        Category::Test | Category::Profile => None,
    }
}

/// Per-category redirect bindings plus the shared handle.
///
/// The handle registered by `set_logger` is only consumed by the bind-all
/// operation; per-category bindings carry their own capability and survive
/// re-registration of the handle.
pub(crate) struct RedirectTable {
    handle: Option<Arc<dyn LogTarget>>,
    prefix_all: bool,
    slots: [Slot; SLOT_COUNT],
}

impl RedirectTable {
    pub(crate) fn new() -> Self {
        Self {
            handle: None,
            prefix_all: true,
            // The debug and user slots have no prefix of their own and fall
            // back to the caller-supplied default at dispatch time.
            slots: [
                Slot::new(""),
                Slot::new("[info] "),
                Slot::new("[action] "),
                Slot::new("[error] "),
                Slot::new(""),
            ],
        }
    }

    /// Registers the shared handle. Existing per-category bindings persist.
    pub(crate) fn set_handle(&mut self, handle: Arc<dyn LogTarget>, prefix_all: bool) {
        self.handle = Some(handle);
        self.prefix_all = prefix_all;
    }

    /// Binds the shared handle to all five categories.
    ///
    /// Returns `false` when no handle has been registered.
    pub(crate) fn bind_all(&mut self) -> bool {
        let Some(handle) = self.handle.clone() else {
            return false;
        };
        for slot in &mut self.slots {
            slot.target = Some(handle.clone());
        }
        true
    }

    /// Binds or clears one category. `None` restores local sinks.
    pub(crate) fn bind(&mut self, category: Category, target: Option<Arc<dyn LogTarget>>) -> bool {
        match slot_index(category) {
            Some(idx) => {
                self.slots[idx].target = target;
                true
            }
            None => false,
        }
    }

    /// Offers a line to the category's redirect slot.
    ///
    /// The effective prefix is the slot's own prefix, falling back to
    /// `default_prefix` when the slot prefix is empty, or `""` when
    /// prefixing was disabled at registration. On failure the binding is
    /// cleared before returning.
    pub(crate) fn try_redirect(
        &mut self,
        category: Category,
        default_prefix: &str,
        text: &str,
    ) -> DispatchOutcome {
        let Some(idx) = slot_index(category) else {
            return DispatchOutcome::NoTarget;
        };
        let Some(target) = self.slots[idx].target.clone() else {
            return DispatchOutcome::NoTarget;
        };
        let prefix = if self.prefix_all {
            if self.slots[idx].prefix.is_empty() {
                default_prefix
            } else {
                self.slots[idx].prefix.as_str()
            }
        } else {
            ""
        };
        let line = format!("{prefix}{text}");
        match target.deliver(&line) {
            Ok(()) => DispatchOutcome::Delivered,
            Err(err) => {
                self.slots[idx].target = None;
                DispatchOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }
}
