#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/debuglog/src/lib.rs
//!
//! # Overview
//!
//! `debuglog` is a process-wide logging and lightweight profiling facility
//! for an automation toolkit. Messages are classified by semantic category
//! (info, action, error, debug, user, test, profile), filtered by a numeric
//! verbosity threshold and per-category toggles, and routed either to local
//! console/file sinks or to externally bound redirect targets. A stopwatch
//! [`Timer`] measures elapsed time across code regions and reports through
//! the profile category.
//!
//! # Design
//!
//! All mutable state (threshold, option store, redirect table, sinks) lives
//! in a [`Logger`] context behind a single lock, so configuration changes
//! and dispatch serialize against each other. A process-global instance is
//! available via [`global()`], seeded from the `AUTOMATE_DEBUG`,
//! `AUTOMATE_LOGFILE` and `AUTOMATE_LOGFILE_USER` environment variables;
//! tests construct fresh instances with [`Logger::with_console`].
//!
//! Redirect targets are first-class capabilities: anything implementing
//! [`LogTarget`] (including plain closures) can be bound per category. A
//! target that fails at delivery time is reported on the error category,
//! unbound, and the line falls back to the local sinks.
//!
//! # Invariants
//!
//! - Error and test messages are always emitted, regardless of any toggle.
//! - A message at numeric level `L` passes the gate only if
//!   `L <= threshold`; raising the threshold above 0 turns the `DebugLogs`
//!   toggle on and lowering it to 0 turns it off.
//! - An unbound redirect slot behaves exactly like an absent one; a
//!   delivered line is never also written to a local sink.
//! - At most one general-log and one user-log file handle exist at any
//!   instant (close-before-reopen).
//!
//! # Errors
//!
//! Sink open failures surface as console diagnostics and a `false` return;
//! redirect delivery failures are reported through the error category and
//! auto-disable the binding. Malformed threshold strings are ignored.
//! Formatting happens in the caller through the [`log_info!`]-family macros,
//! so template/argument mismatches are compile errors. No error terminates
//! the process.
//!
//! # Examples
//!
//! ```
//! use debuglog::Logger;
//! use debuglog_sink::SharedBuffer;
//!
//! let console = SharedBuffer::new();
//! let logger = Logger::with_console(console.clone());
//!
//! logger.set_debug_level(1);
//! logger.debug("probing the screen");
//! logger.error("capture failed");
//!
//! let output = console.contents();
//! assert!(output.contains("[debug] probing the screen"));
//! assert!(output.contains("[error] capture failed"));
//! ```

mod category;
mod format;
mod logger;
mod macros;
mod options;
mod redirect;
mod timer;
#[cfg(feature = "tracing")]
mod tracing_target;

pub use category::Category;
pub use format::format_timestamp;
pub use logger::{ENV_DEBUG_LEVEL, ENV_LOG_FILE, ENV_USER_LOG_FILE, Logger, global};
pub use options::Options;
pub use redirect::{DeliverError, LogTarget};
pub use timer::Timer;
#[cfg(feature = "tracing")]
pub use tracing_target::TracingTarget;

// Re-exported so embedding hosts and tests can name sink kinds and build
// in-memory consoles without depending on the sink crate directly.
pub use debuglog_sink::{SharedBuffer, SinkKind};
