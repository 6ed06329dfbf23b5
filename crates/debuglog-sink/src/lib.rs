#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/debuglog-sink/src/lib.rs
//!
//! # Overview
//!
//! `debuglog-sink` provides the local output destinations used by the
//! `debuglog` facility: a console writer that is always available, up to two
//! file sinks (a general log and a user log) that can replace the console on
//! demand, and an optional capture writer that tees selected lines for an
//! embedding host.
//!
//! # Design
//!
//! The crate exposes [`SinkSet`], which owns all destinations and resolves
//! where a given line lands. File sinks are opened with close-before-reopen
//! semantics: the previous handle of the same kind is dropped before the new
//! path is opened, so at most one handle per kind exists at any instant.
//! User-log lines prefer the user file, then fall back to the general file,
//! then to the console; general lines skip the user file.
//!
//! # Invariants
//!
//! - At most one console writer, one general-log handle, and one user-log
//!   handle at any instant.
//! - Opening a sink never leaves a stale handle behind; a failed open leaves
//!   that kind closed and output degrades to the console.
//! - Line writes are best effort and never panic; failures to an already-open
//!   sink are silently dropped. Open failures surface as [`std::io::Error`].
//!
//! # Errors
//!
//! Only [`SinkSet::open`] reports errors, as [`std::io::Error`] values from
//! file creation. Per-line write errors are intentionally swallowed so a full
//! disk cannot take down the host application.

mod shared_buffer;
mod sink;

pub use shared_buffer::SharedBuffer;
pub use sink::{SinkKind, SinkSet};
