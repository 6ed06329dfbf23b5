//! crates/debuglog-sink/src/sink.rs
//! Sink ownership and line routing.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// The two file-sink kinds owned by a [`SinkSet`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SinkKind {
    /// The general log file, shared by every non-user line.
    General,
    /// The user log file, reserved for user-facing lines.
    User,
}

impl SinkKind {
    /// Returns the default file name used when an empty path is supplied.
    ///
    /// The file is created in the current working directory.
    #[must_use]
    pub const fn default_file_name(self) -> &'static str {
        match self {
            Self::General => "AutomateLog.txt",
            Self::User => "UserLog.txt",
        }
    }
}

/// An open file sink together with the path it was opened at.
#[derive(Debug)]
struct FileSink {
    path: PathBuf,
    file: File,
}

/// Owns the console writer, the optional file sinks, and the optional
/// capture writer, and routes rendered lines to the right destination.
///
/// The console defaults to stdout and can be replaced, which is how tests
/// and embedding hosts observe output without touching the filesystem.
pub struct SinkSet {
    console: Box<dyn Write + Send>,
    general: Option<FileSink>,
    user: Option<FileSink>,
    capture: Option<Box<dyn Write + Send>>,
}

impl SinkSet {
    /// Creates a sink set writing to stdout, with no files and no capture.
    #[must_use]
    pub fn new() -> Self {
        Self::with_console(Box::new(io::stdout()))
    }

    /// Creates a sink set with an explicit console writer.
    #[must_use]
    pub fn with_console(console: Box<dyn Write + Send>) -> Self {
        Self {
            console,
            general: None,
            user: None,
            capture: None,
        }
    }

    /// Replaces the console writer.
    pub fn set_console(&mut self, console: Box<dyn Write + Send>) {
        self.console = console;
    }

    /// Installs or removes the capture writer used by
    /// [`mirror_to_capture`](Self::mirror_to_capture).
    pub fn set_capture(&mut self, capture: Option<Box<dyn Write + Send>>) {
        self.capture = capture;
    }

    /// Reports whether a capture writer is installed.
    #[must_use]
    pub const fn has_capture(&self) -> bool {
        self.capture.is_some()
    }

    /// Opens the file sink of the given kind at `path`, replacing any
    /// previously open handle of the same kind.
    ///
    /// The previous handle is closed before the new path is opened; on
    /// failure the kind stays closed and output degrades to the console.
    /// The file is truncated, not appended to.
    pub fn open(&mut self, kind: SinkKind, path: &Path) -> io::Result<()> {
        self.close(kind);
        let file = File::create(path)?;
        let sink = FileSink {
            path: path.to_path_buf(),
            file,
        };
        match kind {
            SinkKind::General => self.general = Some(sink),
            SinkKind::User => self.user = Some(sink),
        }
        Ok(())
    }

    /// Closes the file sink of the given kind, if open.
    pub fn close(&mut self, kind: SinkKind) {
        match kind {
            SinkKind::General => self.general = None,
            SinkKind::User => self.user = None,
        }
    }

    /// Reports whether the file sink of the given kind is open.
    #[must_use]
    pub const fn is_open(&self, kind: SinkKind) -> bool {
        match kind {
            SinkKind::General => self.general.is_some(),
            SinkKind::User => self.user.is_some(),
        }
    }

    /// Returns the path the file sink of the given kind was opened at.
    #[must_use]
    pub fn path(&self, kind: SinkKind) -> Option<&Path> {
        let sink = match kind {
            SinkKind::General => self.general.as_ref(),
            SinkKind::User => self.user.as_ref(),
        };
        sink.map(|s| s.path.as_path())
    }

    /// Writes `text` plus a newline to the resolved destination for `kind`.
    ///
    /// User lines prefer the user file, then the general file, then the
    /// console; general lines prefer the general file, then the console.
    pub fn write_line(&mut self, kind: SinkKind, text: &str) {
        let writer: &mut dyn Write = match kind {
            SinkKind::User => {
                if let Some(sink) = self.user.as_mut() {
                    &mut sink.file
                } else if let Some(sink) = self.general.as_mut() {
                    &mut sink.file
                } else {
                    self.console.as_mut()
                }
            }
            SinkKind::General => {
                if let Some(sink) = self.general.as_mut() {
                    &mut sink.file
                } else {
                    self.console.as_mut()
                }
            }
        };
        let _ = writeln!(writer, "{text}");
        let _ = writer.flush();
    }

    /// Writes `text` plus a newline directly to the console, bypassing any
    /// open file sinks. Used for open-failure diagnostics and plain output.
    pub fn console_line(&mut self, text: &str) {
        let _ = writeln!(self.console, "{text}");
        let _ = self.console.flush();
    }

    /// Mirrors `text` plus a newline to the capture writer, if installed.
    pub fn mirror_to_capture(&mut self, text: &str) {
        if let Some(capture) = self.capture.as_mut() {
            let _ = writeln!(capture, "{text}");
            let _ = capture.flush();
        }
    }
}

impl Default for SinkSet {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SinkSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinkSet")
            .field("general", &self.general)
            .field("user", &self.user)
            .field("has_capture", &self.capture.is_some())
            .finish_non_exhaustive()
    }
}
