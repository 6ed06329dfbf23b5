//! crates/debuglog/src/options.rs
//! The option store consumed by the logging facility.

/// Named boolean and string options controlling the facility.
///
/// The store is the configuration surface of the logger: per-category
/// toggles, timestamp flags, the user-log prefix, and the file paths seeded
/// once at construction. Fields are public for direct use; the string-keyed
/// accessors ([`flag`](Self::flag), [`set_flag`](Self::set_flag)) exist for
/// embedding hosts that configure by name.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    /// Emit action traces (`ActionLogs`).
    pub action_logs: bool,
    /// Emit informational messages (`InfoLogs`).
    pub info_logs: bool,
    /// Emit debug messages (`DebugLogs`); kept in sync with the numeric
    /// verbosity level by [`Logger::set_debug_level`](crate::Logger::set_debug_level).
    pub debug_logs: bool,
    /// Emit user-facing messages (`UserLogs`).
    pub user_logs: bool,
    /// Emit profiling lines (`ProfileLogs`).
    pub profile_logs: bool,
    /// Emit `TRACE: ` lines at verbosity 3 (`TraceLogs`).
    pub trace_logs: bool,
    /// Append a timestamp to non-user prefixes (`LogTime`).
    pub log_time: bool,
    /// Append a timestamp to the user prefix (`UserLogTime`).
    pub user_log_time: bool,
    /// Visual match highlighting requested by the host (`Highlight`).
    pub highlight: bool,
    /// Prefix word for user-facing lines (`UserLogPrefix`).
    pub user_log_prefix: String,
    /// General log file path seeded at construction, consumed when
    /// [`Logger::set_log_file`](crate::Logger::set_log_file) is called with `None`.
    pub log_file: Option<String>,
    /// User log file path seeded at construction.
    pub user_log_file: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            action_logs: true,
            info_logs: true,
            debug_logs: false,
            user_logs: true,
            profile_logs: false,
            trace_logs: false,
            log_time: false,
            user_log_time: false,
            highlight: false,
            user_log_prefix: "user".to_owned(),
            log_file: None,
            user_log_file: None,
        }
    }
}

impl Options {
    /// Creates the store with its default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the boolean option named `key`, or `false` for unknown keys.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        match key {
            "ActionLogs" => self.action_logs,
            "InfoLogs" => self.info_logs,
            "DebugLogs" => self.debug_logs,
            "UserLogs" => self.user_logs,
            "ProfileLogs" => self.profile_logs,
            "TraceLogs" => self.trace_logs,
            "LogTime" => self.log_time,
            "UserLogTime" => self.user_log_time,
            "Highlight" => self.highlight,
            _ => false,
        }
    }

    /// Sets the boolean option named `key`.
    pub fn set_flag(&mut self, key: &str, value: bool) -> Result<(), String> {
        match key {
            "ActionLogs" => self.action_logs = value,
            "InfoLogs" => self.info_logs = value,
            "DebugLogs" => self.debug_logs = value,
            "UserLogs" => self.user_logs = value,
            "ProfileLogs" => self.profile_logs = value,
            "TraceLogs" => self.trace_logs = value,
            "LogTime" => self.log_time = value,
            "UserLogTime" => self.user_log_time = value,
            "Highlight" => self.highlight = value,
            _ => return Err(format!("unknown boolean option: {key}")),
        }
        Ok(())
    }

    /// Returns the string option named `key`.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        match key {
            "UserLogPrefix" => Some(self.user_log_prefix.as_str()),
            "LogFile" => self.log_file.as_deref(),
            "UserLogFile" => self.user_log_file.as_deref(),
            _ => None,
        }
    }

    /// Sets the string option named `key`.
    pub fn set_text(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "UserLogPrefix" => self.user_log_prefix = value.to_owned(),
            "LogFile" => self.log_file = Some(value.to_owned()),
            "UserLogFile" => self.user_log_file = Some(value.to_owned()),
            _ => return Err(format!("unknown string option: {key}")),
        }
        Ok(())
    }
}
