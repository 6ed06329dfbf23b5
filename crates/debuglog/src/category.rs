//! crates/debuglog/src/category.rs
//! Semantic message categories and their gating rules.

/// Semantic class of a log line.
///
/// Every entry point of the facility belongs to exactly one category. A
/// category decides three things: the tag word rendered in the local prefix,
/// the option-store toggle that gates emission, and whether the line may be
/// intercepted by a redirect target.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Informational messages.
    Info,
    /// Action traces (click, type, ... in the embedding toolkit).
    Action,
    /// Error messages, never suppressible.
    Error,
    /// Debug messages, additionally gated by the numeric verbosity level.
    Debug,
    /// User-facing messages with their own prefix and timestamp policy.
    User,
    /// Test harness messages, never suppressible.
    Test,
    /// Profiling lines emitted by [`Timer`](crate::Timer) and `profile()`.
    Profile,
}

impl Category {
    /// Returns the lowercase tag word rendered in the local prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use debuglog::Category;
    ///
    /// assert_eq!(Category::Info.tag(), "info");
    /// assert_eq!(Category::Error.tag(), "error");
    /// ```
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Action => "action",
            Self::Error => "error",
            Self::Debug => "debug",
            Self::User => "user",
            Self::Test => "test",
            Self::Profile => "profile",
        }
    }

    /// Returns the option-store key gating this category, or `None` for the
    /// categories that are always emitted.
    #[must_use]
    pub const fn toggle_key(self) -> Option<&'static str> {
        match self {
            Self::Info => Some("InfoLogs"),
            Self::Action => Some("ActionLogs"),
            Self::Debug => Some("DebugLogs"),
            Self::User => Some("UserLogs"),
            Self::Profile => Some("ProfileLogs"),
            Self::Error | Self::Test => None,
        }
    }

    /// Reports whether the category bypasses every toggle.
    #[must_use]
    pub const fn is_always_on(self) -> bool {
        matches!(self, Self::Error | Self::Test)
    }

    /// Reports whether a redirect target may intercept this category.
    #[must_use]
    pub const fn is_redirectable(self) -> bool {
        !matches!(self, Self::Test | Self::Profile)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_lowercase_words() {
        assert_eq!(Category::Action.tag(), "action");
        assert_eq!(Category::User.tag(), "user");
        assert_eq!(Category::Profile.tag(), "profile");
    }

    #[test]
    fn test_error_and_test_are_always_on() {
        assert!(Category::Error.is_always_on());
        assert!(Category::Test.is_always_on());
        assert!(!Category::Debug.is_always_on());
        assert_eq!(Category::Error.toggle_key(), None);
        assert_eq!(Category::Test.toggle_key(), None);
    }

    #[test]
    fn test_toggle_keys_match_option_store() {
        assert_eq!(Category::Info.toggle_key(), Some("InfoLogs"));
        assert_eq!(Category::Action.toggle_key(), Some("ActionLogs"));
        assert_eq!(Category::Debug.toggle_key(), Some("DebugLogs"));
        assert_eq!(Category::User.toggle_key(), Some("UserLogs"));
        assert_eq!(Category::Profile.toggle_key(), Some("ProfileLogs"));
    }

    #[test]
    fn test_test_and_profile_have_no_redirect() {
        assert!(!Category::Test.is_redirectable());
        assert!(!Category::Profile.is_redirectable());
        assert!(Category::User.is_redirectable());
        assert!(Category::Error.is_redirectable());
    }

    #[test]
    fn test_display_uses_tag() {
        assert_eq!(format!("{}", Category::Debug), "debug");
    }
}
