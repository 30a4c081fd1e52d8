//! Parser settings.

use std::env;

/// Default cap on call nesting. Real filters rarely pass a depth of 5.
pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest call nesting accepted before parsing is aborted; the root call
    /// is depth 1
    pub max_depth: usize,

    /// Unwrap a surrounding markdown code fence before tokenizing
    pub strip_code_fences: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strip_code_fences: true,
        }
    }
}

impl ParserConfig {
    /// Defaults overridden by `SIFT_MAX_DEPTH` and `SIFT_STRIP_CODE_FENCES`.
    /// Unparsable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ParserConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            max_depth: lookup("SIFT_MAX_DEPTH")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.max_depth),
            strip_code_fences: lookup("SIFT_STRIP_CODE_FENCES")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.strip_code_fences),
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_strip_code_fences(mut self, strip: bool) -> Self {
        self.strip_code_fences = strip;
        self
    }
}

/// `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`, in any case.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
