/// Default gcov tool handed to the capturer.
pub const DEFAULT_GCOV: &str = "gcov";
/// Default coverage-data capturer program.
pub const DEFAULT_LCOV: &str = "lcov";
/// Default report generator program.
pub const DEFAULT_GENHTML: &str = "genhtml";

/// External tool selection loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// gcov binary passed as `--gcov-tool` (default: `gcov`).
    pub gcov: String,
    /// Capturer program (default: `lcov`).
    pub lcov: String,
    /// Report generator program (default: `genhtml`).
    pub genhtml: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            gcov: DEFAULT_GCOV.into(),
            lcov: DEFAULT_LCOV.into(),
            genhtml: DEFAULT_GENHTML.into(),
        }
    }
}

impl ToolConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var   | Default   |
    /// |-----------|-----------|
    /// | `GCOV`    | `gcov`    |
    /// | `LCOV`    | `lcov`    |
    /// | `GENHTML` | `genhtml` |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    ///
    /// Values are used exactly as given; only an empty value counts as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            gcov: resolve("GCOV", DEFAULT_GCOV),
            lcov: resolve("LCOV", DEFAULT_LCOV),
            genhtml: resolve("GENHTML", DEFAULT_GENHTML),
        }
    }
}
