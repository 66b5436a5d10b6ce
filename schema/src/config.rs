//! Output formatting configuration.
//!
//! The serializer only takes a `pretty` flag. This module is where that flag
//! comes from when the caller wants environment-driven behavior: minified JSON
//! in production, indented JSON everywhere else.

/// Set (to any value) to force compact JSON output.
pub const MINIFIED_ENV: &str = "SCHEMA_DOT_ORG_MINIFIED_JSON";

/// Deployment environment name; `production` selects compact JSON output.
pub const ENVIRONMENT_ENV: &str = "SCHEMA_DOT_ORG_ENV";

const PRODUCTION: &str = "production";

/// How rendered JSON is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatting {
    /// Indent output with two spaces per level.
    pub pretty: bool,
}

impl Formatting {
    /// Indented output.
    #[must_use]
    pub const fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Single-line output with no insignificant whitespace.
    #[must_use]
    pub const fn compact() -> Self {
        Self { pretty: false }
    }

    /// Reads [`MINIFIED_ENV`] and [`ENVIRONMENT_ENV`] from the process
    /// environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves formatting through an arbitrary variable lookup.
    ///
    /// Output is compact when the minified flag is present or the environment
    /// is `production` (case-insensitive); pretty otherwise.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let minified = lookup(MINIFIED_ENV).is_some();
        let production = lookup(ENVIRONMENT_ENV)
            .is_some_and(|env| env.trim().eq_ignore_ascii_case(PRODUCTION));
        let formatting = if minified || production {
            Self::compact()
        } else {
            Self::pretty()
        };
        tracing::debug!(minified, production, pretty = formatting.pretty, "resolved JSON-LD formatting");
        formatting
    }
}

impl Default for Formatting {
    fn default() -> Self {
        Self::pretty()
    }
}
