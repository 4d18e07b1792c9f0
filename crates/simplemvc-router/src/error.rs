//! Errors raised while compiling route templates

use thiserror::Error;

/// Route compilation failure
///
/// Permissive compilation only fails when the assembled pattern is not a
/// valid regex. The other variants are produced by [`CompileMode::Strict`].
///
/// [`CompileMode::Strict`]: crate::CompileMode::Strict
#[derive(Debug, Error)]
pub enum RouteError {
    /// A bare `:` segment, which would capture into an unnamed placeholder
    #[error("empty placeholder name in route template `{template}`")]
    EmptyPlaceholder { template: String },

    /// A literal segment carrying regex syntax that is copied verbatim into the pattern
    #[error("literal segment `{segment}` in route template `{template}` contains regex metacharacters")]
    RegexMetacharacter { template: String, segment: String },

    /// The assembled pattern was rejected by the regex engine
    #[error("route template `{template}` compiles to an invalid pattern `{pattern}`")]
    InvalidPattern {
        template: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
