//! Request path rewriting for default-action routes
//!
//! All functions are pure: the caller's path is never modified.

use std::borrow::Cow;

/// Rewrites a path for a default-action route
///
/// Strips exactly one trailing `/` (if present) and appends `suffix`.
/// Returns `Cow::Borrowed` when there is no suffix to apply.
///
/// # Examples
///
/// ```
/// use simplemvc_router::path::with_default_suffix;
///
/// assert_eq!(with_default_suffix("/", Some("/index")), "/index");
/// assert_eq!(with_default_suffix("", Some("/index")), "/index");
/// assert_eq!(with_default_suffix("/posts/", Some("/index")), "/posts/index");
/// assert_eq!(with_default_suffix("/posts//", Some("/index")), "/posts//index");
/// assert_eq!(with_default_suffix("/posts", None), "/posts");
/// ```
pub fn with_default_suffix<'a>(path: &'a str, suffix: Option<&str>) -> Cow<'a, str> {
    match suffix {
        Some(suffix) => {
            let stem = path.strip_suffix('/').unwrap_or(path);
            let mut rewritten = String::with_capacity(stem.len() + suffix.len());
            rewritten.push_str(stem);
            rewritten.push_str(suffix);
            Cow::Owned(rewritten)
        }
        None => Cow::Borrowed(path),
    }
}
