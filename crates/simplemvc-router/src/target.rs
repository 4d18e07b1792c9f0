//! `controller#action` targets and controller name casing

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;

static TARGET_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<controller>[^#]+)#(?P<action>[^#]+)$").unwrap()
});

/// A parsed `controller#action` pair
///
/// The controller is kept as written; use [`Target::controller_name`] for the
/// camel-cased form handed to a [`ControllerResolver`](crate::ControllerResolver).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    controller: String,
    action: String,
}

impl Target {
    /// Parses a `controller#action` string
    ///
    /// Both sides must be non-empty and neither may contain `#`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simplemvc_router::Target;
    ///
    /// let target = Target::parse("posts#show").unwrap();
    /// assert_eq!(target.controller(), "posts");
    /// assert_eq!(target.action(), "show");
    ///
    /// assert!(Target::parse("#index").is_none());
    /// assert!(Target::parse("posts#").is_none());
    /// assert!(Target::parse("posts").is_none());
    /// ```
    pub fn parse(target: &str) -> Option<Self> {
        TARGET_REGEX.captures(target).map(|caps| Target {
            controller: caps["controller"].to_string(),
            action: caps["action"].to_string(),
        })
    }

    /// Builds the target string from `controller` and `action` placeholders
    ///
    /// Missing entries become empty segments, so the result may not parse.
    pub fn format_from_params(params: &HashMap<String, String>) -> String {
        let controller = params.get("controller").map(String::as_str).unwrap_or("");
        let action = params.get("action").map(String::as_str).unwrap_or("");
        format!("{controller}#{action}")
    }

    /// Controller as written in the route or path
    pub fn controller(&self) -> &str {
        &self.controller
    }

    /// Controller base name, camel-cased
    pub fn controller_name(&self) -> String {
        to_camel_case(&self.controller)
    }

    pub fn action(&self) -> &str {
        &self.action
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.controller, self.action)
    }
}

/// Converts a snake_case controller name to CamelCase
///
/// Names without `_` that already contain an uppercase letter are returned
/// unchanged. Everything else is split on `_` and each part capitalized,
/// with the rest of the part lowercased.
///
/// # Examples
///
/// ```
/// use simplemvc_router::to_camel_case;
///
/// assert_eq!(to_camel_case("posts"), "Posts");
/// assert_eq!(to_camel_case("user_posts"), "UserPosts");
/// assert_eq!(to_camel_case("Health"), "Health");
/// assert_eq!(to_camel_case("HTTPStatus"), "HTTPStatus");
/// assert_eq!(to_camel_case("API_keys"), "ApiKeys");
/// ```
pub fn to_camel_case(name: &str) -> String {
    if !name.contains('_') && name.chars().any(|c| c.is_ascii_uppercase()) {
        return name.to_string();
    }

    name.split('_').map(capitalize).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
