//! Route declarations and compiled routes
//!
//! - [`pattern`]: segment classification
//! - [`parser`]: template to anchored pattern + placeholder names

pub mod parser;
pub mod pattern;

use regex::Regex;
use std::collections::HashMap;
use std::fmt;

use crate::path::with_default_suffix;
use crate::RouteError;
use parser::parse_template;

pub use pattern::{classify_segment, PatternSegment};

/// Placeholder name to captured value
pub type Params = HashMap<String, String>;

/// How template problems are treated during compilation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompileMode {
    /// Accept empty placeholder names and copy literal segments verbatim
    #[default]
    Permissive,
    /// Reject empty placeholder names and literal regex metacharacters
    Strict,
}

/// Default target of a default-action route
///
/// Only the action is used: it becomes the suffix appended to paths that
/// omit the action segment. The controller still has to come from the
/// template's `:controller` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultTarget {
    pub controller: String,
    pub action: String,
}

impl DefaultTarget {
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            action: action.into(),
        }
    }
}

/// What a route dispatches to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RouteTarget {
    /// Built from the `controller` and `action` placeholders at lookup time
    #[default]
    Dynamic,
    /// Fixed `controller#action`
    Static(String),
    /// Appends `/:action` to the template and falls back to the default action
    Default(DefaultTarget),
}

/// A route declaration, before compilation
///
/// # Examples
///
/// ```
/// use simplemvc_router::{RouteSpec, RouteTarget};
///
/// let spec = RouteSpec::new("/ping").to("health#check");
/// assert_eq!(spec.target, RouteTarget::Static("health#check".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSpec {
    pub template: String,
    pub target: RouteTarget,
}

impl RouteSpec {
    /// Declares a dynamic route
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            target: RouteTarget::Dynamic,
        }
    }

    /// Sets a static `controller#action` target
    pub fn to(mut self, target: impl Into<String>) -> Self {
        self.target = RouteTarget::Static(target.into());
        self
    }

    /// Turns this into a default-action route
    pub fn with_default(mut self, controller: impl Into<String>, action: impl Into<String>) -> Self {
        self.target = RouteTarget::Default(DefaultTarget::new(controller, action));
        self
    }

    /// Compiles the declaration
    pub fn compile(&self, mode: CompileMode) -> Result<Route, RouteError> {
        Route::compile_with_mode(&self.template, self.target.clone(), mode)
    }
}

/// A compiled route
///
/// Immutable once built. `placeholders.len()` always equals the number of
/// capture groups in `pattern`.
#[derive(Debug, Clone)]
pub struct Route {
    /// Template as declared (after the `/:action` append for default routes)
    template: String,
    /// Anchored pattern, `^/...$`
    pattern: Regex,
    /// Placeholder names in capture-group order
    placeholders: Vec<String>,
    /// Fixed `controller#action`, never set together with `default_suffix`
    static_target: Option<String>,
    /// e.g. `/index`, only for default-action routes
    default_suffix: Option<String>,
}

impl Route {
    /// Compiles a template permissively
    ///
    /// # Examples
    ///
    /// ```
    /// use simplemvc_router::{Route, RouteTarget};
    ///
    /// let route = Route::compile("/users/:id", RouteTarget::Dynamic).unwrap();
    /// assert_eq!(route.pattern(), "^/users/([A-Za-z0-9_]+)$");
    /// assert_eq!(route.placeholders(), ["id"]);
    ///
    /// let params = route.matches("/users/42").unwrap();
    /// assert_eq!(params.get("id"), Some(&"42".to_string()));
    /// ```
    pub fn compile(template: &str, target: RouteTarget) -> Result<Self, RouteError> {
        Self::compile_with_mode(template, target, CompileMode::Permissive)
    }

    /// Compiles a template with the given validation mode
    pub fn compile_with_mode(
        template: &str,
        target: RouteTarget,
        mode: CompileMode,
    ) -> Result<Self, RouteError> {
        let (template, static_target, default_suffix) = match target {
            RouteTarget::Dynamic => (template.to_string(), None, None),
            RouteTarget::Static(target) => (template.to_string(), Some(target), None),
            RouteTarget::Default(default) => (
                format!("{template}/:action"),
                None,
                Some(format!("/{}", default.action)),
            ),
        };

        let parsed = parse_template(&template, mode)?;
        let pattern = Regex::new(&parsed.pattern).map_err(|source| RouteError::InvalidPattern {
            template: template.clone(),
            pattern: parsed.pattern.clone(),
            source,
        })?;

        Ok(Route {
            template,
            pattern,
            placeholders: parsed.placeholders,
            static_target,
            default_suffix,
        })
    }

    /// Matches a path, returning the placeholder values
    ///
    /// The default-suffix rewrite is applied first for default-action routes.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let effective = with_default_suffix(path, self.default_suffix.as_deref());
        let captures = self.pattern.captures(&effective)?;

        // Group 0 is the whole match; placeholders bind to groups 1..
        let params = self
            .placeholders
            .iter()
            .zip(captures.iter().skip(1))
            .filter_map(|(name, value)| value.map(|v| (name.clone(), v.as_str().to_string())))
            .collect();

        Some(params)
    }

    /// Target string for a successful match
    ///
    /// The static target when one was declared, otherwise built from the
    /// `controller` and `action` placeholders.
    pub fn target_for(&self, params: &Params) -> String {
        match &self.static_target {
            Some(target) => target.clone(),
            None => crate::Target::format_from_params(params),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Pattern source
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    pub fn static_target(&self) -> Option<&str> {
        self.static_target.as_deref()
    }

    pub fn default_suffix(&self) -> Option<&str> {
        self.default_suffix.as_deref()
    }

    /// Whether this route was declared with a default action
    pub fn is_default_route(&self) -> bool {
        self.default_suffix.is_some()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.static_target, &self.default_suffix) {
            (Some(target), _) => write!(f, "{} => {}", self.template, target),
            (None, Some(suffix)) => write!(f, "{} (default {})", self.template, suffix),
            (None, None) => write!(f, "{}", self.template),
        }
    }
}
