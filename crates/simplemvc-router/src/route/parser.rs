//! Template parsing into an anchored pattern and ordered placeholder names
//!
//! Fold-based parser: all mutation is local to the accumulator.

use super::pattern::{classify_segment, has_regex_metacharacters, template_segments, PatternSegment};
use super::CompileMode;
use crate::RouteError;

/// Output of [`parse_template`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTemplate {
    /// Anchored regex source, e.g. `^/users/([A-Za-z0-9_]+)$`
    pub pattern: String,
    /// Placeholder names in left-to-right template order
    pub placeholders: Vec<String>,
}

/// Fold accumulator
#[derive(Default)]
struct ParseState {
    fragments: Vec<String>,
    placeholders: Vec<String>,
}

impl ParseState {
    fn with_literal(mut self, text: &str) -> Self {
        self.fragments.push(text.to_string());
        self
    }

    fn with_placeholder(mut self, segment: PatternSegment<'_>, name: &str) -> Self {
        self.fragments.push(segment.regex_fragment().to_string());
        self.placeholders.push(name.to_string());
        self
    }

    fn finalize(self) -> ParsedTemplate {
        ParsedTemplate {
            pattern: format!("^/{}$", self.fragments.join("/")),
            placeholders: self.placeholders,
        }
    }
}

/// Parses a template into pattern source and placeholder names
///
/// In [`CompileMode::Permissive`] this never fails; strict mode rejects
/// empty placeholder names and literal segments carrying regex syntax.
///
/// # Examples
///
/// ```
/// use simplemvc_router::route::parser::parse_template;
/// use simplemvc_router::CompileMode;
///
/// let parsed = parse_template("/users/:id", CompileMode::Permissive).unwrap();
/// assert_eq!(parsed.pattern, "^/users/([A-Za-z0-9_]+)$");
/// assert_eq!(parsed.placeholders, vec!["id"]);
///
/// // Root template
/// let parsed = parse_template("/", CompileMode::Permissive).unwrap();
/// assert_eq!(parsed.pattern, "^/$");
/// ```
pub fn parse_template(template: &str, mode: CompileMode) -> Result<ParsedTemplate, RouteError> {
    template_segments(template)
        .map(classify_segment)
        .try_fold(ParseState::default(), |state, segment| -> Result<_, RouteError> {
            if mode == CompileMode::Strict {
                check_segment(template, segment)?;
            }

            Ok(match segment {
                PatternSegment::Literal(text) => state.with_literal(text),
                PatternSegment::Placeholder(name) => state.with_placeholder(segment, name),
            })
        })
        .map(ParseState::finalize)
}

/// Strict-mode validation of a single segment
fn check_segment(template: &str, segment: PatternSegment<'_>) -> Result<(), RouteError> {
    match segment {
        PatternSegment::Placeholder("") => Err(RouteError::EmptyPlaceholder {
            template: template.to_string(),
        }),
        PatternSegment::Literal(text) if has_regex_metacharacters(text) => {
            Err(RouteError::RegexMetacharacter {
                template: template.to_string(),
                segment: text.to_string(),
            })
        }
        _ => Ok(()),
    }
}
