//! Segment classification for route templates
//!
//! Pure functions: same input, same output, no side effects.

/// Regex fragment captured for every `:name` placeholder
pub const PLACEHOLDER_CAPTURE: &str = "([A-Za-z0-9_]+)";

/// Characters that change meaning when a literal segment is copied into a regex
pub const REGEX_METACHARACTERS: &[char] = &[
    '\\', '.', '+', '*', '?', '(', ')', '|', '[', ']', '{', '}', '^', '$',
];

/// A single non-empty segment of a route template
///
/// # Examples
///
/// ```
/// use simplemvc_router::route::pattern::{classify_segment, PatternSegment};
///
/// assert_eq!(classify_segment("users"), PatternSegment::Literal("users"));
/// assert_eq!(classify_segment(":id"), PatternSegment::Placeholder("id"));
///
/// // A bare colon is still a placeholder, with an empty name
/// assert_eq!(classify_segment(":"), PatternSegment::Placeholder(""));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternSegment<'a> {
    /// Text matched verbatim
    Literal(&'a str),
    /// `:name` segment, carrying the name without the colon
    Placeholder(&'a str),
}

impl<'a> PatternSegment<'a> {
    /// Regex fragment emitted for this segment
    ///
    /// Literal text is not escaped.
    pub fn regex_fragment(&self) -> &'a str {
        match self {
            PatternSegment::Literal(text) => text,
            PatternSegment::Placeholder(_) => PLACEHOLDER_CAPTURE,
        }
    }
}

/// Classifies a template segment (pure function)
pub fn classify_segment(segment: &str) -> PatternSegment<'_> {
    match segment.strip_prefix(':') {
        Some(name) => PatternSegment::Placeholder(name),
        None => PatternSegment::Literal(segment),
    }
}

/// Splits a template into its non-empty segments
///
/// Leading, trailing and repeated slashes all collapse away.
///
/// ```
/// use simplemvc_router::route::pattern::template_segments;
///
/// let segments: Vec<&str> = template_segments("//users///:id/").collect();
/// assert_eq!(segments, vec!["users", ":id"]);
/// ```
pub fn template_segments(template: &str) -> impl Iterator<Item = &str> {
    template.split('/').filter(|part| !part.is_empty())
}

/// Returns true when a literal segment holds regex syntax
pub fn has_regex_metacharacters(segment: &str) -> bool {
    segment.contains(REGEX_METACHARACTERS)
}
