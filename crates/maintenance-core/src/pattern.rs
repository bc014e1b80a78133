//! Path patterns for maintenance routes.
//!
//! A pattern is a literal URL path in which `{name}` segments stand for
//! integer parameters, e.g. `/maintenance/{pk}/edit/`. The syntax is the
//! same one the Axum router uses, so a pattern string can be handed to the
//! router verbatim and still drive reverse resolution here.
//!
//! Matching is exact: segment count and the trailing slash are significant,
//! and a parameter segment only matches when it parses as an `i64`.

use std::fmt;

use crate::error::PatternError;

/// One segment of a parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    segments: Vec<Segment>,
    trailing_slash: bool,
}

impl Pattern {
    /// Parse a pattern string.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] when the string does not start with `/`,
    /// a segment has unbalanced braces, a parameter name is empty, or the
    /// same parameter name appears twice.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        if !raw.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash {
                pattern: raw.to_owned(),
            });
        }

        let mut segments = Vec::new();
        let mut param_names: Vec<&str> = Vec::new();

        for segment in raw.split('/').filter(|s| !s.is_empty()) {
            if segment.starts_with('{') && segment.ends_with('}') {
                // `{` and `}` are single-byte, so the inner slice is safe.
                let name = &segment[1..segment.len() - 1];
                if name.is_empty() {
                    return Err(PatternError::EmptyParamName {
                        pattern: raw.to_owned(),
                    });
                }
                if name.contains('{') || name.contains('}') {
                    return Err(PatternError::UnbalancedBrace {
                        pattern: raw.to_owned(),
                        segment: segment.to_owned(),
                    });
                }
                if param_names.contains(&name) {
                    return Err(PatternError::DuplicateParam {
                        pattern: raw.to_owned(),
                        name: name.to_owned(),
                    });
                }
                param_names.push(name);
                segments.push(Segment::Param(name.to_owned()));
            } else if segment.contains('{') || segment.contains('}') {
                return Err(PatternError::UnbalancedBrace {
                    pattern: raw.to_owned(),
                    segment: segment.to_owned(),
                });
            } else {
                segments.push(Segment::Literal(segment.to_owned()));
            }
        }

        Ok(Self {
            raw: raw.to_owned(),
            segments,
            trailing_slash: raw.ends_with('/'),
        })
    }

    /// The original pattern string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Number of parameter segments.
    #[must_use]
    pub fn param_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Param(_)))
            .count()
    }

    /// Number of literal segments. Used to rank competing matches: the
    /// pattern with the most literals is the most specific.
    #[must_use]
    pub fn literal_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Literal(_)))
            .count()
    }

    /// Match a concrete request path against this pattern.
    ///
    /// Returns the extracted `(name, value)` parameter pairs in pattern
    /// order, or `None` when the path does not match.
    #[must_use]
    pub fn matches<'p>(&'p self, path: &str) -> Option<Vec<(&'p str, i64)>> {
        if !path.starts_with('/') {
            return None;
        }
        if path.ends_with('/') != self.trailing_slash {
            return None;
        }

        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Vec::new();
        for (segment, part) in self.segments.iter().zip(&parts) {
            match segment {
                Segment::Literal(lit) => {
                    if lit != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value: i64 = part.parse().ok()?;
                    params.push((name.as_str(), value));
                }
            }
        }

        Some(params)
    }

    /// Fill the pattern's parameters positionally to build a concrete path.
    ///
    /// Returns `None` when `args.len()` does not equal [`param_count`].
    ///
    /// [`param_count`]: Self::param_count
    #[must_use]
    pub fn fill(&self, args: &[i64]) -> Option<String> {
        if args.len() != self.param_count() {
            return None;
        }

        let mut out = String::new();
        let mut next_arg = args.iter();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Literal(lit) => out.push_str(lit),
                Segment::Param(_) => {
                    // Arity was checked above, so the iterator cannot run dry.
                    if let Some(value) = next_arg.next() {
                        out.push_str(&value.to_string());
                    }
                }
            }
        }
        if self.trailing_slash || out.is_empty() {
            out.push('/');
        }

        Some(out)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_literal_pattern() {
        let p = Pattern::parse("/maintenance/scheduled/").unwrap();
        assert_eq!(p.param_count(), 0);
        assert_eq!(p.literal_count(), 2);
        assert_eq!(p.as_str(), "/maintenance/scheduled/");
    }

    #[test]
    fn parses_parameterized_pattern() {
        let p = Pattern::parse("/maintenance/api/calendar-month/{year}/{month}/").unwrap();
        assert_eq!(p.param_count(), 2);
        assert_eq!(p.literal_count(), 3);
    }

    #[test]
    fn rejects_missing_leading_slash() {
        let err = Pattern::parse("maintenance/").unwrap_err();
        assert!(matches!(err, PatternError::MissingLeadingSlash { .. }));
    }

    #[test]
    fn rejects_unbalanced_braces() {
        assert!(matches!(
            Pattern::parse("/maintenance/{pk/").unwrap_err(),
            PatternError::UnbalancedBrace { .. }
        ));
        assert!(matches!(
            Pattern::parse("/maintenance/pk}/").unwrap_err(),
            PatternError::UnbalancedBrace { .. }
        ));
    }

    #[test]
    fn rejects_empty_param_name() {
        assert!(matches!(
            Pattern::parse("/maintenance/{}/").unwrap_err(),
            PatternError::EmptyParamName { .. }
        ));
    }

    #[test]
    fn rejects_duplicate_param_name() {
        assert!(matches!(
            Pattern::parse("/m/{pk}/x/{pk}/").unwrap_err(),
            PatternError::DuplicateParam { .. }
        ));
    }

    #[test]
    fn matches_extracts_integer_params() {
        let p = Pattern::parse("/maintenance/{pk}/edit/").unwrap();
        let params = p.matches("/maintenance/42/edit/").unwrap();
        assert_eq!(params, vec![("pk", 42)]);
    }

    #[test]
    fn match_rejects_non_integer_param() {
        let p = Pattern::parse("/maintenance/{pk}/edit/").unwrap();
        assert!(p.matches("/maintenance/abc/edit/").is_none());
    }

    #[test]
    fn match_is_exact_about_trailing_slash() {
        let p = Pattern::parse("/maintenance/{pk}/").unwrap();
        assert!(p.matches("/maintenance/42").is_none());
        assert!(p.matches("/maintenance/42/").is_some());
    }

    #[test]
    fn match_rejects_extra_segments() {
        let p = Pattern::parse("/maintenance/{pk}/").unwrap();
        assert!(p.matches("/maintenance/42/edit/").is_none());
    }

    #[test]
    fn negative_ids_still_parse_as_integers() {
        // i64 parsing accepts a sign; whether a handler accepts the value
        // is its own concern.
        let p = Pattern::parse("/maintenance/{pk}/").unwrap();
        assert_eq!(p.matches("/maintenance/-7/").unwrap(), vec![("pk", -7)]);
    }

    #[test]
    fn fill_builds_concrete_path() {
        let p = Pattern::parse("/maintenance/api/calendar-month/{year}/{month}/").unwrap();
        assert_eq!(
            p.fill(&[2024, 3]).unwrap(),
            "/maintenance/api/calendar-month/2024/3/"
        );
    }

    #[test]
    fn fill_rejects_wrong_arity() {
        let p = Pattern::parse("/maintenance/{pk}/edit/").unwrap();
        assert!(p.fill(&[]).is_none());
        assert!(p.fill(&[1, 2]).is_none());
    }

    #[test]
    fn fill_without_trailing_slash() {
        let p = Pattern::parse("/health").unwrap();
        assert_eq!(p.fill(&[]).unwrap(), "/health");
        assert!(p.matches("/health").is_some());
        assert!(p.matches("/health/").is_none());
    }

    #[test]
    fn root_pattern_round_trips() {
        let p = Pattern::parse("/").unwrap();
        assert_eq!(p.fill(&[]).unwrap(), "/");
        assert!(p.matches("/").is_some());
    }
}
