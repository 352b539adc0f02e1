use std::fmt::Display;

use regex::Regex;

use crate::description::{Description, SelfDescribing};
use crate::matcher::Matcher;

/// Create a new [`MatchesRegexp`] matcher from a precompiled regular
/// expression.
pub fn matches_regexp(regex: Regex) -> MatchesRegexp {
    MatchesRegexp::new(regex.as_str().to_owned())
}

/// Create a new [`MatchesRegexp`] matcher from a pattern string. A pattern
/// that fails to compile yields a matcher that matches nothing; matcher
/// construction itself never fails.
pub fn matches_pattern<P>(pattern: P) -> MatchesRegexp
where
    P: Into<String>,
{
    MatchesRegexp::new(pattern.into())
}

/// Matcher that checks the candidate's full string rendering against a
/// regular expression. The whole rendering has to match, not a substring.
#[must_use]
#[derive(Debug)]
pub struct MatchesRegexp {
    pattern: String,
    regex: Option<Regex>,
}

impl MatchesRegexp {
    fn new(pattern: String) -> Self {
        // Anchored on both ends for whole-string semantics.
        let regex = Regex::new(&format!("^(?:{pattern})$")).ok();

        Self { pattern, regex }
    }
}

impl SelfDescribing for MatchesRegexp {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("matches /")
            .append_text(&self.pattern.replace('/', "\\/"))
            .append_text("/");
    }
}

impl<X> Matcher<X> for MatchesRegexp
where
    X: Display,
{
    fn matches(&self, value: &X) -> bool {
        self.regex
            .as_ref()
            .map_or(false, |regex| regex.is_match(&value.to_string()))
    }
}
