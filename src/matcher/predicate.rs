use std::any::type_name;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::panic::Location;

use crate::description::{Description, SelfDescribing};
use crate::matcher::Matcher;

/// Create a new [`PredicateAdapter`] that delegates matching to the passed
/// predicate, recording the caller's source location for failure messages.
///
/// Unlike the other matchers, a panic raised by the predicate propagates to
/// the caller: the predicate is caller supplied test logic whose failure is
/// diagnostically meaningful and must not be masked.
#[track_caller]
pub fn predicate<F>(predicate: F) -> PredicateAdapter<F> {
    let caller = Location::caller();

    PredicateAdapter {
        predicate,
        defined_at: Some(SourceLocation {
            file: caller.file(),
            line: caller.line(),
        }),
    }
}

/// Matcher that wraps an arbitrary unary boolean function.
#[must_use]
pub struct PredicateAdapter<F> {
    predicate: F,
    defined_at: Option<SourceLocation>,
}

impl<F> PredicateAdapter<F> {
    /// Wrap a predicate without capturing a definition site. The description
    /// falls back to the predicate's type name.
    pub fn unlocated(predicate: F) -> Self {
        Self {
            predicate,
            defined_at: None,
        }
    }

    /// The source location where the predicate was wrapped, if it was
    /// captured.
    pub fn defined_at(&self) -> Option<&SourceLocation> {
        self.defined_at.as_ref()
    }
}

impl<F> SelfDescribing for PredicateAdapter<F> {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("a value matching the Predicate ");

        match &self.defined_at {
            Some(location) => {
                description
                    .append_text("defined at ")
                    .append_text(&location.to_string());
            }
            None => {
                description.append_text(type_name::<F>());
            }
        }
    }
}

impl<T, F> Matcher<T> for PredicateAdapter<F>
where
    F: Fn(&T) -> bool,
{
    fn matches(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

/// File and line where a predicate was defined.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    file: &'static str,
    line: u32,
}

impl SourceLocation {
    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}:{}", self.file, self.line)
    }
}
