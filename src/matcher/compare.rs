use std::cmp::Ordering;
use std::fmt::Debug;

use crate::description::{Description, SelfDescribing};
use crate::matcher::Matcher;

/* Eq */

/// Create a new [`Eq`] matcher that checks the candidate for equality with
/// `value`.
pub fn eq<T>(value: T) -> Eq<T> {
    Eq(value)
}

#[must_use]
#[derive(Debug)]
pub struct Eq<T>(pub T);

impl<T> SelfDescribing for Eq<T>
where
    T: Debug,
{
    fn describe_to(&self, description: &mut Description) {
        description.append_value(&self.0);
    }
}

impl<T, X> Matcher<X> for Eq<T>
where
    T: PartialEq<X> + Debug,
{
    fn matches(&self, value: &X) -> bool {
        self.0.eq(value)
    }
}

/* OrderingComparison */

/// Create a matcher that accepts candidates strictly less than `value`.
pub fn less_than<T>(value: T) -> OrderingComparison<T> {
    OrderingComparison::new(true, false, false, value)
}

/// Create a matcher that accepts candidates less than or equal to `value`.
pub fn less_than_or_equal_to<T>(value: T) -> OrderingComparison<T> {
    OrderingComparison::new(true, true, false, value)
}

/// Create a matcher that accepts candidates that compare equal to `value`.
pub fn compares_equal_to<T>(value: T) -> OrderingComparison<T> {
    OrderingComparison::new(false, true, false, value)
}

/// Create a matcher that accepts candidates strictly greater than `value`.
pub fn greater_than<T>(value: T) -> OrderingComparison<T> {
    OrderingComparison::new(false, false, true, value)
}

/// Create a matcher that accepts candidates greater than or equal to `value`.
pub fn greater_than_or_equal_to<T>(value: T) -> OrderingComparison<T> {
    OrderingComparison::new(false, true, true, value)
}

/// Matcher that checks the three-way comparison of the candidate against a
/// reference value. Candidates that are not comparable to the reference value
/// (e.g. NaN) do not match.
#[must_use]
#[derive(Debug)]
pub struct OrderingComparison<T> {
    less_than: bool,
    equal_to: bool,
    greater_than: bool,
    value: T,
}

impl<T> OrderingComparison<T> {
    fn new(less_than: bool, equal_to: bool, greater_than: bool, value: T) -> Self {
        Self {
            less_than,
            equal_to,
            greater_than,
            value,
        }
    }
}

impl<T> SelfDescribing for OrderingComparison<T>
where
    T: Debug,
{
    fn describe_to(&self, description: &mut Description) {
        description.append_text("a value ");

        if self.less_than {
            description.append_text("less than ");
        }

        if self.equal_to {
            if self.less_than {
                description.append_text("or ");
            }

            description.append_text("equal to ");
        }

        if self.greater_than {
            if self.less_than || self.equal_to {
                description.append_text("or ");
            }

            description.append_text("greater than ");
        }

        description.append_value(&self.value);
    }
}

impl<T, X> Matcher<X> for OrderingComparison<T>
where
    T: PartialOrd<X> + Debug,
{
    fn matches(&self, value: &X) -> bool {
        match self.value.partial_cmp(value) {
            Some(Ordering::Greater) => self.less_than,
            Some(Ordering::Equal) => self.equal_to,
            Some(Ordering::Less) => self.greater_than,
            None => false,
        }
    }
}
