mod array;
mod close_to;
mod compare;
mod predicate;
mod regexp;
mod size;

pub use array::{
    array, array_equal_to, array_with_len, array_with_size, empty_array, has_item_in_array,
    instance_of_array, ArrayContains, ArrayEquals, ArrayLike, ArrayWithSize, InstanceOfArray,
};
pub use close_to::{close_to, AsDouble, CloseTo};
pub use compare::{
    compares_equal_to, eq, greater_than, greater_than_or_equal_to, less_than,
    less_than_or_equal_to, Eq, OrderingComparison,
};
pub use predicate::{predicate, PredicateAdapter, SourceLocation};
pub use regexp::{matches_pattern, matches_regexp, MatchesRegexp};
pub use size::{
    collection_with_len, collection_with_size, map_with_len, map_with_size, CollectionWithSize,
    Countable, MapCountable, MapWithSize,
};

use crate::description::SelfDescribing;

/// A matcher is used to check if a candidate value satisfies a pre-defined
/// expectation. It is mostly used to decide whether an assertion holds and,
/// on failure, to render a human readable account of what was expected.
///
/// A matcher is immutable once constructed. [`matches`](Self::matches) must
/// not panic for a candidate of unexpected shape; candidates that are not of
/// the expected shape simply do not match. The one sanctioned exception is
/// [`PredicateAdapter`], which forwards to caller supplied test logic whose
/// panics are diagnostically meaningful.
pub trait Matcher<T>: SelfDescribing {
    /// Returns `true` if the passed `value` satisfies this matcher, `false`
    /// otherwise.
    fn matches(&self, value: &T) -> bool;
}
