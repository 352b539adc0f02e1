use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

use crate::description::{Description, SelfDescribing};
use crate::matcher::{eq, Eq, Matcher};

/// Countable container candidates. `count` returns `None` when the candidate
/// is absent, so an `Option::None` candidate does not match.
pub trait Countable {
    fn count(&self) -> Option<usize>;
}

macro_rules! impl_countable {
    ($type:ident < $( $param:ident ),+ >) => {
        impl<$( $param ),+> Countable for $type<$( $param ),+> {
            fn count(&self) -> Option<usize> {
                Some(self.len())
            }
        }
    };
}

impl_countable!(Vec<T>);
impl_countable!(VecDeque<T>);
impl_countable!(LinkedList<T>);
impl_countable!(HashSet<T, S>);
impl_countable!(BTreeSet<T>);

impl<T> Countable for &[T] {
    fn count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T, const N: usize> Countable for [T; N] {
    fn count(&self) -> Option<usize> {
        Some(N)
    }
}

impl<C> Countable for Option<C>
where
    C: Countable,
{
    fn count(&self) -> Option<usize> {
        self.as_ref().and_then(Countable::count)
    }
}

/// Key-value container candidates. Kept separate from [`Countable`] so
/// [`map_with_size`] does not accept plain collections.
pub trait MapCountable {
    fn count(&self) -> Option<usize>;
}

impl<K, V, S> MapCountable for HashMap<K, V, S> {
    fn count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<K, V> MapCountable for BTreeMap<K, V> {
    fn count(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<M> MapCountable for Option<M>
where
    M: MapCountable,
{
    fn count(&self) -> Option<usize> {
        self.as_ref().and_then(MapCountable::count)
    }
}

/* CollectionWithSize */

/// Create a new [`CollectionWithSize`] matcher that checks the candidate's
/// element count against `size_matcher`.
pub fn collection_with_size<M>(size_matcher: M) -> CollectionWithSize<M>
where
    M: Matcher<usize>,
{
    CollectionWithSize(size_matcher)
}

/// Create a matcher for collections of exactly `len` elements.
pub fn collection_with_len(len: usize) -> CollectionWithSize<Eq<usize>> {
    collection_with_size(eq(len))
}

#[must_use]
#[derive(Debug)]
pub struct CollectionWithSize<M>(pub M);

impl<M> SelfDescribing for CollectionWithSize<M>
where
    M: SelfDescribing,
{
    fn describe_to(&self, description: &mut Description) {
        description.append_text("a collection with size ");
        self.0.describe_to(description);
    }
}

impl<C, M> Matcher<C> for CollectionWithSize<M>
where
    C: Countable,
    M: Matcher<usize>,
{
    fn matches(&self, value: &C) -> bool {
        value.count().map_or(false, |count| self.0.matches(&count))
    }
}

/* MapWithSize */

/// Create a new [`MapWithSize`] matcher that checks the candidate's entry
/// count against `size_matcher`.
pub fn map_with_size<M>(size_matcher: M) -> MapWithSize<M>
where
    M: Matcher<usize>,
{
    MapWithSize(size_matcher)
}

/// Create a matcher for maps of exactly `len` entries.
pub fn map_with_len(len: usize) -> MapWithSize<Eq<usize>> {
    map_with_size(eq(len))
}

#[must_use]
#[derive(Debug)]
pub struct MapWithSize<M>(pub M);

impl<M> SelfDescribing for MapWithSize<M>
where
    M: SelfDescribing,
{
    fn describe_to(&self, description: &mut Description) {
        description.append_text("a map with size ");
        self.0.describe_to(description);
    }
}

impl<C, M> Matcher<C> for MapWithSize<M>
where
    C: MapCountable,
    M: Matcher<usize>,
{
    fn matches(&self, value: &C) -> bool {
        value.count().map_or(false, |count| self.0.matches(&count))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

    use super::{collection_with_len, collection_with_size, map_with_len, map_with_size};

    use crate::description::render;
    use crate::matcher::{greater_than, less_than, Matcher};

    #[test]
    fn collection_size() {
        assert!(collection_with_len(2).matches(&vec![1, 2]));
        assert!(!collection_with_len(3).matches(&vec![1, 2]));
        assert!(collection_with_size(less_than(3)).matches(&vec![1, 2]));
    }

    #[test]
    fn collection_size_serves_any_container() {
        let deque = VecDeque::from([1, 2, 3]);
        assert!(collection_with_len(3).matches(&deque));

        let set = HashSet::from(["fuu", "bar"]);
        assert!(collection_with_len(2).matches(&set));
    }

    #[test]
    fn absent_collection_does_not_match() {
        assert!(!collection_with_len(0).matches(&None::<Vec<i32>>));
        assert!(collection_with_len(1).matches(&Some(vec![1])));
    }

    #[test]
    fn collection_description() {
        assert_eq!(
            render(&collection_with_len(2)),
            "a collection with size 2"
        );
        assert_eq!(
            render(&collection_with_size(greater_than(1))),
            "a collection with size a value greater than 1"
        );
    }

    #[test]
    fn map_size() {
        let map = HashMap::from([("fuu", 1), ("bar", 2)]);

        assert!(map_with_len(2).matches(&map));
        assert!(!map_with_len(1).matches(&map));
        assert!(map_with_size(greater_than(1)).matches(&map));
    }

    #[test]
    fn absent_map_does_not_match() {
        assert!(!map_with_len(0).matches(&None::<BTreeMap<i32, i32>>));
        assert!(map_with_len(1).matches(&Some(BTreeMap::from([(1, 2)]))));
    }

    #[test]
    fn map_description() {
        assert_eq!(render(&map_with_len(2)), "a map with size 2");
    }
}
