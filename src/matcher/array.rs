use std::fmt::Debug;

use crate::description::{Description, SelfDescribing};
use crate::matcher::{eq, Eq, Matcher};

/// Uniform view of array like candidates.
///
/// This is the substitute for runtime array reflection: one generic matcher
/// implementation serves arrays of any element type. `elements` returns
/// `None` when the candidate is not an array at all, which every array
/// matcher treats as "does not match" rather than an error. Implemented for
/// `Option<A>` so an absent candidate does not match either.
pub trait ArrayLike {
    type Element;

    /// Returns the elements of the candidate, or `None` if the candidate is
    /// not an array.
    fn elements(&self) -> Option<&[Self::Element]>;
}

impl<T, const N: usize> ArrayLike for [T; N] {
    type Element = T;

    fn elements(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T> ArrayLike for Vec<T> {
    type Element = T;

    fn elements(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T> ArrayLike for &[T] {
    type Element = T;

    fn elements(&self) -> Option<&[T]> {
        Some(*self)
    }
}

impl<T> ArrayLike for Box<[T]> {
    type Element = T;

    fn elements(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<A> ArrayLike for Option<A>
where
    A: ArrayLike,
{
    type Element = A::Element;

    fn elements(&self) -> Option<&[A::Element]> {
        self.as_ref().and_then(ArrayLike::elements)
    }
}

/* ArrayEquals */

/// Create a new [`ArrayEquals`] matcher that compares the candidate's
/// elements positionally against `element_matchers`.
pub fn array<T, I>(element_matchers: I) -> ArrayEquals<T>
where
    I: IntoIterator<Item = Box<dyn Matcher<T>>>,
{
    ArrayEquals {
        element_matchers: element_matchers.into_iter().collect(),
    }
}

/// Create a new [`ArrayEquals`] matcher whose element matchers are equality
/// checks against the passed literal `elements`.
pub fn array_equal_to<T, I>(elements: I) -> ArrayEquals<T>
where
    T: PartialEq + Debug + 'static,
    I: IntoIterator<Item = T>,
{
    array(
        elements
            .into_iter()
            .map(|element| Box::new(eq(element)) as Box<dyn Matcher<T>>),
    )
}

/// Matcher that checks the candidate is an array of the same length as the
/// element matcher list, where each element satisfies the matcher at its
/// position.
#[must_use]
pub struct ArrayEquals<T> {
    element_matchers: Vec<Box<dyn Matcher<T>>>,
}

impl<T> SelfDescribing for ArrayEquals<T> {
    fn describe_to(&self, description: &mut Description) {
        description.append_list("[", ", ", "]", &self.element_matchers);
    }
}

impl<A, T> Matcher<A> for ArrayEquals<T>
where
    A: ArrayLike<Element = T>,
{
    fn matches(&self, value: &A) -> bool {
        let Some(elements) = value.elements() else {
            return false;
        };

        elements.len() == self.element_matchers.len()
            && self
                .element_matchers
                .iter()
                .zip(elements)
                .all(|(matcher, element)| matcher.matches(element))
    }
}

/* ArrayContains */

/// Create a new [`ArrayContains`] matcher that checks at least one element of
/// the candidate satisfies `element_matcher`.
pub fn has_item_in_array<M>(element_matcher: M) -> ArrayContains<M> {
    ArrayContains(element_matcher)
}

#[must_use]
#[derive(Debug)]
pub struct ArrayContains<M>(pub M);

impl<M> SelfDescribing for ArrayContains<M>
where
    M: SelfDescribing,
{
    fn describe_to(&self, description: &mut Description) {
        description.append_text("an array containing ");
        self.0.describe_to(description);
    }
}

impl<A, M> Matcher<A> for ArrayContains<M>
where
    A: ArrayLike,
    M: Matcher<A::Element>,
{
    fn matches(&self, value: &A) -> bool {
        value.elements().map_or(false, |elements| {
            elements.iter().any(|element| self.0.matches(element))
        })
    }
}

/* ArrayWithSize */

/// Create a new [`ArrayWithSize`] matcher that checks the candidate's length
/// against `size_matcher`.
pub fn array_with_size<M>(size_matcher: M) -> ArrayWithSize<M>
where
    M: Matcher<usize>,
{
    ArrayWithSize(size_matcher)
}

/// Create a matcher for arrays of exactly `len` elements.
pub fn array_with_len(len: usize) -> ArrayWithSize<Eq<usize>> {
    array_with_size(eq(len))
}

/// Create a matcher for empty arrays.
pub fn empty_array() -> ArrayWithSize<Eq<usize>> {
    array_with_len(0)
}

#[must_use]
#[derive(Debug)]
pub struct ArrayWithSize<M>(pub M);

impl<M> SelfDescribing for ArrayWithSize<M>
where
    M: SelfDescribing,
{
    fn describe_to(&self, description: &mut Description) {
        description.append_text("an array with size ");
        self.0.describe_to(description);
    }
}

impl<A, M> Matcher<A> for ArrayWithSize<M>
where
    A: ArrayLike,
    M: Matcher<usize>,
{
    fn matches(&self, value: &A) -> bool {
        value
            .elements()
            .map_or(false, |elements| self.0.matches(&elements.len()))
    }
}

/* InstanceOfArray */

/// Create the [`InstanceOfArray`] matcher, which accepts any array regardless
/// of element type or length.
pub fn instance_of_array() -> InstanceOfArray {
    InstanceOfArray
}

#[must_use]
#[derive(Debug)]
pub struct InstanceOfArray;

impl SelfDescribing for InstanceOfArray {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("any array");
    }
}

impl<A> Matcher<A> for InstanceOfArray
where
    A: ArrayLike,
{
    fn matches(&self, value: &A) -> bool {
        value.elements().is_some()
    }
}
