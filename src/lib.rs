//! Hamlet is a small library of predicate based matchers for building human
//! readable assertions in a test framework.
//!
//! Every matcher implements the two method [`Matcher`] contract: a pure
//! [`matches`](Matcher::matches) predicate, and a
//! [`describe_to`](SelfDescribing::describe_to) that renders what would have
//! satisfied the matcher into a [`Description`] sink. The host assertion
//! framework decides pass or fail from the boolean and renders descriptions
//! only on failure.

pub mod description;
pub mod matcher;

pub use description::{render, Description, SelfDescribing};
pub use matcher::Matcher;
