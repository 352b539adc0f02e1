//! Rendering of matcher descriptions into failure messages.
//!
//! The [`Description`] sink is a plain append-only text buffer with some
//! bombproofing: a value whose [`Debug`] implementation panics must not
//! curtail the test by raising a second, far more obscure error from the guts
//! of the framework while the real failure is being reported. [`append_value`]
//! therefore degrades to a type-name/identity fallback instead of
//! propagating.
//!
//! [`append_value`]: Description::append_value

use std::any::type_name;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult, Write};
use std::mem::take;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Implemented by anything that can write a human readable description of
/// itself into a [`Description`], most notably every
/// [`Matcher`](crate::Matcher).
pub trait SelfDescribing {
    /// Append a description of this object to the passed `description`.
    fn describe_to(&self, description: &mut Description);
}

impl<S> SelfDescribing for &S
where
    S: SelfDescribing + ?Sized,
{
    fn describe_to(&self, description: &mut Description) {
        S::describe_to(*self, description);
    }
}

impl<S> SelfDescribing for Box<S>
where
    S: SelfDescribing + ?Sized,
{
    fn describe_to(&self, description: &mut Description) {
        S::describe_to(self, description);
    }
}

/// Append-only buffer that accumulates the description of one or more
/// [`SelfDescribing`] items. Rendering via [`Display`] is idempotent and may
/// be repeated without resetting the buffer.
///
/// An instance is meant for a single writer within one failure-rendering
/// pass; it carries no internal locking.
#[derive(Default, Debug)]
pub struct Description {
    buffer: String,
}

impl Description {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the passed text verbatim.
    pub fn append_text(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);

        self
    }

    /// Append the description of the passed item.
    pub fn append_description_of<S>(&mut self, item: &S) -> &mut Self
    where
        S: SelfDescribing + ?Sized,
    {
        item.describe_to(self);

        self
    }

    /// Append the [`Debug`] rendering of the passed value.
    ///
    /// If the [`Debug`] implementation panics, the panic is caught and a
    /// fallback identifier built from the value's type name and address is
    /// appended instead. This method never panics and never appends nothing.
    pub fn append_value<V>(&mut self, value: &V) -> &mut Self
    where
        V: Debug,
    {
        match catch_unwind(AssertUnwindSafe(|| format!("{value:?}"))) {
            Ok(rendered) => self.buffer.push_str(&rendered),
            Err(_) => {
                let _ = write!(
                    self.buffer,
                    "{}@{:x}",
                    type_name::<V>(),
                    value as *const V as usize
                );
            }
        }

        self
    }

    /// Append `start`, then the rendering of each value separated by
    /// `separator`, then `end`. An empty `values` renders as `start + end`.
    pub fn append_value_list<I>(
        &mut self,
        start: &str,
        separator: &str,
        end: &str,
        values: I,
    ) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Debug,
    {
        self.buffer.push_str(start);

        let mut first = true;
        for value in values {
            if !take(&mut first) {
                self.buffer.push_str(separator);
            }

            self.append_value(&value);
        }

        self.buffer.push_str(end);

        self
    }

    /// Like [`append_value_list`](Self::append_value_list), but each item
    /// describes itself via [`SelfDescribing::describe_to`].
    pub fn append_list<I>(&mut self, start: &str, separator: &str, end: &str, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: SelfDescribing,
    {
        self.buffer.push_str(start);

        let mut first = true;
        for item in items {
            if !take(&mut first) {
                self.buffer.push_str(separator);
            }

            item.describe_to(self);
        }

        self.buffer.push_str(end);

        self
    }
}

impl Display for Description {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.buffer)
    }
}

/// Render the description of a single [`SelfDescribing`] item to a string.
pub fn render<S>(item: &S) -> String
where
    S: SelfDescribing + ?Sized,
{
    Description::new().append_description_of(item).to_string()
}

#[cfg(test)]
mod tests {
    use super::{render, Description, SelfDescribing};

    use std::fmt::{Debug, Formatter, Result as FmtResult};

    struct Word(&'static str);

    impl SelfDescribing for Word {
        fn describe_to(&self, description: &mut Description) {
            description.append_text(self.0);
        }
    }

    struct Grenade;

    impl Debug for Grenade {
        fn fmt(&self, _f: &mut Formatter<'_>) -> FmtResult {
            panic!("boom");
        }
    }

    #[test]
    fn text_and_values() {
        let mut description = Description::new();
        description
            .append_text("a value of ")
            .append_value(&42)
            .append_text(" or ")
            .append_value(&"x");

        assert_eq!(description.to_string(), "a value of 42 or \"x\"");
    }

    #[test]
    fn value_list() {
        let mut description = Description::new();
        description.append_value_list("[", ", ", "]", [1, 2, 3]);

        assert_eq!(description.to_string(), "[1, 2, 3]");
    }

    #[test]
    fn empty_value_list() {
        let mut description = Description::new();
        description.append_value_list("[", ", ", "]", Vec::<u8>::new());

        assert_eq!(description.to_string(), "[]");
    }

    #[test]
    fn list_of_self_describing() {
        let mut description = Description::new();
        description.append_list("(", " | ", ")", &[Word("fuu"), Word("bar")]);

        assert_eq!(description.to_string(), "(fuu | bar)");
    }

    #[test]
    fn panicking_debug_falls_back() {
        let mut description = Description::new();
        description.append_value(&Grenade);

        let rendered = description.to_string();
        assert!(!rendered.is_empty());
        assert!(rendered.contains("Grenade@"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut description = Description::new();
        description.append_text("fuu");

        assert_eq!(description.to_string(), "fuu");
        assert_eq!(description.to_string(), "fuu");
    }

    #[test]
    fn render_one_shot() {
        assert_eq!(render(&Word("bar")), "bar");
    }
}
