use crate::description::{Description, SelfDescribing};
use crate::matcher::Matcher;

/// Numeric view of a candidate, used by [`CloseTo`] so one matcher serves
/// every primitive numeric type.
pub trait AsDouble {
    fn as_double(&self) -> f64;
}

macro_rules! impl_as_double {
    ($( $type:ty ),+) => {
        $(
            impl AsDouble for $type {
                fn as_double(&self) -> f64 {
                    *self as f64
                }
            }
        )+
    };
}

impl_as_double!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

/// Create a new [`CloseTo`] matcher that accepts numeric candidates within
/// `delta` of `value`.
pub fn close_to(value: f64, delta: f64) -> CloseTo {
    CloseTo { value, delta }
}

/// Matcher that checks the candidate's distance to a reference value, seen
/// through `f64`. Integer candidates beyond 2^53 lose precision in the
/// conversion; the comparison is deliberately a plain `f64` distance.
#[must_use]
#[derive(Debug)]
pub struct CloseTo {
    value: f64,
    delta: f64,
}

impl SelfDescribing for CloseTo {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("a Number within ")
            .append_value(&self.delta)
            .append_text(" of ")
            .append_value(&self.value);
    }
}

impl<X> Matcher<X> for CloseTo
where
    X: AsDouble,
{
    fn matches(&self, value: &X) -> bool {
        (value.as_double() - self.value).abs() <= self.delta
    }
}

#[cfg(test)]
mod tests {
    use super::close_to;

    use crate::description::render;
    use crate::matcher::Matcher;

    #[test]
    fn within_delta() {
        let matcher = close_to(1.0, 0.5);

        assert!(matcher.matches(&1.0));
        assert!(matcher.matches(&0.5));
        assert!(matcher.matches(&1.5));
        assert!(!matcher.matches(&1.6));
        assert!(!matcher.matches(&0.4));
    }

    #[test]
    fn integer_candidates() {
        let matcher = close_to(10.0, 2.0);

        assert!(matcher.matches(&10u8));
        assert!(matcher.matches(&8i64));
        assert!(matcher.matches(&12usize));
        assert!(!matcher.matches(&13i32));
    }

    #[test]
    fn zero_delta_is_exact() {
        let matcher = close_to(3.0, 0.0);

        assert!(matcher.matches(&3.0));
        assert!(!matcher.matches(&3.0000001));
    }

    #[test]
    fn nan_does_not_match() {
        assert!(!close_to(1.0, 10.0).matches(&f64::NAN));
    }

    #[test]
    fn description() {
        assert_eq!(render(&close_to(1.0, 0.5)), "a Number within 0.5 of 1.0");
    }
}
