/// Checks whether every element of a sequence is equal to the others.
///
/// Implemented for everything that is [`IntoIterator`]. Empty and single-element sequences
/// are unanimous.
pub trait Unanimous: IntoIterator + Sized {
    /// Whether every element equals the first one.
    #[must_use]
    fn unanimous(self) -> bool
    where
        Self::Item: PartialEq,
    {
        self.unanimous_by(|a, b| a == b)
    }

    /// Whether `eq` considers every element equal to the first one.
    ///
    /// `eq` receives the first element and a later element, in that order. It is not called
    /// for the first element itself.
    ///
    /// # Example
    ///
    /// ```
    /// use seq_utils::Unanimous;
    ///
    /// let lengths_match = ["one", "two", "six"].unanimous_by(|a, b| a.len() == b.len());
    /// assert!(lengths_match);
    /// ```
    #[must_use]
    fn unanimous_by(self, eq: impl Fn(&Self::Item, &Self::Item) -> bool) -> bool {
        let mut items = self.into_iter();

        match items.next() {
            Some(first) => items.all(|item| eq(&first, &item)),
            None => true,
        }
    }
}

impl<I: IntoIterator> Unanimous for I {}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn empty_is_unanimous() {
        assert!(Vec::<u32>::new().unanimous());
        assert!(std::iter::empty::<String>().unanimous());
    }

    #[test]
    fn single_is_unanimous() {
        assert!([42].unanimous());
    }

    #[test]
    fn equal_elements() {
        assert!(vec![1, 1, 1, 1].unanimous());
        assert!((0..5).map(|_| "same").unanimous());
    }

    #[test]
    fn differing_element_anywhere() {
        assert!(![2, 1, 1].unanimous());
        assert!(![1, 2, 1].unanimous());
        assert!(![1, 1, 2].unanimous());
    }

    #[test]
    fn borrowed_sequence() {
        let values = vec![String::from("x"), String::from("x")];

        assert!((&values).unanimous());
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn custom_equality() {
        assert!([-2, 2, -2].unanimous_by(|a: &i32, b: &i32| a.abs() == b.abs()));
        assert!(![-2, 3].unanimous_by(|a: &i32, b: &i32| a.abs() == b.abs()));
    }

    #[test]
    fn stops_at_first_disagreement() {
        let calls = Cell::new(0);

        let result = [1, 2, 3, 4].unanimous_by(|a, b| {
            calls.set(calls.get() + 1);
            a == b
        });

        assert!(!result);
        assert_eq!(calls.get(), 1);
    }
}
