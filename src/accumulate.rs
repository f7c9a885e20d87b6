use std::ops::{BitAnd, BitOr};

use crate::{outcome::Outcome, semigroup::Semigroup};

impl<V, E: Semigroup> Outcome<V, E> {
    /// Applies the function held by `transform` to this payload.
    ///
    /// If both are failures, the errors are combined with the error of `transform` on the left.
    pub fn apply<U, F: FnOnce(V) -> U>(self, transform: Outcome<F, E>) -> Outcome<U, E> {
        match (transform, self) {
            (Outcome::Success(f), this) => this.map(f),
            (Outcome::Failure(error), Outcome::Success(_)) => Outcome::Failure(error),
            (Outcome::Failure(transform_error), Outcome::Failure(error)) => {
                Outcome::Failure(transform_error.combine(error))
            }
        }
    }

    /// Returns the first success, or the combination of both errors.
    pub fn or(self, alternative: Self) -> Self {
        match (self, alternative) {
            (this @ Outcome::Success(_), _) => this,
            (_, alternative @ Outcome::Success(_)) => alternative,
            (Outcome::Failure(error), Outcome::Failure(alternative_error)) => {
                Outcome::Failure(error.combine(alternative_error))
            }
        }
    }

    /// Returns `other` if both succeed, otherwise the first failure.
    ///
    /// Unlike [`or`](Self::or) and [`apply`](Self::apply), two failures are not combined: the
    /// error of `self` is returned as is.
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Outcome::Success(_), other) => other,
            (this @ Outcome::Failure(_), _) => this,
        }
    }

    /// Merges two outcomes with `f`, combining the errors if both have failed.
    pub fn zip_with<U, W>(
        self,
        other: Outcome<U, E>,
        f: impl FnOnce(V, U) -> W,
    ) -> Outcome<W, E> {
        match (self, other) {
            (Outcome::Success(left), Outcome::Success(right)) => Outcome::Success(f(left, right)),
            (Outcome::Failure(error), Outcome::Success(_))
            | (Outcome::Success(_), Outcome::Failure(error)) => Outcome::Failure(error),
            (Outcome::Failure(left), Outcome::Failure(right)) => {
                Outcome::Failure(left.combine(right))
            }
        }
    }

    /// Collects every payload, or combines every error in order if any outcome failed.
    ///
    /// All of `outcomes` is consumed, even after a failure has been seen.
    pub fn accumulate(outcomes: impl IntoIterator<Item = Self>) -> Outcome<Vec<V>, E> {
        let mut values = Vec::new();
        let mut error = None;
        for outcome in outcomes {
            match outcome {
                Outcome::Success(value) => {
                    if error.is_none() {
                        values.push(value);
                    }
                }
                Outcome::Failure(next) => error = error.combine(Some(next)),
            }
        }

        match error {
            Some(error) => Outcome::Failure(error),
            None => Outcome::Success(values),
        }
    }
}

impl<V, E: Semigroup> BitOr for Outcome<V, E> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.or(rhs)
    }
}

impl<V, E: Semigroup> BitAnd for Outcome<V, E> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.and(rhs)
    }
}

impl<V: Semigroup, E: Semigroup> Semigroup for Outcome<V, E> {
    fn combine(self, other: Self) -> Self {
        self.zip_with(other, Semigroup::combine)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use crate::Error;

    use super::*;

    type IntOutcome = Outcome<i32, i32>;

    #[test]
    fn apply() {
        let double = |x: i32| x * 2;

        assert_eq!(
            IntOutcome::success(4).apply(Outcome::success(double)),
            Outcome::Success(8)
        );
        assert_eq!(
            IntOutcome::failure(4).apply(Outcome::success(double)),
            Outcome::Failure(4)
        );
        assert_eq!(
            IntOutcome::success(4).apply(Outcome::<fn(i32) -> i32, _>::failure(3)),
            Outcome::Failure(3)
        );
        assert_eq!(
            IntOutcome::failure(4).apply(Outcome::<fn(i32) -> i32, _>::failure(3)),
            Outcome::Failure(7)
        );
    }

    #[test]
    fn apply_puts_transform_error_first() {
        let outcome = Outcome::<i32, String>::failure("value".into())
            .apply(Outcome::<fn(i32) -> i32, _>::failure("transform;".into()));
        assert_eq!(outcome, Outcome::Failure("transform;value".into()));
    }

    #[test]
    fn apply_curried() {
        let add = |x: i32| move |y: i32| x + y;
        let sum = Outcome::<_, Vec<&str>>::success(2)
            .apply(Outcome::<_, Vec<&str>>::success(1).map(add));
        assert_eq!(sum, Outcome::Success(3));

        let sum = Outcome::<i32, _>::failure(vec!["no y"])
            .apply(Outcome::<i32, _>::failure(vec!["no x"]).map(add));
        assert_eq!(sum, Outcome::Failure(vec!["no x", "no y"]));
    }

    #[test]
    fn or() {
        assert_eq!(IntOutcome::success(1).or(Outcome::success(2)), Outcome::Success(1));
        assert_eq!(IntOutcome::success(1).or(Outcome::failure(2)), Outcome::Success(1));
        assert_eq!(IntOutcome::failure(1).or(Outcome::success(2)), Outcome::Success(2));
        assert_eq!(IntOutcome::failure(2).or(Outcome::failure(3)), Outcome::Failure(5));

        assert_eq!(
            Outcome::<(), String>::failure("a".into()) | Outcome::failure("b".into()),
            Outcome::Failure("ab".into())
        );
    }

    #[test]
    fn and() {
        assert_eq!(IntOutcome::success(1).and(Outcome::success(2)), Outcome::Success(2));
        assert_eq!(IntOutcome::success(1).and(Outcome::failure(2)), Outcome::Failure(2));
        assert_eq!(IntOutcome::failure(1).and(Outcome::success(2)), Outcome::Failure(1));

        assert_eq!(
            Outcome::<(), String>::failure("a".into()) & Outcome::success(()),
            Outcome::Failure("a".into())
        );
    }

    #[test]
    fn or_merges_but_and_keeps_left_failure() {
        assert_eq!(IntOutcome::failure(2) | IntOutcome::failure(3), Outcome::Failure(5));
        assert_eq!(IntOutcome::failure(2) & IntOutcome::failure(3), Outcome::Failure(2));
    }

    #[test]
    fn zip_with() {
        let pair = |a, b| (a, b);
        assert_eq!(
            Outcome::<_, Vec<&str>>::success(1).zip_with(Outcome::success('a'), pair),
            Outcome::Success((1, 'a'))
        );
        assert_eq!(
            Outcome::<i32, _>::failure(vec!["left"])
                .zip_with(Outcome::<char, _>::success('a'), pair),
            Outcome::Failure(vec!["left"])
        );
        assert_eq!(
            Outcome::<i32, _>::success(1)
                .zip_with(Outcome::<char, _>::failure(vec!["right"]), pair),
            Outcome::Failure(vec!["right"])
        );
        assert_eq!(
            Outcome::<i32, _>::failure(vec!["left"])
                .zip_with(Outcome::<char, _>::failure(vec!["right"]), pair),
            Outcome::Failure(vec!["left", "right"])
        );
    }

    #[test]
    fn accumulate() {
        let all = Outcome::accumulate([
            Outcome::<_, Vec<String>>::success(1),
            Outcome::success(2),
            Outcome::success(3),
        ]);
        assert_eq!(all, Outcome::Success(vec![1, 2, 3]));

        let visited = Cell::new(0);
        let some = Outcome::accumulate(
            [
                Outcome::<i32, _>::failure(vec!["first".to_owned()]),
                Outcome::success(2),
                Outcome::failure(vec!["second".to_owned()]),
                Outcome::success(4),
            ]
            .into_iter()
            .inspect(|_| visited.set(visited.get() + 1)),
        );
        assert_eq!(
            some,
            Outcome::Failure(vec!["first".to_owned(), "second".to_owned()])
        );
        assert_eq!(visited.get(), 4);

        let none = Outcome::<i32, i32>::accumulate([]);
        assert_eq!(none, Outcome::Success(vec![]));
    }

    #[test]
    fn accumulate_library_errors() {
        let parse = |raw: &str| -> Outcome<i32, Error> {
            Outcome::from_option(raw.parse().ok(), || {
                Error::msg(format!("cannot parse '{raw}'"))
            })
        };
        let outcome = Outcome::accumulate(["1", "x", "3", "y"].map(parse));
        let Outcome::Failure(error) = outcome else {
            panic!("expected failure");
        };
        assert_eq!(
            error.to_string(),
            "cannot parse 'x'; cannot parse 'y'"
        );
    }

    #[test]
    fn outcomes_combine_payloads() {
        let outcome = Outcome::<_, i32>::success("ab".to_owned())
            .combine(Outcome::success("cd".to_owned()));
        assert_eq!(outcome, Outcome::Success("abcd".to_owned()));

        let outcome = Outcome::<String, _>::failure(1).combine(Outcome::success("cd".to_owned()));
        assert_eq!(outcome, Outcome::Failure(1));

        let outcome = Outcome::<String, _>::failure(1).combine(Outcome::failure(2));
        assert_eq!(outcome, Outcome::Failure(3));
    }

    #[test]
    fn or_is_associative() {
        let samples = [
            IntOutcome::success(1),
            IntOutcome::success(2),
            IntOutcome::failure(10),
            IntOutcome::failure(20),
        ];
        for a in samples {
            for b in samples {
                for c in samples {
                    assert_eq!((a | b) | c, a | (b | c));
                    assert_eq!((a & b) & c, a & (b & c));
                }
            }
        }
    }
}
