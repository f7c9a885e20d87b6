use crate::outcome::Outcome;

impl<V, E> Outcome<V, E> {
    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Outcome<U, E> {
        self.flat_map(|value| Outcome::Success(f(value)))
    }

    pub fn flat_map<U>(self, f: impl FnOnce(V) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    pub fn map_error<E2>(self, f: impl FnOnce(E) -> E2) -> Outcome<V, E2> {
        self.flat_map_error(|error| Outcome::Failure(f(error)))
    }

    pub fn flat_map_error<E2>(self, f: impl FnOnce(E) -> Outcome<V, E2>) -> Outcome<V, E2> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => f(error),
        }
    }

    pub fn bimap<U, E2>(
        self,
        on_success: impl FnOnce(V) -> U,
        on_failure: impl FnOnce(E) -> E2,
    ) -> Outcome<U, E2> {
        match self {
            Self::Success(value) => Outcome::Success(on_success(value)),
            Self::Failure(error) => Outcome::Failure(on_failure(error)),
        }
    }

    /// Pairs this payload with that of `other`. `other` is only evaluated if `self` is a success,
    /// and the earliest failure is returned.
    pub fn fanout<U>(self, other: impl FnOnce() -> Outcome<U, E>) -> Outcome<(V, U), E> {
        self.flat_map(|left| other().map(|right| (left, right)))
    }

    pub fn recover(self, default: impl FnOnce() -> V) -> V {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default(),
        }
    }

    pub fn recover_with(self, default: impl FnOnce() -> Outcome<V, E>) -> Outcome<V, E> {
        match self {
            Self::Success(_) => self,
            Self::Failure(_) => default(),
        }
    }
}
