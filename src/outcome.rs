use derive_more::Display;

/// A value which is either a success carrying a payload or a failure carrying an error.
///
/// Rendering with `{}` shows only the payload or the error; use `{:?}` to see which variant is
/// held.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[must_use]
pub enum Outcome<V, E> {
    Success(V),
    Failure(E),
}

impl<V, E> Outcome<V, E> {
    pub fn success(value: V) -> Self {
        Self::Success(value)
    }

    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Wraps `value` as a success, or fails with the error returned by `or_else`, which is only
    /// called when `value` is absent.
    pub fn from_option(value: Option<V>, or_else: impl FnOnce() -> E) -> Self {
        match value {
            Some(value) => Self::Success(value),
            None => Self::Failure(or_else()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    pub fn value(self) -> Option<V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    pub fn error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    pub fn as_ref(&self) -> Outcome<&V, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    pub fn as_mut(&mut self) -> Outcome<&mut V, &mut E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns the payload, or the stored error as an `Err` ready to be propagated with `?`.
    pub fn into_result(self) -> Result<V, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    fn from(outcome: Outcome<V, E>) -> Self {
        outcome.into_result()
    }
}

// Stops at the first failure, like collecting into a `Result`.
impl<V, E, C: FromIterator<V>> FromIterator<Outcome<V, E>> for Outcome<C, E> {
    fn from_iter<I: IntoIterator<Item = Outcome<V, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Outcome::into_result)
            .collect::<Result<C, E>>()
            .into()
    }
}
