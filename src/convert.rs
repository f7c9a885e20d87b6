use log::{log_enabled, trace};

use crate::outcome::Outcome;

/// An error type which can absorb any other error.
///
/// This is what lets [`Outcome::try_map`] run fallible steps whose error types differ from the
/// pipeline's.
pub trait ErrorConvertible {
    fn from_error(error: anyhow::Error) -> Self;
}

impl ErrorConvertible for anyhow::Error {
    fn from_error(error: anyhow::Error) -> Self {
        error
    }
}

// Keeps the whole context chain, outermost first.
impl ErrorConvertible for String {
    fn from_error(error: anyhow::Error) -> Self {
        format!("{error:#}")
    }
}

impl<V, E: ErrorConvertible> Outcome<V, E> {
    /// Maps the payload with a fallible `f`, converting any error it returns into `E`.
    pub fn try_map<U, X>(self, f: impl FnOnce(V) -> Result<U, X>) -> Outcome<U, E>
    where
        X: Into<anyhow::Error>,
    {
        self.flat_map(|value| match f(value) {
            Ok(value) => Outcome::Success(value),
            Err(err) => {
                let err: anyhow::Error = err.into();
                if log_enabled!(log::Level::Trace) {
                    trace!("converting error: {err:#}");
                }
                Outcome::Failure(E::from_error(err))
            }
        })
    }
}

impl<V, E> Outcome<V, E> {
    /// Runs `f`, turning an `Err` into a failure through `E`'s `From` impl.
    pub fn from_fallible<X>(f: impl FnOnce() -> Result<V, X>) -> Self
    where
        E: From<X>,
    {
        f().map_err(E::from).into()
    }
}
