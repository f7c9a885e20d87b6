use joinery::JoinableIterator;

use crate::{convert::ErrorConvertible, semigroup::Semigroup};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Message(String),

    #[error("{}", .0.iter().join_with("; "))]
    Many(Vec<Error>),

    #[error("{0}")]
    Other(anyhow::Error),
}

impl Error {
    pub fn msg(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Returns the individual errors, flattening any accumulated ones.
    pub fn into_vec(self) -> Vec<Error> {
        match self {
            Self::Many(errors) => errors,
            err => vec![err],
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Many(errors) => errors.len(),
            _ => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Semigroup for Error {
    fn combine(self, other: Self) -> Self {
        let mut errors = self.into_vec();
        errors.extend(other.into_vec());
        Self::Many(errors)
    }
}

impl ErrorConvertible for Error {
    fn from_error(err: anyhow::Error) -> Self {
        match err.downcast::<Error>() {
            Ok(err) => err,
            Err(err) => Error::Other(err),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::from_error(err)
    }
}
