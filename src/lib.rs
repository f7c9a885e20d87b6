#![deny(missing_debug_implementations)]

mod accumulate;
mod combinators;
mod convert;
pub mod error;
mod outcome;
pub mod result;
pub mod semigroup;
mod throwing;

pub use crate::{
    convert::ErrorConvertible,
    error::Error,
    outcome::Outcome,
    semigroup::{combine_all, Semigroup},
};
