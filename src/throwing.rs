use std::panic::{self, AssertUnwindSafe};

use log::{log_enabled, trace};

use crate::outcome::Outcome;

impl<V, E: 'static> Outcome<V, E> {
    /// Runs `f`, capturing a panic raised with an `E` payload as a failure.
    ///
    /// Panics with any other payload are not ours to interpret, so they are resumed.
    pub fn catching(f: impl FnOnce() -> V) -> Self {
        let payload = match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => return Self::Success(value),
            Err(payload) => payload,
        };
        match payload.downcast::<E>() {
            Ok(error) => {
                if log_enabled!(log::Level::Trace) {
                    trace!("caught panic with a {} payload", std::any::type_name::<E>());
                }
                Self::Failure(*error)
            }
            Err(payload) => {
                if log_enabled!(log::Level::Trace) {
                    trace!(
                        "resuming panic, payload is not a {}",
                        std::any::type_name::<E>()
                    );
                }
                panic::resume_unwind(payload)
            }
        }
    }
}

impl<V, E: Send + 'static> Outcome<V, E> {
    /// Returns the payload, or panics with the error as the panic payload.
    ///
    /// Prefer [`into_result`](Self::into_result) and `?`; this exists for callers which unwind
    /// through code they do not control and recover with [`catching`](Self::catching).
    pub fn unwrap_or_throw(self) -> V {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic::panic_any(error),
        }
    }
}
