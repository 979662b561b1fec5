//! Error plumbing shared by the workspace binaries and libraries.
//!
//! This package is mostly a reexport of
//! [`thiserror`](https://github.com/dtolnay/thiserror) and
//! [`eyre`](https://github.com/yaahc/eyre), used for defining and
//! propagating errors, respectively.
//!
//! ### Howto
//!
//! - Use `thiserror` to define strongly-typed public errors for your
//!   libraries (e.g. the converter's `ConvertError`).
//! - Use `eyre` (`AnyResult`) to propagate errors and their (optional)
//!   context up the callstack of an executable.
//! - Implement [`ExitStatus`] on typed errors that a binary should turn into
//!   a specific process exit code, and let `main` downcast to them.
//!
//! ### Exit codes
//!
//! A binary returning an `AnyError` that can't be downcasted to a known
//! error type exits with [`GENERIC_FAILURE`].

pub use eyre::{bail, ensure, Context};

pub type AnyError = eyre::Error;
pub type AnyResult<T> = eyre::Result<T>;

/// Exit code used when an error carries no specific status.
pub const GENERIC_FAILURE: u8 = 1;

/// Map an error onto the process exit code a CLI should return for it.
pub trait ExitStatus {
    fn exit_code(&self) -> u8;
}

pub mod prelude {
    pub use super::{anyerror, AnyError, AnyResult, ExitStatus, GENERIC_FAILURE};
    pub use eyre::{bail, ensure, Context as _, ContextCompat as _};
}

// -----------------------------------------------------------------------------

pub mod reexports {
    pub use eyre;
    pub use thiserror;
}

#[macro_export]
macro_rules! anyerror {
    ($msg:literal $(,)?) => {
        $crate::reexports::eyre::eyre!($msg)
    };
    ($err:expr $(,)?) => {{
        $crate::reexports::eyre::eyre!($err)
    }};
    ($fmt:expr, $($arg:tt)*) => {
        $crate::reexports::eyre::eyre!(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("typed failure")]
    struct TypedFailure;

    impl ExitStatus for TypedFailure {
        fn exit_code(&self) -> u8 {
            42
        }
    }

    fn fails() -> AnyResult<()> {
        Err(TypedFailure)?;
        Ok(())
    }

    #[test]
    fn test_downcast_keeps_exit_status() {
        let err = fails().unwrap_err();
        let code = err
            .downcast_ref::<TypedFailure>()
            .map(ExitStatus::exit_code)
            .unwrap_or(GENERIC_FAILURE);
        assert_eq!(42, code);
    }

    #[test]
    fn test_anyerror_macro_formats() {
        let err = anyerror!("need {} bytes", 8);
        assert_eq!("need 8 bytes", err.to_string());
        assert!(err.downcast_ref::<TypedFailure>().is_none());
    }
}
