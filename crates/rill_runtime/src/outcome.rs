//! Success-or-error-code result value and the fail-fast accessor contract.

use std::io::Write;

/// The fixed error-code table shared by every checked operation.
///
/// Codes are process-wide constants; the fail-fast path uses them verbatim
/// as process exit statuses, so their numeric values are part of the
/// external contract and must never be renumbered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    IndexOutOfRange = 1,
    DivisionByZero = 3,
    InvalidArgument = 10,
}

impl ErrorCode {
    #[inline]
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

/// Result value for checked runtime operations: either a success payload or
/// an [`ErrorCode`], never both.
///
/// Generated code branches on [`is_ok`](Outcome::is_ok) and only then calls
/// [`get_value`](Outcome::get_value). Calling `get_value` on a failed
/// `Outcome` is a contract violation, not a recoverable condition: it writes
/// a diagnostic to stderr and terminates the process with the stored code as
/// exit status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    Ok(T),
    Err(ErrorCode),
}

impl<T> Outcome<T> {
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// The stored error code, or 0 for a success value.
    #[inline]
    pub fn code(&self) -> i32 {
        match self {
            Outcome::Ok(_) => 0,
            Outcome::Err(code) => code.as_i32(),
        }
    }

    /// Extracts the success payload.
    ///
    /// Precondition: `self.is_ok()`. On a failed `Outcome` this is the
    /// runtime's fail-fast path: it flushes stdout (output produced before
    /// the violation must not be lost), reports the violation on stderr,
    /// and exits the process with the stored code. An explicit exit rather
    /// than a panic, so the exit status survives any panic-strategy choice.
    pub fn get_value(self) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(code) => {
                let _ = std::io::stdout().flush();
                eprintln!("Called getValue on runtime error result!");
                std::process::exit(code.as_i32());
            }
        }
    }
}
