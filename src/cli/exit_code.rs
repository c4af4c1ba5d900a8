//! Process exit statuses.
//!
//! Arithmetic failures and unknown operations are reported on stdout and still
//! exit successfully. Only a missing argument is a failure.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    /// Fewer than three positional arguments.
    Usage = 1,
}

impl ExitCode {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.code())
    }
}
