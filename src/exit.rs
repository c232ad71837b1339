// src/exit.rs
//! Standardized process exit codes for `spscan`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::SpscanError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SpscanExit {
    /// Scan completed and the report was produced.
    Success = 0,
    /// Generic error (e.g. IO).
    Error = 1,
    /// Bad input: unreadable config, unknown format, missing or unreadable root.
    InvalidInput = 2,
    /// The report writer failed.
    WriteFailure = 3,
}

impl SpscanExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }

    /// Picks the exit code for a failed operation.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<SpscanError>() {
            Some(SpscanError::Write { .. }) => Self::WriteFailure,
            Some(
                SpscanError::Config { .. } | SpscanError::Regex(_) | SpscanError::Walk { .. },
            ) => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for SpscanExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
