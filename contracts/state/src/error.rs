use crate::kind::AccountKind;
use pinocchio::program_error::ProgramError;
use thiserror::Error;

/// Error types related to account data decoding.
#[derive(Error, Debug)]
pub enum AccountDataError {
    /// Byte length differs from the fixed size of the requested kind
    #[error("Malformed {kind} account data: expected {expected} bytes, got {actual}")]
    MalformedAccountData {
        kind: AccountKind,
        expected: usize,
        actual: usize,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] std::io::Error),
}

impl From<AccountDataError> for ProgramError {
    fn from(_: AccountDataError) -> Self {
        ProgramError::InvalidAccountData
    }
}
