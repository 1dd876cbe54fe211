//! Amoebit Interface Error Types

use pinocchio::program_error::ProgramError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstructionError {
    /// Value cannot be represented in the target field width, or is negative/non-integer
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown opcode: {0}")]
    UnknownOpcode(u8),

    /// No layout for the opcode takes this many arguments
    #[error("Opcode {opcode} has no layout taking {actual} argument(s)")]
    ArgumentCount { opcode: u8, actual: usize },

    #[error("Invalid instruction data: {0}")]
    InvalidInstructionData(String),
}

impl From<InstructionError> for ProgramError {
    fn from(e: InstructionError) -> Self {
        match e {
            InstructionError::InvalidArgument(_) => ProgramError::InvalidArgument,
            _ => ProgramError::InvalidInstructionData,
        }
    }
}
