use amoebit_interface::InstructionError;
use amoebit_state::{AccountDataError, AccountKind};
use solana_sdk::pubkey::{Pubkey, PubkeyError};
use std::error::Error;
use thiserror::Error;

/// SDK-specific error types for Amoebit minter operations
#[derive(Debug, Error)]
pub enum AmoebitSdkError {
    /// Connection or RPC error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Account not found on-chain
    #[error("Account not found: {0}")]
    AccountNotFound(Pubkey),

    /// Seeded address could not be derived
    #[error("Address derivation failed: {0}")]
    AddressDerivation(#[from] PubkeyError),

    /// Two account purposes share one seed string
    #[error("Seed {0:?} is used for more than one account")]
    SeedCollision(String),

    #[error("Account {address} is owned by {owner}, not by the minter program")]
    IncorrectOwner { address: Pubkey, owner: Pubkey },

    /// Existing account was created for an older layout; bump the seed generation
    #[error(
        "Account {address} (seed {seed:?}) holds {actual} bytes but the {kind} layout needs {expected}; bump the seed generation"
    )]
    StaleAccountLayout {
        address: Pubkey,
        seed: String,
        kind: AccountKind,
        expected: usize,
        actual: usize,
    },

    /// No layout is known for this address
    #[error("No account layout recorded for {0}")]
    UnknownAccountKind(Pubkey),

    #[error("Program {0} is not deployed")]
    ProgramNotDeployed(Pubkey),

    #[error("Program {0} is not executable")]
    ProgramNotExecutable(Pubkey),

    #[error("Invalid instruction: {0}")]
    Instruction(#[from] InstructionError),

    #[error("Invalid account data: {0}")]
    AccountData(#[from] AccountDataError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Keypair error: {0}")]
    Keypair(String),

    #[error("Signing failed: {0}")]
    Signing(String),
}

impl AmoebitSdkError {
    pub(crate) fn connection(err: Box<dyn Error + Send + Sync>) -> Self {
        AmoebitSdkError::Connection(err.to_string())
    }
}

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, AmoebitSdkError>;
