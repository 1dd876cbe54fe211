pub mod advanced;
pub mod basic;
pub mod config;
pub mod core;
pub mod error;
pub mod types;
pub mod utils;

pub use crate::basic::actions::SeededCall;
pub use crate::basic::session::AmoebitSession;
pub use crate::config::CliConfig;
pub use crate::core::connection::SolConnection;
pub use crate::core::rpc::RpcConnection;
pub use crate::error::{AmoebitSdkError, Result};
pub use crate::types::{AccountState, ClaimAccounts, SeededAccount};
pub use crate::utils::{
    derive_minter_authority, derive_seeded_address, fetch_account, fetch_account_data,
    fetch_account_record, fetch_record,
};

pub mod interface {
    pub use amoebit_interface::{
        encode_instruction, sol_to_lamports, AmoebitInstruction, InstructionError,
    };
}

pub mod state {
    pub use amoebit_state::{
        decode_account, encode_account, AccountKind, AccountRecord, FixedLayout, IndexAccount,
        SeedPurpose, SeedSet, TimeAccount,
    };
}
