//! Amoebit State Module
//!
//! Fixed-size account layouts owned by the Amoebit minter program and the seeds
//! their addresses are derived from. Account data carries no discriminator: the
//! caller must know which kind lives at an address.

pub mod error;
pub mod kind;
pub mod layout;
pub mod records;
pub mod seeds;

pub use error::AccountDataError;
pub use amoebit_interface::FieldSpec;
pub use kind::AccountKind;
pub use layout::FixedLayout;
pub use records::{
    decode_account, encode_account, AccountRecord, BuyAmountRecord, IndexAccount, TimeAccount,
    WideIndexAccount,
};
pub use seeds::{SeedPurpose, SeedSet, DEFAULT_SEED_GENERATION, MINTER_PDA_SEED};
