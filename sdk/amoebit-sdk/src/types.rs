use amoebit_state::{AccountKind, SeedPurpose};
use solana_sdk::pubkey::Pubkey;

/// Account created by the payer under a seed and owned by the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededAccount {
    pub purpose: SeedPurpose,
    pub seed: String,
    pub address: Pubkey,
    pub kind: AccountKind,
}

impl SeededAccount {
    /// Bytes allocated when the account is created
    pub fn space(&self) -> usize {
        self.kind.len()
    }
}

/// On-chain state of a seeded account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountState {
    NotCreated,
    Created,
}

/// Token accounts touched by a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimAccounts {
    pub source_token_account: Pubkey,
    pub destination_token_account: Pubkey,
    pub mint_authority: Pubkey,
}
