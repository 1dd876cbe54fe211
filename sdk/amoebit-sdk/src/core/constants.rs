use solana_sdk::pubkey;
use solana_sdk::pubkey::Pubkey;

/// Endpoint used when no CLI config is found
pub const DEFAULT_RPC_URL: &str = "http://localhost:8899";

pub const SPL_TOKEN_PROGRAM_ID: Pubkey = pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

/// Receives the SOL paid for token purchases
pub const DEFAULT_TREASURY: Pubkey = pubkey!("A4LRKkEnPAK9dxrJgN7wetXmyGPKiWgprjF9Gq8aJboV");

pub const LAMPORTS_PER_SIGNATURE: u64 = 5_000;

/// Signatures the payer must be able to afford on top of one account's rent
pub const FEE_SIGNATURE_BUDGET: u64 = 100;
