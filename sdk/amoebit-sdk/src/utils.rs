use crate::core::connection::SolConnection;
use crate::error::{AmoebitSdkError, Result};
use crate::types::AccountState;
use amoebit_state::{decode_account, AccountKind, AccountRecord, FixedLayout, MINTER_PDA_SEED};
use solana_sdk::account::Account;
use solana_sdk::pubkey::Pubkey;

//=============================================================================
// Address Derivation Helpers
//=============================================================================

/// Derive the address `base` creates for `owner` under `seed`
pub fn derive_seeded_address(base: &Pubkey, seed: &str, owner: &Pubkey) -> Result<Pubkey> {
    Ok(Pubkey::create_with_seed(base, seed, owner)?)
}

/// Derive the mint authority PDA
pub fn derive_minter_authority(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[MINTER_PDA_SEED, program_id.as_ref(), MINTER_PDA_SEED],
        program_id,
    )
}

//=============================================================================
// Account Fetching & Parsing
//=============================================================================

pub async fn fetch_account(
    connection: &impl SolConnection,
    address: &Pubkey,
) -> Result<Option<Account>> {
    connection
        .get_account(address)
        .await
        .map_err(AmoebitSdkError::connection)
}

/// Fetch raw account data from the blockchain
pub async fn fetch_account_data(
    connection: &impl SolConnection,
    address: &Pubkey,
) -> Result<Vec<u8>> {
    let account = fetch_account(connection, address)
        .await?
        .ok_or(AmoebitSdkError::AccountNotFound(*address))?;

    Ok(account.data)
}

/// Fetch and decode an account whose layout is known at compile time
pub async fn fetch_record<T: FixedLayout>(
    connection: &impl SolConnection,
    address: &Pubkey,
) -> Result<T> {
    let data = fetch_account_data(connection, address).await?;
    Ok(T::from_bytes(&data)?)
}

/// Fetch and decode an account through a runtime layout
pub async fn fetch_account_record(
    connection: &impl SolConnection,
    address: &Pubkey,
    kind: AccountKind,
) -> Result<AccountRecord> {
    let data = fetch_account_data(connection, address).await?;
    Ok(decode_account(kind, &data)?)
}

pub fn account_state(account: Option<&Account>) -> AccountState {
    match account {
        Some(_) => AccountState::Created,
        None => AccountState::NotCreated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_address_is_deterministic() {
        let base = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let a = derive_seeded_address(&base, "userSeed11", &owner).unwrap();
        let b = derive_seeded_address(&base, "userSeed11", &owner).unwrap();
        assert_eq!(a, b);
        assert_ne!(
            a,
            derive_seeded_address(&base, "totalSeed11", &owner).unwrap()
        );
    }

    #[test]
    fn test_seeded_address_known_answer() {
        let base = Pubkey::new_from_array([1u8; 32]);
        let owner = Pubkey::new_from_array([2u8; 32]);
        assert_eq!(
            derive_seeded_address(&base, "userSeed11", &owner)
                .unwrap()
                .to_string(),
            "FbXhAavN276d5ZEKME4u7zGBBSizLFhYFGqwXrgCwzpf"
        );
        assert_eq!(
            derive_seeded_address(&base, "totalSeed11", &owner)
                .unwrap()
                .to_string(),
            "HheufYtcXL6SQQ9TyYjuq5RQq3d8uSs5QUF2VQ1NykM"
        );
    }

    #[test]
    fn test_seed_longer_than_limit_is_rejected() {
        let base = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let seed = "s".repeat(33);
        assert!(matches!(
            derive_seeded_address(&base, &seed, &owner),
            Err(AmoebitSdkError::AddressDerivation(_))
        ));
        assert!(derive_seeded_address(&base, &seed[..32], &owner).is_ok());
    }

    #[test]
    fn test_minter_authority_is_off_curve() {
        let program_id = Pubkey::new_unique();
        let (authority, _) = derive_minter_authority(&program_id);
        assert!(!authority.is_on_curve());
        assert_eq!(derive_minter_authority(&program_id).0, authority);
    }
}
