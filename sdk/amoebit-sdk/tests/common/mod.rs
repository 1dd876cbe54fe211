use async_trait::async_trait;
use amoebit_sdk::core::connection::SolConnection;
use solana_sdk::{
    account::Account,
    hash::Hash,
    pubkey::Pubkey,
    rent::Rent,
    signature::Signature,
    system_program,
    transaction::Transaction,
};
use std::collections::HashMap;
use tokio::sync::Mutex;

/// In-memory ledger standing in for an RPC node.
#[derive(Default)]
pub struct MockConnection {
    pub accounts: Mutex<HashMap<Pubkey, Account>>,
    pub sent: Mutex<Vec<Transaction>>,
    pub airdrops: Mutex<Vec<(Pubkey, u64)>>,
    pub confirmed: Mutex<Vec<Signature>>,
}

impl MockConnection {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_account(&self, address: Pubkey, account: Account) {
        self.accounts.lock().await.insert(address, account);
    }

    /// Store `data` at `address` as a rent-exempt account owned by `owner`.
    pub async fn set_data(&self, address: Pubkey, owner: Pubkey, data: Vec<u8>) {
        let account = Account {
            lamports: Rent::default().minimum_balance(data.len()),
            data,
            owner,
            executable: false,
            rent_epoch: 0,
        };
        self.set_account(address, account).await;
    }

    pub async fn deploy_program(&self, program_id: Pubkey, executable: bool) {
        let account = Account {
            lamports: 1_000_000_000,
            data: vec![0u8; 36],
            owner: solana_sdk::bpf_loader_upgradeable::id(),
            executable,
            rent_epoch: 0,
        };
        self.set_account(program_id, account).await;
    }
}

#[async_trait]
impl SolConnection for MockConnection {
    async fn send_transaction(
        &self,
        tx: &Transaction,
    ) -> Result<Signature, Box<dyn std::error::Error + Send + Sync>> {
        let signature = *tx.signatures.first().ok_or("No signature")?;
        self.sent.lock().await.push(tx.clone());
        Ok(signature)
    }

    async fn get_account(
        &self,
        pubkey: &Pubkey,
    ) -> Result<Option<Account>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.accounts.lock().await.get(pubkey).cloned())
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Hash::new_from_array([7u8; 32]))
    }

    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Rent::default().minimum_balance(data_len))
    }

    async fn get_balance(
        &self,
        pubkey: &Pubkey,
    ) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self
            .accounts
            .lock()
            .await
            .get(pubkey)
            .map(|a| a.lamports)
            .unwrap_or(0))
    }

    async fn request_airdrop(
        &self,
        pubkey: &Pubkey,
        lamports: u64,
    ) -> Result<Signature, Box<dyn std::error::Error + Send + Sync>> {
        let mut airdrops = self.airdrops.lock().await;
        airdrops.push((*pubkey, lamports));
        self.accounts
            .lock()
            .await
            .entry(*pubkey)
            .or_insert_with(|| Account::new(0, 0, &system_program::id()))
            .lamports += lamports;
        Ok(Signature::from([airdrops.len() as u8; 64]))
    }

    async fn confirm_transaction(
        &self,
        signature: &Signature,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.confirmed.lock().await.push(*signature);
        Ok(())
    }

    async fn get_version(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok("2.2.1".to_string())
    }
}
