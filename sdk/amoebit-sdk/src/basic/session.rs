use crate::advanced::instructions;
use crate::basic::actions::SeededCall;
use crate::core::connection::SolConnection;
use crate::core::constants::{DEFAULT_TREASURY, FEE_SIGNATURE_BUDGET, LAMPORTS_PER_SIGNATURE};
use crate::error::{AmoebitSdkError, Result};
use crate::types::{AccountState, ClaimAccounts, SeededAccount};
use crate::utils::{self, derive_minter_authority, derive_seeded_address};
use amoebit_interface::LAMPORTS_PER_SOL;
use amoebit_state::{
    AccountKind, AccountRecord, IndexAccount, SeedPurpose, SeedSet, TimeAccount,
};
use solana_sdk::account::Account;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::transaction::Transaction;
use std::collections::HashMap;
use tracing::{debug, info};

/// Payer-scoped view of the minter program.
///
/// Holds the seeded addresses derived from the payer and the layout each one
/// was created with. Account data carries no type tag, so reads go through
/// this address-to-layout map rather than guessing from the bytes.
#[derive(Debug, Clone)]
pub struct AmoebitSession {
    program_id: Pubkey,
    payer: Pubkey,
    treasury: Pubkey,
    minter_authority: Pubkey,
    user_index: SeededAccount,
    total: SeededAccount,
    time: SeededAccount,
    kinds: HashMap<Pubkey, AccountKind>,
}

impl AmoebitSession {
    pub fn new(program_id: Pubkey, payer: Pubkey, seeds: &SeedSet) -> Result<Self> {
        if let Some(seed) = seeds.duplicate() {
            return Err(AmoebitSdkError::SeedCollision(seed.to_string()));
        }

        let seeded = |purpose: SeedPurpose| -> Result<SeededAccount> {
            let seed = seeds.seed(purpose).to_string();
            let address = derive_seeded_address(&payer, &seed, &program_id)?;
            Ok(SeededAccount {
                purpose,
                seed,
                address,
                kind: purpose.kind(),
            })
        };
        let user_index = seeded(SeedPurpose::UserIndex)?;
        let total = seeded(SeedPurpose::TotalSupply)?;
        let time = seeded(SeedPurpose::TimeRelease)?;

        let kinds = [&user_index, &total, &time]
            .into_iter()
            .map(|account| (account.address, account.kind))
            .collect();

        Ok(Self {
            program_id,
            payer,
            treasury: DEFAULT_TREASURY,
            minter_authority: derive_minter_authority(&program_id).0,
            user_index,
            total,
            time,
            kinds,
        })
    }

    pub fn with_treasury(mut self, treasury: Pubkey) -> Self {
        self.treasury = treasury;
        self
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    pub fn payer(&self) -> Pubkey {
        self.payer
    }

    pub fn treasury(&self) -> Pubkey {
        self.treasury
    }

    pub fn minter_authority(&self) -> Pubkey {
        self.minter_authority
    }

    pub fn seeded(&self, purpose: SeedPurpose) -> &SeededAccount {
        match purpose {
            SeedPurpose::UserIndex => &self.user_index,
            SeedPurpose::TotalSupply => &self.total,
            SeedPurpose::TimeRelease => &self.time,
        }
    }

    pub fn seeded_accounts(&self) -> [&SeededAccount; 3] {
        [&self.user_index, &self.total, &self.time]
    }

    /// Layout recorded for `address`
    pub fn kind_of(&self, address: &Pubkey) -> Option<AccountKind> {
        self.kinds.get(address).copied()
    }

    /// Record the layout of an account this session did not derive itself.
    pub fn record_kind(&mut self, address: Pubkey, kind: AccountKind) {
        self.kinds.insert(address, kind);
    }

    //=========================================================================
    // Preflight
    //=========================================================================

    /// Make sure the payer can cover one account's rent plus signature fees,
    /// requesting an airdrop for the shortfall. Returns the payer balance.
    pub async fn establish_payer(&self, connection: &impl SolConnection) -> Result<u64> {
        let rent = connection
            .get_minimum_balance_for_rent_exemption(AccountKind::Index.len())
            .await
            .map_err(AmoebitSdkError::connection)?;
        let fees = rent + LAMPORTS_PER_SIGNATURE * FEE_SIGNATURE_BUDGET;

        let mut lamports = connection
            .get_balance(&self.payer)
            .await
            .map_err(AmoebitSdkError::connection)?;
        if lamports < fees {
            let shortfall = fees - lamports;
            info!(payer = %self.payer, shortfall, "Requesting airdrop");
            let signature = connection
                .request_airdrop(&self.payer, shortfall)
                .await
                .map_err(AmoebitSdkError::connection)?;
            connection
                .confirm_transaction(&signature)
                .await
                .map_err(AmoebitSdkError::connection)?;
            lamports = connection
                .get_balance(&self.payer)
                .await
                .map_err(AmoebitSdkError::connection)?;
        }

        info!(
            payer = %self.payer,
            sol = lamports as f64 / LAMPORTS_PER_SOL as f64,
            "Using account to pay for fees"
        );
        Ok(lamports)
    }

    /// Fail unless the program account exists and is executable.
    pub async fn check_program(&self, connection: &impl SolConnection) -> Result<()> {
        let program = utils::fetch_account(connection, &self.program_id)
            .await?
            .ok_or(AmoebitSdkError::ProgramNotDeployed(self.program_id))?;
        if !program.executable {
            return Err(AmoebitSdkError::ProgramNotExecutable(self.program_id));
        }
        info!(program_id = %self.program_id, "Using program");
        Ok(())
    }

    pub async fn account_state(
        &self,
        connection: &impl SolConnection,
        purpose: SeedPurpose,
    ) -> Result<AccountState> {
        let account = utils::fetch_account(connection, &self.seeded(purpose).address).await?;
        Ok(utils::account_state(account.as_ref()))
    }

    /// An existing seeded account must belong to the program and match the
    /// current layout size.
    pub(crate) fn check_existing(&self, seeded: &SeededAccount, existing: &Account) -> Result<()> {
        if existing.owner != self.program_id {
            return Err(AmoebitSdkError::IncorrectOwner {
                address: seeded.address,
                owner: existing.owner,
            });
        }
        if existing.data.len() != seeded.space() {
            return Err(AmoebitSdkError::StaleAccountLayout {
                address: seeded.address,
                seed: seeded.seed.clone(),
                kind: seeded.kind,
                expected: seeded.space(),
                actual: existing.data.len(),
            });
        }
        debug!(address = %seeded.address, seed = %seeded.seed, "Seeded account exists");
        Ok(())
    }

    //=========================================================================
    // Instructions
    //=========================================================================

    pub fn initialize_total(&self, total_amount: u64) -> SeededCall<'_> {
        let ix = instructions::initialize_total(
            &self.program_id,
            &self.total.address,
            &self.treasury,
            &self.payer,
            total_amount,
        );
        SeededCall::new(self, Some(SeedPurpose::TotalSupply), ix)
    }

    pub fn set_release_time(&self, timestamp_millis: u64) -> SeededCall<'_> {
        let ix = instructions::set_release_time(
            &self.program_id,
            &self.time.address,
            &self.payer,
            timestamp_millis,
        );
        SeededCall::new(self, Some(SeedPurpose::TimeRelease), ix)
    }

    pub fn buy_token(&self, amount_sol_lamports: u64, amount_token_lamports: u64) -> SeededCall<'_> {
        let ix = instructions::buy_token(
            &self.program_id,
            &self.user_index.address,
            &self.total.address,
            &self.treasury,
            &self.payer,
            &self.time.address,
            amount_sol_lamports,
            amount_token_lamports,
        );
        SeededCall::new(self, Some(SeedPurpose::UserIndex), ix)
    }

    /// Opcode-only claim. The deployed handler reads an amount after the
    /// opcode, so clients normally send [`claim_amount`](Self::claim_amount).
    pub fn claim(&self, token_accounts: &ClaimAccounts) -> SeededCall<'_> {
        self.claim_inner(token_accounts, None)
    }

    pub fn claim_amount(&self, token_accounts: &ClaimAccounts, amount: u64) -> SeededCall<'_> {
        self.claim_inner(token_accounts, Some(amount))
    }

    fn claim_inner(&self, token_accounts: &ClaimAccounts, amount: Option<u64>) -> SeededCall<'_> {
        let ix = instructions::claim(
            &self.program_id,
            &self.user_index.address,
            &self.payer,
            &self.time.address,
            token_accounts,
            amount,
        );
        SeededCall::new(self, None, ix)
    }

    /// Send an arbitrary opcode against the index, minter and total accounts.
    pub fn test_contract(&self, opcode: u8, args: Vec<u64>) -> SeededCall<'_> {
        let ix = instructions::generic_test(
            &self.program_id,
            &self.user_index.address,
            &self.minter_authority,
            &self.total.address,
            &self.payer,
            opcode,
            args,
        );
        SeededCall::new(self, None, ix)
    }

    //=========================================================================
    // Reads
    //=========================================================================

    /// Decode any account whose layout the session knows.
    pub async fn read_account(
        &self,
        connection: &impl SolConnection,
        address: &Pubkey,
    ) -> Result<AccountRecord> {
        let kind = self
            .kind_of(address)
            .ok_or(AmoebitSdkError::UnknownAccountKind(*address))?;
        utils::fetch_account_record(connection, address, kind).await
    }

    pub async fn read_index(&self, connection: &impl SolConnection) -> Result<IndexAccount> {
        let index: IndexAccount = utils::fetch_record(connection, &self.user_index.address).await?;
        info!(address = %self.user_index.address, amount = index.amount, "User index");
        Ok(index)
    }

    pub async fn read_total(&self, connection: &impl SolConnection) -> Result<IndexAccount> {
        let total: IndexAccount = utils::fetch_record(connection, &self.total.address).await?;
        info!(address = %self.total.address, amount = total.amount, "Total supply");
        Ok(total)
    }

    pub async fn read_time_release(&self, connection: &impl SolConnection) -> Result<TimeAccount> {
        let time: TimeAccount = utils::fetch_record(connection, &self.time.address).await?;
        info!(
            address = %self.time.address,
            time_release = time.time_release,
            "Release time"
        );
        Ok(time)
    }

    //=========================================================================
    // Submission
    //=========================================================================

    pub async fn sign_and_send(
        &self,
        connection: &impl SolConnection,
        mut tx: Transaction,
        payer: &Keypair,
    ) -> Result<Signature> {
        let blockhash = connection
            .get_latest_blockhash()
            .await
            .map_err(AmoebitSdkError::connection)?;
        tx.try_sign(&[payer], blockhash)
            .map_err(|e| AmoebitSdkError::Signing(e.to_string()))?;
        let signature = connection
            .send_transaction(&tx)
            .await
            .map_err(AmoebitSdkError::connection)?;
        info!(%signature, "Transaction confirmed");
        Ok(signature)
    }
}
