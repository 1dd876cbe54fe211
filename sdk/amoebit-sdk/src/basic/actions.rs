use crate::advanced::instructions;
use crate::basic::session::AmoebitSession;
use crate::core::connection::SolConnection;
use crate::error::{AmoebitSdkError, Result};
use crate::types::SeededAccount;
use crate::utils;
use amoebit_state::SeedPurpose;
use solana_sdk::instruction::Instruction;
use solana_sdk::message::Message;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::transaction::Transaction;
use tracing::{debug, info};

/// A program instruction bound to the seeded account it writes.
///
/// When the target account does not exist yet, the transaction creates it
/// first with exactly the size of its layout.
pub struct SeededCall<'a> {
    session: &'a AmoebitSession,
    target: Option<SeedPurpose>,
    instruction: Instruction,
}

impl<'a> SeededCall<'a> {
    pub(crate) fn new(
        session: &'a AmoebitSession,
        target: Option<SeedPurpose>,
        instruction: Instruction,
    ) -> Self {
        Self {
            session,
            target,
            instruction,
        }
    }

    pub fn instruction(&self) -> &Instruction {
        &self.instruction
    }

    /// Account created on demand, if any
    pub fn target(&self) -> Option<&SeededAccount> {
        self.target.map(|purpose| self.session.seeded(purpose))
    }

    pub async fn build_instructions(
        &self,
        connection: &impl SolConnection,
    ) -> Result<Vec<Instruction>> {
        let mut ixs = Vec::with_capacity(2);

        if let Some(target) = self.target() {
            match utils::fetch_account(connection, &target.address).await? {
                Some(existing) => self.session.check_existing(target, &existing)?,
                None => {
                    let lamports = connection
                        .get_minimum_balance_for_rent_exemption(target.space())
                        .await
                        .map_err(AmoebitSdkError::connection)?;
                    info!(
                        address = %target.address,
                        seed = %target.seed,
                        space = target.space(),
                        lamports,
                        "Creating account"
                    );
                    ixs.push(instructions::create_seeded_account(
                        &self.session.program_id(),
                        &self.session.payer(),
                        target,
                        lamports,
                    ));
                },
            }
        }

        debug!(
            program_id = %self.instruction.program_id,
            data = ?self.instruction.data,
            "Encoded instruction"
        );
        ixs.push(self.instruction.clone());
        Ok(ixs)
    }

    pub async fn build_transaction(&self, connection: &impl SolConnection) -> Result<Transaction> {
        let ixs = self.build_instructions(connection).await?;
        let payer = self.session.payer();
        Ok(Transaction::new_unsigned(Message::new(&ixs, Some(&payer))))
    }

    /// Build, sign with `payer` and submit.
    pub async fn send(&self, connection: &impl SolConnection, payer: &Keypair) -> Result<Signature> {
        let tx = self.build_transaction(connection).await?;
        self.session.sign_and_send(connection, tx, payer).await
    }
}
