use crate::core::constants::SPL_TOKEN_PROGRAM_ID;
use crate::types::{ClaimAccounts, SeededAccount};
use amoebit_interface::AmoebitInstruction;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::{system_instruction, system_program};

/// Create `account` at its seeded address, funded by and based on `payer`.
pub fn create_seeded_account(
    program_id: &Pubkey,
    payer: &Pubkey,
    account: &SeededAccount,
    lamports: u64,
) -> Instruction {
    system_instruction::create_account_with_seed(
        payer,
        &account.address,
        payer,
        &account.seed,
        lamports,
        account.space() as u64,
        program_id,
    )
}

pub fn initialize_total(
    program_id: &Pubkey,
    total: &Pubkey,
    treasury: &Pubkey,
    payer: &Pubkey,
    total_amount: u64,
) -> Instruction {
    let instruction = AmoebitInstruction::InitializeTotal { total_amount };

    let accounts = vec![
        AccountMeta::new(*total, false),
        AccountMeta::new(*treasury, false),
        AccountMeta::new(*payer, true),
    ];

    Instruction {
        program_id: *program_id,
        accounts,
        data: instruction.pack(),
    }
}

pub fn set_release_time(
    program_id: &Pubkey,
    time: &Pubkey,
    payer: &Pubkey,
    timestamp_millis: u64,
) -> Instruction {
    let instruction = AmoebitInstruction::SetReleaseTime { timestamp_millis };

    let accounts = vec![
        AccountMeta::new(*time, false),
        AccountMeta::new(*payer, true),
    ];

    Instruction {
        program_id: *program_id,
        accounts,
        data: instruction.pack(),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn buy_token(
    program_id: &Pubkey,
    user_index: &Pubkey,
    total: &Pubkey,
    treasury: &Pubkey,
    payer: &Pubkey,
    time: &Pubkey,
    amount_sol_lamports: u64,
    amount_token_lamports: u64,
) -> Instruction {
    let instruction = AmoebitInstruction::BuyToken {
        amount_sol_lamports,
        amount_token_lamports,
    };

    let accounts = vec![
        AccountMeta::new(*user_index, false),
        AccountMeta::new(*total, false),
        AccountMeta::new(*treasury, false),
        AccountMeta::new(*payer, true),
        AccountMeta::new(*time, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Instruction {
        program_id: *program_id,
        accounts,
        data: instruction.pack(),
    }
}

/// Claim purchased tokens; `None` sends the amount-less form.
pub fn claim(
    program_id: &Pubkey,
    user_index: &Pubkey,
    payer: &Pubkey,
    time: &Pubkey,
    token_accounts: &ClaimAccounts,
    amount: Option<u64>,
) -> Instruction {
    let instruction = match amount {
        Some(amount) => AmoebitInstruction::Claim { amount },
        None => AmoebitInstruction::ClaimAll,
    };

    let accounts = vec![
        AccountMeta::new(*user_index, false),
        AccountMeta::new(*payer, true),
        AccountMeta::new(*time, false),
        AccountMeta::new(token_accounts.source_token_account, false),
        AccountMeta::new(token_accounts.destination_token_account, false),
        AccountMeta::new(token_accounts.mint_authority, false),
        AccountMeta::new_readonly(SPL_TOKEN_PROGRAM_ID, false),
    ];

    Instruction {
        program_id: *program_id,
        accounts,
        data: instruction.pack(),
    }
}

pub fn generic_test(
    program_id: &Pubkey,
    user_index: &Pubkey,
    minter_authority: &Pubkey,
    total: &Pubkey,
    payer: &Pubkey,
    opcode: u8,
    args: Vec<u64>,
) -> Instruction {
    let instruction = AmoebitInstruction::GenericTest { opcode, args };

    let accounts = vec![
        AccountMeta::new(*user_index, false),
        AccountMeta::new(*minter_authority, false),
        AccountMeta::new(*total, false),
        AccountMeta::new(*payer, true),
    ];

    Instruction {
        program_id: *program_id,
        accounts,
        data: instruction.pack(),
    }
}
