//! Amoebit Instruction Definitions
//!
//! Every instruction is `[opcode: u8]` followed by its arguments in declared
//! order, each a fixed-width little-endian unsigned integer. The layouts below
//! are what the deployed program reads and must not change.

use crate::args::u64_from_u128;
use crate::error::InstructionError;
use crate::layout::{total_size, FieldSpec, FieldWidth};

/// Instruction discriminators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum InstructionDiscriminator {
    BuyToken = 0,
    SetReleaseTime = 1,
    InitializeTotal = 2,
    Claim = 3,
}

impl TryFrom<u8> for InstructionDiscriminator {
    type Error = InstructionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(InstructionDiscriminator::BuyToken),
            1 => Ok(InstructionDiscriminator::SetReleaseTime),
            2 => Ok(InstructionDiscriminator::InitializeTotal),
            3 => Ok(InstructionDiscriminator::Claim),
            _ => Err(InstructionError::UnknownOpcode(value)),
        }
    }
}

/// One row of the opcode table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionLayout {
    pub discriminator: InstructionDiscriminator,
    pub name: &'static str,
    pub args: &'static [FieldSpec],
}

impl InstructionLayout {
    /// Opcode byte plus every argument
    pub const fn packed_len(&self) -> usize {
        1 + total_size(self.args)
    }

    pub const fn opcode(&self) -> u8 {
        self.discriminator as u8
    }

    fn read_args(&self, mut input: &[u8]) -> Result<Vec<u64>, InstructionError> {
        let mut values = Vec::with_capacity(self.args.len());
        for spec in self.args {
            let (value, rest) = spec.width.read(input).ok_or_else(|| {
                InstructionError::InvalidInstructionData(format!(
                    "{} is missing argument '{}'",
                    self.name, spec.name
                ))
            })?;
            values.push(u64_from_u128(value)?);
            input = rest;
        }
        if !input.is_empty() {
            return Err(InstructionError::InvalidInstructionData(format!(
                "{} has {} trailing byte(s)",
                self.name,
                input.len()
            )));
        }
        Ok(values)
    }
}

pub const BUY_TOKEN: InstructionLayout = InstructionLayout {
    discriminator: InstructionDiscriminator::BuyToken,
    name: "BuyToken",
    args: &[
        FieldSpec::u64("amount_sol_lamports"),
        FieldSpec::u64("amount_token_lamports"),
    ],
};

pub const SET_RELEASE_TIME: InstructionLayout = InstructionLayout {
    discriminator: InstructionDiscriminator::SetReleaseTime,
    name: "SetReleaseTime",
    args: &[FieldSpec::u64("timestamp_millis")],
};

pub const INITIALIZE_TOTAL: InstructionLayout = InstructionLayout {
    discriminator: InstructionDiscriminator::InitializeTotal,
    name: "InitializeTotal",
    args: &[FieldSpec::u64("total_amount")],
};

/// Opcode 3 without an amount
pub const CLAIM_ALL: InstructionLayout = InstructionLayout {
    discriminator: InstructionDiscriminator::Claim,
    name: "ClaimAll",
    args: &[],
};

/// Opcode 3 with a trailing amount
pub const CLAIM: InstructionLayout = InstructionLayout {
    discriminator: InstructionDiscriminator::Claim,
    name: "Claim",
    args: &[FieldSpec::u64("amount")],
};

pub const INSTRUCTION_LAYOUTS: &[InstructionLayout] =
    &[BUY_TOKEN, SET_RELEASE_TIME, INITIALIZE_TOTAL, CLAIM_ALL, CLAIM];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmoebitInstruction {
    /// Pay SOL into the treasury and credit tokens to the buyer's index account
    ///
    /// Accounts:
    /// 0. `[writable]` User index account (seeded)
    /// 1. `[writable]` Total supply account (seeded)
    /// 2. `[writable]` Treasury wallet
    /// 3. `[writable, signer]` Payer
    /// 4. `[writable]` Time release account (seeded)
    /// 5. `[]` System program
    BuyToken {
        amount_sol_lamports: u64,
        amount_token_lamports: u64,
    },

    /// Accounts:
    /// 0. `[writable]` Time release account (seeded)
    /// 1. `[writable, signer]` Payer
    SetReleaseTime { timestamp_millis: u64 },

    /// Accounts:
    /// 0. `[writable]` Total supply account (seeded)
    /// 1. `[writable]` Treasury wallet
    /// 2. `[writable, signer]` Payer
    InitializeTotal { total_amount: u64 },

    /// Claim without naming an amount (1 byte on the wire)
    ///
    /// Accounts:
    /// 0. `[writable]` User index account (seeded)
    /// 1. `[writable, signer]` Payer
    /// 2. `[writable]` Time release account (seeded)
    /// 3. `[writable]` Source token account
    /// 4. `[writable]` Destination token account
    /// 5. `[writable]` Mint authority
    /// 6. `[]` SPL token program
    ClaimAll,

    /// Claim a specific amount (9 bytes on the wire). Same accounts as `ClaimAll`.
    Claim { amount: u64 },

    /// Arbitrary opcode with `u64` arguments, for probing the program.
    GenericTest { opcode: u8, args: Vec<u64> },
}

impl AmoebitInstruction {
    pub fn opcode(&self) -> u8 {
        match self {
            Self::GenericTest { opcode, .. } => *opcode,
            _ => self.layout().map(|l| l.opcode()).unwrap_or_default(),
        }
    }

    /// Row of the opcode table this instruction is encoded with.
    /// `GenericTest` has none.
    pub fn layout(&self) -> Option<&'static InstructionLayout> {
        match self {
            Self::BuyToken { .. } => Some(&BUY_TOKEN),
            Self::SetReleaseTime { .. } => Some(&SET_RELEASE_TIME),
            Self::InitializeTotal { .. } => Some(&INITIALIZE_TOTAL),
            Self::ClaimAll => Some(&CLAIM_ALL),
            Self::Claim { .. } => Some(&CLAIM),
            Self::GenericTest { .. } => None,
        }
    }

    pub fn args(&self) -> Vec<u64> {
        match self {
            Self::BuyToken {
                amount_sol_lamports,
                amount_token_lamports,
            } => vec![*amount_sol_lamports, *amount_token_lamports],
            Self::SetReleaseTime { timestamp_millis } => vec![*timestamp_millis],
            Self::InitializeTotal { total_amount } => vec![*total_amount],
            Self::ClaimAll => vec![],
            Self::Claim { amount } => vec![*amount],
            Self::GenericTest { args, .. } => args.clone(),
        }
    }

    pub fn packed_len(&self) -> usize {
        match self.layout() {
            Some(layout) => layout.packed_len(),
            None => 1 + self.args().len() * FieldWidth::U64.size(),
        }
    }

    pub fn pack(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.packed_len());
        data.push(self.opcode());
        for value in self.args() {
            data.extend_from_slice(&value.to_le_bytes());
        }
        data
    }

    /// Decode instruction data the way the program does: opcode first, then
    /// the argument block of the layout whose length matches.
    pub fn unpack(input: &[u8]) -> Result<Self, InstructionError> {
        let (&opcode, rest) = input.split_first().ok_or_else(|| {
            InstructionError::InvalidInstructionData("empty instruction data".to_string())
        })?;
        let discriminator = InstructionDiscriminator::try_from(opcode)?;

        let layout = INSTRUCTION_LAYOUTS
            .iter()
            .find(|l| l.discriminator == discriminator && l.packed_len() == input.len())
            .ok_or_else(|| {
                InstructionError::InvalidInstructionData(format!(
                    "no layout for opcode {} is {} bytes long",
                    opcode,
                    input.len()
                ))
            })?;

        let values = layout.read_args(rest)?;
        Self::from_values(discriminator, &values)
    }

    /// Build a typed instruction from an opcode and raw argument values,
    /// validating arity against the opcode table and every value against
    /// its field width.
    pub fn from_parts(opcode: u8, args: &[u128]) -> Result<Self, InstructionError> {
        let discriminator = InstructionDiscriminator::try_from(opcode)?;
        let values = args
            .iter()
            .map(|v| u64_from_u128(*v))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_values(discriminator, &values)
    }

    fn from_values(
        discriminator: InstructionDiscriminator,
        values: &[u64],
    ) -> Result<Self, InstructionError> {
        use InstructionDiscriminator as D;

        Ok(match (discriminator, values) {
            (D::BuyToken, [sol, token]) => Self::BuyToken {
                amount_sol_lamports: *sol,
                amount_token_lamports: *token,
            },
            (D::SetReleaseTime, [timestamp]) => Self::SetReleaseTime {
                timestamp_millis: *timestamp,
            },
            (D::InitializeTotal, [total]) => Self::InitializeTotal {
                total_amount: *total,
            },
            (D::Claim, []) => Self::ClaimAll,
            (D::Claim, [amount]) => Self::Claim { amount: *amount },
            _ => {
                return Err(InstructionError::ArgumentCount {
                    opcode: discriminator as u8,
                    actual: values.len(),
                })
            },
        })
    }
}

/// Encode `opcode` with `args` after validating both against the opcode table.
pub fn encode_instruction(opcode: u8, args: &[u128]) -> Result<Vec<u8>, InstructionError> {
    Ok(AmoebitInstruction::from_parts(opcode, args)?.pack())
}
