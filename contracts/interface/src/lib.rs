//! Amoebit Interface
//!
//! Wire format of the instructions understood by the Amoebit minter program,
//! plus the fixed-width field primitives shared with the account layouts.

pub mod args;
pub mod error;
pub mod instruction;
pub mod layout;

pub use args::{parse_u64_arg, sol_to_lamports, u64_from_f64, u64_from_u128, LAMPORTS_PER_SOL};
pub use error::InstructionError;
pub use instruction::{
    encode_instruction, AmoebitInstruction, InstructionDiscriminator, InstructionLayout,
    INSTRUCTION_LAYOUTS,
};
pub use layout::{total_size, FieldSpec, FieldWidth};
