//! Conversions from loosely typed user input into instruction arguments.
//!
//! Arguments are `u64` on the wire. Anything negative, fractional, non-finite
//! or wider than 64 bits is rejected instead of wrapped.

use crate::error::InstructionError;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

const SOL_DECIMALS: usize = 9;

// 2^64, the first f64 that no longer fits.
const U64_LIMIT_F64: f64 = 18_446_744_073_709_551_616.0;

pub fn u64_from_u128(value: u128) -> Result<u64, InstructionError> {
    u64::try_from(value).map_err(|_| {
        InstructionError::InvalidArgument(format!("{} exceeds the u64 range", value))
    })
}

pub fn u64_from_f64(value: f64) -> Result<u64, InstructionError> {
    if !value.is_finite() {
        return Err(InstructionError::InvalidArgument(format!(
            "{} is not a finite number",
            value
        )));
    }
    if value < 0.0 {
        return Err(InstructionError::InvalidArgument(format!(
            "{} is negative",
            value
        )));
    }
    if value.fract() != 0.0 {
        return Err(InstructionError::InvalidArgument(format!(
            "{} is not an integer",
            value
        )));
    }
    if value >= U64_LIMIT_F64 {
        return Err(InstructionError::InvalidArgument(format!(
            "{} exceeds the u64 range",
            value
        )));
    }
    Ok(value as u64)
}

/// Parse a base-10 unsigned integer argument.
pub fn parse_u64_arg(input: &str) -> Result<u64, InstructionError> {
    let input = input.trim();
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InstructionError::InvalidArgument(format!(
            "'{}' is not an unsigned integer",
            input
        )));
    }
    input.parse::<u64>().map_err(|_| {
        InstructionError::InvalidArgument(format!("'{}' exceeds the u64 range", input))
    })
}

/// Parse a decimal SOL amount (e.g. `"0.3"`) into lamports without going
/// through floating point. At most nine fractional digits are accepted.
pub fn sol_to_lamports(amount: &str) -> Result<u64, InstructionError> {
    let amount = amount.trim();
    let invalid = || {
        InstructionError::InvalidArgument(format!("'{}' is not a valid SOL amount", amount))
    };

    let (whole, frac) = amount.split_once('.').unwrap_or((amount, ""));
    if whole.is_empty() && frac.is_empty() {
        return Err(invalid());
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if frac.len() > SOL_DECIMALS {
        return Err(InstructionError::InvalidArgument(format!(
            "'{}' has more than {} decimal places",
            amount, SOL_DECIMALS
        )));
    }

    let whole: u64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid())?
    };
    let frac: u64 = format!("{:0<width$}", frac, width = SOL_DECIMALS)
        .parse()
        .map_err(|_| invalid())?;

    whole
        .checked_mul(LAMPORTS_PER_SOL)
        .and_then(|lamports| lamports.checked_add(frac))
        .ok_or_else(|| {
            InstructionError::InvalidArgument(format!("'{}' SOL exceeds the u64 range", amount))
        })
}
