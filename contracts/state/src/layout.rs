use crate::{error::AccountDataError, kind::AccountKind};
use borsh::{BorshDeserialize, BorshSerialize};

/// Trait for records stored as a fixed-size account blob.
///
/// The byte form is the borsh encoding of the record, which for unsigned
/// integer fields is exactly their little-endian bytes in declaration order.
pub trait FixedLayout: BorshSerialize + BorshDeserialize + Sized {
    const KIND: AccountKind;
    const LEN: usize = Self::KIND.len();

    fn to_bytes(&self) -> Vec<u8>;

    /// Decode `data`, which must be exactly `LEN` bytes.
    fn from_bytes(data: &[u8]) -> Result<Self, AccountDataError> {
        if data.len() != Self::LEN {
            return Err(AccountDataError::MalformedAccountData {
                kind: Self::KIND,
                expected: Self::LEN,
                actual: data.len(),
            });
        }
        Ok(Self::try_from_slice(data)?)
    }
}
