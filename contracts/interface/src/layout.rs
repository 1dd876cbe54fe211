//! Fixed-width little-endian field primitives.
//!
//! Every instruction argument and account field is an unsigned integer of a
//! declared width, written least-significant byte first with no padding,
//! length prefix or delimiter.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWidth {
    U64,
    U128,
}

impl FieldWidth {
    /// Encoded size in bytes
    pub const fn size(self) -> usize {
        match self {
            FieldWidth::U64 => 8,
            FieldWidth::U128 => 16,
        }
    }

    /// Read one field from the front of `input`, returning the value and the remainder.
    pub fn read(self, input: &[u8]) -> Option<(u128, &[u8])> {
        if input.len() < self.size() {
            return None;
        }
        let (field, rest) = input.split_at(self.size());
        let mut wide = [0u8; 16];
        wide[..field.len()].copy_from_slice(field);
        Some((u128::from_le_bytes(wide), rest))
    }
}

/// Named field of an instruction argument block or account layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub width: FieldWidth,
}

impl FieldSpec {
    pub const fn u64(name: &'static str) -> Self {
        Self {
            name,
            width: FieldWidth::U64,
        }
    }

    pub const fn u128(name: &'static str) -> Self {
        Self {
            name,
            width: FieldWidth::U128,
        }
    }
}

/// Sum of the encoded sizes of `fields`.
pub const fn total_size(fields: &[FieldSpec]) -> usize {
    let mut len = 0;
    let mut i = 0;
    while i < fields.len() {
        len += fields[i].width.size();
        i += 1;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_u64_little_endian() {
        let data = hex::decode("a00f000000000000ff").unwrap();
        let (value, rest) = FieldWidth::U64.read(&data).unwrap();
        assert_eq!(value, 4000);
        assert_eq!(rest, &[0xff]);
    }

    #[test]
    fn test_u128_field() {
        let data = (u128::MAX - 1).to_le_bytes();
        let (value, rest) = FieldWidth::U128.read(&data).unwrap();
        assert_eq!(value, u128::MAX - 1);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_read_short_input() {
        assert!(FieldWidth::U64.read(&[0u8; 7]).is_none());
    }

    #[test]
    fn test_total_size() {
        assert_eq!(total_size(&[]), 0);
        assert_eq!(
            total_size(&[FieldSpec::u64("amount"), FieldSpec::u128("amount_token")]),
            24
        );
    }
}
