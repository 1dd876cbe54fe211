//! Declarative table of account layouts.

use amoebit_interface::{total_size, FieldSpec};
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountKind {
    /// Per-user purchased amount, also used for the total supply account
    Index,
    /// Release timestamp in milliseconds
    Time,
    BuyAmount,
    /// Index layout with a 128-bit counter
    WideIndex,
}

const INDEX_FIELDS: &[FieldSpec] = &[FieldSpec::u64("amount")];
const TIME_FIELDS: &[FieldSpec] = &[FieldSpec::u64("time_release")];
const BUY_AMOUNT_FIELDS: &[FieldSpec] = &[FieldSpec::u64("amount"), FieldSpec::u64("amount_sol")];
const WIDE_INDEX_FIELDS: &[FieldSpec] = &[FieldSpec::u128("amount_token")];

impl AccountKind {
    pub const ALL: [AccountKind; 4] = [
        AccountKind::Index,
        AccountKind::Time,
        AccountKind::BuyAmount,
        AccountKind::WideIndex,
    ];

    /// Fields in byte order
    pub const fn fields(self) -> &'static [FieldSpec] {
        match self {
            AccountKind::Index => INDEX_FIELDS,
            AccountKind::Time => TIME_FIELDS,
            AccountKind::BuyAmount => BUY_AMOUNT_FIELDS,
            AccountKind::WideIndex => WIDE_INDEX_FIELDS,
        }
    }

    /// Account size in bytes: the sum of the field widths
    pub const fn len(self) -> usize {
        total_size(self.fields())
    }

    pub const fn name(self) -> &'static str {
        match self {
            AccountKind::Index => "IndexAccount",
            AccountKind::Time => "TimeAccount",
            AccountKind::BuyAmount => "BuyAmountRecord",
            AccountKind::WideIndex => "WideIndexAccount",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_sizes() {
        assert_eq!(AccountKind::Index.len(), 8);
        assert_eq!(AccountKind::Time.len(), 8);
        assert_eq!(AccountKind::BuyAmount.len(), 16);
        assert_eq!(AccountKind::WideIndex.len(), 16);
    }

    #[test]
    fn test_buy_amount_field_order() {
        let names: Vec<_> = AccountKind::BuyAmount
            .fields()
            .iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["amount", "amount_sol"]);
    }
}
