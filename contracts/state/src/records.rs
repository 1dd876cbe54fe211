//! Account records and the kind-directed codec.

use crate::{error::AccountDataError, kind::AccountKind, layout::FixedLayout};
use borsh::{BorshDeserialize, BorshSerialize};

macro_rules! account_record {
  ($(#[$meta:meta])* $name:ident => $kind:ident, $variant:ident { $($field:ident: $ty:ty),+ $(,)? }) => {
      $(#[$meta])*
      #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, BorshSerialize, BorshDeserialize)]
      pub struct $name {
          $(pub $field: $ty,)+
      }

      impl FixedLayout for $name {
          const KIND: AccountKind = AccountKind::$kind;

          fn to_bytes(&self) -> Vec<u8> {
              let mut data = Vec::with_capacity(Self::LEN);
              $(data.extend_from_slice(&self.$field.to_le_bytes());)+
              data
          }
      }

      impl From<$name> for AccountRecord {
          fn from(record: $name) -> Self {
              AccountRecord::$variant(record)
          }
      }
  };
}

account_record!(
    /// Tokens bought by a user, or the remaining total supply
    IndexAccount => Index, Index { amount: u64 }
);

account_record!(
    /// Unix time in milliseconds after which buying stops
    TimeAccount => Time, Time { time_release: u64 }
);

account_record!(
    /// Token and SOL amounts of one purchase
    BuyAmountRecord => BuyAmount, BuyAmount { amount: u64, amount_sol: u64 }
);

account_record!(
    WideIndexAccount => WideIndex, WideIndex { amount_token: u128 }
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountRecord {
    Index(IndexAccount),
    Time(TimeAccount),
    BuyAmount(BuyAmountRecord),
    WideIndex(WideIndexAccount),
}

impl AccountRecord {
    pub fn kind(&self) -> AccountKind {
        match self {
            AccountRecord::Index(_) => AccountKind::Index,
            AccountRecord::Time(_) => AccountKind::Time,
            AccountRecord::BuyAmount(_) => AccountKind::BuyAmount,
            AccountRecord::WideIndex(_) => AccountKind::WideIndex,
        }
    }

    /// Field names paired with their values, in layout order.
    pub fn fields(&self) -> Vec<(&'static str, u128)> {
        let data = encode_account(self);
        let mut rest = data.as_slice();
        let mut fields = Vec::new();
        for spec in self.kind().fields() {
            if let Some((value, tail)) = spec.width.read(rest) {
                fields.push((spec.name, value));
                rest = tail;
            }
        }
        fields
    }
}

pub fn encode_account(record: &AccountRecord) -> Vec<u8> {
    match record {
        AccountRecord::Index(r) => r.to_bytes(),
        AccountRecord::Time(r) => r.to_bytes(),
        AccountRecord::BuyAmount(r) => r.to_bytes(),
        AccountRecord::WideIndex(r) => r.to_bytes(),
    }
}

pub fn decode_account(kind: AccountKind, data: &[u8]) -> Result<AccountRecord, AccountDataError> {
    Ok(match kind {
        AccountKind::Index => IndexAccount::from_bytes(data)?.into(),
        AccountKind::Time => TimeAccount::from_bytes(data)?.into(),
        AccountKind::BuyAmount => BuyAmountRecord::from_bytes(data)?.into(),
        AccountKind::WideIndex => WideIndexAccount::from_bytes(data)?.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rejects_wrong_length() {
        for len in [0, 7, 9, 16] {
            let err = decode_account(AccountKind::Index, &vec![0u8; len]).unwrap_err();
            match err {
                AccountDataError::MalformedAccountData {
                    kind,
                    expected,
                    actual,
                } => {
                    assert_eq!(kind, AccountKind::Index);
                    assert_eq!(expected, 8);
                    assert_eq!(actual, len);
                },
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_time_account_bytes() {
        let record = TimeAccount {
            time_release: 1651909241168,
        };
        assert_eq!(hex::encode(record.to_bytes()), "50a9769d80010000");
        assert_eq!(
            decode_account(AccountKind::Time, &record.to_bytes()).unwrap(),
            AccountRecord::Time(record)
        );
    }

    #[test]
    fn test_to_bytes_matches_borsh() {
        let buy = BuyAmountRecord {
            amount: 2_500_000_000,
            amount_sol: 300_000_000,
        };
        assert_eq!(buy.to_bytes(), borsh::to_vec(&buy).unwrap());

        let wide = WideIndexAccount {
            amount_token: u64::MAX as u128 + 5,
        };
        assert_eq!(wide.to_bytes(), borsh::to_vec(&wide).unwrap());
    }

    #[test]
    fn test_encoded_length_matches_table() {
        let records: [AccountRecord; 4] = [
            IndexAccount::default().into(),
            TimeAccount::default().into(),
            BuyAmountRecord::default().into(),
            WideIndexAccount::default().into(),
        ];
        for record in records {
            assert_eq!(encode_account(&record).len(), record.kind().len());
            assert_eq!(record.fields().len(), record.kind().fields().len());
        }
    }

    #[test]
    fn test_values_beyond_f64_precision_survive() {
        // 2^53 + 1 is not representable as f64
        let amount = (1u64 << 53) + 1;
        let data = IndexAccount { amount }.to_bytes();
        assert_eq!(
            decode_account(AccountKind::Index, &data).unwrap(),
            AccountRecord::Index(IndexAccount { amount })
        );
    }

    #[test]
    fn test_fields_in_layout_order() {
        let record = AccountRecord::BuyAmount(BuyAmountRecord {
            amount: 7,
            amount_sol: 9,
        });
        assert_eq!(record.fields(), vec![("amount", 7), ("amount_sol", 9)]);
    }
}
