use amoebit_state::{
    decode_account, encode_account, AccountKind, AccountRecord, BuyAmountRecord, IndexAccount,
    TimeAccount, WideIndexAccount,
};
use proptest::prelude::*;

fn any_record() -> impl Strategy<Value = AccountRecord> {
    prop_oneof![
        any::<u64>().prop_map(|amount| IndexAccount { amount }.into()),
        any::<u64>().prop_map(|time_release| TimeAccount { time_release }.into()),
        (any::<u64>(), any::<u64>())
            .prop_map(|(amount, amount_sol)| BuyAmountRecord { amount, amount_sol }.into()),
        any::<u128>().prop_map(|amount_token| WideIndexAccount { amount_token }.into()),
    ]
}

proptest! {
    #[test]
    fn decode_inverts_encode(record in any_record()) {
        let data = encode_account(&record);
        prop_assert_eq!(data.len(), record.kind().len());
        prop_assert_eq!(decode_account(record.kind(), &data).unwrap(), record);
    }

    #[test]
    fn off_by_one_lengths_are_rejected(record in any_record(), grow in any::<bool>()) {
        let mut data = encode_account(&record);
        if grow {
            data.push(0);
        } else {
            data.pop();
        }
        prop_assert!(decode_account(record.kind(), &data).is_err());
    }
}

#[test]
fn index_layout_is_little_endian_u64() {
    let data = [0xA0, 0x0F, 0, 0, 0, 0, 0, 0];
    assert_eq!(
        decode_account(AccountKind::Index, &data).unwrap(),
        AccountRecord::Index(IndexAccount { amount: 4000 })
    );
}
