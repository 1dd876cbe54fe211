use amoebit_interface::{encode_instruction, AmoebitInstruction};
use proptest::prelude::*;

fn typed_instruction() -> impl Strategy<Value = AmoebitInstruction> {
    prop_oneof![
        (any::<u64>(), any::<u64>()).prop_map(|(sol, token)| AmoebitInstruction::BuyToken {
            amount_sol_lamports: sol,
            amount_token_lamports: token,
        }),
        any::<u64>().prop_map(|t| AmoebitInstruction::SetReleaseTime { timestamp_millis: t }),
        any::<u64>().prop_map(|a| AmoebitInstruction::InitializeTotal { total_amount: a }),
        Just(AmoebitInstruction::ClaimAll),
        any::<u64>().prop_map(|a| AmoebitInstruction::Claim { amount: a }),
    ]
}

proptest! {
    #[test]
    fn packed_length_is_fixed_per_variant(ix in typed_instruction()) {
        let data = ix.pack();
        prop_assert_eq!(data.len(), ix.layout().unwrap().packed_len());
        prop_assert_eq!(data.len(), 1 + 8 * ix.args().len());
        prop_assert_eq!(data[0], ix.opcode());
    }

    #[test]
    fn unpack_recovers_packed_instruction(ix in typed_instruction()) {
        prop_assert_eq!(AmoebitInstruction::unpack(&ix.pack()).unwrap(), ix);
    }

    #[test]
    fn values_above_u64_are_rejected(excess in 1u128..=u64::MAX as u128) {
        let too_wide = u64::MAX as u128 + excess;
        prop_assert!(encode_instruction(2, &[too_wide]).is_err());
    }
}
