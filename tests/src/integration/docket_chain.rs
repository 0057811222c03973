//! # Docket Chain Flows
//!
//! Dockets sealed with the canonical hash and then checked the way a
//! receiving validator would: structure, hash, continuity.

#[cfg(test)]
mod tests {
    use crate::fixtures::{clock, docket_validator, sealed_docket, NOW, REGISTER};
    use shared_types::{ChainTransactionType, ErrorCode, TransactionChainData};
    use vc_01_chain_validation::ChainValidator;

    #[test]
    fn test_genesis_then_successor_is_continuous() {
        let validator = docket_validator(clock());
        let docket0 = sealed_docket(&validator, 0, None, NOW - 2_000);
        let docket1 = sealed_docket(&validator, 1, Some(&docket0.docket_hash), NOW - 1_000);

        assert!(validator.validate_genesis_docket(&docket0).is_valid());
        assert!(validator.validate_docket_structure(&docket1).is_valid());
        assert!(validator
            .validate_docket_hash(&docket1, &docket1.docket_hash)
            .is_valid());

        let continuity = validator.validate_chain_continuity(&docket1, &docket0);
        assert!(continuity.is_valid(), "{:?}", continuity.errors);
    }

    #[test]
    fn test_tampered_previous_hash_breaks_continuity() {
        let validator = docket_validator(clock());
        let docket0 = sealed_docket(&validator, 0, None, NOW - 2_000);
        let mut docket1 = sealed_docket(&validator, 1, Some(&docket0.docket_hash), NOW - 1_000);
        docket1.previous_hash = Some("00".repeat(32));

        let continuity = validator.validate_chain_continuity(&docket1, &docket0);
        assert!(!continuity.is_valid());
        assert!(continuity.has_error(ErrorCode::PreviousHashMismatch));

        // The seal no longer matches the edited contents either.
        let hash = validator.validate_docket_hash(&docket1, &docket1.docket_hash);
        assert!(hash.has_error(ErrorCode::HashMismatch));
    }

    #[test]
    fn test_ten_docket_chain_validates_link_by_link() {
        let validator = docket_validator(clock());
        let mut chain = vec![sealed_docket(&validator, 0, None, NOW - 100_000)];
        for n in 1..10u64 {
            let previous_hash = chain[n as usize - 1].docket_hash.clone();
            chain.push(sealed_docket(
                &validator,
                n,
                Some(&previous_hash),
                NOW - 100_000 + n * 1_000,
            ));
        }

        for pair in chain.windows(2) {
            let result = validator.validate_chain_continuity(&pair[1], &pair[0]);
            assert!(result.is_valid(), "docket {}: {:?}", pair[1].docket_number, result.errors);
        }
    }

    #[test]
    fn test_skipped_number_and_foreign_register_are_co_reported() {
        let validator = docket_validator(clock());
        let docket0 = sealed_docket(&validator, 0, None, NOW - 2_000);
        let mut docket2 = sealed_docket(&validator, 2, Some(&docket0.docket_hash), NOW - 1_000);
        docket2.register_id = format!("{}-fork", REGISTER);

        let result = validator.validate_chain_continuity(&docket2, &docket0);
        assert!(result.has_error(ErrorCode::NonSequentialDocketNumber));
        assert!(result.has_error(ErrorCode::RegisterMismatch));
    }

    #[test]
    fn test_transaction_chain_from_genesis_to_action() {
        let chain = ChainValidator::new();
        let records = vec![
            TransactionChainData::new("tx-0", REGISTER, 1_000),
            TransactionChainData::new("tx-1", REGISTER, 2_000)
                .with_previous("tx-0")
                .with_blueprint("bp-1"),
            TransactionChainData::new("tx-2", REGISTER, 3_000)
                .with_previous("tx-1")
                .with_blueprint("bp-1")
                .with_action(0),
            TransactionChainData::new("tx-3", REGISTER, 4_000)
                .with_previous("tx-2")
                .with_blueprint("bp-1")
                .with_action(1),
        ];

        let types: Vec<_> = records
            .iter()
            .map(|r| chain.determine_transaction_type(r))
            .collect();
        assert_eq!(
            types,
            vec![
                ChainTransactionType::Genesis,
                ChainTransactionType::BlueprintPublication,
                ChainTransactionType::InstanceInitiation,
                ChainTransactionType::InstanceAction,
            ]
        );

        let result = chain.validate_chain_sequence(&records);
        assert!(result.is_valid(), "{:?}", result.errors);
    }

    #[test]
    fn test_action_zero_after_genesis_is_rejected() {
        let chain = ChainValidator::new();
        let genesis = TransactionChainData::new("tx-0", REGISTER, 1_000);
        let initiation = TransactionChainData::new("tx-1", REGISTER, 2_000)
            .with_previous("tx-0")
            .with_blueprint("bp-1")
            .with_action(0);

        let result = chain.validate_chain_link(&initiation, Some(&genesis));
        assert!(result.has_error(ErrorCode::InvalidActionSequence));
    }
}
