//! Shared fixtures.
//!
//! Every builder produces a record that passes validation at [`NOW`];
//! tests mutate single fields to provoke one failure at a time.

use shared_crypto::{sha256_hex, DefaultHashProvider};
use shared_types::{
    ConsensusVote, DocketData, ManualTimeSource, Timestamp, Transaction, TransactionPriority,
    TransactionSignature, VoteDecision,
};
use std::sync::{Arc, Once};
use validator_telemetry::{init_telemetry, TelemetryConfig};
use vc_02_docket_validation::{DocketValidationConfig, DocketValidator, TransactionValidator};

/// Fixed "now" shared by all fixtures (2023-11-14T22:13:20Z).
pub const NOW: Timestamp = 1_700_000_000_000;

pub const REGISTER: &str = "register-alpha";

static LOGGING: Once = Once::new();

/// Installs the quiet test subscriber once per test binary.
pub fn init_test_logging() {
    LOGGING.call_once(|| {
        let _ = init_telemetry(&TelemetryConfig::for_testing());
    });
}

pub fn clock() -> Arc<ManualTimeSource> {
    Arc::new(ManualTimeSource::new(NOW))
}

pub fn docket_validator(clock: Arc<ManualTimeSource>) -> DocketValidator {
    DocketValidator::new(
        DocketValidationConfig::default(),
        Arc::new(DefaultHashProvider),
        clock,
    )
}

pub fn transaction_validator(clock: Arc<ManualTimeSource>) -> TransactionValidator {
    TransactionValidator::new(
        DocketValidationConfig::default(),
        Arc::new(DefaultHashProvider),
        clock,
    )
}

/// Builds a docket whose `docket_hash` is the canonical hash of its fields.
pub fn sealed_docket(
    validator: &DocketValidator,
    number: u64,
    previous_hash: Option<&str>,
    created_at: Timestamp,
) -> DocketData {
    let merkle_root = format!("merkle-{}", number);
    let docket_hash = validator
        .compute_docket_hash(REGISTER, number, previous_hash, &merkle_root, created_at)
        .expect("sha-256 never fails");
    DocketData {
        docket_id: format!("docket-{}", number),
        register_id: REGISTER.to_string(),
        docket_number: number,
        previous_hash: previous_hash.map(str::to_string),
        docket_hash,
        created_at,
        merkle_root,
        proposer_validator_id: "validator-0".to_string(),
        transaction_count: number,
    }
}

pub fn vote(validator_id: &str, docket_hash: &str, decision: VoteDecision) -> ConsensusVote {
    let rejection_reason = (decision == VoteDecision::Reject).then(|| "bad merkle root".to_string());
    ConsensusVote {
        validator_id: validator_id.to_string(),
        docket_hash: docket_hash.to_string(),
        decision,
        voted_at: NOW,
        signature: format!("sig-{}", validator_id),
        rejection_reason,
    }
}

/// Ten votes: 7 approve, 2 reject, 1 abstain.
pub fn seven_two_one(docket_hash: &str) -> Vec<ConsensusVote> {
    (0..10)
        .map(|i| {
            let decision = match i {
                0..=6 => VoteDecision::Approve,
                7 | 8 => VoteDecision::Reject,
                _ => VoteDecision::Abstain,
            };
            vote(&format!("validator-{}", i), docket_hash, decision)
        })
        .collect()
}

/// A well-formed transaction whose payload hash matches its payload.
pub fn transaction(id: &str, priority: TransactionPriority) -> Transaction {
    let payload = format!("payload of {}", id).into_bytes();
    Transaction {
        transaction_id: id.to_string(),
        register_id: REGISTER.to_string(),
        blueprint_id: "blueprint-1".to_string(),
        action_id: 1,
        payload_hash: sha256_hex(&payload),
        payload,
        signatures: vec![TransactionSignature {
            public_key: "pk-1".to_string(),
            signature: "sig-1".to_string(),
        }],
        created_at: NOW,
        expires_at: None,
        priority,
        added_to_pool_at: None,
    }
}
