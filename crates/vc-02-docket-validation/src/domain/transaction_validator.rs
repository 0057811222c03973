//! Transaction structure and payload checks run before pool admission.

use super::config::DocketValidationConfig;
use shared_crypto::{digests_match, HashProvider};
use shared_types::{
    is_blank, require_non_blank, ErrorCode, TimeSource, Transaction, TransactionChainData,
    ValidationError, ValidationResult,
};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct TransactionValidator {
    config: DocketValidationConfig,
    hash_provider: Arc<dyn HashProvider>,
    time_source: Arc<dyn TimeSource>,
}

impl TransactionValidator {
    pub fn new(
        config: DocketValidationConfig,
        hash_provider: Arc<dyn HashProvider>,
        time_source: Arc<dyn TimeSource>,
    ) -> Self {
        Self {
            config,
            hash_provider,
            time_source,
        }
    }

    /// Required fields, signatures, and timestamp sanity. Co-reported.
    pub fn validate_transaction_structure(&self, tx: &Transaction) -> ValidationResult {
        let mut result = ValidationResult::valid();

        require_non_blank(&mut result, "TransactionId", &tx.transaction_id);
        require_non_blank(&mut result, "RegisterId", &tx.register_id);
        require_non_blank(&mut result, "BlueprintId", &tx.blueprint_id);
        require_non_blank(&mut result, "PayloadHash", &tx.payload_hash);

        if tx.payload.is_empty() {
            result.push(ValidationError::for_field(
                ErrorCode::RequiredFieldMissing,
                "Payload",
                "Payload is required",
            ));
        }

        if tx.signatures.is_empty() {
            result.push(ValidationError::for_field(
                ErrorCode::MissingSignature,
                "Signatures",
                "At least one signature is required",
            ));
        }
        for (i, sig) in tx.signatures.iter().enumerate() {
            if is_blank(&sig.public_key) || is_blank(&sig.signature) {
                result.push(ValidationError::for_field(
                    ErrorCode::MissingSignature,
                    format!("Signatures[{}]", i),
                    format!("Signature {} must carry a public key and a signature value", i),
                ));
            }
        }

        let now = self.time_source.now();
        if tx.created_at > now.saturating_add(self.config.max_clock_skew_ms) {
            result.push(ValidationError::for_field(
                ErrorCode::FutureTimestamp,
                "CreatedAt",
                format!(
                    "CreatedAt {} is more than {} ms in the future (now: {})",
                    tx.created_at, self.config.max_clock_skew_ms, now
                ),
            ));
        }

        if let Some(expires_at) = tx.expires_at {
            if expires_at <= tx.created_at {
                result.push(ValidationError::for_field(
                    ErrorCode::InvalidExpiry,
                    "ExpiresAt",
                    format!(
                        "ExpiresAt {} must be after CreatedAt {}",
                        expires_at, tx.created_at
                    ),
                ));
            }
        }

        if !result.is_valid() {
            debug!(
                tx_id = %tx.transaction_id,
                errors = result.errors.len(),
                "Transaction failed structural validation"
            );
        }
        result
    }

    /// Recompute the payload digest and compare it with the claimed hash.
    pub fn validate_payload_hash(&self, tx: &Transaction) -> ValidationResult {
        let computed = match self
            .hash_provider
            .compute_hex(&tx.payload, self.config.hash_algorithm)
        {
            Ok(computed) => computed.to_lowercase(),
            Err(e) => {
                warn!(tx_id = %tx.transaction_id, error = %e, "Payload hash computation failed");
                return ValidationResult::invalid(ValidationError::for_field(
                    ErrorCode::HashComputationFailed,
                    "PayloadHash",
                    format!("Failed to compute payload hash: {}", e),
                ));
            }
        };

        if digests_match(&computed, &tx.payload_hash) {
            ValidationResult::valid().with_metadata("computed_hash", computed)
        } else {
            ValidationResult::invalid(ValidationError::for_field(
                ErrorCode::PayloadHashMismatch,
                "PayloadHash",
                format!(
                    "Payload hash mismatch: claimed {}, computed {}",
                    tx.payload_hash, computed
                ),
            ))
            .with_metadata("computed_hash", computed)
        }
    }

    /// Structural checks on the chain projection of a transaction.
    pub fn validate_chain_data(&self, chain_data: &TransactionChainData) -> ValidationResult {
        let mut result = ValidationResult::valid();
        require_non_blank(&mut result, "TransactionId", &chain_data.transaction_id);
        require_non_blank(&mut result, "RegisterId", &chain_data.register_id);

        if chain_data.previous_id.as_deref().is_some_and(is_blank) {
            result.push(ValidationError::for_field(
                ErrorCode::InvalidPreviousId,
                "PreviousId",
                "PreviousId, when present, must not be blank",
            ));
        }
        if chain_data.blueprint_id.as_deref().is_some_and(is_blank) {
            result.push(ValidationError::for_field(
                ErrorCode::MissingBlueprintId,
                "BlueprintId",
                "BlueprintId, when present, must not be blank",
            ));
        }
        result
    }
}
