//! Docket Validation Service
//!
//! Structural, hash and continuity rules for dockets. Every check is
//! independent: one call reports all violated conditions together.

use super::config::DocketValidationConfig;
use shared_crypto::{digests_match, HashError, HashProvider};
use shared_types::{
    is_blank, require_non_blank, DocketData, ErrorCode, TimeSource, Timestamp, ValidationError,
    ValidationResult,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Sentinel hashed in place of the predecessor hash of a genesis docket.
pub const GENESIS_SENTINEL: &str = "GENESIS";

/// Context marker prefixed to structural errors found by genesis validation.
pub const GENESIS_CONTEXT: &str = "Genesis";

/// Docket validator.
///
/// Holds only immutable collaborators; safe to share across tasks.
pub struct DocketValidator {
    config: DocketValidationConfig,
    hash_provider: Arc<dyn HashProvider>,
    time_source: Arc<dyn TimeSource>,
}

impl DocketValidator {
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

    pub fn config(&self) -> &DocketValidationConfig {
        &self.config
    }

    /// Field presence and shape checks, all co-reported.
    pub fn validate_docket_structure(&self, docket: &DocketData) -> ValidationResult {
        let mut result = ValidationResult::valid();

        require_non_blank(&mut result, "DocketId", &docket.docket_id);
        require_non_blank(&mut result, "RegisterId", &docket.register_id);
        require_non_blank(&mut result, "DocketHash", &docket.docket_hash);
        require_non_blank(&mut result, "MerkleRoot", &docket.merkle_root);
        require_non_blank(
            &mut result,
            "ProposerValidatorId",
            &docket.proposer_validator_id,
        );

        let now = self.time_source.now();
        if docket.created_at > now.saturating_add(self.config.max_clock_skew_ms) {
            result.push(ValidationError::for_field(
                ErrorCode::FutureTimestamp,
                "CreatedAt",
                format!(
                    "CreatedAt {} is more than {} ms in the future (now: {})",
                    docket.created_at, self.config.max_clock_skew_ms, now
                ),
            ));
        }

        match (docket.is_genesis(), docket.previous_hash.as_deref()) {
            (true, Some(previous)) => result.push(ValidationError::for_field(
                ErrorCode::GenesisPreviousHashPresent,
                "PreviousHash",
                format!("Genesis docket must not have a previous hash (found {})", previous),
            )),
            (false, None) => result.push(ValidationError::for_field(
                ErrorCode::MissingPreviousHash,
                "PreviousHash",
                format!(
                    "Docket {} must reference the previous docket hash",
                    docket.docket_number
                ),
            )),
            (false, Some(previous)) if is_blank(previous) => {
                result.push(ValidationError::for_field(
                    ErrorCode::MissingPreviousHash,
                    "PreviousHash",
                    format!(
                        "Docket {} has a blank previous hash",
                        docket.docket_number
                    ),
                ))
            }
            _ => {}
        }

        result
    }

    /// Recompute the docket hash and compare it with `expected_hash`.
    pub fn validate_docket_hash(&self, docket: &DocketData, expected_hash: &str) -> ValidationResult {
        if is_blank(expected_hash) {
            return ValidationResult::invalid(ValidationError::for_field(
                ErrorCode::MissingExpectedHash,
                "ExpectedHash",
                "Expected docket hash is required",
            ));
        }

        let computed = match self.compute_docket_hash(
            &docket.register_id,
            docket.docket_number,
            docket.previous_hash.as_deref(),
            &docket.merkle_root,
            docket.created_at,
        ) {
            Ok(computed) => computed,
            Err(e) => {
                warn!(
                    docket_id = %docket.docket_id,
                    error = %e,
                    "Docket hash computation failed"
                );
                return ValidationResult::invalid(ValidationError::for_field(
                    ErrorCode::HashComputationFailed,
                    "DocketHash",
                    format!("Failed to compute docket hash: {}", e),
                ));
            }
        };

        if digests_match(&computed, expected_hash) {
            debug!(docket_id = %docket.docket_id, "Docket hash verified");
            ValidationResult::valid().with_metadata("computed_hash", computed)
        } else {
            ValidationResult::invalid(ValidationError::for_field(
                ErrorCode::HashMismatch,
                "DocketHash",
                format!(
                    "Docket hash mismatch: expected {}, computed {}",
                    expected_hash, computed
                ),
            ))
            .with_metadata("computed_hash", computed)
        }
    }

    /// Validate that `current` directly follows `previous`.
    pub fn validate_chain_continuity(
        &self,
        current: &DocketData,
        previous: &DocketData,
    ) -> ValidationResult {
        let mut result = ValidationResult::valid();

        let expected_number = previous.docket_number.checked_add(1);
        if expected_number != Some(current.docket_number) {
            result.push(ValidationError::for_field(
                ErrorCode::NonSequentialDocketNumber,
                "DocketNumber",
                format!(
                    "Non-sequential docket number: expected {}, got {}",
                    previous.docket_number as u128 + 1,
                    current.docket_number
                ),
            ));
        }

        if current.register_id != previous.register_id {
            result.push(ValidationError::for_field(
                ErrorCode::RegisterMismatch,
                "RegisterId",
                format!(
                    "Register mismatch: expected {}, got {}",
                    previous.register_id, current.register_id
                ),
            ));
        }

        if current.previous_hash.as_deref() != Some(previous.docket_hash.as_str()) {
            result.push(ValidationError::for_field(
                ErrorCode::PreviousHashMismatch,
                "PreviousHash",
                format!(
                    "Previous hash mismatch: expected {}, got {}",
                    previous.docket_hash,
                    current.previous_hash.as_deref().unwrap_or("<none>")
                ),
            ));
        }

        if current.created_at < previous.created_at {
            result.push(ValidationError::for_field(
                ErrorCode::TimestampRegression,
                "CreatedAt",
                format!(
                    "CreatedAt {} is earlier than previous docket {}",
                    current.created_at, previous.created_at
                ),
            ));
        }

        debug!(
            register_id = %current.register_id,
            docket_number = current.docket_number,
            errors = result.errors.len(),
            "Docket continuity validated"
        );
        result
    }

    /// Structural validation plus the genesis-only rules.
    ///
    /// Structural errors are re-labelled with the `Genesis` context marker.
    pub fn validate_genesis_docket(&self, docket: &DocketData) -> ValidationResult {
        let structure = self.validate_docket_structure(docket);
        let mut result = ValidationResult::valid();
        for error in structure.errors {
            result.push(error.with_context(GENESIS_CONTEXT));
        }

        if docket.docket_number != 0 {
            result.push(ValidationError::for_field(
                ErrorCode::InvalidGenesisNumber,
                "DocketNumber",
                format!(
                    "Genesis docket must have number 0, got {}",
                    docket.docket_number
                ),
            ));
        }

        if docket.previous_hash.is_some() && !result.has_error(ErrorCode::GenesisPreviousHashPresent)
        {
            result.push(ValidationError::for_field(
                ErrorCode::GenesisPreviousHashPresent,
                "PreviousHash",
                "Genesis docket must not have a previous hash",
            ));
        }

        result
    }

    /// Canonical docket hash as a lower-case hex digest.
    ///
    /// The canonical form is
    /// `register_id|docket_number|previous_hash_or_GENESIS|merkle_root|created_at`.
    pub fn compute_docket_hash(
        &self,
        register_id: &str,
        docket_number: u64,
        previous_hash: Option<&str>,
        merkle_root: &str,
        created_at: Timestamp,
    ) -> Result<String, HashError> {
        let canonical = canonical_docket_bytes(
            register_id,
            docket_number,
            previous_hash,
            merkle_root,
            created_at,
        );
        self.hash_provider
            .compute_hex(&canonical, self.config.hash_algorithm)
            .map(|digest| digest.to_lowercase())
    }
}

/// Canonical byte representation fed to the hash provider.
pub fn canonical_docket_bytes(
    register_id: &str,
    docket_number: u64,
    previous_hash: Option<&str>,
    merkle_root: &str,
    created_at: Timestamp,
) -> Vec<u8> {
    format!(
        "{}|{}|{}|{}|{}",
        register_id,
        docket_number,
        previous_hash.unwrap_or(GENESIS_SENTINEL),
        merkle_root,
        created_at
    )
    .into_bytes()
}
