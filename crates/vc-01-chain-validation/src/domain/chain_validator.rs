//! Chain Validation Service - Pure Domain Logic
//!
//! Every variant of [`ChainTransactionType`] gets its linkage rule as a
//! match arm, so adding a variant forces every rule to be revisited.

use shared_types::{
    is_blank, is_blank_opt, ChainTransactionType, ErrorCode, TransactionChainData,
    ValidationError, ValidationResult,
};
use std::collections::HashMap;
use tracing::debug;

/// Stateless validator for the transaction chain of a register.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainValidator;

impl ChainValidator {
    pub fn new() -> Self {
        Self
    }

    /// Classify a transaction.
    ///
    /// An explicitly recorded type always wins. Otherwise the type is derived
    /// from which linkage fields are present.
    pub fn determine_transaction_type(&self, tx: &TransactionChainData) -> ChainTransactionType {
        if let Some(explicit) = tx.transaction_type {
            return explicit;
        }

        if tx.previous_id.is_none() {
            return ChainTransactionType::Genesis;
        }

        match (tx.blueprint_id.is_some(), tx.action_id) {
            (true, None) => ChainTransactionType::BlueprintPublication,
            (_, Some(0)) => ChainTransactionType::InstanceInitiation,
            (_, Some(_)) => ChainTransactionType::InstanceAction,
            (false, None) => ChainTransactionType::ControlAction,
        }
    }

    /// Validate that `tx` legally extends `previous`.
    ///
    /// `previous` is the record the caller resolved for `tx.previous_id`;
    /// `None` means the caller could not resolve it.
    pub fn validate_chain_link(
        &self,
        tx: &TransactionChainData,
        previous: Option<&TransactionChainData>,
    ) -> ValidationResult {
        let tx_type = self.determine_transaction_type(tx);
        let mut result = ValidationResult::valid();

        if tx_type == ChainTransactionType::Genesis {
            if let Some(previous_id) = &tx.previous_id {
                result.push(ValidationError::for_field(
                    ErrorCode::GenesisViolation,
                    "PreviousId",
                    format!(
                        "Genesis transaction {} must not reference a previous transaction (found {})",
                        tx.transaction_id, previous_id
                    ),
                ));
            }
            return result;
        }

        let Some(previous_id) = tx.previous_id.as_deref().filter(|id| !is_blank(id)) else {
            result.push(ValidationError::for_field(
                ErrorCode::InvalidPreviousId,
                "PreviousId",
                format!(
                    "{} transaction {} must reference a previous transaction",
                    tx_type, tx.transaction_id
                ),
            ));
            return result;
        };

        let previous = match previous {
            Some(previous) if previous.transaction_id == previous_id => previous,
            Some(previous) => {
                result.push(ValidationError::for_field(
                    ErrorCode::InvalidPreviousId,
                    "PreviousId",
                    format!(
                        "Transaction {} references {} but the supplied predecessor is {}",
                        tx.transaction_id, previous_id, previous.transaction_id
                    ),
                ));
                return result;
            }
            None => {
                result.push(ValidationError::for_field(
                    ErrorCode::InvalidPreviousId,
                    "PreviousId",
                    format!(
                        "Previous transaction {} of {} could not be resolved",
                        previous_id, tx.transaction_id
                    ),
                ));
                return result;
            }
        };

        if tx.register_id != previous.register_id {
            result.push(ValidationError::for_field(
                ErrorCode::BrokenChain,
                "RegisterId",
                format!(
                    "Register mismatch: expected {}, got {}",
                    previous.register_id, tx.register_id
                ),
            ));
        }

        if tx.timestamp < previous.timestamp {
            result.push(ValidationError::for_field(
                ErrorCode::InvalidTimestamp,
                "Timestamp",
                format!(
                    "Timestamp {} is earlier than previous transaction timestamp {}",
                    tx.timestamp, previous.timestamp
                ),
            ));
        }

        match tx_type {
            ChainTransactionType::BlueprintPublication => {
                result.merge(self.validate_blueprint_chain(tx, Some(previous)));
            }
            ChainTransactionType::InstanceInitiation | ChainTransactionType::InstanceAction => {
                result.merge(self.validate_action_chain(tx, Some(previous)));
            }
            ChainTransactionType::Genesis | ChainTransactionType::ControlAction => {}
        }

        debug!(
            transaction_id = %tx.transaction_id,
            tx_type = %tx_type,
            errors = result.errors.len(),
            "Chain link validated"
        );
        result
    }

    /// Validate a blueprint publication against its predecessor.
    pub fn validate_blueprint_chain(
        &self,
        tx: &TransactionChainData,
        previous: Option<&TransactionChainData>,
    ) -> ValidationResult {
        let mut result = ValidationResult::valid();

        if is_blank_opt(tx.blueprint_id.as_deref()) {
            result.push(ValidationError::for_field(
                ErrorCode::MissingBlueprintId,
                "BlueprintId",
                format!(
                    "Blueprint publication {} must carry a blueprint id",
                    tx.transaction_id
                ),
            ));
        }

        let Some(previous) = previous else {
            return result;
        };

        match self.determine_transaction_type(previous) {
            ChainTransactionType::BlueprintPublication => {
                if let (Some(current), Some(prior)) = (&tx.blueprint_id, &previous.blueprint_id) {
                    if current != prior {
                        result.push(ValidationError::for_field(
                            ErrorCode::InvalidBlueprintVersion,
                            "BlueprintId",
                            format!(
                                "New blueprint version must keep blueprint id: expected {}, got {}",
                                prior, current
                            ),
                        ));
                    }
                }
            }
            ChainTransactionType::InstanceInitiation | ChainTransactionType::InstanceAction => {
                result.push(ValidationError::for_field(
                    ErrorCode::BrokenChain,
                    "PreviousId",
                    format!(
                        "Blueprint publication {} cannot follow action transaction {}",
                        tx.transaction_id, previous.transaction_id
                    ),
                ));
            }
            ChainTransactionType::Genesis | ChainTransactionType::ControlAction => {}
        }

        result
    }

    /// Validate an instance initiation or action against its predecessor.
    pub fn validate_action_chain(
        &self,
        tx: &TransactionChainData,
        previous: Option<&TransactionChainData>,
    ) -> ValidationResult {
        let mut result = ValidationResult::valid();
        let tx_type = self.determine_transaction_type(tx);
        if !tx_type.is_action() {
            return result;
        }

        let Some(previous) = previous else {
            result.push(ValidationError::for_field(
                ErrorCode::InvalidActionSequence,
                "PreviousId",
                format!("Action transaction {} has no predecessor", tx.transaction_id),
            ));
            return result;
        };
        let previous_type = self.determine_transaction_type(previous);

        match tx_type {
            ChainTransactionType::InstanceInitiation => {
                if previous_type != ChainTransactionType::BlueprintPublication {
                    result.push(ValidationError::for_field(
                        ErrorCode::InvalidActionSequence,
                        "PreviousId",
                        format!(
                            "Action 0 must reference a blueprint publication, found {}",
                            previous_type
                        ),
                    ));
                } else if tx.blueprint_id != previous.blueprint_id {
                    result.push(ValidationError::for_field(
                        ErrorCode::BrokenChain,
                        "BlueprintId",
                        format!(
                            "Blueprint mismatch: expected {}, got {}",
                            previous.blueprint_id.as_deref().unwrap_or("<none>"),
                            tx.blueprint_id.as_deref().unwrap_or("<none>")
                        ),
                    ));
                }
            }
            ChainTransactionType::InstanceAction => {
                if !previous_type.is_action() {
                    result.push(ValidationError::for_field(
                        ErrorCode::InvalidActionSequence,
                        "PreviousId",
                        format!(
                            "Action {} must reference a prior action, found {}",
                            tx.action_id.unwrap_or_default(),
                            previous_type
                        ),
                    ));
                }
            }
            _ => {}
        }

        result
    }

    /// Compare a claimed predecessor data hash with the actual one.
    ///
    /// No claim (or a blank one) succeeds trivially; otherwise the digests
    /// must match case-insensitively and an absent actual hash is a mismatch.
    pub fn validate_previous_data(
        &self,
        claimed_hash: Option<&str>,
        actual_hash: Option<&str>,
    ) -> ValidationResult {
        let Some(claimed) = claimed_hash.filter(|claimed| !is_blank(claimed)) else {
            return ValidationResult::valid();
        };

        match actual_hash {
            Some(actual) if claimed.eq_ignore_ascii_case(actual) => ValidationResult::valid(),
            Some(actual) => ValidationResult::invalid(ValidationError::for_field(
                ErrorCode::PreviousDataMismatch,
                "DataHash",
                format!("Previous data hash mismatch: claimed {}, actual {}", claimed, actual),
            )),
            None => ValidationResult::invalid(ValidationError::for_field(
                ErrorCode::PreviousDataMismatch,
                "DataHash",
                format!("Previous data hash {} claimed but no data hash exists", claimed),
            )),
        }
    }

    /// Validate every link of a batch of chain records.
    ///
    /// Predecessors are resolved by id within the batch, so independent
    /// blueprint lineages sharing one root are validated correctly. Errors
    /// are tagged with `Tx[i]`.
    pub fn validate_chain_sequence(&self, records: &[TransactionChainData]) -> ValidationResult {
        let by_id: HashMap<&str, &TransactionChainData> = records
            .iter()
            .map(|record| (record.transaction_id.as_str(), record))
            .collect();

        let mut result = ValidationResult::valid();
        for (index, record) in records.iter().enumerate() {
            let previous = record
                .previous_id
                .as_deref()
                .and_then(|id| by_id.get(id).copied());
            let link = self.validate_chain_link(record, previous);
            let context = format!("Tx[{}]", index);
            for error in link.errors {
                result.push(error.with_context(&context));
            }
        }

        result.insert_metadata("transactions_checked", records.len());
        result
    }
}
