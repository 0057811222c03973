//! # Validation Result Shape
//!
//! Every validation entry point returns a [`ValidationResult`]: a list of
//! typed [`ValidationError`]s plus optional metadata. Business-rule
//! violations never surface as `Err`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Error taxonomy bucket of an [`ErrorCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Missing, blank or malformed required field.
    Structural,
    /// Broken linkage, sequence gap, hash mismatch, timestamp regression.
    ChainIntegrity,
    /// Invalid numeric precondition or quorum not met.
    Quorum,
    /// Whole-collection problems (empty, duplicates).
    Collection,
    /// The validator could not reach a definitive answer.
    Infrastructure,
}

/// Machine-readable code of a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Structural
    RequiredFieldMissing,
    FutureTimestamp,
    InvalidExpiry,
    MissingPreviousHash,
    GenesisPreviousHashPresent,
    InvalidGenesisNumber,
    MissingExpectedHash,
    MissingSignature,
    InvalidDecision,
    MissingRejectionReason,
    MissingBlueprintId,

    // Chain integrity
    GenesisViolation,
    InvalidPreviousId,
    BrokenChain,
    InvalidTimestamp,
    InvalidBlueprintVersion,
    InvalidActionSequence,
    PreviousDataMismatch,
    HashMismatch,
    PayloadHashMismatch,
    NonSequentialDocketNumber,
    RegisterMismatch,
    PreviousHashMismatch,
    TimestampRegression,
    DocketHashMismatch,

    // Quorum
    InvalidApprovalCount,
    InvalidTotalValidators,
    InvalidThreshold,
    ApprovalsExceedTotal,
    QuorumNotMet,
    ConsensusNotAchieved,

    // Collection
    EmptyVoteCollection,
    DuplicateValidator,

    // Infrastructure
    HashComputationFailed,
}

impl ErrorCode {
    /// Taxonomy bucket of this code.
    pub fn category(&self) -> ErrorCategory {
        use ErrorCode::*;
        match self {
            RequiredFieldMissing
            | FutureTimestamp
            | InvalidExpiry
            | MissingPreviousHash
            | GenesisPreviousHashPresent
            | InvalidGenesisNumber
            | MissingExpectedHash
            | MissingSignature
            | InvalidDecision
            | MissingRejectionReason
            | MissingBlueprintId => ErrorCategory::Structural,

            GenesisViolation
            | InvalidPreviousId
            | BrokenChain
            | InvalidTimestamp
            | InvalidBlueprintVersion
            | InvalidActionSequence
            | PreviousDataMismatch
            | HashMismatch
            | PayloadHashMismatch
            | NonSequentialDocketNumber
            | RegisterMismatch
            | PreviousHashMismatch
            | TimestampRegression
            | DocketHashMismatch => ErrorCategory::ChainIntegrity,

            InvalidApprovalCount
            | InvalidTotalValidators
            | InvalidThreshold
            | ApprovalsExceedTotal
            | QuorumNotMet
            | ConsensusNotAchieved => ErrorCategory::Quorum,

            EmptyVoteCollection | DuplicateValidator => ErrorCategory::Collection,

            HashComputationFailed => ErrorCategory::Infrastructure,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub code: ErrorCode,
    /// Offending field, when the error concerns one field.
    pub field: Option<String>,
    pub message: String,
}

impl ValidationError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            field: None,
            message: message.into(),
        }
    }

    pub fn for_field(code: ErrorCode, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Prefixes the message with a context marker such as `Vote[2]` or `Genesis`.
    pub fn with_context(mut self, context: &str) -> Self {
        self.message = format!("{}: {}", context, self.message);
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "[{}] {} ({})", self.code, self.message, field),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

/// Outcome of a validation call.
///
/// Valid iff no errors were recorded. Metadata is informational and may be
/// present on both valid and invalid results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub metadata: BTreeMap<String, Value>,
}

impl ValidationResult {
    /// An empty, valid result.
    pub fn valid() -> Self {
        Self::default()
    }

    /// A result carrying exactly one error.
    pub fn invalid(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
            metadata: BTreeMap::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn insert_metadata(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.metadata.insert(key.into(), value.into());
    }

    /// Appends every error of `other`, keeping existing metadata on conflict.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        for (key, value) in other.metadata {
            self.metadata.entry(key).or_insert(value);
        }
    }

    /// Returns true if any recorded error carries `code`.
    pub fn has_error(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Number of errors carrying `code`.
    pub fn count_of(&self, code: ErrorCode) -> usize {
        self.errors.iter().filter(|e| e.code == code).count()
    }

    pub fn error_codes(&self) -> Vec<ErrorCode> {
        self.errors.iter().map(|e| e.code).collect()
    }
}

/// Returns true for empty or whitespace-only strings.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Returns true for `None`, empty or whitespace-only strings.
pub fn is_blank_opt(value: Option<&str>) -> bool {
    value.map_or(true, is_blank)
}

/// Pushes a `RequiredFieldMissing` error when `value` is blank.
pub fn require_non_blank(result: &mut ValidationResult, field: &str, value: &str) {
    if is_blank(value) {
        result.push(ValidationError::for_field(
            ErrorCode::RequiredFieldMissing,
            field,
            format!("{} is required", field),
        ));
    }
}
