//! # Core Domain Entities
//!
//! Defines the register-level entities the validator core judges.
//!
//! ## Clusters
//!
//! - **Chain**: `TransactionChainData`, `ChainTransactionType`
//! - **Dockets**: `DocketData`
//! - **Consensus**: `ConsensusVote`, `VoteDecision`
//! - **Pool**: `Transaction`, `TransactionPriority`, `TransactionSignature`

use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp in milliseconds since UNIX epoch.
pub type Timestamp = u64;

/// Identifier of a register (an independent chain).
pub type RegisterId = String;

/// Identifier of a validator node.
pub type ValidatorId = String;

/// Identifier of a transaction.
pub type TransactionId = String;

// =============================================================================
// CLUSTER A: THE TRANSACTION CHAIN
// =============================================================================

/// Kind of entry a transaction represents in its register's chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainTransactionType {
    /// First entry of a register.
    Genesis,
    /// Publication of a (new version of a) blueprint.
    BlueprintPublication,
    /// Action 0 of a workflow instance.
    InstanceInitiation,
    /// Any later action of a workflow instance.
    InstanceAction,
    /// Register-level control entry.
    ControlAction,
}

impl ChainTransactionType {
    /// Returns true for workflow instance entries (initiation or action).
    pub fn is_action(&self) -> bool {
        matches!(self, Self::InstanceInitiation | Self::InstanceAction)
    }
}

impl fmt::Display for ChainTransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Genesis => "Genesis",
            Self::BlueprintPublication => "BlueprintPublication",
            Self::InstanceInitiation => "InstanceInitiation",
            Self::InstanceAction => "InstanceAction",
            Self::ControlAction => "ControlAction",
        };
        f.write_str(name)
    }
}

/// Chain-relevant projection of a transaction.
///
/// Immutable once validated and admitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionChainData {
    pub transaction_id: TransactionId,
    pub register_id: RegisterId,
    /// Predecessor in the register chain. `None` only for genesis.
    pub previous_id: Option<TransactionId>,
    pub blueprint_id: Option<String>,
    /// Workflow action number; 0 is the instance initiation.
    pub action_id: Option<u32>,
    /// Explicitly recorded type. When set it always wins over derivation.
    pub transaction_type: Option<ChainTransactionType>,
    pub timestamp: Timestamp,
    /// Hash of the payload claimed by the transaction.
    pub data_hash: Option<String>,
}

impl TransactionChainData {
    /// Creates a chain record with no linkage; use the `with_*` builders.
    pub fn new(
        transaction_id: impl Into<String>,
        register_id: impl Into<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            register_id: register_id.into(),
            previous_id: None,
            blueprint_id: None,
            action_id: None,
            transaction_type: None,
            timestamp,
            data_hash: None,
        }
    }

    pub fn with_previous(mut self, previous_id: impl Into<String>) -> Self {
        self.previous_id = Some(previous_id.into());
        self
    }

    pub fn with_blueprint(mut self, blueprint_id: impl Into<String>) -> Self {
        self.blueprint_id = Some(blueprint_id.into());
        self
    }

    pub fn with_action(mut self, action_id: u32) -> Self {
        self.action_id = Some(action_id);
        self
    }

    pub fn with_type(mut self, transaction_type: ChainTransactionType) -> Self {
        self.transaction_type = Some(transaction_type);
        self
    }

    pub fn with_data_hash(mut self, data_hash: impl Into<String>) -> Self {
        self.data_hash = Some(data_hash.into());
        self
    }
}

// =============================================================================
// CLUSTER B: DOCKETS
// =============================================================================

/// A docket (block) of a register.
///
/// INVARIANT: `docket_number == 0` iff `previous_hash.is_none()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocketData {
    pub docket_id: String,
    pub register_id: RegisterId,
    /// Strictly sequential per register, starting at 0.
    pub docket_number: u64,
    /// Hash of the predecessor docket. `None` for the genesis docket.
    pub previous_hash: Option<String>,
    pub docket_hash: String,
    pub created_at: Timestamp,
    pub merkle_root: String,
    pub proposer_validator_id: ValidatorId,
    pub transaction_count: u64,
}

impl DocketData {
    /// Returns true if this docket claims to be the first of its register.
    pub fn is_genesis(&self) -> bool {
        self.docket_number == 0
    }
}

// =============================================================================
// CLUSTER C: CONSENSUS
// =============================================================================

/// A validator's decision on a proposed docket.
///
/// Decisions arrive from other nodes; a value outside the defined set is
/// kept as `Unrecognized` so validation can report it instead of failing
/// deserialization of the whole vote.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VoteDecision {
    Approve,
    Reject,
    Abstain,
    Unrecognized(String),
}

impl VoteDecision {
    /// Returns true for the three defined decisions.
    pub fn is_defined(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<String> for VoteDecision {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Approve" => Self::Approve,
            "Reject" => Self::Reject,
            "Abstain" => Self::Abstain,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<VoteDecision> for String {
    fn from(value: VoteDecision) -> Self {
        value.to_string()
    }
}

impl fmt::Display for VoteDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approve => f.write_str("Approve"),
            Self::Reject => f.write_str("Reject"),
            Self::Abstain => f.write_str("Abstain"),
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

/// One validator's vote on one docket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusVote {
    pub validator_id: ValidatorId,
    /// Must equal the hash of the docket under vote.
    pub docket_hash: String,
    pub decision: VoteDecision,
    pub voted_at: Timestamp,
    pub signature: String,
    /// Required iff `decision == Reject`.
    pub rejection_reason: Option<String>,
}

// =============================================================================
// CLUSTER D: POOL ENTRIES
// =============================================================================

/// Inclusion priority of a pooled transaction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum TransactionPriority {
    Low,
    #[default]
    Normal,
    High,
}

/// A signature attached to a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSignature {
    pub public_key: String,
    pub signature: String,
}

/// A transaction awaiting docket inclusion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: TransactionId,
    pub register_id: RegisterId,
    pub blueprint_id: String,
    pub action_id: u32,
    pub payload: Vec<u8>,
    /// Hex digest of `payload` claimed by the submitter.
    pub payload_hash: String,
    pub signatures: Vec<TransactionSignature>,
    pub created_at: Timestamp,
    /// `None` means the transaction never expires on its own (genesis).
    pub expires_at: Option<Timestamp>,
    pub priority: TransactionPriority,
    /// Stamped by the pool on admission; callers leave it `None`.
    pub added_to_pool_at: Option<Timestamp>,
}

impl Transaction {
    /// Returns true if an explicit expiry exists and has passed at `now`.
    pub fn is_past_expiry(&self, now: Timestamp) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }
}
