//! Incident entities.

use serde::{Deserialize, Serialize};
use shared_types::{RegisterId, Timestamp, ValidatorId};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IncidentType {
    InvalidDocketProposed,
    InvalidTransactionSubmitted,
    DoubleVoteAttempt,
    LeaderImpersonation,
    InvalidVoteSubmitted,
}

impl fmt::Display for IncidentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidDocketProposed => "InvalidDocketProposed",
            Self::InvalidTransactionSubmitted => "InvalidTransactionSubmitted",
            Self::DoubleVoteAttempt => "DoubleVoteAttempt",
            Self::LeaderImpersonation => "LeaderImpersonation",
            Self::InvalidVoteSubmitted => "InvalidVoteSubmitted",
        };
        f.write_str(name)
    }
}

/// Incident severity, ordered `Info < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info,
    High,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => f.write_str("Info"),
            Self::High => f.write_str("High"),
            Self::Critical => f.write_str("Critical"),
        }
    }
}

/// Why a proposed docket was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocketRejectionReason {
    /// The proposer was not entitled to propose.
    UnauthorizedInitiator,
    InvalidSignature,
    InvalidDocketHash,
    ChainViolation,
    InvalidStructure,
    ConsensusNotReached,
    Other,
}

impl DocketRejectionReason {
    pub fn severity(&self) -> Severity {
        match self {
            Self::UnauthorizedInitiator => Severity::Critical,
            Self::InvalidSignature | Self::InvalidDocketHash | Self::ChainViolation => {
                Severity::High
            }
            Self::InvalidStructure | Self::ConsensusNotReached | Self::Other => Severity::Info,
        }
    }
}

impl fmt::Display for DocketRejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One recorded observation of validator misbehaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadActorIncident {
    pub register_id: RegisterId,
    /// The accused validator.
    pub validator_id: ValidatorId,
    pub incident_type: IncidentType,
    pub severity: Severity,
    pub timestamp: Timestamp,
    pub details: String,
}
