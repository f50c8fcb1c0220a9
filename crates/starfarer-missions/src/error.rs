//! Mission-layer errors.
//!
//! A mission target is addressed by an id produced by the deterministic
//! generator, so an unresolvable target means the generator and the save
//! disagree, a fault to surface loudly, never to retry or paper over.

use starfarer_universe::UniverseError;

#[derive(Debug, Clone, PartialEq)]
pub enum MissionError {
    /// A node's target could not be resolved in the system it believes is
    /// correct. Internal-consistency fault.
    TargetVanished(UniverseError),
    /// A persisted record carried a node type this build does not know.
    UnknownNodeType(u8),
    /// A persisted record was structurally invalid.
    MalformedRecord(&'static str),
}

impl From<UniverseError> for MissionError {
    fn from(e: UniverseError) -> Self {
        MissionError::TargetVanished(e)
    }
}

impl std::fmt::Display for MissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissionError::TargetVanished(e) => {
                write!(f, "mission target unresolvable: {}", e)
            }
            MissionError::UnknownNodeType(t) => {
                write!(f, "unknown mission node type {}", t)
            }
            MissionError::MalformedRecord(what) => {
                write!(f, "malformed mission record: {}", what)
            }
        }
    }
}

impl std::error::Error for MissionError {}
