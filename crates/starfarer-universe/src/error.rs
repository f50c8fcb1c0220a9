//! Universe-layer errors.
//!
//! Ids are produced by the same deterministic process that builds systems,
//! so every variant here signals an internal-consistency fault (seed drift,
//! version mismatch between generator and save). Callers propagate these and
//! abort the operation rather than retry: the same inputs give the same
//! result.

use crate::coordinates::{StarSystemCoordinates, UniverseObjectId};

#[derive(Debug, Clone, PartialEq)]
pub enum UniverseError {
    /// The id's local path matched nothing in the resolved system.
    ObjectNotFound { id: UniverseObjectId },
    /// An id was resolved against an instance of a different system.
    SystemMismatch {
        expected: StarSystemCoordinates,
        found: StarSystemCoordinates,
    },
}

impl std::fmt::Display for UniverseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UniverseError::ObjectNotFound { id } => {
                write!(f, "object {} does not exist in its generated system", id)
            }
            UniverseError::SystemMismatch { expected, found } => {
                write!(
                    f,
                    "id belongs to system {} but was resolved against {}",
                    expected, found
                )
            }
        }
    }
}

impl std::error::Error for UniverseError {}
