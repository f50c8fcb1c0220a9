//! Mission state machine and mission board for Starfarer.
//!
//! Missions track player progress independently of the renderer: nodes are
//! evaluated synchronously each tick against a freshly built
//! [`MissionContext`], and only node records (ids plus progress state) are
//! persisted; the world they reference is regenerated deterministically by
//! `starfarer-universe`.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`board`] | Which missions a facility offers (sightseeing, contacts) |
//! | [`context`] | Per-tick evaluation context and input binding labels |
//! | [`error`] | Mission faults: unresolvable targets, malformed records |
//! | [`flyby`] | Fly-by node: clearance thresholds, sticky completion |
//! | [`mission`] | Mission aggregate: node tree, giver, reward |
//! | [`node`] | Mission node tree, combinators, persisted records |
//! | [`persistence`] | Versioned JSON save container for mission lists |

pub mod board;
pub mod context;
pub mod error;
pub mod flyby;
pub mod mission;
pub mod node;
pub mod persistence;

pub use board::{contact_stations, sightseeing_offers, ContactStation, MissionBoardConfig};
pub use context::{InputBindings, MissionContext};
pub use error::MissionError;
pub use flyby::{FlyByNode, FlyByState};
pub use mission::{Mission, MissionRecord};
pub use node::{MissionNode, MissionNodeRecord};
