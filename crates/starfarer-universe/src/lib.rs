//! Procedural universe core for Starfarer.
//!
//! This crate contains the coordinate/identity model and the deterministic
//! star system generator. Everything here is a pure function of coordinates
//! and the universe seed, with no database or engine behind it. The renderer and
//! the mission layer both regenerate systems on demand and always agree,
//! because there is no persisted world state to drift from.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`coordinates`] | Sector/system coordinates and universe-wide object ids |
//! | [`error`] | Internal-consistency faults (missing object, wrong system) |
//! | [`generator`] | Seeded generation of star systems, neighbor enumeration |
//! | [`instance`] | Live system layer: orbit propagation and object resolution |
//! | [`model`] | Immutable orbital object and star system models |
//! | [`names`] | Procedural catalog names for systems, bodies, stations |
//! | [`vec3`] | Minimal 3D vector used for positions and distances |

pub mod coordinates;
pub mod error;
pub mod generator;
pub mod instance;
pub mod model;
pub mod names;
pub mod vec3;

pub use coordinates::{ObjectCategory, ObjectPath, SectorCoordinates, StarSystemCoordinates, UniverseObjectId};
pub use error::UniverseError;
pub use generator::{mix_seed, Universe, SECTOR_SIZE_LY};
pub use instance::{OrbitalObjectInstance, StarSystemInstance};
pub use model::{Faction, ObjectKind, Orbit, OrbitalObjectModel, StarSystemModel};
pub use vec3::Vec3;
