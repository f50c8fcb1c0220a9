//! Stable addressing for a practically infinite universe.
//!
//! A star system is identified by the integer coordinates of its galactic
//! sector plus its index within that sector. An orbital object is identified
//! by its system coordinates plus a local path (category + index within the
//! category). Both are plain value types compared structurally, so they can
//! be used as map keys, persisted in saves, and exchanged between the
//! generator, the mission layer, and the UI without any registry.
//!
//! Because systems are regenerated deterministically from their coordinates,
//! an id produced by one generation always resolves in any later generation
//! of the same system. A failed resolution is a bug, not a user error.

use serde::{Deserialize, Serialize};

/// Integer coordinates of a galactic sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectorCoordinates {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl SectorCoordinates {
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }
}

/// Identifies one star system in the procedural universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StarSystemCoordinates {
    /// Galactic sector the system belongs to.
    pub sector: SectorCoordinates,
    /// Index of the system within its sector.
    pub index: u32,
}

impl StarSystemCoordinates {
    pub fn new(sector: SectorCoordinates, index: u32) -> Self {
        Self { sector, index }
    }
}

impl std::fmt::Display for StarSystemCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}:{}:{}]#{}",
            self.sector.x, self.sector.y, self.sector.z, self.index
        )
    }
}

/// Broad placement category of an orbital object within its system.
///
/// Object indices are assigned per category in generation order, so the
/// pair (category, index) is a stable local address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ObjectCategory {
    Stellar = 0,
    Planetary = 1,
    Satellite = 2,
    Station = 3,
    Anomaly = 4,
}

impl ObjectCategory {
    pub fn from_u8(val: u8) -> Option<Self> {
        match val {
            0 => Some(Self::Stellar),
            1 => Some(Self::Planetary),
            2 => Some(Self::Satellite),
            3 => Some(Self::Station),
            4 => Some(Self::Anomaly),
            _ => None,
        }
    }
}

/// Local address of an orbital object within its star system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectPath {
    pub category: ObjectCategory,
    pub index: u16,
}

impl ObjectPath {
    pub fn new(category: ObjectCategory, index: u16) -> Self {
        Self { category, index }
    }
}

/// Universe-wide identity of an orbital object: which system, which object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniverseObjectId {
    pub system: StarSystemCoordinates,
    pub path: ObjectPath,
}

impl UniverseObjectId {
    pub fn new(system: StarSystemCoordinates, path: ObjectPath) -> Self {
        Self { system, path }
    }
}

impl std::fmt::Display for UniverseObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{:?}:{}",
            self.system, self.path.category, self.path.index
        )
    }
}
