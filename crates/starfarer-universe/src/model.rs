//! Immutable descriptive models for star systems and their orbital objects.
//!
//! Models are produced by the deterministic generator and never mutated
//! afterwards. They are not persisted in full; saves keep only ids and
//! player overlay state, and the model is regenerated from coordinates on
//! load.

use crate::coordinates::{ObjectCategory, ObjectPath, StarSystemCoordinates, UniverseObjectId};

/// What kind of thing an orbital object is.
///
/// The kind drives generation parameters, display text, and proximity
/// thresholds in the mission layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Star,
    NeutronStar,
    BlackHole,
    TelluricPlanet,
    GasGiant,
    Satellite,
    Station,
    Anomaly,
}

impl ObjectKind {
    pub fn category(&self) -> ObjectCategory {
        match self {
            Self::Star | Self::NeutronStar | Self::BlackHole => ObjectCategory::Stellar,
            Self::TelluricPlanet | Self::GasGiant => ObjectCategory::Planetary,
            Self::Satellite => ObjectCategory::Satellite,
            Self::Station => ObjectCategory::Station,
            Self::Anomaly => ObjectCategory::Anomaly,
        }
    }

    /// Rare, destination-worthy objects that sightseeing offers favor.
    pub fn is_landmark(&self) -> bool {
        matches!(self, Self::NeutronStar | Self::BlackHole | Self::Anomaly)
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Star => "star",
            Self::NeutronStar => "neutron star",
            Self::BlackHole => "black hole",
            Self::TelluricPlanet => "telluric planet",
            Self::GasGiant => "gas giant",
            Self::Satellite => "satellite",
            Self::Station => "station",
            Self::Anomaly => "anomaly",
        };
        f.write_str(label)
    }
}

/// Faction operating a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Faction {
    MeridianCombine,
    OutboundLeague,
    HaloConcord,
    FreeportUnion,
}

impl Faction {
    pub const ALL: [Faction; 4] = [
        Faction::MeridianCombine,
        Faction::OutboundLeague,
        Faction::HaloConcord,
        Faction::FreeportUnion,
    ];
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::MeridianCombine => "Meridian Combine",
            Self::OutboundLeague => "Outbound League",
            Self::HaloConcord => "Halo Concord",
            Self::FreeportUnion => "Freeport Union",
        };
        f.write_str(label)
    }
}

/// Circular orbit parameters around a parent object.
///
/// `parent: None` means the object sits at the system barycentre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub parent: Option<ObjectPath>,
    /// Orbit radius in kilometres.
    pub radius_km: f64,
    /// Orbital period in hours.
    pub period_hours: f64,
    /// Phase angle at epoch, in radians.
    pub phase: f64,
}

impl Orbit {
    pub fn stationary() -> Self {
        Self {
            parent: None,
            radius_km: 0.0,
            period_hours: 1.0,
            phase: 0.0,
        }
    }
}

/// Immutable descriptive record for one body or station.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalObjectModel {
    pub id: UniverseObjectId,
    pub kind: ObjectKind,
    pub name: String,
    /// Per-object seed, derived from the system seed. Stable across
    /// regenerations, usable for content keyed to this object.
    pub seed: u64,
    /// Bounding radius in kilometres, the base unit for proximity checks.
    pub radius_km: f64,
    /// Mass in kilograms.
    pub mass_kg: f64,
    pub orbit: Orbit,
    /// Operating faction; `Some` for stations only.
    pub faction: Option<Faction>,
}

/// Full generated contents of one star system.
#[derive(Debug, Clone, PartialEq)]
pub struct StarSystemModel {
    pub coordinates: StarSystemCoordinates,
    pub seed: u64,
    pub name: String,
    /// Objects in generation order: stellar bodies first, then planets,
    /// satellites, stations, anomalies. Parents always precede children.
    pub objects: Vec<OrbitalObjectModel>,
}

impl StarSystemModel {
    /// Look up an object by its local path.
    pub fn object(&self, path: ObjectPath) -> Option<&OrbitalObjectModel> {
        self.objects.iter().find(|o| o.id.path == path)
    }

    pub fn stations(&self) -> impl Iterator<Item = &OrbitalObjectModel> {
        self.objects
            .iter()
            .filter(|o| o.kind == ObjectKind::Station)
    }

    /// The primary stellar body. Every generated system has at least one.
    pub fn primary(&self) -> &OrbitalObjectModel {
        &self.objects[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_category() {
        assert_eq!(ObjectKind::NeutronStar.category(), ObjectCategory::Stellar);
        assert_eq!(
            ObjectKind::TelluricPlanet.category(),
            ObjectCategory::Planetary
        );
        assert_eq!(ObjectKind::Station.category(), ObjectCategory::Station);
    }

    #[test]
    fn test_landmarks() {
        assert!(ObjectKind::BlackHole.is_landmark());
        assert!(ObjectKind::Anomaly.is_landmark());
        assert!(!ObjectKind::GasGiant.is_landmark());
    }
}
