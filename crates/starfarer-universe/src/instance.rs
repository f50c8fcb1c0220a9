//! Live system layer: models materialized at a point in time.
//!
//! An instance pairs every object of a [`StarSystemModel`] with a transform
//! computed from its orbit at the requested elapsed time. The mission layer
//! evaluates distances against these transforms; the rendering layer (out of
//! scope here) consumes the same data. Instances are rebuilt per tick or on
//! demand and never persisted.

use crate::coordinates::{ObjectPath, StarSystemCoordinates, UniverseObjectId};
use crate::error::UniverseError;
use crate::model::{OrbitalObjectModel, StarSystemModel};
use crate::vec3::Vec3;

/// World-space placement of one object, in kilometres from the system
/// barycentre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    position: Vec3,
}

impl Transform {
    pub fn absolute_position(&self) -> Vec3 {
        self.position
    }
}

/// One orbital object with its live transform.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalObjectInstance {
    pub model: OrbitalObjectModel,
    transform: Transform,
}

impl OrbitalObjectInstance {
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Bounding radius in kilometres, the base unit for proximity checks.
    pub fn bounding_radius(&self) -> f64 {
        self.model.radius_km
    }
}

/// A star system materialized at a fixed elapsed time.
#[derive(Debug, Clone, PartialEq)]
pub struct StarSystemInstance {
    coordinates: StarSystemCoordinates,
    name: String,
    elapsed_hours: f64,
    objects: Vec<OrbitalObjectInstance>,
}

impl StarSystemInstance {
    /// Build an instance from a model by propagating every orbit to
    /// `elapsed_hours`. Parents precede children in the model's object
    /// order, so positions resolve in one pass.
    pub fn materialize(model: StarSystemModel, elapsed_hours: f64) -> Self {
        let coordinates = model.coordinates;
        let name = model.name.clone();
        let mut objects: Vec<OrbitalObjectInstance> = Vec::with_capacity(model.objects.len());
        for object in model.objects {
            let parent_position = object
                .orbit
                .parent
                .and_then(|p| objects.iter().find(|o| o.model.id.path == p))
                .map(|o| o.transform.position)
                .unwrap_or(Vec3::ZERO);
            let position = parent_position + orbit_offset(&object, elapsed_hours);
            objects.push(OrbitalObjectInstance {
                model: object,
                transform: Transform { position },
            });
        }
        Self {
            coordinates,
            name,
            elapsed_hours,
            objects,
        }
    }

    pub fn coordinates(&self) -> StarSystemCoordinates {
        self.coordinates
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn elapsed_hours(&self) -> f64 {
        self.elapsed_hours
    }

    pub fn objects(&self) -> &[OrbitalObjectInstance] {
        &self.objects
    }

    fn object(&self, path: ObjectPath) -> Option<&OrbitalObjectInstance> {
        self.objects.iter().find(|o| o.model.id.path == path)
    }

    /// Resolve a universe-wide id against this instance.
    ///
    /// A `SystemMismatch` means the caller picked the wrong instance; an
    /// `ObjectNotFound` means the id and the generator disagree; both are
    /// contract violations to surface loudly, not conditions to retry.
    pub fn resolve(&self, id: UniverseObjectId) -> Result<&OrbitalObjectInstance, UniverseError> {
        if id.system != self.coordinates {
            return Err(UniverseError::SystemMismatch {
                expected: id.system,
                found: self.coordinates,
            });
        }
        self.object(id.path)
            .ok_or(UniverseError::ObjectNotFound { id })
    }
}

fn orbit_offset(object: &OrbitalObjectModel, elapsed_hours: f64) -> Vec3 {
    let orbit = &object.orbit;
    if orbit.radius_km <= 0.0 {
        return Vec3::ZERO;
    }
    let angle =
        orbit.phase + std::f64::consts::TAU * (elapsed_hours / orbit.period_hours);
    Vec3::new(
        orbit.radius_km * angle.cos(),
        0.0,
        orbit.radius_km * angle.sin(),
    )
}
