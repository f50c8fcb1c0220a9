//! Fly-by mission node.
//!
//! The node tracks a single target object through three states. Progress
//! depends only on which system the player is in and the player's distance
//! to the target, measured against a clearance envelope scaled from the
//! target's bounding radius by a per-kind multiplier. Compact objects carry
//! envelopes far larger than their bounding radius suggests, reflecting
//! their visual and hazard scale.
//!
//! Completion is sticky: once `CloseEnough` is reached the node ignores all
//! further updates, so leaving the area never regresses a finished fly-by.

use starfarer_universe::{ObjectKind, StarSystemCoordinates, Universe, UniverseObjectId};

use crate::context::{InputBindings, MissionContext};
use crate::error::MissionError;

/// Progress of one fly-by. Persisted as its integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum FlyByState {
    NotInSystem = 0,
    TooFarInSystem = 1,
    CloseEnough = 2,
}

impl FlyByState {
    pub fn from_i32(val: i32) -> Option<Self> {
        match val {
            0 => Some(Self::NotInSystem),
            1 => Some(Self::TooFarInSystem),
            2 => Some(Self::CloseEnough),
            _ => None,
        }
    }
}

/// Clearance multiplier applied to the target's bounding radius, by kind.
/// These values are calibrated to each kind's visual scale and must stay a
/// plain lookup table.
pub fn clearance_multiplier(kind: ObjectKind) -> f64 {
    match kind {
        ObjectKind::NeutronStar => 50.0,
        ObjectKind::BlackHole => 10.0,
        ObjectKind::Star
        | ObjectKind::TelluricPlanet
        | ObjectKind::GasGiant
        | ObjectKind::Satellite
        | ObjectKind::Station => 3.0,
        _ => 1.0,
    }
}

/// Fly-by node: one target, one state field replaced wholesale on
/// transition.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyByNode {
    object_id: UniverseObjectId,
    state: FlyByState,
}

impl FlyByNode {
    pub fn new(object_id: UniverseObjectId) -> Self {
        Self {
            object_id,
            state: FlyByState::NotInSystem,
        }
    }

    /// Rebuild a node mid-mission from persisted progress.
    pub fn resume(object_id: UniverseObjectId, state: FlyByState) -> Self {
        Self { object_id, state }
    }

    pub fn object_id(&self) -> UniverseObjectId {
        self.object_id
    }

    pub fn state(&self) -> FlyByState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state == FlyByState::CloseEnough
    }

    /// Advance the state from the current context. Idempotent under an
    /// unchanged context, and a no-op once completed.
    pub fn update(&mut self, ctx: &MissionContext) -> Result<(), MissionError> {
        if self.is_completed() {
            return Ok(());
        }
        if ctx.system.coordinates() != self.object_id.system {
            self.state = FlyByState::NotInSystem;
            return Ok(());
        }
        // We are in the right system, so the target must exist here; a
        // resolution failure is a generator/save inconsistency and aborts
        // the evaluation.
        let target = ctx.system.resolve(self.object_id)?;
        let distance = ctx
            .player_position
            .distance(&target.transform().absolute_position());
        let clearance = target.bounding_radius() * clearance_multiplier(target.model.kind);
        self.state = if distance >= clearance {
            FlyByState::CloseEnough
        } else {
            FlyByState::TooFarInSystem
        };
        Ok(())
    }

    /// Same objective as another node: same target identity, regardless of
    /// progress. Used for offer deduplication.
    pub fn same_objective(&self, other: &FlyByNode) -> bool {
        self.object_id == other.object_id
    }

    /// Objective summary relative to an origin system.
    pub fn describe(
        &self,
        origin: StarSystemCoordinates,
        universe: &Universe,
    ) -> Result<String, MissionError> {
        let system = universe.generate_system(self.object_id.system);
        let target = system
            .object(self.object_id.path)
            .ok_or(starfarer_universe::UniverseError::ObjectNotFound { id: self.object_id })?;
        let distance = universe.distance_ly(origin, self.object_id.system);
        Ok(format!(
            "Fly by {}, a {} in the {} system, {:.1} ly away.",
            target.name, target.kind, system.name, distance
        ))
    }

    /// The next actionable instruction, branching on current progress.
    pub fn next_task(
        &self,
        ctx: &MissionContext,
        bindings: &InputBindings,
    ) -> Result<String, MissionError> {
        let system = ctx.universe.generate_system(self.object_id.system);
        let target = system
            .object(self.object_id.path)
            .ok_or(starfarer_universe::UniverseError::ObjectNotFound { id: self.object_id })?;
        Ok(match self.state {
            FlyByState::NotInSystem => format!(
                "Travel to the {} system and engage your hyperdrive ({}).",
                system.name, bindings.hyperdrive
            ),
            FlyByState::TooFarInSystem => format!(
                "Complete your pass of {}: open distance until you clear its envelope (throttle: {}).",
                target.name, bindings.throttle
            ),
            FlyByState::CloseEnough => format!("Fly-by of {} complete.", target.name),
        })
    }

    /// Systems relevant for waypoint/routing display.
    pub fn target_systems(&self) -> Vec<StarSystemCoordinates> {
        vec![self.object_id.system]
    }
}
