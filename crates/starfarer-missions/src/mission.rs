//! Mission aggregate: a node tree plus the facility that offered it and the
//! reward for finishing it.

use serde::{Deserialize, Serialize};
use starfarer_universe::{
    ObjectKind, OrbitalObjectModel, StarSystemCoordinates, Universe, UniverseObjectId,
};

use crate::context::{InputBindings, MissionContext};
use crate::error::MissionError;
use crate::flyby::FlyByNode;
use crate::node::{MissionNode, MissionNodeRecord};

/// One accepted or offered mission.
#[derive(Debug, Clone, PartialEq)]
pub struct Mission {
    /// The facility that offered the mission.
    pub giver: UniverseObjectId,
    /// Payout in credits on completion.
    pub reward: u64,
    pub tree: MissionNode,
}

impl Mission {
    /// Single fly-by mission from a giver facility to a target object.
    /// The reward scales with distance and target rarity.
    pub fn fly_by(universe: &Universe, giver: UniverseObjectId, target: &OrbitalObjectModel) -> Self {
        Self {
            giver,
            reward: fly_by_reward(universe, giver.system, target),
            tree: MissionNode::FlyBy(FlyByNode::new(target.id)),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.tree.is_completed()
    }

    pub fn update(&mut self, ctx: &MissionContext) -> Result<(), MissionError> {
        self.tree.update(ctx)
    }

    pub fn same_objective(&self, other: &Mission) -> bool {
        self.tree.same_objective(&other.tree)
    }

    pub fn describe(
        &self,
        origin: StarSystemCoordinates,
        universe: &Universe,
    ) -> Result<String, MissionError> {
        Ok(format!(
            "{} Reward: {} credits.",
            self.tree.describe(origin, universe)?,
            self.reward
        ))
    }

    pub fn next_task(
        &self,
        ctx: &MissionContext,
        bindings: &InputBindings,
    ) -> Result<String, MissionError> {
        self.tree.next_task(ctx, bindings)
    }

    pub fn target_systems(&self) -> Vec<StarSystemCoordinates> {
        self.tree.target_systems()
    }

    pub fn to_record(&self) -> MissionRecord {
        MissionRecord {
            giver: self.giver,
            reward: self.reward,
            node: self.tree.to_record(),
        }
    }

    pub fn from_record(record: &MissionRecord) -> Result<Self, MissionError> {
        Ok(Self {
            giver: record.giver,
            reward: record.reward,
            tree: MissionNode::from_record(&record.node)?,
        })
    }
}

/// Persisted form of one mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionRecord {
    pub giver: UniverseObjectId,
    pub reward: u64,
    pub node: MissionNodeRecord,
}

fn fly_by_reward(
    universe: &Universe,
    origin: StarSystemCoordinates,
    target: &OrbitalObjectModel,
) -> u64 {
    let distance = universe.distance_ly(origin, target.id.system);
    let base = 4_000.0 + 250.0 * distance;
    let rarity = match target.kind {
        ObjectKind::NeutronStar => 4.0,
        ObjectKind::BlackHole => 6.0,
        ObjectKind::Anomaly => 5.0,
        _ => 1.0,
    };
    (base * rarity) as u64
}
