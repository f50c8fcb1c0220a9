//! Mission node tree and its persisted form.
//!
//! A mission objective is a tree: fly-by leaves combined by `All`, `Any`,
//! and `InOrder` nodes. The whole tree exposes one uniform contract
//! (update, completion, description, target systems) and round-trips
//! through [`MissionNodeRecord`] including partial progress, which is the
//! persisted-save contract.

use serde::{Deserialize, Serialize};
use starfarer_universe::{StarSystemCoordinates, Universe, UniverseObjectId};

use crate::context::{InputBindings, MissionContext};
use crate::error::MissionError;
use crate::flyby::{FlyByNode, FlyByState};

/// Node type tags as persisted in [`MissionNodeRecord::node_type`].
pub mod node_types {
    pub const FLY_BY: u8 = 0;
    pub const ALL: u8 = 1;
    pub const ANY: u8 = 2;
    pub const IN_ORDER: u8 = 3;
}

/// One node of a mission tree.
#[derive(Debug, Clone, PartialEq)]
pub enum MissionNode {
    FlyBy(FlyByNode),
    /// Completed when every child is.
    All(Vec<MissionNode>),
    /// Completed when any child is.
    Any(Vec<MissionNode>),
    /// Children completed one after another; `active` is the index of the
    /// child currently being pursued.
    InOrder {
        children: Vec<MissionNode>,
        active: usize,
    },
}

impl MissionNode {
    pub fn is_completed(&self) -> bool {
        match self {
            MissionNode::FlyBy(node) => node.is_completed(),
            MissionNode::All(children) => children.iter().all(MissionNode::is_completed),
            MissionNode::Any(children) => children.iter().any(MissionNode::is_completed),
            MissionNode::InOrder { children, active } => *active >= children.len(),
        }
    }

    /// Advance the tree from the current context. No-op once completed;
    /// idempotent under an unchanged context.
    pub fn update(&mut self, ctx: &MissionContext) -> Result<(), MissionError> {
        if self.is_completed() {
            return Ok(());
        }
        match self {
            MissionNode::FlyBy(node) => node.update(ctx),
            MissionNode::All(children) | MissionNode::Any(children) => {
                for child in children.iter_mut() {
                    child.update(ctx)?;
                }
                Ok(())
            }
            MissionNode::InOrder { children, active } => {
                if let Some(child) = children.get_mut(*active) {
                    child.update(ctx)?;
                    if child.is_completed() {
                        *active += 1;
                    }
                }
                Ok(())
            }
        }
    }

    /// Structural objective equality: same variant, same target identity,
    /// progress ignored. Used to deduplicate offers.
    pub fn same_objective(&self, other: &MissionNode) -> bool {
        match (self, other) {
            (MissionNode::FlyBy(a), MissionNode::FlyBy(b)) => a.same_objective(b),
            (MissionNode::All(a), MissionNode::All(b))
            | (MissionNode::Any(a), MissionNode::Any(b)) => {
                a.len() == b.len()
                    && a.iter().zip(b).all(|(x, y)| x.same_objective(y))
            }
            (
                MissionNode::InOrder { children: a, .. },
                MissionNode::InOrder { children: b, .. },
            ) => a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_objective(y)),
            _ => false,
        }
    }

    /// Objective summary relative to an origin system.
    pub fn describe(
        &self,
        origin: StarSystemCoordinates,
        universe: &Universe,
    ) -> Result<String, MissionError> {
        match self {
            MissionNode::FlyBy(node) => node.describe(origin, universe),
            MissionNode::All(children) => join_describe(children, origin, universe, " Also: "),
            MissionNode::Any(children) => join_describe(children, origin, universe, " Or: "),
            MissionNode::InOrder { children, .. } => {
                join_describe(children, origin, universe, " Then: ")
            }
        }
    }

    /// The next actionable instruction for the player.
    pub fn next_task(
        &self,
        ctx: &MissionContext,
        bindings: &InputBindings,
    ) -> Result<String, MissionError> {
        match self {
            MissionNode::FlyBy(node) => node.next_task(ctx, bindings),
            MissionNode::All(children) | MissionNode::Any(children) => {
                match children.iter().find(|c| !c.is_completed()) {
                    Some(child) => child.next_task(ctx, bindings),
                    None => Ok("Objective complete.".to_string()),
                }
            }
            MissionNode::InOrder { children, active } => match children.get(*active) {
                Some(child) => child.next_task(ctx, bindings),
                None => Ok("Objective complete.".to_string()),
            },
        }
    }

    /// Systems relevant for waypoint/routing display, deduplicated in
    /// first-seen order.
    pub fn target_systems(&self) -> Vec<StarSystemCoordinates> {
        let mut systems = Vec::new();
        self.collect_target_systems(&mut systems);
        systems
    }

    fn collect_target_systems(&self, out: &mut Vec<StarSystemCoordinates>) {
        match self {
            MissionNode::FlyBy(node) => {
                for system in node.target_systems() {
                    if !out.contains(&system) {
                        out.push(system);
                    }
                }
            }
            MissionNode::All(children)
            | MissionNode::Any(children)
            | MissionNode::InOrder { children, .. } => {
                for child in children {
                    child.collect_target_systems(out);
                }
            }
        }
    }

    /// Persisted form, including partial progress.
    pub fn to_record(&self) -> MissionNodeRecord {
        match self {
            MissionNode::FlyBy(node) => MissionNodeRecord {
                node_type: node_types::FLY_BY,
                children: Vec::new(),
                object_id: Some(node.object_id()),
                state: node.state() as i32,
            },
            MissionNode::All(children) => MissionNodeRecord {
                node_type: node_types::ALL,
                children: children.iter().map(MissionNode::to_record).collect(),
                object_id: None,
                state: 0,
            },
            MissionNode::Any(children) => MissionNodeRecord {
                node_type: node_types::ANY,
                children: children.iter().map(MissionNode::to_record).collect(),
                object_id: None,
                state: 0,
            },
            MissionNode::InOrder { children, active } => MissionNodeRecord {
                node_type: node_types::IN_ORDER,
                children: children.iter().map(MissionNode::to_record).collect(),
                object_id: None,
                state: *active as i32,
            },
        }
    }

    /// Inverse of [`to_record`](Self::to_record). Rejects unknown node
    /// types and structurally invalid records.
    pub fn from_record(record: &MissionNodeRecord) -> Result<MissionNode, MissionError> {
        match record.node_type {
            node_types::FLY_BY => {
                let object_id = record
                    .object_id
                    .ok_or(MissionError::MalformedRecord("fly-by without object_id"))?;
                let state = FlyByState::from_i32(record.state)
                    .ok_or(MissionError::MalformedRecord("fly-by state out of range"))?;
                Ok(MissionNode::FlyBy(FlyByNode::resume(object_id, state)))
            }
            node_types::ALL => Ok(MissionNode::All(from_records(&record.children)?)),
            node_types::ANY => Ok(MissionNode::Any(from_records(&record.children)?)),
            node_types::IN_ORDER => {
                let children = from_records(&record.children)?;
                if record.state < 0 || record.state as usize > children.len() {
                    return Err(MissionError::MalformedRecord(
                        "in-order progress out of range",
                    ));
                }
                Ok(MissionNode::InOrder {
                    active: record.state as usize,
                    children,
                })
            }
            other => Err(MissionError::UnknownNodeType(other)),
        }
    }
}

fn from_records(records: &[MissionNodeRecord]) -> Result<Vec<MissionNode>, MissionError> {
    records.iter().map(MissionNode::from_record).collect()
}

fn join_describe(
    children: &[MissionNode],
    origin: StarSystemCoordinates,
    universe: &Universe,
    separator: &str,
) -> Result<String, MissionError> {
    let parts: Result<Vec<String>, MissionError> = children
        .iter()
        .map(|c| c.describe(origin, universe))
        .collect();
    Ok(parts?.join(separator))
}

/// JSON-shaped persisted form of one mission node.
///
/// `node_type` decides which remaining fields are meaningful: fly-by leaves
/// carry `object_id` and `state`, combinators carry `children` (plus the
/// active index for in-order nodes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionNodeRecord {
    pub node_type: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MissionNodeRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<UniverseObjectId>,
    #[serde(default)]
    pub state: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use starfarer_universe::{ObjectCategory, ObjectPath, SectorCoordinates};

    fn object_id(index: u16) -> UniverseObjectId {
        UniverseObjectId::new(
            StarSystemCoordinates::new(SectorCoordinates::new(0, 0, 0), 0),
            ObjectPath::new(ObjectCategory::Planetary, index),
        )
    }

    fn fly_by(index: u16) -> MissionNode {
        MissionNode::FlyBy(FlyByNode::new(object_id(index)))
    }

    fn completed_fly_by(index: u16) -> MissionNode {
        MissionNode::FlyBy(FlyByNode::resume(object_id(index), FlyByState::CloseEnough))
    }

    #[test]
    fn test_all_any_completion() {
        let all = MissionNode::All(vec![completed_fly_by(0), fly_by(1)]);
        assert!(!all.is_completed());
        let all = MissionNode::All(vec![completed_fly_by(0), completed_fly_by(1)]);
        assert!(all.is_completed());

        let any = MissionNode::Any(vec![completed_fly_by(0), fly_by(1)]);
        assert!(any.is_completed());
        let any = MissionNode::Any(vec![fly_by(0), fly_by(1)]);
        assert!(!any.is_completed());
    }

    #[test]
    fn test_in_order_completion_by_index() {
        let node = MissionNode::InOrder {
            children: vec![fly_by(0), fly_by(1)],
            active: 1,
        };
        assert!(!node.is_completed());
        let node = MissionNode::InOrder {
            children: vec![fly_by(0), fly_by(1)],
            active: 2,
        };
        assert!(node.is_completed());
    }

    #[test]
    fn test_record_roundtrip_preserves_progress() {
        let tree = MissionNode::InOrder {
            children: vec![
                completed_fly_by(0),
                MissionNode::Any(vec![fly_by(1), fly_by(2)]),
            ],
            active: 1,
        };
        let record = tree.to_record();
        let back = MissionNode::from_record(&record).unwrap();
        assert_eq!(back, tree);
        assert_eq!(back.to_record(), record);
    }

    #[test]
    fn test_roundtrip_is_idempotent() {
        let record = MissionNodeRecord {
            node_type: node_types::ALL,
            children: vec![MissionNodeRecord {
                node_type: node_types::FLY_BY,
                children: Vec::new(),
                object_id: Some(object_id(3)),
                state: 1,
            }],
            object_id: None,
            state: 0,
        };
        let once = MissionNode::from_record(&record).unwrap();
        let again = MissionNode::from_record(&once.to_record()).unwrap();
        assert_eq!(once, again);
    }

    #[test]
    fn test_record_json_shape() {
        let record = fly_by(4).to_record();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["node_type"], 0);
        assert_eq!(json["state"], 0);
        assert!(json.get("children").is_none());
        let back: MissionNodeRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_unknown_node_type_rejected() {
        let record = MissionNodeRecord {
            node_type: 42,
            children: Vec::new(),
            object_id: None,
            state: 0,
        };
        assert!(matches!(
            MissionNode::from_record(&record),
            Err(MissionError::UnknownNodeType(42))
        ));
    }

    #[test]
    fn test_malformed_records_rejected() {
        let record = MissionNodeRecord {
            node_type: node_types::FLY_BY,
            children: Vec::new(),
            object_id: None,
            state: 0,
        };
        assert!(matches!(
            MissionNode::from_record(&record),
            Err(MissionError::MalformedRecord(_))
        ));

        let record = MissionNodeRecord {
            node_type: node_types::FLY_BY,
            children: Vec::new(),
            object_id: Some(object_id(0)),
            state: 9,
        };
        assert!(matches!(
            MissionNode::from_record(&record),
            Err(MissionError::MalformedRecord(_))
        ));

        let record = MissionNodeRecord {
            node_type: node_types::IN_ORDER,
            children: Vec::new(),
            object_id: None,
            state: 3,
        };
        assert!(matches!(
            MissionNode::from_record(&record),
            Err(MissionError::MalformedRecord(_))
        ));
    }

    #[test]
    fn test_same_objective_across_variants() {
        assert!(fly_by(0).same_objective(&fly_by(0)));
        assert!(!fly_by(0).same_objective(&fly_by(1)));
        // Progress is ignored.
        assert!(fly_by(0).same_objective(&completed_fly_by(0)));
        // Variant mismatch.
        assert!(!fly_by(0).same_objective(&MissionNode::All(vec![fly_by(0)])));
        assert!(
            !MissionNode::All(vec![fly_by(0)]).same_objective(&MissionNode::Any(vec![fly_by(0)]))
        );
    }

    #[test]
    fn test_target_systems_deduplicated() {
        let other_system = UniverseObjectId::new(
            StarSystemCoordinates::new(SectorCoordinates::new(1, 0, 0), 0),
            ObjectPath::new(ObjectCategory::Stellar, 0),
        );
        let tree = MissionNode::All(vec![
            fly_by(0),
            fly_by(1),
            MissionNode::FlyBy(FlyByNode::new(other_system)),
        ]);
        let systems = tree.target_systems();
        assert_eq!(systems.len(), 2);
    }
}
