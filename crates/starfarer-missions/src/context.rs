//! Per-tick mission evaluation context.

use starfarer_universe::{StarSystemInstance, Universe, Vec3};

/// Read-only view of the live world, rebuilt for every evaluation pass and
/// never persisted or shared across ticks.
pub struct MissionContext<'a> {
    pub universe: &'a Universe,
    /// The system the player is currently in.
    pub system: &'a StarSystemInstance,
    /// Player position in system-local kilometres.
    pub player_position: Vec3,
}

impl<'a> MissionContext<'a> {
    pub fn new(
        universe: &'a Universe,
        system: &'a StarSystemInstance,
        player_position: Vec3,
    ) -> Self {
        Self {
            universe,
            system,
            player_position,
        }
    }
}

/// Human-readable labels for the controls mission instructions mention.
/// The input layer supplies the player's actual bindings.
#[derive(Debug, Clone)]
pub struct InputBindings {
    pub hyperdrive: String,
    pub throttle: String,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            hyperdrive: "J".to_string(),
            throttle: "W/S".to_string(),
        }
    }
}
