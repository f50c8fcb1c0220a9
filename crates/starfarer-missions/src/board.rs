//! Mission board: what a facility offers the player.
//!
//! Everything here is deterministic. Sightseeing offers are keyed to the
//! facility seed plus a coarse time bucket, so the board shows the same
//! offers for the whole hour and rotates when the bucket changes.
//! Contact-station lists use one fixed draw per candidate, so the filtered
//! set is identical across reloads of the same universe.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use starfarer_universe::{mix_seed, Faction, OrbitalObjectModel, Universe, UniverseObjectId};

use crate::mission::Mission;

/// Board tuning knobs.
#[derive(Debug, Clone)]
pub struct MissionBoardConfig {
    /// How far out to scan neighbor systems, in light-years.
    pub search_radius_ly: f64,
    /// `k` in the contact retention probability `1 / (1 + k * d^2)`.
    pub distance_decay_k: f64,
    /// Upper bound on sightseeing offers shown at once.
    pub max_sightseeing: usize,
}

impl Default for MissionBoardConfig {
    fn default() -> Self {
        Self {
            search_radius_ly: 40.0,
            distance_decay_k: 0.002,
            max_sightseeing: 5,
        }
    }
}

/// Map a wall-clock instant to the board rotation bucket.
pub fn hour_bucket(unix_seconds: u64) -> u64 {
    unix_seconds / 3600
}

/// Probability of keeping a contact candidate at `distance_ly`.
pub fn keep_probability(decay_k: f64, distance_ly: f64) -> f64 {
    1.0 / (1.0 + decay_k * distance_ly * distance_ly)
}

/// Sightseeing fly-by offers for one facility and one time bucket.
///
/// Scans neighbor systems for landmark objects (compact stellar remnants,
/// anomalies), falling back to ordinary primaries when the neighborhood is
/// quiet, and picks up to `max_sightseeing` of them with a draw seeded by
/// `(facility seed, bucket)`.
pub fn sightseeing_offers(
    universe: &Universe,
    facility: &OrbitalObjectModel,
    bucket: u64,
    config: &MissionBoardConfig,
) -> Vec<Mission> {
    let mut neighbors = universe.systems_in_radius(facility.id.system, config.search_radius_ly);
    neighbors.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut landmarks: Vec<OrbitalObjectModel> = Vec::new();
    let mut primaries: Vec<OrbitalObjectModel> = Vec::new();
    for (coords, _) in &neighbors {
        let system = universe.generate_system(*coords);
        let mut found_landmark = false;
        for object in &system.objects {
            if object.kind.is_landmark() {
                landmarks.push(object.clone());
                found_landmark = true;
            }
        }
        if !found_landmark {
            primaries.push(system.primary().clone());
        }
    }
    // Landmarks first; pad with ordinary primaries so quiet neighborhoods
    // still get a board.
    let mut candidates = landmarks;
    candidates.extend(primaries);

    let mut rng = ChaCha8Rng::seed_from_u64(mix_seed(facility.seed, bucket));
    let mut offers: Vec<Mission> = Vec::new();
    while offers.len() < config.max_sightseeing && !candidates.is_empty() {
        let pick = rng.gen_range(0..candidates.len());
        let target = candidates.swap_remove(pick);
        let mission = Mission::fly_by(universe, facility.id, &target);
        if !offers.iter().any(|m| m.same_objective(&mission)) {
            offers.push(mission);
        }
    }
    log::debug!(
        "board at {}: {} sightseeing offers for bucket {}",
        facility.name,
        offers.len(),
        bucket
    );
    offers
}

/// A tradeable contact at another station.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactStation {
    pub id: UniverseObjectId,
    pub name: String,
    pub faction: Faction,
    pub distance_ly: f64,
}

/// Contact/trading candidates for one facility.
///
/// Candidates come from neighbor systems within the search radius. Each is
/// retained with probability `1 / (1 + k * d^2)` using one deterministic
/// draw per candidate index, then restricted to the facility's own faction
/// and sorted nearest first.
pub fn contact_stations(
    universe: &Universe,
    facility: &OrbitalObjectModel,
    config: &MissionBoardConfig,
) -> Vec<ContactStation> {
    let facility_faction = match facility.faction {
        Some(f) => f,
        None => return Vec::new(),
    };

    let mut neighbors = universe.systems_in_radius(facility.id.system, config.search_radius_ly);
    neighbors.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut contacts = Vec::new();
    let mut candidate_index: u64 = 0;
    for (coords, distance) in &neighbors {
        let system = universe.generate_system(*coords);
        for station in system.stations() {
            let roll: f64 = ChaCha8Rng::seed_from_u64(mix_seed(facility.seed, candidate_index))
                .gen();
            candidate_index += 1;
            if roll >= keep_probability(config.distance_decay_k, *distance) {
                continue;
            }
            if station.faction != Some(facility_faction) {
                continue;
            }
            contacts.push(ContactStation {
                id: station.id,
                name: station.name.clone(),
                faction: facility_faction,
                distance_ly: *distance,
            });
        }
    }
    contacts.sort_by(|a, b| a.distance_ly.total_cmp(&b.distance_ly));
    log::debug!(
        "board at {}: {} same-faction contacts within {} ly",
        facility.name,
        contacts.len(),
        config.search_radius_ly
    );
    contacts
}
