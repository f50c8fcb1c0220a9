//! Deterministic star system generation.
//!
//! [`Universe`] is the only entry point: a universe seed plus system
//! coordinates fully determine a system's contents. Generation draws from a
//! ChaCha stream seeded by a hash of the coordinates, so independent callers
//! (the live simulation, a map preview, a mission board scanning neighbors)
//! produce identical models without coordinating. Calls are side-effect-free
//! and cheap enough to repeat rather than cache.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::coordinates::{ObjectPath, SectorCoordinates, StarSystemCoordinates, UniverseObjectId};
use crate::model::{Faction, ObjectKind, Orbit, OrbitalObjectModel, StarSystemModel};
use crate::names;
use crate::vec3::Vec3;

/// Edge length of a galactic sector in light-years.
pub const SECTOR_SIZE_LY: f64 = 20.0;

const SOLAR_MASS_KG: f64 = 1.989e30;
const EARTH_MASS_KG: f64 = 5.972e24;

/// Stream separator so the position draw never aliases the content draw.
const POSITION_CHANNEL: u64 = 0x706f73;

fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Combine two seed words into a new well-mixed seed. Used wherever a
/// sub-stream must be derived from a parent seed plus a discriminant
/// (sector axis, object index, time bucket).
pub fn mix_seed(a: u64, b: u64) -> u64 {
    splitmix64(a ^ splitmix64(b))
}

/// The procedural universe. Carries nothing but the seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Universe {
    seed: u64,
}

impl Universe {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Seed for one sector's layout draws.
    fn sector_seed(&self, sector: SectorCoordinates) -> u64 {
        let mut s = mix_seed(self.seed, sector.x as u64);
        s = mix_seed(s, sector.y as u64);
        mix_seed(s, sector.z as u64)
    }

    /// Seed for one system's content draws. Independent callers agree on
    /// this value because it is a pure hash of the coordinates.
    pub fn system_seed(&self, coords: StarSystemCoordinates) -> u64 {
        mix_seed(self.sector_seed(coords.sector), coords.index as u64)
    }

    /// How many star systems a sector holds.
    pub fn systems_in_sector(&self, sector: SectorCoordinates) -> u32 {
        let mut rng = ChaCha8Rng::seed_from_u64(self.sector_seed(sector));
        rng.gen_range(3..=12)
    }

    /// Position of a system in galaxy-scale coordinates (light-years),
    /// without materializing the system: sector origin plus a seeded offset.
    pub fn galactic_position(&self, coords: StarSystemCoordinates) -> Vec3 {
        let mut rng =
            ChaCha8Rng::seed_from_u64(mix_seed(self.system_seed(coords), POSITION_CHANNEL));
        let origin = Vec3::new(
            coords.sector.x as f64 * SECTOR_SIZE_LY,
            coords.sector.y as f64 * SECTOR_SIZE_LY,
            coords.sector.z as f64 * SECTOR_SIZE_LY,
        );
        origin
            + Vec3::new(
                rng.gen_range(0.0..SECTOR_SIZE_LY),
                rng.gen_range(0.0..SECTOR_SIZE_LY),
                rng.gen_range(0.0..SECTOR_SIZE_LY),
            )
    }

    /// Distance between two systems in light-years, from ids alone.
    pub fn distance_ly(&self, a: StarSystemCoordinates, b: StarSystemCoordinates) -> f64 {
        self.galactic_position(a)
            .distance(&self.galactic_position(b))
    }

    /// All systems within `radius_ly` of `center`, excluding `center`
    /// itself, as `(coordinates, distance)` pairs in sector scan order.
    pub fn systems_in_radius(
        &self,
        center: StarSystemCoordinates,
        radius_ly: f64,
    ) -> Vec<(StarSystemCoordinates, f64)> {
        let center_pos = self.galactic_position(center);
        let span = (radius_ly / SECTOR_SIZE_LY).ceil() as i64 + 1;
        let mut found = Vec::new();
        for dx in -span..=span {
            for dy in -span..=span {
                for dz in -span..=span {
                    let sector = SectorCoordinates::new(
                        center.sector.x + dx,
                        center.sector.y + dy,
                        center.sector.z + dz,
                    );
                    for index in 0..self.systems_in_sector(sector) {
                        let coords = StarSystemCoordinates::new(sector, index);
                        if coords == center {
                            continue;
                        }
                        let distance = self.galactic_position(coords).distance(&center_pos);
                        if distance <= radius_ly {
                            found.push((coords, distance));
                        }
                    }
                }
            }
        }
        found
    }

    /// Generate the full contents of one star system.
    ///
    /// Pure function of `(coordinates, universe seed)`: calling it twice
    /// yields structurally identical models.
    pub fn generate_system(&self, coords: StarSystemCoordinates) -> StarSystemModel {
        let seed = self.system_seed(coords);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut builder = SystemBuilder::new(coords, seed);

        let system_name = names::system_name(&mut rng);

        // Primary stellar body. Compact objects are rare.
        let stellar_roll: f64 = rng.gen();
        let star_kind = if stellar_roll < 0.01 {
            ObjectKind::BlackHole
        } else if stellar_roll < 0.03 {
            ObjectKind::NeutronStar
        } else {
            ObjectKind::Star
        };
        let (star_radius, star_mass) = match star_kind {
            ObjectKind::BlackHole => (
                rng.gen_range(20.0..60.0),
                rng.gen_range(5.0..40.0) * SOLAR_MASS_KG,
            ),
            ObjectKind::NeutronStar => (
                rng.gen_range(10.0..14.0),
                rng.gen_range(1.4..2.2) * SOLAR_MASS_KG,
            ),
            _ => (
                rng.gen_range(300_000.0..1_200_000.0),
                rng.gen_range(0.2..8.0) * SOLAR_MASS_KG,
            ),
        };
        let star_path = builder.push(OrbitalObjectSpec {
            kind: star_kind,
            name: format!("{} a", system_name),
            seed: rng.gen(),
            radius_km: star_radius,
            mass_kg: star_mass,
            orbit: Orbit::stationary(),
            faction: None,
        });

        // Planets, inner orbits first. Compact primaries keep fewer.
        let max_planets: u16 = match star_kind {
            ObjectKind::BlackHole => 3,
            ObjectKind::NeutronStar => 2,
            _ => 8,
        };
        let planet_count = rng.gen_range(0..=max_planets);
        let mut planet_paths = Vec::new();
        for i in 0..planet_count {
            let gas_giant = if i < 2 {
                rng.gen_bool(0.15)
            } else {
                rng.gen_bool(0.6)
            };
            let kind = if gas_giant {
                ObjectKind::GasGiant
            } else {
                ObjectKind::TelluricPlanet
            };
            let orbit_radius = 6.0e7 * 1.55_f64.powi(i as i32) * rng.gen_range(0.8..1.25);
            let (radius_km, mass_kg) = if gas_giant {
                (
                    rng.gen_range(20_000.0..75_000.0),
                    rng.gen_range(10.0..400.0) * EARTH_MASS_KG,
                )
            } else {
                (
                    rng.gen_range(2_000.0..9_000.0),
                    rng.gen_range(0.05..3.0) * EARTH_MASS_KG,
                )
            };
            let planet_name = names::planet_name(&system_name, i);
            let planet_path = builder.push(OrbitalObjectSpec {
                kind,
                name: planet_name.clone(),
                seed: rng.gen(),
                radius_km,
                mass_kg,
                orbit: Orbit {
                    parent: Some(star_path),
                    radius_km: orbit_radius,
                    period_hours: kepler_period_hours(orbit_radius),
                    phase: rng.gen_range(0.0..std::f64::consts::TAU),
                },
                faction: None,
            });
            planet_paths.push(planet_path);

            // Satellites directly after their parent so parents always
            // precede children in the object list.
            let satellite_count: u16 = if gas_giant {
                rng.gen_range(0..=2)
            } else if rng.gen_bool(0.25) {
                1
            } else {
                0
            };
            for s in 0..satellite_count {
                builder.push(OrbitalObjectSpec {
                    kind: ObjectKind::Satellite,
                    name: names::satellite_name(&planet_name, s),
                    seed: rng.gen(),
                    radius_km: rng.gen_range(200.0..2_500.0),
                    mass_kg: rng.gen_range(0.0001..0.02) * EARTH_MASS_KG,
                    orbit: Orbit {
                        parent: Some(planet_path),
                        radius_km: rng.gen_range(80_000.0..1_200_000.0),
                        period_hours: rng.gen_range(20.0..900.0),
                        phase: rng.gen_range(0.0..std::f64::consts::TAU),
                    },
                    faction: None,
                });
            }
        }

        // Stations anchor to a planet when one exists, else the primary.
        let station_count = rng.gen_range(0..=3);
        for _ in 0..station_count {
            let parent = if planet_paths.is_empty() {
                star_path
            } else {
                planet_paths[rng.gen_range(0..planet_paths.len())]
            };
            let near_planet = !planet_paths.is_empty();
            builder.push(OrbitalObjectSpec {
                kind: ObjectKind::Station,
                name: names::station_name(&mut rng),
                seed: rng.gen(),
                radius_km: rng.gen_range(1.0..4.0),
                mass_kg: rng.gen_range(1.0e9..5.0e10),
                orbit: Orbit {
                    parent: Some(parent),
                    radius_km: if near_planet {
                        rng.gen_range(10_000.0..80_000.0)
                    } else {
                        rng.gen_range(5.0e7..2.0e8)
                    },
                    period_hours: rng.gen_range(5.0..200.0),
                    phase: rng.gen_range(0.0..std::f64::consts::TAU),
                },
                faction: Some(Faction::ALL[rng.gen_range(0..Faction::ALL.len())]),
            });
        }

        // Occasional unexplained object on a distant orbit.
        if rng.gen_bool(0.1) {
            builder.push(OrbitalObjectSpec {
                kind: ObjectKind::Anomaly,
                name: format!("{} Anomaly", system_name),
                seed: rng.gen(),
                radius_km: rng.gen_range(50.0..500.0),
                mass_kg: rng.gen_range(1.0e12..1.0e16),
                orbit: Orbit {
                    parent: Some(star_path),
                    radius_km: rng.gen_range(1.0e9..8.0e9),
                    period_hours: rng.gen_range(5.0e4..5.0e5),
                    phase: rng.gen_range(0.0..std::f64::consts::TAU),
                },
                faction: None,
            });
        }

        let model = builder.finish(system_name);
        log::debug!(
            "generated system {} ({}): {} objects",
            model.name,
            model.coordinates,
            model.objects.len()
        );
        model
    }
}

/// Crude Kepler scaling anchored at 1 au ≈ one year.
fn kepler_period_hours(orbit_radius_km: f64) -> f64 {
    8766.0 * (orbit_radius_km / 1.496e8).powf(1.5)
}

struct OrbitalObjectSpec {
    kind: ObjectKind,
    name: String,
    seed: u64,
    radius_km: f64,
    mass_kg: f64,
    orbit: Orbit,
    faction: Option<Faction>,
}

/// Assigns per-category indices while objects are pushed in generation
/// order.
struct SystemBuilder {
    coordinates: StarSystemCoordinates,
    seed: u64,
    objects: Vec<OrbitalObjectModel>,
    counters: [u16; 5],
}

impl SystemBuilder {
    fn new(coordinates: StarSystemCoordinates, seed: u64) -> Self {
        Self {
            coordinates,
            seed,
            objects: Vec::new(),
            counters: [0; 5],
        }
    }

    fn push(&mut self, spec: OrbitalObjectSpec) -> ObjectPath {
        let category = spec.kind.category();
        let index = self.counters[category as usize];
        self.counters[category as usize] += 1;
        let path = ObjectPath::new(category, index);
        self.objects.push(OrbitalObjectModel {
            id: UniverseObjectId::new(self.coordinates, path),
            kind: spec.kind,
            name: spec.name,
            seed: spec.seed,
            radius_km: spec.radius_km,
            mass_kg: spec.mass_kg,
            orbit: spec.orbit,
            faction: spec.faction,
        });
        path
    }

    fn finish(self, name: String) -> StarSystemModel {
        StarSystemModel {
            coordinates: self.coordinates,
            seed: self.seed,
            name,
            objects: self.objects,
        }
    }
}
