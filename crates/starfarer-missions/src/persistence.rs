//! Save/load for accepted missions.
//!
//! Saves hold only mission records (ids plus progress state) in a versioned
//! JSON container; the world those records reference is regenerated from
//! coordinates on load. A version mismatch or malformed record aborts the
//! load; a partial mission list would silently lose player progress.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::error::MissionError;
use crate::mission::{Mission, MissionRecord};

/// Version number for the save format (increment when the format changes).
const SAVE_VERSION: u32 = 1;

/// Serializable container for the mission list.
#[derive(Serialize, Deserialize)]
pub struct MissionSave {
    pub version: u32,
    /// In-game elapsed time in hours, needed to rematerialize systems at
    /// the same epoch the save was taken.
    pub elapsed_hours: f64,
    pub missions: Vec<MissionRecord>,
}

/// Write the mission list to a writer as JSON.
pub fn save_missions<W: Write>(
    writer: W,
    missions: &[Mission],
    elapsed_hours: f64,
) -> Result<(), SaveError> {
    let save = MissionSave {
        version: SAVE_VERSION,
        elapsed_hours,
        missions: missions.iter().map(Mission::to_record).collect(),
    };
    serde_json::to_writer(writer, &save)?;
    Ok(())
}

/// Load a mission list from a reader.
pub fn load_missions<R: Read>(reader: R) -> Result<LoadedMissions, SaveError> {
    let save: MissionSave = serde_json::from_reader(reader)?;
    if save.version != SAVE_VERSION {
        return Err(SaveError::VersionMismatch {
            expected: SAVE_VERSION,
            found: save.version,
        });
    }
    let missions = save
        .missions
        .iter()
        .map(Mission::from_record)
        .collect::<Result<Vec<Mission>, MissionError>>()?;
    log::info!("loaded {} missions (save v{})", missions.len(), save.version);
    Ok(LoadedMissions {
        elapsed_hours: save.elapsed_hours,
        missions,
    })
}

/// Result of loading a mission save.
pub struct LoadedMissions {
    pub elapsed_hours: f64,
    pub missions: Vec<Mission>,
}

/// Errors that can occur during save/load.
#[derive(Debug)]
pub enum SaveError {
    Io(std::io::Error),
    Json(serde_json::Error),
    VersionMismatch { expected: u32, found: u32 },
    Record(MissionError),
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(e: serde_json::Error) -> Self {
        SaveError::Json(e)
    }
}

impl From<MissionError> for SaveError {
    fn from(e: MissionError) -> Self {
        SaveError::Record(e)
    }
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "IO error: {}", e),
            SaveError::Json(e) => write!(f, "Serialization error: {}", e),
            SaveError::VersionMismatch { expected, found } => {
                write!(
                    f,
                    "Save version mismatch: expected {}, found {}",
                    expected, found
                )
            }
            SaveError::Record(e) => write!(f, "Invalid mission record: {}", e),
        }
    }
}

impl std::error::Error for SaveError {}

#[cfg(test)]
mod tests {
    use super::*;
    use starfarer_universe::{SectorCoordinates, StarSystemCoordinates, Universe};

    fn sample_missions(universe: &Universe) -> Vec<Mission> {
        for x in 0..40 {
            let coords = StarSystemCoordinates::new(SectorCoordinates::new(x, 0, 0), 0);
            let model = universe.generate_system(coords);
            let station = model.stations().next().cloned();
            if let Some(station) = station {
                let target = universe
                    .generate_system(StarSystemCoordinates::new(
                        SectorCoordinates::new(x + 1, 0, 0),
                        0,
                    ));
                return vec![
                    Mission::fly_by(universe, station.id, target.primary()),
                    Mission::fly_by(universe, station.id, model.primary()),
                ];
            }
        }
        panic!("no station in probe range");
    }

    #[test]
    fn test_save_load_roundtrip() {
        let universe = Universe::new(42);
        let missions = sample_missions(&universe);

        let mut buffer = Vec::new();
        save_missions(&mut buffer, &missions, 1234.5).expect("save failed");

        let loaded = load_missions(&buffer[..]).expect("load failed");
        assert!((loaded.elapsed_hours - 1234.5).abs() < 1e-9);
        assert_eq!(loaded.missions, missions);
    }

    #[test]
    fn test_version_mismatch_rejected() {
        let json = r#"{"version": 99, "elapsed_hours": 0.0, "missions": []}"#;
        match load_missions(json.as_bytes()) {
            Err(SaveError::VersionMismatch { expected, found }) => {
                assert_eq!(expected, SAVE_VERSION);
                assert_eq!(found, 99);
            }
            other => panic!("expected VersionMismatch, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_malformed_record_rejected() {
        // Fly-by record with no object id.
        let json = r#"{
            "version": 1,
            "elapsed_hours": 0.0,
            "missions": [{
                "giver": {
                    "system": {"sector": {"x": 0, "y": 0, "z": 0}, "index": 0},
                    "path": {"category": "Station", "index": 0}
                },
                "reward": 100,
                "node": {"node_type": 0, "state": 0}
            }]
        }"#;
        assert!(matches!(
            load_missions(json.as_bytes()),
            Err(SaveError::Record(MissionError::MalformedRecord(_)))
        ));
    }
}
