//! Procedural catalog names for systems, bodies, and stations.

use rand::Rng;

/// Generate a star system name: two or three syllables plus a catalog
/// number, e.g. "Velshan-412".
pub fn system_name(rng: &mut impl Rng) -> String {
    let syllables = 2 + rng.gen_range(0..2);
    let mut name = String::new();
    for i in 0..syllables {
        let part = if i % 2 == 0 {
            ONSETS[rng.gen_range(0..ONSETS.len())]
        } else {
            CODAS[rng.gen_range(0..CODAS.len())]
        };
        name.push_str(part);
    }
    let mut chars = name.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => name,
    };
    format!("{}-{}", capitalized, rng.gen_range(100..1000))
}

/// Planet designation in exoplanet style: system name plus a letter,
/// starting at "b" ("a" is the primary star).
pub fn planet_name(system: &str, planet_index: u16) -> String {
    let letter = (b'b' + (planet_index as u8 % 24)) as char;
    format!("{} {}", system, letter)
}

/// Satellite designation: parent planet name plus a Roman numeral.
pub fn satellite_name(planet: &str, satellite_index: u16) -> String {
    let numeral = ROMAN[(satellite_index as usize) % ROMAN.len()];
    format!("{} {}", planet, numeral)
}

/// Station name drawn from fixed word lists, e.g. "Corvus Anchorage".
pub fn station_name(rng: &mut impl Rng) -> String {
    let first = STATION_FIRST[rng.gen_range(0..STATION_FIRST.len())];
    let second = STATION_SECOND[rng.gen_range(0..STATION_SECOND.len())];
    format!("{} {}", first, second)
}

static ONSETS: &[&str] = &[
    "vel", "kor", "ash", "tir", "mor", "zan", "cal", "dre", "ven", "sol", "nar", "ith", "bel",
    "rho", "ser", "tal", "ulm", "pra", "gon", "fey",
];

static CODAS: &[&str] = &[
    "shan", "dor", "mir", "eth", "una", "kai", "tos", "ryn", "vala", "quo", "den", "ara", "lix",
    "mon", "isse",
];

static ROMAN: &[&str] = &[
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X",
];

static STATION_FIRST: &[&str] = &[
    "Corvus", "Halcyon", "Meridian", "Pallas", "Kestrel", "Aurora", "Bastion", "Cygnus",
    "Drayden", "Ember", "Fulcrum", "Galatea", "Hyperion", "Ionia", "Juniper", "Koronis",
];

static STATION_SECOND: &[&str] = &[
    "Anchorage", "Terminal", "Reach", "Spire", "Haven", "Platform", "Relay", "Yards", "Gate",
    "Crossing", "Depot", "Ring",
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_system_name_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let name = system_name(&mut rng);
            assert!(name.contains('-'));
            assert!(name.chars().next().unwrap().is_uppercase());
        }
    }

    #[test]
    fn test_system_name_deterministic() {
        let a = system_name(&mut ChaCha8Rng::seed_from_u64(99));
        let b = system_name(&mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_planet_and_satellite_designations() {
        assert_eq!(planet_name("Velshan-412", 0), "Velshan-412 b");
        assert_eq!(planet_name("Velshan-412", 2), "Velshan-412 d");
        assert_eq!(satellite_name("Velshan-412 b", 0), "Velshan-412 b I");
        assert_eq!(satellite_name("Velshan-412 b", 3), "Velshan-412 b IV");
    }

    #[test]
    fn test_station_name_variety() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let names: std::collections::HashSet<String> =
            (0..60).map(|_| station_name(&mut rng)).collect();
        assert!(names.len() > 20);
    }
}
