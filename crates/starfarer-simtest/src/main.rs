//! Starfarer Headless Validation Harness
//!
//! Exercises the universe generator and the mission state machine end to
//! end, entirely in-process: no rendering, no persistence files, no
//! engine.
//!
//! Usage:
//!   cargo run -p starfarer-simtest
//!   cargo run -p starfarer-simtest -- --verbose

use starfarer_missions::persistence::{load_missions, save_missions};
use starfarer_missions::{
    contact_stations, sightseeing_offers, InputBindings, Mission, MissionBoardConfig,
    MissionContext,
};
use starfarer_universe::{
    ObjectKind, OrbitalObjectModel, SectorCoordinates, StarSystemCoordinates, StarSystemInstance,
    Universe, Vec3,
};

const UNIVERSE_SEED: u64 = 42;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn result(name: &str, passed: bool, detail: String) -> TestResult {
    TestResult {
        name: name.to_string(),
        passed,
        detail,
    }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Starfarer Validation Harness ===\n");

    let universe = Universe::new(UNIVERSE_SEED);
    let mut results = Vec::new();

    // 1. Generator determinism and addressing
    results.extend(validate_generation(&universe, verbose));

    // 2. Galactic distances and neighbor enumeration
    results.extend(validate_distances(&universe, verbose));

    // 3. Fly-by state machine walkthrough
    results.extend(validate_fly_by(&universe, verbose));

    // 4. Mission board offers
    results.extend(validate_board(&universe, verbose));

    // 5. Save/load round trip
    results.extend(validate_persistence(&universe, verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── Shared probes ───────────────────────────────────────────────────────

fn coords(x: i64, index: u32) -> StarSystemCoordinates {
    StarSystemCoordinates::new(SectorCoordinates::new(x, 0, 0), index)
}

fn find_station(universe: &Universe) -> Option<OrbitalObjectModel> {
    for x in 0..40 {
        let model = universe.generate_system(coords(x, 0));
        let station = model.stations().next().cloned();
        if station.is_some() {
            return station;
        }
    }
    None
}

fn find_star_system(universe: &Universe) -> Option<StarSystemCoordinates> {
    (0..12)
        .map(|index| coords(0, index))
        .find(|c| universe.generate_system(*c).primary().kind == ObjectKind::Star)
}

// ── 1. Generator determinism ────────────────────────────────────────────

fn validate_generation(universe: &Universe, verbose: bool) -> Vec<TestResult> {
    let mut results = Vec::new();

    let c = coords(3, 1);
    let a = universe.generate_system(c);
    let b = universe.generate_system(c);
    results.push(result(
        "generation determinism",
        a == b,
        format!("{} objects in {}", a.objects.len(), a.name),
    ));

    let mut total_objects = 0;
    let mut all_resolve = true;
    for x in 0..10 {
        let model = universe.generate_system(coords(x, 0));
        let ids: Vec<_> = model.objects.iter().map(|o| o.id).collect();
        total_objects += ids.len();
        let instance = StarSystemInstance::materialize(model, 0.0);
        if ids.iter().any(|id| instance.resolve(*id).is_err()) {
            all_resolve = false;
        }
    }
    results.push(result(
        "id resolution",
        all_resolve,
        format!("{} generated ids resolved across 10 systems", total_objects),
    ));

    if verbose {
        let model = universe.generate_system(c);
        for object in &model.objects {
            println!(
                "    {:?} {} ({}), r={:.0} km",
                object.id.path.category, object.name, object.kind, object.radius_km
            );
        }
    }

    results
}

// ── 2. Distances ────────────────────────────────────────────────────────

fn validate_distances(universe: &Universe, verbose: bool) -> Vec<TestResult> {
    let mut results = Vec::new();

    let center = coords(0, 0);
    let neighbors = universe.systems_in_radius(center, 30.0);
    let in_range = neighbors.iter().all(|(_, d)| *d <= 30.0);
    results.push(result(
        "neighbor enumeration",
        !neighbors.is_empty() && in_range,
        format!("{} systems within 30 ly", neighbors.len()),
    ));

    let symmetric = neighbors.iter().take(5).all(|(c, d)| {
        (universe.distance_ly(center, *c) - d).abs() < 1e-9
            && (universe.distance_ly(*c, center) - d).abs() < 1e-9
    });
    results.push(result(
        "distance symmetry",
        symmetric,
        "distance_ly agrees with enumeration both ways".to_string(),
    ));

    if verbose {
        for (c, d) in neighbors.iter().take(5) {
            println!("    {} at {:.1} ly", c, d);
        }
    }

    results
}

// ── 3. Fly-by walkthrough ───────────────────────────────────────────────

fn validate_fly_by(universe: &Universe, verbose: bool) -> Vec<TestResult> {
    let mut results = Vec::new();

    let (station, target_coords) = match (find_station(universe), find_star_system(universe)) {
        (Some(s), Some(t)) => (s, t),
        _ => {
            results.push(result(
                "fly-by setup",
                false,
                "no station or star system in probe range".to_string(),
            ));
            return results;
        }
    };

    let target = universe.generate_system(target_coords).primary().clone();
    let mut mission = Mission::fly_by(universe, station.id, &target);

    let elsewhere = StarSystemInstance::materialize(universe.generate_system(coords(20, 0)), 0.0);
    let ctx = MissionContext::new(universe, &elsewhere, Vec3::ZERO);
    let wrong_system_ok = mission.update(&ctx).is_ok() && !mission.is_completed();
    results.push(result(
        "fly-by wrong system",
        wrong_system_ok,
        "stays incomplete outside the target system".to_string(),
    ));

    let system = StarSystemInstance::materialize(universe.generate_system(target_coords), 0.0);
    let star_pos = match system.resolve(target.id) {
        Ok(star) => star.transform().absolute_position(),
        Err(e) => {
            results.push(result("fly-by resolve", false, e.to_string()));
            return results;
        }
    };
    let radius = target.radius_km;

    let near = MissionContext::new(
        universe,
        &system,
        star_pos + Vec3::new(radius * 2.0, 0.0, 0.0),
    );
    let clear = MissionContext::new(
        universe,
        &system,
        star_pos + Vec3::new(radius * 4.0, 0.0, 0.0),
    );

    let mut fault = None;
    if let Err(e) = mission.update(&near) {
        fault = Some(e);
    }
    let still_running = !mission.is_completed();

    if let Err(e) = mission.update(&clear) {
        fault.get_or_insert(e);
    }
    let completed = mission.is_completed();

    if let Err(e) = mission.update(&near) {
        fault.get_or_insert(e);
    }
    let sticky = mission.is_completed();

    let detail = match &fault {
        Some(e) => format!("update failed: {}", e),
        None => format!(
            "in progress at 2.0r, complete at 4.0r, sticky (target {})",
            target.name
        ),
    };
    results.push(result(
        "fly-by progression",
        fault.is_none() && still_running && completed && sticky,
        detail,
    ));

    if verbose {
        let bindings = InputBindings::default();
        if let Ok(text) = mission.next_task(&clear, &bindings) {
            println!("    next task: {}", text);
        }
        if let Ok(text) = mission.describe(station.id.system, universe) {
            println!("    describe: {}", text);
        }
    }

    results
}

// ── 4. Mission board ────────────────────────────────────────────────────

fn validate_board(universe: &Universe, verbose: bool) -> Vec<TestResult> {
    let mut results = Vec::new();
    let config = MissionBoardConfig::default();

    let station = match find_station(universe) {
        Some(s) => s,
        None => {
            results.push(result(
                "board setup",
                false,
                "no station in probe range".to_string(),
            ));
            return results;
        }
    };

    let offers = sightseeing_offers(universe, &station, 500, &config);
    let stable = offers == sightseeing_offers(universe, &station, 500, &config);
    results.push(result(
        "sightseeing stability",
        stable && offers.len() <= config.max_sightseeing,
        format!("{} offers, stable within bucket 500", offers.len()),
    ));

    let contacts = contact_stations(universe, &station, &config);
    let sorted = contacts
        .windows(2)
        .all(|pair| pair[0].distance_ly <= pair[1].distance_ly);
    let same_faction = contacts
        .iter()
        .all(|c| Some(c.faction) == station.faction);
    results.push(result(
        "contact filtering",
        sorted && same_faction,
        format!("{} same-faction contacts, nearest first", contacts.len()),
    ));

    if verbose {
        for contact in contacts.iter().take(5) {
            println!("    {} at {:.1} ly", contact.name, contact.distance_ly);
        }
    }

    results
}

// ── 5. Persistence ──────────────────────────────────────────────────────

fn validate_persistence(universe: &Universe, verbose: bool) -> Vec<TestResult> {
    let mut results = Vec::new();

    let (station, target_coords) = match (find_station(universe), find_star_system(universe)) {
        (Some(s), Some(t)) => (s, t),
        _ => {
            results.push(result(
                "persistence setup",
                false,
                "no station or star system in probe range".to_string(),
            ));
            return results;
        }
    };
    let target = universe.generate_system(target_coords).primary().clone();
    let missions = vec![Mission::fly_by(universe, station.id, &target)];

    let mut buffer = Vec::new();
    let round_trip = save_missions(&mut buffer, &missions, 321.0)
        .ok()
        .and_then(|_| load_missions(&buffer[..]).ok())
        .map(|loaded| loaded.missions == missions && (loaded.elapsed_hours - 321.0).abs() < 1e-9)
        .unwrap_or(false);
    results.push(result(
        "save/load round trip",
        round_trip,
        format!("{} bytes of JSON", buffer.len()),
    ));

    if verbose {
        if let Ok(json) = serde_json::from_slice::<serde_json::Value>(&buffer) {
            println!("    save: {}", json);
        }
    }

    results
}
