use std::env;
use std::process::exit;

use datamap::Storage;
use game::config::SceneConfig;
use game::teaming::{Health, Prefab};
use log::{error, info};
use server::{LocalServer, ServerError, QUICKSAVE_SLOT};

const FRAME_TIME: f32 = 1.0 / 30.0;

fn prefabs() -> Vec<Prefab> {
    vec![
        Prefab::new("orc", || Box::new(Health::new(30.0))),
        Prefab::new("goblin", || Box::new(Health::new(12.0))),
        Prefab::new("scout", || Box::new(())),
    ]
}

fn run(scene: &str, database: &str, ticks: usize) -> Result<(), ServerError> {
    let scene = SceneConfig::from_file(scene)?;
    let storage = Storage::open(database)?;
    let mut server = LocalServer::startup(&scene, storage, prefabs())?;
    let events = server.run(ticks, FRAME_TIME);
    info!("{} ticks done, {} events occurred", ticks, events);
    let report = server.quicksave()?;
    info!(
        "Quicksave to '{}': {} components, success {}",
        database,
        report.results.len(),
        report.is_success()
    );
    for team in &server.game.teaming.teams {
        info!(
            "Team {}: {} units, {} admissions",
            team.unique,
            team.units.len(),
            team.number_units
        );
    }
    info!("Slot dump:\n{}", server.export(QUICKSAVE_SLOT)?);
    info!("Metrics:\n{}", server.gather_metrics()?);
    Ok(())
}

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    let scene = args.get(1).map(String::as_str).unwrap_or("./assets/scene.json");
    let database = args.get(2).map(String::as_str).unwrap_or("./assets/saves.sqlite");
    let ticks = args
        .get(3)
        .and_then(|ticks| ticks.parse().ok())
        .unwrap_or(600);
    info!("Scene: {}, database: {}, ticks: {}", scene, database, ticks);
    if let Err(error) = run(scene, database, ticks) {
        error!("Server failed, {:?}", error);
        exit(1);
    }
    info!("Bye!");
}
