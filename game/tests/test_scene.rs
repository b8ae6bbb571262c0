use game::api::Event;
use game::config::SceneConfig;
use game::hosting::UniqueId;
use game::spawning::{SpawnerState, Spawning, SpawningError};

use crate::testing::GameTestScenario;

mod testing;

const SCENE: &str = r#"{
    "hosts": [
        {
            "name": "Red camp",
            "unique": "red",
            "position": [0.0, 0.0, 0.0],
            "team": { "max_units": 5, "enemies": ["blue", "nowhere"] }
        },
        {
            "name": "Blue camp",
            "unique": "blue",
            "position": [40.0, 0.0, 0.0],
            "team": { "enemies": ["red"] }
        },
        {
            "name": "Red gate",
            "unique": "red-gate",
            "position": [2.0, 0.0, 0.0],
            "scale": [1.0, 0.0, 1.0],
            "spawner": {
                "team": "red",
                "prefabs": ["orc", "dragon"],
                "max_units": 3,
                "emission_time_range": { "start": 0.5, "length": 1.0 }
            }
        },
        {
            "name": "Broken gate",
            "unique": "broken-gate",
            "spawner": { "prefabs": ["orc"] }
        }
    ]
}"#;

#[test]
fn test_parse_scene_defaults() {
    let scene = SceneConfig::from_json(SCENE).unwrap();

    assert_eq!(scene.hosts.len(), 4);
    let blue = scene.hosts[1].team.as_ref().unwrap();
    assert_eq!(blue.max_units, usize::MAX);
    assert_eq!(scene.hosts[1].scale, [1.0, 1.0, 1.0]);
    let gate = scene.hosts[3].spawner.as_ref().unwrap();
    assert_eq!(gate.max_units, usize::MAX);
    assert_eq!(gate.emission_time_range.start(), 10.0);
    assert!(!gate.remove_game_object);
}

#[test]
fn test_parse_broken_scene() {
    assert!(SceneConfig::from_json(r#"{"hosts": [{"unique": "nameless"}]}"#).is_err());
}

#[test]
fn test_load_scene() {
    let scene = SceneConfig::from_json(SCENE).unwrap();
    let mut scenario = GameTestScenario::new().given_prefab("orc", 10.0);

    scenario.game.load_scene(&scene).unwrap();

    let game = &scenario.game;
    assert_eq!(game.hosting.hosts.len(), 4);
    assert_eq!(game.teaming.teams.len(), 2);
    let red = game.hosting.find_host(&UniqueId::new("red")).unwrap().id;
    let blue = game.hosting.find_host(&UniqueId::new("blue")).unwrap().id;
    let red = game.teaming.get_team_by_host(red).unwrap();
    let blue = game.teaming.get_team_by_host(blue).unwrap();
    assert_eq!(red.max_units, 5);
    assert_eq!(red.enemies, vec![blue.id]);
    assert_eq!(blue.enemies, vec![red.id]);
    assert!(red.prefabs.contains("orc"));

    assert_eq!(game.spawning.spawners.len(), 1);
    let spawner = &game.spawning.spawners[0];
    assert_eq!(spawner.unique, UniqueId::new("red-gate"));
    assert_eq!(spawner.state, SpawnerState::Active);
    assert_eq!(spawner.prefabs.len(), 1);
    assert_eq!(spawner.team, Some(red.id));
}

#[test]
fn test_scene_spawns_into_team() {
    let scene = SceneConfig::from_json(SCENE).unwrap();
    let mut scenario = GameTestScenario::new().given_prefab("orc", 10.0);
    scenario.game.load_scene(&scene).unwrap();

    for _ in 0..200 {
        scenario.game.update(0.1);
    }

    let red = scenario.game.hosting.find_host(&UniqueId::new("red")).unwrap().id;
    let red = scenario.game.teaming.get_team_by_host(red).unwrap();
    assert_eq!(red.units.len(), 3);
    assert!(scenario.game.spawning.spawners.is_empty());
}

#[test]
fn test_scene_with_conflicting_hosts() {
    let scene = SceneConfig::from_json(
        r#"{"hosts": [{"name": "a", "unique": "same"}, {"name": "b", "unique": "same"}]}"#,
    )
    .unwrap();
    let mut scenario = GameTestScenario::new();

    assert!(scenario.game.load_scene(&scene).is_err());
}

#[test]
fn test_scene_spawner_with_unknown_team() {
    let scene = SceneConfig::from_json(
        r#"{"hosts": [
            {"name": "Red camp", "unique": "red", "team": {}},
            {"name": "Lost gate", "unique": "lost-gate", "spawner": {"team": "nowhere", "prefabs": ["orc"]}},
            {"name": "Red gate", "unique": "red-gate", "spawner": {"team": "red", "prefabs": ["orc"]}}
        ]}"#,
    )
    .unwrap();
    let mut scenario = GameTestScenario::new().given_prefab("orc", 10.0);

    let events = scenario.game.load_scene(&scene).unwrap();

    let game = &scenario.game;
    let lost = game.hosting.find_host(&UniqueId::new("lost-gate")).unwrap().id;
    assert_eq!(
        game.spawning.get_spawner_by_host(lost).map(|spawner| spawner.id),
        Err(SpawningError::SpawnerNotFoundByHost { host: lost })
    );
    let created: Vec<_> = events
        .iter()
        .flat_map(|event| match event {
            Event::Spawning(events) => events.iter().collect::<Vec<&Spawning>>(),
            _ => vec![],
        })
        .filter_map(|event| match event {
            Spawning::SpawnerCreated { host, .. } => Some(*host),
            _ => None,
        })
        .collect();
    let red_gate = game.hosting.find_host(&UniqueId::new("red-gate")).unwrap().id;
    assert_eq!(created, vec![red_gate]);
    assert_eq!(game.spawning.spawners.len(), 1);
}
