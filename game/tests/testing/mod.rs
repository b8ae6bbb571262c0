#![allow(dead_code)]

use std::collections::HashMap;

use datamap::Datamap;
use game::api::{ActionError, Event};
use game::hosting::{HostId, UniqueId};
use game::math::Random;
use game::spawning::{EmissionRange, SpawnerId, SpawnerSettings, SpawnerState};
use game::teaming::{Health, Prefab, TeamId, Teaming, TeamingDomain, TeamingError, UnitId};
use game::Game;

pub const ORIGIN: [f32; 3] = [0.0, 0.0, 0.0];
pub const NO_SCALE: [f32; 3] = [0.0, 0.0, 0.0];

pub fn at(x: f32, y: f32, z: f32) -> [f32; 3] {
    [x, y, z]
}

pub fn health_prefab(name: &str, max: f32) -> Prefab {
    Prefab::new(name, move || Box::new(Health::new(max)))
}

pub struct TeamingTestScenario {
    pub domain: TeamingDomain,
    teams: HashMap<String, TeamId>,
    units: HashMap<String, UnitId>,
    prefabs: HashMap<String, Prefab>,
    hosts: usize,
    current_result: Result<Vec<Teaming>, TeamingError>,
}

impl TeamingTestScenario {
    pub fn new() -> Self {
        Self {
            domain: TeamingDomain::default(),
            teams: Default::default(),
            units: Default::default(),
            prefabs: Default::default(),
            hosts: 0,
            current_result: Ok(vec![]),
        }
    }

    pub fn team(&self, name: &str) -> TeamId {
        *self.teams.get(name).unwrap()
    }

    pub fn unit(&self, name: &str) -> UnitId {
        *self.units.get(name).unwrap()
    }

    pub fn prefab(&self, name: &str) -> Prefab {
        self.prefabs.get(name).unwrap().clone()
    }

    pub fn given_prefab(mut self, name: &str, health: f32) -> Self {
        self.prefabs
            .insert(name.to_string(), health_prefab(name, health));
        self
    }

    pub fn given_team(mut self, name: &str, max_units: usize) -> Self {
        self.hosts += 1;
        let host = HostId(self.hosts);
        let (id, create_team) = self
            .domain
            .create_team(host, UniqueId::new(name), max_units)
            .unwrap();
        create_team();
        self.teams.insert(name.to_string(), id);
        self
    }

    pub fn given_team_prefabs(mut self, team: &str, prefabs: &[&str]) -> Self {
        let team = self.team(team);
        for prefab in prefabs {
            let prefab = self.prefab(prefab);
            let register_prefab = self.domain.register_prefab(team, prefab).unwrap();
            register_prefab();
        }
        self
    }

    pub fn given_enemies(mut self, team: &str, enemies: &[&str]) -> Self {
        let team = self.team(team);
        let enemies = enemies.iter().map(|enemy| self.team(enemy)).collect();
        let set_enemies = self.domain.set_enemies(team, enemies).unwrap();
        set_enemies();
        self
    }

    pub fn given_unit(mut self, team: &str, unit: &str, prefab: &str, position: [f32; 3]) -> Self {
        let team = self.team(team);
        let prefab = self.prefab(prefab);
        let instance = self.domain.instantiate(&prefab, position);
        self.units.insert(unit.to_string(), instance.id);
        let add_unit = self.domain.add_unit(team, instance).unwrap();
        add_unit();
        self
    }

    pub fn when_add_unit(mut self, team: &str, unit: &str, prefab: &str) -> Self {
        let team = self.team(team);
        let prefab = self.prefab(prefab);
        let instance = self.domain.instantiate(&prefab, ORIGIN);
        self.units.insert(unit.to_string(), instance.id);
        self.current_result = self
            .domain
            .add_unit(team, instance)
            .map(|add_unit| add_unit());
        self
    }

    pub fn when_register_prefab(mut self, team: &str, prefab: &str) -> Self {
        let team = self.team(team);
        let prefab = self.prefab(prefab);
        self.current_result = self
            .domain
            .register_prefab(team, prefab)
            .map(|register_prefab| register_prefab());
        self
    }

    pub fn when_destroy_unit(mut self, team: &str, unit: &str) -> Self {
        let team = self.team(team);
        let unit = self.unit(unit);
        self.current_result = self
            .domain
            .destroy_unit(team, unit)
            .map(|destroy_unit| destroy_unit());
        self
    }

    pub fn then_events<F>(self, expected: F) -> Self
    where
        F: FnOnce(&Self) -> Vec<Teaming>,
    {
        let expected = Ok(expected(&self));
        assert_eq!(self.current_result, expected);
        self
    }

    pub fn then_error<F>(self, expected: F) -> Self
    where
        F: FnOnce(&Self) -> TeamingError,
    {
        let expected = Err(expected(&self));
        assert_eq!(self.current_result, expected);
        self
    }

    pub fn then_units_should_be(self, team: &str, expected: &[&str]) -> Self {
        let team = self.domain.get_team(self.team(team)).unwrap();
        let prefabs: Vec<&str> = team.units.iter().map(|unit| unit.prefab.as_str()).collect();
        assert_eq!(prefabs, expected);
        self
    }

    pub fn then_number_units_should_be(self, team: &str, expected: usize) -> Self {
        let team = self.domain.get_team(self.team(team)).unwrap();
        assert_eq!(team.number_units, expected);
        self
    }

    pub fn then_known_prefabs_should_be(self, team: &str, expected: usize) -> Self {
        let team = self.domain.get_team(self.team(team)).unwrap();
        assert_eq!(team.prefabs.len(), expected);
        self
    }
}

pub struct SpawnerSetup {
    pub team: Option<&'static str>,
    pub prefabs: Vec<&'static str>,
    pub max_units: usize,
    pub emission: EmissionRange,
    pub remove_host: bool,
}

impl Default for SpawnerSetup {
    fn default() -> Self {
        Self {
            team: None,
            prefabs: vec![],
            max_units: usize::MAX,
            emission: EmissionRange::new(0.0, 0.0),
            remove_host: false,
        }
    }
}

pub struct GameTestScenario {
    pub game: Game,
    hosts: HashMap<String, HostId>,
    spawners: HashMap<String, SpawnerId>,
    events: Vec<Event>,
    current_action_result: Result<Vec<Event>, ActionError>,
}

impl GameTestScenario {
    pub fn new() -> Self {
        Self {
            game: Game::with_random(Random::with_seed(42)),
            hosts: Default::default(),
            spawners: Default::default(),
            events: vec![],
            current_action_result: Ok(vec![]),
        }
    }

    pub fn host(&self, name: &str) -> HostId {
        *self.hosts.get(name).unwrap()
    }

    pub fn team(&self, host: &str) -> TeamId {
        self.game.teaming.get_team_by_host(self.host(host)).unwrap().id
    }

    pub fn spawner(&self, host: &str) -> SpawnerId {
        *self.spawners.get(host).unwrap()
    }

    pub fn given_prefab(mut self, name: &str, health: f32) -> Self {
        self.game.known.register_prefab(health_prefab(name, health));
        self
    }

    pub fn given_host(mut self, name: &str, position: [f32; 3], scale: [f32; 3]) -> Self {
        let (id, create_host) = self
            .game
            .hosting
            .create_host(name, UniqueId::new(name), position, scale)
            .unwrap();
        create_host();
        self.hosts.insert(name.to_string(), id);
        self
    }

    pub fn given_team(mut self, host: &str, max_units: usize) -> Self {
        let host = self.host(host);
        let unique = self.game.hosting.get_host(host).unwrap().unique.clone();
        let (_, create_team) = self
            .game
            .teaming
            .create_team(host, unique, max_units)
            .unwrap();
        create_team();
        self
    }

    pub fn given_spawner(mut self, host: &str, setup: SpawnerSetup) -> Self {
        let host_id = self.host(host);
        let unique = self.game.hosting.get_host(host_id).unwrap().unique.clone();
        let settings = SpawnerSettings {
            team: setup.team.map(|team| self.team(team)),
            prefabs: setup
                .prefabs
                .iter()
                .map(|name| self.game.known.prefabs.find(name).unwrap().clone())
                .collect(),
            max_units: setup.max_units,
            emission: setup.emission,
            remove_host: setup.remove_host,
        };
        let (id, create_spawner) = self
            .game
            .spawning
            .create_spawner(host_id, unique, settings)
            .unwrap();
        create_spawner();
        self.spawners.insert(host.to_string(), id);
        self
    }

    pub fn given_active_spawner(self, host: &str, setup: SpawnerSetup) -> Self {
        self.given_spawner(host, setup).when_activate_spawner(host)
    }

    pub fn when_activate_spawner(mut self, host: &str) -> Self {
        let id = self.spawner(host);
        self.current_action_result = self.game.activate_spawner(id);
        self
    }

    pub fn when_update(mut self, ticks: usize, time: f32) -> Self {
        for _ in 0..ticks {
            let events = self.game.update(time);
            self.events.extend(events);
        }
        self
    }

    pub fn when_destroy_unit(mut self, host: &str, index: usize) -> Self {
        let team = self.team(host);
        let unit = self.game.teaming.get_team(team).unwrap().units[index].id;
        let destroy_unit = self.game.teaming.destroy_unit(team, unit).unwrap();
        destroy_unit();
        self
    }

    pub fn when_save_and_load(mut self) -> Self {
        let mut datamap = Datamap::new();
        assert!(self.game.save_static_objects(&mut datamap).is_success());
        assert!(self.game.load_static_objects(&datamap).is_success());
        self
    }

    pub fn then_action_should_fail<F>(self, expected: F) -> Self
    where
        F: FnOnce(&Self) -> ActionError,
    {
        let expected = Err(expected(&self));
        assert_eq!(self.current_action_result, expected);
        self
    }

    pub fn then_action_should_succeed(self) -> Self {
        assert!(
            self.current_action_result.is_ok(),
            "{:?}",
            self.current_action_result
        );
        self
    }

    pub fn then_units_count_should_be(self, host: &str, expected: usize) -> Self {
        let team = self.game.teaming.get_team(self.team(host)).unwrap();
        assert_eq!(team.units.len(), expected);
        self
    }

    pub fn then_emitted_should_be(self, host: &str, expected: usize) -> Self {
        let spawner = self.game.spawning.get_spawner(self.spawner(host)).unwrap();
        assert_eq!(spawner.num_emitted, expected);
        self
    }

    pub fn then_spawner_should_be_removed(self, host: &str) -> Self {
        let spawner = self.spawner(host);
        assert!(self.game.spawning.get_spawner(spawner).is_err());
        self
    }

    pub fn then_spawner_should_be_active(self, host: &str) -> Self {
        let spawner = self.game.spawning.get_spawner(self.spawner(host)).unwrap();
        assert_eq!(spawner.state, SpawnerState::Active);
        self
    }

    pub fn then_host_should_be_removed(self, host: &str) -> Self {
        assert!(self.game.hosting.get_host(self.host(host)).is_err());
        self
    }

    pub fn then_units_should_stay_around(self, host: &str, owner: &str) -> Self {
        let origin = self.game.hosting.get_host(self.host(host)).unwrap();
        let team = self.game.teaming.get_team(self.team(owner)).unwrap();
        for unit in &team.units {
            for axis in 0..3 {
                let offset = (unit.position[axis] - origin.position[axis]).abs();
                assert!(offset <= origin.scale[axis].abs(), "{:?}", unit);
            }
        }
        self
    }
}
