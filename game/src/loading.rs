use log::{error, info, warn};

use crate::api::{ActionError, Event};
use crate::config::SceneConfig;
use crate::hosting::{HostId, UniqueId};
use crate::spawning::{SpawnerSettings, SpawningError};
use crate::teaming::{Prefab, TeamId};
use crate::Game;

impl Game {
    /// Builds hosts with their teams, then links enemies, then starts spawners.
    ///
    /// Spawners naming an unknown team or failing activation are dropped
    /// without stopping the scene.
    pub fn load_scene(&mut self, scene: &SceneConfig) -> Result<Vec<Event>, ActionError> {
        let mut events = vec![];
        let mut hosts = vec![];
        for config in &scene.hosts {
            let unique = UniqueId::new(&config.unique);
            let (host, create_host) =
                self.hosting
                    .create_host(&config.name, unique.clone(), config.position, config.scale)?;
            events.push(create_host().into());
            if let Some(team) = &config.team {
                let (_, create_team) = self.teaming.create_team(host, unique, team.max_units)?;
                events.push(create_team().into());
            }
            hosts.push(host);
        }

        for (config, host) in scene.hosts.iter().zip(hosts.iter()) {
            let team_config = match &config.team {
                Some(team) if !team.enemies.is_empty() => team,
                _ => continue,
            };
            let team = self.teaming.get_team_by_host(*host)?.id;
            let mut enemies = vec![];
            for enemy in &team_config.enemies {
                match self.find_team(enemy) {
                    Some(enemy) => enemies.push(enemy),
                    None => warn!("Enemy team {} of {} not found", enemy, config.unique),
                }
            }
            let set_enemies = self.teaming.set_enemies(team, enemies)?;
            events.push(set_enemies().into());
        }

        for (config, host) in scene.hosts.iter().zip(hosts.iter()) {
            let spawner = match &config.spawner {
                Some(spawner) => spawner,
                None => continue,
            };
            let team = match &spawner.team {
                Some(unique) => match self.find_team(unique) {
                    Some(team) => Some(team),
                    None => {
                        let error = SpawningError::TeamNotFoundByUnique {
                            host: *host,
                            unique: UniqueId::new(unique),
                        };
                        error!("Spawner {} not created, {:?}", config.unique, error);
                        continue;
                    }
                },
                None => None,
            };
            let mut prefabs = vec![];
            for name in &spawner.prefabs {
                match self.known.prefabs.find(name) {
                    Ok(prefab) => prefabs.push(Prefab::clone(prefab)),
                    Err(error) => error!("Spawner {} prefab skipped, {:?}", config.unique, error),
                }
            }
            let settings = SpawnerSettings {
                team,
                prefabs,
                max_units: spawner.max_units,
                emission: spawner.emission_time_range,
                remove_host: spawner.remove_game_object,
            };
            let unique = UniqueId::new(&config.unique);
            let (id, create_spawner) = self.spawning.create_spawner(*host, unique, settings)?;
            events.push(create_spawner().into());
            if let Ok(activation) = self.activate_spawner(id) {
                events.extend(activation);
            }
        }
        info!(
            "Scene loaded: {} hosts, {} teams, {} spawners",
            self.hosting.hosts.len(),
            self.teaming.teams.len(),
            self.spawning.spawners.len()
        );
        Ok(events)
    }

    fn find_team(&self, unique: &str) -> Option<TeamId> {
        let host: HostId = self.hosting.find_host(&UniqueId::new(unique)).ok()?.id;
        self.teaming.get_team_by_host(host).ok().map(|team| team.id)
    }
}
