use log::{error, info};

use crate::api::{ActionError, Event};
use crate::spawning::SpawnerId;
use crate::Game;

impl Game {
    pub fn update(&mut self, time: f32) -> Vec<Event> {
        let mut events = vec![];
        for id in self.spawning.get_active_spawners() {
            match self.update_spawner(id, time) {
                Ok(spawner_events) => events.extend(spawner_events),
                Err(error) => error!("Unable to update spawner {:?}, {:?}", id, error),
            }
        }
        events
    }

    fn update_spawner(&mut self, id: SpawnerId, time: f32) -> Result<Vec<Event>, ActionError> {
        let spawner = self.spawning.get_spawner(id)?;
        let can_add_unit = match spawner.team {
            Some(team) => self
                .teaming
                .get_team(team)
                .map(|team| team.can_add_unit())
                .unwrap_or(false),
            None => false,
        };
        if spawner.is_exhausted() || !can_add_unit {
            info!(
                "Spawner {} stopped after {} emissions",
                spawner.unique, spawner.num_emitted
            );
            return self.stop_spawner(id);
        }
        let spawner = self.spawning.get_spawner_mut(id)?;
        if spawner.countdown(time) {
            self.emit_unit(id)
        } else {
            Ok(vec![])
        }
    }
}
