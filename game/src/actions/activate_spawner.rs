use log::error;

use crate::api::{ActionError, Event};
use crate::spawning::{SpawnerId, SpawningError};
use crate::Game;

impl Game {
    /// Validates the spawner and registers its prefabs with the team.
    ///
    /// A spawner that fails validation is removed.
    pub fn activate_spawner(&mut self, id: SpawnerId) -> Result<Vec<Event>, ActionError> {
        match self.prepare_spawner(id) {
            Ok(events) => Ok(events),
            Err(error) => {
                let unique = self
                    .spawning
                    .get_spawner(id)
                    .map(|spawner| spawner.unique.to_string())
                    .unwrap_or_default();
                error!(
                    "Unable to activate spawner {}, {:?}, spawner was removed",
                    unique, error
                );
                if let Ok(remove_spawner) = self.spawning.remove_spawner(id) {
                    remove_spawner();
                }
                Err(error)
            }
        }
    }

    fn prepare_spawner(&mut self, id: SpawnerId) -> Result<Vec<Event>, ActionError> {
        let team = self.spawning.validate_spawner(id)?;
        if self.teaming.get_team(team).is_err() {
            return Err(SpawningError::TeamNotFound { id, team }.into());
        }
        let prefabs = self.spawning.get_spawner(id)?.prefabs.clone();
        let mut events = vec![];
        for prefab in prefabs {
            let register_prefab = self.teaming.register_prefab(team, prefab)?;
            events.push(register_prefab().into());
        }
        let activate_spawner = self.spawning.activate_spawner(id)?;
        events.push(activate_spawner().into());
        Ok(events)
    }
}
