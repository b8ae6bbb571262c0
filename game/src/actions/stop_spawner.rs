use crate::api::{ActionError, Event};
use crate::occur;
use crate::spawning::SpawnerId;
use crate::Game;

impl Game {
    /// Stopping is terminal, the spawner leaves the table or takes its host along.
    pub fn stop_spawner(&mut self, id: SpawnerId) -> Result<Vec<Event>, ActionError> {
        let spawner = self.spawning.get_spawner(id)?;
        if spawner.remove_host {
            let host = spawner.host;
            return self.destroy_host(host);
        }
        let remove_spawner = self.spawning.remove_spawner(id)?;
        Ok(occur![remove_spawner()])
    }
}
