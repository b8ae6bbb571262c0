use crate::spawning::Spawning::SpawnerRemoved;
use crate::spawning::SpawningError::SpawnerNotFound;
use crate::spawning::{SpawnerId, Spawning, SpawningDomain, SpawningError};

impl SpawningDomain {
    pub fn remove_spawner(
        &mut self,
        id: SpawnerId,
    ) -> Result<impl FnOnce() -> Vec<Spawning> + '_, SpawningError> {
        let index = self
            .spawners
            .iter()
            .position(|spawner| spawner.id == id)
            .ok_or(SpawnerNotFound { id })?;
        let command = move || {
            let spawner = self.spawners.remove(index);
            vec![SpawnerRemoved {
                id,
                host: spawner.host,
            }]
        };
        Ok(command)
    }
}
