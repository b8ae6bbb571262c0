use crate::hosting::HostId;
use crate::spawning::{Spawner, SpawnerId, SpawnerState, SpawningDomain, SpawningError};

impl SpawningDomain {
    pub fn get_spawner(&self, id: SpawnerId) -> Result<&Spawner, SpawningError> {
        self.spawners
            .iter()
            .find(|spawner| spawner.id == id)
            .ok_or(SpawningError::SpawnerNotFound { id })
    }

    pub fn get_spawner_mut(&mut self, id: SpawnerId) -> Result<&mut Spawner, SpawningError> {
        self.spawners
            .iter_mut()
            .find(|spawner| spawner.id == id)
            .ok_or(SpawningError::SpawnerNotFound { id })
    }

    pub fn get_spawner_by_host(&self, host: HostId) -> Result<&Spawner, SpawningError> {
        self.spawners
            .iter()
            .find(|spawner| spawner.host == host)
            .ok_or(SpawningError::SpawnerNotFoundByHost { host })
    }

    pub fn get_active_spawners(&self) -> Vec<SpawnerId> {
        self.spawners
            .iter()
            .filter(|spawner| spawner.state == SpawnerState::Active)
            .map(|spawner| spawner.id)
            .collect()
    }
}
