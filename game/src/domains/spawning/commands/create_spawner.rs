use log::error;

use crate::hosting::{HostId, UniqueId};
use crate::spawning::Spawning::SpawnerCreated;
use crate::spawning::{
    Spawner, SpawnerId, SpawnerSettings, SpawnerState, Spawning, SpawningDomain, SpawningError,
};

impl SpawningDomain {
    pub fn create_spawner(
        &mut self,
        host: HostId,
        unique: UniqueId,
        settings: SpawnerSettings,
    ) -> Result<(SpawnerId, impl FnOnce() -> Vec<Spawning> + '_), SpawningError> {
        if self.get_spawner_by_host(host).is_ok() {
            error!(
                "Too many spawners on {}, only one is allowed, new one rejected",
                unique
            );
            return Err(SpawningError::SpawnerAlreadyAttached { host });
        }
        let id = self.spawners_id.introduce().one(SpawnerId);
        let spawner = Spawner {
            id,
            host,
            unique,
            team: settings.team,
            prefabs: settings.prefabs,
            max_units: settings.max_units,
            emission: settings.emission,
            remove_host: settings.remove_host,
            time_to_emission: 0.0,
            num_emitted: 0,
            state: SpawnerState::Inactive,
        };
        let command = move || {
            self.spawners_id.register(id.0);
            self.spawners.push(spawner);
            vec![SpawnerCreated { id, host }]
        };
        Ok((id, command))
    }
}
