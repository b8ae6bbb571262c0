use crate::math::Random;
use crate::spawning::Spawning::UnitEmitted;
use crate::spawning::{SpawnerId, SpawnerState, Spawning, SpawningDomain, SpawningError};
use crate::teaming::Prefab;

impl SpawningDomain {
    pub fn choose_prefab(
        &self,
        id: SpawnerId,
        random: &mut Random,
    ) -> Result<Prefab, SpawningError> {
        let spawner = self.get_spawner(id)?;
        random
            .choose(&spawner.prefabs)
            .cloned()
            .ok_or(SpawningError::NoPrefabs { id })
    }

    /// Counts one emission and draws the delay until the next one.
    pub fn emit(
        &mut self,
        id: SpawnerId,
        random: &mut Random,
    ) -> Result<impl FnOnce() -> Vec<Spawning> + '_, SpawningError> {
        let spawner = self.get_spawner_mut(id)?;
        if spawner.state != SpawnerState::Active {
            return Err(SpawningError::SpawnerNotActive { id });
        }
        let delay = spawner.emission.sample(random);
        let command = move || {
            spawner.num_emitted += 1;
            spawner.time_to_emission = delay;
            vec![UnitEmitted {
                id,
                num_emitted: spawner.num_emitted,
                time_to_emission: delay,
            }]
        };
        Ok(command)
    }
}
