use crate::spawning::Spawning::SpawnerActivated;
use crate::spawning::{SpawnerId, SpawnerState, Spawning, SpawningDomain, SpawningError};
use crate::teaming::TeamId;

impl SpawningDomain {
    /// Checks the spawner configuration, the existence of the team is up to the caller.
    pub fn validate_spawner(&self, id: SpawnerId) -> Result<TeamId, SpawningError> {
        let spawner = self.get_spawner(id)?;
        let team = spawner.team.ok_or(SpawningError::TeamNotAssigned { id })?;
        if spawner.prefabs.is_empty() {
            return Err(SpawningError::NoPrefabs { id });
        }
        Ok(team)
    }

    pub fn activate_spawner(
        &mut self,
        id: SpawnerId,
    ) -> Result<impl FnOnce() -> Vec<Spawning> + '_, SpawningError> {
        let team = self.validate_spawner(id)?;
        let spawner = self.get_spawner_mut(id)?;
        let command = move || {
            spawner.state = SpawnerState::Active;
            vec![SpawnerActivated { id, team }]
        };
        Ok(command)
    }
}
