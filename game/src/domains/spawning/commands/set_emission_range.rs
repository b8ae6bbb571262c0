use crate::spawning::Spawning::EmissionRangeChanged;
use crate::spawning::{SpawnerId, Spawning, SpawningDomain, SpawningError};

impl SpawningDomain {
    pub fn set_emission_range(
        &mut self,
        id: SpawnerId,
        start: f32,
        length: f32,
    ) -> Result<impl FnOnce() -> Vec<Spawning> + '_, SpawningError> {
        let spawner = self.get_spawner_mut(id)?;
        let command = move || {
            spawner.set_emission_range(start, length);
            vec![EmissionRangeChanged {
                id,
                range: spawner.emission,
            }]
        };
        Ok(command)
    }
}
