use datamap::{Datamap, DatamapError};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::spawning::{SpawnerId, SpawningDomain, SpawningError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Restoration {
    Restored { num_emitted: usize },
    /// Counter absent from the store, the spawner has to stop.
    Missing,
}

impl SpawningDomain {
    pub fn save_spawner(&self, id: SpawnerId, datamap: &mut Datamap) -> Result<(), SpawningError> {
        let spawner = self.get_spawner(id)?;
        let prefix = spawner.prefix();
        datamap.insert(prefix.key("_numEmited"), spawner.num_emitted)?;
        Ok(())
    }

    pub fn load_spawner(
        &mut self,
        id: SpawnerId,
        datamap: &Datamap,
    ) -> Result<Restoration, SpawningError> {
        let spawner = self.get_spawner_mut(id)?;
        spawner.time_to_emission = 0.0;
        let key = spawner.prefix().key("_numEmited");
        match datamap.get::<usize>(&key) {
            Ok(num_emitted) => {
                spawner.num_emitted = num_emitted;
                Ok(Restoration::Restored { num_emitted })
            }
            Err(error @ DatamapError::KeyNotFound { .. })
            | Err(error @ DatamapError::Malformed { .. }) => {
                warn!("Unable to restore spawner {}, {:?}", spawner.unique, error);
                Ok(Restoration::Missing)
            }
            Err(error) => Err(error.into()),
        }
    }
}
