use crate::teaming::Teaming::PrefabRegistered;
use crate::teaming::{Prefab, TeamId, Teaming, TeamingDomain, TeamingError};

impl TeamingDomain {
    /// Registering a name twice keeps the first prefab.
    pub fn register_prefab(
        &mut self,
        id: TeamId,
        prefab: Prefab,
    ) -> Result<impl FnOnce() -> Vec<Teaming> + '_, TeamingError> {
        let team = self.get_team_mut(id)?;
        let command = move || {
            let name = prefab.name.clone();
            if team.prefabs.insert(name.clone(), prefab) {
                vec![PrefabRegistered {
                    team: id,
                    prefab: name,
                }]
            } else {
                vec![]
            }
        };
        Ok(command)
    }
}
