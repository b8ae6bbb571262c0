use crate::collections::Dictionary;
use crate::hosting::{HostId, UniqueId};
use crate::teaming::Teaming::TeamCreated;
use crate::teaming::{Team, TeamId, Teaming, TeamingDomain, TeamingError};

impl TeamingDomain {
    pub fn create_team(
        &mut self,
        host: HostId,
        unique: UniqueId,
        max_units: usize,
    ) -> Result<(TeamId, impl FnOnce() -> Vec<Teaming> + '_), TeamingError> {
        if self.get_team_by_host(host).is_ok() {
            return Err(TeamingError::TeamAlreadyAttached { host });
        }
        let id = self.teams_id.introduce().one(TeamId);
        let team = Team {
            id,
            host,
            unique,
            enemies: vec![],
            max_units,
            number_units: 0,
            prefabs: Dictionary::default(),
            units: vec![],
        };
        let command = move || {
            self.teams_id.register(id.0);
            self.teams.push(team);
            vec![TeamCreated {
                id,
                host,
                max_units,
            }]
        };
        Ok((id, command))
    }
}
