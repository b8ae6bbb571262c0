use crate::hosting::HostId;
use crate::teaming::{Team, TeamId, TeamingDomain, TeamingError, Unit, UnitId};

impl TeamingDomain {
    pub fn get_team(&self, id: TeamId) -> Result<&Team, TeamingError> {
        self.teams
            .iter()
            .find(|team| team.id == id)
            .ok_or(TeamingError::TeamNotFound { id })
    }

    pub fn get_team_mut(&mut self, id: TeamId) -> Result<&mut Team, TeamingError> {
        self.teams
            .iter_mut()
            .find(|team| team.id == id)
            .ok_or(TeamingError::TeamNotFound { id })
    }

    pub fn get_team_by_host(&self, host: HostId) -> Result<&Team, TeamingError> {
        self.teams
            .iter()
            .find(|team| team.host == host)
            .ok_or(TeamingError::TeamNotFoundByHost { host })
    }

    pub fn get_unit(&self, team: TeamId, unit: UnitId) -> Result<&Unit, TeamingError> {
        self.get_team(team)?
            .units
            .iter()
            .find(|candidate| candidate.id == unit)
            .ok_or(TeamingError::UnitNotFound { team, unit })
    }
}
