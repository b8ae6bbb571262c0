use crate::teaming::Teaming::{TeamDestroyed, UnitDestroyed};
use crate::teaming::TeamingError::TeamNotFound;
use crate::teaming::{TeamId, Teaming, TeamingDomain, TeamingError};

impl TeamingDomain {
    pub fn destroy_team(
        &mut self,
        id: TeamId,
    ) -> Result<impl FnOnce() -> Vec<Teaming> + '_, TeamingError> {
        let index = self
            .teams
            .iter()
            .position(|team| team.id == id)
            .ok_or(TeamNotFound { id })?;
        let command = move || {
            let team = self.teams.remove(index);
            let mut events: Vec<Teaming> = team
                .units
                .iter()
                .map(|unit| UnitDestroyed { team: id, unit: unit.id })
                .collect();
            events.push(TeamDestroyed { id });
            events
        };
        Ok(command)
    }
}
