use crate::teaming::Teaming::UnitDestroyed;
use crate::teaming::{TeamId, Teaming, TeamingDomain, TeamingError, UnitId};

impl TeamingDomain {
    pub fn destroy_unit(
        &mut self,
        id: TeamId,
        unit: UnitId,
    ) -> Result<impl FnOnce() -> Vec<Teaming> + '_, TeamingError> {
        let team = self.get_team_mut(id)?;
        let index = team
            .units
            .iter()
            .position(|candidate| candidate.id == unit)
            .ok_or(TeamingError::UnitNotFound { team: id, unit })?;
        let command = move || {
            team.units.remove(index);
            vec![UnitDestroyed { team: id, unit }]
        };
        Ok(command)
    }
}
