use log::warn;

use crate::teaming::Teaming::UnitAdded;
use crate::teaming::{TeamId, Teaming, TeamingDomain, TeamingError, Unit};

impl TeamingDomain {
    pub fn add_unit(
        &mut self,
        id: TeamId,
        unit: Unit,
    ) -> Result<impl FnOnce() -> Vec<Teaming> + '_, TeamingError> {
        let team = self.get_team_mut(id)?;
        if !team.can_add_unit() {
            warn!(
                "Unable to add unit {:?} of '{}' to team {}, limit of {} units reached",
                unit.id, unit.prefab, team.unique, team.max_units
            );
            return Err(TeamingError::TeamIsFull {
                id,
                max_units: team.max_units,
            });
        }
        let command = move || {
            let event = UnitAdded {
                team: id,
                unit: unit.id,
                prefab: unit.prefab.clone(),
                position: unit.position,
            };
            team.units.push(unit);
            team.number_units += 1;
            vec![event]
        };
        Ok(command)
    }
}
