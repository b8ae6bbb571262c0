use datamap::Datamap;
use log::error;

use crate::teaming::{TeamId, TeamingDomain, TeamingError, Unit, UnitId};

impl TeamingDomain {
    /// Writes the team membership and every unit in hierarchy order.
    ///
    /// Stops at the first failure, entries written before it stay in the store.
    pub fn save_team(&self, id: TeamId, datamap: &mut Datamap) -> Result<usize, TeamingError> {
        let team = self.get_team(id)?;
        let prefix = team.prefix();
        datamap.insert(prefix.key("_numberUnits"), team.number_units)?;
        for (index, unit) in team.units.iter().enumerate() {
            let object = prefix.object(index);
            datamap.insert(object.key("prefabName"), unit.prefab.as_str())?;
            unit.save_object(datamap, &object)?;
        }
        datamap.insert(prefix.key("numActiveUnits"), team.units.len())?;
        Ok(team.units.len())
    }

    /// Replaces all units of the team with the ones recreated from the store.
    ///
    /// Owned units are destroyed up front. Stored counts above the team capacity
    /// fail the load with the team left empty. On other failures the units
    /// recreated so far stay owned, including the one whose own state failed to load.
    pub fn load_team(&mut self, id: TeamId, datamap: &Datamap) -> Result<usize, TeamingError> {
        let units_id = &mut self.units_id;
        let team = self
            .teams
            .iter_mut()
            .find(|team| team.id == id)
            .ok_or(TeamingError::TeamNotFound { id })?;
        team.units.clear();
        team.number_units = 0;

        let prefix = team.prefix();
        let number_units: usize = datamap.get(&prefix.key("_numberUnits"))?;
        let active: usize = datamap.get(&prefix.key("numActiveUnits"))?;
        let stored = number_units.max(active);
        if stored > team.max_units {
            error!(
                "Unable to load team {}, {} stored units exceed capacity {}",
                team.unique, stored, team.max_units
            );
            return Err(TeamingError::CapacityExceeded {
                id,
                max_units: team.max_units,
                stored,
            });
        }
        team.number_units = number_units;
        for index in 0..active {
            let object = prefix.object(index);
            let name: String = datamap.get(&object.key("prefabName"))?;
            let prefab = match team.prefabs.find(&name) {
                Ok(prefab) => prefab,
                Err(_) => {
                    error!(
                        "Unable to load unit {} of team {}, prefab '{}' not registered",
                        index, team.unique, name
                    );
                    return Err(TeamingError::UnknownPrefab { team: id, name });
                }
            };
            let mut unit = Unit::from_prefab(units_id.one(UnitId), prefab, [0.0; 3]);
            let result = unit.load_object(datamap, &object);
            team.units.push(unit);
            result?;
        }
        Ok(active)
    }
}
