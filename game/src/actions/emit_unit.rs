use crate::api::{ActionError, Event};
use crate::math::VectorMath;
use crate::spawning::{SpawnerId, SpawningError};
use crate::teaming::TeamingError;
use crate::Game;

impl Game {
    /// Instantiates a random prefab around the host and hands it to the team.
    ///
    /// The emission is counted even if the team rejects the unit.
    pub fn emit_unit(&mut self, id: SpawnerId) -> Result<Vec<Event>, ActionError> {
        let spawner = self.spawning.get_spawner(id)?;
        let team = spawner.team.ok_or(SpawningError::TeamNotAssigned { id })?;
        let host = self.hosting.get_host(spawner.host)?;
        let [sx, sy, sz] = host.scale.map(f32::abs);
        let offset = [
            self.random.between(-sx, sx),
            self.random.between(-sy, sy),
            self.random.between(-sz, sz),
        ];
        let position = host.position.add(offset);
        let prefab = self.spawning.choose_prefab(id, &mut self.random)?;
        let unit = self.teaming.instantiate(&prefab, position);

        let mut events = vec![];
        match self.teaming.add_unit(team, unit) {
            Ok(add_unit) => events.push(add_unit().into()),
            Err(TeamingError::TeamIsFull { .. }) => {}
            Err(error) => return Err(error.into()),
        }
        let emit = self.spawning.emit(id, &mut self.random)?;
        events.push(emit().into());
        Ok(events)
    }
}
