use crate::api::{ActionError, Event};
use crate::hosting::HostId;
use crate::Game;

impl Game {
    /// Destroys the host along with the spawner and the team it carries.
    pub fn destroy_host(&mut self, id: HostId) -> Result<Vec<Event>, ActionError> {
        self.hosting.get_host(id)?;
        let mut events = vec![];
        let spawner = self.spawning.get_spawner_by_host(id).map(|spawner| spawner.id);
        if let Ok(spawner) = spawner {
            let remove_spawner = self.spawning.remove_spawner(spawner)?;
            events.push(remove_spawner().into());
        }
        let team = self.teaming.get_team_by_host(id).map(|team| team.id);
        if let Ok(team) = team {
            let destroy_team = self.teaming.destroy_team(team)?;
            events.push(destroy_team().into());
        }
        let destroy_host = self.hosting.destroy_host(id)?;
        events.push(destroy_host().into());
        Ok(events)
    }
}
