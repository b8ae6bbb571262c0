use crate::teaming::Teaming::EnemiesChanged;
use crate::teaming::{TeamId, Teaming, TeamingDomain, TeamingError};

impl TeamingDomain {
    pub fn set_enemies(
        &mut self,
        id: TeamId,
        enemies: Vec<TeamId>,
    ) -> Result<impl FnOnce() -> Vec<Teaming> + '_, TeamingError> {
        let team = self.get_team_mut(id)?;
        let command = move || {
            team.enemies = enemies.clone();
            vec![EnemiesChanged { id, enemies }]
        };
        Ok(command)
    }
}
