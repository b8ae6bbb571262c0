use log::warn;

use crate::math::VectorMath;
use crate::teaming::{TeamId, TeamingDomain, TeamingError, Unit};

impl TeamingDomain {
    /// Closest unit of any enemy team strictly within `max_distance`, first found wins a tie.
    pub fn find_near_enemy(
        &self,
        id: TeamId,
        position: [f32; 3],
        max_distance: f32,
    ) -> Result<Option<&Unit>, TeamingError> {
        let team = self.get_team(id)?;
        let mut nearest = None;
        let mut min_distance = max_distance * max_distance;
        for enemy in &team.enemies {
            let enemy = match self.get_team(*enemy) {
                Ok(enemy) => enemy,
                Err(error) => {
                    warn!("Unable to scan enemy of team {}, {:?}", team.unique, error);
                    continue;
                }
            };
            for unit in &enemy.units {
                let distance = position.distance_squared(unit.position);
                if distance < min_distance {
                    min_distance = distance;
                    nearest = Some(unit);
                }
            }
        }
        Ok(nearest)
    }
}
