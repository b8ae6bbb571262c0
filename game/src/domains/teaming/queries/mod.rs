pub use find_near_enemy::*;
pub use get_team::*;

mod find_near_enemy;
mod get_team;
