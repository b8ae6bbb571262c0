pub use add_unit::*;
pub use create_team::*;
pub use destroy_team::*;
pub use destroy_unit::*;
pub use register_prefab::*;
pub use set_enemies::*;

mod add_unit;
mod create_team;
mod destroy_team;
mod destroy_unit;
mod register_prefab;
mod set_enemies;
