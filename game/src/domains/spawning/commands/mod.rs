pub use activate_spawner::*;
pub use create_spawner::*;
pub use emit::*;
pub use remove_spawner::*;
pub use set_emission_range::*;

mod activate_spawner;
mod create_spawner;
mod emit;
mod remove_spawner;
mod set_emission_range;
