pub use get_spawner::*;

mod get_spawner;
