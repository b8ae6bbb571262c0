pub use domains::*;

use crate::hosting::HostingDomain;
use crate::math::Random;
use crate::model::Knowledge;
use crate::spawning::SpawningDomain;
use crate::teaming::TeamingDomain;

pub mod api;
pub mod collections;
pub mod config;
pub mod math;
pub mod model;
pub mod persistence;

mod actions;
mod domains;
mod loading;
mod update;

#[macro_export]
macro_rules! occur {
    () => {
        vec![]
    };
    ($($event:expr),+ $(,)?) => {
        vec![$($event.into()),+]
    };
}

pub struct Game {
    pub known: Knowledge,
    pub hosting: HostingDomain,
    pub teaming: TeamingDomain,
    pub spawning: SpawningDomain,
    random: Random,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::with_random(Random::new())
    }

    pub fn with_random(random: Random) -> Self {
        Self {
            known: Knowledge::default(),
            hosting: HostingDomain::default(),
            teaming: TeamingDomain::default(),
            spawning: SpawningDomain::default(),
            random,
        }
    }
}
