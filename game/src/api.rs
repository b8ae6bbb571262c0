use serde::{Deserialize, Serialize};

use crate::collections::DictionaryError;
use crate::hosting::{Hosting, HostingError};
use crate::spawning::{Spawning, SpawningError};
use crate::teaming::{Teaming, TeamingError};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Hosting(Vec<Hosting>),
    Teaming(Vec<Teaming>),
    Spawning(Vec<Spawning>),
}

impl From<Vec<Hosting>> for Event {
    fn from(events: Vec<Hosting>) -> Self {
        Self::Hosting(events)
    }
}

impl From<Vec<Teaming>> for Event {
    fn from(events: Vec<Teaming>) -> Self {
        Self::Teaming(events)
    }
}

impl From<Vec<Spawning>> for Event {
    fn from(events: Vec<Spawning>) -> Self {
        Self::Spawning(events)
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub enum ActionError {
    Hosting(HostingError),
    Teaming(TeamingError),
    Spawning(SpawningError),
    Dictionary(DictionaryError),
}

impl From<HostingError> for ActionError {
    fn from(error: HostingError) -> Self {
        Self::Hosting(error)
    }
}

impl From<TeamingError> for ActionError {
    fn from(error: TeamingError) -> Self {
        Self::Teaming(error)
    }
}

impl From<SpawningError> for ActionError {
    fn from(error: SpawningError) -> Self {
        Self::Spawning(error)
    }
}

impl From<DictionaryError> for ActionError {
    fn from(error: DictionaryError) -> Self {
        Self::Dictionary(error)
    }
}
