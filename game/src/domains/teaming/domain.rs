use std::fmt::{Debug, Formatter};

use datamap::{Datamap, DatamapError, Prefix};
use serde::{Deserialize, Serialize};

use crate::collections::{Dictionary, Sequence};
use crate::hosting::{HostId, UniqueId};
use crate::teaming::{DynamicObject, Prefab};

#[derive(Default)]
pub struct TeamingDomain {
    pub teams_id: Sequence,
    pub units_id: Sequence,
    pub teams: Vec<Team>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub usize);

pub struct Team {
    pub id: TeamId,
    pub host: HostId,
    pub unique: UniqueId,
    pub enemies: Vec<TeamId>,
    pub max_units: usize,
    /// Admissions since creation or last load, not the number of living units.
    pub number_units: usize,
    pub prefabs: Dictionary<Prefab>,
    pub units: Vec<Unit>,
}

impl Team {
    pub const CLASS: &'static str = "Team";

    #[inline]
    pub fn can_add_unit(&self) -> bool {
        self.number_units < self.max_units
    }

    #[inline]
    pub fn prefix(&self) -> Prefix {
        Prefix::component(Self::CLASS, &self.unique)
    }
}

pub struct Unit {
    pub id: UnitId,
    pub prefab: String,
    pub position: [f32; 3],
    pub object: Box<dyn DynamicObject>,
}

impl Debug for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Unit")
            .field("id", &self.id)
            .field("prefab", &self.prefab)
            .field("position", &self.position)
            .finish()
    }
}

impl Unit {
    pub fn save_object(&self, datamap: &mut Datamap, prefix: &Prefix) -> Result<(), DatamapError> {
        let position = prefix.nested("position");
        datamap.insert(position.key("x"), self.position[0])?;
        datamap.insert(position.key("y"), self.position[1])?;
        datamap.insert(position.key("z"), self.position[2])?;
        self.object.save_object(datamap, prefix)
    }

    pub fn load_object(&mut self, datamap: &Datamap, prefix: &Prefix) -> Result<(), DatamapError> {
        let position = prefix.nested("position");
        self.position = [
            datamap.get(&position.key("x"))?,
            datamap.get(&position.key("y"))?,
            datamap.get(&position.key("z"))?,
        ];
        self.object.load_object(datamap, prefix)
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub enum Teaming {
    TeamCreated {
        id: TeamId,
        host: HostId,
        max_units: usize,
    },
    TeamDestroyed {
        id: TeamId,
    },
    EnemiesChanged {
        id: TeamId,
        enemies: Vec<TeamId>,
    },
    PrefabRegistered {
        team: TeamId,
        prefab: String,
    },
    UnitAdded {
        team: TeamId,
        unit: UnitId,
        prefab: String,
        position: [f32; 3],
    },
    UnitDestroyed {
        team: TeamId,
        unit: UnitId,
    },
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub enum TeamingError {
    TeamNotFound { id: TeamId },
    TeamNotFoundByHost { host: HostId },
    TeamAlreadyAttached { host: HostId },
    TeamIsFull { id: TeamId, max_units: usize },
    UnitNotFound { team: TeamId, unit: UnitId },
    UnknownPrefab { team: TeamId, name: String },
    CapacityExceeded { id: TeamId, max_units: usize, stored: usize },
    Datamap(DatamapError),
}

impl From<DatamapError> for TeamingError {
    fn from(error: DatamapError) -> Self {
        Self::Datamap(error)
    }
}
