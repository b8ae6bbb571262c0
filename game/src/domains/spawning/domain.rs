use datamap::{DatamapError, Prefix};
use serde::{Deserialize, Serialize};

use crate::collections::Sequence;
use crate::hosting::{HostId, UniqueId};
use crate::math::Random;
use crate::teaming::{Prefab, TeamId};

#[derive(Default)]
pub struct SpawningDomain {
    pub spawners_id: Sequence,
    pub spawners: Vec<Spawner>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpawnerId(pub usize);

/// Delay between two emissions, in seconds, `[start, start + length]`.
///
/// Both bounds are clamped to be non negative whichever way the range is made.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Interval")]
pub struct EmissionRange {
    start: f32,
    length: f32,
}

#[derive(Deserialize)]
struct Interval {
    start: f32,
    #[serde(default)]
    length: f32,
}

impl From<Interval> for EmissionRange {
    fn from(interval: Interval) -> Self {
        EmissionRange::new(interval.start, interval.length)
    }
}

impl Default for EmissionRange {
    fn default() -> Self {
        Self::new(10.0, 10.0)
    }
}

impl EmissionRange {
    pub fn new(start: f32, length: f32) -> Self {
        Self {
            start: start.max(0.0),
            length: length.max(0.0),
        }
    }

    #[inline]
    pub fn start(&self) -> f32 {
        self.start
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    #[inline]
    pub fn end(&self) -> f32 {
        self.start + self.length
    }

    /// Next delay, drawn uniformly from the closed interval, so both `start`
    /// and `end` are possible outcomes.
    pub fn sample(&self, random: &mut Random) -> f32 {
        random.between(self.start, self.end())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnerState {
    Inactive,
    Active,
}

pub struct SpawnerSettings {
    pub team: Option<TeamId>,
    pub prefabs: Vec<Prefab>,
    pub max_units: usize,
    pub emission: EmissionRange,
    pub remove_host: bool,
}

impl Default for SpawnerSettings {
    fn default() -> Self {
        Self {
            team: None,
            prefabs: vec![],
            max_units: usize::MAX,
            emission: EmissionRange::default(),
            remove_host: false,
        }
    }
}

pub struct Spawner {
    pub id: SpawnerId,
    pub host: HostId,
    pub unique: UniqueId,
    pub team: Option<TeamId>,
    pub prefabs: Vec<Prefab>,
    pub max_units: usize,
    pub emission: EmissionRange,
    pub remove_host: bool,
    pub time_to_emission: f32,
    pub num_emitted: usize,
    pub state: SpawnerState,
}

impl Spawner {
    pub const CLASS: &'static str = "UnitsGenerator";

    #[inline]
    pub fn prefix(&self) -> Prefix {
        Prefix::component(Self::CLASS, &self.unique)
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.num_emitted >= self.max_units
    }

    pub fn set_emission_range(&mut self, start: f32, length: f32) {
        self.emission = EmissionRange::new(start, length);
    }

    /// Advances the countdown, true when the next emission is due.
    pub fn countdown(&mut self, time: f32) -> bool {
        self.time_to_emission -= time;
        self.time_to_emission <= 0.0
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub enum Spawning {
    SpawnerCreated {
        id: SpawnerId,
        host: HostId,
    },
    SpawnerActivated {
        id: SpawnerId,
        team: TeamId,
    },
    SpawnerRemoved {
        id: SpawnerId,
        host: HostId,
    },
    EmissionRangeChanged {
        id: SpawnerId,
        range: EmissionRange,
    },
    UnitEmitted {
        id: SpawnerId,
        num_emitted: usize,
        time_to_emission: f32,
    },
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub enum SpawningError {
    SpawnerNotFound { id: SpawnerId },
    SpawnerNotFoundByHost { host: HostId },
    SpawnerAlreadyAttached { host: HostId },
    SpawnerNotActive { id: SpawnerId },
    TeamNotAssigned { id: SpawnerId },
    TeamNotFound { id: SpawnerId, team: TeamId },
    TeamNotFoundByUnique { host: HostId, unique: UniqueId },
    NoPrefabs { id: SpawnerId },
    Datamap(DatamapError),
}

impl From<DatamapError> for SpawningError {
    fn from(error: DatamapError) -> Self {
        Self::Datamap(error)
    }
}
