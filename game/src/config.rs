use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::spawning::EmissionRange;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub hosts: Vec<HostConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HostConfig {
    pub name: String,
    pub unique: String,
    #[serde(default)]
    pub position: [f32; 3],
    #[serde(default = "default_scale")]
    pub scale: [f32; 3],
    #[serde(default)]
    pub team: Option<TeamConfig>,
    #[serde(default)]
    pub spawner: Option<SpawnerConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeamConfig {
    #[serde(default = "unlimited")]
    pub max_units: usize,
    /// Unique ids of hosts carrying the opposing teams.
    #[serde(default)]
    pub enemies: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SpawnerConfig {
    /// Unique id of the host carrying the team.
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub prefabs: Vec<String>,
    #[serde(default = "unlimited")]
    pub max_units: usize,
    #[serde(default)]
    pub emission_time_range: EmissionRange,
    #[serde(default)]
    pub remove_game_object: bool,
}

fn default_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

fn unlimited() -> usize {
    usize::MAX
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl SceneConfig {
    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        let config = serde_json::from_str(data)?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }
}
