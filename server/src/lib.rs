use datamap::{dump_datamap, Storage, StorageError};
use game::api::{ActionError, Event};
use game::config::{ConfigError, SceneConfig};
use game::persistence::PersistenceReport;
use game::spawning::Spawning;
use game::teaming::Prefab;
use game::Game;
use log::{info, warn};
use prometheus::{Encoder, Registry, TextEncoder};

pub use metrics::*;

mod metrics;

pub const QUICKSAVE_SLOT: &str = "quicksave";

#[derive(Debug)]
pub enum ServerError {
    Config(ConfigError),
    Storage(StorageError),
    Action(ActionError),
    Metrics(prometheus::Error),
    Json(serde_json::Error),
    Encoding(std::string::FromUtf8Error),
}

impl From<ConfigError> for ServerError {
    fn from(error: ConfigError) -> Self {
        Self::Config(error)
    }
}

impl From<StorageError> for ServerError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ActionError> for ServerError {
    fn from(error: ActionError) -> Self {
        Self::Action(error)
    }
}

impl From<prometheus::Error> for ServerError {
    fn from(error: prometheus::Error) -> Self {
        Self::Metrics(error)
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<std::string::FromUtf8Error> for ServerError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        Self::Encoding(error)
    }
}

/// Headless frame loop over a single game.
pub struct LocalServer {
    pub game: Game,
    pub storage: Storage,
    pub metrics: ServerMetrics,
    registry: Registry,
}

impl LocalServer {
    pub fn startup(
        scene: &SceneConfig,
        storage: Storage,
        prefabs: Vec<Prefab>,
    ) -> Result<Self, ServerError> {
        let registry = Registry::new();
        let metrics = ServerMetrics::new(&registry)?;
        storage.setup()?;
        let mut game = Game::new();
        for prefab in prefabs {
            if !game.known.register_prefab(prefab) {
                warn!("Prefab registered twice, first one kept");
            }
        }
        let events = game.load_scene(scene)?;
        info!("Server started, {} scene events", events.len());
        Ok(Self {
            game,
            storage,
            metrics,
            registry,
        })
    }

    pub fn tick(&mut self, time: f32) -> Vec<Event> {
        let events = self.game.update(time);
        self.metrics.ticks.inc();
        let emitted = events
            .iter()
            .map(|event| match event {
                Event::Spawning(events) => events
                    .iter()
                    .filter(|event| matches!(event, Spawning::UnitEmitted { .. }))
                    .count(),
                _ => 0,
            })
            .sum::<usize>();
        self.metrics.emitted_units.inc_by(emitted as u64);
        events
    }

    pub fn run(&mut self, ticks: usize, time: f32) -> usize {
        let mut events = 0;
        for _ in 0..ticks {
            events += self.tick(time).len();
        }
        events
    }

    pub fn quicksave(&mut self) -> Result<PersistenceReport, ServerError> {
        let report = self.game.save_to(&mut self.storage, QUICKSAVE_SLOT)?;
        self.metrics.saves.inc();
        if !report.is_success() {
            self.metrics.failed_saves.inc();
        }
        Ok(report)
    }

    pub fn quickload(&mut self) -> Result<PersistenceReport, ServerError> {
        let report = self.game.load_from(&self.storage, QUICKSAVE_SLOT)?;
        self.metrics.loads.inc();
        if !report.is_success() {
            self.metrics.failed_loads.inc();
            for failure in report.failures() {
                warn!("Component {} not restored", failure.component);
            }
        }
        Ok(report)
    }

    /// Human readable dump of a stored slot.
    pub fn export(&self, slot: &str) -> Result<String, ServerError> {
        let datamap = self.storage.load(slot)?;
        let dump = dump_datamap(&datamap)?;
        Ok(dump)
    }

    pub fn gather_metrics(&self) -> Result<String, ServerError> {
        let encoder = TextEncoder::new();
        let mut buffer = vec![];
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        let metrics = String::from_utf8(buffer)?;
        Ok(metrics)
    }
}
