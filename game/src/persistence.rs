use datamap::{Datamap, Prefix, Storage, StorageError};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::hosting::HostId;
use crate::spawning::Restoration;
use crate::Game;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentResult {
    pub component: String,
    pub success: bool,
}

/// Outcome of a save or load pass, one entry per visited component.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistenceReport {
    pub results: Vec<ComponentResult>,
}

impl PersistenceReport {
    pub fn set_component_result(&mut self, component: String, success: bool) {
        self.results.push(ComponentResult { component, success });
    }

    pub fn is_success(&self) -> bool {
        self.results.iter().all(|result| result.success)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ComponentResult> {
        self.results.iter().filter(|result| !result.success)
    }

    pub fn get(&self, component: &str) -> Option<bool> {
        self.results
            .iter()
            .find(|result| result.component == component)
            .map(|result| result.success)
    }

    fn record<T, E: Debug>(&mut self, component: Prefix, result: Result<T, E>) {
        if let Err(error) = &result {
            error!("Component {} failed, {:?}", component, error);
        }
        self.set_component_result(component.to_string(), result.is_ok());
    }
}

impl Game {
    /// Saves every team then every spawner, host by host in creation order.
    pub fn save_static_objects(&self, datamap: &mut Datamap) -> PersistenceReport {
        let mut report = PersistenceReport::default();
        for host in &self.hosting.hosts {
            if let Ok(team) = self.teaming.get_team_by_host(host.id) {
                let result = self.teaming.save_team(team.id, datamap);
                report.record(team.prefix(), result);
            }
            if let Ok(spawner) = self.spawning.get_spawner_by_host(host.id) {
                let result = self.spawning.save_spawner(spawner.id, datamap);
                report.record(spawner.prefix(), result);
            }
        }
        report
    }

    pub fn load_static_objects(&mut self, datamap: &Datamap) -> PersistenceReport {
        let mut report = PersistenceReport::default();
        let hosts: Vec<HostId> = self.hosting.hosts.iter().map(|host| host.id).collect();
        for host in hosts {
            let team = self
                .teaming
                .get_team_by_host(host)
                .map(|team| (team.id, team.prefix()));
            if let Ok((team, component)) = team {
                let result = self.teaming.load_team(team, datamap);
                report.record(component, result);
            }
            let spawner = self
                .spawning
                .get_spawner_by_host(host)
                .map(|spawner| (spawner.id, spawner.prefix()));
            if let Ok((spawner, component)) = spawner {
                let result = self.spawning.load_spawner(spawner, datamap);
                if let Ok(Restoration::Missing) = result {
                    if let Err(error) = self.stop_spawner(spawner) {
                        error!("Unable to stop spawner {}, {:?}", component, error);
                    }
                }
                report.record(component, result);
            }
        }
        report
    }

    pub fn save_to(
        &self,
        storage: &mut Storage,
        slot: &str,
    ) -> Result<PersistenceReport, StorageError> {
        let mut datamap = Datamap::new();
        let report = self.save_static_objects(&mut datamap);
        if !report.is_success() {
            warn!(
                "Slot '{}' saved with {} failed components",
                slot,
                report.failures().count()
            );
        }
        storage.save(slot, &datamap)?;
        Ok(report)
    }

    pub fn load_from(
        &mut self,
        storage: &Storage,
        slot: &str,
    ) -> Result<PersistenceReport, StorageError> {
        let datamap = storage.load(slot)?;
        let report = self.load_static_objects(&datamap);
        info!(
            "Slot '{}' loaded, {} of {} components restored",
            slot,
            report.results.len() - report.failures().count(),
            report.results.len()
        );
        Ok(report)
    }
}
