use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::collections::Sequence;

#[derive(Default)]
pub struct HostingDomain {
    pub hosts_id: Sequence,
    pub hosts: Vec<Host>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostId(pub usize);

/// Stable identity of a scene object, survives save and load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniqueId(pub String);

impl UniqueId {
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Display for UniqueId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub struct Host {
    pub id: HostId,
    pub name: String,
    pub unique: UniqueId,
    pub position: [f32; 3],
    pub scale: [f32; 3],
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub enum Hosting {
    HostCreated { id: HostId, unique: UniqueId },
    HostDestroyed { id: HostId, unique: UniqueId },
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub enum HostingError {
    HostNotFound { id: HostId },
    HostNotFoundByUnique { unique: UniqueId },
    UniqueIdConflict { unique: UniqueId },
}
