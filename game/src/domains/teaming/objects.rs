use std::fmt::{Debug, Formatter};
use std::rc::Rc;

use datamap::{Datamap, DatamapError, Prefix};
use serde::{Deserialize, Serialize};

/// Runtime state of a unit, persisted under the key space of its slot in the team.
pub trait DynamicObject {
    fn save_object(&self, datamap: &mut Datamap, prefix: &Prefix) -> Result<(), DatamapError>;

    fn load_object(&mut self, datamap: &Datamap, prefix: &Prefix) -> Result<(), DatamapError>;
}

impl DynamicObject for () {
    fn save_object(&self, _datamap: &mut Datamap, _prefix: &Prefix) -> Result<(), DatamapError> {
        Ok(())
    }

    fn load_object(&mut self, _datamap: &Datamap, _prefix: &Prefix) -> Result<(), DatamapError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Health {
    pub value: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { value: max, max }
    }
}

impl DynamicObject for Health {
    fn save_object(&self, datamap: &mut Datamap, prefix: &Prefix) -> Result<(), DatamapError> {
        let prefix = prefix.nested("Health");
        datamap.insert(prefix.key("value"), self.value)?;
        datamap.insert(prefix.key("max"), self.max)
    }

    fn load_object(&mut self, datamap: &Datamap, prefix: &Prefix) -> Result<(), DatamapError> {
        let prefix = prefix.nested("Health");
        self.value = datamap.get(&prefix.key("value"))?;
        self.max = datamap.get(&prefix.key("max"))?;
        Ok(())
    }
}

pub type Factory = Rc<dyn Fn() -> Box<dyn DynamicObject>>;

/// Named creation template, the name is the key under which units are persisted.
#[derive(Clone)]
pub struct Prefab {
    pub name: String,
    factory: Factory,
}

impl Debug for Prefab {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prefab").field("name", &self.name).finish()
    }
}

impl Prefab {
    pub fn new<F>(name: &str, factory: F) -> Self
    where
        F: Fn() -> Box<dyn DynamicObject> + 'static,
    {
        Self {
            name: name.to_string(),
            factory: Rc::new(factory),
        }
    }

    #[inline]
    pub fn create_object(&self) -> Box<dyn DynamicObject> {
        (self.factory)()
    }
}
