use crate::collections::Dictionary;
use crate::teaming::Prefab;

/// Application wide catalogue, scene configuration refers to its entries by name.
#[derive(Default)]
pub struct Knowledge {
    pub prefabs: Dictionary<Prefab>,
}

impl Knowledge {
    pub fn register_prefab(&mut self, prefab: Prefab) -> bool {
        self.prefabs.insert(prefab.name.clone(), prefab)
    }
}
