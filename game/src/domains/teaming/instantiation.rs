use crate::teaming::{Prefab, TeamingDomain, Unit, UnitId};

impl Unit {
    pub fn from_prefab(id: UnitId, prefab: &Prefab, position: [f32; 3]) -> Self {
        Self {
            id,
            prefab: prefab.name.clone(),
            position,
            object: prefab.create_object(),
        }
    }
}

impl TeamingDomain {
    pub fn instantiate(&mut self, prefab: &Prefab, position: [f32; 3]) -> Unit {
        Unit::from_prefab(self.units_id.one(UnitId), prefab, position)
    }
}
