use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::Datamap;

pub fn parse_json_value<T: DeserializeOwned>(value: Value) -> Result<T, serde_json::Error> {
    serde_json::from_value(value)
}

pub fn to_json_value<T: Serialize>(value: T) -> Result<Value, serde_json::Error> {
    serde_json::to_value(value)
}

/// Human readable dump of the store, one member per key.
pub fn dump_datamap(datamap: &Datamap) -> Result<String, serde_json::Error> {
    let mut entries = serde_json::Map::new();
    for (key, value) in datamap {
        entries.insert(key.clone(), to_json_value(value)?);
    }
    serde_json::to_string_pretty(&Value::Object(entries))
}

pub fn parse_datamap_dump(data: &str) -> Result<Datamap, serde_json::Error> {
    let entries: serde_json::Map<String, Value> = serde_json::from_str(data)?;
    let mut datamap = Datamap::new();
    for (key, value) in entries {
        datamap.replace(key, parse_json_value::<crate::Value>(value)?);
    }
    Ok(datamap)
}
