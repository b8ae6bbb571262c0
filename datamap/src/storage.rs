use std::path::Path;

use log::info;
use rusqlite::{params, Connection};

use crate::{Datamap, Value};

/// SQLite medium for flat stores, one named slot per saved pass.
pub struct Storage {
    connection: Connection,
}

#[derive(Debug)]
pub enum StorageError {
    Sql(rusqlite::Error),
    Encode(bincode::error::EncodeError),
    Decode(bincode::error::DecodeError),
}

impl From<rusqlite::Error> for StorageError {
    fn from(error: rusqlite::Error) -> Self {
        Self::Sql(error)
    }
}

impl From<bincode::error::EncodeError> for StorageError {
    fn from(error: bincode::error::EncodeError) -> Self {
        Self::Encode(error)
    }
}

impl From<bincode::error::DecodeError> for StorageError {
    fn from(error: bincode::error::DecodeError) -> Self {
        Self::Decode(error)
    }
}

impl Storage {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let connection = Connection::open(path.as_ref())?;
        Ok(Storage { connection })
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        let connection = Connection::open_in_memory()?;
        Ok(Storage { connection })
    }

    pub fn setup(&self) -> Result<(), StorageError> {
        let schema = "create table if not exists Entry (
            slot text not null,
            key text not null,
            value blob not null,
            primary key (slot, key)
        );";
        self.connection.execute_batch(schema)?;
        Ok(())
    }

    /// Replaces the whole slot with the given store.
    pub fn save(&mut self, slot: &str, datamap: &Datamap) -> Result<usize, StorageError> {
        let config = bincode::config::standard();
        let transaction = self.connection.transaction()?;
        let deleted = transaction.execute("delete from Entry where slot = ?", [slot])?;
        {
            let mut statement =
                transaction.prepare("insert into Entry (slot, key, value) values (?, ?, ?)")?;
            for (key, value) in datamap {
                let data = bincode::encode_to_vec(value, config)?;
                statement.execute(params![slot, key, data])?;
            }
        }
        transaction.commit()?;
        info!(
            "Save slot '{}': {} entries written, {} replaced",
            slot,
            datamap.len(),
            deleted
        );
        Ok(datamap.len())
    }

    pub fn load(&self, slot: &str) -> Result<Datamap, StorageError> {
        let config = bincode::config::standard();
        let mut statement = self
            .connection
            .prepare("select key, value from Entry where slot = ? order by key")?;
        let mut rows = statement.query([slot])?;
        let mut datamap = Datamap::new();
        while let Some(row) = rows.next()? {
            let key: String = row.get("key")?;
            let data: Vec<u8> = row.get("value")?;
            let (value, _): (Value, usize) = bincode::decode_from_slice(&data, config)?;
            datamap.replace(key, value);
        }
        info!("Load slot '{}': {} entries", slot, datamap.len());
        Ok(datamap)
    }

    pub fn slots(&self) -> Result<Vec<String>, StorageError> {
        let mut statement = self
            .connection
            .prepare("select distinct slot from Entry order by slot")?;
        let mut rows = statement.query([])?;
        let mut slots = vec![];
        while let Some(row) = rows.next()? {
            slots.push(row.get("slot")?);
        }
        Ok(slots)
    }

    pub fn delete(&mut self, slot: &str) -> Result<usize, StorageError> {
        let deleted = self
            .connection
            .execute("delete from Entry where slot = ?", [slot])?;
        Ok(deleted)
    }
}
