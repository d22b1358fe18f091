mod entry;
mod error;

pub use entry::StringEntry;
pub use error::StoreError;

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use bytes::Bytes;
use rand::Rng;

use crate::persistence::Aof;
use crate::resp::Value;

pub type Hash = HashMap<Bytes, Bytes>;

pub struct Store {
    strings: RwLock<HashMap<Bytes, StringEntry>>,
    hashes: RwLock<HashMap<Bytes, Hash>>,
    aof: OnceLock<Aof>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            strings: RwLock::new(HashMap::new()),
            hashes: RwLock::new(HashMap::new()),
            aof: OnceLock::new(),
        }
    }

    pub fn enable_persistence(&self, aof: Aof) {
        self.aof
            .set(aof)
            .unwrap_or_else(|_| panic!("persistence already enabled"));
    }

    fn persist(&self, request: &Value) -> Result<(), StoreError> {
        if let Some(aof) = self.aof.get() {
            aof.append(request)?;
        }
        Ok(())
    }

    // append to the AOF before touching the map; if that fails, leave it untouched
    pub fn save_string(&self, request: &Value, key: Bytes, entry: StringEntry) -> Result<(), StoreError> {
        let mut guard = self.strings.write().unwrap();
        self.persist(request)?;
        guard.insert(key, entry);
        Ok(())
    }

    // doesn't filter expiration; callers check is_expired() themselves
    pub fn get_string(&self, key: &[u8]) -> Option<StringEntry> {
        self.strings.read().unwrap().get(key).cloned()
    }

    pub fn delete_strings(&self, request: &Value, keys: &[Bytes]) -> Result<usize, StoreError> {
        let mut guard = self.strings.write().unwrap();
        self.persist(request)?;
        let mut removed = 0;
        for key in keys {
            if guard.remove(key.as_ref()).is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }

    pub fn random_string(&self) -> Option<(Bytes, StringEntry)> {
        let guard = self.strings.read().unwrap();
        let mut rng = rand::thread_rng();
        let mut chosen: Option<(Bytes, StringEntry)> = None;
        let mut seen = 0u64;
        for (key, entry) in guard.iter() {
            seen += 1;
            if rng.gen_range(0..seen) == 0 {
                chosen = Some((key.clone(), entry.clone()));
            }
        }
        chosen
    }

    pub fn save_hash(&self, request: &Value, hash: Bytes, field: Bytes, value: Bytes) -> Result<(), StoreError> {
        let mut guard = self.hashes.write().unwrap();
        self.persist(request)?;
        guard.entry(hash).or_default().insert(field, value);
        Ok(())
    }

    pub fn get_hash(&self, hash: &[u8]) -> Option<Hash> {
        self.hashes.read().unwrap().get(hash).cloned()
    }

    // drops the hash entirely once it has no fields left
    pub fn delete_hash_fields(&self, request: &Value, hash: &[u8], fields: &[Bytes]) -> Result<usize, StoreError> {
        let mut guard = self.hashes.write().unwrap();
        self.persist(request)?;
        let mut removed = 0;
        if let Some(map) = guard.get_mut(hash) {
            for field in fields {
                if map.remove(field.as_ref()).is_some() {
                    removed += 1;
                }
            }
            if map.is_empty() {
                guard.remove(hash);
            }
        }
        Ok(removed)
    }

    pub fn close(&self) -> std::io::Result<()> {
        if let Some(aof) = self.aof.get() {
            aof.flush()?;
        }
        Ok(())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
