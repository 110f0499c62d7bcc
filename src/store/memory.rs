//! In-memory record store
//!
//! Both tables live behind one `RwLock` so a batch insert or a delete sees a
//! consistent view of names and references for its whole duration.

use std::collections::{BTreeMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use super::errors::{StoreError, StoreResult};
use super::model::{Device, DevicePatch, NewDevice, NewScientist, Scientist, ScientistPatch};
use super::RecordStore;

const SCIENTISTS: &str = "scientists";
const DEVICES: &str = "devices";

#[derive(Debug)]
struct Tables {
    scientists: BTreeMap<i64, Scientist>,
    devices: BTreeMap<i64, Device>,
    next_scientist_id: i64,
    next_device_id: i64,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            scientists: BTreeMap::new(),
            devices: BTreeMap::new(),
            next_scientist_id: 1,
            next_device_id: 1,
        }
    }
}

impl Tables {
    fn scientist_name_taken(&self, name: &str, except: Option<i64>) -> bool {
        self.scientists
            .values()
            .any(|s| s.name == name && Some(s.scientist_id) != except)
    }

    fn device_name_taken(&self, name: &str, except: Option<i64>) -> bool {
        self.devices
            .values()
            .any(|d| d.name == name && Some(d.device_id) != except)
    }
}

/// Record store keeping both tables in process memory.
///
/// Primary keys come from per-table counters and are never reused.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| StoreError::Poisoned)
    }
}

impl RecordStore for InMemoryStore {
    fn scientists(&self) -> StoreResult<Vec<Scientist>> {
        Ok(self.read()?.scientists.values().cloned().collect())
    }

    fn scientist(&self, id: i64) -> StoreResult<Option<Scientist>> {
        Ok(self.read()?.scientists.get(&id).cloned())
    }

    fn scientist_by_name(&self, name: &str) -> StoreResult<Option<Scientist>> {
        Ok(self
            .read()?
            .scientists
            .values()
            .find(|s| s.name == name)
            .cloned())
    }

    fn create_scientists(&self, batch: Vec<NewScientist>) -> StoreResult<Vec<Scientist>> {
        let mut tables = self.write()?;

        // Check the whole batch before the first insert
        let mut names = HashSet::new();
        for new in &batch {
            if !names.insert(new.name.clone()) || tables.scientist_name_taken(&new.name, None) {
                return Err(StoreError::UniqueViolation {
                    table: SCIENTISTS,
                    name: new.name.clone(),
                });
            }
        }

        let time_added = Utc::now();
        let mut created = Vec::with_capacity(batch.len());
        for new in batch {
            let scientist = Scientist {
                scientist_id: tables.next_scientist_id,
                name: new.name,
                madness_level: new.madness_level,
                galaxy_destruction_attempts: new.galaxy_destruction_attempts,
                time_added,
            };
            tables.next_scientist_id += 1;
            tables
                .scientists
                .insert(scientist.scientist_id, scientist.clone());
            created.push(scientist);
        }

        Ok(created)
    }

    fn update_scientist(&self, id: i64, patch: ScientistPatch) -> StoreResult<Scientist> {
        let mut tables = self.write()?;

        if !tables.scientists.contains_key(&id) {
            return Err(StoreError::NotFound {
                table: SCIENTISTS,
                id,
            });
        }
        if let Some(name) = &patch.name {
            if tables.scientist_name_taken(name, Some(id)) {
                return Err(StoreError::UniqueViolation {
                    table: SCIENTISTS,
                    name: name.clone(),
                });
            }
        }

        let scientist = tables.scientists.get_mut(&id).ok_or(StoreError::NotFound {
            table: SCIENTISTS,
            id,
        })?;
        scientist.apply(patch);

        Ok(scientist.clone())
    }

    fn delete_scientist(&self, id: i64) -> StoreResult<()> {
        let mut tables = self.write()?;

        if !tables.scientists.contains_key(&id) {
            return Err(StoreError::NotFound {
                table: SCIENTISTS,
                id,
            });
        }
        if tables.devices.values().any(|d| d.scientist_id == id) {
            return Err(StoreError::ForeignKeyViolation { table: SCIENTISTS });
        }

        tables.scientists.remove(&id);
        Ok(())
    }

    fn devices(&self) -> StoreResult<Vec<Device>> {
        Ok(self.read()?.devices.values().cloned().collect())
    }

    fn device(&self, id: i64) -> StoreResult<Option<Device>> {
        Ok(self.read()?.devices.get(&id).cloned())
    }

    fn device_by_name(&self, name: &str) -> StoreResult<Option<Device>> {
        Ok(self
            .read()?
            .devices
            .values()
            .find(|d| d.name == name)
            .cloned())
    }

    fn devices_of(&self, scientist_id: i64) -> StoreResult<Vec<Device>> {
        Ok(self
            .read()?
            .devices
            .values()
            .filter(|d| d.scientist_id == scientist_id)
            .cloned()
            .collect())
    }

    fn create_devices(&self, batch: Vec<NewDevice>) -> StoreResult<Vec<Device>> {
        let mut tables = self.write()?;

        let mut names = HashSet::new();
        for new in &batch {
            if !names.insert(new.name.clone()) || tables.device_name_taken(&new.name, None) {
                return Err(StoreError::UniqueViolation {
                    table: DEVICES,
                    name: new.name.clone(),
                });
            }
            if !tables.scientists.contains_key(&new.scientist_id) {
                return Err(StoreError::MissingReference {
                    table: DEVICES,
                    id: new.scientist_id,
                });
            }
        }

        let time_added = Utc::now();
        let mut created = Vec::with_capacity(batch.len());
        for new in batch {
            let device = Device {
                device_id: tables.next_device_id,
                name: new.name,
                scientist_id: new.scientist_id,
                power: new.power,
                time_added,
            };
            tables.next_device_id += 1;
            tables.devices.insert(device.device_id, device.clone());
            created.push(device);
        }

        Ok(created)
    }

    fn update_device(&self, id: i64, patch: DevicePatch) -> StoreResult<Device> {
        let mut tables = self.write()?;

        if !tables.devices.contains_key(&id) {
            return Err(StoreError::NotFound { table: DEVICES, id });
        }
        if let Some(name) = &patch.name {
            if tables.device_name_taken(name, Some(id)) {
                return Err(StoreError::UniqueViolation {
                    table: DEVICES,
                    name: name.clone(),
                });
            }
        }
        if let Some(scientist_id) = patch.scientist_id {
            if !tables.scientists.contains_key(&scientist_id) {
                return Err(StoreError::MissingReference {
                    table: DEVICES,
                    id: scientist_id,
                });
            }
        }

        let device = tables
            .devices
            .get_mut(&id)
            .ok_or(StoreError::NotFound { table: DEVICES, id })?;
        device.apply(patch);

        Ok(device.clone())
    }

    fn delete_device(&self, id: i64) -> StoreResult<()> {
        let mut tables = self.write()?;

        tables
            .devices
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { table: DEVICES, id })
    }
}
