//! # Record Store
//!
//! Persistence collaborator behind the request handlers. A store owns the
//! `scientists` and `devices` tables and enforces what the relational schema
//! would: unique names per table and `devices.scientist_id` referencing an
//! existing scientist. Handlers validate before writing; the store's own
//! checks are the last line.

mod errors;
mod memory;
mod model;

pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryStore;
pub use model::{Device, DevicePatch, NewDevice, NewScientist, Scientist, ScientistPatch};

/// Create/read/update/delete access to both tables.
///
/// Batch creates are all-or-nothing: either every row is inserted or none.
/// Rows come back in primary key order, which is insertion order.
pub trait RecordStore: Send + Sync {
    fn scientists(&self) -> StoreResult<Vec<Scientist>>;

    fn scientist(&self, id: i64) -> StoreResult<Option<Scientist>>;

    fn scientist_by_name(&self, name: &str) -> StoreResult<Option<Scientist>>;

    /// Inserts the batch, stamping `time_added`
    fn create_scientists(&self, batch: Vec<NewScientist>) -> StoreResult<Vec<Scientist>>;

    fn update_scientist(&self, id: i64, patch: ScientistPatch) -> StoreResult<Scientist>;

    /// Fails with `ForeignKeyViolation` while any device references the row
    fn delete_scientist(&self, id: i64) -> StoreResult<()>;

    fn devices(&self) -> StoreResult<Vec<Device>>;

    fn device(&self, id: i64) -> StoreResult<Option<Device>>;

    fn device_by_name(&self, name: &str) -> StoreResult<Option<Device>>;

    /// Devices whose `scientist_id` is `scientist_id`
    fn devices_of(&self, scientist_id: i64) -> StoreResult<Vec<Device>>;

    /// Inserts the batch, stamping `time_added`
    fn create_devices(&self, batch: Vec<NewDevice>) -> StoreResult<Vec<Device>>;

    fn update_device(&self, id: i64, patch: DevicePatch) -> StoreResult<Device>;

    fn delete_device(&self, id: i64) -> StoreResult<()>;
}
