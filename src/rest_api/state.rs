//! Shared handler state

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::store::RecordStore;

/// State shared by every REST handler
pub struct ApiState {
    pub store: Arc<dyn RecordStore>,
    /// Serialises validate-then-write sequences across requests
    write_gate: Mutex<()>,
}

impl ApiState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            write_gate: Mutex::new(()),
        }
    }

    /// Held for the whole of a mutating request
    pub async fn write_gate(&self) -> MutexGuard<'_, ()> {
        self.write_gate.lock().await
    }
}
