use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::config::CaseMapping;
use crate::database::RecordStore;
use crate::error::StorageResult;

mod lookup;
mod mutate;

pub use crate::database::GreetingRecord;

/// Per-channel greetings keyed by wildcard hostmask.
///
/// Within a channel a pattern appears at most once; adding it again replaces
/// the old record and moves it to the end of the insertion order. Lookups walk
/// records oldest first, so the earliest matching pattern wins.
///
/// Writers hold the lock across the duplicate check, the mutation and the
/// write to disk.
pub struct GreetingStore<S: RecordStore> {
    db: Arc<RwLock<S>>,
    casemapping: CaseMapping,
}

impl<S: RecordStore> GreetingStore<S> {
    pub fn new(db: S, casemapping: CaseMapping) -> Self {
        debug!("Creating greeting store with {:?} casemapping", casemapping);
        Self {
            db: Arc::new(RwLock::new(db)),
            casemapping,
        }
    }

    /// Flushes the underlying database. Call once on shutdown.
    pub async fn close(&self) -> StorageResult<()> {
        let mut db = self.db.write().await;
        db.flush()?;
        info!("Greeting store closed");
        Ok(())
    }
}

impl<S: RecordStore> Clone for GreetingStore<S> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            casemapping: self.casemapping,
        }
    }
}
