use tracing::{debug, info};

use crate::database::{NewRecord, RecordStore};
use crate::error::StorageResult;
use crate::greeter::GreetingStore;

impl<S: RecordStore> GreetingStore<S> {
    /// Sets the greeting for `pattern` in `channel`, replacing any record with
    /// the literally equal pattern. A failed add leaves the old record in place.
    pub async fn add(&self, channel: &str, pattern: &str, greeting: &str) -> StorageResult<()> {
        let mut db = self.db.write().await;

        let stale: Vec<_> = db
            .records()
            .iter()
            .filter(|r| r.channel == channel && r.pattern == pattern)
            .map(|r| r.id)
            .collect();
        if !stale.is_empty() {
            debug!("Replacing greetings {:?} for {} in {}", stale, pattern, channel);
        }

        let record = db.replace(
            &stale,
            NewRecord {
                channel: channel.to_string(),
                pattern: pattern.to_string(),
                greeting: greeting.to_string(),
            },
        )?;
        info!("Added greeting {} for {} in {}", record.id, pattern, channel);
        Ok(())
    }

    /// Deletes the greeting for the literal `pattern` in `channel`.
    /// Returns false if there was none.
    pub async fn remove(&self, channel: &str, pattern: &str) -> StorageResult<bool> {
        let mut db = self.db.write().await;

        let Some(id) = db
            .records()
            .iter()
            .find(|r| r.channel == channel && r.pattern == pattern)
            .map(|r| r.id)
        else {
            debug!("No greeting for {} in {}", pattern, channel);
            return Ok(false);
        };

        let removed = db.remove(id)?;
        if removed {
            info!("Removed greeting {} for {} in {}", id, pattern, channel);
        }
        Ok(removed)
    }
}
