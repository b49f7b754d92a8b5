use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::StorageResult;

#[cfg(test)]
pub(crate) mod memory;
mod record;

pub use record::{GreetingRecord, NewRecord, RecordId};

/// Durable, insertion-ordered record storage.
///
/// Implementations must keep records in the order they were appended, across
/// reopen, and must never hand out the same id twice. A failed mutation leaves
/// the visible records unchanged.
pub trait RecordStore: Send + Sync {
    /// All records, oldest first.
    fn records(&self) -> &[GreetingRecord];

    fn append(&mut self, record: NewRecord) -> StorageResult<GreetingRecord>;

    /// Deletes the record with `id`. Returns false if there was none.
    fn remove(&mut self, id: RecordId) -> StorageResult<bool>;

    /// Deletes every record in `stale` and appends `record` as one write.
    /// On failure neither the deletes nor the append are visible.
    fn replace(&mut self, stale: &[RecordId], record: NewRecord) -> StorageResult<GreetingRecord>;

    /// Makes every completed mutation durable.
    fn flush(&mut self) -> StorageResult<()>;
}

#[derive(Default, Serialize, Deserialize)]
struct DatabaseContent {
    next_id: u64,
    records: Vec<GreetingRecord>,
}

/// JSON file backed record store.
///
/// The whole file is rewritten on every mutation, through a temporary file
/// and a rename so a crash never leaves a half-written database behind.
pub struct Database {
    path: PathBuf,
    content: DatabaseContent,
}

impl Database {
    pub fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();
        let content = if path.exists() {
            let data = fs::read_to_string(&path)?;
            let mut content: DatabaseContent = serde_json::from_str(&data)?;
            // Files edited by hand may carry ids past the counter.
            if let Some(max) = content.records.iter().map(|r| r.id.0).max() {
                content.next_id = content.next_id.max(max + 1);
            }
            content
        } else {
            DatabaseContent::default()
        };

        info!("Opened greeting database {:?} with {} records", path, content.records.len());
        Ok(Self { path, content })
    }

    fn save(&self) -> StorageResult<()> {
        let data = serde_json::to_string_pretty(&self.content)?;
        let tmp = self.path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp)?;
        file.write_all(data.as_bytes())?;
        // Data must hit the disk before the rename does
        file.sync_all()?;
        drop(file);
        fs::rename(&tmp, &self.path)?;
        debug!("Saved {} records to {:?}", self.content.records.len(), self.path);
        Ok(())
    }
}

impl RecordStore for Database {
    fn records(&self) -> &[GreetingRecord] {
        &self.content.records
    }

    fn append(&mut self, record: NewRecord) -> StorageResult<GreetingRecord> {
        let id = RecordId(self.content.next_id);
        self.content.next_id += 1;

        let record = GreetingRecord::from_new(id, record);
        self.content.records.push(record.clone());

        if let Err(e) = self.save() {
            self.content.records.pop();
            return Err(e);
        }
        Ok(record)
    }

    fn remove(&mut self, id: RecordId) -> StorageResult<bool> {
        let Some(index) = self.content.records.iter().position(|r| r.id == id) else {
            return Ok(false);
        };

        let removed = self.content.records.remove(index);
        if let Err(e) = self.save() {
            self.content.records.insert(index, removed);
            return Err(e);
        }
        Ok(true)
    }

    fn replace(&mut self, stale: &[RecordId], record: NewRecord) -> StorageResult<GreetingRecord> {
        let id = RecordId(self.content.next_id);
        self.content.next_id += 1;

        let previous = self.content.records.clone();
        self.content.records.retain(|r| !stale.contains(&r.id));
        let record = GreetingRecord::from_new(id, record);
        self.content.records.push(record.clone());

        if let Err(e) = self.save() {
            self.content.records = previous;
            return Err(e);
        }
        Ok(record)
    }

    // Every mutation is already written; make it durable.
    fn flush(&mut self) -> StorageResult<()> {
        if self.path.exists() {
            fs::File::open(&self.path)?.sync_all()?;
        }
        Ok(())
    }
}
