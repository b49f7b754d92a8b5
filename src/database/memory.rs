//! In-memory record store for tests. Same ordering and id rules as the file
//! database, nothing is persisted.

use crate::database::{GreetingRecord, NewRecord, RecordId, RecordStore};
use crate::error::{StorageError, StorageResult};

#[derive(Default)]
pub struct MemoryStore {
    next_id: u64,
    records: Vec<GreetingRecord>,
    /// When set, every mutation fails with an IO error.
    fail_writes: bool,
    /// When set, only operations that insert a record fail.
    fail_appends: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn set_fail_appends(&mut self, fail: bool) {
        self.fail_appends = fail;
    }

    fn check_writable(&self, inserting: bool) -> StorageResult<()> {
        if self.fail_writes || (inserting && self.fail_appends) {
            return Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "memory store is read-only",
            )));
        }
        Ok(())
    }

    fn push(&mut self, record: NewRecord) -> GreetingRecord {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        let record = GreetingRecord::from_new(id, record);
        self.records.push(record.clone());
        record
    }
}

impl RecordStore for MemoryStore {
    fn records(&self) -> &[GreetingRecord] {
        &self.records
    }

    fn append(&mut self, record: NewRecord) -> StorageResult<GreetingRecord> {
        self.check_writable(true)?;
        Ok(self.push(record))
    }

    fn remove(&mut self, id: RecordId) -> StorageResult<bool> {
        self.check_writable(false)?;
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        Ok(self.records.len() != before)
    }

    fn replace(&mut self, stale: &[RecordId], record: NewRecord) -> StorageResult<GreetingRecord> {
        self.check_writable(true)?;
        self.records.retain(|r| !stale.contains(&r.id));
        Ok(self.push(record))
    }

    fn flush(&mut self) -> StorageResult<()> {
        self.check_writable(false)
    }
}
