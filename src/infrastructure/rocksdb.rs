use crate::domain::note::{DebtNote, NoteId, OwnerId};
use crate::domain::ports::DebtStore;
use crate::error::{IouError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing debt notes.
pub const CF_NOTES: &str = "notes";

/// A persistent debt note store backed by RocksDB.
///
/// Notes live in a dedicated column family keyed by the big-endian note id,
/// serialized as JSON. `Clone` shares the underlying `Arc<DB>`, so the store
/// is safe to hand to concurrent callers.
#[derive(Clone)]
pub struct RocksDbDebtStore {
    db: Arc<DB>,
}

impl RocksDbDebtStore {
    /// Opens or creates a RocksDB instance at the specified path, ensuring
    /// the notes column family exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_notes = ColumnFamilyDescriptor::new(CF_NOTES, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_notes])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn cf(&self) -> Result<&rocksdb::ColumnFamily> {
        self.db.cf_handle(CF_NOTES).ok_or_else(|| {
            IouError::InternalError(Box::new(std::io::Error::other(
                "notes column family not found",
            )))
        })
    }
}

#[async_trait]
impl DebtStore for RocksDbDebtStore {
    async fn store(&self, note: DebtNote) -> Result<()> {
        let cf = self.cf()?;
        let key = note.id.0.to_be_bytes();
        let value = serde_json::to_vec(&note)?;
        self.db.put_cf(cf, key, value)?;
        Ok(())
    }

    async fn get(&self, id: NoteId) -> Result<Option<DebtNote>> {
        let cf = self.cf()?;
        let key = id.0.to_be_bytes();
        match self.db.get_cf(cf, key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn all_for_owner(&self, owner: &OwnerId) -> Result<Vec<DebtNote>> {
        let cf = self.cf()?;
        let mut notes = Vec::new();
        let iter = self.db.iterator_cf(cf, rocksdb::IteratorMode::Start);

        for item in iter {
            let (_key, value) = item?;
            let note: DebtNote = serde_json::from_slice(&value)?;
            if &note.owner == owner {
                notes.push(note);
            }
        }

        // Iteration order follows the big-endian key encoding, so notes
        // already come back sorted by id.
        Ok(notes)
    }

    async fn delete(&self, id: NoteId) -> Result<Option<DebtNote>> {
        let existing = DebtStore::get(self, id).await?;
        if existing.is_some() {
            let cf = self.cf()?;
            self.db.delete_cf(cf, id.0.to_be_bytes())?;
        }
        Ok(existing)
    }
}
