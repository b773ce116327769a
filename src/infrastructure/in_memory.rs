use crate::domain::note::{DebtNote, NoteId, OwnerId};
use crate::domain::ports::DebtStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory debt note store.
///
/// Uses `Arc<RwLock<HashMap<NoteId, DebtNote>>>` for shared concurrent
/// access. Suitable for tests and one-shot CLI runs where persistence is not
/// required.
#[derive(Default, Clone)]
pub struct InMemoryDebtStore {
    notes: Arc<RwLock<HashMap<NoteId, DebtNote>>>,
}

impl InMemoryDebtStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DebtStore for InMemoryDebtStore {
    async fn store(&self, note: DebtNote) -> Result<()> {
        let mut notes = self.notes.write().await;
        notes.insert(note.id, note);
        Ok(())
    }

    async fn get(&self, id: NoteId) -> Result<Option<DebtNote>> {
        let notes = self.notes.read().await;
        Ok(notes.get(&id).cloned())
    }

    async fn all_for_owner(&self, owner: &OwnerId) -> Result<Vec<DebtNote>> {
        let notes = self.notes.read().await;
        let mut owned: Vec<DebtNote> = notes
            .values()
            .filter(|note| &note.owner == owner)
            .cloned()
            .collect();
        owned.sort_by_key(|note| note.id);
        Ok(owned)
    }

    async fn delete(&self, id: NoteId) -> Result<Option<DebtNote>> {
        let mut notes = self.notes.write().await;
        Ok(notes.remove(&id))
    }
}
