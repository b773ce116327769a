use crate::domain::note::{DebtNote, NoteId, OwnerId};
use crate::error::Result;
use async_trait::async_trait;

/// Storage port for debt notes.
///
/// Implementations must be safe to call concurrently; the service layer
/// dispatches normalization writes for sibling notes in parallel.
#[async_trait]
pub trait DebtStore: Send + Sync {
    /// Inserts or replaces a note, keyed by its id.
    async fn store(&self, note: DebtNote) -> Result<()>;
    /// Fetches a note by id, regardless of owner.
    async fn get(&self, id: NoteId) -> Result<Option<DebtNote>>;
    /// All notes recorded by the given owner.
    async fn all_for_owner(&self, owner: &OwnerId) -> Result<Vec<DebtNote>>;
    /// Removes a note, returning it if it existed.
    async fn delete(&self, id: NoteId) -> Result<Option<DebtNote>>;
}

pub type DebtStoreBox = Box<dyn DebtStore>;
