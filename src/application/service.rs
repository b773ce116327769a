use crate::application::accrual::{AccrualBreakdown, compute_amount_due};
use crate::application::status::normalize_status;
use crate::domain::note::{DebtNote, NoteId, OwnerId, Status};
use crate::domain::ports::DebtStoreBox;
use crate::error::{IouError, Result};
use chrono::{DateTime, Utc};
use futures::future::join_all;
use tracing::{debug, warn};

/// Owner-scoped use cases over the debt store.
///
/// `DebtService` owns the storage backend and is the only place status
/// transitions are persisted. The accrual engine and the normalization rule
/// stay pure; this layer decides what to write back.
pub struct DebtService {
    store: DebtStoreBox,
}

impl DebtService {
    pub fn new(store: DebtStoreBox) -> Self {
        Self { store }
    }

    /// Records a new debt note.
    pub async fn create_note(&self, note: DebtNote) -> Result<DebtNote> {
        if let Some(contract) = &note.contract {
            contract.validate()?;
        }
        self.store.store(note.clone()).await?;
        debug!(id = %note.id, owner = %note.owner, "debt note created");
        Ok(note)
    }

    /// Lists all notes for an owner, deriving `overdue` where due dates have
    /// passed.
    ///
    /// Changed statuses are written back concurrently and best-effort: the
    /// writes are all dispatched, then awaited as a batch, and a failure to
    /// persist one note is logged without aborting its siblings or the
    /// listing. The returned notes always carry the derived status, whether
    /// or not the write stuck.
    pub async fn list_notes(&self, owner: &OwnerId, today: DateTime<Utc>) -> Result<Vec<DebtNote>> {
        let mut notes = self.store.all_for_owner(owner).await?;

        let mut writes = Vec::new();
        for note in &mut notes {
            let normalized = normalize_status(note, today);
            if normalized.changed {
                note.status = normalized.status;
                writes.push((note.id, self.store.store(note.clone())));
            }
        }

        let (ids, futures): (Vec<_>, Vec<_>) = writes.into_iter().unzip();
        for (id, result) in ids.into_iter().zip(join_all(futures).await) {
            if let Err(e) = result {
                warn!(id = %id, error = %e, "failed to persist overdue transition");
            }
        }

        Ok(notes)
    }

    /// Fetches a single note. `NotFound` when the id is unknown or the note
    /// belongs to a different owner.
    pub async fn get_note(&self, owner: &OwnerId, id: NoteId) -> Result<DebtNote> {
        match self.store.get(id).await? {
            Some(note) if &note.owner == owner => Ok(note),
            _ => Err(IouError::NotFound(id)),
        }
    }

    /// Computes the itemized amount due for a note as of `as_of`.
    ///
    /// Read-only and idempotent; unlike listing, this never rewrites the
    /// stored status.
    pub async fn calculate(
        &self,
        owner: &OwnerId,
        id: NoteId,
        as_of: DateTime<Utc>,
    ) -> Result<AccrualBreakdown> {
        let note = self.get_note(owner, id).await?;
        compute_amount_due(&note, as_of)
    }

    /// Replaces a note with an edited version.
    ///
    /// An incoming edit that still claims `pending` for a past due date is
    /// overridden to `overdue` before persisting. Transitions into `paid`
    /// stamp `paid_at`; transitions out of it clear the stamp.
    pub async fn update_note(
        &self,
        owner: &OwnerId,
        id: NoteId,
        mut incoming: DebtNote,
        today: DateTime<Utc>,
    ) -> Result<DebtNote> {
        let existing = self.get_note(owner, id).await?;
        incoming.id = existing.id;
        incoming.owner = existing.owner;
        if let Some(contract) = &incoming.contract {
            contract.validate()?;
        }

        let normalized = normalize_status(&incoming, today);
        if normalized.changed {
            debug!(id = %id, "pending edit with past due date overridden to overdue");
            incoming.status = normalized.status;
        }

        match incoming.status {
            Status::Paid => {
                if incoming.paid_at.is_none() {
                    incoming.paid_at = Some(today);
                }
            }
            _ => incoming.paid_at = None,
        }

        self.store.store(incoming.clone()).await?;
        Ok(incoming)
    }

    /// Deletes a note, returning the removed record.
    pub async fn delete_note(&self, owner: &OwnerId, id: NoteId) -> Result<DebtNote> {
        // Owner check first so a foreign id cannot be deleted blind.
        self.get_note(owner, id).await?;
        self.store
            .delete(id)
            .await?
            .ok_or(IouError::NotFound(id))
    }
}
