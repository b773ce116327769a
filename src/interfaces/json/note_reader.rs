use crate::domain::note::DebtNote;
use crate::error::Result;
use std::io::Read;

/// Reads debt notes from a JSON source.
///
/// The source must hold a JSON array of note records in the camelCase
/// interchange shape. Contract terms are validated here so malformed
/// payloads are rejected before they can reach the accrual engine.
pub struct NoteReader<R: Read> {
    source: R,
}

impl<R: Read> NoteReader<R> {
    /// Creates a new `NoteReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Decodes and validates all notes from the source.
    pub fn notes(self) -> Result<Vec<DebtNote>> {
        let notes: Vec<DebtNote> = serde_json::from_reader(self.source)?;
        for note in &notes {
            if let Some(contract) = &note.contract {
                contract.validate()?;
            }
        }
        Ok(notes)
    }
}
