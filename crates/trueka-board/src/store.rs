use tracing::{debug, error, info, warn};
use trueka_core::SkillEntry;

use crate::slots::SnapshotSlots;

/// The authoritative, ordered list of posted skills.
///
/// The list is append-only. After every [`add`](Self::add) the whole list is
/// serialized and written over the snapshot slot; there is no incremental diff.
pub struct SkillStore {
    entries: Vec<SkillEntry>,
    slots: Box<dyn SnapshotSlots>,
    slot: String,
}

impl SkillStore {
    /// Open the store, loading whatever the slot currently holds.
    ///
    /// A missing, unreadable or malformed snapshot yields an empty board.
    pub fn open(slots: Box<dyn SnapshotSlots>, slot: impl Into<String>) -> Self {
        let slot = slot.into();
        let entries = load(slots.as_ref(), &slot);
        info!(slot = %slot, count = entries.len(), "skill store opened");
        Self {
            entries,
            slots,
            slot,
        }
    }

    /// Append an entry and persist the full list.
    ///
    /// The entry is trusted as already validated. If persisting fails the
    /// entry stays in memory for the rest of the session and the write error
    /// is returned so a one-shot caller can report it.
    pub fn add(&mut self, entry: SkillEntry) -> trueka_core::Result<()> {
        debug!(name = %entry.name, user = %entry.user, kind = %entry.kind, "adding skill");
        self.entries.push(entry);
        self.persist().inspect_err(|e| {
            error!(slot = %self.slot, error = %e, "failed to persist skill snapshot");
        })
    }

    /// Serialize the full list and overwrite the snapshot slot.
    pub fn persist(&self) -> trueka_core::Result<()> {
        let raw = encode(&self.entries)?;
        self.slots.write(&self.slot, &raw)?;
        debug!(slot = %self.slot, count = self.entries.len(), "snapshot persisted");
        Ok(())
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[SkillEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Name of the slot this store mirrors into.
    pub fn slot(&self) -> &str {
        &self.slot
    }
}

fn load(slots: &dyn SnapshotSlots, slot: &str) -> Vec<SkillEntry> {
    match slots.read(slot) {
        Ok(Some(raw)) => match decode(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(slot, error = %e, "snapshot is malformed, starting empty");
                Vec::new()
            }
        },
        Ok(None) => {
            debug!(slot, "no snapshot yet, starting empty");
            Vec::new()
        }
        Err(e) => {
            warn!(slot, error = %e, "failed to read snapshot, starting empty");
            Vec::new()
        }
    }
}

/// Snapshot text for a list of entries.
pub fn encode(entries: &[SkillEntry]) -> trueka_core::Result<String> {
    Ok(serde_json::to_string(entries)?)
}

/// Parse snapshot text back into entries.
pub fn decode(raw: &str) -> trueka_core::Result<Vec<SkillEntry>> {
    Ok(serde_json::from_str(raw)?)
}
