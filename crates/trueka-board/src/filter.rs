use trueka_core::{KindFilter, SkillEntry, SkillKind};

/// Entries whose kind passes `kind`, in their original order.
///
/// [`KindFilter::All`] returns every entry.
pub fn filter(entries: &[SkillEntry], kind: KindFilter) -> Vec<&SkillEntry> {
    entries.iter().filter(|e| kind.accepts(e.kind)).collect()
}

/// How many offers and seeks a list holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindCounts {
    pub offers: usize,
    pub seeks: usize,
}

pub fn count_by_kind(entries: &[SkillEntry]) -> KindCounts {
    entries
        .iter()
        .fold(KindCounts::default(), |mut counts, e| {
            match e.kind {
                SkillKind::Offer => counts.offers += 1,
                SkillKind::Seek => counts.seeks += 1,
            }
            counts
        })
}
